//! Small line builders shared by widgets.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
};

/// A blank line.
pub fn empty_line() -> Line<'static> {
    Line::from("")
}

/// `  key   description` with the key column padded to `key_width`.
pub fn key_value_line(
    key: &'static str,
    description: &'static str,
    key_width: usize,
    key_style: Style,
    desc_style: Style,
) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("  {key:<key_width$} "), key_style),
        Span::styled(description, desc_style),
    ])
}

/// Copy rows `skip..skip + area.height` of `source` into `area` of `target`.
///
/// `source` must be `area.width` wide; cells outside either buffer are
/// skipped.
pub fn blit_rows(source: &Buffer, skip: u16, area: Rect, target: &mut Buffer) {
    let src_area = source.area;
    for dy in 0..area.height {
        let sy = src_area.y + skip + dy;
        if sy >= src_area.bottom() {
            break;
        }
        for dx in 0..area.width.min(src_area.width) {
            let sx = src_area.x + dx;
            let (Some(src), Some(dst)) = (
                source.cell((sx, sy)),
                target.cell_mut((area.x + dx, area.y + dy)),
            ) else {
                continue;
            };
            *dst = src.clone();
        }
    }
}
