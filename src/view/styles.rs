//! Colour scheme for the search screen.
//!
//! Card backgrounds go from light to dark blue as a card goes from idle to
//! hovered to selected.

use ratatui::style::{Color, Modifier, Style};

// ===== ColorConfig =====

/// Configuration for color output.
///
/// Determines whether colors should be enabled or disabled based on:
/// - `--no-color` CLI flag
/// - `NO_COLOR` environment variable
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorConfig {
    enabled: bool,
}

impl ColorConfig {
    /// Create a ColorConfig from CLI args and environment.
    ///
    /// Priority (first match wins):
    /// 1. `--no-color` flag (disables colors)
    /// 2. `NO_COLOR` env var (any value disables colors)
    /// 3. Default: colors enabled
    pub fn from_env_and_args(no_color_flag: bool) -> Self {
        let enabled = !no_color_flag && std::env::var_os("NO_COLOR").is_none();
        Self { enabled }
    }

    /// Colors on or off regardless of the environment.
    pub fn fixed(enabled: bool) -> Self {
        Self { enabled }
    }

    /// Check if colors are enabled.
    pub fn colors_enabled(self) -> bool {
        self.enabled
    }
}

impl Default for ColorConfig {
    fn default() -> Self {
        Self::fixed(true)
    }
}

const CARD_IDLE: Color = Color::Rgb(0x6a, 0xca, 0xea);
const CARD_HOVER: Color = Color::Rgb(0x00, 0xb8, 0xe6);
const CARD_SELECTED: Color = Color::Rgb(0x00, 0x99, 0xcc);
const ACCENT: Color = Color::Rgb(0x00, 0xbf, 0xff);
const MENU_CURRENT: Color = Color::Rgb(0xe6, 0xf7, 0xfc);

/// How a card is being interacted with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardEmphasis {
    /// Neither hovered nor selected.
    Idle,
    /// Under the mouse pointer.
    Hovered,
    /// The selected card (wins over hover).
    Selected,
}

// ===== Theme =====

/// Styles for every widget on the screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    colors: bool,
}

impl Theme {
    /// Theme honouring `config`.
    pub fn new(config: ColorConfig) -> Self {
        Self {
            colors: config.colors_enabled(),
        }
    }

    fn pick(&self, colored: Style, plain: Style) -> Style {
        if self.colors {
            colored
        } else {
            plain
        }
    }

    /// Card body.
    pub fn card(&self, emphasis: CardEmphasis) -> Style {
        let bg = match emphasis {
            CardEmphasis::Idle => CARD_IDLE,
            CardEmphasis::Hovered => CARD_HOVER,
            CardEmphasis::Selected => CARD_SELECTED,
        };
        let plain = match emphasis {
            CardEmphasis::Idle => Style::default(),
            CardEmphasis::Hovered => Style::default().add_modifier(Modifier::UNDERLINED),
            CardEmphasis::Selected => Style::default().add_modifier(Modifier::REVERSED),
        };
        self.pick(Style::default().fg(Color::White).bg(bg), plain)
    }

    /// The word heading on a card.
    pub fn card_word(&self) -> Style {
        Style::default().add_modifier(Modifier::BOLD)
    }

    /// The part-of-speech tag on a card.
    pub fn card_tag(&self) -> Style {
        self.pick(
            Style::default().fg(Color::Black).bg(Color::White),
            Style::default().add_modifier(Modifier::ITALIC),
        )
    }

    /// A highlighted word occurrence inside a lyric.
    pub fn lyric_match(&self) -> Style {
        self.pick(
            Style::default().fg(ACCENT).bg(Color::White).add_modifier(Modifier::BOLD),
            Style::default().add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
        )
    }

    /// Search bar and filter button frames.
    pub fn control(&self, focused: bool) -> Style {
        if focused {
            self.pick(Style::default().fg(ACCENT), Style::default().add_modifier(Modifier::BOLD))
        } else {
            Style::default()
        }
    }

    /// Greyed placeholder text.
    pub fn placeholder(&self) -> Style {
        self.pick(Style::default().fg(Color::DarkGray), Style::default())
    }

    /// The blinking caret.
    pub fn caret(&self) -> Style {
        Style::default().add_modifier(Modifier::REVERSED)
    }

    /// A dropdown row.
    pub fn menu_item(&self, highlighted: bool, current: bool) -> Style {
        if highlighted {
            self.pick(
                Style::default().fg(Color::White).bg(ACCENT),
                Style::default().add_modifier(Modifier::REVERSED),
            )
        } else if current {
            self.pick(
                Style::default().fg(Color::Black).bg(MENU_CURRENT),
                Style::default().add_modifier(Modifier::BOLD),
            )
        } else {
            Style::default()
        }
    }

    /// Scrollbar thumb; brighter while dragged.
    pub fn thumb(&self, dragging: bool) -> Style {
        let color = if dragging { CARD_SELECTED } else { ACCENT };
        self.pick(Style::default().fg(color), Style::default())
    }

    /// Scrollbar track.
    pub fn track(&self) -> Style {
        self.pick(Style::default().fg(Color::DarkGray), Style::default())
    }

    /// Status line.
    pub fn status(&self) -> Style {
        self.pick(Style::default().fg(Color::Gray), Style::default())
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::new(ColorConfig::default())
    }
}

// ===== Tests =====
