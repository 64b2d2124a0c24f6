//! Snapshot tests for the composed screen
//!
//! Uses insta + ratatui TestBackend to verify rendering output doesn't regress.

use crate::config::ResolvedConfig;
use crate::test_harness::AcceptanceTestHarness;
use crossterm::event::KeyCode;

#[test]
fn single_row_of_results_with_full_thumb() {
    // GIVEN: Query "end" (three cards, one grid row) with search blurred
    let mut harness = AcceptanceTestHarness::with_config(&ResolvedConfig::default(), "end", 80, 14);
    harness.send_key(KeyCode::Esc);

    // THEN: Cards fill the first row and the thumb spans the whole track
    insta::assert_snapshot!(harness.render_to_string(), @r#"
    ┌ Search ────────────────────────────────────────────────────────┐┌────────────┐
    │end                                                             ││Filter ▾    │
    └────────────────────────────────────────────────────────────────┘└────────────┘
    ┌ 3 words ─────────────────────────────────────────────────────────────────────┐
    │┌───────────────────────┐┌───────────────────────┐┌─────────────────────────┐█│
    ││friend  noun           ││end  noun              ││send  verb               │█│
    ││Lean on Me             ││Lean on Me             ││Lean on Me               │█│
    ││- Bill Withers         ││- Bill Withers         ││- Bill Withers           │█│
    ││                       ││                       ││                         │█│
    │└───────────────────────┘└───────────────────────┘└─────────────────────────┘█│
    │                                                                             █│
    │                                                                             █│
    └──────────────────────────────────────────────────────────────────────────────┘
     ←↑↓→ select · Enter lyrics · j/k scroll · f filter · / search · q quit
    "#);
}

#[test]
fn dragged_thumb_keeps_cards_aligned_with_scrollbar() {
    // GIVEN: 80x24 with the full catalog
    let mut harness = AcceptanceTestHarness::new();
    harness.send_key(KeyCode::Esc);

    // WHEN: Thumb dragged to the end of the track
    harness.drag_scrollbar(5, &[23]);
    let output = harness.render_to_string();
    let lines: Vec<&str> = output.lines().collect();

    // THEN: The last card row sits on the bottom edge of the grid
    assert!(lines[16].contains("┌"));
    assert!(lines[17].contains("help  verb"));
    assert!(lines[11].contains("carry  verb"));
    assert!(lines[21].contains("└"));
    assert!(lines[4].ends_with("││"));
    assert!(lines[21].ends_with("█│"));
}
