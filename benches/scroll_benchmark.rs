//! Scrollbar drag and render benchmarks.
//!
//! Measures one drag step (pointer move, container update, indicator sync)
//! and one full frame with a thumb drag in progress, over a grid much longer
//! than the viewport.
//!
//! Run with: cargo bench --bench scroll_benchmark

#![allow(missing_docs)] // criterion macros generate undocumented items

use criterion::{black_box, criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use rhymefinder::config::ResolvedConfig;
use rhymefinder::model::{catalog, WordBlock};
use rhymefinder::state::AppState;
use rhymefinder::view::{render_layout, ColorConfig, Theme};
use rhymefinder::view_state::{ScreenLayout, ScrollContainer, ScrollPositionSynchronizer};
use ratatui::backend::TestBackend;
use ratatui::layout::Rect;
use ratatui::Terminal;

/// Catalog repeated `copies` times, leaked for the 'static lifetime AppState wants.
fn large_catalog(copies: usize) -> &'static [WordBlock] {
    let blocks: Vec<WordBlock> = catalog()
        .iter()
        .copied()
        .cycle()
        .take(catalog().len() * copies)
        .collect();
    Box::leak(blocks.into_boxed_slice())
}

/// Pointer moves along the whole track and back.
fn benchmark_drag_updates(c: &mut Criterion) {
    let mut group = c.benchmark_group("drag_update");

    for content in [1_000.0, 100_000.0, 10_000_000.0] {
        group.bench_with_input(BenchmarkId::new("content", content), &content, |b, &content| {
            b.iter_batched(
                || {
                    let mut container = ScrollContainer::new(content, 50.0);
                    let sync = ScrollPositionSynchronizer::attach(&mut container, 2.0);
                    (container, sync)
                },
                |(mut container, mut sync)| {
                    sync.begin_drag(0.0, container.scroll_offset());
                    for pointer in (0..50).chain((0..50).rev()) {
                        sync.update_drag(f64::from(pointer), &mut container);
                        sync.sync(&container);
                    }
                    sync.end_drag();
                    black_box(sync.geometry())
                },
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

/// One frame of the results grid with a drag in progress.
fn benchmark_render_while_dragging(c: &mut Criterion) {
    let blocks = large_catalog(500);
    let config = ResolvedConfig::default();
    let theme = Theme::new(ColorConfig::fixed(true));
    let area = Rect::new(0, 0, 200, 60);
    let layout = ScreenLayout::compute(area, config.columns, config.card_height);

    let mut group = c.benchmark_group("render_while_dragging");

    for pointer in [0.0, 20.0, 40.0] {
        group.bench_with_input(BenchmarkId::new("pointer", pointer), &pointer, |b, &pointer| {
            b.iter_batched(
                || {
                    let mut state = AppState::with_blocks(blocks, &config, "");
                    state.results.fit_to(&layout.grid);
                    state.results.begin_drag(0.0);
                    let terminal = Terminal::new(TestBackend::new(200, 60)).unwrap();
                    (state, terminal)
                },
                |(mut state, mut terminal)| {
                    state.results.update_drag(pointer);
                    state.results.fit_to(&layout.grid);
                    terminal
                        .draw(|frame| render_layout(frame, &layout, &state, &theme))
                        .unwrap();
                    black_box(terminal.backend().buffer().clone())
                },
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_drag_updates,
    benchmark_render_while_dragging
);
criterion_main!(benches);
