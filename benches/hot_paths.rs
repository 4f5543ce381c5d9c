//! Benchmarks for the grid's per-event hot paths
//!
//! - pixel → nibble hit-testing (every mouse move during a drag)
//! - selection polygon generation (every repaint with a block selected)
//! - the Msg → update loop for typing and arrow keys
//! - text rendering of a large buffer
//!
//! Run with: cargo bench hot_paths

use hexgrid::dump::render_text;
use hexgrid::grid::{GridLayout, HexEditorState, Point, SelectionShape};
use hexgrid::messages::{Direction, DocumentMsg, EditorMsg, Msg};
use hexgrid::model::HexModel;
use hexgrid::update::update;

#[global_allocator]
static ALLOC: divan::AllocProfiler = divan::AllocProfiler::system();

fn main() {
    divan::main();
}

fn layout() -> GridLayout {
    GridLayout::new(16, 10.0, 20.0)
}

// ============================================================================
// Hit-testing
// ============================================================================

#[divan::bench]
fn pixel_to_nibble_sweep(bencher: divan::Bencher) {
    let layout = layout();
    let points: Vec<Point> = (0..1000)
        .map(|i| Point::new(90.0 + (i % 490) as f64, (i / 10) as f64 * 7.0))
        .collect();

    bencher.bench_local(|| {
        let mut hits = 0usize;
        for &p in &points {
            if let Some(n) = layout.pixel_to_nibble_index(divan::black_box(p)) {
                hits = hits.wrapping_add(n);
            }
        }
        hits
    });
}

#[divan::bench]
fn pixel_to_byte_offset_char_band(bencher: divan::Bencher) {
    let layout = layout();
    bencher.bench_local(|| {
        let mut sum = 0usize;
        for i in 0..1000 {
            let p = Point::new(590.0 + (i % 160) as f64, (i / 16) as f64 * 20.0);
            sum = sum.wrapping_add(layout.pixel_to_byte_offset(p, 100_000).unwrap_or(0));
        }
        sum
    });
}

// ============================================================================
// Selection geometry
// ============================================================================

#[divan::bench(args = [10, 20, 22, 4096])]
fn selection_shape(end: usize) -> SelectionShape {
    SelectionShape::compute(&layout(), divan::black_box(5), divan::black_box(end))
}

// ============================================================================
// Update loop
// ============================================================================

#[divan::bench(args = [100, 1000])]
fn update_typing(iterations: usize) {
    let mut model = HexModel::new(vec![0u8; 64 * 1024]);
    for i in 0..iterations {
        let ch = char::from_digit((i % 16) as u32, 16).unwrap_or('0');
        let cmd = update(&mut model, Msg::Document(DocumentMsg::HexDigit(ch)));
        divan::black_box(cmd);
    }
    divan::black_box(&model);
}

#[divan::bench(args = [100, 1000])]
fn update_shift_arrows(iterations: usize) {
    let mut model = HexModel::new(vec![0u8; 64 * 1024]);
    for _ in 0..iterations {
        let cmd = update(
            &mut model,
            Msg::Editor(EditorMsg::MoveCursorWithSelection(Direction::Down)),
        );
        divan::black_box(cmd);
    }
    divan::black_box(&model);
}

// ============================================================================
// Text rendering
// ============================================================================

#[divan::bench(args = [1024, 64 * 1024])]
fn render_text_dump(len: usize) -> usize {
    let bytes: Vec<u8> = (0..len).map(|i| i as u8).collect();
    let mut state = HexEditorState::new(bytes, layout());
    state.select_range(100, len / 2);
    render_text(&state).len()
}
