//! Selection shape tests - which polygon family a block uses and its vertices

mod common;

use common::{test_layout, test_state};
use hexgrid::grid::{Point, SelectionShape};

fn pts(coords: &[(f64, f64)]) -> Vec<Point> {
    coords.iter().map(|&(x, y)| Point::new(x, y)).collect()
}

#[test]
fn test_single_line_is_one_rectangle() {
    let shape = SelectionShape::compute(&test_layout(), 5, 10);
    assert_eq!(shape.polygons().len(), 1);
    assert!(matches!(shape, SelectionShape::SameLine(_)));
}

#[test]
fn test_full_line_rectangle_spans_band() {
    let shape = SelectionShape::compute(&test_layout(), 16, 31);
    assert_eq!(
        shape,
        SelectionShape::SameLine(pts(&[(90.0, 20.0), (570.0, 20.0), (570.0, 40.0), (90.0, 40.0)]))
    );
}

#[test]
fn test_notch_when_end_column_left_of_start() {
    let shape = SelectionShape::compute(&test_layout(), 5, 20);
    assert_eq!(
        shape,
        SelectionShape::NotchedTwoLine(
            pts(&[(240.0, 0.0), (570.0, 0.0), (570.0, 20.0), (240.0, 20.0)]),
            pts(&[(90.0, 20.0), (240.0, 20.0), (240.0, 40.0), (90.0, 40.0)]),
        )
    );
}

#[test]
fn test_adjacent_bytes_across_line_break_are_notched() {
    let shape = SelectionShape::compute(&test_layout(), 15, 16);
    assert_eq!(shape.polygons().len(), 2);
}

#[test]
fn test_two_lines_overlapping_columns_is_general() {
    let shape = SelectionShape::compute(&test_layout(), 5, 22);
    assert_eq!(
        shape,
        SelectionShape::General(pts(&[
            (240.0, 0.0),
            (570.0, 0.0),
            (570.0, 20.0),
            (300.0, 20.0),
            (300.0, 40.0),
            (90.0, 40.0),
            (90.0, 20.0),
            (240.0, 20.0),
        ]))
    );
}

#[test]
fn test_three_or_more_lines_is_general() {
    for end in [40, 47, 100] {
        let shape = SelectionShape::compute(&test_layout(), 5, end);
        assert!(
            matches!(&shape, SelectionShape::General(p) if p.len() == 8),
            "[5, {}] gave {:?}",
            end,
            shape
        );
    }
}

#[test]
fn test_shape_follows_bytes_per_line() {
    let mut state = test_state(64);
    state.select_range(5, 20);
    assert_eq!(state.selection_polygons().len(), 2);

    state.set_bytes_per_line(8);
    assert!(matches!(
        state.selection_shape(),
        Some(SelectionShape::General(_))
    ));
}

#[test]
fn test_collapsed_selection_has_no_shape() {
    let mut state = test_state(64);
    state.set_cursor_position(9);
    assert_eq!(state.selection_shape(), None);
    assert!(state.selection_polygons().is_empty());
}
