#![allow(clippy::float_cmp)]

use super::*;

fn pt(x: f64, y: f64) -> Point {
    Point::new(x, y)
}

/// 200 x 100 element on a 1000 x 500 board drawn at the view origin.
fn element() -> Dimension {
    Dimension::new(200.0, 100.0)
}

fn board() -> Rect {
    Rect::new(0.0, 0.0, 1000.0, 500.0)
}

// =============================================================
// begin_reposition
// =============================================================

#[test]
fn begin_captures_offset_from_top_left() {
    let offset = begin_reposition(pt(150.0, 120.0), Rect::new(100.0, 100.0, 200.0, 100.0));
    assert_eq!(offset, pt(50.0, 20.0));
}

// =============================================================
// update_reposition: inside the board
// =============================================================

#[test]
fn move_inside_board_follows_pointer() {
    let g = update_reposition(pt(350.0, 220.0), pt(50.0, 20.0), element(), board(), 1.0).unwrap();
    assert_eq!(g.position, pt(300.0, 200.0));
    assert_eq!(g.dimension, element());
}

#[test]
fn move_to_current_position_is_idempotent() {
    // Element at (300, 200) grabbed at offset (50, 20): pointer at (350, 220).
    let offset = begin_reposition(pt(350.0, 220.0), Rect::new(300.0, 200.0, 200.0, 100.0));
    let g = update_reposition(pt(350.0, 220.0), offset, element(), board(), 1.0).unwrap();
    assert_eq!(g.position, pt(300.0, 200.0));
}

#[test]
fn position_is_relative_to_board_origin() {
    let board = Rect::new(40.0, 60.0, 1000.0, 500.0);
    let g = update_reposition(pt(390.0, 280.0), pt(50.0, 20.0), element(), board, 1.0).unwrap();
    assert_eq!(g.position, pt(300.0, 200.0));
}

#[test]
fn move_exactly_to_bottom_right_corner_is_allowed() {
    let g = update_reposition(pt(850.0, 420.0), pt(50.0, 20.0), element(), board(), 1.0).unwrap();
    assert_eq!(g.position, pt(800.0, 400.0));
}

// =============================================================
// update_reposition: boundary policy
// =============================================================

#[test]
fn right_overflow_snaps_to_right_edge() {
    let g = update_reposition(pt(950.0, 220.0), pt(50.0, 20.0), element(), board(), 1.0).unwrap();
    assert_eq!(g.position, pt(800.0, 200.0));
}

#[test]
fn bottom_overflow_snaps_to_bottom_edge() {
    let g = update_reposition(pt(350.0, 480.0), pt(50.0, 20.0), element(), board(), 1.0).unwrap();
    assert_eq!(g.position, pt(300.0, 400.0));
}

#[test]
fn overflow_on_both_axes_is_rejected() {
    let g = update_reposition(pt(950.0, 480.0), pt(50.0, 20.0), element(), board(), 1.0);
    assert!(g.is_none());
}

#[test]
fn negative_position_is_clamped_to_zero() {
    let g = update_reposition(pt(30.0, 10.0), pt(50.0, 20.0), element(), board(), 1.0).unwrap();
    assert_eq!(g.position, pt(0.0, 0.0));
}

#[test]
fn element_larger_than_board_snaps_to_origin() {
    // Wider than the board but fits vertically: right edge snaps, x goes negative, clamped to 0.
    let wide = Dimension::new(1200.0, 100.0);
    let g = update_reposition(pt(100.0, 100.0), pt(0.0, 0.0), wide, board(), 1.0).unwrap();
    assert_eq!(g.position, pt(0.0, 100.0));
    assert_eq!(g.dimension, wide);
}

// =============================================================
// update_reposition: degenerate input
// =============================================================

#[test]
fn non_positive_pointer_is_ignored() {
    assert!(update_reposition(pt(0.0, 0.0), pt(50.0, 20.0), element(), board(), 1.0).is_none());
    assert!(update_reposition(pt(-5.0, 0.0), pt(50.0, 20.0), element(), board(), 1.0).is_none());
}

#[test]
fn one_positive_coordinate_is_a_real_move() {
    let g = update_reposition(pt(0.0, 120.0), pt(0.0, 20.0), element(), board(), 1.0).unwrap();
    assert_eq!(g.position, pt(0.0, 100.0));
}

#[test]
fn non_positive_scale_is_ignored() {
    assert!(update_reposition(pt(350.0, 220.0), pt(50.0, 20.0), element(), board(), 0.0).is_none());
}

// =============================================================
// update_reposition: scaled view
// =============================================================

#[test]
fn scaled_view_converts_to_logical_units() {
    // Board of 1000 x 500 logical drawn at 2x.
    let board = Rect::new(0.0, 0.0, 2000.0, 1000.0);
    let g = update_reposition(pt(700.0, 440.0), pt(100.0, 40.0), element(), board, 2.0).unwrap();
    assert_eq!(g.position, pt(300.0, 200.0));
    assert_eq!(g.dimension, element());
}

#[test]
fn scaled_view_boundary_uses_logical_size() {
    // At 0.5x the board is 500 x 250 view pixels; a pointer at view x 480
    // puts the element's left edge at logical 960, past the right edge.
    let board = Rect::new(0.0, 0.0, 500.0, 250.0);
    let g = update_reposition(pt(480.0, 100.0), pt(0.0, 0.0), element(), board, 0.5).unwrap();
    assert_eq!(g.position, pt(800.0, 200.0));
}
