//! Drag-reposition: move the active element with the pointer, kept on the board.

#[cfg(test)]
#[path = "reposition_test.rs"]
mod reposition_test;

use tracing::debug;

use crate::doc::Geometry;
use crate::geometry::{Dimension, Point, Rect};

/// Start a drag: the pointer's offset from the element's top-left corner.
///
/// Both arguments are in view pixels; the offset is held for the whole gesture.
#[must_use]
pub fn begin_reposition(pointer: Point, element: Rect) -> Point {
    pointer - element.origin()
}

/// Where the dragged element lands for a pointer at `pointer`.
///
/// `pointer`, `offset` and `board` are in view pixels (`board` is where the
/// scaled board is drawn); `element` is the element's logical size. The
/// result is in logical units relative to the board's top-left corner and
/// keeps `element` as its dimension.
///
/// Returns `None` (no update) when
/// - both pointer coordinates are `<= 0`, the position drag-and-drop style
///   events report once at gesture end,
/// - the element would cross the board's right and bottom edges at once,
/// - `scale_factor` is not positive.
///
/// Crossing only one of those edges snaps the element flush against it.
/// The final coordinates never go below zero.
#[must_use]
pub fn update_reposition(
    pointer: Point,
    offset: Point,
    element: Dimension,
    board: Rect,
    scale_factor: f64,
) -> Option<Geometry> {
    if pointer.x <= 0.0 && pointer.y <= 0.0 {
        return None;
    }
    if scale_factor <= 0.0 || scale_factor.is_nan() {
        return None;
    }

    let board = board.unscaled(scale_factor);
    let mut x = pointer.x / scale_factor - offset.x / scale_factor;
    let mut y = pointer.y / scale_factor - offset.y / scale_factor;

    let past_right = x + element.width > board.right();
    let past_bottom = y + element.height > board.bottom();
    match (past_right, past_bottom) {
        (true, true) => {
            debug!(x, y, "reposition rejected: element would leave the board on both axes");
            return None;
        }
        (false, true) => y = board.bottom() - element.height,
        (true, false) => x = board.right() - element.width,
        (false, false) => {}
    }

    let position = Point::new((x - board.left()).max(0.0), (y - board.top()).max(0.0));
    Some(Geometry { position, dimension: element })
}
