//! Handle-driven resize with minimum-size enforcement.
//!
//! All coordinates are logical units in one frame shared by the pointer, the
//! element and the board. A handle moves only the edges it owns; the opposite
//! edges stay where the element's current rectangle puts them. After the edge
//! update each axis is checked against the minimum size on its own: an axis
//! that falls short is rolled back to its pre-move extent while the other
//! axis keeps its change, and a move that fails on both axes is dropped.

#[cfg(test)]
#[path = "resize_test.rs"]
mod resize_test;

use tracing::debug;

use crate::doc::Geometry;
use crate::geometry::{Dimension, Point, Rect, clamp};
use crate::input::ResizeHandle;

/// New geometry for `element` when `handle` is dragged to `pointer`.
///
/// The pointer is first clamped into `board`. The returned position is
/// relative to the board's top-left corner and never negative. Returns
/// `None` when neither axis would keep at least `min` extent.
#[must_use]
pub fn update_resize(
    handle: ResizeHandle,
    pointer: Point,
    element: Rect,
    board: Rect,
    min: Dimension,
) -> Option<Geometry> {
    let px = clamp(pointer.x, board.left(), board.right());
    let py = clamp(pointer.y, board.top(), board.bottom());

    // Edges come from the original rectangle so a corner handle never reads
    // an edge it already moved in this step.
    let (mut x1, mut y1) = (element.left(), element.top());
    let (mut x2, mut y2) = (element.right(), element.bottom());
    if handle.moves_left() {
        x1 = px;
    }
    if handle.moves_right() {
        x2 = px;
    }
    if handle.moves_top() {
        y1 = py;
    }
    if handle.moves_bottom() {
        y2 = py;
    }
    let mut width = x2 - x1;
    let mut height = y2 - y1;

    let valid_width = width >= min.width && width >= 0.0;
    let valid_height = height >= min.height && height >= 0.0;
    match (valid_width, valid_height) {
        (false, false) => {
            debug!(?handle, width, height, "resize rejected: below minimum on both axes");
            return None;
        }
        (false, true) => {
            width = element.width;
            x1 = element.left();
        }
        (true, false) => {
            height = element.height;
            y1 = element.top();
        }
        (true, true) => {}
    }

    let position = Point::new((x1 - board.left()).max(0.0), (y1 - board.top()).max(0.0));
    Some(Geometry { position, dimension: Dimension::new(width, height).non_negative() })
}
