//! First-fit placement of new elements on an occupancy grid.
//!
//! The board is rasterised into one cell per logical unit. Cells covered by
//! existing elements are marked with floor truncation of each rectangle's
//! edges (`[floor(y), floor(y + h)) x [floor(x), floor(x + w))`), which can
//! under- or over-mark boundary cells for fractional geometry. Candidates are
//! scanned row-major from the top-left corner and the first fully free slot
//! wins. When nothing fits the element goes to `(0, 0)` and overlaps.
//!
//! A summed-area table over the grid answers "is this block free" in constant
//! time, so the scan order and result are those of a cell-by-cell check.

#[cfg(test)]
#[path = "placement_test.rs"]
mod placement_test;

use tracing::warn;

use crate::doc::{Element, Geometry};
use crate::geometry::{Dimension, Point, Rect};

/// Find a position for an element of `requested` size that doesn't overlap
/// `existing` on a board of size `board`. The dimension is returned unchanged.
#[must_use]
pub fn place(requested: Dimension, existing: &[Element], board: Dimension) -> Geometry {
    let grid = OccupancyGrid::build(board, existing.iter().map(Element::rect));
    if let Some(position) = grid.first_free(requested) {
        return Geometry { position, dimension: requested };
    }
    warn!(
        width = requested.width,
        height = requested.height,
        existing = existing.len(),
        "no free slot for new element; placing at origin"
    );
    Geometry { position: Point::default(), dimension: requested }
}

/// Cell count for a logical length, truncated toward zero. Non-finite and
/// negative lengths count as zero cells.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn cells(length: f64) -> usize {
    if length.is_finite() && length > 0.0 { length.floor() as usize } else { 0 }
}

/// Grid index for a logical coordinate, clamped into `[0, limit]`.
fn cell_index(coord: f64, limit: usize) -> usize {
    if coord.is_nan() || coord <= 0.0 {
        return 0;
    }
    cells(coord).min(limit)
}

struct OccupancyGrid {
    board: Dimension,
    rows: usize,
    cols: usize,
    /// `(rows + 1) x (cols + 1)` prefix sums of occupied cells.
    sums: Vec<u32>,
}

impl OccupancyGrid {
    fn build(board: Dimension, occupied: impl Iterator<Item = Rect>) -> Self {
        let rows = cells(board.height);
        let cols = cells(board.width);
        let mut marked = vec![false; rows * cols];
        for rect in occupied {
            let (r0, r1) = (cell_index(rect.top(), rows), cell_index(rect.bottom(), rows));
            let (c0, c1) = (cell_index(rect.left(), cols), cell_index(rect.right(), cols));
            if c0 >= c1 {
                continue;
            }
            for row in r0..r1 {
                marked[row * cols + c0..row * cols + c1].fill(true);
            }
        }

        let stride = cols + 1;
        let mut sums = vec![0_u32; (rows + 1) * stride];
        for row in 0..rows {
            let mut run = 0_u32;
            for col in 0..cols {
                run += u32::from(marked[row * cols + col]);
                sums[(row + 1) * stride + col + 1] = sums[row * stride + col + 1] + run;
            }
        }
        Self { board, rows, cols, sums }
    }

    fn occupied_in(&self, row: usize, col: usize, height: usize, width: usize) -> u32 {
        let stride = self.cols + 1;
        let (r1, c1) = (row + height, col + width);
        self.sums[r1 * stride + c1] + self.sums[row * stride + col]
            - self.sums[row * stride + c1]
            - self.sums[r1 * stride + col]
    }

    /// Row-major first top-left cell whose `requested` block is entirely free.
    #[allow(clippy::cast_precision_loss)]
    fn first_free(&self, requested: Dimension) -> Option<Point> {
        let height = cells(requested.height);
        let width = cells(requested.width);
        if height > self.rows || width > self.cols {
            return None;
        }
        let last_row = last_start(self.board.height, requested.height)?.min(self.rows - height);
        let last_col = last_start(self.board.width, requested.width)?.min(self.cols - width);
        for row in 0..=last_row {
            for col in 0..=last_col {
                if self.occupied_in(row, col, height, width) == 0 {
                    return Some(Point::new(col as f64, row as f64));
                }
            }
        }
        None
    }
}

/// Last candidate start along an axis: `floor(span - requested)`, or `None`
/// when the request doesn't fit at all.
fn last_start(span: f64, requested: f64) -> Option<usize> {
    let room = span - requested.max(0.0);
    if room.is_nan() || room < 0.0 {
        return None;
    }
    Some(cells(room))
}
