//! View scale: best-fit / manual scale factor and logical <-> view conversions.
//!
//! The board has a fixed logical size. It is drawn inside a viewport of a
//! different size at `scale_factor`, so one logical unit covers
//! `scale_factor` view pixels. Best fit picks the largest factor that still
//! shows the whole board, bounded to `[SCALE_ABSOLUTE_MIN, SCALE_ABSOLUTE_MAX]`.
//! Manual factors chosen by the user live in the narrower
//! `[SCALE_USER_MIN, SCALE_USER_MAX]` range and are rounded to one decimal.

#[cfg(test)]
#[path = "scale_test.rs"]
mod scale_test;

use serde::{Deserialize, Serialize};

use crate::consts::{SCALE_ABSOLUTE_MAX, SCALE_ABSOLUTE_MIN, SCALE_USER_MAX, SCALE_USER_MIN};
use crate::geometry::{Dimension, Point, clamp, percentage_of, round_to_decimal, value_from_percentage};

/// User-facing scale settings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScaleControls {
    /// When set, `scale_factor` mirrors the last best-fit computation.
    pub best_fit: bool,
    pub scale_factor: f64,
}

impl Default for ScaleControls {
    fn default() -> Self {
        Self { best_fit: true, scale_factor: 1.0 }
    }
}

impl ScaleControls {
    /// Manual controls with `factor` clamped into the user range.
    #[must_use]
    pub fn manual(factor: f64) -> Self {
        Self { best_fit: false, scale_factor: clamp(factor, SCALE_USER_MIN, SCALE_USER_MAX) }
    }

    /// Best-fit controls. The factor is a placeholder until the next computation.
    #[must_use]
    pub fn fitted(factor: f64) -> Self {
        Self { best_fit: true, scale_factor: clamp(factor, SCALE_ABSOLUTE_MIN, SCALE_ABSOLUTE_MAX) }
    }

    /// Manual controls one `step` above the current factor.
    #[must_use]
    pub fn stepped_up(self, step: f64) -> Self {
        Self { best_fit: false, scale_factor: user_factor(self.scale_factor + step) }
    }

    /// Manual controls one `step` below the current factor.
    #[must_use]
    pub fn stepped_down(self, step: f64) -> Self {
        Self { best_fit: false, scale_factor: user_factor(self.scale_factor - step) }
    }

    #[must_use]
    pub fn can_step_up(&self) -> bool {
        self.scale_factor < SCALE_USER_MAX
    }

    #[must_use]
    pub fn can_step_down(&self) -> bool {
        self.scale_factor > SCALE_USER_MIN
    }

    /// Position of the factor on a slider whose full length is `SCALE_ABSOLUTE_MAX`,
    /// as a whole percentage.
    #[must_use]
    pub fn slider_percentage(&self) -> f64 {
        round_to_decimal(self.scale_factor / SCALE_ABSOLUTE_MAX * 100.0, 0)
    }
}

/// Round to one decimal after clamping into the user range.
#[must_use]
pub fn user_factor(value: f64) -> f64 {
    round_to_decimal(clamp(value, SCALE_USER_MIN, SCALE_USER_MAX), 1)
}

/// Scale factor for a slider at `percent` of its track.
///
/// The percentage is limited to the span the user range covers on the track.
#[must_use]
pub fn scale_from_slider(percent: f64) -> f64 {
    let min_percent = percentage_of(SCALE_USER_MIN, SCALE_ABSOLUTE_MAX);
    let max_percent = percentage_of(SCALE_USER_MAX, SCALE_ABSOLUTE_MAX);
    let percent = round_to_decimal(clamp(percent, min_percent, max_percent), 1);
    user_factor(value_from_percentage(percent, SCALE_ABSOLUTE_MAX * 100.0) / 100.0)
}

/// Scale factor for a slider head dragged to view x-coordinate `pointer_x`
/// over a track starting at `track_left` and `track_width` pixels wide.
///
/// Drag events that report `x <= 0` carry no real position and yield `None`.
#[must_use]
pub fn scale_from_slider_drag(pointer_x: f64, track_left: f64, track_width: f64) -> Option<f64> {
    if pointer_x <= 0.0 {
        return None;
    }
    Some(scale_from_slider(percentage_of(pointer_x - track_left, track_width)))
}

/// Result of a scale computation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScaleOutput {
    pub scale_factor: f64,
    /// Board size in view pixels.
    pub scaled_dimension: Dimension,
    /// The scaled board is larger than the viewport on at least one axis.
    pub has_scroll: bool,
}

impl ScaleOutput {
    /// Convert a view-space point (pixels) to logical board units.
    #[must_use]
    pub fn view_to_logical(&self, view: Point) -> Point {
        Point { x: view.x / self.scale_factor, y: view.y / self.scale_factor }
    }

    /// Convert a logical point to view pixels.
    #[must_use]
    pub fn logical_to_view(&self, logical: Point) -> Point {
        Point { x: logical.x * self.scale_factor, y: logical.y * self.scale_factor }
    }

    /// Convert a view-space distance to logical units.
    #[must_use]
    pub fn view_dist_to_logical(&self, view_dist: f64) -> f64 {
        view_dist / self.scale_factor
    }
}

/// Compute the effective scale factor and scaled board size for `viewport`.
///
/// Manual factors are used as stored (re-clamped to the absolute range so a
/// hand-built `ScaleControls` can't escape it).
#[must_use]
pub fn compute_scale(viewport: Dimension, board: Dimension, controls: ScaleControls) -> ScaleOutput {
    let scale_factor = if controls.best_fit {
        best_fit_factor(viewport, board)
    } else {
        clamp(controls.scale_factor, SCALE_ABSOLUTE_MIN, SCALE_ABSOLUTE_MAX)
    };
    let scaled_dimension = board.scaled(scale_factor);
    let has_scroll = scaled_dimension.width > viewport.width || scaled_dimension.height > viewport.height;
    ScaleOutput { scale_factor, scaled_dimension, has_scroll }
}

/// Largest factor that fits `board` inside `viewport` (contain fit), clamped
/// to the absolute range.
///
/// Board axes of zero length don't constrain the fit; a board with no usable
/// axis fits at 1.0.
#[must_use]
pub fn best_fit_factor(viewport: Dimension, board: Dimension) -> f64 {
    let fitted = [axis_ratio(viewport.width, board.width), axis_ratio(viewport.height, board.height)]
        .into_iter()
        .flatten()
        .reduce(f64::min)
        .unwrap_or(1.0);
    clamp(fitted, SCALE_ABSOLUTE_MIN, SCALE_ABSOLUTE_MAX)
}

fn axis_ratio(view: f64, board: f64) -> Option<f64> {
    (board > 0.0 && board.is_finite()).then(|| view / board)
}
