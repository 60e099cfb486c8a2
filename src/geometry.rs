//! Plain numeric and rectangle helpers shared by every engine module.
//!
//! Nothing here knows about boards or elements; these are the building blocks
//! the scale transform, placement, reposition and resize code compute with.

#[cfg(test)]
#[path = "geometry_test.rs"]
mod geometry_test;

use std::ops::Sub;

use serde::{Deserialize, Serialize};

/// A point in either view (scaled pixel) or logical board space.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, other: Point) -> Point {
        Point { x: self.x - other.x, y: self.y - other.y }
    }
}

/// Width and height in a single coordinate space.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Dimension {
    pub width: f64,
    pub height: f64,
}

impl Dimension {
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Scale both components by `factor`.
    #[must_use]
    pub fn scaled(self, factor: f64) -> Dimension {
        Dimension { width: self.width * factor, height: self.height * factor }
    }

    /// Copy with both components clamped to be non-negative.
    #[must_use]
    pub fn non_negative(self) -> Dimension {
        Dimension { width: self.width.max(0.0), height: self.height.max(0.0) }
    }
}

/// Axis-aligned rectangle: top-left origin plus size.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    #[must_use]
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }

    #[must_use]
    pub fn from_parts(origin: Point, size: Dimension) -> Self {
        Self { x: origin.x, y: origin.y, width: size.width, height: size.height }
    }

    #[must_use]
    pub fn left(&self) -> f64 {
        self.x
    }

    #[must_use]
    pub fn top(&self) -> f64 {
        self.y
    }

    #[must_use]
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    #[must_use]
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    #[must_use]
    pub fn origin(&self) -> Point {
        Point { x: self.x, y: self.y }
    }

    #[must_use]
    pub fn size(&self) -> Dimension {
        Dimension { width: self.width, height: self.height }
    }

    /// Divide every component by `factor`. Used to turn view rects into logical ones.
    #[must_use]
    pub fn unscaled(&self, factor: f64) -> Rect {
        Rect {
            x: self.x / factor,
            y: self.y / factor,
            width: self.width / factor,
            height: self.height / factor,
        }
    }
}

/// Clamp `value` into `[lower, upper]`.
///
/// Written as `max(lower, min(value, upper))` rather than `f64::clamp` so that
/// an inverted range never panics; `lower` wins in that case.
#[must_use]
pub fn clamp(value: f64, lower: f64, upper: f64) -> f64 {
    lower.max(value.min(upper))
}

/// Round half away from zero to `decimal_places` digits.
#[must_use]
pub fn round_to_decimal(value: f64, decimal_places: i32) -> f64 {
    let factor = 10_f64.powi(decimal_places);
    (value * factor).round() / factor
}

/// `part` as a percentage of `whole`.
#[must_use]
pub fn percentage_of(part: f64, whole: f64) -> f64 {
    if whole.abs() < f64::EPSILON {
        return 0.0;
    }
    part / whole * 100.0
}

/// The value that `percentage` percent of `whole` amounts to.
#[must_use]
pub fn value_from_percentage(percentage: f64, whole: f64) -> f64 {
    percentage / 100.0 * whole
}
