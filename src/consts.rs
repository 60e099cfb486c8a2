//! Shared numeric constants for the storyboard crate.

// ── Scale ───────────────────────────────────────────────────────

/// Absolute lower bound for any scale factor, including best fit.
pub const SCALE_ABSOLUTE_MIN: f64 = 0.1;

/// Absolute upper bound for any scale factor, including best fit.
pub const SCALE_ABSOLUTE_MAX: f64 = 2.0;

/// Lowest factor a user can pick manually.
pub const SCALE_USER_MIN: f64 = 0.2;

/// Highest factor a user can pick manually.
pub const SCALE_USER_MAX: f64 = 2.0;

/// Increment applied by the step-up / step-down controls.
pub const SCALE_STEP: f64 = 0.1;

// ── Elements ────────────────────────────────────────────────────

/// Smallest width a resize may leave an element with, in logical units.
pub const MIN_ELEMENT_WIDTH: f64 = 75.0;

/// Smallest height a resize may leave an element with, in logical units.
pub const MIN_ELEMENT_HEIGHT: f64 = 75.0;

/// Width given to freshly inserted elements.
pub const DEFAULT_ELEMENT_WIDTH: f64 = 200.0;

/// Height given to freshly inserted elements.
pub const DEFAULT_ELEMENT_HEIGHT: f64 = 150.0;

// ── Board ───────────────────────────────────────────────────────

/// Logical width of a new board.
pub const DEFAULT_BOARD_WIDTH: f64 = 1280.0;

/// Logical height of a new board.
pub const DEFAULT_BOARD_HEIGHT: f64 = 690.0;
