//! Layout configuration with defaults and environment overrides.

use crate::consts::{
    DEFAULT_BOARD_HEIGHT, DEFAULT_BOARD_WIDTH, DEFAULT_ELEMENT_HEIGHT, DEFAULT_ELEMENT_WIDTH, MIN_ELEMENT_HEIGHT,
    MIN_ELEMENT_WIDTH, SCALE_STEP,
};
use crate::geometry::Dimension;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("{key} must be a finite positive number, got {value}")]
    NotPositive { key: &'static str, value: f64 },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutConfig {
    /// Logical size of a newly created board.
    pub board: Dimension,
    /// Size requested for elements created by `insert_element`.
    pub default_element: Dimension,
    /// Resize minimum; moves that go below it on an axis are rolled back on that axis.
    pub min_element: Dimension,
    /// Amount the step controls add to or remove from the scale factor.
    pub scale_step: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            board: Dimension::new(DEFAULT_BOARD_WIDTH, DEFAULT_BOARD_HEIGHT),
            default_element: Dimension::new(DEFAULT_ELEMENT_WIDTH, DEFAULT_ELEMENT_HEIGHT),
            min_element: Dimension::new(MIN_ELEMENT_WIDTH, MIN_ELEMENT_HEIGHT),
            scale_step: SCALE_STEP,
        }
    }
}

impl LayoutConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build config from environment variables, falling back to defaults.
    ///
    /// Optional:
    /// - `STORYBOARD_BOARD_WIDTH` / `STORYBOARD_BOARD_HEIGHT`: default 1280 x 690
    /// - `STORYBOARD_DEFAULT_ELEMENT_WIDTH` / `STORYBOARD_DEFAULT_ELEMENT_HEIGHT`: default 200 x 150
    /// - `STORYBOARD_MIN_ELEMENT_WIDTH` / `STORYBOARD_MIN_ELEMENT_HEIGHT`: default 75 x 75
    /// - `STORYBOARD_SCALE_STEP`: default 0.1
    ///
    /// Values that don't parse are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NotPositive`] when a parsed value is zero,
    /// negative, or not finite.
    pub fn from_env() -> Result<Self, ConfigError> {
        let cfg = Self {
            board: Dimension::new(
                env_parse_f64("STORYBOARD_BOARD_WIDTH", DEFAULT_BOARD_WIDTH),
                env_parse_f64("STORYBOARD_BOARD_HEIGHT", DEFAULT_BOARD_HEIGHT),
            ),
            default_element: Dimension::new(
                env_parse_f64("STORYBOARD_DEFAULT_ELEMENT_WIDTH", DEFAULT_ELEMENT_WIDTH),
                env_parse_f64("STORYBOARD_DEFAULT_ELEMENT_HEIGHT", DEFAULT_ELEMENT_HEIGHT),
            ),
            min_element: Dimension::new(
                env_parse_f64("STORYBOARD_MIN_ELEMENT_WIDTH", MIN_ELEMENT_WIDTH),
                env_parse_f64("STORYBOARD_MIN_ELEMENT_HEIGHT", MIN_ELEMENT_HEIGHT),
            ),
            scale_step: env_parse_f64("STORYBOARD_SCALE_STEP", SCALE_STEP),
        };
        cfg.validate()?;
        Ok(cfg)
    }

    /// Check that every value is finite and strictly positive.
    ///
    /// # Errors
    ///
    /// Returns the first offending field as [`ConfigError::NotPositive`].
    pub fn validate(&self) -> Result<(), ConfigError> {
        let fields = [
            ("STORYBOARD_BOARD_WIDTH", self.board.width),
            ("STORYBOARD_BOARD_HEIGHT", self.board.height),
            ("STORYBOARD_DEFAULT_ELEMENT_WIDTH", self.default_element.width),
            ("STORYBOARD_DEFAULT_ELEMENT_HEIGHT", self.default_element.height),
            ("STORYBOARD_MIN_ELEMENT_WIDTH", self.min_element.width),
            ("STORYBOARD_MIN_ELEMENT_HEIGHT", self.min_element.height),
            ("STORYBOARD_SCALE_STEP", self.scale_step),
        ];
        for (key, value) in fields {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::NotPositive { key, value });
            }
        }
        Ok(())
    }

    /// Set the logical size of new boards.
    #[must_use]
    pub fn with_board(mut self, width: f64, height: f64) -> Self {
        self.board = Dimension::new(width, height);
        self
    }

    /// Set the size requested for inserted elements.
    #[must_use]
    pub fn with_default_element(mut self, width: f64, height: f64) -> Self {
        self.default_element = Dimension::new(width, height);
        self
    }

    /// Set the resize minimum.
    #[must_use]
    pub fn with_min_element(mut self, width: f64, height: f64) -> Self {
        self.min_element = Dimension::new(width, height);
        self
    }

    #[must_use]
    pub fn with_scale_step(mut self, step: f64) -> Self {
        self.scale_step = step;
        self
    }
}

fn env_parse_f64(key: &str, default: f64) -> f64 {
    match std::env::var(key) {
        Ok(raw) => raw.trim().parse::<f64>().unwrap_or(default),
        Err(_) => default,
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
