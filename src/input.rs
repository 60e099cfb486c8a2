//! Input model: resize handles, per-gesture sessions, and the gesture state machine.
//!
//! A gesture runs from pointer-down to pointer-up on the active element.
//! `InputState` holds the session for the gesture in progress. The reposition
//! session remembers where inside the element the pointer grabbed it; the
//! resize session remembers the last geometry that passed validation so the
//! closing pointer-up can re-apply it instead of whatever degenerate position
//! that event carries.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use serde::{Deserialize, Serialize};

use crate::doc::{ElementId, Geometry};
use crate::geometry::Point;

/// One of the eight resize affordances around the active element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ResizeHandle {
    Top,
    Bottom,
    Left,
    Right,
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl ResizeHandle {
    /// Every handle, in the order they are laid out around an element.
    pub const ALL: [ResizeHandle; 8] = [
        Self::Top,
        Self::TopRight,
        Self::Right,
        Self::BottomRight,
        Self::Bottom,
        Self::BottomLeft,
        Self::Left,
        Self::TopLeft,
    ];

    /// Whether dragging this handle moves the element's left edge.
    #[must_use]
    pub fn moves_left(self) -> bool {
        matches!(self, Self::Left | Self::TopLeft | Self::BottomLeft)
    }

    /// Whether dragging this handle moves the element's right edge.
    #[must_use]
    pub fn moves_right(self) -> bool {
        matches!(self, Self::Right | Self::TopRight | Self::BottomRight)
    }

    /// Whether dragging this handle moves the element's top edge.
    #[must_use]
    pub fn moves_top(self) -> bool {
        matches!(self, Self::Top | Self::TopLeft | Self::TopRight)
    }

    /// Whether dragging this handle moves the element's bottom edge.
    #[must_use]
    pub fn moves_bottom(self) -> bool {
        matches!(self, Self::Bottom | Self::BottomLeft | Self::BottomRight)
    }

    /// Whether this is a corner handle (owns two edges).
    #[must_use]
    pub fn is_corner(self) -> bool {
        (self.moves_left() || self.moves_right()) && (self.moves_top() || self.moves_bottom())
    }
}

/// Context for an in-progress drag of the active element.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RepositionSession {
    pub id: ElementId,
    /// Pointer position relative to the element's top-left corner at grab time, in view pixels.
    pub offset: Point,
}

/// Context for an in-progress resize of the active element.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResizeSession {
    pub id: ElementId,
    pub handle: ResizeHandle,
    last_good: Option<Geometry>,
}

impl ResizeSession {
    #[must_use]
    pub fn new(id: ElementId, handle: ResizeHandle) -> Self {
        Self { id, handle, last_good: None }
    }

    /// Remember an accepted move. Rejected moves (`None`) leave the previous
    /// geometry in place. Returns the geometry to commit, if any.
    pub fn record(&mut self, result: Option<Geometry>) -> Option<Geometry> {
        let geometry = result?;
        self.last_good = Some(geometry);
        Some(geometry)
    }

    /// The most recent geometry that passed validation during this gesture.
    #[must_use]
    pub fn last_good(&self) -> Option<Geometry> {
        self.last_good
    }
}

/// Gesture state machine. At most one gesture runs at a time.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum InputState {
    /// No gesture in progress; waiting for the next pointer-down.
    #[default]
    Idle,
    /// The active element follows the pointer.
    Repositioning(RepositionSession),
    /// One handle of the active element follows the pointer.
    Resizing(ResizeSession),
}

impl InputState {
    /// Id of the element the current gesture targets.
    #[must_use]
    pub fn target(&self) -> Option<ElementId> {
        match self {
            Self::Idle => None,
            Self::Repositioning(session) => Some(session.id),
            Self::Resizing(session) => Some(session.id),
        }
    }

    #[must_use]
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }
}
