//! Document model: board elements and the in-memory board store.
//!
//! `Board` is a plain snapshot (dimension plus elements in insertion order).
//! `BoardState` owns the current snapshot together with the active-element id
//! and the scale controls. Every mutation produces a new board value through
//! `Arc::make_mut`, so a snapshot handed out to a renderer is never changed
//! underneath it; readers see either the old board or the new one.

#[cfg(test)]
#[path = "doc_test.rs"]
mod doc_test;

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::geometry::{Dimension, Point, Rect};
use crate::placement;
use crate::scale::ScaleControls;

/// Unique identifier for a board element.
pub type ElementId = Uuid;

/// Unique identifier for a board.
pub type BoardId = Uuid;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum BoardError {
    #[error("board dimension must be finite and non-negative, got {width} x {height}")]
    InvalidDimension { width: f64, height: f64 },
}

/// Position and size of an element in logical board units.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Geometry {
    pub position: Point,
    pub dimension: Dimension,
}

impl Geometry {
    #[must_use]
    pub fn new(position: Point, dimension: Dimension) -> Self {
        Self { position, dimension }
    }

    #[must_use]
    pub fn rect(&self) -> Rect {
        Rect::from_parts(self.position, self.dimension)
    }
}

/// A positioned, sized rectangle with opaque content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Element {
    pub id: ElementId,
    pub dimension: Dimension,
    /// Offset of the top-left corner from the board's top-left corner.
    pub position: Point,
    /// Host-defined payload; the engine never looks inside.
    pub content: serde_json::Value,
}

impl Element {
    #[must_use]
    pub fn geometry(&self) -> Geometry {
        Geometry { position: self.position, dimension: self.dimension }
    }

    #[must_use]
    pub fn rect(&self) -> Rect {
        Rect::from_parts(self.position, self.dimension)
    }

    /// Copy of this element moved and sized to `geometry`.
    #[must_use]
    pub fn with_geometry(&self, geometry: Geometry) -> Self {
        Self {
            position: geometry.position,
            dimension: geometry.dimension,
            ..self.clone()
        }
    }
}

/// The fixed-size canvas and the elements on it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Board {
    pub id: BoardId,
    pub dimension: Dimension,
    /// Insertion order. Only the active element is lifted above the others when drawn.
    pub elements: Vec<Element>,
}

impl Board {
    /// Create an empty board.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::InvalidDimension`] if either side is negative or
    /// not finite.
    pub fn new(dimension: Dimension) -> Result<Self, BoardError> {
        let valid = |v: f64| v.is_finite() && v >= 0.0;
        if !valid(dimension.width) || !valid(dimension.height) {
            return Err(BoardError::InvalidDimension { width: dimension.width, height: dimension.height });
        }
        Ok(Self { id: Uuid::new_v4(), dimension, elements: Vec::new() })
    }

    /// The board's own rectangle in logical units (origin at 0, 0).
    #[must_use]
    pub fn rect(&self) -> Rect {
        Rect::from_parts(Point::default(), self.dimension)
    }

    #[must_use]
    pub fn index_of(&self, id: &ElementId) -> Option<usize> {
        self.elements.iter().position(|e| &e.id == id)
    }

    #[must_use]
    pub fn get(&self, id: &ElementId) -> Option<&Element> {
        self.elements.iter().find(|e| &e.id == id)
    }

    #[must_use]
    pub fn contains(&self, id: &ElementId) -> bool {
        self.index_of(id).is_some()
    }

    /// Elements in drawing order: insertion order, with `active` moved last so
    /// it is painted above everything else.
    #[must_use]
    pub fn draw_order(&self, active: Option<ElementId>) -> Vec<&Element> {
        let (mut order, lifted): (Vec<&Element>, Vec<&Element>) =
            self.elements.iter().partition(|e| Some(e.id) != active);
        order.extend(lifted);
        order
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}

/// Single mutable store for the board, the active element and the scale controls.
#[derive(Debug, Clone)]
pub struct BoardState {
    board: Arc<Board>,
    active_id: Option<ElementId>,
    scale_controls: ScaleControls,
    /// Factor produced by the most recent best-fit computation.
    last_fit_factor: f64,
}

impl BoardState {
    #[must_use]
    pub fn new(board: Board) -> Self {
        let scale_controls = ScaleControls::default();
        Self {
            board: Arc::new(board),
            active_id: None,
            last_fit_factor: scale_controls.scale_factor,
            scale_controls,
        }
    }

    /// Current board snapshot. Later mutations leave the returned value untouched.
    #[must_use]
    pub fn snapshot(&self) -> Arc<Board> {
        Arc::clone(&self.board)
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn active_id(&self) -> Option<ElementId> {
        self.active_id
    }

    #[must_use]
    pub fn active_element(&self) -> Option<&Element> {
        self.active_id.and_then(|id| self.board.get(&id))
    }

    #[must_use]
    pub fn scale_controls(&self) -> ScaleControls {
        self.scale_controls
    }

    /// Place a new element of `requested` size, append it, and make it active.
    pub fn insert_element(&mut self, id: ElementId, requested: Dimension, content: serde_json::Value) -> Element {
        let geometry = placement::place(requested, &self.board.elements, self.board.dimension);
        let element = Element {
            id,
            dimension: geometry.dimension,
            position: geometry.position,
            content,
        };
        Arc::make_mut(&mut self.board).elements.push(element.clone());
        self.active_id = Some(element.id);
        info!(element_id = %element.id, x = element.position.x, y = element.position.y, "inserted element");
        element
    }

    /// Remove an element by id, returning it if it was present.
    ///
    /// The active id is cleared whether or not the element existed.
    pub fn delete_element(&mut self, id: &ElementId) -> Option<Element> {
        self.active_id = None;
        let index = self.board.index_of(id)?;
        let removed = Arc::make_mut(&mut self.board).elements.remove(index);
        info!(element_id = %id, remaining = self.board.len(), "deleted element");
        Some(removed)
    }

    /// Replace an element's geometry in place (same index). Returns false if
    /// the element doesn't exist.
    pub fn replace_element(&mut self, id: &ElementId, geometry: Geometry) -> bool {
        let Some(index) = self.board.index_of(id) else {
            return false;
        };
        let board = Arc::make_mut(&mut self.board);
        board.elements[index] = board.elements[index].with_geometry(geometry);
        true
    }

    /// Set or clear the active element. Ids not on the board are refused and
    /// leave the current selection unchanged; returns whether it was accepted.
    pub fn set_active(&mut self, id: Option<ElementId>) -> bool {
        if let Some(id) = id {
            if !self.board.contains(&id) {
                return false;
            }
        }
        self.active_id = id;
        true
    }

    /// Store new scale controls.
    ///
    /// Manual factors are clamped into the user range. In best-fit mode the
    /// incoming factor is ignored and the last fitted factor is stored instead.
    pub fn set_scale_controls(&mut self, controls: ScaleControls) {
        self.scale_controls = if controls.best_fit {
            ScaleControls { best_fit: true, scale_factor: self.last_fit_factor }
        } else {
            ScaleControls::manual(controls.scale_factor)
        };
    }

    /// Record a best-fit result. In best-fit mode a differing factor is
    /// written back into the controls; returns whether the controls changed.
    /// Manual controls are never overwritten.
    pub fn record_best_fit(&mut self, factor: f64) -> bool {
        self.last_fit_factor = factor;
        if !self.scale_controls.best_fit || self.scale_controls.scale_factor.to_bits() == factor.to_bits() {
            return false;
        }
        self.scale_controls.scale_factor = factor;
        true
    }
}
