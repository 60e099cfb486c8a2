use serde_json::json;
use tracing::debug;
use uuid::Uuid;

use crate::config::LayoutConfig;
use crate::doc::{Board, BoardError, BoardState, Element, ElementId, Geometry};
use crate::geometry::{Dimension, Point, Rect};
use crate::input::{InputState, RepositionSession, ResizeHandle, ResizeSession};
use crate::reposition::{begin_reposition, update_reposition};
use crate::resize::update_resize;
use crate::scale::{self, ScaleControls, ScaleOutput};

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

/// Actions returned from engine operations for the host to process.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    ElementCreated(Element),
    ElementUpdated { id: ElementId, geometry: Geometry },
    ElementDeleted { id: ElementId },
    ActiveChanged(Option<ElementId>),
    ScaleChanged(ScaleControls),
    RenderNeeded,
}

/// The storyboard layout engine.
///
/// Construct one per board and hand it to whatever drives input and drawing.
/// Every operation runs to completion and commits a whole new board snapshot
/// before returning.
pub struct EngineCore {
    pub state: BoardState,
    pub config: LayoutConfig,
    pub input: InputState,
    /// Size of the area the board is drawn into, in view pixels.
    pub viewport: Dimension,
    /// View-space position of the scaled board's top-left corner.
    pub board_origin: Point,
}

impl Default for EngineCore {
    fn default() -> Self {
        let config = LayoutConfig::default();
        let board = Board {
            id: Uuid::new_v4(),
            dimension: config.board,
            elements: Vec::new(),
        };
        Self::with_board(config, board)
    }
}

impl EngineCore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Engine with an empty board sized from `config`.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError`] if the configured board size is invalid.
    pub fn with_config(config: LayoutConfig) -> Result<Self, BoardError> {
        let board = Board::new(config.board)?;
        Ok(Self::with_board(config, board))
    }

    /// Engine over an existing board.
    #[must_use]
    pub fn with_board(config: LayoutConfig, board: Board) -> Self {
        Self {
            state: BoardState::new(board),
            config,
            input: InputState::Idle,
            viewport: config.board,
            board_origin: Point::default(),
        }
    }

    // --- Elements ---

    /// Insert an element of the configured default size at the first free
    /// slot and make it active.
    pub fn insert_element(&mut self) -> Vec<Action> {
        let id = Uuid::new_v4();
        self.insert(id, json!({ "text": format!("Element ({id})") }))
    }

    /// Insert an element carrying `content`.
    pub fn insert_element_with(&mut self, content: serde_json::Value) -> Vec<Action> {
        self.insert(Uuid::new_v4(), content)
    }

    fn insert(&mut self, id: ElementId, content: serde_json::Value) -> Vec<Action> {
        self.input = InputState::Idle;
        let element = self.state.insert_element(id, self.config.default_element, content);
        vec![Action::ElementCreated(element), Action::ActiveChanged(Some(id)), Action::RenderNeeded]
    }

    /// Delete an element. The active element is cleared either way.
    pub fn delete_element(&mut self, id: &ElementId) -> Vec<Action> {
        let was_active = self.state.active_id();
        self.input = InputState::Idle;
        let removed = self.state.delete_element(id);

        let mut actions = Vec::new();
        if removed.is_some() {
            actions.push(Action::ElementDeleted { id: *id });
        }
        if was_active.is_some() {
            actions.push(Action::ActiveChanged(None));
        }
        if !actions.is_empty() {
            actions.push(Action::RenderNeeded);
        }
        actions
    }

    /// Delete whichever element is active. No-op when nothing is.
    pub fn delete_active_element(&mut self) -> Vec<Action> {
        match self.state.active_id() {
            Some(id) => self.delete_element(&id),
            None => Vec::new(),
        }
    }

    /// Replace an element's geometry. No-op for unknown ids.
    pub fn replace_element(&mut self, id: &ElementId, geometry: Geometry) -> Vec<Action> {
        if !self.state.replace_element(id, geometry) {
            return Vec::new();
        }
        vec![Action::ElementUpdated { id: *id, geometry }, Action::RenderNeeded]
    }

    /// Select an element, or clear the selection with `None`. Any gesture in
    /// progress is dropped when the selection changes.
    pub fn set_active_element(&mut self, id: Option<ElementId>) -> Vec<Action> {
        if self.state.active_id() == id {
            return Vec::new();
        }
        if !self.state.set_active(id) {
            return Vec::new();
        }
        self.input = InputState::Idle;
        vec![Action::ActiveChanged(id), Action::RenderNeeded]
    }

    // --- Scale ---

    /// Update the viewport size and where the scaled board sits inside it.
    pub fn set_viewport(&mut self, viewport: Dimension, board_origin: Point) -> Vec<Action> {
        self.viewport = viewport;
        self.board_origin = board_origin;
        self.sync_scale()
    }

    /// Current scale factor and scaled board size, computed from the stored controls.
    #[must_use]
    pub fn scale(&self) -> ScaleOutput {
        scale::compute_scale(self.viewport, self.state.board().dimension, self.state.scale_controls())
    }

    /// Recompute the scale and, in best-fit mode, write a changed factor back
    /// into the controls.
    pub fn sync_scale(&mut self) -> Vec<Action> {
        let controls = self.state.scale_controls();
        if !controls.best_fit {
            return Vec::new();
        }
        let output = self.scale();
        if !self.state.record_best_fit(output.scale_factor) {
            return Vec::new();
        }
        debug!(scale_factor = output.scale_factor, "best-fit scale updated");
        vec![Action::ScaleChanged(self.state.scale_controls()), Action::RenderNeeded]
    }

    /// Store new scale controls (manual factors are clamped into the user
    /// range; best fit is recomputed from the viewport).
    pub fn set_scale_controls(&mut self, controls: ScaleControls) -> Vec<Action> {
        let before = self.state.scale_controls();
        self.state.set_scale_controls(controls);
        if controls.best_fit {
            self.sync_scale();
        }
        let after = self.state.scale_controls();
        if after == before {
            return Vec::new();
        }
        vec![Action::ScaleChanged(after), Action::RenderNeeded]
    }

    /// Increase the factor by the configured step (switches to manual).
    pub fn step_scale_up(&mut self) -> Vec<Action> {
        let next = self.state.scale_controls().stepped_up(self.config.scale_step);
        self.set_scale_controls(next)
    }

    /// Decrease the factor by the configured step (switches to manual).
    pub fn step_scale_down(&mut self) -> Vec<Action> {
        let next = self.state.scale_controls().stepped_down(self.config.scale_step);
        self.set_scale_controls(next)
    }

    /// Set a manual factor from a slider position given in percent of the track.
    pub fn set_scale_from_slider(&mut self, percent: f64) -> Vec<Action> {
        self.set_scale_controls(ScaleControls::manual(scale::scale_from_slider(percent)))
    }

    /// Switch back to best fit.
    pub fn enable_best_fit(&mut self) -> Vec<Action> {
        let current = self.state.scale_controls();
        self.set_scale_controls(ScaleControls { best_fit: true, ..current })
    }

    // --- Gestures ---

    /// Pointer pressed on an element body. A non-active element becomes
    /// active; pressing the active element starts a reposition gesture.
    pub fn on_element_pointer_down(&mut self, id: &ElementId, pointer: Point) -> Vec<Action> {
        if self.state.active_id() != Some(*id) {
            return self.set_active_element(Some(*id));
        }
        let Some(element) = self.state.board().get(id) else {
            return Vec::new();
        };
        let view_rect = self.element_view_rect(element.rect());
        let offset = begin_reposition(pointer, view_rect);
        self.input = InputState::Repositioning(RepositionSession { id: *id, offset });
        Vec::new()
    }

    /// Pointer pressed on one of the active element's resize handles.
    pub fn on_handle_pointer_down(&mut self, handle: ResizeHandle) -> Vec<Action> {
        let Some(id) = self.state.active_id() else {
            return Vec::new();
        };
        self.input = InputState::Resizing(ResizeSession::new(id, handle));
        Vec::new()
    }

    /// Pointer moved (view pixels). Drives the gesture in progress, if any.
    pub fn on_pointer_move(&mut self, pointer: Point) -> Vec<Action> {
        match self.input {
            InputState::Idle => Vec::new(),
            InputState::Repositioning(session) => self.reposition_to(session, pointer),
            InputState::Resizing(session) => self.resize_to(session, pointer),
        }
    }

    /// Pointer released. A resize re-applies its last accepted geometry; every
    /// gesture ends here.
    pub fn on_pointer_up(&mut self) -> Vec<Action> {
        let input = std::mem::take(&mut self.input);
        let InputState::Resizing(session) = input else {
            return Vec::new();
        };
        match session.last_good() {
            Some(geometry) => self.replace_element(&session.id, geometry),
            None => Vec::new(),
        }
    }

    fn reposition_to(&mut self, session: RepositionSession, pointer: Point) -> Vec<Action> {
        let Some(element) = self.state.board().get(&session.id) else {
            self.input = InputState::Idle;
            return Vec::new();
        };
        let scale = self.scale();
        let board_view = Rect::from_parts(self.board_origin, scale.scaled_dimension);
        match update_reposition(pointer, session.offset, element.dimension, board_view, scale.scale_factor) {
            Some(geometry) => self.replace_element(&session.id, geometry),
            None => Vec::new(),
        }
    }

    fn resize_to(&mut self, mut session: ResizeSession, pointer: Point) -> Vec<Action> {
        let Some(element) = self.state.board().get(&session.id) else {
            self.input = InputState::Idle;
            return Vec::new();
        };
        let scale = self.scale();
        let logical = scale.view_to_logical(pointer - self.board_origin);
        let result = update_resize(
            session.handle,
            logical,
            element.rect(),
            self.state.board().rect(),
            self.config.min_element,
        );
        let committed = session.record(result);
        self.input = InputState::Resizing(session);
        match committed {
            Some(geometry) => self.replace_element(&session.id, geometry),
            None => Vec::new(),
        }
    }

    /// Where a logical element rectangle is drawn, in view pixels.
    fn element_view_rect(&self, logical: Rect) -> Rect {
        let scale = self.scale();
        let origin = scale.logical_to_view(logical.origin());
        Rect::from_parts(
            Point::new(self.board_origin.x + origin.x, self.board_origin.y + origin.y),
            logical.size().scaled(scale.scale_factor),
        )
    }

    // --- Queries ---

    #[must_use]
    pub fn board(&self) -> &Board {
        self.state.board()
    }

    /// The currently active element id, if any.
    #[must_use]
    pub fn active_element(&self) -> Option<ElementId> {
        self.state.active_id()
    }

    #[must_use]
    pub fn element(&self, id: &ElementId) -> Option<&Element> {
        self.state.board().get(id)
    }

    #[must_use]
    pub fn scale_controls(&self) -> ScaleControls {
        self.state.scale_controls()
    }

    /// Elements in the order they should be painted (active element last).
    #[must_use]
    pub fn draw_order(&self) -> Vec<&Element> {
        self.state.board().draw_order(self.state.active_id())
    }
}
