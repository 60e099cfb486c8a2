//! Layout engine for the storyboard canvas editor.
//!
//! A fixed-size board holds axis-aligned elements that the user selects,
//! drags, and resizes through eight handles while the whole board is drawn at
//! a manual or best-fit scale inside a viewport. This crate owns the geometry
//! for all of that and nothing else: the host forwards pointer events and
//! draws whatever the engine's board snapshot, scale factor and active id say.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | [`engine::EngineCore`], the stateful entry point, and its [`engine::Action`]s |
//! | [`doc`] | Elements, boards, and the copy-on-write [`doc::BoardState`] store |
//! | [`scale`] | Best-fit / manual scale factor and view <-> logical conversions |
//! | [`placement`] | First-fit occupancy-grid placement of new elements |
//! | [`reposition`] | Drag-reposition geometry |
//! | [`resize`] | Eight-handle resize geometry with minimum-size rollback |
//! | [`input`] | Resize handles, gesture sessions, and the gesture state machine |
//! | [`geometry`] | Points, dimensions, rectangles, clamping and rounding |
//! | [`config`] | [`config::LayoutConfig`] defaults and environment overrides |
//! | [`consts`] | Shared numeric constants (scale bounds, minimum sizes, etc.) |

pub mod config;
pub mod consts;
pub mod doc;
pub mod engine;
pub mod geometry;
pub mod input;
pub mod placement;
pub mod reposition;
pub mod resize;
pub mod scale;
