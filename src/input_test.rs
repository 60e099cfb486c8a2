use uuid::Uuid;

use super::*;
use crate::geometry::Dimension;

// =============================================================
// ResizeHandle
// =============================================================

#[test]
fn handle_all_variants_distinct() {
    for (i, a) in ResizeHandle::ALL.iter().enumerate() {
        for (j, b) in ResizeHandle::ALL.iter().enumerate() {
            if i == j {
                assert_eq!(a, b);
            } else {
                assert_ne!(a, b);
            }
        }
    }
}

#[test]
fn side_handles_own_one_edge() {
    assert!(ResizeHandle::Top.moves_top());
    assert!(!ResizeHandle::Top.moves_bottom());
    assert!(!ResizeHandle::Top.moves_left() && !ResizeHandle::Top.moves_right());

    assert!(ResizeHandle::Bottom.moves_bottom());
    assert!(ResizeHandle::Left.moves_left());
    assert!(!ResizeHandle::Left.moves_top() && !ResizeHandle::Left.moves_bottom());
    assert!(ResizeHandle::Right.moves_right());
}

#[test]
fn corner_handles_own_two_edges() {
    let h = ResizeHandle::TopLeft;
    assert!(h.moves_top() && h.moves_left());
    assert!(!h.moves_bottom() && !h.moves_right());

    let h = ResizeHandle::BottomRight;
    assert!(h.moves_bottom() && h.moves_right());
    assert!(!h.moves_top() && !h.moves_left());

    assert!(ResizeHandle::TopRight.moves_top() && ResizeHandle::TopRight.moves_right());
    assert!(ResizeHandle::BottomLeft.moves_bottom() && ResizeHandle::BottomLeft.moves_left());
}

#[test]
fn is_corner_only_for_corners() {
    let corners: Vec<ResizeHandle> = ResizeHandle::ALL.into_iter().filter(|h| h.is_corner()).collect();
    assert_eq!(corners.len(), 4);
    assert!(!ResizeHandle::Top.is_corner());
    assert!(ResizeHandle::BottomLeft.is_corner());
}

#[test]
fn no_handle_moves_opposite_edges() {
    for h in ResizeHandle::ALL {
        assert!(!(h.moves_left() && h.moves_right()), "{h:?}");
        assert!(!(h.moves_top() && h.moves_bottom()), "{h:?}");
    }
}

#[test]
fn handle_serde_is_kebab_case() {
    let json = serde_json::to_string(&ResizeHandle::TopLeft).unwrap();
    assert_eq!(json, "\"top-left\"");
    let back: ResizeHandle = serde_json::from_str("\"bottom-right\"").unwrap();
    assert_eq!(back, ResizeHandle::BottomRight);
}

// =============================================================
// ResizeSession
// =============================================================

fn geometry(x: f64, y: f64, w: f64, h: f64) -> Geometry {
    Geometry::new(Point::new(x, y), Dimension::new(w, h))
}

#[test]
fn new_session_has_no_last_good() {
    let session = ResizeSession::new(Uuid::new_v4(), ResizeHandle::Right);
    assert!(session.last_good().is_none());
}

#[test]
fn record_keeps_accepted_geometry() {
    let mut session = ResizeSession::new(Uuid::new_v4(), ResizeHandle::Right);
    let g = geometry(0.0, 0.0, 100.0, 100.0);
    assert_eq!(session.record(Some(g)), Some(g));
    assert_eq!(session.last_good(), Some(g));
}

#[test]
fn record_rejection_keeps_previous_geometry() {
    let mut session = ResizeSession::new(Uuid::new_v4(), ResizeHandle::Right);
    let g = geometry(0.0, 0.0, 100.0, 100.0);
    session.record(Some(g));
    assert_eq!(session.record(None), None);
    assert_eq!(session.last_good(), Some(g));
}

// =============================================================
// InputState
// =============================================================

#[test]
fn input_state_default_is_idle() {
    let state = InputState::default();
    assert!(state.is_idle());
    assert!(state.target().is_none());
}

#[test]
fn input_state_target_follows_session() {
    let id = Uuid::new_v4();
    let drag = InputState::Repositioning(RepositionSession { id, offset: Point::new(1.0, 2.0) });
    assert_eq!(drag.target(), Some(id));
    assert!(!drag.is_idle());

    let resize = InputState::Resizing(ResizeSession::new(id, ResizeHandle::Top));
    assert_eq!(resize.target(), Some(id));
}
