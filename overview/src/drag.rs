//! Box dragging: the pointer gesture state machine.
//!
//! A drag session lives from pointer-down on the marker to the next pointer-up
//! anywhere on the page. The session value carries the world-bounds guard
//! captured at pointer-down and is handed back on release so the caller can
//! tear down whatever it subscribed for the session.

#[cfg(test)]
#[path = "drag_test.rs"]
mod drag_test;

use tracing::debug;

use crate::geom::{Extent, Point};
use crate::projection::Projection;
use crate::viewport::Viewport;

/// State for one active drag.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragSession {
    /// Allowed coordinate range in the projection's guard reference system.
    pub guard: Extent,
}

/// The drag gesture state machine.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub enum DragState {
    /// No drag in progress.
    #[default]
    Idle,
    /// The marker is being dragged.
    Dragging(DragSession),
}

impl DragState {
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        matches!(self, Self::Dragging(_))
    }

    /// Enter `Dragging` with a freshly captured guard.
    ///
    /// Returns `false`, leaving the current state untouched, when a drag is
    /// already active or the projection has no world extent to guard with.
    pub fn begin<J: Projection>(&mut self, projection: &J) -> bool {
        if self.is_dragging() {
            return false;
        }
        let Some(guard) = projection.world_extent() else {
            debug!("drag refused: no world extent");
            return false;
        };
        debug!(?guard, "drag started");
        *self = Self::Dragging(DragSession { guard });
        true
    }

    /// Resolve a pointer position on the overview panel to a new primary
    /// center.
    ///
    /// `None` when idle, when the panel cannot project the pixel, or when the
    /// coordinate falls outside the session guard.
    #[must_use]
    pub fn drag_to<O: Viewport, J: Projection>(&self, pixel: Point, overview: &O, projection: &J) -> Option<Point> {
        let Self::Dragging(session) = self else {
            return None;
        };
        let coordinate = overview.pixel_to_coordinate(pixel)?;
        let guarded = projection.to_guard(coordinate);
        if !session.guard.contains_point(guarded) {
            debug!(?coordinate, ?guarded, "drag outside world bounds ignored");
            return None;
        }
        Some(coordinate)
    }

    /// Return to `Idle`, handing back the finished session if there was one.
    pub fn end(&mut self) -> Option<DragSession> {
        match std::mem::take(self) {
            Self::Dragging(session) => {
                debug!("drag ended");
                Some(session)
            }
            Self::Idle => None,
        }
    }
}
