use serde::Serialize;
use tracing::{debug, info};

use crate::collapse::{Collapse, CollapseState, Presentation};
use crate::config::{ConfigError, OverviewOptions, RatioBounds};
use crate::drag::DragState;
use crate::extent::{Correction, reset_extent, validate_extent};
use crate::geom::Point;
use crate::marker::{BoxMarker, box_anchor, box_footprint};
use crate::projection::Projection;
use crate::viewport::Viewport;

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

/// Side effects returned from engine entry points for the host to apply.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Action {
    /// Place the box element at this map coordinate.
    MarkerMoved(Point),
    /// The primary view was re-centered by a drag.
    PrimaryCentered(Point),
    /// The overview extent was recomputed from the primary extent.
    OverviewReset,
    /// The overview was moved to the primary center at its current resolution.
    OverviewRecentered,
    /// A drag started: subscribe page-wide pointer move/up listeners.
    CapturePointer,
    /// The drag ended: drop the listeners added by [`Action::CapturePointer`].
    ReleasePointer,
    /// Apply new collapse classes and button label.
    PresentationChanged(Presentation),
}

/// Synchronization engine state, independent of any browser API.
///
/// `primary` and `overview` are the host's views; the engine owns only the
/// relationship between them (marker, drag session, collapse state).
pub struct EngineCore<P, O, J> {
    pub primary: P,
    pub overview: O,
    pub projection: J,
    bounds: RatioBounds,
    marker: BoxMarker,
    drag: DragState,
    collapse: Collapse,
}

impl<P: Viewport, O: Viewport, J: Projection> EngineCore<P, O, J> {
    /// Build an engine from host views and control options.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when the options carry invalid ratio bounds.
    pub fn new(primary: P, overview: O, projection: J, options: &OverviewOptions) -> Result<Self, ConfigError> {
        let bounds = options.ratio_bounds()?;
        Ok(Self {
            primary,
            overview,
            projection,
            bounds,
            marker: BoxMarker::new(),
            drag: DragState::Idle,
            collapse: Collapse::new(options.collapsed, options.collapsible),
        })
    }

    // --- Lifecycle ---

    /// First synchronization after the control is attached to a map.
    pub fn init(&mut self) -> Vec<Action> {
        info!(min_ratio = self.bounds.min(), max_ratio = self.bounds.max(), "overview attached");
        let mut actions = self.reset_extent();
        actions.push(Action::PresentationChanged(self.collapse.state().presentation()));
        self.sync_marker(&mut actions);
        actions
    }

    /// Recompute the overview extent from the primary extent.
    pub fn reset_extent(&mut self) -> Vec<Action> {
        let Some(extent) = self.primary.extent() else {
            return Vec::new();
        };
        if reset_extent(&extent, &mut self.overview, &self.bounds) {
            vec![Action::OverviewReset]
        } else {
            Vec::new()
        }
    }

    /// The primary view panned, zoomed, rotated or resized.
    ///
    /// Runs the box validator to completion before repositioning the marker,
    /// since the anchor is read against the possibly reset overview.
    pub fn on_view_changed(&mut self) -> Vec<Action> {
        let mut actions = Vec::new();
        match validate_extent(&self.primary, &mut self.overview, &self.bounds) {
            Correction::Reset => actions.push(Action::OverviewReset),
            Correction::Recenter => actions.push(Action::OverviewRecentered),
            Correction::NotReady | Correction::Idle => {}
        }
        self.sync_marker(&mut actions);
        actions
    }

    fn sync_marker(&mut self, actions: &mut Vec<Action>) {
        if !self.primary.is_rendered() || !self.overview.is_rendered() {
            return;
        }
        let Some(anchor) = box_anchor(&self.primary) else {
            return;
        };
        if self.marker.set_position(anchor) {
            actions.push(Action::MarkerMoved(anchor));
        }
    }

    // --- Pointer input ---

    /// Pointer pressed on the overview panel at `pixel`.
    ///
    /// Starts a drag only when the pixel lies on the box.
    pub fn on_pointer_down(&mut self, pixel: Point) -> Vec<Action> {
        if self.drag.is_dragging() || !self.hits_marker(pixel) {
            return Vec::new();
        }
        self.begin_drag()
    }

    /// Pointer pressed on the box element itself (the host did the hit-test).
    pub fn begin_drag(&mut self) -> Vec<Action> {
        if self.drag.begin(&self.projection) {
            vec![Action::CapturePointer]
        } else {
            Vec::new()
        }
    }

    /// Pointer moved anywhere on the page while a drag may be active.
    pub fn on_pointer_move(&mut self, pixel: Point) -> Vec<Action> {
        let Some(target) = self.drag.drag_to(pixel, &self.overview, &self.projection) else {
            return Vec::new();
        };
        let mut actions = Vec::with_capacity(2);
        if self.marker.set_position(target) {
            actions.push(Action::MarkerMoved(target));
        }
        self.primary.set_center(target);
        actions.push(Action::PrimaryCentered(target));
        actions
    }

    /// Pointer released anywhere on the page.
    pub fn on_pointer_up(&mut self) -> Vec<Action> {
        match self.drag.end() {
            Some(session) => {
                debug!(guard = ?session.guard, "drag session closed");
                vec![Action::ReleasePointer]
            }
            None => Vec::new(),
        }
    }

    fn hits_marker(&self, pixel: Point) -> bool {
        let (Some(anchor), Some(extent)) = (self.marker.position(), self.primary.extent()) else {
            return false;
        };
        box_footprint(anchor, &extent, &self.overview).is_some_and(|fp| fp.contains_point(pixel))
    }

    // --- Collapse ---

    /// The collapse/expand button was activated.
    pub fn toggle_collapse(&mut self) -> Vec<Action> {
        self.collapse.toggle().map(Action::PresentationChanged).into_iter().collect()
    }

    /// A CSS transition on the overview panel finished.
    pub fn on_transition_end(&mut self, property: &str) -> Vec<Action> {
        self.collapse.transition_end(property).map(Action::PresentationChanged).into_iter().collect()
    }

    // --- Queries ---

    #[must_use]
    pub fn marker(&self) -> BoxMarker {
        self.marker
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging()
    }

    #[must_use]
    pub fn collapse_state(&self) -> CollapseState {
        self.collapse.state()
    }

    #[must_use]
    pub fn bounds(&self) -> RatioBounds {
        self.bounds
    }
}
