//! The box marker and the position synchronizer that drives it.
//!
//! The marker is a single anchored element on the overview panel. It has no
//! rotation of its own, so its anchor is pre-rotated about the primary view's
//! pivot to stay aligned with a rotated primary frame.

#[cfg(test)]
#[path = "marker_test.rs"]
mod marker_test;

use serde::Serialize;

use crate::geom::{Extent, Point, rotate_around_center};
use crate::viewport::Viewport;

/// The box drawn on the overview panel. Holds only its anchor coordinate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct BoxMarker {
    position: Option<Point>,
}

impl BoxMarker {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current anchor in map units, if the marker has been placed.
    #[must_use]
    pub fn position(&self) -> Option<Point> {
        self.position
    }

    /// Move the anchor. Returns `true` when the position actually changed.
    pub fn set_position(&mut self, position: Point) -> bool {
        if self.position == Some(position) {
            return false;
        }
        self.position = Some(position);
        true
    }
}

/// Anchor coordinate for the marker given the primary view's current state.
///
/// `None` while the primary view has no extent or no resolvable center.
#[must_use]
pub fn box_anchor<P: Viewport>(primary: &P) -> Option<Point> {
    let extent = primary.extent()?;
    let pivot = primary.center()?;
    Some(rotate_around_center(extent.center(), pivot, primary.rotation()))
}

/// Pixel rectangle the box covers on the overview panel, centered on `anchor`.
///
/// Used to decide whether a pointer-down landed on the marker.
#[must_use]
pub fn box_footprint<O: Viewport>(anchor: Point, primary_extent: &Extent, overview: &O) -> Option<Extent> {
    let center = overview.coordinate_to_pixel(anchor)?;
    let corners = primary_extent
        .corners()
        .map(|c| overview.coordinate_to_pixel(c))
        .into_iter()
        .collect::<Option<Vec<_>>>()?;
    let projected = Extent::bounding(&corners)?;
    let half_w = projected.width() / 2.0;
    let half_h = projected.height() / 2.0;
    Some(Extent::new(center.x - half_w, center.y - half_h, center.x + half_w, center.y + half_h))
}
