//! Overview extent management: the reset calculator and the box validator.
//!
//! After every primary view change the validator decides between three
//! outcomes. A box that is too small or too large relative to the overview
//! panel forces a full reset; a correctly sized box that has drifted outside
//! the overview recenters it; otherwise nothing happens. The size check runs
//! first so an undersized, off-center box is resized rather than chased.

#[cfg(test)]
#[path = "extent_test.rs"]
mod extent_test;

use tracing::debug;

use crate::config::RatioBounds;
use crate::geom::{Extent, Size, scale_from_center};
use crate::viewport::Viewport;

/// What the validator did to the overview.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Correction {
    /// One of the viewports has not rendered yet; nothing was inspected.
    NotReady,
    /// The box left the allowed ratio range; the extent was recomputed.
    Reset,
    /// The box fits but left the overview; the overview was recentered.
    Recenter,
    /// The overview already frames the primary view correctly.
    Idle,
}

/// Fit the overview to the primary extent grown so the box sits at the
/// geometric mean of the ratio bounds.
///
/// Returns `false` without touching the overview when resets are disabled or
/// the overview has no size yet.
pub fn reset_extent<O: Viewport>(primary_extent: &Extent, overview: &mut O, bounds: &RatioBounds) -> bool {
    let Some(scale) = bounds.reset_scale() else {
        return false;
    };
    let Some(size) = overview.pixel_size() else {
        return false;
    };
    let target = scale_from_center(primary_extent, scale);
    debug!(scale, ?target, "overview extent reset");
    overview.fit_extent(target, size);
    true
}

/// Apparent size of the primary extent on the overview panel, in pixels.
#[must_use]
pub fn box_pixel_size<O: Viewport>(primary_extent: &Extent, overview: &O) -> Option<Size> {
    let top_left = overview.coordinate_to_pixel(primary_extent.top_left())?;
    let bottom_right = overview.coordinate_to_pixel(primary_extent.bottom_right())?;
    Some(Size::new((top_left.x - bottom_right.x).abs(), (top_left.y - bottom_right.y).abs()))
}

/// Inspect the box against the overview and reset or recenter as needed.
pub fn validate_extent<P: Viewport, O: Viewport>(primary: &P, overview: &mut O, bounds: &RatioBounds) -> Correction {
    if !primary.is_rendered() || !overview.is_rendered() {
        return Correction::NotReady;
    }
    let (Some(extent), Some(panel), Some(overview_extent)) =
        (primary.extent(), overview.pixel_size(), overview.extent())
    else {
        return Correction::NotReady;
    };
    let Some(box_size) = box_pixel_size(&extent, overview) else {
        return Correction::NotReady;
    };

    let too_small = box_size.width < panel.width * bounds.min() || box_size.height < panel.height * bounds.min();
    let too_large = box_size.width > panel.width * bounds.max() || box_size.height > panel.height * bounds.max();
    if too_small || too_large {
        // With resets disabled the out-of-range box is left as is.
        return if reset_extent(&extent, overview, bounds) { Correction::Reset } else { Correction::Idle };
    }

    if !overview_extent.contains_extent(&extent) {
        let Some(center) = primary.center() else {
            return Correction::Idle;
        };
        debug!(?center, "overview recentered");
        overview.set_center(center);
        return Correction::Recenter;
    }

    Correction::Idle
}
