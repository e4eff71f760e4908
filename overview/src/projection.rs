//! Drag-guard projections.
//!
//! While the box is dragged, the pointer's map coordinate is reprojected into
//! the guard's reference system and tested against the world extent there.

#[cfg(test)]
#[path = "projection_test.rs"]
mod projection_test;

use serde::{Deserialize, Serialize};

use crate::consts::{EARTH_RADIUS_M, WEB_MERCATOR_WORLD_EXTENT};
use crate::geom::{Extent, Point};

/// World bounds plus the reprojection into the system they are expressed in.
pub trait Projection {
    /// Valid coordinate range in the guard reference system, or `None` when
    /// the host cannot report one.
    fn world_extent(&self) -> Option<Extent>;

    /// Reproject a primary-map coordinate into the guard reference system.
    fn to_guard(&self, coordinate: Point) -> Point;
}

/// Spherical Mercator (EPSG:3857) guarded in longitude/latitude (EPSG:4326).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WebMercator;

impl Projection for WebMercator {
    fn world_extent(&self) -> Option<Extent> {
        Some(Extent::from_array(WEB_MERCATOR_WORLD_EXTENT))
    }

    fn to_guard(&self, coordinate: Point) -> Point {
        let lon = (coordinate.x / EARTH_RADIUS_M).to_degrees();
        let lat = (2.0 * (coordinate.y / EARTH_RADIUS_M).exp().atan() - std::f64::consts::FRAC_PI_2).to_degrees();
        Point::new(lon, lat)
    }
}

/// Flat coordinate system guarded in its own units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Planar {
    pub world: Extent,
}

impl Planar {
    #[must_use]
    pub fn new(world: Extent) -> Self {
        Self { world }
    }
}

impl Projection for Planar {
    fn world_extent(&self) -> Option<Extent> {
        Some(self.world)
    }

    fn to_guard(&self, coordinate: Point) -> Point {
        coordinate
    }
}
