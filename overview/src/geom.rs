//! Geometry primitives shared by every part of the engine.
//!
//! Everything here is a pure function over plain values. `Point` doubles as a
//! map coordinate and as a panel pixel; which one is meant is always clear from
//! the function that produced it.

#[cfg(test)]
#[path = "geom_test.rs"]
mod geom_test;

use serde::{Deserialize, Serialize};

/// A point in either map or pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Panel dimensions in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Whether both dimensions are strictly positive.
    #[must_use]
    pub fn is_drawable(self) -> bool {
        self.width > 0.0 && self.height > 0.0
    }
}

/// Axis-aligned rectangle in map units.
///
/// Invariant: `min_x <= max_x` and `min_y <= max_y`. Use [`Extent::bounding`]
/// when the corner order is not known.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Extent {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl Extent {
    #[must_use]
    pub fn new(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Self {
        Self { min_x, min_y, max_x, max_y }
    }

    /// Build from a `[min_x, min_y, max_x, max_y]` array.
    #[must_use]
    pub fn from_array(bounds: [f64; 4]) -> Self {
        Self::new(bounds[0], bounds[1], bounds[2], bounds[3])
    }

    /// Smallest extent covering every point, or `None` for an empty slice.
    #[must_use]
    pub fn bounding(points: &[Point]) -> Option<Self> {
        let (first, rest) = points.split_first()?;
        let mut extent = Self::new(first.x, first.y, first.x, first.y);
        for p in rest {
            extent.min_x = extent.min_x.min(p.x);
            extent.min_y = extent.min_y.min(p.y);
            extent.max_x = extent.max_x.max(p.x);
            extent.max_y = extent.max_y.max(p.y);
        }
        Some(extent)
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }

    #[must_use]
    pub fn center(&self) -> Point {
        Point::new((self.min_x + self.max_x) / 2.0, (self.min_y + self.max_y) / 2.0)
    }

    /// Top-left corner in map orientation (y grows upward).
    #[must_use]
    pub fn top_left(&self) -> Point {
        Point::new(self.min_x, self.max_y)
    }

    /// Bottom-right corner in map orientation (y grows upward).
    #[must_use]
    pub fn bottom_right(&self) -> Point {
        Point::new(self.max_x, self.min_y)
    }

    /// All four corners, counter-clockwise from bottom-left.
    #[must_use]
    pub fn corners(&self) -> [Point; 4] {
        [
            Point::new(self.min_x, self.min_y),
            Point::new(self.max_x, self.min_y),
            Point::new(self.max_x, self.max_y),
            Point::new(self.min_x, self.max_y),
        ]
    }

    /// Inclusive point containment.
    #[must_use]
    pub fn contains_point(&self, point: Point) -> bool {
        point.x >= self.min_x && point.x <= self.max_x && point.y >= self.min_y && point.y <= self.max_y
    }

    /// Inclusive containment of `inner` within `self`.
    #[must_use]
    pub fn contains_extent(&self, inner: &Extent) -> bool {
        self.min_x <= inner.min_x && inner.max_x <= self.max_x && self.min_y <= inner.min_y && inner.max_y <= self.max_y
    }
}

/// Grow (`factor > 1`) or shrink (`factor < 1`) an extent about its own center.
#[must_use]
pub fn scale_from_center(extent: &Extent, factor: f64) -> Extent {
    let dx = (extent.width() / 2.0) * (factor - 1.0);
    let dy = (extent.height() / 2.0) * (factor - 1.0);
    Extent::new(extent.min_x - dx, extent.min_y - dy, extent.max_x + dx, extent.max_y + dy)
}

/// Rotate `point` by `radians` (counter-clockwise) about `center`.
#[must_use]
pub fn rotate_around_center(point: Point, center: Point, radians: f64) -> Point {
    let (sin, cos) = radians.sin_cos();
    let dx = point.x - center.x;
    let dy = point.y - center.y;
    Point::new(center.x + dx * cos - dy * sin, center.y + dx * sin + dy * cos)
}
