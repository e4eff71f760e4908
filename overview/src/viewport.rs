//! The contract the engine consumes from the mapping host.
//!
//! The primary map and the overview panel are both viewports. The engine never
//! constructs one; it queries and nudges whatever the host hands it.

use crate::geom::{Extent, Point, Size};

/// A rendered map view with a coordinate/pixel projection pair.
///
/// Queries return `None` while the view cannot answer them, typically before
/// its first rendered frame.
pub trait Viewport {
    /// Visible region in map units (bounding box of the rotated frame).
    fn extent(&self) -> Option<Extent>;

    /// Current view center in map units.
    fn center(&self) -> Option<Point>;

    /// Current view rotation in radians.
    fn rotation(&self) -> f64;

    /// Panel size in CSS pixels.
    fn pixel_size(&self) -> Option<Size>;

    fn coordinate_to_pixel(&self, coordinate: Point) -> Option<Point>;

    fn pixel_to_coordinate(&self, pixel: Point) -> Option<Point>;

    /// Fit the view so `extent` is fully visible in a panel of `size`.
    fn fit_extent(&mut self, extent: Extent, size: Size);

    /// Move the view center without changing its resolution.
    fn set_center(&mut self, center: Point);

    /// Whether the view has produced a frame it can project through.
    fn is_rendered(&self) -> bool {
        self.coordinate_to_pixel(Point::new(0.0, 0.0)).is_some()
    }
}
