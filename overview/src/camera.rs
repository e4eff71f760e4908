#[cfg(test)]
#[path = "camera_test.rs"]
mod camera_test;

use serde::{Deserialize, Serialize};

use crate::geom::{Extent, Point, Size, rotate_around_center};
use crate::viewport::Viewport;

/// In-memory map view.
///
/// `center` is in map units, `resolution` in map units per CSS pixel, and
/// `rotation` in radians (counter-clockwise). Pixel y grows downward while map
/// y grows upward; pixel `(width / 2, height / 2)` is the center.
///
/// A camera answers projection queries only after [`Camera::mark_rendered`],
/// mirroring a host map that has not drawn its first frame yet.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Camera {
    pub center: Point,
    pub resolution: f64,
    #[serde(default)]
    pub rotation: f64,
    pub size: Size,
    #[serde(default)]
    pub rendered: bool,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            center: Point::new(0.0, 0.0),
            resolution: 1.0,
            rotation: 0.0,
            size: Size::new(0.0, 0.0),
            rendered: false,
        }
    }
}

impl Camera {
    #[must_use]
    pub fn new(center: Point, resolution: f64, size: Size) -> Self {
        Self { center, resolution, size, ..Self::default() }
    }

    /// Builder-style rotation setter.
    #[must_use]
    pub fn with_rotation(mut self, rotation: f64) -> Self {
        self.rotation = rotation;
        self
    }

    /// Record that a frame has been drawn.
    pub fn mark_rendered(&mut self) {
        self.rendered = true;
    }

    fn can_project(&self) -> bool {
        self.rendered && self.size.is_drawable() && self.resolution > 0.0
    }
}

impl Viewport for Camera {
    fn extent(&self) -> Option<Extent> {
        if !self.size.is_drawable() {
            return None;
        }
        let half_w = self.resolution * self.size.width / 2.0;
        let half_h = self.resolution * self.size.height / 2.0;
        let frame = Extent::new(
            self.center.x - half_w,
            self.center.y - half_h,
            self.center.x + half_w,
            self.center.y + half_h,
        );
        let corners = frame.corners().map(|c| rotate_around_center(c, self.center, self.rotation));
        Extent::bounding(&corners)
    }

    fn center(&self) -> Option<Point> {
        Some(self.center)
    }

    fn rotation(&self) -> f64 {
        self.rotation
    }

    fn pixel_size(&self) -> Option<Size> {
        self.size.is_drawable().then_some(self.size)
    }

    fn coordinate_to_pixel(&self, coordinate: Point) -> Option<Point> {
        if !self.can_project() {
            return None;
        }
        let local = rotate_around_center(coordinate, self.center, -self.rotation);
        Some(Point::new(
            self.size.width / 2.0 + (local.x - self.center.x) / self.resolution,
            self.size.height / 2.0 - (local.y - self.center.y) / self.resolution,
        ))
    }

    fn pixel_to_coordinate(&self, pixel: Point) -> Option<Point> {
        if !self.can_project() {
            return None;
        }
        let local = Point::new(
            self.center.x + (pixel.x - self.size.width / 2.0) * self.resolution,
            self.center.y + (self.size.height / 2.0 - pixel.y) * self.resolution,
        );
        Some(rotate_around_center(local, self.center, self.rotation))
    }

    fn fit_extent(&mut self, extent: Extent, size: Size) {
        if !size.is_drawable() {
            return;
        }
        let center = extent.center();
        let corners = extent.corners().map(|c| rotate_around_center(c, center, -self.rotation));
        let Some(frame) = Extent::bounding(&corners) else {
            return;
        };
        let resolution = (frame.width() / size.width).max(frame.height() / size.height);
        if resolution > 0.0 {
            self.resolution = resolution;
        }
        self.center = center;
        self.size = size;
    }

    fn set_center(&mut self, center: Point) {
        self.center = center;
    }
}
