#![allow(clippy::float_cmp)]

use std::f64::consts::FRAC_PI_4;

use super::*;
use crate::camera::Camera;
use crate::geom::Size;

fn rendered(center: Point, resolution: f64, size: Size) -> Camera {
    let mut cam = Camera::new(center, resolution, size);
    cam.mark_rendered();
    cam
}

// =============================================================
// BoxMarker
// =============================================================

#[test]
fn marker_starts_unplaced() {
    assert!(BoxMarker::new().position().is_none());
}

#[test]
fn marker_set_position_reports_change() {
    let mut m = BoxMarker::new();
    assert!(m.set_position(Point::new(1.0, 2.0)));
    assert_eq!(m.position(), Some(Point::new(1.0, 2.0)));
    assert!(!m.set_position(Point::new(1.0, 2.0)));
    assert!(m.set_position(Point::new(1.0, 3.0)));
}

// =============================================================
// box_anchor
// =============================================================

#[test]
fn anchor_is_extent_center_without_rotation() {
    let primary = rendered(Point::new(300.0, -40.0), 2.0, Size::new(100.0, 60.0));
    assert_eq!(box_anchor(&primary), Some(Point::new(300.0, -40.0)));
}

#[test]
fn anchor_of_rotated_view_stays_on_pivot() {
    // The bounding box of a rotated frame shares the frame's center, so the
    // anchor rotates about itself.
    let primary = rendered(Point::new(10.0, 20.0), 1.0, Size::new(100.0, 50.0)).with_rotation(FRAC_PI_4);
    let Some(anchor) = box_anchor(&primary) else {
        panic!("expected anchor");
    };
    assert!((anchor.x - 10.0).abs() < 1e-9);
    assert!((anchor.y - 20.0).abs() < 1e-9);
}

#[test]
fn anchor_none_for_unsized_primary() {
    let primary = Camera::default();
    assert!(box_anchor(&primary).is_none());
}

#[test]
fn anchor_ignores_render_state() {
    // Anchoring needs an extent and a center, not a projection.
    let primary = Camera::new(Point::new(5.0, 5.0), 1.0, Size::new(10.0, 10.0));
    assert_eq!(box_anchor(&primary), Some(Point::new(5.0, 5.0)));
}

// =============================================================
// box_footprint
// =============================================================

#[test]
fn footprint_is_centered_on_anchor() {
    let overview = rendered(Point::new(0.0, 0.0), 2.0, Size::new(200.0, 200.0));
    let extent = Extent::new(-40.0, -20.0, 40.0, 20.0);
    let footprint = box_footprint(Point::new(0.0, 0.0), &extent, &overview);
    assert_eq!(footprint, Some(Extent::new(80.0, 90.0, 120.0, 110.0)));
}

#[test]
fn footprint_follows_dragged_anchor() {
    let overview = rendered(Point::new(0.0, 0.0), 1.0, Size::new(200.0, 200.0));
    let extent = Extent::new(-10.0, -10.0, 10.0, 10.0);
    let Some(footprint) = box_footprint(Point::new(50.0, 0.0), &extent, &overview) else {
        panic!("expected footprint");
    };
    assert!(footprint.contains_point(Point::new(150.0, 100.0)));
    assert!(!footprint.contains_point(Point::new(100.0, 100.0)));
}

#[test]
fn footprint_none_before_render() {
    let overview = Camera::new(Point::new(0.0, 0.0), 1.0, Size::new(200.0, 200.0));
    assert!(box_footprint(Point::new(0.0, 0.0), &Extent::new(0.0, 0.0, 1.0, 1.0), &overview).is_none());
}
