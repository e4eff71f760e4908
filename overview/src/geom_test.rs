#![allow(clippy::float_cmp)]

use std::f64::consts::{FRAC_PI_2, PI};

use super::*;

const EPSILON: f64 = 1e-9;

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

fn point_approx_eq(a: Point, b: Point) -> bool {
    approx_eq(a.x, b.x) && approx_eq(a.y, b.y)
}

// --- Point / Size ---

#[test]
fn point_new() {
    let p = Point::new(3.0, 4.0);
    assert_eq!(p.x, 3.0);
    assert_eq!(p.y, 4.0);
}

#[test]
fn size_drawable_requires_both_dimensions() {
    assert!(Size::new(10.0, 5.0).is_drawable());
    assert!(!Size::new(0.0, 5.0).is_drawable());
    assert!(!Size::new(10.0, 0.0).is_drawable());
}

// --- Extent accessors ---

#[test]
fn extent_dimensions_and_center() {
    let e = Extent::new(-10.0, 0.0, 30.0, 20.0);
    assert_eq!(e.width(), 40.0);
    assert_eq!(e.height(), 20.0);
    assert_eq!(e.center(), Point::new(10.0, 10.0));
}

#[test]
fn extent_corners_use_map_orientation() {
    let e = Extent::new(0.0, 0.0, 100.0, 50.0);
    assert_eq!(e.top_left(), Point::new(0.0, 50.0));
    assert_eq!(e.bottom_right(), Point::new(100.0, 0.0));
}

#[test]
fn extent_from_array_orders_fields() {
    let e = Extent::from_array([-180.0, -85.0, 180.0, 85.0]);
    assert_eq!(e, Extent::new(-180.0, -85.0, 180.0, 85.0));
}

#[test]
fn bounding_of_empty_slice_is_none() {
    assert!(Extent::bounding(&[]).is_none());
}

#[test]
fn bounding_normalizes_unordered_points() {
    let e = Extent::bounding(&[Point::new(5.0, -1.0), Point::new(-3.0, 7.0), Point::new(2.0, 2.0)]);
    assert_eq!(e, Some(Extent::new(-3.0, -1.0, 5.0, 7.0)));
}

// --- Containment ---

#[test]
fn contains_point_is_inclusive() {
    let e = Extent::new(0.0, 0.0, 10.0, 10.0);
    assert!(e.contains_point(Point::new(0.0, 0.0)));
    assert!(e.contains_point(Point::new(10.0, 10.0)));
    assert!(e.contains_point(Point::new(5.0, 5.0)));
    assert!(!e.contains_point(Point::new(10.000_1, 5.0)));
    assert!(!e.contains_point(Point::new(5.0, -0.1)));
}

#[test]
fn contains_extent_is_inclusive() {
    let outer = Extent::new(0.0, 0.0, 10.0, 10.0);
    assert!(outer.contains_extent(&outer));
    assert!(outer.contains_extent(&Extent::new(2.0, 2.0, 8.0, 8.0)));
    assert!(!outer.contains_extent(&Extent::new(2.0, 2.0, 11.0, 8.0)));
    assert!(!outer.contains_extent(&Extent::new(-1.0, -1.0, 11.0, 11.0)));
}

// --- scale_from_center ---

#[test]
fn scale_by_one_is_identity() {
    let e = Extent::new(-7.5, 3.0, 12.0, 40.0);
    assert_eq!(scale_from_center(&e, 1.0), e);
}

#[test]
fn scale_grows_about_center() {
    let e = Extent::new(0.0, 0.0, 100.0, 100.0);
    let scaled = scale_from_center(&e, 2.0);
    assert_eq!(scaled, Extent::new(-50.0, -50.0, 150.0, 150.0));
}

#[test]
fn scale_shrinks_about_center() {
    let e = Extent::new(0.0, 0.0, 100.0, 40.0);
    let scaled = scale_from_center(&e, 0.5);
    assert!(approx_eq(scaled.width(), 50.0));
    assert!(approx_eq(scaled.height(), 20.0));
}

#[test]
fn scale_preserves_center_across_factors() {
    let extents = [
        Extent::new(0.0, 0.0, 100.0, 100.0),
        Extent::new(-2_000_000.0, 1_000_000.0, 3_500_000.0, 4_200_000.0),
        Extent::new(0.1, 0.2, 0.3, 0.7),
    ];
    for e in extents {
        for factor in [0.01, 0.5, 1.0, 3.651_483_7, 100.0] {
            let scaled = scale_from_center(&e, factor);
            let c = e.center();
            assert!((scaled.center().x - c.x).abs() <= EPSILON * (1.0 + c.x.abs()));
            assert!((scaled.center().y - c.y).abs() <= EPSILON * (1.0 + c.y.abs()));
        }
    }
}

// --- rotate_around_center ---

#[test]
fn rotate_by_zero_is_identity() {
    let p = Point::new(3.0, 4.0);
    assert!(point_approx_eq(rotate_around_center(p, Point::new(1.0, 1.0), 0.0), p));
}

#[test]
fn rotate_quarter_turn_counter_clockwise() {
    let p = rotate_around_center(Point::new(2.0, 1.0), Point::new(1.0, 1.0), FRAC_PI_2);
    assert!(point_approx_eq(p, Point::new(1.0, 2.0)));
}

#[test]
fn rotate_half_turn_mirrors_through_center() {
    let p = rotate_around_center(Point::new(5.0, 5.0), Point::new(0.0, 0.0), PI);
    assert!(point_approx_eq(p, Point::new(-5.0, -5.0)));
}

#[test]
fn rotate_pivot_is_fixed_point() {
    let c = Point::new(-40.0, 12.0);
    assert!(point_approx_eq(rotate_around_center(c, c, 1.234), c));
}

#[test]
fn rotate_then_unrotate_returns_original() {
    let center = Point::new(250.0, -75.0);
    for theta in [-3.0, -0.7, 0.3, 1.0, 2.5, 6.0] {
        for p in [Point::new(0.0, 0.0), Point::new(1_000.0, 42.0), Point::new(-3.5, 99.0)] {
            let back = rotate_around_center(rotate_around_center(p, center, theta), center, -theta);
            assert!(point_approx_eq(back, p));
        }
    }
}

#[test]
fn rotate_preserves_distance_to_center() {
    let center = Point::new(10.0, 10.0);
    let p = Point::new(13.0, 14.0);
    let r = rotate_around_center(p, center, 0.9);
    let before = (p.x - center.x).hypot(p.y - center.y);
    let after = (r.x - center.x).hypot(r.y - center.y);
    assert!(approx_eq(before, after));
}
