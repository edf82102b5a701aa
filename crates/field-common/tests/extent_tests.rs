//! Tests for Extent operations.

use field_common::Extent;

// ============================================================================
// Constructor and dimension tests
// ============================================================================

#[test]
fn test_extent_new() {
    let ext = Extent::new(-180.0, -90.0, 180.0, 90.0);
    assert_eq!(ext.min_x, -180.0);
    assert_eq!(ext.min_y, -90.0);
    assert_eq!(ext.max_x, 180.0);
    assert_eq!(ext.max_y, 90.0);
}

#[test]
fn test_extent_width_negative_coords() {
    let ext = Extent::new(-100.0, 0.0, -50.0, 10.0);
    assert_eq!(ext.width(), 50.0);
}

#[test]
fn test_extent_zero_dimensions() {
    let ext = Extent::new(5.0, 5.0, 5.0, 5.0);
    assert_eq!(ext.width(), 0.0);
    assert_eq!(ext.height(), 0.0);
}

#[test]
fn test_extent_center() {
    let ext = Extent::new(0.0, 0.0, 10.0, 20.0);
    assert_eq!(ext.center(), (5.0, 10.0));
}

// ============================================================================
// Intersection tests
// ============================================================================

#[test]
fn test_intersects_overlap_symmetric() {
    let a = Extent::new(0.0, 0.0, 10.0, 10.0);
    let b = Extent::new(5.0, 5.0, 15.0, 15.0);
    assert!(a.intersects(&b));
    assert!(b.intersects(&a));
}

#[test]
fn test_intersects_adjacent_edge() {
    // Touching at edge - not intersecting (open interval)
    let a = Extent::new(0.0, 0.0, 10.0, 10.0);
    let b = Extent::new(10.0, 0.0, 20.0, 10.0);
    assert!(!a.intersects(&b));
}

#[test]
fn test_intersection_contained() {
    let outer = Extent::new(0.0, 0.0, 100.0, 100.0);
    let inner = Extent::new(25.0, 25.0, 75.0, 75.0);
    assert_eq!(outer.intersection(&inner), Some(inner));
}

#[test]
fn test_intersection_disjoint_none() {
    let a = Extent::new(0.0, 0.0, 10.0, 10.0);
    let b = Extent::new(20.0, 20.0, 30.0, 30.0);
    assert!(a.intersection(&b).is_none());
}

#[test]
fn test_intersection_with_self() {
    let ext = Extent::new(0.0, 0.0, 10.0, 10.0);
    assert_eq!(ext.intersection(&ext), Some(ext));
}

// ============================================================================
// Containment and expansion tests
// ============================================================================

#[test]
fn test_contains_corner() {
    let ext = Extent::new(0.0, 0.0, 10.0, 10.0);
    assert!(ext.contains(0.0, 0.0));
    assert!(ext.contains(10.0, 10.0));
}

#[test]
fn test_contains_outside() {
    let ext = Extent::new(0.0, 0.0, 10.0, 10.0);
    assert!(!ext.contains(-1.0, 5.0));
    assert!(!ext.contains(5.0, 11.0));
}

#[test]
fn test_expand() {
    let ext = Extent::new(0.0, 0.0, 10.0, 10.0).expand(1.0);
    assert_eq!(ext, Extent::new(-1.0, -1.0, 11.0, 11.0));
}

#[test]
fn test_inverted_does_not_panic() {
    // Inverted extent (min > max) - constructor doesn't validate
    let ext = Extent::new(10.0, 10.0, 0.0, 0.0);
    assert_eq!(ext.width(), -10.0);
    assert_eq!(ext.height(), -10.0);
}
