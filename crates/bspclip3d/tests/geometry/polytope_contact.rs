use approx::assert_relative_eq;
use bspclip3d::bounding_volume::Aabb;
use bspclip3d::math::{Isometry, Point, Real, Vector};
use bspclip3d::partitioning::BspTree;
use bspclip3d::query::{Collision, ContactSearch};
use bspclip3d::shape::{Plane, Polytope};

/// The unit box clipped by the plane `x = cut`, with material `1` in front and `2` behind.
fn clipped_box(owner: u32, cut: Real) -> Polytope<u32> {
    let mut polytope = Polytope::new();
    polytope.build_box_with_isometry(
        &Isometry::identity(),
        &Aabb::new(Point::new(-1.0, -1.0, -1.0), Point::new(1.0, 1.0, 1.0)),
    );
    let tree = BspTree::split(
        Plane::new(Vector::x(), cut),
        BspTree::leaf(1),
        BspTree::leaf(2),
    );
    polytope.clip(owner, &tree);
    polytope
}

#[test]
fn unclipped_polytope_has_no_contact() {
    let mut polytope = Polytope::<u32>::new();
    polytope.build_box_with_isometry(
        &Isometry::identity(),
        &Aabb::new(Point::new(-1.0, -1.0, -1.0), Point::new(1.0, 1.0, 1.0)),
    );

    let mut best = Collision::new();
    assert!(!polytope.find_collision(&Vector::x(), &mut best, ContactSearch::Accumulate));
    assert!(!best.is_set());
    assert_eq!(best.distance, Collision::<u32>::NO_DISTANCE);

    // A leaf reached without any split only exposes the original surface.
    polytope.clip(1, &BspTree::leaf(5));
    assert!(!polytope.find_collision(&Vector::x(), &mut best, ContactSearch::Reset));
    assert!(!best.is_set());
}

#[test]
fn contact_lies_on_the_splitting_plane() {
    let mut polytope = clipped_box(5, 0.0);
    let mut best = Collision::new();

    assert!(polytope.find_collision(&Vector::x(), &mut best, ContactSearch::Accumulate));
    assert_eq!(best.object, Some(5));
    // The back half is the first volume holding the nearest vertices.
    assert_eq!(best.material, Some(2));
    assert_relative_eq!(best.distance, 0.0, epsilon = 1.0e-6);
    assert_relative_eq!(best.point.x, 0.0, epsilon = 1.0e-6);

    assert_relative_eq!(
        best.plane.normalized(1.0e-6).unwrap(),
        Plane::new(-Vector::x(), 0.0),
        epsilon = 1.0e-6
    );
}

#[test]
fn accumulated_contacts_only_get_nearer() {
    let mut polytope_a = clipped_box(1, 0.0);
    let mut polytope_b = clipped_box(2, -0.5);
    let mut best = Collision::new();

    assert!(polytope_a.find_collision(&Vector::x(), &mut best, ContactSearch::Accumulate));
    assert_relative_eq!(best.distance, 0.0, epsilon = 1.0e-6);

    assert!(polytope_b.find_collision(&Vector::x(), &mut best, ContactSearch::Accumulate));
    assert_eq!(best.object, Some(2));
    assert_relative_eq!(best.distance, -0.5, epsilon = 1.0e-6);

    let snapshot = best;
    assert!(!polytope_a.find_collision(&Vector::x(), &mut best, ContactSearch::Accumulate));
    assert_eq!(best, snapshot);

    // Searching again the same polytope with the same record finds nothing nearer.
    assert!(!polytope_b.find_collision(&Vector::x(), &mut best, ContactSearch::Accumulate));
    assert_eq!(best, snapshot);
}

#[test]
fn reset_search_ignores_the_record() {
    let mut polytope_a = clipped_box(1, 0.0);
    let mut polytope_b = clipped_box(2, -0.5);
    let mut best = Collision::new();

    assert!(polytope_b.find_collision(&Vector::x(), &mut best, ContactSearch::Accumulate));
    assert!(polytope_a.find_collision(&Vector::x(), &mut best, ContactSearch::Reset));
    assert_eq!(best.object, Some(1));
    assert_relative_eq!(best.distance, 0.0, epsilon = 1.0e-6);
}

#[test]
fn record_without_owner_is_empty() {
    let mut polytope = clipped_box(3, 0.5);
    let mut best = Collision::new();
    best.distance = -100.0;

    assert!(polytope.find_collision(&Vector::x(), &mut best, ContactSearch::Accumulate));
    assert_eq!(best.object, Some(3));
    assert_relative_eq!(best.distance, 0.5, epsilon = 1.0e-6);

    best.reset();
    assert!(!best.is_set());
    assert_eq!(best.distance, Collision::<u32>::NO_DISTANCE);
}

#[test]
fn contact_along_the_opposite_direction() {
    let mut polytope = clipped_box(1, 0.25);
    let mut best = Collision::new();

    assert!(polytope.find_collision(&-Vector::x(), &mut best, ContactSearch::Reset));
    assert_relative_eq!(best.point.x, 0.25, epsilon = 1.0e-6);
    assert_relative_eq!(best.distance, -0.25, epsilon = 1.0e-6);
    assert!(best.plane.normal.dot(&-Vector::x()) <= 1.0e-6);
}
