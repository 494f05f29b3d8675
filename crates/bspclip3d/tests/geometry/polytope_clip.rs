use approx::assert_relative_eq;
use bspclip3d::bounding_volume::Aabb;
use bspclip3d::math::{Isometry, Point, Real, Vector};
use bspclip3d::partitioning::BspTree;
use bspclip3d::shape::{Plane, Polytope, SEED_VOLUME};

fn unit_box_polytope() -> Polytope<u32> {
    let mut polytope = Polytope::new();
    polytope.build_box_with_isometry(
        &Isometry::identity(),
        &Aabb::new(Point::new(-1.0, -1.0, -1.0), Point::new(1.0, 1.0, 1.0)),
    );
    polytope
}

fn x_plane(x: Real) -> Plane {
    Plane::new(Vector::x(), x)
}

#[test]
fn clip_by_leaf_keeps_seed_boundary() {
    let mut polytope = unit_box_polytope();
    polytope.clip(7, &BspTree::leaf(3));

    assert_eq!(polytope.volumes().len(), 2);
    assert_eq!(polytope.edges().len(), 12);
    assert_eq!(polytope.vertices().len(), 8);

    let leaf = polytope.volume(1);
    assert_eq!(leaf.edges, polytope.volume(SEED_VOLUME).edges);
    assert_eq!(leaf.object, Some(7));
    assert_eq!(leaf.material, Some(3));
}

#[test]
fn clip_by_one_plane_partitions_the_box() {
    let mut polytope = unit_box_polytope();
    let tree = BspTree::split(x_plane(0.0), BspTree::leaf(1), BspTree::leaf(2));
    polytope.clip(4, &tree);

    // One new vertex per crossing edge, one cut face per side.
    assert_eq!(polytope.vertices().len(), 12);
    assert_eq!(polytope.faces().len(), 8);
    assert!(!polytope.face(6).original);
    assert!(!polytope.face(7).original);
    assert_eq!(polytope.volumes().len(), 3);

    // The back half is reached first.
    let back = polytope.volume(1);
    let front = polytope.volume(2);
    assert_eq!((back.object, back.material), (Some(4), Some(2)));
    assert_eq!((front.object, front.material), (Some(4), Some(1)));

    for (id, sign) in [(1, -1.0), (2, 1.0)] {
        polytope.check_topology(id).unwrap();
        assert_eq!(polytope.boundary(id).count(), 12);
        assert_eq!(polytope.face_loops(id).unwrap().len(), 6);
        assert_relative_eq!(polytope.measure(id).unwrap(), 4.0, epsilon = 1.0e-5);

        for e in polytope.boundary(id) {
            for v in polytope.edge(e).vertices {
                assert!(polytope.vertex(v).point.x * sign >= -1.0e-6);
            }
        }
    }

    let front_bounds = Aabb::from_points(
        polytope
            .boundary(2)
            .flat_map(|e| polytope.edge(e).vertices)
            .map(|v| polytope.vertex(v).point),
    );
    assert_relative_eq!(front_bounds.mins, Point::new(0.0, -1.0, -1.0), epsilon = 1.0e-6);
    assert_relative_eq!(front_bounds.maxs, Point::new(1.0, 1.0, 1.0), epsilon = 1.0e-6);

    // The seed is untouched.
    polytope.check_topology(SEED_VOLUME).unwrap();
    assert_eq!(polytope.boundary(SEED_VOLUME).count(), 12);
}

#[test]
fn clip_with_missing_child_drops_the_half_space() {
    let mut polytope = unit_box_polytope();
    let tree = BspTree::node(x_plane(0.5), Some(BspTree::leaf(1)), None);
    polytope.clip(0, &tree);

    assert_eq!(polytope.volumes().len(), 2);
    assert_eq!(polytope.volume(1).material, Some(1));
    assert_relative_eq!(polytope.measure(1).unwrap(), 2.0, epsilon = 1.0e-5);
}

#[test]
fn clip_by_touching_plane_keeps_the_box_whole() {
    let mut polytope = unit_box_polytope();
    // The plane of the x = -1 face: every vertex is on it or in front of it.
    let tree = BspTree::split(x_plane(-1.0), BspTree::leaf(1), BspTree::leaf(2));
    polytope.clip(0, &tree);

    assert_eq!(polytope.vertices().len(), 8);
    assert_eq!(polytope.volumes().len(), 2);
    assert_eq!(polytope.volume(1).material, Some(1));
    polytope.check_topology(1).unwrap();
    assert_relative_eq!(polytope.measure(1).unwrap(), 8.0, epsilon = 1.0e-5);
}

#[test]
fn clip_by_distant_plane_reaches_one_leaf() {
    let mut polytope = unit_box_polytope();
    let tree = BspTree::split(x_plane(5.0), BspTree::leaf(1), BspTree::leaf(2));
    polytope.clip(0, &tree);

    assert_eq!(polytope.volumes().len(), 2);
    assert_eq!(polytope.volume(1).material, Some(2));
    assert_eq!(polytope.faces().len(), 8);
    assert_relative_eq!(polytope.measure(1).unwrap(), 8.0, epsilon = 1.0e-5);
}

#[test]
fn clip_by_nested_planes() {
    let mut polytope = unit_box_polytope();
    let y_plane = Plane::new(Vector::y(), 0.0);
    let tree = BspTree::split(
        x_plane(0.0),
        BspTree::split(y_plane, BspTree::leaf(1), BspTree::leaf(2)),
        BspTree::leaf(3),
    );
    polytope.clip(0, &tree);

    let materials: Vec<_> = polytope.leaves().map(|(_, v)| v.material.unwrap()).collect();
    assert_eq!(materials, vec![3, 2, 1]);

    let mut total = 0.0;
    for (id, _) in polytope.leaves() {
        polytope.check_topology(id).unwrap();
        total += polytope.measure(id).unwrap();
    }

    assert_relative_eq!(polytope.measure(1).unwrap(), 4.0, epsilon = 1.0e-5);
    assert_relative_eq!(polytope.measure(2).unwrap(), 2.0, epsilon = 1.0e-5);
    assert_relative_eq!(total, 8.0, epsilon = 1.0e-5);
}

#[test]
fn successive_clips_ignore_previous_steps() {
    let mut polytope = unit_box_polytope();
    polytope.clip(
        1,
        &BspTree::split(x_plane(0.0), BspTree::leaf(1), BspTree::leaf(2)),
    );
    polytope.clip(
        2,
        &BspTree::split(
            Plane::new(Vector::y(), 0.5),
            BspTree::leaf(1),
            BspTree::leaf(2),
        ),
    );

    assert_eq!(polytope.volumes().len(), 5);
    assert_eq!(polytope.vertices().len(), 16);

    for (id, expected) in [(1, 4.0), (2, 4.0), (3, 6.0), (4, 2.0)] {
        polytope.check_topology(id).unwrap();
        assert_relative_eq!(polytope.measure(id).unwrap(), expected, epsilon = 1.0e-5);
    }

    assert_eq!(polytope.volume(2).object, Some(1));
    assert_eq!(polytope.volume(3).object, Some(2));
}

#[test]
fn add_intersection_appends_vertex() {
    let mut polytope = unit_box_polytope();
    let plane = x_plane(0.25);

    let id = polytope
        .add_intersection(&plane, &Point::new(-1.0, 1.0, 0.0), &Point::new(1.0, 1.0, 0.0))
        .unwrap();
    assert_eq!(id, 8);
    assert_relative_eq!(polytope.vertex(id).point, Point::new(0.25, 1.0, 0.0));

    let parallel =
        polytope.add_intersection(&plane, &Point::new(0.0, 0.0, 0.0), &Point::new(0.0, 1.0, 0.0));
    assert!(parallel.is_none());
    assert_eq!(polytope.vertices().len(), 9);
}

#[test]
#[should_panic]
fn clip_without_seed_volume() {
    let mut polytope = Polytope::<u32>::new();
    polytope.clip(0, &BspTree::leaf(0));
}
