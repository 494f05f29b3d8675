use approx::assert_relative_eq;
use bspclip3d::bounding_volume::Aabb;
use bspclip3d::math::{Isometry, Point, Real, Vector};
use bspclip3d::na::{Translation3, UnitQuaternion};
use bspclip3d::partitioning::{BspNode, BspTree};
use bspclip3d::shape::{Plane, Polytope};

fn random_tree(rng: &mut oorandom::Rand32, depth: u32, next_material: &mut u32) -> BspTree {
    if depth == 0 {
        *next_material += 1;
        return BspTree::leaf(*next_material);
    }

    let mut coord = || rng.rand_float() * 2.0 - 1.0;
    let point = Point::new(coord(), coord(), coord()) * 0.8;
    let normal = Vector::new(coord(), coord(), coord());
    let plane = Plane::from_point_normal(&point, normal);

    let front = random_tree(rng, depth - 1, next_material);
    let back = random_tree(rng, depth - 1, next_material);
    BspTree::split(plane, front, back)
}

#[test]
fn random_partitions_conserve_volume() {
    let mut rng = oorandom::Rand32::new(42);
    let aabb = Aabb::new(Point::new(-1.0, -1.0, -1.0), Point::new(1.0, 1.0, 1.0));

    for _ in 0..100 {
        let angles = [rng.rand_float(), rng.rand_float(), rng.rand_float()];
        let pos = Isometry::from_parts(
            Translation3::new(0.1, -0.2, 0.05),
            UnitQuaternion::from_euler_angles(angles[0], angles[1], angles[2]),
        );

        let mut polytope = Polytope::new();
        polytope.build_box_with_isometry(&pos, &aabb);

        let mut num_leaves = 0;
        let tree = random_tree(&mut rng, 3, &mut num_leaves);
        assert_eq!(tree.num_nodes(), 15);
        assert!(!tree.is_leaf());

        polytope.clip(42u32, &tree);
        assert!(polytope.leaves().len() <= num_leaves as usize);

        let mut total: Real = 0.0;
        for (id, volume) in polytope.leaves() {
            assert_eq!(volume.object, Some(42));
            polytope.check_topology(id).unwrap();

            let measure = polytope.measure(id).unwrap();
            assert!(measure > -1.0e-4);
            total += measure;

            for e in polytope.boundary(id) {
                for v in polytope.edge(e).vertices {
                    let local = pos.inverse_transform_point(&polytope.vertex(v).point);
                    assert!(local.coords.amax() <= 1.0 + 1.0e-4);
                }
            }
        }

        assert_relative_eq!(total, 8.0, epsilon = 1.0e-3);
    }
}
