use bspclip3d::bounding_volume::Aabb;
use bspclip3d::math::{Isometry, Point, Vector};
use bspclip3d::partitioning::BspTree;
use bspclip3d::query::{Collision, ContactSearch};
use bspclip3d::shape::{Plane, Polytope};

const EMPTY: u32 = 0;
const SOLID: u32 = 1;

fn main() {
    // A wall filling the half-space x >= 2.
    let world = BspTree::split(
        Plane::new(Vector::x(), 2.0),
        BspTree::leaf(SOLID),
        BspTree::leaf(EMPTY),
    );

    let mut actor = Polytope::<&'static str>::new();
    actor.build_box_with_isometry(
        &Isometry::translation(0.0, 0.5, 0.0),
        &Aabb::new(Point::new(-0.5, -0.5, -0.5), Point::new(0.5, 0.5, 0.5)),
    );

    // Sweep the face x = 0.5 of the actor along its motion.
    let motion = Vector::new(3.0, 0.0, 0.0);
    let mut swept = Polytope::new();
    actor.extrude_face(1, &motion, &mut swept);
    swept.clip("player", &world);

    for (id, volume) in swept.leaves() {
        println!(
            "Volume {} in material {:?}: {}",
            id,
            volume.material,
            swept.measure(id).unwrap_or(0.0)
        );
    }

    let mut contact = Collision::new();
    if swept.find_collision(&motion, &mut contact, ContactSearch::Reset) {
        println!(
            "{:?} hits material {:?} at {} (plane {:?}).",
            contact.object, contact.material, contact.point, contact.plane
        );
    }
}
