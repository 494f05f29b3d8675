use crate::bounding_volume::Aabb;
use crate::math::{Isometry, Point, Real, Transform, Vector};
use crate::shape::polytope::{Edge, FaceId, Polytope, Volume};
use crate::shape::Plane;

/// Faces of the box, as `(corner on the face, two corners spanning it)` where corners index
/// [`Aabb::vertices`]-ordered points.
const FACES_CORNER_IDS: [(usize, usize, usize); 6] = [
    // x = mins.x
    (0, 3, 4),
    // x = maxs.x
    (1, 2, 5),
    // y = mins.y
    (0, 1, 4),
    // y = maxs.y
    (3, 2, 7),
    // z = mins.z
    (0, 1, 3),
    // z = maxs.z
    (4, 5, 7),
];

/// For each edge of the bottom ring `(i, i + 1)`, the side face it lies on.
const RING_SIDE_FACES: [FaceId; 4] = [2, 1, 3, 0];
const BOTTOM_FACE: FaceId = 4;
const TOP_FACE: FaceId = 5;

impl<O> Polytope<O> {
    /// Resets this polytope to a box.
    ///
    /// The box is `aabb`, expressed in the source space of the local-to-world `transform`.
    /// The result has 8 vertices, 6 original faces with planes facing the interior of the
    /// box, and a single seed volume bounded by 12 edges, without owner nor material.
    ///
    /// This also rewinds the epoch counter of this polytope.
    ///
    /// ```
    /// # #[cfg(feature = "f32")] {
    /// use bspclip3d::bounding_volume::Aabb;
    /// use bspclip3d::math::{Point, Transform};
    /// use bspclip3d::shape::Polytope;
    ///
    /// let mut polytope = Polytope::<()>::new();
    /// let aabb = Aabb::new(Point::new(-1.0, -1.0, -1.0), Point::new(1.0, 1.0, 1.0));
    /// polytope.build_box(&Transform::identity(), &aabb);
    ///
    /// assert_eq!(polytope.vertices().len(), 8);
    /// assert_eq!(polytope.edges().len(), 12);
    /// assert_eq!(polytope.faces().len(), 6);
    /// assert_eq!(polytope.boundary(0).count(), 12);
    /// # }
    /// ```
    pub fn build_box(&mut self, transform: &Transform<Real>, aabb: &Aabb) {
        self.clear();
        self.epochs.reset();

        let extents = aabb.extents();
        let xvec = transform.transform_vector(&Vector::x()) * extents.x;
        let yvec = transform.transform_vector(&Vector::y()) * extents.y;
        let zvec = transform.transform_vector(&Vector::z()) * extents.z;
        let min = transform.transform_point(&aabb.mins);

        let corners = [
            min,
            min + xvec,
            min + xvec + yvec,
            min + yvec,
            min + zvec,
            min + xvec + zvec,
            min + xvec + yvec + zvec,
            min + yvec + zvec,
        ];
        let center = min + (xvec + yvec + zvec) * 0.5;

        for pt in corners {
            let _ = self.add_vertex(pt);
        }

        for (a, b, c) in FACES_CORNER_IDS {
            let plane = inward_plane(&corners[a], &corners[b], &corners[c], &center);
            let _ = self.add_face(plane, true);
        }

        // Bottom ring, top ring, then the vertical edge starting at each bottom vertex.
        for i in 0..4u32 {
            let n = (i + 1) % 4;
            let p = (i + 3) % 4;
            let side = RING_SIDE_FACES[i as usize];

            let _ = self.add_edge(Edge::new([i, n], [side, BOTTOM_FACE]));
            let _ = self.add_edge(Edge::new([4 + i, 4 + n], [side, TOP_FACE]));
            let _ = self.add_edge(Edge::new(
                [i, 4 + i],
                [RING_SIDE_FACES[p as usize], side],
            ));
        }

        let num_edges = self.edges.len();
        for (i, edge) in self.edges.iter_mut().enumerate() {
            edge.next = if i + 1 < num_edges {
                Some(i as u32 + 1)
            } else {
                None
            };
        }

        let _ = self.add_volume(Volume::new(Some(0)));
    }

    /// Resets this polytope to `aabb` moved by the rigid motion `pos`.
    ///
    /// See [`Polytope::build_box`].
    pub fn build_box_with_isometry(&mut self, pos: &Isometry<Real>, aabb: &Aabb) {
        self.build_box(&pos.to_homogeneous(), aabb)
    }
}

/// The plane through `a`, `b` and `c`, facing `interior`.
fn inward_plane(a: &Point<Real>, b: &Point<Real>, c: &Point<Real>, interior: &Point<Real>) -> Plane {
    let normal = (b - a).cross(&(c - a));
    let plane = Plane::from_point_normal(a, normal);

    if plane.signed_distance(interior) < 0.0 {
        plane.inverted()
    } else {
        plane
    }
}
