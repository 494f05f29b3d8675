use crate::math::{Point, Real, Vector, DEFAULT_EPSILON};
use crate::shape::polytope::{Edge, FaceId, Polytope, Volume, SEED_VOLUME};
use crate::shape::Plane;
use crate::utils::centroid;

const NO_FACE: FaceId = FaceId::MAX;

impl<O> Polytope<O> {
    /// Sweeps the face `face` of the seed volume along `sweep`, writing the resulting prism to `out`.
    ///
    /// `out` is cleared first. It then holds a single seed volume, without owner nor
    /// material, bounded by two end caps (faces `0` and `1`, at the original position of
    /// the face and translated by `sweep`) and one side face per edge of the swept face.
    /// Every face of the prism is flagged as original, so `out` can be clipped right away.
    ///
    /// A zero `sweep` yields a flat prism whose end caps coincide.
    ///
    /// # Panics
    ///
    /// Panics if `face` is out of range or if this polytope has no seed volume.
    pub fn extrude_face<P>(&mut self, face: FaceId, sweep: &Vector<Real>, out: &mut Polytope<P>) {
        assert!(
            (face as usize) < self.faces.len(),
            "Polytope::extrude_face: face index {} out of range ({} faces).",
            face,
            self.faces.len()
        );
        assert!(
            !self.volumes.is_empty(),
            "Polytope::extrude_face: missing seed volume."
        );

        out.clear();
        out.epochs.reset();
        let epoch = self.epochs.advance();

        let face_center = centroid(
            self.boundary(SEED_VOLUME)
                .map(|e| &self.edges[e as usize])
                .filter(|edge| edge.has_face(face))
                .flat_map(|edge| edge.vertices)
                .map(|v| &self.vertices[v as usize].point),
        )
        .unwrap_or_else(Point::origin);
        let prism_center = face_center + sweep * 0.5;

        let mut near = self.faces[face as usize].plane;
        if near.signed_distance(&(face_center + sweep)) < 0.0 {
            near.invert();
        }
        let far = near.inverted().translated(sweep);
        let near_cap = out.add_face(near, true);
        let far_cap = out.add_face(far, true);

        let mut curr = self.volumes[SEED_VOLUME as usize].edges;

        while let Some(id) = curr {
            let edge = self.edges[id as usize];
            curr = edge.next;

            if !edge.has_face(face) {
                continue;
            }

            let [p0, p1] = edge.vertices.map(|v| self.vertices[v as usize].point);
            let plane = side_plane(&p0, &p1, sweep, &prism_center)
                .unwrap_or(self.faces[face as usize].plane);
            let side_face = out.add_face(plane, true);

            // The edge swept by each endpoint, shared by the two side faces adjacent to it.
            let mut rails = [0; 2];

            for (rail, v) in rails.iter_mut().zip(edge.vertices) {
                let cached = self.vertices[v as usize].scratch.get(epoch).copied();
                *rail = match cached {
                    Some(id) => id,
                    None => {
                        let pt = self.vertices[v as usize].point;
                        let bottom = out.add_vertex(pt);
                        let top = out.add_vertex(pt + sweep);
                        let id = out.add_edge(Edge::new([bottom, top], [NO_FACE, NO_FACE]));
                        self.vertices[v as usize].scratch.set(epoch, id);
                        id
                    }
                };

                let faces = &mut out.edges[*rail as usize].faces;
                if faces[0] == NO_FACE {
                    faces[0] = side_face;
                } else {
                    faces[1] = side_face;
                }
            }

            let [rail0, rail1] = rails.map(|rail| out.edges[rail as usize].vertices);
            let _ = out.add_edge(Edge::new([rail0[0], rail1[0]], [near_cap, side_face]));
            let _ = out.add_edge(Edge::new([rail0[1], rail1[1]], [far_cap, side_face]));
        }

        let num_edges = out.edges.len();
        for (i, edge) in out.edges.iter_mut().enumerate() {
            debug_assert!(
                edge.faces[1] != NO_FACE,
                "the swept face boundary is not a closed loop"
            );
            edge.next = if i + 1 < num_edges {
                Some(i as u32 + 1)
            } else {
                None
            };
        }

        let head = if num_edges > 0 { Some(0) } else { None };
        let _ = out.add_volume(Volume::new(head));
    }
}

/// The plane containing the edge `[p0, p1]` and the direction `sweep`, facing `interior`.
///
/// Returns `None` if the edge is (nearly) parallel to `sweep`, or if either is zero.
fn side_plane(
    p0: &Point<Real>,
    p1: &Point<Real>,
    sweep: &Vector<Real>,
    interior: &Point<Real>,
) -> Option<Plane> {
    let dir = p1 - p0;
    let normal = dir.cross(sweep);

    if normal.norm_squared() <= DEFAULT_EPSILON * dir.norm_squared() * sweep.norm_squared() {
        return None;
    }

    let plane = Plane::from_point_normal(p0, normal);

    if plane.signed_distance(interior) < 0.0 {
        Some(plane.inverted())
    } else {
        Some(plane)
    }
}
