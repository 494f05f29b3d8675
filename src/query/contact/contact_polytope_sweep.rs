use crate::math::{Point, Real, Vector, DEFAULT_EPSILON};
use crate::partitioning::Material;
use crate::shape::polytope::{Polytope, VertexId, VolumeId};
use crate::shape::Plane;

/// The nearest contact found along a sweep direction.
///
/// The same record can be fed to several [`Polytope::find_collision`] calls (for example
/// one per polytope of a sequence of sweeps) to keep the best contact among all of them.
#[derive(Debug, PartialEq, Copy, Clone)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct Collision<O> {
    /// The owner of the clipped volume the contact was found on.
    pub object: Option<O>,
    /// The material of the BSP leaf the contact was found in.
    pub material: Option<Material>,
    /// The plane of the contact surface.
    pub plane: Plane,
    /// The contact point.
    pub point: Point<Real>,
    /// The projection of [`Self::point`] on the sweep direction.
    pub distance: Real,
}

impl<O> Collision<O> {
    /// The distance of a record that does not hold any contact yet.
    pub const NO_DISTANCE: Real = Real::MAX;

    /// An empty record.
    pub fn new() -> Self {
        Self {
            object: None,
            material: None,
            plane: Plane::new(na::zero(), 0.0),
            point: Point::origin(),
            distance: Self::NO_DISTANCE,
        }
    }

    /// Does this record hold a contact?
    #[inline]
    pub fn is_set(&self) -> bool {
        self.object.is_some()
    }

    /// Forgets the contact held by this record, if any.
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

impl<O> Default for Collision<O> {
    fn default() -> Self {
        Self::new()
    }
}

/// How [`Polytope::find_collision`] treats the record it is given.
#[derive(Debug, PartialEq, Eq, Copy, Clone, Default)]
pub enum ContactSearch {
    /// Only replace the contact already held by the record with a strictly nearer one.
    ///
    /// A record without owner is considered empty whatever its distance.
    #[default]
    Accumulate,
    /// Ignore the content of the record and report the nearest contact of this polytope.
    Reset,
}

impl<O: Copy> Polytope<O> {
    /// Finds the clipped vertex nearest along `dir`, and the surface it belongs to.
    ///
    /// Only vertices of edges exposed by clipping are candidates: an edge with both faces
    /// original lies on the untouched surface of the seed shape. The distance of a vertex
    /// is its projection on `dir`, so smaller is nearer. The reported plane is the one, among
    /// the faces around the winning vertex, whose normal points the most against `dir`.
    ///
    /// Returns `true` and overwrites `best` if a candidate nearer than the one held by
    /// `best` (see [`ContactSearch`]) was found. Returns `false`, leaving `best` unchanged,
    /// otherwise, and in particular if no clipping happened.
    pub fn find_collision(
        &mut self,
        dir: &Vector<Real>,
        best: &mut Collision<O>,
        search: ContactSearch,
    ) -> bool {
        if self.volumes.len() <= 1 {
            return false;
        }

        let mut best_distance = match search {
            ContactSearch::Accumulate if best.is_set() => best.distance,
            _ => Collision::<O>::NO_DISTANCE,
        };
        let mut winner: Option<(VertexId, VolumeId)> = None;
        let epoch = self.epochs.advance();

        for (volume_id, volume) in self.volumes.iter().enumerate().skip(1) {
            let mut curr = volume.edges;

            while let Some(id) = curr {
                let edge = self.edges[id as usize];
                curr = edge.next;

                let [f0, f1] = edge.faces;
                if self.faces[f0 as usize].original && self.faces[f1 as usize].original {
                    continue;
                }

                for v in edge.vertices {
                    let vertex = &mut self.vertices[v as usize];

                    if vertex.scratch.is_current(epoch) {
                        continue;
                    }

                    vertex.scratch.set(epoch, 0);
                    let dist = vertex.point.coords.dot(dir);

                    if dist < best_distance {
                        best_distance = dist;
                        winner = Some((v, volume_id as VolumeId));
                    }
                }
            }
        }

        let Some((vertex, volume_id)) = winner else {
            return false;
        };

        let volume = self.volumes[volume_id as usize];
        let mut plane = None;
        let mut best_dot = Real::MAX;

        for id in self.boundary(volume_id) {
            let edge = &self.edges[id as usize];

            if !edge.has_vertex(vertex) {
                continue;
            }

            for face in edge.faces {
                let face_plane = &self.faces[face as usize].plane;
                let Some(normal) = face_plane.normal.try_normalize(DEFAULT_EPSILON) else {
                    continue;
                };
                let dot = normal.dot(dir);

                if dot < best_dot {
                    best_dot = dot;
                    plane = Some(*face_plane);
                }
            }
        }

        if plane.is_none() {
            log::debug!(
                "Hit unexpected state while searching polytope contacts: all the faces around vertex {} are degenerate.",
                vertex
            );
        }

        *best = Collision {
            object: volume.object,
            material: volume.material,
            plane: plane.unwrap_or(Plane::new(na::zero(), 0.0)),
            point: self.vertices[vertex as usize].point,
            distance: best_distance,
        };

        true
    }
}
