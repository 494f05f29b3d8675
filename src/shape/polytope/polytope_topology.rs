use crate::math::{Real, Vector, DEFAULT_EPSILON};
use crate::shape::polytope::{FaceId, Polytope, VertexId, VolumeId};

/// Indicates an inconsistency in the boundary of a polytope volume.
#[derive(thiserror::Error, Copy, Clone, Debug, PartialEq, Eq)]
pub enum TopologyError {
    /// The volume index is out of range.
    #[error("the volume {0} does not exist.")]
    InvalidVolume(VolumeId),
    /// The volume has no boundary edge.
    #[error("the volume {0} has an empty boundary.")]
    EmptyVolume(VolumeId),
    /// A vertex of a face boundary is not shared by exactly two of its edges.
    #[error("the vertex {vertex} is used by {count} edges of face {face} instead of two.")]
    OpenFaceLoop {
        /// The face with an open boundary.
        face: FaceId,
        /// The offending vertex.
        vertex: VertexId,
        /// The number of edges of the face ending at that vertex.
        count: u32,
    },
    /// The boundary of a face is made of several disjoint loops.
    #[error("the boundary of face {0} is made of several loops.")]
    DisconnectedFace(FaceId),
    /// A vertex has less than three incident edges.
    #[error("the vertex {vertex} only has {degree} incident edges.")]
    LowVertexDegree {
        /// The offending vertex.
        vertex: VertexId,
        /// Its number of incident edges.
        degree: u32,
    },
}

/// The boundary of one face of a polytope volume.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FaceLoop {
    /// The face this loop bounds.
    pub face: FaceId,
    /// The vertices of the loop, in boundary order.
    pub vertices: Vec<VertexId>,
}

impl<O> Polytope<O> {
    /// Rebuilds the ordered vertex loop of every face bounding `volume`.
    ///
    /// Faces are listed in the order they are first met while walking the boundary.
    pub fn face_loops(&self, volume: VolumeId) -> Result<Vec<FaceLoop>, TopologyError> {
        let head = self
            .volumes
            .get(volume as usize)
            .ok_or(TopologyError::InvalidVolume(volume))?
            .edges;

        if head.is_none() {
            return Err(TopologyError::EmptyVolume(volume));
        }

        let mut face_edges: Vec<Vec<[VertexId; 2]>> = vec![Vec::new(); self.faces.len()];
        let mut faces = Vec::new();

        for id in self.boundary_from(head) {
            let edge = &self.edges[id as usize];

            for face in edge.faces {
                let edges = &mut face_edges[face as usize];
                if edges.is_empty() {
                    faces.push(face);
                }
                edges.push(edge.vertices);
            }
        }

        faces
            .into_iter()
            .map(|face| {
                let vertices = order_face_loop(face, &face_edges[face as usize])?;
                Ok(FaceLoop { face, vertices })
            })
            .collect()
    }

    /// Checks that `volume` is a closed polyhedron.
    ///
    /// Every face must be bounded by a single closed loop of edges, and every vertex must
    /// have at least three incident edges.
    pub fn check_topology(&self, volume: VolumeId) -> Result<(), TopologyError> {
        let _ = self.face_loops(volume)?;

        let mut degrees = vec![0u32; self.vertices.len()];
        for id in self.boundary(volume) {
            for v in self.edges[id as usize].vertices {
                degrees[v as usize] += 1;
            }
        }

        for id in self.boundary(volume) {
            for v in self.edges[id as usize].vertices {
                let degree = degrees[v as usize];
                if degree < 3 {
                    return Err(TopologyError::LowVertexDegree { vertex: v, degree });
                }
            }
        }

        Ok(())
    }

    /// Computes the volume enclosed by the boundary of `volume`.
    ///
    /// Uses the divergence theorem over the face loops, so it assumes the face planes
    /// face the interior, as they do for every polytope built by this crate.
    pub fn measure(&self, volume: VolumeId) -> Result<Real, TopologyError> {
        let mut total = 0.0;

        for face_loop in self.face_loops(volume)? {
            let Some(normal) = self.faces[face_loop.face as usize]
                .plane
                .normal
                .try_normalize(DEFAULT_EPSILON)
            else {
                continue;
            };

            let pts: Vec<_> = face_loop
                .vertices
                .iter()
                .map(|v| self.vertices[*v as usize].point)
                .collect();

            // Newell's method: twice the vector area of the polygon.
            let mut area2 = Vector::zeros();
            for (i, pt) in pts.iter().enumerate() {
                let next = &pts[(i + 1) % pts.len()];
                area2 += pt.coords.cross(&next.coords);
            }

            let area = area2.dot(&normal).abs() * 0.5;
            total -= pts[0].coords.dot(&normal) * area / 3.0;
        }

        Ok(total)
    }
}

/// Chains the edges of one face into a single ordered vertex loop.
fn order_face_loop(face: FaceId, edges: &[[VertexId; 2]]) -> Result<Vec<VertexId>, TopologyError> {
    for edge in edges {
        for vertex in *edge {
            let count = edges.iter().flatten().filter(|v| **v == vertex).count() as u32;
            if count != 2 {
                return Err(TopologyError::OpenFaceLoop {
                    face,
                    vertex,
                    count,
                });
            }
        }
    }

    let mut used = vec![false; edges.len()];
    used[0] = true;
    let [start, mut curr] = edges[0];
    let mut vertices = vec![start];

    while curr != start {
        vertices.push(curr);

        let Some(i) = (0..edges.len()).find(|i| !used[*i] && edges[*i].contains(&curr)) else {
            return Err(TopologyError::DisconnectedFace(face));
        };

        used[i] = true;
        curr = if edges[i][0] == curr {
            edges[i][1]
        } else {
            edges[i][0]
        };
    }

    if used.contains(&false) {
        Err(TopologyError::DisconnectedFace(face))
    } else {
        Ok(vertices)
    }
}
