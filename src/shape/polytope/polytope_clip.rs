use crate::math::{Point, Real};
use crate::partitioning::BspNode;
use crate::query::details::segment_plane_intersection;
use crate::shape::polytope::{Edge, EdgeId, Polytope, VertexId, Volume, SEED_VOLUME};
use crate::shape::{Plane, Side};
use smallvec::SmallVec;

/// A boundary still waiting to be pushed down the BSP tree.
struct ClipTask<'a, N> {
    edges: Option<EdgeId>,
    node: &'a N,
}

impl<O: Copy> Polytope<O> {
    /// Clips the seed volume against the BSP tree rooted at `root`.
    ///
    /// One new volume is appended for each leaf the seed volume reaches. It holds the
    /// exact part of the seed volume lying in that leaf, owned by `owner` and made of the
    /// leaf material. Half-spaces of internal nodes lacking the corresponding child are
    /// dropped. The seed volume and any volume appended by earlier calls are left untouched.
    ///
    /// # Panics
    ///
    /// Panics if this polytope has no seed volume, or if its boundary is empty.
    pub fn clip<N: BspNode>(&mut self, owner: O, root: &N) {
        assert!(
            !self.volumes.is_empty(),
            "Polytope::clip: missing seed volume."
        );
        let seed_edges = self.volumes[SEED_VOLUME as usize].edges;
        assert!(
            seed_edges.is_some(),
            "Polytope::clip: the seed volume has an empty boundary."
        );

        let num_volumes = self.volumes.len();
        let mut stack: SmallVec<[ClipTask<N>; 32]> = SmallVec::new();
        stack.push(ClipTask {
            edges: seed_edges,
            node: root,
        });

        while let Some(task) = stack.pop() {
            let node = task.node;

            if node.is_leaf() {
                let _ = self.add_volume(Volume {
                    edges: task.edges,
                    object: Some(owner),
                    material: Some(node.material()),
                });
                continue;
            }

            let (front, back) = self.split_boundary(task.edges, node.plane());

            if let (Some(child), Some(_)) = (node.front(), front) {
                stack.push(ClipTask {
                    edges: front,
                    node: child,
                });
            }

            if let (Some(child), Some(_)) = (node.back(), back) {
                stack.push(ClipTask {
                    edges: back,
                    node: child,
                });
            }
        }

        log::trace!(
            "Polytope clipping reached {} BSP leaves.",
            self.volumes.len() - num_volumes
        );
    }
}

impl<O> Polytope<O> {
    /// Appends the point where the segment `[a, b]` crosses `plane` as a new vertex.
    ///
    /// Returns `None`, and leaves the polytope unchanged, if the segment is parallel to the plane.
    pub fn add_intersection(
        &mut self,
        plane: &Plane,
        a: &Point<Real>,
        b: &Point<Real>,
    ) -> Option<VertexId> {
        let pt = segment_plane_intersection(plane, a, b)?;
        Some(self.add_vertex(pt))
    }

    /// Side of `plane` the vertex `id` lies on, classifying it at most once per epoch.
    #[inline]
    fn classify(&mut self, id: VertexId, plane: &Plane, epoch: u32) -> Side {
        let vertex = &mut self.vertices[id as usize];
        let point = vertex.point;
        vertex.side.get_or_insert_with(epoch, || plane.side(&point))
    }

    /// Splits the closed boundary starting at `head` by `plane`.
    ///
    /// Returns the heads of the front and back boundaries. Both are closed: the section
    /// of the boundary by `plane` becomes a new face on each side.
    fn split_boundary(
        &mut self,
        head: Option<EdgeId>,
        plane: &Plane,
    ) -> (Option<EdgeId>, Option<EdgeId>) {
        // Each cut face has the plane facing the interior of its side.
        let front_cut = self.add_face(*plane, false);
        let back_cut = self.add_face(plane.inverted(), false);
        let epoch = self.epochs.advance();

        let mut front = None;
        let mut back = None;
        let mut curr = head;

        while let Some(id) = curr {
            // Copied out: the edge arena grows below.
            let edge = self.edges[id as usize];
            curr = edge.next;

            let [v0, v1] = edge.vertices;
            let side0 = self.classify(v0, plane, epoch);
            let side1 = self.classify(v1, plane, epoch);

            if side0 == side1 {
                let list = match side0 {
                    Side::Front => &mut front,
                    Side::Back => &mut back,
                };
                self.push_boundary_edge(list, edge);
                continue;
            }

            let p0 = self.vertices[v0 as usize].point;
            let p1 = self.vertices[v1 as usize].point;

            let Some(mid) = self.add_intersection(plane, &p0, &p1) else {
                log::debug!(
                    "Hit unexpected state while clipping a polytope: edge {} is parallel to the splitting plane.",
                    id
                );
                let list = match side0 {
                    Side::Front => &mut front,
                    Side::Back => &mut back,
                };
                self.push_boundary_edge(list, edge);
                continue;
            };

            let (front_end, back_end) = match side0 {
                Side::Front => (v0, v1),
                Side::Back => (v1, v0),
            };
            self.push_boundary_edge(&mut front, Edge::new([front_end, mid], edge.faces));
            self.push_boundary_edge(&mut back, Edge::new([back_end, mid], edge.faces));

            // The second crossing found on a face closes its section by the plane.
            for face in edge.faces {
                let first = self.faces[face as usize].first_crossing.get(epoch).copied();

                match first {
                    None => self.faces[face as usize].first_crossing.set(epoch, mid),
                    Some(first) => {
                        self.push_boundary_edge(&mut front, Edge::new([first, mid], [face, front_cut]));
                        self.push_boundary_edge(&mut back, Edge::new([first, mid], [face, back_cut]));
                    }
                }
            }
        }

        (front, back)
    }
}
