use crate::math::{Point, Real};
use crate::partitioning::Material;
use crate::shape::{Plane, Side};
use crate::utils::{EpochCounter, EpochTag};

/// Index of a [`Vertex`] in a [`Polytope`].
pub type VertexId = u32;
/// Index of an [`Edge`] in a [`Polytope`].
pub type EdgeId = u32;
/// Index of a [`Face`] in a [`Polytope`].
pub type FaceId = u32;
/// Index of a [`Volume`] in a [`Polytope`].
pub type VolumeId = u32;

/// The index of the unclipped volume every polytope starts from.
pub const SEED_VOLUME: VolumeId = 0;

/// A vertex of a polytope.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct Vertex {
    /// The vertex position.
    pub point: Point<Real>,
    /// Side of the plane currently splitting the polytope, valid for one clipping step.
    pub(crate) side: EpochTag<Side>,
    /// General-purpose per-operation slot ("visited" marks, cached edge indices).
    pub(crate) scratch: EpochTag<u32>,
}

impl Vertex {
    /// A vertex at `point` with stale scratch state.
    #[inline]
    pub fn new(point: Point<Real>) -> Self {
        Self {
            point,
            side: EpochTag::default(),
            scratch: EpochTag::default(),
        }
    }
}

/// An edge of a polytope, linking two vertices and separating two faces.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct Edge {
    /// The two endpoints of this edge.
    pub vertices: [VertexId; 2],
    /// The two faces meeting at this edge.
    pub faces: [FaceId; 2],
    /// The next edge on the boundary of the volume this edge belongs to.
    pub next: Option<EdgeId>,
}

impl Edge {
    /// An edge that is not yet linked to any boundary.
    #[inline]
    pub fn new(vertices: [VertexId; 2], faces: [FaceId; 2]) -> Self {
        Self {
            vertices,
            faces,
            next: None,
        }
    }

    /// Does this edge end at `vertex`?
    #[inline]
    pub fn has_vertex(&self, vertex: VertexId) -> bool {
        self.vertices[0] == vertex || self.vertices[1] == vertex
    }

    /// Does this edge border `face`?
    #[inline]
    pub fn has_face(&self, face: FaceId) -> bool {
        self.faces[0] == face || self.faces[1] == face
    }
}

/// A planar face of a polytope.
///
/// The polytope interior lies on the front of [`Face::plane`].
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct Face {
    /// The supporting plane of this face, facing the interior.
    pub plane: Plane,
    /// `true` for faces of the seed shape, `false` for faces created by a splitting plane.
    pub original: bool,
    /// First crossing point found on this face during the current clipping step.
    pub(crate) first_crossing: EpochTag<VertexId>,
}

impl Face {
    /// A face supported by `plane`.
    #[inline]
    pub fn new(plane: Plane, original: bool) -> Self {
        Self {
            plane,
            original,
            first_crossing: EpochTag::default(),
        }
    }
}

/// A closed convex cell of a polytope, delimited by a linked list of edges.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct Volume<O> {
    /// The first edge of this volume's boundary.
    pub edges: Option<EdgeId>,
    /// The entity on whose behalf this volume was clipped.
    pub object: Option<O>,
    /// The material of the BSP leaf this volume was clipped to.
    pub material: Option<Material>,
}

impl<O> Volume<O> {
    /// A volume with the given boundary and no owner or material.
    #[inline]
    pub fn new(edges: Option<EdgeId>) -> Self {
        Self {
            edges,
            object: None,
            material: None,
        }
    }
}

/// A convex polyhedron stored as index-addressed arenas of vertices, edges, faces and volumes.
///
/// Volume [`SEED_VOLUME`] is the shape the polytope was built as (see
/// [`Polytope::build_box`] and [`Polytope::extrude_face`]). Clipping against a BSP tree
/// appends one volume per reached leaf, from index `1` onward, and leaves the seed untouched.
///
/// Records only ever refer to each other by index. Within one operation, the arenas
/// only grow; nothing is removed until [`Polytope::clear`].
///
/// `O` is the opaque handle of the entity owning a clipping query. It is stored on
/// the resulting volumes and never inspected.
#[derive(Clone, Debug)]
pub struct Polytope<O> {
    pub(crate) vertices: Vec<Vertex>,
    pub(crate) edges: Vec<Edge>,
    pub(crate) faces: Vec<Face>,
    pub(crate) volumes: Vec<Volume<O>>,
    pub(crate) epochs: EpochCounter,
}

impl<O> Default for Polytope<O> {
    fn default() -> Self {
        Self::new()
    }
}

impl<O> Polytope<O> {
    /// An empty polytope, without any seed volume.
    pub fn new() -> Self {
        Self {
            vertices: Vec::new(),
            edges: Vec::new(),
            faces: Vec::new(),
            volumes: Vec::new(),
            epochs: EpochCounter::new(),
        }
    }

    /// Removes every record from this polytope.
    ///
    /// Indices obtained before this call must not be used afterward.
    pub fn clear(&mut self) {
        self.vertices.clear();
        self.edges.clear();
        self.faces.clear();
        self.volumes.clear();
    }

    /// Appends a vertex and returns its index.
    #[inline]
    pub fn add_vertex(&mut self, point: Point<Real>) -> VertexId {
        self.vertices.push(Vertex::new(point));
        (self.vertices.len() - 1) as VertexId
    }

    /// Appends an edge and returns its index.
    #[inline]
    pub fn add_edge(&mut self, edge: Edge) -> EdgeId {
        self.edges.push(edge);
        (self.edges.len() - 1) as EdgeId
    }

    /// Appends a face and returns its index.
    #[inline]
    pub fn add_face(&mut self, plane: Plane, original: bool) -> FaceId {
        self.faces.push(Face::new(plane, original));
        (self.faces.len() - 1) as FaceId
    }

    /// Appends a volume and returns its index.
    #[inline]
    pub fn add_volume(&mut self, volume: Volume<O>) -> VolumeId {
        self.volumes.push(volume);
        (self.volumes.len() - 1) as VolumeId
    }

    /// Appends `edge` at the head of the boundary list starting at `head`.
    ///
    /// The edge's own `next` field is overwritten.
    #[inline]
    pub(crate) fn push_boundary_edge(&mut self, head: &mut Option<EdgeId>, mut edge: Edge) {
        edge.next = *head;
        *head = Some(self.add_edge(edge));
    }

    /// All the vertices of this polytope, in index order.
    #[inline]
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    /// All the edges of this polytope, in index order.
    #[inline]
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// All the faces of this polytope, in index order.
    #[inline]
    pub fn faces(&self) -> &[Face] {
        &self.faces
    }

    /// All the volumes of this polytope, the seed volume included.
    #[inline]
    pub fn volumes(&self) -> &[Volume<O>] {
        &self.volumes
    }

    /// The vertex with index `id`.
    #[inline]
    pub fn vertex(&self, id: VertexId) -> &Vertex {
        &self.vertices[id as usize]
    }

    /// The edge with index `id`.
    #[inline]
    pub fn edge(&self, id: EdgeId) -> &Edge {
        &self.edges[id as usize]
    }

    /// The face with index `id`.
    #[inline]
    pub fn face(&self, id: FaceId) -> &Face {
        &self.faces[id as usize]
    }

    /// The volume with index `id`.
    #[inline]
    pub fn volume(&self, id: VolumeId) -> &Volume<O> {
        &self.volumes[id as usize]
    }

    /// The seed volume, if this polytope was built.
    #[inline]
    pub fn seed(&self) -> Option<&Volume<O>> {
        self.volumes.first()
    }

    /// The volumes produced by clipping, i.e., every volume but the seed.
    pub fn leaves(&self) -> impl ExactSizeIterator<Item = (VolumeId, &Volume<O>)> {
        self.volumes
            .iter()
            .enumerate()
            .skip(1)
            .map(|(id, volume)| (id as VolumeId, volume))
    }

    /// Iterates through the indices of the edges bounding `volume`.
    #[inline]
    pub fn boundary(&self, volume: VolumeId) -> Boundary<'_> {
        self.boundary_from(self.volume(volume).edges)
    }

    /// Iterates through a boundary list starting at `head`.
    #[inline]
    pub fn boundary_from(&self, head: Option<EdgeId>) -> Boundary<'_> {
        Boundary {
            edges: &self.edges,
            next: head,
        }
    }
}

/// Iterator through the edge indices of a volume boundary.
#[derive(Clone)]
pub struct Boundary<'a> {
    edges: &'a [Edge],
    next: Option<EdgeId>,
}

impl Iterator for Boundary<'_> {
    type Item = EdgeId;

    #[inline]
    fn next(&mut self) -> Option<EdgeId> {
        let curr = self.next?;
        self.next = self.edges[curr as usize].next;
        Some(curr)
    }
}
