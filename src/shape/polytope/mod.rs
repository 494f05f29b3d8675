//! Convex polytopes stored as index-addressed arenas, and the operations building and clipping them.

pub use self::polytope::{
    Boundary, Edge, EdgeId, Face, FaceId, Polytope, Vertex, VertexId, Volume, VolumeId,
    SEED_VOLUME,
};
pub use self::polytope_topology::{FaceLoop, TopologyError};

mod polytope;
mod polytope_box;
mod polytope_clip;
mod polytope_extrude;
mod polytope_topology;
