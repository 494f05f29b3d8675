//! Shapes supported by bspclip.

pub use self::plane::{Plane, Side};
pub use self::polytope::{
    Boundary, Edge, EdgeId, Face, FaceId, FaceLoop, Polytope, TopologyError, Vertex, VertexId,
    Volume, VolumeId, SEED_VOLUME,
};

mod plane;
pub mod polytope;
