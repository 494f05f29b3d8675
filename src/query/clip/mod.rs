pub use self::clip_segment_plane::{line_toi_with_plane, segment_plane_intersection};

mod clip_segment_plane;
