//! Non-persistent geometric queries.
//!
//! The main query of this crate, the nearest contact search along a sweep direction, is
//! exposed as [`Polytope::find_collision`](crate::shape::Polytope::find_collision) and
//! fills the [`Collision`] records defined here.
//!
//! Lower-level helpers used by the polytope operations are exported by the `details` submodule.

pub use self::contact::{Collision, ContactSearch};

mod clip;
pub mod contact;

/// Queries dedicated to specific pairs of shapes.
pub mod details {
    pub use super::clip::*;
}
