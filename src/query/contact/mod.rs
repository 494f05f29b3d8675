//! Nearest contact search on clipped polytopes.

pub use self::contact_polytope_sweep::{Collision, ContactSearch};

mod contact_polytope_sweep;
