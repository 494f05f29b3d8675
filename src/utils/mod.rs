//! Various unsorted geometrical and logical operators.

pub use self::centroid::centroid;
pub use self::epoch_tag::{EpochCounter, EpochTag};

mod centroid;
mod epoch_tag;
