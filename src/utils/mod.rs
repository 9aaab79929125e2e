//! Various unsorted geometrical and logical operators.

pub use self::hashmap::HashMap;
pub use self::round::{round_half_up, snap_point_to_grid};

pub mod hashmap;
mod round;
