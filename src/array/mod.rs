//! Array exercises.
//!
//! [`missing`] finds the smallest positive integer absent from a slice in
//! linear time, reusing the slice itself as the presence table.
//!
//! ```
//! use mola_exercises::array::smallest_missing_positive;
//!
//! let mut values = [3, 4, -1, 1];
//! assert_eq!(smallest_missing_positive(&mut values), 2);
//! ```

pub mod missing;

pub use missing::{
    first_missing_in_positive, segregate, smallest_missing_positive,
    smallest_missing_positive_hashed,
};
