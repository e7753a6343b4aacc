//! Two standalone exercises: a singly linked list with cycle detection and
//! an in-place search for the smallest missing positive integer.

pub mod array;
pub mod error;
pub mod linked_list;

pub use error::{ListError, ListResult};
