//! A singly linked list with Floyd cycle detection.
//!
//! Nodes live in an arena owned by the list and link to each other by index,
//! so a list can be made cyclic (see [`SinglyLinkedList::close_cycle`]) without
//! any unsafe pointer juggling. Nodes are never removed; the whole arena is
//! released when the list drops.
//!
//! # Examples
//!
//! ```
//! use mola_exercises::linked_list::SinglyLinkedList;
//!
//! let mut list = SinglyLinkedList::new();
//! for value in 1..=4 {
//!     list.append(value);
//! }
//!
//! assert_eq!(list.len(), 4);
//! assert_eq!(list.to_string(), "1 2 3 4");
//! assert!(!list.detect_cycle());
//!
//! list.close_cycle(1).unwrap();
//! assert!(list.detect_cycle());
//! assert_eq!(list.cycle_start(), Some(1));
//! ```

pub mod iter;
mod node;
pub mod single;

pub use iter::Iter;
pub use single::SinglyLinkedList;

#[cfg(test)]
mod tests;
