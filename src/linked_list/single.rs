use core::fmt;

use tracing::debug;

use super::{iter::Iter, node::Node};
use crate::error::{ListError, ListResult};

/// A singly linked list that appends at the tail.
///
/// Arena indices double as insertion positions: the n-th appended value
/// always lives at index `n`.
#[derive(Debug, Clone)]
pub struct SinglyLinkedList<T> {
    nodes: Vec<Node<T>>,
    head: Option<usize>,
    tail: Option<usize>,
}

impl<T> SinglyLinkedList<T> {
    /// Creates a new, empty linked list.
    pub const fn new() -> Self {
        Self {
            nodes: Vec::new(),
            head: None,
            tail: None,
        }
    }

    /// Creates an empty list with room for `capacity` nodes.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(capacity),
            head: None,
            tail: None,
        }
    }

    /// Appends `data` after the current tail.
    pub fn append(&mut self, data: T) {
        let index = self.nodes.len();
        self.nodes.push(Node::new(data));
        match self.tail {
            Some(tail) => self.nodes[tail].set_next(Some(index)),
            None => self.head = Some(index),
        }
        self.tail = Some(index);
    }

    /// Number of nodes in the list.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// The first value, if any.
    pub fn head(&self) -> Option<&T> {
        self.head.map(|index| self.nodes[index].data())
    }

    /// The last appended value, if any.
    pub fn tail(&self) -> Option<&T> {
        self.tail.map(|index| self.nodes[index].data())
    }

    /// Iterates the values from head to tail in insertion order.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(&self.nodes, self.head)
    }

    /// Same as [`iter`](Self::iter).
    pub fn display(&self) -> Iter<'_, T> {
        self.iter()
    }

    /// Returns `true` if following `next` links from the head revisits a node.
    ///
    /// Tortoise and hare: O(n) steps, O(1) extra space.
    pub fn detect_cycle(&self) -> bool {
        match self.meeting_point() {
            Some(index) => {
                debug!(node = index, "found loop");
                true
            }
            None => false,
        }
    }

    /// Position of the node where the cycle begins, or `None` if the list is acyclic.
    pub fn cycle_start(&self) -> Option<usize> {
        let mut fast = self.meeting_point()?;
        let mut slow = self.head?;
        // Head-to-entry distance equals meeting-point-to-entry distance mod cycle length.
        while slow != fast {
            slow = self.step(slow)?;
            fast = self.step(fast)?;
        }
        Some(slow)
    }

    /// Links the tail back to the node at `position`, making the list cyclic.
    ///
    /// Once closed, `append` and iteration stay memory safe but their output
    /// is unspecified.
    pub fn close_cycle(&mut self, position: usize) -> ListResult<()> {
        let tail = self.tail.ok_or(ListError::EmptyList)?;
        let len = self.len();
        if position >= len {
            return Err(ListError::PositionOutOfBounds { position, len });
        }
        self.nodes[tail].set_next(Some(position));
        Ok(())
    }

    #[inline]
    fn step(&self, index: usize) -> Option<usize> {
        self.nodes[index].next()
    }

    /// Node at which the one-step and two-step cursors meet, if they ever do.
    fn meeting_point(&self) -> Option<usize> {
        let mut slow = self.head?;
        let mut fast = slow;
        loop {
            fast = self.step(self.step(fast)?)?;
            slow = self.step(slow)?;
            if slow == fast {
                return Some(slow);
            }
        }
    }
}

impl<T> Default for SinglyLinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Display> fmt::Display for SinglyLinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("List is empty");
        }
        for (i, data) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{data}")?;
        }
        Ok(())
    }
}

impl<T> Extend<T> for SinglyLinkedList<T> {
    fn extend<I>(&mut self, iter: I)
    where
        I: IntoIterator<Item = T>,
    {
        for data in iter {
            self.append(data);
        }
    }
}

impl<T> FromIterator<T> for SinglyLinkedList<T> {
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

impl<T, const N: usize> From<[T; N]> for SinglyLinkedList<T> {
    fn from(values: [T; N]) -> Self {
        let mut list = Self::with_capacity(N);
        list.extend(values);
        list
    }
}

impl<'a, T> IntoIterator for &'a SinglyLinkedList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
