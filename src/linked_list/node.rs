/// A node in the list arena.
///
/// `next` is the arena index of the successor, `None` at the end of an
/// acyclic list.
#[derive(Debug, Clone)]
pub(crate) struct Node<T> {
    data: T,
    next: Option<usize>,
}

impl<T> Node<T> {
    #[inline]
    pub(crate) const fn new(data: T) -> Self {
        Self { data, next: None }
    }

    #[inline]
    pub(crate) fn data(&self) -> &T {
        &self.data
    }

    #[inline]
    pub(crate) fn next(&self) -> Option<usize> {
        self.next
    }

    #[inline]
    pub(crate) fn set_next(&mut self, next: Option<usize>) {
        self.next = next;
    }
}
