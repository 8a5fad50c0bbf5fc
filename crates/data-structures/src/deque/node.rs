use crate::index::NodeId;

/// A single element of a [`LinkedDeque`](super::LinkedDeque) ring.
///
/// Links are arena indices rather than pointers: the deque's arena owns every node, so the
/// ring never forms an ownership cycle.
#[derive(Clone, Debug)]
pub struct Node<T> {
    item: T,
    next: NodeId,
    previous: NodeId,
}

impl<T> Node<T> {
    #[inline]
    pub(super) fn new(item: T, next: NodeId, previous: NodeId) -> Self {
        Self { item, next, previous }
    }

    /// Returns a reference to the stored item.
    #[inline]
    pub fn item(&self) -> &T {
        &self.item
    }

    /// Returns the node after this one in ring order.
    #[inline]
    pub fn next(&self) -> NodeId {
        self.next
    }

    /// Returns the node before this one in ring order.
    #[inline]
    pub fn previous(&self) -> NodeId {
        self.previous
    }

    #[inline]
    pub(super) fn item_mut(&mut self) -> &mut T {
        &mut self.item
    }

    #[inline]
    pub(super) fn set_next(&mut self, next: NodeId) {
        self.next = next;
    }

    #[inline]
    pub(super) fn set_previous(&mut self, previous: NodeId) {
        self.previous = previous;
    }

    #[inline]
    pub(super) fn into_item(self) -> T {
        self.item
    }
}
