//! A double-ended queue stored as a circular doubly linked ring.
//!
//! All nodes of a [`LinkedDeque`] live in a single arena owned by the deque, and the `next` and
//! `previous` links of every [`Node`] are [`NodeId`]s into that arena. Exactly one node is the
//! *front* anchor; the node at `front.previous` is the *back*.
//!
//! The ring maintains the following invariants:
//! - the deque is empty iff there is no front anchor;
//! - a ring of one links to itself in both directions;
//! - walking `next` from the front `len` times returns to the front, and walking `previous`
//!   visits the same nodes in exactly the reverse order.

use crate::index::{IndexVec, NodeId};
use std::{fmt, iter::FusedIterator};

mod node;
pub use node::Node;

#[cfg(test)]
mod tests;

/// An end of a deque.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum End {
    Front,
    Back,
}

impl fmt::Display for End {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Front => "front",
            Self::Back => "back",
        })
    }
}

/// A violated deque precondition.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum DequeError {
    /// Attempted to remove an item from an empty deque.
    #[error("attempted to remove from the {0} of an empty deque")]
    RemoveEmpty(End),
    /// Attempted to peek at an item of an empty deque.
    #[error("attempted to peek at the {0} of an empty deque")]
    PeekEmpty(End),
}

/// The double-ended queue contract.
///
/// Insertion always succeeds. Removal and peeking require a non-empty deque and fail with a
/// [`DequeError`] otherwise; callers are expected to check [`is_empty`](Self::is_empty) first.
pub trait Deque<T> {
    /// Returns `true` if the deque holds no items.
    fn is_empty(&self) -> bool;

    /// Inserts `item` as the new front.
    fn enqueue_front(&mut self, item: T);

    /// Inserts `item` as the new back.
    fn enqueue_back(&mut self, item: T);

    /// Removes and returns the front item.
    fn dequeue_front(&mut self) -> Result<T, DequeError>;

    /// Removes and returns the back item.
    fn dequeue_back(&mut self) -> Result<T, DequeError>;

    /// Returns a copy of the front item.
    fn peek_front(&self) -> Result<T, DequeError>
    where
        T: Clone;

    /// Returns a copy of the back item.
    fn peek_back(&self) -> Result<T, DequeError>
    where
        T: Clone;

    /// Removes all items.
    fn clear(&mut self);
}

/// A [`Deque`] implemented as a circular doubly linked ring of [`Node`]s.
///
/// Every operation is O(1) except [`clear`](Deque::clear) and [`Clone::clone`], which are O(n).
/// Slots vacated by removals are reused by later insertions; the arena is released entirely
/// whenever the deque becomes empty.
pub struct LinkedDeque<T> {
    nodes: IndexVec<NodeId, Option<Node<T>>>,
    free: Vec<NodeId>,
    front: Option<NodeId>,
    len: usize,
}

impl<T> Default for LinkedDeque<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T> LinkedDeque<T> {
    /// Creates a new empty deque.
    #[inline]
    pub fn new() -> Self {
        Self { nodes: IndexVec::new(), free: Vec::new(), front: None, len: 0 }
    }

    /// Creates a new empty deque with room for `capacity` nodes.
    pub fn with_capacity(capacity: usize) -> Self {
        Self { nodes: IndexVec::with_capacity(capacity), ..Self::new() }
    }

    /// Returns the number of items.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns a reference to the front item.
    #[inline]
    pub fn front(&self) -> Option<&T> {
        self.front_id().map(|id| self.node(id).item())
    }

    /// Returns a reference to the back item.
    #[inline]
    pub fn back(&self) -> Option<&T> {
        self.back_id().map(|id| self.node(id).item())
    }

    /// Returns a mutable reference to the front item.
    pub fn front_mut(&mut self) -> Option<&mut T> {
        let id = self.front_id()?;
        Some(self.node_mut(id).item_mut())
    }

    /// Returns a mutable reference to the back item.
    pub fn back_mut(&mut self) -> Option<&mut T> {
        let id = self.back_id()?;
        Some(self.node_mut(id).item_mut())
    }

    /// Returns the id of the front anchor.
    #[inline]
    pub fn front_id(&self) -> Option<NodeId> {
        self.front
    }

    /// Returns the id of the back node, `front.previous`.
    #[inline]
    pub fn back_id(&self) -> Option<NodeId> {
        self.front.map(|front| self.node(front).previous())
    }

    /// Returns the live node with the given id, if any.
    #[inline]
    pub fn get_node(&self, id: NodeId) -> Option<&Node<T>> {
        self.nodes.get(id).and_then(Option::as_ref)
    }

    /// Returns an iterator over the items from front to back.
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter { deque: self, head: self.front_id(), tail: self.back_id(), remaining: self.len }
    }

    #[inline]
    #[track_caller]
    fn node(&self, id: NodeId) -> &Node<T> {
        match self.get_node(id) {
            Some(node) => node,
            None => unreachable!("ring links to vacant slot {id:?}"),
        }
    }

    #[inline]
    #[track_caller]
    fn node_mut(&mut self, id: NodeId) -> &mut Node<T> {
        match self.nodes.get_mut(id).and_then(Option::as_mut) {
            Some(node) => node,
            None => unreachable!("ring links to vacant slot {id:?}"),
        }
    }

    /// Stores a node built by `f` from its own id, reusing a vacated slot when possible.
    fn alloc(&mut self, f: impl FnOnce(NodeId) -> Node<T>) -> NodeId {
        match self.free.pop() {
            Some(id) => {
                self.nodes[id] = Some(f(id));
                id
            }
            None => {
                let id = self.nodes.next_idx();
                self.nodes.push(Some(f(id)));
                id
            }
        }
    }

    /// Splices a new node immediately before the front anchor, or makes it a ring of one if the
    /// deque is empty. Does not move the anchor.
    fn link_before_front(&mut self, item: T) -> NodeId {
        let id = match self.front {
            None => {
                let id = self.alloc(|id| Node::new(item, id, id));
                self.front = Some(id);
                id
            }
            Some(front) => {
                let back = self.node(front).previous();
                let id = self.alloc(|_| Node::new(item, front, back));
                self.node_mut(front).set_previous(id);
                self.node_mut(back).set_next(id);
                id
            }
        };
        self.len += 1;
        id
    }

    /// Removes `id` from the ring and returns its item. Moves the anchor to `next` if `id` was
    /// the front.
    fn unlink(&mut self, id: NodeId) -> T {
        let Some(node) = self.nodes[id].take() else {
            unreachable!("unlinking vacant slot {id:?}");
        };
        self.len -= 1;
        if self.len == 0 {
            debug_assert_eq!(node.next(), id);
            self.front = None;
            self.nodes.raw.clear();
            self.free.clear();
        } else {
            let (previous, next) = (node.previous(), node.next());
            self.node_mut(previous).set_next(next);
            self.node_mut(next).set_previous(previous);
            if self.front == Some(id) {
                self.front = Some(next);
            }
            self.free.push(id);
        }
        node.into_item()
    }

    /// Asserts every ring invariant, walking the whole ring in both directions.
    #[cfg(test)]
    pub(crate) fn assert_invariants(&self) {
        let Some(front) = self.front else {
            assert_eq!(self.len, 0, "no anchor but non-zero count");
            assert!(self.nodes.iter().all(Option::is_none), "residual nodes in empty deque");
            return;
        };
        assert_ne!(self.len, 0, "anchor set but zero count");
        let live = self.nodes.iter().filter(|n| n.is_some()).count();
        assert_eq!(live, self.len, "live node count does not match len");
        assert_eq!(live + self.free.len(), self.nodes.len(), "leaked arena slot");

        let mut forward = Vec::with_capacity(self.len);
        let mut id = front;
        for _ in 0..self.len {
            forward.push(id);
            let next = self.node(id).next();
            assert_eq!(self.node(next).previous(), id, "asymmetric link at {id:?}");
            id = next;
        }
        assert_eq!(id, front, "walking `next` len times does not return to the front");

        let mut backward = Vec::with_capacity(self.len);
        let mut id = self.node(front).previous();
        for _ in 0..self.len {
            backward.push(id);
            id = self.node(id).previous();
        }
        backward.reverse();
        assert_eq!(forward, backward, "`previous` is not the reverse of `next`");
    }
}

impl<T> Deque<T> for LinkedDeque<T> {
    #[inline]
    fn is_empty(&self) -> bool {
        self.len == 0
    }

    fn enqueue_front(&mut self, item: T) {
        let id = self.link_before_front(item);
        self.front = Some(id);
    }

    fn enqueue_back(&mut self, item: T) {
        self.link_before_front(item);
    }

    fn dequeue_front(&mut self) -> Result<T, DequeError> {
        let id = self.front_id().ok_or(DequeError::RemoveEmpty(End::Front))?;
        Ok(self.unlink(id))
    }

    fn dequeue_back(&mut self) -> Result<T, DequeError> {
        let id = self.back_id().ok_or(DequeError::RemoveEmpty(End::Back))?;
        Ok(self.unlink(id))
    }

    fn peek_front(&self) -> Result<T, DequeError>
    where
        T: Clone,
    {
        self.front().cloned().ok_or(DequeError::PeekEmpty(End::Front))
    }

    fn peek_back(&self) -> Result<T, DequeError>
    where
        T: Clone,
    {
        self.back().cloned().ok_or(DequeError::PeekEmpty(End::Back))
    }

    fn clear(&mut self) {
        self.nodes.raw.clear();
        self.free.clear();
        self.front = None;
        self.len = 0;
    }
}

/// Copies the ring item by item into a fresh, compact arena.
impl<T: Clone> Clone for LinkedDeque<T> {
    fn clone(&self) -> Self {
        let mut new = Self::with_capacity(self.len);
        new.extend(self.iter().cloned());
        new
    }
}

impl<T: fmt::Debug> fmt::Debug for LinkedDeque<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: PartialEq> PartialEq for LinkedDeque<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for LinkedDeque<T> {}

impl<T> Extend<T> for LinkedDeque<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.enqueue_back(item);
        }
    }
}

impl<T> FromIterator<T> for LinkedDeque<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut deque = Self::new();
        deque.extend(iter);
        deque
    }
}

impl<'a, T> IntoIterator for &'a LinkedDeque<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> IntoIterator for LinkedDeque<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        IntoIter(self)
    }
}

/// Borrowing iterator over a [`LinkedDeque`], front to back.
pub struct Iter<'a, T> {
    deque: &'a LinkedDeque<T>,
    head: Option<NodeId>,
    tail: Option<NodeId>,
    remaining: usize,
}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self { ..*self }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let node = self.deque.node(self.head?);
        self.head = Some(node.next());
        self.remaining -= 1;
        Some(node.item())
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let node = self.deque.node(self.tail?);
        self.tail = Some(node.previous());
        self.remaining -= 1;
        Some(node.item())
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}
impl<T> FusedIterator for Iter<'_, T> {}

/// Owning iterator over a [`LinkedDeque`], front to back.
pub struct IntoIter<T>(LinkedDeque<T>);

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.0.dequeue_front().ok()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.0.len(), Some(self.0.len()))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.0.dequeue_back().ok()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}
impl<T> FusedIterator for IntoIter<T> {}
