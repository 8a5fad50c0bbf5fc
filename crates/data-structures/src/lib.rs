//! Common data structures.
//!
//! The centerpiece is [`LinkedDeque`], a double-ended queue stored as a circular doubly linked
//! ring of nodes inside an index arena.

#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]

pub mod deque;
pub use deque::{Deque, DequeError, LinkedDeque};

pub mod index;
