//! Generic linked containers.
//!
//! Three sequence types, each usable on its own and each used by the graph:
//!
//! - [`Stack`] - LIFO, the depth-first frontier
//! - [`Queue`] - FIFO, the breadth-first frontier
//! - [`DoubleLinkedList`] - ordered sequence with indexed access, the per-node child list
//!
//! Operations that need an element fail with [`crate::Error::EmptyCollection`]
//! on an empty container; indexed list access past the end fails with
//! [`crate::Error::IndexOutOfRange`].

mod list;
mod queue;
mod stack;

pub use list::{DoubleLinkedList, IntoIter as ListIntoIter, Iter as ListIter};
pub use queue::{Iter as QueueIter, Queue};
pub use stack::{Iter as StackIter, Stack};
