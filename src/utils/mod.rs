//! Small shared helpers used by the graph and its renderers.

mod bitset;
mod dot;

pub use bitset::{BitSet, BitSetIter};
pub use dot::escape_dot;
