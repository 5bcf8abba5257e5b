//! Node identifier for rooted graphs.
//!
//! This module provides the [`NodeId`] type, a strongly-typed handle for nodes
//! stored in a [`Graph`](crate::Graph). The handle pairs an arena slot with the
//! generation the slot had when the node was created, so a handle that outlives
//! its node never resolves to whatever reuses the slot later.

use std::fmt;

use generational_arena::Index;

/// A strongly-typed, generation-checked identifier for a graph node.
///
/// `NodeId` wraps an arena [`Index`]. Two parents that share a child hold equal
/// `NodeId`s; this is what makes the graph multi-parent without reference counting.
///
/// # Usage
///
/// Node IDs are returned by [`Graph::insert`](crate::Graph::insert), the search
/// functions and the traversal iterators. They are used to:
///
/// - Look up or mutate a node's payload
/// - Walk a node's ordered child list
/// - Key per-node analysis results
///
/// After the node is reclaimed, every accessor treats its old `NodeId` as absent.
///
/// # Examples
///
/// ```rust,ignore
/// use rootgraph::{Graph, NodeId};
///
/// let mut graph = Graph::with_root("a");
/// let b: NodeId = graph.insert(&"a", "b")?;
/// let again: NodeId = graph.insert(&"a", "b")?;
///
/// // the same payload links the same node
/// assert_eq!(b, again);
/// ```
///
/// # Thread Safety
///
/// `NodeId` is [`Copy`], [`Send`], and [`Sync`].
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(pub(crate) Index);

impl NodeId {
    /// Returns the arena slot of this node.
    ///
    /// Slots are dense and start at 0, which makes them suitable for indexing
    /// per-node side tables such as a [`BitSet`](crate::utils::BitSet). A slot
    /// may be reused by a later node after this one is reclaimed.
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// use rootgraph::Graph;
    ///
    /// let graph = Graph::with_root(1);
    /// assert_eq!(graph.root().unwrap().index(), 0);
    /// ```
    #[must_use]
    #[inline]
    pub fn index(self) -> usize {
        self.0.into_raw_parts().0
    }

    /// Returns the generation of the slot at the time the node was created.
    #[must_use]
    #[inline]
    pub fn generation(self) -> u64 {
        self.0.into_raw_parts().1
    }

    #[inline]
    pub(crate) const fn arena_index(self) -> Index {
        self.0
    }
}

impl From<Index> for NodeId {
    #[inline]
    fn from(index: Index) -> Self {
        NodeId(index)
    }
}

impl fmt::Debug for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NodeId({}v{})", self.index(), self.generation())
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n{}", self.index())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn id(slot: usize, generation: u64) -> NodeId {
        NodeId::from(Index::from_raw_parts(slot, generation))
    }

    #[test]
    fn test_node_id_parts() {
        let node = id(7, 2);
        assert_eq!(node.index(), 7);
        assert_eq!(node.generation(), 2);
    }

    #[test]
    fn test_node_id_generation_distinguishes_reused_slots() {
        let old = id(3, 0);
        let new = id(3, 1);
        assert_eq!(old.index(), new.index());
        assert_ne!(old, new);
    }

    #[test]
    fn test_node_id_hash() {
        let mut set: HashSet<NodeId> = HashSet::new();
        set.insert(id(1, 0));
        set.insert(id(2, 0));
        set.insert(id(1, 0));
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_node_id_formatting() {
        let node = id(3, 1);
        assert_eq!(format!("{node:?}"), "NodeId(3v1)");
        assert_eq!(format!("{node}"), "n3");
    }
}
