//! Trait definitions for graph abstractions.
//!
//! The traversal algorithms in [`algorithms`](super::algorithms) are written
//! against these traits rather than against [`Graph`](crate::Graph), so any
//! structure that can enumerate successors by [`NodeId`] can be walked.
//!
//! - [`GraphBase`] - Slot bound and node iteration
//! - [`Successors`] - Forward edge traversal in child order
//! - [`RootedGraph`] - Graphs with an optional designated root

use crate::graph::NodeId;

/// Base trait providing core graph properties.
///
/// # Examples
///
/// ```rust,ignore
/// use rootgraph::{Graph, GraphBase};
///
/// let graph = Graph::with_children(10, [5, 7, 9]);
/// assert_eq!(graph.node_ids().count(), 4);
/// assert!(graph.node_bound() >= 4);
/// ```
pub trait GraphBase {
    /// Returns an exclusive upper bound on [`NodeId::index`] for this graph.
    ///
    /// Per-call side tables (visited sets, distances) are sized with this.
    /// It is at least the number of live nodes and may be larger when slots
    /// have been freed.
    fn node_bound(&self) -> usize;

    /// Returns an iterator over every live node, reachable or not.
    fn node_ids(&self) -> impl Iterator<Item = NodeId>;

    /// Returns `true` if `node` refers to a live node of this graph.
    ///
    /// The default only checks the slot bound. Implementations with
    /// generation-checked handles override it to reject stale ids.
    fn contains_node(&self, node: NodeId) -> bool {
        node.index() < self.node_bound()
    }
}

/// Trait for graphs that support forward edge traversal.
///
/// # Examples
///
/// ```rust,ignore
/// use rootgraph::{Graph, Successors};
///
/// let mut graph = Graph::with_root('a');
/// let b = graph.insert(&'a', 'b')?;
/// let c = graph.insert(&'a', 'c')?;
///
/// let root = graph.root().unwrap();
/// assert_eq!(graph.successors(root).collect::<Vec<_>>(), vec![b, c]);
/// ```
pub trait Successors: GraphBase {
    /// Returns an iterator over the successors of `node`, in child order.
    ///
    /// A successor that appears twice in the child list is yielded twice.
    ///
    /// # Arguments
    ///
    /// * `node` - The node whose successors to iterate
    ///
    /// # Returns
    ///
    /// An iterator yielding the `NodeId` of each child. A stale or foreign
    /// `node` yields nothing.
    fn successors(&self, node: NodeId) -> impl Iterator<Item = NodeId>;
}

/// Trait for graphs with a designated root node.
///
/// An empty graph has no root, so [`root`](RootedGraph::root) is optional.
pub trait RootedGraph: Successors {
    /// Returns the root node, or `None` if the graph is empty.
    fn root(&self) -> Option<NodeId>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use generational_arena::Index;

    fn id(slot: usize) -> NodeId {
        NodeId::from(Index::from_raw_parts(slot, 0))
    }

    /// Adjacency-list graph over dense slots.
    struct TestGraph {
        edges: Vec<Vec<usize>>,
    }

    impl GraphBase for TestGraph {
        fn node_bound(&self) -> usize {
            self.edges.len()
        }

        fn node_ids(&self) -> impl Iterator<Item = NodeId> {
            (0..self.edges.len()).map(id)
        }
    }

    impl Successors for TestGraph {
        fn successors(&self, node: NodeId) -> impl Iterator<Item = NodeId> {
            self.edges
                .get(node.index())
                .into_iter()
                .flatten()
                .map(|&slot| id(slot))
        }
    }

    impl RootedGraph for TestGraph {
        fn root(&self) -> Option<NodeId> {
            (!self.edges.is_empty()).then(|| id(0))
        }
    }

    #[test]
    fn test_graph_base_impl() {
        let graph = TestGraph {
            edges: vec![vec![1, 2], vec![2], vec![]],
        };
        assert_eq!(graph.node_bound(), 3);
        assert_eq!(graph.node_ids().count(), 3);
        assert!(graph.contains_node(id(2)));
        assert!(!graph.contains_node(id(3)));
    }

    #[test]
    fn test_successors_in_child_order() {
        let graph = TestGraph {
            edges: vec![vec![2, 1, 2], vec![], vec![]],
        };
        let succs: Vec<_> = graph.successors(id(0)).collect();
        assert_eq!(succs, vec![id(2), id(1), id(2)]);
        assert_eq!(graph.successors(id(9)).count(), 0);
    }

    #[test]
    fn test_rooted_graph_impl() {
        let graph = TestGraph {
            edges: vec![vec![1], vec![]],
        };
        assert_eq!(graph.root(), Some(id(0)));

        let empty = TestGraph { edges: vec![] };
        assert_eq!(empty.root(), None);
    }
}
