//! Graph traversal algorithms.
//!
//! Depth-first and breadth-first traversal over any [`Successors`] graph.
//! Both iterators own their frontier and their visited set, so a traversal
//! leaves nothing behind in the graph it walked, and several traversals can
//! run over the same `&G` at once.
//!
//! # Algorithms
//!
//! - [`bfs`] - Breadth-first search over a [`Queue`] frontier
//! - [`dfs`] - Depth-first search over a [`Stack`] frontier
//! - [`reachable`] - The set of slots reachable from a start node
//!
//! # Visitation
//!
//! A node is marked visited when it enters the frontier, not when it leaves
//! it. Every reachable node is therefore yielded exactly once, even in the
//! presence of shared children and cycles.
//!
//! Expansion is lazy: the successors of a yielded node are only pushed when
//! the caller asks for the next one. A search that stops at the start node
//! never looks at its children.

use crate::{
    collections::{Queue, Stack},
    graph::{NodeId, Successors},
    utils::BitSet,
};

/// Depth-first search iterator over graph nodes.
///
/// Successors are pushed in child order, so among siblings the one inserted
/// last is expanded first.
///
/// # Type Parameters
///
/// * `'g` - Lifetime of the graph reference
/// * `G` - Graph type implementing [`Successors`]
///
/// # Examples
///
/// ```rust,ignore
/// use rootgraph::{Graph, NodeId, algorithms::dfs};
///
/// let mut graph = Graph::with_root('A');
/// let b = graph.insert(&'A', 'B')?;
/// let c = graph.insert(&'A', 'C')?;
/// let root = graph.root().unwrap();
///
/// let visited: Vec<NodeId> = dfs(&graph, root).collect();
/// assert_eq!(visited, vec![root, c, b]);
/// ```
pub struct DfsIterator<'g, G: Successors> {
    graph: &'g G,
    stack: Stack<NodeId>,
    visited: BitSet,
    /// Last yielded node; its successors are expanded on the following call.
    pending: Option<NodeId>,
}

impl<'g, G: Successors> DfsIterator<'g, G> {
    fn new(graph: &'g G, start: NodeId) -> Self {
        let mut stack = Stack::new();
        let mut visited = BitSet::new(graph.node_bound());

        if graph.contains_node(start) && visited.insert(start.index()) {
            stack.push(start);
        }

        DfsIterator {
            graph,
            stack,
            visited,
            pending: None,
        }
    }
}

impl<G: Successors> Iterator for DfsIterator<'_, G> {
    type Item = NodeId;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(prev) = self.pending.take() {
            for succ in self.graph.successors(prev) {
                if self.visited.insert(succ.index()) {
                    self.stack.push(succ);
                }
            }
        }

        let node = self.stack.pop().ok()?;
        self.pending = Some(node);
        Some(node)
    }
}

/// Returns a depth-first search iterator starting from the given node.
///
/// # Arguments
///
/// * `graph` - The graph to traverse
/// * `start` - The starting node for traversal
///
/// # Returns
///
/// An iterator yielding `NodeId` in DFS pre-order. An invalid or stale
/// `start` yields nothing.
///
/// # Complexity
///
/// - Time: O(V + E) where V is the number of vertices and E is the number of edges
/// - Space: O(V) for the visited set and stack
pub fn dfs<G: Successors>(graph: &G, start: NodeId) -> DfsIterator<'_, G> {
    DfsIterator::new(graph, start)
}

/// Breadth-first search iterator over graph nodes.
///
/// Nodes are yielded by increasing distance from the start; siblings are
/// yielded in child order.
///
/// # Type Parameters
///
/// * `'g` - Lifetime of the graph reference
/// * `G` - Graph type implementing [`Successors`]
pub struct BfsIterator<'g, G: Successors> {
    graph: &'g G,
    queue: Queue<NodeId>,
    visited: BitSet,
    /// Last yielded node; its successors are expanded on the following call.
    pending: Option<NodeId>,
}

impl<'g, G: Successors> BfsIterator<'g, G> {
    fn new(graph: &'g G, start: NodeId) -> Self {
        let mut queue = Queue::new();
        let mut visited = BitSet::new(graph.node_bound());

        if graph.contains_node(start) && visited.insert(start.index()) {
            queue.enqueue(start);
        }

        BfsIterator {
            graph,
            queue,
            visited,
            pending: None,
        }
    }
}

impl<G: Successors> Iterator for BfsIterator<'_, G> {
    type Item = NodeId;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(prev) = self.pending.take() {
            for succ in self.graph.successors(prev) {
                if self.visited.insert(succ.index()) {
                    self.queue.enqueue(succ);
                }
            }
        }

        let node = self.queue.dequeue().ok()?;
        self.pending = Some(node);
        Some(node)
    }
}

/// Returns a breadth-first search iterator starting from the given node.
///
/// # Arguments
///
/// * `graph` - The graph to traverse
/// * `start` - The starting node for traversal
///
/// # Returns
///
/// An iterator yielding `NodeId` in BFS order. An invalid or stale `start`
/// yields nothing.
///
/// # Complexity
///
/// - Time: O(V + E)
/// - Space: O(V) for the visited set and queue
///
/// # Examples
///
/// ```rust,ignore
/// use rootgraph::{Graph, NodeId, algorithms::bfs};
///
/// let mut graph = Graph::with_root("A");
/// let b = graph.insert(&"A", "B")?;
/// let c = graph.insert(&"A", "C")?;
/// let d = graph.insert(&"B", "D")?;
/// graph.insert(&"C", "D")?;
///
/// let order: Vec<NodeId> = bfs(&graph, graph.root().unwrap()).collect();
/// assert_eq!(order[1..], [b, c, d]);
/// ```
pub fn bfs<G: Successors>(graph: &G, start: NodeId) -> BfsIterator<'_, G> {
    BfsIterator::new(graph, start)
}

/// Computes the set of node slots reachable from `start`, `start` included.
///
/// The result is sized to [`node_bound`](crate::graph::GraphBase::node_bound)
/// and indexed by [`NodeId::index`].
///
/// # Arguments
///
/// * `graph` - The graph to traverse
/// * `start` - The starting node
///
/// # Returns
///
/// A [`BitSet`] with one bit per reachable slot. Empty if `start` is invalid.
pub fn reachable<G: Successors>(graph: &G, start: NodeId) -> BitSet {
    let mut walk = bfs(graph, start);
    walk.by_ref().for_each(drop);
    walk.visited
}
