//! Graph algorithms over the [`Successors`](super::Successors) abstraction.
//!
//! # Available Algorithms
//!
//! - [`bfs`] - Breadth-first search traversal
//! - [`dfs`] - Depth-first search traversal
//! - [`reachable`] - Reachability from a start node, as a [`BitSet`](crate::utils::BitSet)
//!
//! | Algorithm | Time Complexity | Use Case |
//! |-----------|-----------------|----------|
//! | BFS | O(V + E) | Search, printed traversal, DOT export |
//! | DFS | O(V + E) | Search, duplicate detection on insert |
//! | Reachability | O(V + E) | Reclaiming detached nodes |
//!
//! # Examples
//!
//! ```rust,ignore
//! use rootgraph::{Graph, NodeId, algorithms};
//!
//! let mut graph = Graph::with_root("A");
//! let b = graph.insert(&"A", "B")?;
//! let c = graph.insert(&"B", "C")?;
//! let root = graph.root().unwrap();
//!
//! let order: Vec<NodeId> = algorithms::dfs(&graph, root).collect();
//! assert_eq!(order, vec![root, b, c]);
//! ```

mod traversal;

pub use traversal::{bfs, dfs, reachable, BfsIterator, DfsIterator};
