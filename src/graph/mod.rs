//! Rooted graph and graph traversal.
//!
//! This module provides [`Graph`], a rooted directed graph whose nodes may be
//! shared between parents, together with the generic pieces it is built from.
//!
//! # Architecture
//!
//! - [`NodeId`] - Generation-checked node handle
//! - [`GraphBase`], [`Successors`], [`RootedGraph`] - Traits the algorithms are written against
//! - [`algorithms`] - BFS, DFS and reachability over any [`Successors`] graph
//! - [`Graph`] / [`GraphNode`] - The arena-backed rooted graph
//! - [`Traversal`] / [`TraversalOrder`] - Printed traversal view
//!
//! # Examples
//!
//! ```rust
//! use rootgraph::{Graph, TraversalOrder};
//!
//! let mut graph = Graph::with_root("root");
//! graph.insert(&"root", "left")?;
//! graph.insert(&"root", "right")?;
//! graph.insert(&"left", "leaf")?;
//!
//! assert_eq!(
//!     graph.traverse(TraversalOrder::Dfs).lines(),
//!     vec!["root(left, right)", "right()", "left(leaf)", "leaf()"]
//! );
//! # Ok::<(), rootgraph::Error>(())
//! ```

pub mod algorithms;

mod node;
mod print;
mod rooted;
mod traits;

pub use node::NodeId;
pub use print::{Nodes, Traversal, TraversalOrder};
pub use rooted::{Graph, GraphNode};
pub use traits::{GraphBase, RootedGraph, Successors};
