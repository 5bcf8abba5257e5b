//! # rootgraph Prelude
//!
//! This module provides a convenient prelude for the most commonly used types and traits
//! from the rootgraph library.

// ================================================================================================
// Core Types and Error Handling
// ================================================================================================

/// The main error type for all rootgraph operations
pub use crate::Error;

/// The result type used throughout rootgraph
pub use crate::Result;

/// Error detail types
pub use crate::{Lookup, Rejection};

// ================================================================================================
// Graph
// ================================================================================================

/// The rooted graph and its nodes
pub use crate::graph::{Graph, GraphNode, NodeId};

/// Printed traversal
pub use crate::graph::{Traversal, TraversalOrder};

/// Graph abstraction traits
pub use crate::graph::{GraphBase, RootedGraph, Successors};

/// Generic traversal algorithms
pub use crate::graph::algorithms::{bfs, dfs, reachable};

// ================================================================================================
// Containers
// ================================================================================================

/// Linked sequence containers
pub use crate::collections::{DoubleLinkedList, Queue, Stack};
