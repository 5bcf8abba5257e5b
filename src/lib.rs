// Copyright 2025 Johann Kempter
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//
// SPDX-License-Identifier: Apache-2.0

#![doc(html_no_source)]
#![deny(missing_docs)]
#![deny(unsafe_code)]

//! # rootgraph
//!
//! Generic linked containers and a rooted, multi-parent directed graph built on them.
//!
//! ## Features
//!
//! - **Rooted graph** - A single root, nodes shared between parents, cycles allowed
//! - **Stateless traversal** - BFS and DFS keep their visited set per call; nothing leaks into the graph
//! - **Structural mutation** - Insert with deduplication, re-parenting, guarded deletion
//! - **Automatic reclamation** - Nodes the root no longer reaches are freed, cycles included
//! - **Linked containers** - Stack, queue and doubly linked list with checked access
//!
//! ## Quick Start
//!
//! ```rust
//! use rootgraph::prelude::*;
//!
//! let mut graph = Graph::with_root(1);
//! graph.insert(&1, 5)?;
//! graph.insert(&1, 3)?;
//! graph.insert(&5, 2)?;
//! graph.insert(&1, 2)?;
//!
//! print!("{}", graph.traverse_bfs());
//! // 1(5, 3, 2)
//! // 5(2)
//! // 3()
//! // 2()
//! # Ok::<(), rootgraph::Error>(())
//! ```
//!
//! ## Architecture
//!
//! - [`prelude`] - Convenient re-exports of commonly used types and traits
//! - [`graph`] - [`Graph`], node handles, traversal algorithms and printed traversal
//! - [`collections`] - [`Stack`](collections::Stack), [`Queue`](collections::Queue),
//!   [`DoubleLinkedList`](collections::DoubleLinkedList)
//! - [`utils`] - Visited-set bit vector and DOT escaping
//! - [`Error`] and [`Result`] - Error handling
//!
//! ## Error Handling
//!
//! All fallible operations return [`Result<T>`]. Mutations that are refused for
//! structural reasons report [`Error::Rejected`] and leave the graph untouched:
//!
//! ```rust
//! use rootgraph::{Error, Graph, Lookup};
//!
//! let mut graph: Graph<u32> = Graph::new();
//! match graph.insert(&1, 2) {
//!     Err(Error::NotFound(Lookup::Root)) => println!("graph is empty"),
//!     other => println!("unexpected: {other:?}"),
//! }
//! ```
//!
//! ## Logging
//!
//! The crate logs through the [`log`] facade: structural mutations and
//! reclamation at `debug`, search results at `trace`. Install any logger to
//! see them.

pub(crate) mod error;

/// Convenient re-exports of the most commonly used types and traits.
///
/// # Example
///
/// ```rust
/// use rootgraph::prelude::*;
///
/// let graph = Graph::with_children('r', ['a', 'b']);
/// assert_eq!(graph.find(&'b', TraversalOrder::Dfs), graph.children(graph.root().unwrap()).last());
/// ```
pub mod prelude;

pub mod collections;
pub mod graph;
pub mod utils;

/// `rootgraph` Result type
///
/// A type alias for [`std::result::Result<T, Error>`] where the error type is always [`Error`].
///
/// # Examples
///
/// ```rust
/// use rootgraph::{Graph, NodeId, Result};
///
/// fn attach(graph: &mut Graph<&'static str>) -> Result<NodeId> {
///     graph.insert(&"root", "child")
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

pub use error::{Error, Lookup, Rejection};

/// The rooted graph and its node handle.
///
/// See [`graph::Graph`] for the full API.
pub use graph::{Graph, NodeId, Traversal, TraversalOrder};

/// Traversal algorithms over any [`graph::Successors`] implementation.
pub use graph::algorithms;
