use strum::{Display, EnumIter, EnumString};
use thiserror::Error;

/// The role a payload was looked up in when it could not be found.
///
/// Carried by [`Error::NotFound`] so callers can tell which of several lookups
/// inside a single operation failed (for example, which parent of a
/// [`Graph::swap`](crate::Graph::swap) was missing).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter)]
#[strum(serialize_all = "kebab-case")]
pub enum Lookup {
    /// The graph has no root, so nothing can be located.
    Root,
    /// The parent an insertion should attach to.
    Parent,
    /// The parent a node is being moved away from.
    CurrentParent,
    /// The parent a node is being moved to.
    NewParent,
    /// The node targeted by a deletion.
    Node,
}

/// Why a structurally disallowed operation was refused.
///
/// A rejected operation never mutates the graph.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rejection {
    /// The root node can only be destroyed together with the whole graph.
    #[error("the root node cannot be deleted")]
    RootNode,

    /// The node is referenced by more than one parent edge.
    ///
    /// Removing one of those edges would leave the node owned by the others,
    /// so the deletion is refused as a whole.
    #[error("node is shared by {parents} parent edges")]
    SharedNode {
        /// Number of reachable edges pointing at the node's payload
        parents: usize,
    },
}

/// The generic Error type, which provides coverage for all errors this library can potentially
/// return.
///
/// Every variant is an expected, recoverable condition. Nothing in this crate
/// treats them as fatal, and no operation retries internally.
///
/// # Error Categories
///
/// ## Graph Errors
/// - [`Error::NotFound`] - A payload the operation depends on is absent
/// - [`Error::Rejected`] - The operation is structurally disallowed
///
/// ## Container Errors
/// - [`Error::EmptyCollection`] - The operation needs at least one element
/// - [`Error::IndexOutOfRange`] - Indexed access past the end of a list
///
/// # Examples
///
/// ```rust
/// use rootgraph::{Error, Graph, Rejection};
///
/// let mut graph = Graph::with_root(1);
/// match graph.delete_node(&1) {
///     Err(Error::Rejected(Rejection::RootNode)) => println!("root stays"),
///     Err(e) => println!("Other error: {e}"),
///     Ok(_) => unreachable!(),
/// }
/// ```
#[derive(Error, Debug)]
pub enum Error {
    /// A payload required by the operation does not exist in the graph.
    ///
    /// The [`Lookup`] names which role could not be resolved. An empty graph
    /// reports [`Lookup::Root`].
    #[error("{0} not found in graph")]
    NotFound(Lookup),

    /// The operation requires at least one element, but the collection is empty.
    #[error("Collection is empty")]
    EmptyCollection,

    /// An index past the end of a list was accessed.
    ///
    /// # Fields
    ///
    /// * `index` - The index that was requested
    /// * `len` - The length of the list at the time of the access
    #[error("Index {index} out of range for length {len}")]
    IndexOutOfRange {
        /// The index that was requested
        index: usize,
        /// The length of the list at the time of the access
        len: usize,
    },

    /// The operation is structurally disallowed and was not performed.
    #[error("Rejected - {0}")]
    Rejected(#[from] Rejection),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;
    use strum::IntoEnumIterator;

    #[test]
    fn test_not_found_display() {
        let err = Error::NotFound(Lookup::CurrentParent);
        assert_eq!(err.to_string(), "current-parent not found in graph");
    }

    #[test]
    fn test_lookup_round_trips_through_strings() {
        for lookup in Lookup::iter() {
            let parsed = Lookup::from_str(&lookup.to_string()).unwrap();
            assert_eq!(parsed, lookup);
        }
    }

    #[test]
    fn test_rejection_display() {
        assert_eq!(
            Error::from(Rejection::SharedNode { parents: 3 }).to_string(),
            "Rejected - node is shared by 3 parent edges"
        );
        assert_eq!(
            Error::Rejected(Rejection::RootNode).to_string(),
            "Rejected - the root node cannot be deleted"
        );
    }

    #[test]
    fn test_index_out_of_range_display() {
        let err = Error::IndexOutOfRange { index: 4, len: 2 };
        assert_eq!(err.to_string(), "Index 4 out of range for length 2");
    }
}
