//! Printed traversal and DOT export.
//!
//! A [`Traversal`] is a borrowed view over a [`Graph`] in a fixed
//! [`TraversalOrder`]. It renders each reachable node once as
//! `payload(child0, child1, ...)`, listing the node's whole child list,
//! including children already printed earlier in the walk.
//!
//! # Examples
//!
//! ```rust
//! use rootgraph::Graph;
//!
//! let mut graph = Graph::with_root(1);
//! graph.insert(&1, 5)?;
//! graph.insert(&1, 3)?;
//! graph.insert(&5, 2)?;
//! graph.insert(&1, 2)?;
//!
//! assert_eq!(graph.traverse_bfs().to_string(), "1(5, 3, 2)\n5(2)\n3()\n2()\n");
//! # Ok::<(), rootgraph::Error>(())
//! ```

use std::fmt::{self, Write};

use strum::{Display, EnumIter, EnumString};

use crate::{
    graph::{
        algorithms::{bfs, dfs, BfsIterator, DfsIterator},
        Graph, NodeId,
    },
    utils::escape_dot,
};

/// Frontier discipline used for search and printed traversal.
///
/// Parses from and displays as `bfs` / `dfs`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, EnumString, EnumIter,
)]
#[strum(serialize_all = "lowercase")]
pub enum TraversalOrder {
    /// Breadth-first: siblings in insertion order, level by level.
    #[default]
    Bfs,
    /// Depth-first: last-inserted sibling expanded first.
    Dfs,
}

/// Iterator over the nodes of a [`Traversal`], in walk order.
pub struct Nodes<'g, T> {
    walk: Walk<'g, T>,
}

enum Walk<'g, T> {
    Bfs(BfsIterator<'g, Graph<T>>),
    Dfs(DfsIterator<'g, Graph<T>>),
    Empty,
}

impl<T> Iterator for Nodes<'_, T> {
    type Item = NodeId;

    fn next(&mut self) -> Option<Self::Item> {
        match &mut self.walk {
            Walk::Bfs(iter) => iter.next(),
            Walk::Dfs(iter) => iter.next(),
            Walk::Empty => None,
        }
    }
}

/// A printed-traversal view over a graph.
///
/// Obtained from [`Graph::traverse`], [`Graph::traverse_bfs`] or
/// [`Graph::traverse_dfs`]. The view is lazy and can be walked any number of
/// times; each walk starts from a fresh visited set.
pub struct Traversal<'g, T> {
    graph: &'g Graph<T>,
    order: TraversalOrder,
}

impl<'g, T> Traversal<'g, T> {
    pub(crate) fn new(graph: &'g Graph<T>, order: TraversalOrder) -> Self {
        Traversal { graph, order }
    }

    /// Returns the order this view walks in.
    #[must_use]
    pub fn order(&self) -> TraversalOrder {
        self.order
    }

    /// Returns the visited nodes in walk order.
    pub fn nodes(&self) -> Nodes<'g, T> {
        let walk = match (self.graph.root(), self.order) {
            (Some(root), TraversalOrder::Bfs) => Walk::Bfs(bfs(self.graph, root)),
            (Some(root), TraversalOrder::Dfs) => Walk::Dfs(dfs(self.graph, root)),
            (None, _) => Walk::Empty,
        };
        Nodes { walk }
    }

    /// Returns each visited node's payload together with the payloads of all
    /// of its children, in child order.
    pub fn entries(&self) -> impl Iterator<Item = (&'g T, Vec<&'g T>)> + 'g {
        let graph = self.graph;
        self.nodes().filter_map(move |id| {
            let node = graph.node(id)?;
            let children = node
                .children()
                .filter_map(|child| graph.data(child))
                .collect();
            Some((node.data(), children))
        })
    }
}

impl<T: fmt::Display> Traversal<'_, T> {
    /// Renders every visited node as one `payload(children)` line.
    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        self.entries()
            .map(|(data, children)| render_line(data, &children))
            .collect()
    }
}

impl<T: fmt::Display> fmt::Display for Traversal<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (data, children) in self.entries() {
            writeln!(f, "{}", render_line(data, &children))?;
        }
        Ok(())
    }
}

fn render_line<T: fmt::Display>(data: &T, children: &[&T]) -> String {
    let mut line = format!("{data}(");
    for (i, child) in children.iter().enumerate() {
        if i > 0 {
            line.push_str(", ");
        }
        let _ = write!(line, "{child}");
    }
    line.push(')');
    line
}

impl<T: fmt::Display> Graph<T> {
    /// Generates a DOT format representation of the reachable graph.
    ///
    /// Nodes are emitted in BFS order and labelled with their escaped payload.
    /// The root is highlighted in green and leaves in blue. Every child entry
    /// becomes one edge, so a parent that lists a child twice gets two edges.
    ///
    /// # Arguments
    ///
    /// * `name` - Graph name, used as the digraph identifier and label
    ///
    /// # Returns
    ///
    /// A string containing the DOT representation.
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// use rootgraph::Graph;
    ///
    /// let graph = Graph::with_children("root", ["a", "b"]);
    /// std::fs::write("graph.dot", graph.to_dot("Example"))?;
    /// ```
    #[must_use]
    pub fn to_dot(&self, name: &str) -> String {
        let mut dot = String::new();
        let name = escape_dot(name);

        let _ = writeln!(dot, "digraph \"{name}\" {{");
        let _ = writeln!(dot, "    label=\"{name}\";");
        dot.push_str("    labelloc=t;\n");
        dot.push_str("    node [shape=box, fontname=\"Courier\", fontsize=10];\n");
        dot.push_str("    rankdir=TB;\n");

        let order: Vec<NodeId> = self.traverse_bfs().nodes().collect();
        if !order.is_empty() {
            dot.push('\n');
        }

        for &id in &order {
            if let Some(node) = self.node(id) {
                let style = if Some(id) == self.root() {
                    ", style=filled, fillcolor=lightgreen"
                } else if node.is_leaf() {
                    ", style=filled, fillcolor=lightblue"
                } else {
                    ""
                };
                let label = escape_dot(&node.data().to_string());
                let _ = writeln!(dot, "    \"{id}\" [label=\"{label}\"{style}];");
            }
        }

        if self.edge_count() > 0 {
            dot.push('\n');
        }

        for &id in &order {
            for child in self.children(id) {
                let _ = writeln!(dot, "    \"{id}\" -> \"{child}\";");
            }
        }

        dot.push_str("}\n");
        dot
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;
    use strum::IntoEnumIterator;

    fn scenario() -> Graph<i32> {
        let mut graph = Graph::with_root(1);
        graph.insert(&1, 5).unwrap();
        graph.insert(&1, 3).unwrap();
        graph.insert(&5, 2).unwrap();
        graph.insert(&1, 2).unwrap();
        graph
    }

    #[test]
    fn test_traversal_order_strings() {
        assert_eq!(TraversalOrder::Bfs.to_string(), "bfs");
        assert_eq!(TraversalOrder::from_str("dfs").unwrap(), TraversalOrder::Dfs);
        assert!(TraversalOrder::from_str("level").is_err());
        assert_eq!(TraversalOrder::iter().count(), 2);
        assert_eq!(TraversalOrder::default(), TraversalOrder::Bfs);
    }

    #[test]
    fn test_bfs_lines_list_visited_children() {
        let graph = scenario();
        assert_eq!(
            graph.traverse_bfs().lines(),
            vec!["1(5, 3, 2)", "5(2)", "3()", "2()"]
        );
    }

    #[test]
    fn test_dfs_lines_expand_last_child_first() {
        let graph = scenario();
        // 2 is pushed by the root before 5 is expanded, so 5 only lists it
        assert_eq!(
            graph.traverse_dfs().lines(),
            vec!["1(5, 3, 2)", "2()", "3()", "5(2)"]
        );
    }

    #[test]
    fn test_display_terminates_each_line() {
        let graph = Graph::with_children(10, [5, 7, 9]);
        assert_eq!(
            graph.traverse(TraversalOrder::Bfs).to_string(),
            "10(5, 7, 9)\n5()\n7()\n9()\n"
        );
    }

    #[test]
    fn test_empty_graph_prints_nothing() {
        let graph: Graph<i32> = Graph::new();
        assert_eq!(graph.traverse_bfs().to_string(), "");
        assert!(graph.traverse_dfs().lines().is_empty());
        assert_eq!(graph.traverse_bfs().nodes().count(), 0);
    }

    #[test]
    fn test_traversal_can_be_walked_repeatedly() {
        let graph = scenario();
        let view = graph.traverse_bfs();
        assert_eq!(view.nodes().count(), 4);
        assert_eq!(view.nodes().count(), 4);
        assert_eq!(view.order(), TraversalOrder::Bfs);
    }

    #[test]
    fn test_entries_pair_payload_with_children() {
        let graph = scenario();
        let entries: Vec<_> = graph.traverse_bfs().entries().collect();
        assert_eq!(entries[0], (&1, vec![&5, &3, &2]));
        assert_eq!(entries[1], (&5, vec![&2]));
    }

    #[test]
    fn test_to_dot() {
        let graph = scenario();
        let dot = graph.to_dot("Demo");
        assert!(dot.starts_with("digraph \"Demo\" {\n"));
        assert!(dot.ends_with("}\n"));
        assert_eq!(dot.matches(" -> ").count(), graph.edge_count());
        assert!(dot.contains("[label=\"1\", style=filled, fillcolor=lightgreen]"));
        assert!(dot.contains("[label=\"3\", style=filled, fillcolor=lightblue]"));
    }

    #[test]
    fn test_to_dot_escapes_labels() {
        let graph = Graph::with_root("say \"hi\"");
        let dot = graph.to_dot("quote\"d");
        assert!(dot.contains("digraph \"quote\\\"d\""));
        assert!(dot.contains("label=\"say \\\"hi\\\"\""));
    }

    #[test]
    fn test_to_dot_empty_graph() {
        let graph: Graph<u8> = Graph::new();
        let dot = graph.to_dot("Empty");
        assert!(!dot.contains("->"));
        assert!(!dot.contains("[label="));
    }
}
