//! Rooted, multi-parent directed graph.
//!
//! [`Graph`] stores its nodes in a generational arena and addresses them by
//! [`NodeId`]. Each node owns a payload and an ordered child list of
//! `NodeId`s. A child may appear under any number of parents, and cycles are
//! allowed.
//!
//! # Ownership
//!
//! Parents never own their children. The arena owns every node, and a node
//! stays alive while it is reachable from the root. Operations that remove
//! an edge ([`Graph::delete_node`], [`Graph::swap`]) finish with a sweep that
//! frees every slot the root can no longer reach, including detached cycles.
//!
//! # Payload addressing
//!
//! The mutating API addresses nodes by payload value, not by handle.
//! [`Graph::insert`] links an existing node when one with an equal payload is
//! already present, so payloads are unique for nodes created through it.
//! [`Graph::with_children`] is the exception and creates one node per listed
//! child, equal payloads included.
//!
//! # Examples
//!
//! ```rust
//! use rootgraph::{Error, Graph, Rejection};
//!
//! let mut graph = Graph::with_root(1);
//! graph.insert(&1, 5)?;
//! graph.insert(&1, 3)?;
//! graph.insert(&5, 2)?;
//! graph.insert(&1, 2)?;
//!
//! assert_eq!(graph.parent_count(&2), 2);
//! assert!(matches!(
//!     graph.delete_node(&2),
//!     Err(Error::Rejected(Rejection::SharedNode { parents: 2 }))
//! ));
//!
//! assert_eq!(graph.delete_node(&3)?, 3);
//! assert_eq!(graph.node_count(), 3);
//! # Ok::<(), rootgraph::Error>(())
//! ```

use generational_arena::Arena;
use log::{debug, trace};

use crate::{
    collections::{DoubleLinkedList, ListIter},
    graph::{
        algorithms::{bfs, dfs, reachable},
        print::{Traversal, TraversalOrder},
        GraphBase, NodeId, RootedGraph, Successors,
    },
    Error, Lookup, Rejection, Result,
};

/// A node of a [`Graph`]: a payload and an ordered list of children.
#[derive(Debug, Clone)]
pub struct GraphNode<T> {
    data: T,
    children: DoubleLinkedList<NodeId>,
}

impl<T> GraphNode<T> {
    fn new(data: T) -> Self {
        GraphNode {
            data,
            children: DoubleLinkedList::new(),
        }
    }

    /// Returns the payload.
    #[must_use]
    pub fn data(&self) -> &T {
        &self.data
    }

    /// Returns the children in insertion order, duplicates included.
    pub fn children(&self) -> std::iter::Copied<ListIter<'_, NodeId>> {
        self.children.iter().copied()
    }

    /// Returns the number of child entries.
    #[must_use]
    pub fn child_count(&self) -> usize {
        self.children.len()
    }

    /// Returns `true` if the node has no children.
    #[must_use]
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }
}

/// A rooted directed graph whose nodes may have several parents.
///
/// See the [module documentation](self) for the ownership model.
///
/// Searches and traversals take `&self` and keep their visited state local
/// to the call, so any number of them may run over a shared `&Graph<T>`.
/// Mutation takes `&mut self`.
#[derive(Debug, Clone)]
pub struct Graph<T> {
    nodes: Arena<GraphNode<T>>,
    root: Option<NodeId>,
}

impl<T> Graph<T> {
    /// Creates an empty graph with no root.
    ///
    /// Every mutating operation on an empty graph fails with
    /// [`Error::NotFound`]`(`[`Lookup::Root`]`)`.
    #[must_use]
    pub fn new() -> Self {
        Graph {
            nodes: Arena::new(),
            root: None,
        }
    }

    /// Creates a graph holding a single root node.
    ///
    /// # Arguments
    ///
    /// * `data` - Payload of the root
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rootgraph::Graph;
    ///
    /// let graph = Graph::with_root("root");
    /// assert_eq!(graph.node_count(), 1);
    /// assert_eq!(graph.traverse_bfs().to_string(), "root()\n");
    /// ```
    #[must_use]
    pub fn with_root(data: T) -> Self {
        let mut nodes = Arena::new();
        let root = NodeId::from(nodes.insert(GraphNode::new(data)));
        Graph {
            nodes,
            root: Some(root),
        }
    }

    /// Creates a graph with a root and one fresh child node per listed payload.
    ///
    /// Children are attached in iteration order. Equal payloads produce
    /// distinct nodes; no deduplication happens here.
    ///
    /// # Arguments
    ///
    /// * `root` - Payload of the root
    /// * `children` - Payloads of the root's children
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rootgraph::Graph;
    ///
    /// let graph = Graph::with_children(10, [5, 7, 9]);
    /// assert_eq!(graph.traverse_bfs().lines()[0], "10(5, 7, 9)");
    /// ```
    #[must_use]
    pub fn with_children<I>(root: T, children: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let mut graph = Self::with_root(root);
        if let Some(root) = graph.root {
            for data in children {
                let child = NodeId::from(graph.nodes.insert(GraphNode::new(data)));
                if let Some(node) = graph.nodes.get_mut(root.arena_index()) {
                    node.children.push_back(child);
                }
            }
        }
        graph
    }

    /// Returns the root, or `None` for an empty graph.
    #[must_use]
    pub fn root(&self) -> Option<NodeId> {
        self.root
    }

    /// Returns `true` if the graph has no root.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Returns the number of live nodes.
    ///
    /// Because detached nodes are reclaimed eagerly, this equals the number of
    /// nodes reachable from the root.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Returns the number of child entries across all reachable nodes.
    ///
    /// A parent that lists the same child twice contributes two.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.traverse_bfs()
            .nodes()
            .filter_map(|id| self.node(id))
            .map(GraphNode::child_count)
            .sum()
    }

    /// Returns the node behind `id`, or `None` if it was reclaimed.
    #[must_use]
    pub fn node(&self, id: NodeId) -> Option<&GraphNode<T>> {
        self.nodes.get(id.arena_index())
    }

    /// Returns the payload of `id`, or `None` if it was reclaimed.
    #[must_use]
    pub fn data(&self, id: NodeId) -> Option<&T> {
        self.node(id).map(GraphNode::data)
    }

    /// Returns a mutable reference to the payload of `id`.
    ///
    /// Every parent linking `id` observes the change.
    ///
    /// Changing a payload to one that another node already carries makes
    /// payload-addressed operations ambiguous; they then act on whichever node
    /// their search reaches first.
    pub fn data_mut(&mut self, id: NodeId) -> Option<&mut T> {
        self.nodes
            .get_mut(id.arena_index())
            .map(|node| &mut node.data)
    }

    /// Returns the children of `id` in child order. Yields nothing for a
    /// reclaimed `id`.
    pub fn children(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        self.node(id).into_iter().flat_map(GraphNode::children)
    }

    /// Returns a printed-traversal view in breadth-first order.
    #[must_use]
    pub fn traverse_bfs(&self) -> Traversal<'_, T> {
        Traversal::new(self, TraversalOrder::Bfs)
    }

    /// Returns a printed-traversal view in depth-first order.
    #[must_use]
    pub fn traverse_dfs(&self) -> Traversal<'_, T> {
        Traversal::new(self, TraversalOrder::Dfs)
    }

    /// Returns a printed-traversal view in the given order.
    #[must_use]
    pub fn traverse(&self, order: TraversalOrder) -> Traversal<'_, T> {
        Traversal::new(self, order)
    }

    /// Frees every node the root no longer reaches and returns how many were freed.
    fn reclaim(&mut self) -> usize {
        let live = match self.root {
            Some(root) => reachable(&*self, root),
            None => return 0,
        };

        let before = self.nodes.len();
        self.nodes
            .retain(|index, _| live.contains(NodeId::from(index).index()));
        let freed = before - self.nodes.len();

        if freed > 0 {
            debug!("reclaimed {freed} unreachable node(s)");
        }
        freed
    }

    fn require_root(&self) -> Result<NodeId> {
        self.root.ok_or(Error::NotFound(Lookup::Root))
    }
}

impl<T: PartialEq> Graph<T> {
    /// Finds the first node in breadth-first order whose payload equals `data`.
    ///
    /// # Returns
    ///
    /// The matching node, or `None` if no reachable node matches or the graph
    /// is empty. A matching root is returned without expanding its children.
    #[must_use]
    pub fn find_bfs(&self, data: &T) -> Option<NodeId> {
        let root = self.root?;
        let found = bfs(self, root).find(|&id| self.data(id) == Some(data));
        trace!("bfs search: {found:?}");
        found
    }

    /// Finds the first node in depth-first order whose payload equals `data`.
    ///
    /// Siblings are explored last-inserted first.
    #[must_use]
    pub fn find_dfs(&self, data: &T) -> Option<NodeId> {
        let root = self.root?;
        let found = dfs(self, root).find(|&id| self.data(id) == Some(data));
        trace!("dfs search: {found:?}");
        found
    }

    /// Finds the first node in `order` whose payload equals `data`.
    #[must_use]
    pub fn find(&self, data: &T, order: TraversalOrder) -> Option<NodeId> {
        match order {
            TraversalOrder::Bfs => self.find_bfs(data),
            TraversalOrder::Dfs => self.find_dfs(data),
        }
    }

    /// Returns `true` if a reachable node carries `data`.
    #[must_use]
    pub fn contains(&self, data: &T) -> bool {
        self.find_bfs(data).is_some()
    }

    /// Counts the reachable child entries whose target payload equals `data`.
    ///
    /// This is an edge count: a parent listing the child twice counts twice.
    /// Returns 0 for an empty graph or an absent payload.
    #[must_use]
    pub fn parent_count(&self, data: &T) -> usize {
        let Some(root) = self.root else {
            return 0;
        };
        dfs(self, root)
            .flat_map(|id| self.children(id))
            .filter(|&child| self.data(child) == Some(data))
            .count()
    }

    /// Links `data` as the last child of the node carrying `parent`.
    ///
    /// The parent is located breadth-first. If a node with payload `data`
    /// already exists anywhere in the graph (located depth-first), that node
    /// is linked and no new node is created; the result is a shared child.
    ///
    /// # Arguments
    ///
    /// * `parent` - Payload of the node to attach to
    /// * `data` - Payload of the child
    ///
    /// # Returns
    ///
    /// The `NodeId` that was linked, new or existing.
    ///
    /// # Errors
    ///
    /// - [`Error::NotFound`]`(`[`Lookup::Root`]`)` if the graph is empty
    /// - [`Error::NotFound`]`(`[`Lookup::Parent`]`)` if no node carries `parent`
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rootgraph::Graph;
    ///
    /// let mut graph = Graph::with_root("a");
    /// let b = graph.insert(&"a", "b")?;
    /// graph.insert(&"a", "c")?;
    /// assert_eq!(graph.insert(&"c", "b")?, b);
    /// assert_eq!(graph.node_count(), 3);
    /// # Ok::<(), rootgraph::Error>(())
    /// ```
    pub fn insert(&mut self, parent: &T, data: T) -> Result<NodeId> {
        self.require_root()?;
        let parent_id = self
            .find_bfs(parent)
            .ok_or(Error::NotFound(Lookup::Parent))?;

        let child = match self.find_dfs(&data) {
            Some(existing) => {
                debug!("linking existing node {existing} under {parent_id}");
                existing
            }
            None => {
                let created = NodeId::from(self.nodes.insert(GraphNode::new(data)));
                debug!("created node {created} under {parent_id}");
                created
            }
        };

        let node = self
            .nodes
            .get_mut(parent_id.arena_index())
            .ok_or(Error::NotFound(Lookup::Parent))?;
        node.children.push_back(child);
        Ok(child)
    }

    /// Moves one `data` child from `current_parent` to `new_parent`.
    ///
    /// Both parents are located breadth-first. The first child of
    /// `current_parent` carrying `data` is appended to `new_parent`'s children
    /// and that single entry is removed from `current_parent`. Other entries
    /// for the same child stay where they are. When both parents are the same
    /// node, the child moves to the end of its list.
    ///
    /// # Arguments
    ///
    /// * `current_parent` - Payload of the parent the child is moved away from
    /// * `new_parent` - Payload of the parent the child is moved to
    /// * `data` - Payload of the child to move
    ///
    /// # Returns
    ///
    /// `Ok(true)` if a child moved, `Ok(false)` if `current_parent` has no child
    /// carrying `data`. The latter leaves the graph unchanged.
    ///
    /// # Errors
    ///
    /// - [`Error::NotFound`]`(`[`Lookup::Root`]`)` if the graph is empty
    /// - [`Error::NotFound`]`(`[`Lookup::CurrentParent`]`)` or
    ///   [`Error::NotFound`]`(`[`Lookup::NewParent`]`)` if a parent is absent
    pub fn swap(&mut self, current_parent: &T, new_parent: &T, data: &T) -> Result<bool> {
        self.require_root()?;
        let from = self
            .find_bfs(current_parent)
            .ok_or(Error::NotFound(Lookup::CurrentParent))?;
        let to = self
            .find_bfs(new_parent)
            .ok_or(Error::NotFound(Lookup::NewParent))?;

        let Some((position, child)) = self
            .children(from)
            .enumerate()
            .find(|&(_, child)| self.data(child) == Some(data))
        else {
            trace!("swap: {from} has no matching child");
            return Ok(false);
        };

        self.nodes
            .get_mut(to.arena_index())
            .ok_or(Error::NotFound(Lookup::NewParent))?
            .children
            .push_back(child);
        self.nodes
            .get_mut(from.arena_index())
            .ok_or(Error::NotFound(Lookup::CurrentParent))?
            .children
            .remove(position)?;

        debug!("moved {child} from {from} to {to}");
        self.reclaim();
        Ok(true)
    }

    /// Deletes the node carrying `data` and returns its payload.
    ///
    /// The node is located depth-first. Deletion only proceeds when exactly one
    /// reachable edge points at `data`; that edge is removed, the node is freed,
    /// and any descendants that became unreachable are freed with it.
    ///
    /// # Errors
    ///
    /// - [`Error::NotFound`]`(`[`Lookup::Root`]`)` if the graph is empty
    /// - [`Error::NotFound`]`(`[`Lookup::Node`]`)` if no node carries `data`
    /// - [`Error::Rejected`]`(`[`Rejection::RootNode`]`)` if `data` is the root's payload
    /// - [`Error::Rejected`]`(`[`Rejection::SharedNode`]`)` if more than one edge
    ///   points at `data`
    ///
    /// A rejected deletion leaves the graph unchanged.
    pub fn delete_node(&mut self, data: &T) -> Result<T> {
        let root = self.require_root()?;
        let target = self.find_dfs(data).ok_or(Error::NotFound(Lookup::Node))?;

        if self.data(root) == Some(data) {
            return Err(Rejection::RootNode.into());
        }

        let parents = self.parent_count(data);
        if parents > 1 {
            debug!("refusing to delete {target}: {parents} parent edges");
            return Err(Rejection::SharedNode { parents }.into());
        }

        let holder = dfs(&*self, root)
            .find_map(|id| {
                self.children(id)
                    .position(|child| child == target)
                    .map(|position| (id, position))
            })
            .ok_or(Error::NotFound(Lookup::Node))?;

        let (parent_id, position) = holder;
        self.nodes
            .get_mut(parent_id.arena_index())
            .ok_or(Error::NotFound(Lookup::Node))?
            .children
            .remove(position)?;

        let removed = self
            .nodes
            .remove(target.arena_index())
            .ok_or(Error::NotFound(Lookup::Node))?;
        debug!("deleted {target} from {parent_id}");

        self.reclaim();
        Ok(removed.data)
    }
}

impl<T> Default for Graph<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> GraphBase for Graph<T> {
    fn node_bound(&self) -> usize {
        self.nodes.capacity()
    }

    fn node_ids(&self) -> impl Iterator<Item = NodeId> {
        self.nodes.iter().map(|(index, _)| NodeId::from(index))
    }

    fn contains_node(&self, node: NodeId) -> bool {
        self.nodes.contains(node.arena_index())
    }
}

impl<T> Successors for Graph<T> {
    fn successors(&self, node: NodeId) -> impl Iterator<Item = NodeId> {
        self.children(node)
    }
}

impl<T> RootedGraph for Graph<T> {
    fn root(&self) -> Option<NodeId> {
        self.root
    }
}
