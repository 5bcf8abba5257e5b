//! Graph integration tests.
//!
//! These tests drive the public API through complete scenarios:
//! 1. Build a graph with shared children
//! 2. Print it in both orders
//! 3. Mutate it (insert, swap, delete) including the refused cases
//! 4. Verify that nothing a failed or finished operation did leaks into the next one

use rootgraph::{
    algorithms::{bfs, dfs},
    collections::DoubleLinkedList,
    Error, Graph, Lookup, Rejection, Result, TraversalOrder,
};

/// root=1, 1 -> [5, 3, 2], 5 -> [2]
fn shared_two() -> Result<Graph<i32>> {
    let mut graph = Graph::with_root(1);
    graph.insert(&1, 5)?;
    graph.insert(&1, 3)?;
    graph.insert(&5, 2)?;
    graph.insert(&1, 2)?;
    Ok(graph)
}

/// The walkthrough graph: 1 -> [5, 3, 7, 2], 5 -> [2, 9, 15, 8]
fn walkthrough() -> Result<Graph<i32>> {
    let mut graph = Graph::with_root(1);
    for (parent, child) in [(1, 5), (1, 3), (1, 7), (5, 2), (5, 9), (5, 15), (5, 8), (1, 2)] {
        graph.insert(&parent, child)?;
    }
    Ok(graph)
}

#[test]
fn test_shared_child_scenario() -> Result<()> {
    let mut graph = shared_two()?;

    assert_eq!(
        graph.traverse_bfs().lines(),
        vec!["1(5, 3, 2)", "5(2)", "3()", "2()"]
    );
    assert_eq!(graph.parent_count(&2), 2);

    let before = graph.traverse_bfs().to_string();
    match graph.delete_node(&2) {
        Err(Error::Rejected(Rejection::SharedNode { parents })) => assert_eq!(parents, 2),
        other => panic!("expected a SharedNode rejection, got {other:?}"),
    }
    assert_eq!(graph.traverse_bfs().to_string(), before);
    assert_eq!(graph.node_count(), 4);
    Ok(())
}

#[test]
fn test_empty_graph_scenario() {
    let mut graph: Graph<i32> = Graph::new();

    assert_eq!(graph.traverse_bfs().to_string(), "");
    assert_eq!(graph.traverse_dfs().to_string(), "");
    assert!(matches!(
        graph.insert(&1, 2),
        Err(Error::NotFound(Lookup::Root))
    ));
    assert!(matches!(
        graph.swap(&1, &2, &3),
        Err(Error::NotFound(Lookup::Root))
    ));
    assert!(matches!(
        graph.delete_node(&1),
        Err(Error::NotFound(Lookup::Root))
    ));
}

#[test]
fn test_walkthrough_prints() -> Result<()> {
    let constructed = Graph::with_children(10, [5, 7, 9]);
    assert_eq!(
        constructed.traverse_bfs().to_string(),
        "10(5, 7, 9)\n5()\n7()\n9()\n"
    );

    let mut graph = walkthrough()?;
    assert_eq!(
        graph.traverse_bfs().lines(),
        vec![
            "1(5, 3, 7, 2)",
            "5(2, 9, 15, 8)",
            "3()",
            "7()",
            "2()",
            "9()",
            "15()",
            "8()"
        ]
    );

    graph.insert(&3, 20)?;
    graph.insert(&1, 20)?;
    assert_eq!(graph.delete_node(&3)?, 3);
    graph.insert(&7, 30)?;
    assert_eq!(graph.delete_node(&30)?, 30);

    assert_eq!(
        graph.traverse_bfs().lines(),
        vec![
            "1(5, 7, 2, 20)",
            "5(2, 9, 15, 8)",
            "7()",
            "2()",
            "20()",
            "9()",
            "15()",
            "8()"
        ]
    );
    assert_eq!(
        graph.traverse_dfs().lines(),
        vec![
            "1(5, 7, 2, 20)",
            "20()",
            "2()",
            "7()",
            "5(2, 9, 15, 8)",
            "8()",
            "15()",
            "9()"
        ]
    );

    assert!(graph.swap(&5, &2, &8)?);
    assert_eq!(
        graph.traverse_bfs().lines(),
        vec![
            "1(5, 7, 2, 20)",
            "5(2, 9, 15)",
            "7()",
            "2(8)",
            "20()",
            "9()",
            "15()",
            "8()"
        ]
    );
    Ok(())
}

#[test]
fn test_root_search_returns_root_in_both_orders() -> Result<()> {
    let graph = walkthrough()?;
    let root = graph.root();
    assert_eq!(graph.find_bfs(&1), root);
    assert_eq!(graph.find_dfs(&1), root);
    Ok(())
}

#[test]
fn test_no_state_leaks_between_operations() -> Result<()> {
    let mut graph = walkthrough()?;
    let full: Vec<_> = graph.traverse_bfs().nodes().collect();

    // found, not found, and failed operations must not change what the next walk sees
    assert!(graph.find_dfs(&15).is_some());
    assert!(graph.find_bfs(&99).is_none());
    assert!(graph.insert(&99, 1).is_err());
    assert!(graph.swap(&5, &99, &2).is_err());
    assert!(graph.delete_node(&2).is_err());
    assert!(graph.delete_node(&1).is_err());

    assert_eq!(graph.traverse_bfs().nodes().collect::<Vec<_>>(), full);
    assert_eq!(graph.traverse_dfs().nodes().count(), full.len());

    // an abandoned iterator leaves nothing behind either
    let root = graph.root().ok_or(Error::NotFound(Lookup::Root))?;
    let mut partial = dfs(&graph, root);
    partial.next();
    drop(partial);
    assert_eq!(bfs(&graph, root).count(), full.len());
    Ok(())
}

#[test]
fn test_shared_child_identity() -> Result<()> {
    let mut graph = Graph::with_root("root");
    graph.insert(&"root", "p1")?;
    graph.insert(&"root", "p2")?;
    let first = graph.insert(&"p1", "x")?;
    let second = graph.insert(&"p2", "x")?;

    assert_eq!(first, second);
    assert_eq!(graph.parent_count(&"x"), 2);
    assert!(matches!(
        graph.delete_node(&"x"),
        Err(Error::Rejected(Rejection::SharedNode { parents: 2 }))
    ));

    if let Some(data) = graph.data_mut(first) {
        *data = "y";
    }
    let p1 = graph.find_bfs(&"p1").ok_or(Error::NotFound(Lookup::Parent))?;
    let p2 = graph.find_bfs(&"p2").ok_or(Error::NotFound(Lookup::Parent))?;
    for parent in [p1, p2] {
        let names: Vec<_> = graph.children(parent).filter_map(|c| graph.data(c)).collect();
        assert_eq!(names, vec![&"y"]);
    }
    Ok(())
}

#[test]
fn test_root_deletion_rejected_for_every_shape() -> Result<()> {
    let shapes = [
        Graph::with_root(1),
        Graph::with_children(1, [2, 3]),
        shared_two()?,
        walkthrough()?,
    ];
    for mut graph in shapes {
        let nodes = graph.node_count();
        assert!(matches!(
            graph.delete_node(&1),
            Err(Error::Rejected(Rejection::RootNode))
        ));
        assert_eq!(graph.node_count(), nodes);
    }
    Ok(())
}

#[test]
fn test_swap_moves_exactly_one_duplicate() -> Result<()> {
    let mut graph = Graph::with_root('a');
    graph.insert(&'a', 'b')?;
    graph.insert(&'a', 'c')?;
    let x = graph.insert(&'b', 'x')?;
    graph.insert(&'b', 'x')?;

    assert!(graph.swap(&'b', &'c', &'x')?);

    let b = graph.find_bfs(&'b').ok_or(Error::NotFound(Lookup::Node))?;
    let c = graph.find_bfs(&'c').ok_or(Error::NotFound(Lookup::Node))?;
    assert_eq!(graph.children(b).collect::<Vec<_>>(), vec![x]);
    assert_eq!(graph.children(c).collect::<Vec<_>>(), vec![x]);

    assert!(!graph.swap(&'a', &'c', &'x')?);
    Ok(())
}

#[test]
fn test_reclamation_frees_detached_subtree() -> Result<()> {
    let mut graph = Graph::with_root(0);
    let a = graph.insert(&0, 1)?;
    let b = graph.insert(&1, 2)?;
    let c = graph.insert(&2, 3)?;
    graph.insert(&0, 4)?;
    assert_eq!(graph.node_count(), 5);

    graph.delete_node(&1)?;
    assert_eq!(graph.node_count(), 2);
    for gone in [a, b, c] {
        assert!(graph.node(gone).is_none());
        assert_eq!(graph.data(gone), None);
    }
    assert_eq!(graph.traverse_bfs().lines(), vec!["0(4)", "4()"]);
    Ok(())
}

#[test]
fn test_find_dispatches_on_order() -> Result<()> {
    let graph = Graph::with_children(0, [7, 7]);
    let root = graph.root().ok_or(Error::NotFound(Lookup::Root))?;
    let kids: Vec<_> = graph.children(root).collect();

    assert_eq!(graph.find(&7, TraversalOrder::Bfs), Some(kids[0]));
    assert_eq!(graph.find(&7, TraversalOrder::Dfs), Some(kids[1]));
    Ok(())
}

#[test]
fn test_graph_is_shareable_across_threads() -> Result<()> {
    let graph = walkthrough()?;
    let expected = graph.traverse_bfs().to_string();

    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| scope.spawn(|| graph.traverse_bfs().to_string()))
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    });
    Ok(())
}

#[test]
fn test_list_reverse_scenario() {
    let mut list: DoubleLinkedList<i32> = [5, 7, 9].into_iter().collect();
    list.reverse();
    assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec![9, 7, 5]);

    let mut single: DoubleLinkedList<i32> = std::iter::once(1).collect();
    single.reverse();
    assert_eq!(single.iter().copied().collect::<Vec<_>>(), vec![1]);
}
