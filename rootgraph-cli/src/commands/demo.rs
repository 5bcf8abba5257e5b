use rootgraph::{Graph, TraversalOrder};
use serde::Serialize;

use crate::{
    app::GlobalOptions,
    output::{print_block, print_output},
};

#[derive(Debug, Serialize)]
struct Stage {
    part: u8,
    title: String,
    lines: Vec<String>,
}

#[derive(Debug, Serialize)]
struct DemoReport {
    order: String,
    stages: Vec<Stage>,
}

struct Recorder {
    order: TraversalOrder,
    stages: Vec<Stage>,
}

impl Recorder {
    fn snapshot(&mut self, part: u8, title: &str, graph: &Graph<i32>) {
        self.print(part, title, graph, self.order);
    }

    fn print(&mut self, part: u8, title: &str, graph: &Graph<i32>, order: TraversalOrder) {
        self.stages.push(Stage {
            part,
            title: title.to_string(),
            lines: graph.traverse(order).lines(),
        });
    }

    fn note(&mut self, part: u8, title: &str, lines: Vec<String>) {
        self.stages.push(Stage {
            part,
            title: title.to_string(),
            lines,
        });
    }
}

/// Build the walkthrough graph step by step and record every stage.
fn walkthrough(order: TraversalOrder) -> anyhow::Result<DemoReport> {
    let mut rec = Recorder {
        order,
        stages: Vec::new(),
    };

    // Part 1: construction
    let predefined = Graph::with_children(10, [5, 7, 9]);
    rec.snapshot(1, "root 10 with children 5, 7, 9", &predefined);

    let mut graph = Graph::with_root(1);
    rec.snapshot(1, "single root 1", &graph);

    // Part 2: insertion; 2 ends up under both 5 and 1
    for (parent, child) in [(1, 5), (1, 3), (1, 7), (5, 2), (5, 9), (5, 15), (5, 8), (1, 2)] {
        graph.insert(&parent, child)?;
    }
    rec.snapshot(2, "after inserting 5, 3, 7, 2, 9, 15, 8 and linking 2 under 1", &graph);

    // Part 3: deletion
    graph.insert(&3, 20)?;
    graph.insert(&1, 20)?;
    rec.snapshot(3, "before deletion (20 under 3 and 1)", &graph);

    let mut outcomes = Vec::new();
    for target in [2, 1] {
        if let Err(err) = graph.delete_node(&target) {
            outcomes.push(format!("delete {target}: {err}"));
        }
    }
    graph.delete_node(&3)?;
    outcomes.push("delete 3: ok".to_string());
    graph.insert(&7, 30)?;
    graph.delete_node(&30)?;
    outcomes.push("insert 30 under 7, delete 30: ok".to_string());
    rec.note(3, "deletion outcomes", outcomes);
    rec.snapshot(3, "after deletion", &graph);

    // Part 4: both orders
    rec.print(4, "breadth-first", &graph, TraversalOrder::Bfs);
    rec.print(4, "depth-first", &graph, TraversalOrder::Dfs);

    // Part 5: re-parenting
    rec.snapshot(5, "before moving 8 from 5 to 2", &graph);
    graph.swap(&5, &2, &8)?;
    rec.snapshot(5, "after moving 8 from 5 to 2", &graph);

    Ok(DemoReport {
        order: order.to_string(),
        stages: rec.stages,
    })
}

pub fn run(order: TraversalOrder, opts: &GlobalOptions) -> anyhow::Result<()> {
    let report = walkthrough(order)?;

    print_output(&report, opts, |report| {
        let mut part = 0;
        for stage in &report.stages {
            if stage.part != part {
                part = stage.part;
                println!("{}PART {part}", if part == 1 { "" } else { "\n" });
            }
            println!("  {}:", stage.title);
            print_block(&stage.lines, "    ");
        }
    })
}
