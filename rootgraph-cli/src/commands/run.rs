use std::{fs, path::Path};

use anyhow::Context;
use rootgraph::Graph;
use serde::Serialize;

use crate::{
    app::GlobalOptions,
    commands::script::{self, Statement},
    output::{print_block, print_output},
};

#[derive(Debug, Serialize)]
struct StepReport {
    line: usize,
    command: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    output: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

#[derive(Debug, Serialize)]
struct RunReport {
    script: String,
    steps: Vec<StepReport>,
    failures: usize,
}

/// The graph a script operates on. Starts empty until a `root` statement.
#[derive(Default)]
pub struct Session {
    graph: Graph<String>,
}

impl Session {
    /// Execute one statement and return the lines it reports.
    pub fn execute(&mut self, statement: &Statement) -> rootgraph::Result<Vec<String>> {
        let graph = &mut self.graph;
        let lines = match statement {
            Statement::Root { data, children } => {
                *graph = Graph::with_children(data.clone(), children.iter().cloned());
                Vec::new()
            }
            Statement::Insert { parent, child } => {
                let id = graph.insert(parent, child.clone())?;
                log::debug!("{child} linked as {id}");
                Vec::new()
            }
            Statement::Swap { from, to, child } => {
                if graph.swap(from, to, child)? {
                    Vec::new()
                } else {
                    vec![format!("{from} has no child {child}; nothing moved")]
                }
            }
            Statement::Delete { data } => {
                let removed = graph.delete_node(data)?;
                vec![format!("deleted {removed}")]
            }
            Statement::Print(order) => graph.traverse(*order).lines(),
            Statement::Find { data, order } => {
                let line = match graph.find(data, *order) {
                    Some(id) => format!("{data} found at {id}"),
                    None => format!("{data} not found"),
                };
                vec![line]
            }
            Statement::Parents { data } => {
                vec![format!("{data}: {} parent edge(s)", graph.parent_count(data))]
            }
            Statement::Dot => graph.to_dot("rootgraph").lines().map(str::to_string).collect(),
        };
        Ok(lines)
    }
}

pub fn run(path: &Path, strict: bool, opts: &GlobalOptions) -> anyhow::Result<()> {
    let source = fs::read_to_string(path)
        .with_context(|| format!("failed to read script: {}", path.display()))?;
    let lines = script::parse(&source)
        .with_context(|| format!("failed to parse script: {}", path.display()))?;

    let mut session = Session::default();
    let mut steps = Vec::with_capacity(lines.len());
    let mut failures = 0;

    for line in &lines {
        let command = line.statement.to_string();
        match session.execute(&line.statement) {
            Ok(output) => steps.push(StepReport {
                line: line.number,
                command,
                output,
                error: None,
            }),
            Err(err) if strict => {
                return Err(err).with_context(|| format!("line {}: `{command}` failed", line.number));
            }
            Err(err) => {
                log::warn!("line {}: {err}", line.number);
                failures += 1;
                steps.push(StepReport {
                    line: line.number,
                    command,
                    output: Vec::new(),
                    error: Some(err.to_string()),
                });
            }
        }
    }

    let report = RunReport {
        script: path.display().to_string(),
        steps,
        failures,
    };

    print_output(&report, opts, |report| {
        for step in &report.steps {
            match &step.error {
                Some(error) => println!("{:>4}  {}  ! {error}", step.line, step.command),
                None => println!("{:>4}  {}", step.line, step.command),
            }
            if !step.output.is_empty() {
                print_block(&step.output, "        ");
            }
        }
        if report.failures > 0 {
            println!("\n{} of {} statements failed", report.failures, report.steps.len());
        }
    })
}
