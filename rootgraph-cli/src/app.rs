use std::path::PathBuf;

use clap::{Parser, Subcommand};
use rootgraph::TraversalOrder;

/// rootgraph - build, mutate and print rooted multi-parent graphs
#[derive(Debug, Parser)]
#[command(name = "rootgraph", version, about, long_about = None)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalOptions,

    #[command(subcommand)]
    pub command: Command,
}

/// Options shared across all subcommands.
#[derive(Debug, Parser)]
pub struct GlobalOptions {
    /// Emit output as JSON instead of human-readable text.
    #[arg(long, global = true)]
    pub json: bool,

    /// Enable verbose (debug-level) logging output.
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Replay the built-in walkthrough: construction, insertion, deletion, traversal, swap.
    Demo {
        /// Order used for the stage prints: bfs or dfs.
        #[arg(long, default_value_t = TraversalOrder::Bfs)]
        order: TraversalOrder,
    },

    /// Execute a script of graph operations, one per line.
    ///
    /// Commands: root, insert, swap, delete, bfs, dfs, find-bfs, find-dfs, parents, dot.
    /// Lines starting with '#' are comments.
    Run {
        /// Path to the script file.
        #[arg(value_name = "FILE")]
        path: PathBuf,

        /// Abort on the first failing operation instead of reporting it and continuing.
        #[arg(long)]
        strict: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parses_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["rootgraph", "demo", "--order", "dfs", "--json"]).unwrap();
        assert!(cli.global.json);
        assert!(!cli.global.verbose);
        match cli.command {
            Command::Demo { order } => assert_eq!(order, TraversalOrder::Dfs),
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_cli_run_defaults() {
        let cli = Cli::try_parse_from(["rootgraph", "-v", "run", "script.txt"]).unwrap();
        assert!(cli.global.verbose);
        match cli.command {
            Command::Run { path, strict } => {
                assert_eq!(path, PathBuf::from("script.txt"));
                assert!(!strict);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_cli_rejects_unknown_order() {
        assert!(Cli::try_parse_from(["rootgraph", "demo", "--order", "level"]).is_err());
    }
}
