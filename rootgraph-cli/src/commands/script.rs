//! Line-oriented graph script parsing.
//!
//! One statement per line, whitespace-separated arguments, payloads are plain
//! strings. Blank lines and lines starting with `#` are skipped.
//!
//! ```text
//! root 1 5 7        # root 1 with children 5 and 7
//! insert 5 2
//! swap 5 7 2
//! delete 2
//! bfs
//! ```

use std::fmt;

use anyhow::{bail, Context};
use rootgraph::TraversalOrder;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Statement {
    /// Replace the current graph with a fresh one.
    Root { data: String, children: Vec<String> },
    Insert { parent: String, child: String },
    Swap { from: String, to: String, child: String },
    Delete { data: String },
    Print(TraversalOrder),
    Find { data: String, order: TraversalOrder },
    Parents { data: String },
    Dot,
}

/// A parsed statement and the 1-based line it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    pub number: usize,
    pub statement: Statement,
}

/// Parse a whole script. The first malformed line aborts parsing.
pub fn parse(source: &str) -> anyhow::Result<Vec<Line>> {
    let mut lines = Vec::new();
    for (index, raw) in source.lines().enumerate() {
        let number = index + 1;
        let text = raw.trim();
        if text.is_empty() || text.starts_with('#') {
            continue;
        }
        let statement = parse_statement(text).with_context(|| format!("line {number}: `{text}`"))?;
        lines.push(Line { number, statement });
    }
    Ok(lines)
}

fn parse_statement(text: &str) -> anyhow::Result<Statement> {
    let code = text.split_once('#').map_or(text, |(code, _)| code);
    let mut words = code.split_whitespace();
    let Some(command) = words.next() else {
        bail!("empty statement");
    };
    let args: Vec<String> = words.map(str::to_string).collect();

    let statement = match command {
        "root" => {
            let mut args = args.into_iter();
            let Some(data) = args.next() else {
                bail!("`root` expects at least 1 argument, got 0");
            };
            Statement::Root {
                data,
                children: args.collect(),
            }
        }
        "insert" => {
            let [parent, child] = take::<2>(command, args)?;
            Statement::Insert { parent, child }
        }
        "swap" => {
            let [from, to, child] = take::<3>(command, args)?;
            Statement::Swap { from, to, child }
        }
        "delete" => {
            let [data] = take::<1>(command, args)?;
            Statement::Delete { data }
        }
        "bfs" | "dfs" => {
            let [] = take::<0>(command, args)?;
            Statement::Print(command.parse()?)
        }
        "find-bfs" | "find-dfs" => {
            let [data] = take::<1>(command, args)?;
            let order = command.trim_start_matches("find-").parse()?;
            Statement::Find { data, order }
        }
        "parents" => {
            let [data] = take::<1>(command, args)?;
            Statement::Parents { data }
        }
        "dot" => {
            let [] = take::<0>(command, args)?;
            Statement::Dot
        }
        other => bail!("unknown command `{other}`"),
    };
    Ok(statement)
}

fn take<const N: usize>(command: &str, args: Vec<String>) -> anyhow::Result<[String; N]> {
    let (want, got) = (N, args.len());
    match <[String; N]>::try_from(args) {
        Ok(array) => Ok(array),
        Err(_) => bail!(
            "`{command}` expects {want} argument{}, got {got}",
            if want == 1 { "" } else { "s" }
        ),
    }
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Statement::Root { data, children } => {
                write!(f, "root {data}")?;
                for child in children {
                    write!(f, " {child}")?;
                }
                Ok(())
            }
            Statement::Insert { parent, child } => write!(f, "insert {parent} {child}"),
            Statement::Swap { from, to, child } => write!(f, "swap {from} {to} {child}"),
            Statement::Delete { data } => write!(f, "delete {data}"),
            Statement::Print(order) => write!(f, "{order}"),
            Statement::Find { data, order } => write!(f, "find-{order} {data}"),
            Statement::Parents { data } => write!(f, "parents {data}"),
            Statement::Dot => f.write_str("dot"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn single(text: &str) -> Statement {
        parse_statement(text).unwrap()
    }

    #[test]
    fn test_parse_every_command() {
        assert_eq!(
            single("root 1 5 7"),
            Statement::Root {
                data: "1".into(),
                children: vec!["5".into(), "7".into()]
            }
        );
        assert_eq!(
            single("insert a b"),
            Statement::Insert {
                parent: "a".into(),
                child: "b".into()
            }
        );
        assert_eq!(
            single("swap 5 2 8"),
            Statement::Swap {
                from: "5".into(),
                to: "2".into(),
                child: "8".into()
            }
        );
        assert_eq!(single("delete 3"), Statement::Delete { data: "3".into() });
        assert_eq!(single("bfs"), Statement::Print(TraversalOrder::Bfs));
        assert_eq!(single("dfs"), Statement::Print(TraversalOrder::Dfs));
        assert_eq!(
            single("find-dfs x"),
            Statement::Find {
                data: "x".into(),
                order: TraversalOrder::Dfs
            }
        );
        assert_eq!(single("parents 2"), Statement::Parents { data: "2".into() });
        assert_eq!(single("dot"), Statement::Dot);
    }

    #[test]
    fn test_statements_display_as_written() {
        for text in ["root 1 5 7", "insert a b", "swap 5 2 8", "find-bfs x", "dfs", "dot"] {
            assert_eq!(single(text).to_string(), text);
        }
    }

    #[test]
    fn test_parse_skips_blank_and_comment_lines() {
        let script = "# header\n\nroot 1\n   \ninsert 1 2  # trailing comment\nbfs\n";
        let lines = parse(script).unwrap();
        let numbers: Vec<_> = lines.iter().map(|l| l.number).collect();
        assert_eq!(numbers, vec![3, 5, 6]);
        assert_eq!(
            lines[1].statement,
            Statement::Insert {
                parent: "1".into(),
                child: "2".into()
            }
        );
    }

    #[test]
    fn test_wrong_argument_count_is_an_error() {
        let err = parse_statement("insert 1").unwrap_err();
        assert_eq!(err.to_string(), "`insert` expects 2 arguments, got 1");

        let err = parse_statement("delete").unwrap_err();
        assert_eq!(err.to_string(), "`delete` expects 1 argument, got 0");

        assert!(parse_statement("bfs now").is_err());
        assert!(parse_statement("root").is_err());
    }

    #[test]
    fn test_unknown_command_reports_line() {
        let err = parse("root 1\nfrobnicate 2\n").unwrap_err();
        assert_eq!(err.to_string(), "line 2: `frobnicate 2`");
        assert_eq!(err.root_cause().to_string(), "unknown command `frobnicate`");
    }
}
