//! DOT format utilities for graph visualization.
//!
//! This module provides utilities for generating DOT format output,
//! which can be rendered using Graphviz tools.

/// Escapes a string for safe use inside a quoted DOT label.
///
/// Quotes, backslashes, and line breaks are escaped. Carriage returns are dropped.
/// Angle brackets are left alone because labels are always emitted quoted, never as HTML-like
/// `<...>` labels.
///
/// # Examples
///
/// ```rust,ignore
/// use rootgraph::utils::escape_dot;
///
/// assert_eq!(escape_dot("say \"hi\""), "say \\\"hi\\\"");
/// ```
#[must_use]
pub fn escape_dot(s: &str) -> String {
    let mut escaped = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '\\' => escaped.push_str("\\\\"),
            '"' => escaped.push_str("\\\""),
            '\n' => escaped.push_str("\\n"),
            '\r' => {}
            other => escaped.push(other),
        }
    }
    escaped
}
