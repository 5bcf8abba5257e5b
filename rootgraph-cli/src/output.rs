use serde::Serialize;

use crate::app::GlobalOptions;

/// Print `data` as JSON (if `--json`) or call `display_fn` for human-readable output.
pub fn print_output<T: Serialize>(
    data: &T,
    opts: &GlobalOptions,
    display_fn: impl FnOnce(&T),
) -> anyhow::Result<()> {
    if opts.json {
        let json = serde_json::to_string_pretty(data)?;
        println!("{json}");
    } else {
        display_fn(data);
    }
    Ok(())
}

/// Print `lines` indented by `indent`, or a placeholder when there are none.
pub fn print_block(lines: &[String], indent: &str) {
    if lines.is_empty() {
        println!("{indent}(empty)");
    }
    for line in lines {
        println!("{indent}{line}");
    }
}
