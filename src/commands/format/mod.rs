//! Shared output helpers for commands

use serde::Serialize;

use promptgrade_core::error::Result;

/// Print a value as pretty JSON on stdout
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Print records lines on stdout
pub fn print_records<I>(lines: I)
where
    I: IntoIterator<Item = String>,
{
    for line in lines {
        println!("{}", line);
    }
}

/// Indent every line of a block of text
pub fn indent(text: &str, prefix: &str) -> String {
    text.lines()
        .map(|line| {
            if line.is_empty() {
                String::new()
            } else {
                format!("{}{}", prefix, line)
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}
