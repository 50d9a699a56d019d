//! Result printing shared by all commands.

use colored::Colorize;
use serde::Serialize;

use crate::OutputFormat;

/// Prints `value` as pretty JSON, unless `quiet`.
///
/// Text output is command specific; commands print it themselves and only
/// route JSON through here.
pub fn print<T: Serialize>(value: &T, format: OutputFormat, quiet: bool) {
    if quiet || format != OutputFormat::Json {
        return;
    }
    match serde_json::to_string_pretty(value) {
        Ok(json) => println!("{json}"),
        Err(e) => eprintln!("{}: failed to serialize output: {e}", "Error".red().bold()),
    }
}

/// Formats a labelled value line for text output.
pub fn field(label: &str, value: impl std::fmt::Display) -> String {
    format!("  {}: {}", label.cyan(), value)
}
