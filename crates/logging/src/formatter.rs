//! crates/logging/src/formatter.rs
//! Plain `key=value` text rendering for the logger's default output.

use std::fmt::Write as _;

use crate::record::Record;

/// Renders `record` as a single `level=<lvl> msg=<msg> k=v ...` line.
///
/// Field names are written in sorted order so repeated records render
/// identically. The returned line ends with `\n`.
pub fn format_text(record: &Record) -> String {
    let mut line = String::with_capacity(32 + record.message.len());
    line.push_str("level=");
    line.push_str(record.level.as_str());
    line.push_str(" msg=");
    push_quoted(&mut line, &record.message);

    let mut names: Vec<&String> = record.fields.keys().collect();
    names.sort_unstable();
    for name in names {
        line.push(' ');
        line.push_str(name);
        line.push('=');
        push_quoted(&mut line, &record.fields[name].to_string());
    }
    line.push('\n');
    line
}

fn needs_quoting(text: &str) -> bool {
    text.is_empty()
        || text
            .chars()
            .any(|c| c.is_whitespace() || c.is_control() || matches!(c, '"' | '='))
}

fn push_quoted(line: &mut String, text: &str) {
    if !needs_quoting(text) {
        line.push_str(text);
        return;
    }
    // Debug formatting escapes quotes, backslashes and control characters.
    let _ = write!(line, "{text:?}");
}
