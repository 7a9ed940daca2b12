//! Locating keys and tables in raw TOML text for diagnostics.

use miette::SourceSpan;

/// Span of the value assigned to `key`, e.g. `"cairo"` in `target = "cairo"`.
///
/// Only top-level `key = value` lines are considered; inline tables are
/// not searched.
pub fn find_value_span(src: &str, key: &str) -> Option<SourceSpan> {
    let mut offset = 0;
    for line in src.split_inclusive('\n') {
        let indent = line.len() - line.trim_start().len();
        let rest = &line[indent..];
        if let Some(after_key) = rest.strip_prefix(key) {
            let spaces = after_key.len() - after_key.trim_start().len();
            if let Some(after_eq) = after_key.trim_start().strip_prefix('=') {
                let value = after_eq.trim_start();
                let value_start =
                    offset + indent + key.len() + spaces + 1 + (after_eq.len() - value.len());
                let len = value_len(value);
                return Some(SourceSpan::from((value_start, len)));
            }
        }
        offset += line.len();
    }
    None
}

/// Length of a value up to a trailing comment or line end.
fn value_len(value: &str) -> usize {
    let end = if let Some(quoted) = value.strip_prefix('"') {
        quoted.find('"').map(|i| i + 2)
    } else {
        value.find('#')
    };
    value[..end.unwrap_or(value.len())].trim_end().len()
}

/// Span of a `[name]` table header.
pub fn find_table_span(src: &str, name: &str) -> Option<SourceSpan> {
    let header = format!("[{name}]");
    src.find(&header)
        .map(|pos| SourceSpan::from((pos, header.len())))
}
