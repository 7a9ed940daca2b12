//! Statement termination and blank-line handling.

use crate::builder::CodeFragment;

use super::SyntaxTable;

/// Terminate a statement unless it already ends a block or statement.
pub fn terminate(line: &str, table: &SyntaxTable) -> String {
    let trimmed = line.trim_end();
    if trimmed.is_empty()
        || trimmed.ends_with('{')
        || trimmed.ends_with('}')
        || trimmed.ends_with(table.terminator)
        || trimmed.trim_start().starts_with(table.comment)
    {
        trimmed.to_string()
    } else {
        format!("{trimmed}{}", table.terminator)
    }
}

/// Terminate every statement of a function body.
///
/// The last statement of a value-returning function loses its terminator when
/// the target treats it as the returned expression.
pub fn terminate_body(body: &[String], table: &SyntaxTable, returns_value: bool) -> Vec<String> {
    let tail = table.unterminated_tail && returns_value;
    let last = body.len().saturating_sub(1);
    body.iter()
        .enumerate()
        .map(|(i, line)| {
            if tail && i == last {
                let line = line.trim_end();
                line.strip_suffix(table.terminator)
                    .unwrap_or(line)
                    .trim_end()
                    .to_string()
            } else {
                terminate(line, table)
            }
        })
        .collect()
}

/// Join groups with one blank line, skipping empty groups.
pub fn space_between(groups: Vec<Vec<CodeFragment>>) -> Vec<CodeFragment> {
    let mut out = Vec::new();
    for group in groups {
        if group.iter().all(CodeFragment::is_empty) {
            continue;
        }
        if !out.is_empty() {
            out.push(CodeFragment::Blank);
        }
        out.extend(group);
    }
    out
}

/// Collapse repeated blank lines and drop blanks at the edges of the file
/// and directly inside braces.
pub fn normalize_blank_lines<'a>(lines: impl IntoIterator<Item = &'a str>) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for line in lines {
        if line.trim().is_empty() {
            let skip = match out.last() {
                None => true,
                Some(prev) => prev.is_empty() || prev.trim_end().ends_with('{'),
            };
            if !skip {
                out.push(String::new());
            }
        } else {
            if line.trim_start().starts_with('}') && out.last().is_some_and(|l| l.is_empty()) {
                out.pop();
            }
            out.push(line.to_string());
        }
    }
    while out.last().is_some_and(|l| l.is_empty()) {
        out.pop();
    }
    out
}
