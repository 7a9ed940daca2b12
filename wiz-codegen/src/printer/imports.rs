//! Import grouping, sorting and line wrapping.

use indexmap::IndexMap;
use wizgen_ir::ImportRef;

use super::{Syntax, SyntaxTable};

/// Imports printed as one clause.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Clause<'a> {
    pub path: &'a str,
    pub imports: Vec<&'a ImportRef>,
}

/// Group imports into clauses.
///
/// Imports are sorted by full path. Groupable imports sharing a container
/// path merge into the clause of the first one; the others stand alone.
pub fn clauses(imports: &[ImportRef]) -> Vec<Clause<'_>> {
    let mut sorted: Vec<&ImportRef> = imports.iter().collect();
    sorted.sort_by(|a, b| a.full_path().cmp(&b.full_path()).then(a.key().cmp(b.key())));

    let mut out: Vec<Clause<'_>> = Vec::new();
    let mut grouped: IndexMap<&str, usize> = IndexMap::new();
    for import in sorted {
        if import.groupable {
            if let Some(&index) = grouped.get(import.path.as_str()) {
                out[index].imports.push(import);
                continue;
            }
            grouped.insert(import.path.as_str(), out.len());
        }
        out.push(Clause {
            path: &import.path,
            imports: vec![import],
        });
    }
    out
}

fn symbol(import: &ImportRef) -> String {
    match &import.alias {
        Some(alias) => format!("{} as {}", import.symbol, alias),
        None => import.symbol.clone(),
    }
}

/// Render every import clause as text lines.
pub fn render(imports: &[ImportRef], syntax: &dyn Syntax) -> Vec<String> {
    let table = syntax.table();
    clauses(imports)
        .iter()
        .flat_map(|clause| {
            let symbols: Vec<String> = clause.imports.iter().map(|i| symbol(i)).collect();
            let single = syntax.import_clause(clause.path, &symbols, false);
            let line = format!("{}{}{}", single.head, symbols.join(", "), single.tail);
            if !table.wrap_imports || line.chars().count() <= table.max_line {
                vec![line]
            } else {
                let wrapped = syntax.import_clause(clause.path, &symbols, true);
                wrap_list(&wrapped.head, &symbols, &wrapped.tail, table)
            }
        })
        .collect()
}

/// Split a list at its opening delimiter and greedily pack the items onto
/// continuation lines, breaking only at commas.
///
/// Continuation lines are indented one level and never exceed the column
/// budget unless a single item does.
pub fn wrap_list(head: &str, items: &[String], tail: &str, table: &SyntaxTable) -> Vec<String> {
    let indent = table.wrap_indent.unwrap_or(table.indent).as_str();
    let mut lines = vec![head.to_string()];
    let mut current = String::new();

    for item in items {
        let piece = format!("{item},");
        if current.is_empty() {
            current = format!("{indent}{piece}");
        } else if current.chars().count() + 1 + piece.chars().count() <= table.max_line {
            current.push(' ');
            current.push_str(&piece);
        } else {
            lines.push(std::mem::take(&mut current));
            current = format!("{indent}{piece}");
        }
    }
    if !current.is_empty() {
        if !table.trailing_comma {
            current.pop();
        }
        lines.push(current);
    }
    lines.push(tail.to_string());
    lines
}
