//! Regression oracle.
//!
//! Drives every enumerated option record of a contract kind through
//! build, render and resolve, and checks the structural properties the
//! output must always have.

use std::collections::BTreeSet;

use serde::Serialize;
use serde_json::Value;
use tracing::{debug, trace};

use crate::{Generated, Result, Target};

/// One option record that violated a property.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Failure {
    pub record: Value,
    pub message: String,
}

/// Outcome of checking one contract kind.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OracleReport {
    pub target: String,
    pub kind: String,
    pub records: usize,
    pub files: usize,
    pub failures: Vec<Failure>,
}

impl OracleReport {
    pub fn passed(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Check every option record of `kind`.
///
/// Fails only if the kind is unknown; property violations are collected in
/// the report.
pub fn check_ecosystem(target: &dyn Target, kind: &str) -> Result<OracleReport> {
    let blueprint = target.blueprint(kind)?;
    let mut report = OracleReport {
        target: target.name().to_string(),
        kind: kind.to_string(),
        records: 0,
        files: 0,
        failures: Vec::new(),
    };

    for record in blueprint.alternatives() {
        report.records += 1;
        trace!(%record, "checking record");
        match check_record(target, &record) {
            Ok(files) => report.files += files,
            Err(message) => report.failures.push(Failure { record, message }),
        }
    }

    debug!(
        ecosystem = %report.target,
        kind = %report.kind,
        records = report.records,
        failures = report.failures.len(),
        "oracle finished"
    );
    Ok(report)
}

fn check_record(target: &dyn Target, record: &Value) -> std::result::Result<usize, String> {
    let first = target
        .generate_value(record.clone())
        .map_err(|e| e.to_string())?;
    let second = target
        .generate_value(record.clone())
        .map_err(|e| e.to_string())?;
    if first.files != second.files {
        return Err("rendering is not deterministic".to_string());
    }

    check_complete(target, &first)?;
    check_minimal(target, &first)?;
    Ok(first.files.len())
}

/// Every import of every returned file is itself returned.
fn check_complete(target: &dyn Target, generated: &Generated) -> std::result::Result<(), String> {
    for (path, text) in &generated.files {
        for import in target.extract_imports(path, text) {
            if !generated.files.contains_key(&import) {
                return Err(format!("{path} imports {import}, which is not in the output"));
            }
        }
    }
    Ok(())
}

/// Every returned file is reachable from the contract.
fn check_minimal(target: &dyn Target, generated: &Generated) -> std::result::Result<(), String> {
    let mut reached = BTreeSet::from([generated.file_name.clone()]);
    let mut queue = vec![generated.file_name.clone()];
    while let Some(current) = queue.pop() {
        let Some(text) = generated.files.get(&current) else {
            continue;
        };
        for import in target.extract_imports(&current, text) {
            if reached.insert(import.clone()) {
                queue.push(import);
            }
        }
    }

    match generated.files.keys().find(|path| !reached.contains(*path)) {
        Some(path) => Err(format!("{path} is not reachable from the contract")),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;
    use wizgen_ir::{Contract, ContractBuilder, Function, ImportOptions, Library, Variable};

    use super::*;
    use crate::{
        Ecosystem,
        enumerate::Blueprint,
        printer::{FunctionParts, ImportClause, Shell, Syntax, SyntaxTable},
        resolve::LibrarySources,
    };

    struct Plain(SyntaxTable);

    impl Syntax for Plain {
        fn table(&self) -> &SyntaxTable {
            &self.0
        }
        fn header(&self, _c: &Contract) -> Vec<String> {
            Vec::new()
        }
        fn import_clause(&self, path: &str, _s: &[String], _w: bool) -> ImportClause {
            ImportClause {
                head: "import ".to_string(),
                tail: format!(" from {path}"),
            }
        }
        fn contract_shell(&self, c: &Contract, _l: &[&Library]) -> Shell {
            Shell {
                open: vec![format!("contract {} {{", c.name())],
                close: Some("}".to_string()),
            }
        }
        fn variable(&self, v: &Variable, _k: bool) -> String {
            v.name.clone()
        }
        fn constructor(&self, _c: &Contract, _l: &[&Library]) -> Vec<FunctionParts> {
            Vec::new()
        }
        fn function(&self, _c: &Contract, _f: &Function) -> Option<FunctionParts> {
            None
        }
    }

    #[derive(Debug, Serialize, Deserialize)]
    struct Options {
        pausable: bool,
        broken: bool,
    }

    /// Files import each other with `use <path>` lines.
    struct Fake {
        syntax: Plain,
        libs: LibrarySources,
    }

    fn uses(text: &str) -> Vec<String> {
        text.lines()
            .filter_map(|l| l.strip_prefix("use "))
            .map(str::to_string)
            .collect()
    }

    impl Fake {
        fn new() -> Self {
            let libs = LibrarySources::from_sources(
                [
                    ("lib/Pausable".to_string(), "use lib/Context".to_string()),
                    ("lib/Context".to_string(), String::new()),
                    ("lib/Unused".to_string(), String::new()),
                ],
                |_, text| uses(text),
            );
            Self {
                syntax: Plain(SyntaxTable::default()),
                libs,
            }
        }
    }

    impl Ecosystem for Fake {
        type Options = Options;

        fn name(&self) -> &'static str {
            "fake"
        }
        fn kinds(&self) -> &'static [&'static str] {
            &["Token"]
        }
        fn blueprint(&self, kind: &str) -> Option<Blueprint> {
            (kind == "Token").then(|| Blueprint::new().toggle("pausable").toggle("broken"))
        }
        fn build(&self, options: &Options) -> wizgen_ir::Result<Contract> {
            let mut c = ContractBuilder::new("Token");
            if options.pausable {
                c.add_import("lib/Pausable", "Pausable", ImportOptions::default())?;
            }
            if options.broken {
                c.add_import("lib/Pausable", "Pausable", ImportOptions::default())?;
                c.add_import("lib/Other", "Pausable", ImportOptions::default())?;
            }
            Ok(c.build())
        }
        fn syntax(&self) -> &dyn Syntax {
            &self.syntax
        }
        fn file_name(&self, contract: &Contract) -> String {
            format!("{}.src", contract.name())
        }
        fn library_sources(&self) -> Option<&LibrarySources> {
            Some(&self.libs)
        }
        fn extract_imports(&self, _path: &str, source: &str) -> Vec<String> {
            source
                .lines()
                .filter_map(|l| l.strip_prefix("import Pausable from "))
                .map(str::to_string)
                .chain(uses(source))
                .collect()
        }
    }

    #[test]
    fn test_generate_resolves_closure() {
        let fake = Fake::new();
        let generated = crate::generate(
            &fake,
            &Options {
                pausable: true,
                broken: false,
            },
        )
        .unwrap();
        let paths: Vec<_> = generated.files.keys().map(String::as_str).collect();
        assert_eq!(paths, vec!["Token.src", "lib/Context", "lib/Pausable"]);
        assert!(generated.source().starts_with("import Pausable from lib/Pausable"));
    }

    #[test]
    fn test_oracle_collects_failures() {
        let report = check_ecosystem(&Fake::new(), "Token").unwrap();
        assert_eq!(report.records, 4);
        assert_eq!(report.failures.len(), 2);
        assert!(!report.passed());
        assert!(
            report.failures[0]
                .message
                .contains("conflicting declarations of import 'Pausable'")
        );
    }

    #[test]
    fn test_oracle_unknown_kind() {
        let err = check_ecosystem(&Fake::new(), "Governor").unwrap_err();
        assert_eq!(err.to_string(), "unknown fake contract kind 'Governor'");
    }

    #[test]
    fn test_minimality_violation() {
        let fake = Fake::new();
        let mut generated = crate::generate(
            &fake,
            &Options {
                pausable: false,
                broken: false,
            },
        )
        .unwrap();
        generated
            .files
            .insert("lib/Unused".to_string(), String::new());
        assert_eq!(
            check_minimal(&fake, &generated).unwrap_err(),
            "lib/Unused is not reachable from the contract"
        );
    }
}
