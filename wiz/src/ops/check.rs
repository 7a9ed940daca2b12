//! Check operation - run the regression oracle.

use eyre::{Context, Result};
use wizgen_codegen::{Target, oracle};

use crate::reports::CheckReport;

/// Run the oracle over every kind of `targets`, or only `kind` when given.
pub fn check(targets: &[&dyn Target], kind: Option<&str>, max_failures: usize) -> Result<CheckReport> {
    let mut kinds = Vec::new();
    for target in targets {
        for name in target.kinds() {
            if kind.is_some_and(|k| k != *name) {
                continue;
            }
            let report = oracle::check_ecosystem(*target, name)
                .wrap_err_with(|| format!("Failed to check {} {name}", target.name()))?;
            kinds.push(report);
        }
    }

    Ok(CheckReport {
        kinds,
        max_failures,
    })
}
