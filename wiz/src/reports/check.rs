//! Oracle check report data structures.

use wizgen_codegen::oracle::OracleReport;

use super::output::{Output, Report};

/// Outcome of running the regression oracle over one or more kinds.
#[derive(Debug)]
pub struct CheckReport {
    pub kinds: Vec<OracleReport>,
    /// Failures listed per kind before the rest are summarized.
    pub max_failures: usize,
}

impl CheckReport {
    /// Whether every checked record passed.
    pub fn passed(&self) -> bool {
        self.kinds.iter().all(OracleReport::passed)
    }

    fn failed_kinds(&self) -> usize {
        self.kinds.iter().filter(|k| !k.passed()).count()
    }
}

impl Report for CheckReport {
    fn render(&self, out: &mut dyn Output) {
        for kind in &self.kinds {
            let label = format!(
                "{} {}: {} records, {} files",
                kind.target, kind.kind, kind.records, kind.files
            );
            out.status(kind.passed(), &label);

            for failure in kind.failures.iter().take(self.max_failures) {
                out.list_item(&format!("{}: {}", failure.message, failure.record));
            }
            let hidden = kind.failures.len().saturating_sub(self.max_failures);
            if hidden > 0 {
                out.list_item(&format!("... and {hidden} more"));
            }
        }

        out.newline();
        let records: usize = self.kinds.iter().map(|k| k.records).sum();
        out.preformatted(&format!(
            "{} kinds checked, {} records, {} failed",
            self.kinds.len(),
            records,
            self.failed_kinds()
        ));
    }
}
