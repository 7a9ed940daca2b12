//! List command report data structures.

use super::output::{Output, Report};

/// Targets, their kinds and the options each kind accepts.
#[derive(Debug)]
pub struct ListReport {
    pub targets: Vec<TargetInfo>,
}

#[derive(Debug)]
pub struct TargetInfo {
    pub name: String,
    pub kinds: Vec<KindInfo>,
}

#[derive(Debug)]
pub struct KindInfo {
    pub name: String,
    /// Option keys, excluding `kind`.
    pub options: Vec<String>,
    /// Number of option records the oracle enumerates.
    pub records: usize,
}

impl Report for ListReport {
    fn render(&self, out: &mut dyn Output) {
        for (i, target) in self.targets.iter().enumerate() {
            if i > 0 {
                out.newline();
            }
            out.section(&target.name);
            for kind in &target.kinds {
                out.list_item(&format!(
                    "{} ({} records): {}",
                    kind.name,
                    kind.records,
                    kind.options.join(", ")
                ));
            }
        }
    }
}
