//! List operation - describe targets, kinds and their options.

use eyre::Result;
use wizgen_codegen::Target;

use crate::reports::{KindInfo, ListReport, TargetInfo};

pub fn list(targets: &[&dyn Target]) -> Result<ListReport> {
    let mut report = ListReport {
        targets: Vec::with_capacity(targets.len()),
    };

    for target in targets {
        let mut kinds = Vec::new();
        for kind in target.kinds() {
            let blueprint = target.blueprint(kind)?;
            kinds.push(KindInfo {
                name: kind.to_string(),
                options: blueprint
                    .keys()
                    .filter(|key| *key != "kind")
                    .map(str::to_string)
                    .collect(),
                records: blueprint.count(),
            });
        }
        report.targets.push(TargetInfo {
            name: target.name().to_string(),
            kinds,
        });
    }

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::targets;

    #[test]
    fn test_list_every_target() {
        let report = list(&targets::all()).unwrap();
        let names: Vec<_> = report.targets.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, ["solidity", "cairo", "stellar", "stylus"]);

        let stellar = &report.targets[2];
        let custom = stellar.kinds.iter().find(|k| k.name == "Custom").unwrap();
        assert_eq!(custom.records, 24);
        assert!(custom.options.iter().any(|o| o == "upgradeable"));
        assert!(!custom.options.iter().any(|o| o == "kind"));

        let stylus = &report.targets[3];
        let kinds: Vec<_> = stylus.kinds.iter().map(|k| (k.name.as_str(), k.records)).collect();
        assert_eq!(kinds, [("ERC20", 24), ("ERC721", 24)]);
    }
}
