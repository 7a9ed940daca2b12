//! The `[contract]` generation request.

use std::{path::Path, str::FromStr};

use serde::Deserialize;

use crate::{
    Error, Result,
    error::SourceContext,
    span::{find_table_span, find_value_span},
};

/// Default request file name.
pub const FILE_NAME: &str = "wizard.toml";

#[derive(Debug, Deserialize)]
struct RawManifest {
    contract: RawContract,
}

#[derive(Debug, Deserialize)]
struct RawContract {
    target: String,
    kind: String,
    #[serde(flatten)]
    options: toml::Table,
}

/// A parsed wizard.toml: which target and kind to generate, and the
/// options forwarded to it.
#[derive(Debug, Clone, PartialEq)]
pub struct Request {
    target: String,
    kind: String,
    options: toml::Table,
    source: SourceContext,
}

impl FromStr for Request {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_str_with_filename(s, FILE_NAME)
    }
}

impl Request {
    /// Parse a wizard.toml file from the given path.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Box::new(Error::Io {
                path: path.to_path_buf(),
                source: e,
            })
        })?;
        Self::from_str_with_filename(&content, &path.display().to_string())
    }

    /// Parse a wizard.toml from a string with a custom filename for error reporting.
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        let source = SourceContext::new(content, filename);
        let raw: RawManifest = toml::from_str(content).map_err(|e| source.parse_error(e))?;

        let name = raw.contract.options.get("name");
        if let Some(name) = name.and_then(toml::Value::as_str) {
            if name.trim().is_empty() {
                return Err(source.validation_error_at(
                    "contract name must not be empty",
                    find_value_span(content, "name"),
                ));
            }
        }

        Ok(Self {
            target: raw.contract.target,
            kind: raw.contract.kind,
            options: raw.contract.options,
            source,
        })
    }

    pub fn target(&self) -> &str {
        &self.target
    }

    pub fn kind(&self) -> &str {
        &self.kind
    }

    /// Option keys other than `target` and `kind`.
    pub fn options(&self) -> &toml::Table {
        &self.options
    }

    pub fn source(&self) -> &SourceContext {
        &self.source
    }

    /// Fail unless the target is one of `available`.
    pub fn check_target(&self, available: &[&str]) -> Result<()> {
        if available.contains(&self.target.as_str()) {
            return Ok(());
        }
        Err(self.unknown_target(available))
    }

    /// Report that the target is not one of `available`, pointing at its value.
    pub fn unknown_target(&self, available: &[&str]) -> Box<Error> {
        self.source.unknown_target_error(
            &self.target,
            available,
            find_value_span(self.source.src(), "target"),
        )
    }

    /// Fail unless the kind is one of `available` for this target.
    pub fn check_kind(&self, available: &[&str]) -> Result<()> {
        if available.contains(&self.kind.as_str()) {
            return Ok(());
        }
        Err(self.source.unknown_kind_error(
            &self.target,
            &self.kind,
            available,
            find_value_span(self.source.src(), "kind"),
        ))
    }

    /// The option record handed to the target: every key except `target`,
    /// with `kind` as the tag.
    pub fn record(&self) -> Result<serde_json::Value> {
        let mut table = self.options.clone();
        table.insert("kind".to_string(), toml::Value::String(self.kind.clone()));
        serde_json::to_value(&table).map_err(|e| self.invalid_options(e))
    }

    /// Report that the target rejected the options, pointing at `[contract]`.
    pub fn invalid_options(&self, reason: impl ToString) -> Box<Error> {
        self.source.invalid_options_error(
            reason.to_string(),
            find_table_span(self.source.src(), "contract"),
        )
    }
}

/// A starter wizard.toml for `target` and `kind`.
pub fn template(target: &str, kind: &str, name: &str) -> String {
    let name = toml::Value::String(name.to_string());
    format!(
        "# Generation request for `wiz generate`.\n\
         [contract]\n\
         target = \"{target}\"\n\
         kind = \"{kind}\"\n\
         name = {name}\n\
         # pausable = true\n\
         # access = \"ownable\"\n"
    )
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    const ERC20: &str = r#"
[contract]
target = "solidity"
kind = "ERC20"
name = "MyToken"
pausable = true
access = "ownable"
"#;

    #[test]
    fn test_parse_request() {
        let request: Request = ERC20.parse().unwrap();
        assert_eq!(request.target(), "solidity");
        assert_eq!(request.kind(), "ERC20");
        assert_eq!(request.options().len(), 3);
        assert_eq!(
            request.record().unwrap(),
            json!({
                "kind": "ERC20",
                "name": "MyToken",
                "pausable": true,
                "access": "ownable",
            })
        );
    }

    #[test]
    fn test_missing_target_is_a_parse_error() {
        let err = "[contract]\nkind = \"ERC20\"\n".parse::<Request>().unwrap_err();
        assert!(matches!(*err, Error::Parse { .. }));
    }

    #[test]
    fn test_unknown_target_points_at_value() {
        let src = "[contract]\ntarget = \"vyper\"\nkind = \"ERC20\"\n";
        let request: Request = src.parse().unwrap();
        let err = request.check_target(&["solidity", "cairo"]).unwrap_err();
        let Error::UnknownTarget { span, .. } = *err else {
            panic!("expected an unknown target error");
        };
        let span = span.unwrap();
        assert_eq!(&src[span.offset()..span.offset() + span.len()], "\"vyper\"");
    }

    #[test]
    fn test_unknown_kind() {
        let request: Request = ERC20.parse().unwrap();
        assert!(request.check_kind(&["ERC20", "ERC721"]).is_ok());
        let err = request.check_kind(&["ERC721"]).unwrap_err();
        assert_eq!(err.to_string(), "unknown solidity contract kind 'ERC20'");
    }

    #[test]
    fn test_empty_name_rejected() {
        let src = "[contract]\ntarget = \"cairo\"\nkind = \"Custom\"\nname = \" \"\n";
        let err = src.parse::<Request>().unwrap_err();
        assert_eq!(err.to_string(), "contract name must not be empty");
    }

    #[test]
    fn test_template_parses() {
        let text = template("stellar", "Fungible", "My \"Token\"");
        let request: Request = text.parse().unwrap();
        assert_eq!(request.target(), "stellar");
        assert_eq!(request.options()["name"].as_str(), Some("My \"Token\""));
    }
}
