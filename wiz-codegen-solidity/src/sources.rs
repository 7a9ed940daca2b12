//! Bundled OpenZeppelin sources and the import graph between them.

use std::sync::LazyLock;

use tracing::debug;
use wizgen_codegen::resolve::LibrarySources;

use crate::bundle::SOURCES;

static LIBRARY: LazyLock<LibrarySources> = LazyLock::new(|| {
    debug!(files = SOURCES.len(), "indexing bundled sources");
    LibrarySources::from_sources(
        SOURCES
            .iter()
            .map(|(path, text)| (path.to_string(), text.to_string())),
        imports_of,
    )
});

/// Every bundled library file, with its dependency graph.
pub fn library() -> &'static LibrarySources {
    &LIBRARY
}

/// Resolved paths of the `import` directives in a Solidity file.
///
/// Relative paths are resolved against the importing file's directory.
pub fn imports_of(path: &str, source: &str) -> Vec<String> {
    source
        .lines()
        .map(str::trim_start)
        .filter(|line| line.starts_with("import "))
        .filter_map(|line| {
            let mut quoted = line.split('"');
            quoted.next()?;
            quoted.next()
        })
        .map(|target| resolve_path(path, target))
        .collect()
}

/// Resolve an import target relative to the file that imports it.
pub fn resolve_path(from: &str, target: &str) -> String {
    if !target.starts_with("./") && !target.starts_with("../") {
        return target.to_string();
    }

    let mut segments: Vec<&str> = from.split('/').collect();
    segments.pop();
    for part in target.split('/') {
        match part {
            "." | "" => {}
            ".." => {
                segments.pop();
            }
            _ => segments.push(part),
        }
    }
    segments.join("/")
}
