//! Generate operation - write or preview a generated contract.

use std::path::Path;

use eyre::{Context, Result};
use tracing::debug;
use wizgen_codegen::Generated;
use wizgen_core::{File, WriteResult};
use wizgen_manifest::Request;

use crate::reports::{GenerateReport, GenerationResult, PreviewFile, PreviewResult, WrittenResult};

/// Options for the generate operation.
pub struct GenerateOptions<'a> {
    /// Directory the generated files are written under.
    pub output_dir: &'a Path,
    /// Whether to preview without writing files.
    pub dry_run: bool,
    /// Whether to also emit the frozen contract IR as JSON.
    pub emit_ir: bool,
}

/// Write (or preview) the files of a generated contract.
///
/// Paths in the output mirror the generated file set: the contract file at
/// the root and bundled libraries under their import paths.
pub fn generate(
    request: &Request,
    generated: &Generated,
    opts: GenerateOptions,
) -> Result<GenerateReport> {
    let mut files: Vec<(String, String)> = generated
        .files
        .iter()
        .map(|(path, text)| (path.clone(), text.clone()))
        .collect();

    if opts.emit_ir {
        let ir = serde_json::to_string_pretty(&generated.contract)
            .wrap_err("Failed to serialize contract IR")?;
        files.push((ir_file_name(&generated.file_name), ir + "\n"));
    }

    let result = if opts.dry_run {
        let files = files
            .into_iter()
            .map(|(path, content)| PreviewFile { path, content })
            .collect();
        GenerationResult::Preview(PreviewResult { files })
    } else {
        let mut written = WrittenResult {
            output_dir: opts.output_dir.to_path_buf(),
            files: Vec::new(),
            unchanged: Vec::new(),
        };
        for (path, content) in files {
            let result = File::new(&path, content)
                .write_to(opts.output_dir)
                .wrap_err_with(|| format!("Failed to write {path}"))?;
            debug!(path = %path, ?result, "wrote file");
            match result {
                WriteResult::Unchanged | WriteResult::Skipped => written.unchanged.push(path),
                WriteResult::Written => written.files.push(path),
            }
        }
        GenerationResult::Written(written)
    };

    Ok(GenerateReport {
        target: request.target().to_string(),
        kind: request.kind().to_string(),
        contract: generated.contract.name().to_string(),
        result,
    })
}

/// `MyToken.sol` -> `MyToken.ir.json`
fn ir_file_name(file_name: &str) -> String {
    Path::new(file_name)
        .with_extension("ir.json")
        .display()
        .to_string()
}
