//! Generate command report data structures.

use std::path::PathBuf;

use super::output::{Output, Report};

/// Report data from one generation request.
#[derive(Debug)]
pub struct GenerateReport {
    pub target: String,
    pub kind: String,
    /// Contract name after identifier normalization.
    pub contract: String,
    pub result: GenerationResult,
}

/// Result of code generation.
#[derive(Debug)]
pub enum GenerationResult {
    /// Files were written to disk.
    Written(WrittenResult),
    /// Dry-run preview.
    Preview(PreviewResult),
}

#[derive(Debug)]
pub struct WrittenResult {
    pub output_dir: PathBuf,
    /// Paths relative to the output directory, contract file first.
    pub files: Vec<String>,
    /// Files whose content was already up to date.
    pub unchanged: Vec<String>,
}

#[derive(Debug)]
pub struct PreviewResult {
    pub files: Vec<PreviewFile>,
}

#[derive(Debug)]
pub struct PreviewFile {
    pub path: String,
    pub content: String,
}

impl Report for GenerateReport {
    fn render(&self, out: &mut dyn Output) {
        match &self.result {
            GenerationResult::Written(written) => self.render_written(out, written),
            GenerationResult::Preview(preview) => self.render_preview(out, preview),
        }
    }
}

impl GenerateReport {
    fn render_written(&self, out: &mut dyn Output, written: &WrittenResult) {
        out.key_value(
            "Contract",
            &format!("{} ({} {})", self.contract, self.target, self.kind),
        );
        out.newline();

        out.section(&format!("Generated ({})", written.files.len()));
        for file in &written.files {
            out.added_item(&written.output_dir.join(file).display().to_string());
        }
        if !written.unchanged.is_empty() {
            out.key_value("Unchanged", &written.unchanged.len().to_string());
        }
    }

    fn render_preview(&self, out: &mut dyn Output, preview: &PreviewResult) {
        for file in &preview.files {
            out.divider(&file.path);
            out.preformatted(&file.content);
        }

        out.divider("Summary");
        out.preformatted(&format!(
            "{} files would be generated for {}",
            preview.files.len(),
            self.contract
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::output::BufferOutput;

    fn report(result: GenerationResult) -> GenerateReport {
        GenerateReport {
            target: "cairo".to_string(),
            kind: "ERC721".to_string(),
            contract: "MyNFT".to_string(),
            result,
        }
    }

    #[test]
    fn test_render_written() {
        let mut out = BufferOutput::default();
        report(GenerationResult::Written(WrittenResult {
            output_dir: PathBuf::from("out"),
            files: vec!["my_nft.cairo".to_string()],
            unchanged: vec!["my_nft.ir.json".to_string()],
        }))
        .render(&mut out);

        let written = format!("  + {}", PathBuf::from("out").join("my_nft.cairo").display());
        assert_eq!(
            out.lines,
            [
                "Contract: MyNFT (cairo ERC721)",
                "",
                "Generated (1):",
                written.as_str(),
                "Unchanged: 1",
            ]
        );
    }

    #[test]
    fn test_render_preview() {
        let mut out = BufferOutput::default();
        report(GenerationResult::Preview(PreviewResult {
            files: vec![PreviewFile {
                path: "my_nft.cairo".to_string(),
                content: "// SPDX-License-Identifier: MIT".to_string(),
            }],
        }))
        .render(&mut out);

        assert_eq!(
            out.text(),
            "── my_nft.cairo ──\n// SPDX-License-Identifier: MIT\n── Summary ──\n\
             1 files would be generated for MyNFT"
        );
    }
}
