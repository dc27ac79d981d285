//! Core data types for PDF conversion.
//!
//! A PDF is read into pages, the pages are rendered into one body, and the
//! body is cut into chunk files. Nothing here outlives the conversion of a
//! single file except the counters in [`ConvertReport`].

use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// One page of cleaned text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    /// 1-based position within the document.
    pub number: usize,
    /// Cleaned text; empty when the page had nothing extractable.
    pub text: String,
}

/// A PDF discovered under the input directory, with its output location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PdfJob {
    /// Path to the PDF as found while walking.
    pub source: PathBuf,
    /// Directory of the PDF relative to the input root (empty at the root).
    pub subdir: PathBuf,
    /// File name without its last extension; doubles as the document title.
    pub base_name: String,
    /// `output_dir/subdir/base_name`, without extension.
    pub output_base: PathBuf,
}

/// A single output file: where it goes and what it contains.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChunkFile {
    pub path: PathBuf,
    /// Header plus this chunk's slice of the body.
    pub contents: String,
}

/// The files one body turns into. Empty when the body has no text.
pub type ChunkPlan = Vec<ChunkFile>;

/// What happened when a body was handed to the chunk writer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChunkOutcome {
    /// The body was blank; nothing was written.
    Empty,
    /// These files were written, in part order.
    Written(Vec<PathBuf>),
}

/// Counters for a whole conversion run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConvertReport {
    /// PDFs found under the input directory.
    pub discovered: usize,
    /// PDFs that produced at least one output file.
    pub converted: usize,
    /// PDFs with no extractable text.
    pub empty: usize,
    /// PDFs whose extraction or writing failed.
    pub failed: usize,
    /// Chunk files written across all PDFs.
    pub files_written: usize,
}

impl ConvertReport {
    pub fn has_failures(&self) -> bool {
        self.failed > 0
    }
}

impl std::fmt::Display for ConvertReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Done: {} converted, {} without text, {} failed, {} files written",
            self.converted, self.empty, self.failed, self.files_written
        )
    }
}

/// Append `suffix` to the final component of `base` without treating any dot
/// in it as an extension separator.
pub(crate) fn with_suffix(base: &Path, suffix: &str) -> PathBuf {
    let mut raw: OsString = base.as_os_str().to_owned();
    raw.push(suffix);
    PathBuf::from(raw)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn suffix_keeps_dotted_names() {
        let base = Path::new("out/v1.2 notes");
        assert_eq!(with_suffix(base, ".md"), PathBuf::from("out/v1.2 notes.md"));
        assert_eq!(
            with_suffix(base, "_part1of2.md"),
            PathBuf::from("out/v1.2 notes_part1of2.md")
        );
    }

    #[test]
    fn report_summary_line() {
        let report = ConvertReport {
            discovered: 4,
            converted: 2,
            empty: 1,
            failed: 1,
            files_written: 5,
        };
        assert_eq!(
            report.to_string(),
            "Done: 2 converted, 1 without text, 1 failed, 5 files written"
        );
        assert!(report.has_failures());
        assert!(!ConvertReport::default().has_failures());
    }
}
