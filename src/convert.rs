//! Conversion driver: walk the input tree and turn every PDF into chunk files.
//!
//! Files are processed one at a time, each to completion, in the order
//! [`discover_pdfs`] returns them.

use std::path::PathBuf;

use crate::chunker::{ChunkConfig, write_chunks};
use crate::error::{ConvertError, ConvertResult};
use crate::model::{ChunkOutcome, ConvertReport, PdfJob};
use crate::parser::{PageSource, extract_document};
use crate::walk::{discover_pdfs, ensure_output_dir};

/// Configuration for a conversion run.
#[derive(Debug, Clone)]
pub struct ConvertConfig {
    /// Directory searched recursively for PDFs.
    pub input_dir: PathBuf,
    /// Root of the mirrored output tree.
    pub output_dir: PathBuf,
    /// Chunk splitting settings.
    pub chunk: ChunkConfig,
    /// Abort on the first per-file error instead of warning and moving on.
    pub fail_fast: bool,
}

impl ConvertConfig {
    /// Create config for a pair of directories with default chunking.
    pub fn new(input_dir: impl Into<PathBuf>, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            input_dir: input_dir.into(),
            output_dir: output_dir.into(),
            chunk: ChunkConfig::default(),
            fail_fast: false,
        }
    }
}

/// Convert every PDF under `config.input_dir`.
///
/// 1. Validates the input directory and creates the output root.
/// 2. Discovers PDFs in file-name order.
/// 3. For each PDF: creates its output subdirectory, prints a progress line,
///    extracts the body, and writes the chunks.
///
/// A failing file is reported as a warning and counted in the report, unless
/// `fail_fast` is set, in which case its error is returned immediately.
pub fn convert_tree(config: &ConvertConfig, source: &dyn PageSource) -> ConvertResult<ConvertReport> {
    let jobs = discover_pdfs(&config.input_dir, &config.output_dir)?;
    std::fs::create_dir_all(&config.output_dir)
        .map_err(|e| ConvertError::create_dir(&config.output_dir, e))?;

    let mut report = ConvertReport {
        discovered: jobs.len(),
        ..Default::default()
    };

    for job in &jobs {
        match convert_file(config, source, job) {
            Ok(ChunkOutcome::Empty) => report.empty += 1,
            Ok(ChunkOutcome::Written(paths)) => {
                report.converted += 1;
                report.files_written += paths.len();
            }
            Err(e) if config.fail_fast => return Err(e),
            Err(e) => {
                println!("WARNING: Failed to convert {}: {e}", job.source.display());
                tracing::debug!(path = %job.source.display(), error = %e, "conversion failed");
                report.failed += 1;
            }
        }
    }

    tracing::info!(
        discovered = report.discovered,
        converted = report.converted,
        empty = report.empty,
        failed = report.failed,
        "conversion finished"
    );
    Ok(report)
}

/// Convert a single discovered PDF.
pub fn convert_file(
    config: &ConvertConfig,
    source: &dyn PageSource,
    job: &PdfJob,
) -> ConvertResult<ChunkOutcome> {
    ensure_output_dir(&config.output_dir, job)?;
    println!("Extracting: {}", job.source.display());

    let body = extract_document(source, &job.source)?;
    write_chunks(&job.output_base, &job.base_name, &body, &config.chunk)
}
