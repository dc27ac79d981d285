//! Discovery of PDF files under an input directory.
//!
//! The tree is walked recursively in file-name order so repeated runs visit
//! files in the same sequence. Each PDF becomes a [`PdfJob`] whose output
//! base mirrors its position relative to the input root.

use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::error::{ConvertError, ConvertResult};
use crate::model::PdfJob;
use crate::parser::is_pdf_name;

/// File name without its last extension.
///
/// A dot that only has other dots before it does not start an extension, so
/// `..pdf` keeps its whole name while `.hidden.pdf` becomes `.hidden`.
fn base_name_of(name: &OsStr) -> &OsStr {
    let bytes = name.as_encoded_bytes();
    match bytes.iter().rposition(|&b| b == b'.') {
        Some(dot) if bytes[..dot].iter().any(|&b| b != b'.') => {
            Path::new(name).file_stem().unwrap_or(name)
        }
        _ => name,
    }
}

/// Build the job for one PDF found under `input_dir`.
///
/// Returns `None` when `pdf_path` is not inside `input_dir` or has no file
/// name.
pub fn job_for(input_dir: &Path, output_dir: &Path, pdf_path: &Path) -> Option<PdfJob> {
    let rel = pdf_path.strip_prefix(input_dir).ok()?;
    let stem = base_name_of(rel.file_name()?);
    let subdir = rel.parent().map(Path::to_path_buf).unwrap_or_default();
    let output_base = output_dir.join(&subdir).join(stem);

    Some(PdfJob {
        source: pdf_path.to_path_buf(),
        subdir,
        base_name: stem.to_string_lossy().into_owned(),
        output_base,
    })
}

/// Find every PDF under `input_dir` and plan where its output goes.
///
/// Entries that cannot be read are logged and skipped. Symlinked files are
/// included; symlinked directories are not descended into.
pub fn discover_pdfs(input_dir: &Path, output_dir: &Path) -> ConvertResult<Vec<PdfJob>> {
    if !input_dir.is_dir() {
        return Err(ConvertError::InputDir {
            path: input_dir.display().to_string(),
        });
    }

    let mut jobs = Vec::new();
    for entry in WalkDir::new(input_dir).sort_by_file_name() {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                let err = ConvertError::Walk {
                    path: e
                        .path()
                        .map(|p| p.display().to_string())
                        .unwrap_or_else(|| input_dir.display().to_string()),
                    message: e.to_string(),
                };
                tracing::warn!(error = %err, "skipping unreadable entry");
                continue;
            }
        };

        if entry.file_type().is_dir() || !entry.path().is_file() {
            continue;
        }

        let name = entry.file_name().to_string_lossy();
        if !is_pdf_name(&name) {
            continue;
        }

        if let Some(job) = job_for(input_dir, output_dir, entry.path()) {
            jobs.push(job);
        }
    }

    tracing::info!(
        input = %input_dir.display(),
        count = jobs.len(),
        "discovered PDFs"
    );
    Ok(jobs)
}

/// Create the output directory for `job` and return its path.
pub fn ensure_output_dir(output_dir: &Path, job: &PdfJob) -> ConvertResult<PathBuf> {
    let dest = output_dir.join(&job.subdir);
    std::fs::create_dir_all(&dest).map_err(|e| ConvertError::create_dir(&dest, e))?;
    Ok(dest)
}
