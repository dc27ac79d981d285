//! Rich diagnostic error types for PDF conversion.
//!
//! Every fallible step (walking the input tree, reading and parsing a PDF,
//! creating output directories, writing chunk files) maps to one variant with
//! a miette error code and help text, so users know exactly what went wrong
//! and how to fix it.

use std::path::Path;

use miette::Diagnostic;
use thiserror::Error;

/// Errors from conversion operations.
#[derive(Debug, Error, Diagnostic)]
pub enum ConvertError {
    #[error("input directory \"{path}\" is not a readable directory")]
    #[diagnostic(
        code(pdf_chunker::input_dir),
        help("Pass an existing directory containing PDF files as the first argument.")
    )]
    InputDir { path: String },

    #[error("failed to create directory \"{path}\": {source}")]
    #[diagnostic(
        code(pdf_chunker::create_dir),
        help(
            "The output directory tree could not be created. Check that the parent \
             directory exists and is writable."
        )
    )]
    CreateDir {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read \"{path}\": {source}")]
    #[diagnostic(
        code(pdf_chunker::read),
        help("Check that the file exists and that you have permission to read it.")
    )]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("parse error in PDF \"{path}\": {message}")]
    #[diagnostic(
        code(pdf_chunker::parse),
        help(
            "The document could not be parsed. Verify the file is a valid, \
             unencrypted PDF and not corrupted."
        )
    )]
    Parse { path: String, message: String },

    #[error("failed to write \"{path}\": {source}")]
    #[diagnostic(
        code(pdf_chunker::write),
        help(
            "A chunk file could not be written. Check free disk space and \
             permissions on the output directory."
        )
    )]
    Write {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to walk \"{path}\": {message}")]
    #[diagnostic(
        code(pdf_chunker::walk),
        help("An entry of the input tree could not be listed. Check directory permissions.")
    )]
    Walk { path: String, message: String },

    #[error("invalid chunk size: {size}")]
    #[diagnostic(
        code(pdf_chunker::chunk_size),
        help("The chunk size is a character count and must be at least 1.")
    )]
    InvalidChunkSize { size: usize },
}

impl ConvertError {
    pub(crate) fn create_dir(path: &Path, source: std::io::Error) -> Self {
        Self::CreateDir {
            path: path.display().to_string(),
            source,
        }
    }

    pub(crate) fn write(path: &Path, source: std::io::Error) -> Self {
        Self::Write {
            path: path.display().to_string(),
            source,
        }
    }
}

/// Convenience alias for conversion results.
pub type ConvertResult<T> = std::result::Result<T, ConvertError>;
