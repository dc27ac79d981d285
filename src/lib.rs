// thiserror's #[error("...{field}...")] format strings reference struct fields,
// but the compiler doesn't see through the derive macro and reports false positives.
#![allow(unused_assignments)]

//! # pdf-chunker
//!
//! Converts a directory tree of PDF files into markdown chunk files that are
//! small enough to hand to downstream tools one at a time.
//!
//! ## Pipeline
//!
//! - **Discovery** (`walk`): recursive, name-ordered search for `*.pdf`
//! - **Extraction** (`parser`): per-page text via `pdf-extract`, cleaned by `clean`
//! - **Chunking** (`chunker`): fixed-size character slices with a shared header
//! - **Driver** (`convert`): mirrors the input tree into the output directory
//!
//! ## Library usage
//!
//! ```no_run
//! use pdf_chunker::convert::{ConvertConfig, convert_tree};
//! use pdf_chunker::parser::pdf::PdfPageSource;
//!
//! let config = ConvertConfig::new("papers", "papers-md");
//! let report = convert_tree(&config, &PdfPageSource).unwrap();
//! println!("{report}");
//! ```

pub mod chunker;
pub mod clean;
pub mod convert;
pub mod error;
pub mod model;
pub mod parser;
pub mod walk;

pub use error::{ConvertError, ConvertResult};
