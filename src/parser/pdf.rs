//! PDF page source using the `pdf-extract` crate.
//!
//! The file is read into memory and handed to
//! `pdf_extract::extract_text_from_mem_by_pages`, which yields one string per
//! page in document order. `pdf-extract` panics on some malformed inputs; the
//! panic is caught and reported as a parse error for that file.

use std::panic::{self, AssertUnwindSafe};
use std::path::Path;

use crate::error::{ConvertError, ConvertResult};
use crate::parser::PageSource;

/// Page source backed by `pdf-extract`.
#[derive(Debug, Default, Clone, Copy)]
pub struct PdfPageSource;

impl PageSource for PdfPageSource {
    fn pages(&self, path: &Path) -> ConvertResult<Vec<Option<String>>> {
        let data = std::fs::read(path).map_err(|source| ConvertError::Read {
            path: path.display().to_string(),
            source,
        })?;
        let pages = pages_from_mem(&data).map_err(|message| ConvertError::Parse {
            path: path.display().to_string(),
            message,
        })?;
        Ok(pages.into_iter().map(Some).collect())
    }
}

/// Split PDF bytes into per-page text.
fn pages_from_mem(data: &[u8]) -> Result<Vec<String>, String> {
    let result = panic::catch_unwind(AssertUnwindSafe(|| {
        pdf_extract::extract_text_from_mem_by_pages(data)
    }));

    match result {
        Ok(Ok(pages)) => Ok(pages),
        Ok(Err(e)) => Err(e.to_string()),
        Err(panic_info) => {
            let msg = if let Some(s) = panic_info.downcast_ref::<String>() {
                s.clone()
            } else if let Some(s) = panic_info.downcast_ref::<&str>() {
                s.to_string()
            } else {
                "unknown panic during text extraction".to_string()
            };
            Err(format!("extractor panicked: {msg}"))
        }
    }
}
