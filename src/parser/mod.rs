//! Page extraction and body assembly.
//!
//! A [`PageSource`] turns a PDF path into raw per-page text. The functions
//! here clean those pages and render the page-labeled body the chunk writer
//! consumes. [`pdf::PdfPageSource`] is the production source.

pub mod pdf;

use std::path::Path;

use crate::clean::clean_page_text;
use crate::error::ConvertResult;
use crate::model::Page;

/// Source of raw page text for a document.
pub trait PageSource {
    /// Read the document at `path` and return its pages in order.
    ///
    /// A page with nothing extractable (for example a scanned image) is
    /// `None` or an empty string.
    fn pages(&self, path: &Path) -> ConvertResult<Vec<Option<String>>>;
}

/// Whether a file name looks like a PDF (`.pdf`, any case).
pub fn is_pdf_name(name: &str) -> bool {
    name.to_lowercase().ends_with(".pdf")
}

/// Extract and clean every page of the document at `path`.
pub fn extract_pages(source: &dyn PageSource, path: &Path) -> ConvertResult<Vec<Page>> {
    let raw = source.pages(path)?;
    let pages: Vec<Page> = raw
        .iter()
        .enumerate()
        .map(|(idx, text)| Page {
            number: idx + 1,
            text: clean_page_text(text.as_deref()),
        })
        .collect();

    tracing::debug!(
        path = %path.display(),
        pages = pages.len(),
        with_text = pages.iter().filter(|p| !p.text.is_empty()).count(),
        "extracted pages"
    );
    Ok(pages)
}

/// Render cleaned pages into a document body.
///
/// Every page with text becomes `## Page {n}\n\n{text}\n`; sections are
/// joined with a newline. Pages without text are left out, so a document
/// with no text at all renders as the empty string.
pub fn render_body(pages: &[Page]) -> String {
    pages
        .iter()
        .filter(|page| !page.text.is_empty())
        .map(|page| format!("## Page {}\n\n{}\n", page.number, page.text))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Extract the full page-labeled body of the document at `path`.
pub fn extract_document(source: &dyn PageSource, path: &Path) -> ConvertResult<String> {
    let pages = extract_pages(source, path)?;
    Ok(render_body(&pages))
}
