//! PDF extractor using the `pdf-extract` crate.
//!
//! `pdf-extract` returns all pages as a single string with form feeds
//! between pages. Pages are concatenated in order; a page with no
//! extractable text contributes the empty string and is never an error.

use crate::document::DocumentFormat;
use crate::error::{BookError, BookResult};
use crate::extract::TextExtractor;

/// PDF document extractor backed by `pdf-extract`.
pub struct PdfExtractor;

impl TextExtractor for PdfExtractor {
    fn format(&self) -> DocumentFormat {
        DocumentFormat::Pdf
    }

    fn extract(&self, data: &[u8]) -> BookResult<String> {
        let text = pdf_extract::extract_text_from_mem(data).map_err(|e| BookError::Parse {
            format: "pdf".into(),
            message: e.to_string(),
        })?;

        // Split on the form feeds pdf-extract inserts between pages, then
        // rejoin page paragraphs. PDF text often carries hard line breaks
        // inside paragraphs; those are collapsed per paragraph so the
        // double-newline separator keeps its meaning downstream.
        let mut paragraphs: Vec<String> = Vec::new();
        for page in text.split('\x0C') {
            for para in page.split("\n\n") {
                let joined = para
                    .lines()
                    .map(|l| l.trim())
                    .filter(|l| !l.is_empty())
                    .collect::<Vec<_>>()
                    .join(" ");
                if !joined.is_empty() {
                    paragraphs.push(joined);
                }
            }
        }

        Ok(paragraphs.join("\n\n"))
    }
}
