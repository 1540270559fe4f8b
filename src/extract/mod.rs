//! Document extractor trait and format dispatch.
//!
//! Each supported format (HTML, PDF) implements [`TextExtractor`]. The
//! `extractor_for()` factory returns the correct extractor for a given
//! format. Extractors are pure transforms over input bytes: markup and
//! boilerplate stripped, paragraph breaks preserved as double newlines.

pub mod html;
pub mod pdf;

use crate::document::DocumentFormat;
use crate::error::BookResult;

/// Trait for format-specific text extractors.
pub trait TextExtractor {
    /// Extract plain text from raw bytes.
    ///
    /// The result keeps paragraph structure as `\n\n` separators but is
    /// otherwise unnormalized; callers run it through the normalizer.
    fn extract(&self, data: &[u8]) -> BookResult<String>;

    /// The format this extractor handles.
    fn format(&self) -> DocumentFormat;
}

/// Get the appropriate extractor for a document format.
pub fn extractor_for(format: DocumentFormat) -> Box<dyn TextExtractor> {
    match format {
        DocumentFormat::Html => Box::new(html::HtmlExtractor),
        DocumentFormat::Pdf => Box::new(pdf::PdfExtractor),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn factory_dispatch() {
        assert_eq!(
            extractor_for(DocumentFormat::Html).format(),
            DocumentFormat::Html
        );
        assert_eq!(
            extractor_for(DocumentFormat::Pdf).format(),
            DocumentFormat::Pdf
        );
    }
}
