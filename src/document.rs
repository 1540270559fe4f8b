//! Core data types for the book pipeline.
//!
//! A raw document enters as bytes plus a format tag, becomes one canonical
//! text in two variants (display and folded), and is served downstream as a
//! cached [`BookRecord`].

use serde::{Deserialize, Serialize};

/// Supported document formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DocumentFormat {
    Html,
    Pdf,
}

impl DocumentFormat {
    /// Human-readable name for diagnostics.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Html => "html",
            Self::Pdf => "pdf",
        }
    }
}

impl std::fmt::Display for DocumentFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Detect the document format from a file extension.
pub fn detect_format(path: &str) -> Option<DocumentFormat> {
    let lower = path.to_lowercase();
    if lower.ends_with(".html") || lower.ends_with(".htm") || lower.ends_with(".xhtml") {
        Some(DocumentFormat::Html)
    } else if lower.ends_with(".pdf") {
        Some(DocumentFormat::Pdf)
    } else {
        None
    }
}

/// Detect the document format, erroring on an unrecognized extension.
pub fn require_format(path: &str) -> crate::error::BookResult<DocumentFormat> {
    detect_format(path).ok_or_else(|| crate::error::BookError::UnsupportedFormat {
        path: path.to_string(),
    })
}

/// An immutable byte sequence plus its declared format.
///
/// Created at the system boundary when a file is read, consumed once by the
/// extractor, never mutated.
#[derive(Debug, Clone)]
pub struct RawDocument {
    pub data: Vec<u8>,
    pub format: DocumentFormat,
}

/// One book's fully extracted and normalized content, in both variants.
///
/// `display` is whitespace-collapsed with case and accents preserved and
/// paragraph breaks retained as double-newline separators; it feeds
/// segmentation and display. `folded` is additionally lowercased and
/// diacritic-stripped for case-insensitive matching. Both derive from the
/// same extraction pass and are kept as two explicit fields so downstream
/// code cannot accidentally use the wrong variant.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CanonicalText {
    pub display: String,
    pub folded: String,
}

/// An ordinal chunk of the display text, bounded by a word budget.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    /// 1-based position within the book.
    pub index: usize,
    /// Display label, `"Section {index}"` by default.
    pub title: String,
    /// Section text, paragraphs joined with the paragraph separator.
    pub text: String,
    /// Count of whitespace-delimited tokens in `text`.
    pub word_count: usize,
}

/// Cached canonical record for one book.
///
/// Owned exclusively by the book cache: created on first access, never
/// mutated afterwards. A re-fetch replaces the whole record.
#[derive(Debug, Clone, Serialize)]
pub struct BookRecord {
    pub id: String,
    pub title: String,
    pub text: CanonicalText,
    /// Sections under the display budget.
    pub sections: Vec<Section>,
    /// Whitespace-delimited token count of the display text.
    pub word_count: usize,
    /// Reading-time estimate in whole minutes.
    pub reading_minutes: usize,
    /// Timestamp of caching (seconds since UNIX epoch).
    pub cached_at: u64,
}

/// Listing entry for a book available on the shelf.
#[derive(Debug, Clone, Serialize)]
pub struct BookSummary {
    pub id: String,
    pub title: String,
    pub filename: String,
    pub format: DocumentFormat,
}
