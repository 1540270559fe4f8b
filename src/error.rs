//! Rich diagnostic error types for the bookgrove pipeline.
//!
//! A single error enum covers the whole pipeline with miette `#[diagnostic]`
//! derives, providing error codes, help text, and source chains so users know
//! exactly what went wrong and how to fix it.

use miette::Diagnostic;
use thiserror::Error;

/// Errors from the ingestion, segmentation, and cache pipeline.
#[derive(Debug, Error, Diagnostic)]
pub enum BookError {
    #[error("unsupported document format: \"{path}\"")]
    #[diagnostic(
        code(bookgrove::extract::unsupported_format),
        help(
            "Supported formats are html (.html, .htm, .xhtml) and pdf (.pdf). \
             Rename the file or convert it before placing it on the shelf."
        )
    )]
    UnsupportedFormat { path: String },

    #[error("parse error in {format} document: {message}")]
    #[diagnostic(
        code(bookgrove::extract::parse),
        help(
            "The document could not be parsed. Verify the file is valid {format} \
             and not corrupted."
        )
    )]
    Parse { format: String, message: String },

    #[error("invalid section budget: {budget}")]
    #[diagnostic(
        code(bookgrove::segment::invalid_budget),
        help("The word budget must be a positive integer.")
    )]
    InvalidBudget { budget: usize },

    #[error("book not found: \"{id}\"")]
    #[diagnostic(
        code(bookgrove::shelf::not_found),
        help(
            "No book with this id exists on the shelf. \
             List available books with `bookgrove list`."
        )
    )]
    NotFound { id: String },

    #[error("I/O error for {path}: {source}")]
    #[diagnostic(
        code(bookgrove::shelf::io),
        help(
            "A filesystem operation failed. Check that the books directory exists \
             and is readable."
        )
    )]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to load config \"{path}\": {message}")]
    #[diagnostic(
        code(bookgrove::config::parse),
        help(
            "Check the TOML syntax against the bundled default tables \
             in data/default_config.toml."
        )
    )]
    Config { path: String, message: String },
}

/// Convenience alias for pipeline operation results.
pub type BookResult<T> = std::result::Result<T, BookError>;
