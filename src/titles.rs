//! Book id to display title resolution.
//!
//! A curated mapping covers ids whose file stems do not reformat into a
//! readable title; everything else goes through a deterministic structural
//! fallback. Total function, never fails.

use std::collections::HashMap;

/// Resolves opaque book ids to human-readable titles.
#[derive(Debug, Clone, Default)]
pub struct TitleResolver {
    curated: HashMap<String, String>,
}

impl TitleResolver {
    /// Build a resolver over a curated id → title mapping.
    pub fn new(curated: HashMap<String, String>) -> Self {
        Self { curated }
    }

    /// Resolve a book id to a display title.
    ///
    /// Curated entries win; on a miss, the id is cosmetically reformatted:
    /// `(` becomes `" - "`, `)` is dropped, underscores become spaces.
    pub fn resolve(&self, book_id: &str) -> String {
        if let Some(title) = self.curated.get(book_id) {
            return title.clone();
        }
        book_id
            .replace('(', " - ")
            .replace(')', "")
            .replace('_', " ")
    }
}
