//! Feature-specific projections of a cached book record.
//!
//! Each generator is a pure function over a [`BookRecord`](crate::document::BookRecord)
//! plus its static config table. An unknown book id never fails a generator;
//! it degrades to the table's generic fallback entry, since view generation
//! is advisory.

pub mod analysis;
pub mod audio;
pub mod world;

pub use analysis::AnalysisPayload;
pub use audio::AudioPayload;
pub use world::WorldPayload;

/// First `limit` characters of `text` with a trailing ellipsis,
/// char-boundary safe.
pub(crate) fn preview(text: &str, limit: usize) -> String {
    let mut out: String = text.chars().take(limit).collect();
    out.push_str("...");
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preview_truncates_on_char_boundaries() {
        assert_eq!(preview("Árvores são altas", 7), "Árvores...");
        assert_eq!(preview("short", 100), "short...");
    }
}
