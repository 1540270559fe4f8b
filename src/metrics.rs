//! Word counts and time estimates.
//!
//! Rate-agnostic: callers supply the words-per-minute constant. The reading
//! rate lives with the cache, the narration rate with the audio view.

/// Count whitespace-delimited tokens.
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Estimate whole minutes for `words` at `words_per_minute`.
///
/// Floor-divided, with a floor of one minute for any non-empty text and
/// zero for empty text.
pub fn estimate_minutes(words: usize, words_per_minute: usize) -> usize {
    if words == 0 {
        return 0;
    }
    (words / words_per_minute.max(1)).max(1)
}
