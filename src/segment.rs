//! Deterministic paragraph-granular segmentation under a word budget.
//!
//! The budget is advisory, not a hard cap: a section is closed only when the
//! next paragraph would push it over the budget, and a lone paragraph larger
//! than the budget is never split. Joining all section texts with the
//! paragraph separator reproduces the input exactly.

use crate::document::Section;
use crate::error::{BookError, BookResult};
use crate::metrics;

/// Separator between paragraphs in display text and between the paragraphs
/// of a section.
pub const PARAGRAPH_SEPARATOR: &str = "\n\n";

/// Split display text into ordered sections bounded by `budget_words`.
///
/// Paragraphs accumulate into the in-progress section; when adding the next
/// paragraph would exceed the budget and the accumulator is non-empty, the
/// section is closed and the paragraph starts the next one. Empty input
/// yields an empty sequence. A zero budget is a caller programming error.
pub fn segment(text: &str, budget_words: usize) -> BookResult<Vec<Section>> {
    if budget_words == 0 {
        return Err(BookError::InvalidBudget {
            budget: budget_words,
        });
    }
    if text.is_empty() {
        return Ok(Vec::new());
    }

    let mut sections = Vec::new();
    let mut accumulated: Vec<&str> = Vec::new();
    let mut accumulated_words = 0usize;

    for paragraph in text.split(PARAGRAPH_SEPARATOR) {
        let words = metrics::word_count(paragraph);
        if accumulated_words + words > budget_words && !accumulated.is_empty() {
            close_section(&mut sections, &accumulated, accumulated_words);
            accumulated.clear();
            accumulated_words = 0;
        }
        accumulated.push(paragraph);
        accumulated_words += words;
    }

    if !accumulated.is_empty() {
        close_section(&mut sections, &accumulated, accumulated_words);
    }

    Ok(sections)
}

fn close_section(sections: &mut Vec<Section>, paragraphs: &[&str], word_count: usize) {
    let index = sections.len() + 1;
    sections.push(Section {
        index,
        title: format!("Section {index}"),
        text: paragraphs.join(PARAGRAPH_SEPARATOR),
        word_count,
    });
}
