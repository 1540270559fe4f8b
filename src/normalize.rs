//! Text canonicalization: whitespace collapsing, punctuation filtering,
//! case/diacritic folding.
//!
//! Two independent, composable stages: [`clean`] produces the display form
//! (readable, accents and case preserved), [`fold`] produces the search form
//! (lowercase, diacritics stripped). [`clean_paragraphs`] is the display
//! variant that keeps the double-newline paragraph separator for the
//! segmenter. All functions are pure, total, and idempotent.

use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Punctuation kept by the allow-list filter.
const ALLOWED_PUNCTUATION: &[char] = &['.', ',', '!', '?', ';', ':', '(', ')', '[', ']', '-'];

fn is_allowed(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || c.is_whitespace() || ALLOWED_PUNCTUATION.contains(&c)
}

/// Flatten text to a single trimmed line.
///
/// Drops characters outside the allow-list (word characters, whitespace, and
/// a fixed punctuation set), then collapses every whitespace run (spaces,
/// tabs, newlines) to one space. Filtering happens before collapsing so a
/// removed character cannot leave a double space behind.
pub fn clean(text: &str) -> String {
    let filtered: String = text.chars().filter(|c| is_allowed(*c)).collect();
    filtered.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Clean each paragraph while preserving the `\n\n` paragraph separator.
///
/// Intra-paragraph whitespace is collapsed exactly as [`clean`] does; empty
/// paragraphs are dropped. This is the display variant of the canonical
/// text, the input the segmenter expects.
pub fn clean_paragraphs(text: &str) -> String {
    text.split("\n\n")
        .map(clean)
        .filter(|p| !p.is_empty())
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Lowercase and strip diacritics via NFKD decomposition.
///
/// Combining marks are dropped after canonical decomposition, so `é`
/// becomes `e` and `Ç` becomes `c`.
pub fn fold(text: &str) -> String {
    text.to_lowercase()
        .nfkd()
        .filter(|c| !is_combining_mark(*c))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clean_collapses_whitespace() {
        assert_eq!(clean("a\t b\n\nc   d"), "a b c d");
        assert_eq!(clean("  padded  "), "padded");
    }

    #[test]
    fn clean_filters_disallowed_characters() {
        assert_eq!(clean("price: 5 £ exactly"), "price: 5 exactly");
        assert_eq!(clean("keep .,!?;:()[]- these"), "keep .,!?;:()[]- these");
        assert_eq!(clean("em—dash and “quotes”"), "emdash and quotes");
    }

    #[test]
    fn clean_is_idempotent() {
        let inputs = ["a\t b\n\nc", "price 5 £ here", "  x  y  "];
        for input in inputs {
            let once = clean(input);
            assert_eq!(clean(&once), once);
        }
    }

    #[test]
    fn clean_paragraphs_preserves_separator() {
        let text = "First\nparagraph  here.\n\nSecond\tparagraph.";
        assert_eq!(
            clean_paragraphs(text),
            "First paragraph here.\n\nSecond paragraph."
        );
    }

    #[test]
    fn clean_paragraphs_drops_empty_paragraphs() {
        assert_eq!(clean_paragraphs("a\n\n\n\nb"), "a\n\nb");
    }

    #[test]
    fn clean_paragraphs_is_idempotent() {
        let text = "One  two.\n\n\n\nThree\nfour.";
        let once = clean_paragraphs(text);
        assert_eq!(clean_paragraphs(&once), once);
    }

    #[test]
    fn fold_lowercases_and_strips_accents() {
        assert_eq!(fold("Árvore da Criação"), "arvore da criacao");
        assert_eq!(fold("NAÏVE café"), "naive cafe");
    }

    #[test]
    fn fold_is_idempotent() {
        let inputs = ["Árvore", "ÉÉÉ complex ümlaut", "plain ascii"];
        for input in inputs {
            let once = fold(input);
            assert_eq!(fold(&once), once);
        }
    }

    #[test]
    fn empty_input_is_total() {
        assert_eq!(clean(""), "");
        assert_eq!(clean_paragraphs(""), "");
        assert_eq!(fold(""), "");
    }
}
