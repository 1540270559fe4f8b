//! Analysis view: static per-kind narrative summaries.
//!
//! Templates interpolate the book title; there is no model behind this,
//! only fixed content, so the confidence value is a constant and an unknown
//! kind degrades to the fallback text rather than erroring.

use serde::Serialize;

use crate::config::AnalysisConfig;
use crate::document::BookRecord;

/// Fixed confidence reported for template-based analysis.
const TEMPLATE_CONFIDENCE: f32 = 0.85;

/// Analysis projection of one book.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisPayload {
    pub kind: String,
    pub content: String,
    pub confidence: f32,
    pub generated_by: String,
    pub suggestions: Vec<String>,
}

/// Project a book record into an analysis of the requested kind.
pub fn generate(record: &BookRecord, kind: &str, config: &AnalysisConfig) -> AnalysisPayload {
    let content = config
        .templates
        .get(kind)
        .map(|template| template.replace("{title}", &record.title))
        .unwrap_or_else(|| config.fallback.clone());

    AnalysisPayload {
        kind: kind.to_string(),
        content,
        confidence: TEMPLATE_CONFIDENCE,
        generated_by: config.generated_by.clone(),
        suggestions: config.suggestions.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::document::CanonicalText;

    fn record(title: &str) -> BookRecord {
        BookRecord {
            id: "book".into(),
            title: title.into(),
            text: CanonicalText {
                display: String::new(),
                folded: String::new(),
            },
            sections: Vec::new(),
            word_count: 0,
            reading_minutes: 0,
            cached_at: 0,
        }
    }

    #[test]
    fn template_interpolates_title() {
        let config = Config::bundled();
        let payload = generate(&record("Peter Pan"), "summary", &config.analysis);

        assert_eq!(payload.kind, "summary");
        assert!(payload.content.contains("'Peter Pan'"));
        assert_eq!(payload.confidence, 0.85);
        assert!(!payload.suggestions.is_empty());
    }

    #[test]
    fn unknown_kind_degrades_to_fallback() {
        let config = Config::bundled();
        let payload = generate(&record("Peter Pan"), "horoscope", &config.analysis);

        assert_eq!(payload.kind, "horoscope");
        assert_eq!(payload.content, config.analysis.fallback);
    }

    #[test]
    fn all_bundled_kinds_have_templates() {
        let config = Config::bundled();
        for kind in ["summary", "characters", "themes", "style"] {
            let payload = generate(&record("X"), kind, &config.analysis);
            assert_ne!(payload.content, config.analysis.fallback, "{kind}");
        }
    }
}
