//! Audio view: narration sections, duration estimates, and soundtrack
//! defaults.
//!
//! Narration sections use a larger budget than display sections and are
//! recomputed from the canonical text on each request; segmentation is
//! cheap relative to extraction.

use serde::Serialize;

use crate::config::{AudioConfig, HealingFrequency, SoundtrackType, VoiceOption};
use crate::document::BookRecord;
use crate::error::BookResult;
use crate::views::preview;
use crate::{metrics, segment};

/// Words per minute assumed for narrated audio.
pub const NARRATION_WPM: usize = 150;

/// Word budget for narration sections.
pub const NARRATION_BUDGET: usize = 1000;

/// Characters of section text shown in an audio section preview.
const PREVIEW_CHARS: usize = 100;

/// Audio projection of one book.
#[derive(Debug, Clone, Serialize)]
pub struct AudioPayload {
    pub book_id: String,
    pub title: String,
    pub sections: Vec<AudioSection>,
    pub total_duration_seconds: u64,
    pub voice_options: Vec<VoiceChoice>,
    pub background_music: String,
    pub sound_effects: Vec<String>,
    pub soundtracks: Vec<SoundtrackChoice>,
    pub frequencies: Vec<FrequencyChoice>,
    pub reading_speed: String,
}

/// One narration-budget section with its duration estimate.
#[derive(Debug, Clone, Serialize)]
pub struct AudioSection {
    pub index: usize,
    pub title: String,
    pub word_count: usize,
    pub duration_minutes: usize,
    pub preview: String,
}

/// A selectable narration voice.
#[derive(Debug, Clone, Serialize)]
pub struct VoiceChoice {
    pub id: String,
    #[serde(flatten)]
    pub voice: VoiceOption,
}

/// A selectable soundtrack style.
#[derive(Debug, Clone, Serialize)]
pub struct SoundtrackChoice {
    pub id: String,
    #[serde(flatten)]
    pub soundtrack: SoundtrackType,
}

/// One entry of the healing-frequency catalog, keyed by its frequency in Hz.
/// Soundtrack `base_frequency` values index this catalog.
#[derive(Debug, Clone, Serialize)]
pub struct FrequencyChoice {
    pub hz: String,
    #[serde(flatten)]
    pub frequency: HealingFrequency,
}

/// Project a book record into audio data.
///
/// Fails only if segmentation does, which cannot happen for the fixed
/// positive narration budget; unknown book ids fall back to the generic
/// music and effects entries.
pub fn generate(record: &BookRecord, config: &AudioConfig) -> BookResult<AudioPayload> {
    let sections = segment::segment(&record.text.display, NARRATION_BUDGET)?
        .into_iter()
        .map(|s| AudioSection {
            index: s.index,
            title: s.title,
            word_count: s.word_count,
            duration_minutes: metrics::estimate_minutes(s.word_count, NARRATION_WPM),
            preview: preview(&s.text, PREVIEW_CHARS),
        })
        .collect();

    let total_minutes = metrics::estimate_minutes(record.word_count, NARRATION_WPM);

    Ok(AudioPayload {
        book_id: record.id.clone(),
        title: record.title.clone(),
        sections,
        total_duration_seconds: total_minutes as u64 * 60,
        voice_options: config
            .voices
            .iter()
            .map(|(id, voice)| VoiceChoice {
                id: id.clone(),
                voice: voice.clone(),
            })
            .collect(),
        background_music: config
            .music
            .get(&record.id)
            .unwrap_or(&config.fallback_music)
            .clone(),
        sound_effects: config
            .effects
            .get(&record.id)
            .unwrap_or(&config.fallback_effects)
            .clone(),
        soundtracks: config
            .soundtracks
            .iter()
            .map(|(id, soundtrack)| SoundtrackChoice {
                id: id.clone(),
                soundtrack: soundtrack.clone(),
            })
            .collect(),
        frequencies: config
            .frequencies
            .iter()
            .map(|(hz, frequency)| FrequencyChoice {
                hz: hz.clone(),
                frequency: frequency.clone(),
            })
            .collect(),
        reading_speed: "normal".into(),
    })
}
