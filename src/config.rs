//! Static view tables: titles, world themes, audio defaults, analysis
//! templates.
//!
//! Configuration is data, not behavior: each table maps a book id to
//! feature-specific attributes with one generic fallback entry for unknown
//! ids. The defaults are bundled into the binary from
//! `data/default_config.toml`; a user file loaded with [`Config::load`]
//! replaces the tables wholesale.

use std::collections::{BTreeMap, HashMap};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{BookError, BookResult};

const DEFAULT_CONFIG_TOML: &str = include_str!("../data/default_config.toml");

/// All static tables consumed by the cache and the view generators.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// Curated book id → display title entries.
    #[serde(default)]
    pub titles: HashMap<String, String>,
    #[serde(default)]
    pub world: WorldConfig,
    #[serde(default)]
    pub audio: AudioConfig,
    #[serde(default)]
    pub analysis: AnalysisConfig,
}

/// World-view theme table.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct WorldConfig {
    /// Per-book themes keyed by book id.
    #[serde(default)]
    pub themes: HashMap<String, WorldTheme>,
    /// Generic entry for ids not in `themes`.
    #[serde(default)]
    pub fallback: WorldTheme,
}

/// Visual/atmospheric attributes of one book's world.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WorldTheme {
    pub environment_type: String,
    pub theme_colors: Vec<String>,
    pub interactive_elements: Vec<String>,
    pub atmosphere: String,
}

/// Audio-view tables: per-book music and effects plus the global voice,
/// soundtrack, and frequency catalogs.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AudioConfig {
    #[serde(default)]
    pub music: HashMap<String, String>,
    #[serde(default)]
    pub fallback_music: String,
    #[serde(default)]
    pub effects: HashMap<String, Vec<String>>,
    #[serde(default)]
    pub fallback_effects: Vec<String>,
    #[serde(default)]
    pub voices: BTreeMap<String, VoiceOption>,
    #[serde(default)]
    pub soundtracks: BTreeMap<String, SoundtrackType>,
    #[serde(default)]
    pub frequencies: BTreeMap<String, HealingFrequency>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VoiceOption {
    pub name: String,
    pub description: String,
    pub language: String,
    pub style: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SoundtrackType {
    pub name: String,
    pub description: String,
    pub base_frequency: String,
    pub instruments: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealingFrequency {
    pub name: String,
    pub description: String,
}

/// Analysis-view templates keyed by analysis kind. Templates interpolate
/// `{title}`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AnalysisConfig {
    #[serde(default)]
    pub templates: HashMap<String, String>,
    #[serde(default)]
    pub generated_by: String,
    #[serde(default)]
    pub fallback: String,
    #[serde(default)]
    pub suggestions: Vec<String>,
}

impl Config {
    /// The tables bundled into the binary.
    pub fn bundled() -> Self {
        toml::from_str(DEFAULT_CONFIG_TOML).expect("bundled config must parse")
    }

    /// Load tables from a TOML file. Missing sections fall back to empty
    /// tables, not to the bundled ones.
    pub fn load(path: &Path) -> BookResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| BookError::Config {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        toml::from_str(&content).map_err(|e| BookError::Config {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_config_parses() {
        let config = Config::bundled();
        assert!(config.titles.contains_key("TreasureIsland"));
        assert!(config.world.themes.contains_key("Alice_in_Wonderland"));
        assert_eq!(config.world.fallback.environment_type, "literary_classic");
        assert_eq!(config.audio.fallback_music, "classical_ambient");
        assert_eq!(config.audio.voices.len(), 4);
        assert!(config.audio.frequencies.contains_key("432"));
        assert!(config.analysis.templates.contains_key("summary"));
    }

    #[test]
    fn partial_user_config_is_valid() {
        let config: Config = toml::from_str(
            r#"
            [titles]
            MyBook = "My Book"
            "#,
        )
        .unwrap();
        assert_eq!(config.titles["MyBook"], "My Book");
        assert!(config.world.themes.is_empty());
    }

    #[test]
    fn load_rejects_bad_toml() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "not [ valid").unwrap();
        assert!(matches!(
            Config::load(&path),
            Err(BookError::Config { .. })
        ));
    }
}
