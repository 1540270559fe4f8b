//! World view: spatial navigation data for the reading world.
//!
//! One navigation point per display section, carrying a short preview and a
//! synthetic coordinate laid out as a linear offset by section order. The
//! coordinate is a placeholder layout policy, not geometry.

use serde::Serialize;

use crate::config::{WorldConfig, WorldTheme};
use crate::document::{BookRecord, Section};
use crate::views::preview;

/// Characters of section text shown in a navigation point preview.
const PREVIEW_CHARS: usize = 100;

/// Spacing between consecutive navigation points along the x axis.
const POINT_SPACING: i64 = 10;

/// World projection of one book.
#[derive(Debug, Clone, Serialize)]
pub struct WorldPayload {
    pub book_id: String,
    pub title: String,
    pub world_config: WorldTheme,
    pub sections: Vec<Section>,
    pub navigation_points: Vec<NavigationPoint>,
    pub interactive_mode: bool,
    pub ai_companion: bool,
}

/// A walkable anchor for one section.
#[derive(Debug, Clone, Serialize)]
pub struct NavigationPoint {
    pub id: String,
    pub title: String,
    pub position: [i64; 3],
    pub section_index: usize,
    pub preview: String,
}

/// Project a book record into world data.
pub fn generate(record: &BookRecord, config: &WorldConfig) -> WorldPayload {
    let theme = config
        .themes
        .get(&record.id)
        .unwrap_or(&config.fallback)
        .clone();

    let navigation_points = record
        .sections
        .iter()
        .enumerate()
        .map(|(i, section)| NavigationPoint {
            id: format!("nav_{}", section.index),
            title: section.title.clone(),
            position: [i as i64 * POINT_SPACING, 0, 0],
            section_index: section.index,
            preview: preview(&section.text, PREVIEW_CHARS),
        })
        .collect();

    WorldPayload {
        book_id: record.id.clone(),
        title: record.title.clone(),
        world_config: theme,
        sections: record.sections.clone(),
        navigation_points,
        interactive_mode: true,
        ai_companion: true,
    }
}
