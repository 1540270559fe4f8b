//! # bookgrove
//!
//! Ingestion, normalization, segmentation, and view pipeline for long-form
//! literary works.
//!
//! ## Architecture
//!
//! - **Extraction** (`extract`): HTML (`scraper`) and PDF (`pdf-extract`)
//!   bytes to plain text with paragraph breaks preserved
//! - **Normalization** (`normalize`): display and folded canonical variants
//! - **Segmentation** (`segment`): paragraph-granular sections under an
//!   advisory word budget
//! - **Cache** (`cache`): single-flight keyed store of immutable book records
//! - **Views** (`views`): world, audio, and analysis projections over static
//!   config tables with generic fallbacks
//!
//! ## Library usage
//!
//! ```no_run
//! use bookgrove::config::Config;
//! use bookgrove::shelf::Shelf;
//!
//! let shelf = Shelf::new("books", Config::bundled());
//! let record = shelf.record("Alice_in_Wonderland").unwrap();
//! println!("{} ({} words)", record.title, record.word_count);
//! let world = shelf.world_view("Alice_in_Wonderland").unwrap();
//! println!("{} navigation points", world.navigation_points.len());
//! ```

pub mod cache;
pub mod config;
pub mod document;
pub mod error;
pub mod extract;
pub mod metrics;
pub mod normalize;
pub mod segment;
pub mod shelf;
pub mod titles;
pub mod views;

pub use cache::{BookCache, BookLoader};
pub use config::Config;
pub use document::{BookRecord, BookSummary, CanonicalText, DocumentFormat, RawDocument, Section};
pub use error::{BookError, BookResult};
pub use shelf::Shelf;
pub use titles::TitleResolver;
