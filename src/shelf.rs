//! The shelf: a directory of book files behind the cache.
//!
//! [`Shelf`] is the facade consumers hold. It owns the static config, the
//! title resolver, the cache, and the directory-backed loader, and exposes
//! the record and view operations. Construct one at process start and pass
//! it around; there are no ambient globals.

use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::cache::{BookCache, BookLoader};
use crate::config::Config;
use crate::document::{
    BookRecord, BookSummary, RawDocument, Section, detect_format, require_format,
};
use crate::error::{BookError, BookResult};
use crate::segment;
use crate::titles::TitleResolver;
use crate::views::{AnalysisPayload, AudioPayload, WorldPayload, analysis, audio, world};

/// Extensions probed when resolving a book id to a file, in order.
const SHELF_EXTENSIONS: &[&str] = &["html", "htm", "xhtml", "pdf"];

/// Position of `filename`'s extension in the probe order.
fn extension_rank(filename: &str) -> usize {
    let lower = filename.to_lowercase();
    SHELF_EXTENSIONS
        .iter()
        .position(|ext| lower.ends_with(&format!(".{ext}")))
        .unwrap_or(SHELF_EXTENSIONS.len())
}

/// Resolves book ids against a local directory.
struct DirLoader {
    dir: PathBuf,
}

impl BookLoader for DirLoader {
    fn load(&self, id: &str) -> BookResult<RawDocument> {
        for ext in SHELF_EXTENSIONS {
            let path = self.dir.join(format!("{id}.{ext}"));
            if !path.is_file() {
                continue;
            }
            let format = require_format(&path.display().to_string())?;
            let data = std::fs::read(&path).map_err(|e| BookError::Io {
                path: path.display().to_string(),
                source: e,
            })?;
            return Ok(RawDocument { data, format });
        }
        Err(BookError::NotFound { id: id.into() })
    }
}

/// Directory of books served through a single shared cache.
pub struct Shelf {
    loader: DirLoader,
    cache: BookCache,
    titles: TitleResolver,
    config: Config,
}

impl Shelf {
    /// Open a shelf over `dir` with the given view tables.
    pub fn new(dir: impl Into<PathBuf>, config: Config) -> Self {
        let titles = TitleResolver::new(config.titles.clone());
        Self {
            loader: DirLoader { dir: dir.into() },
            cache: BookCache::new(titles.clone()),
            titles,
            config,
        }
    }

    /// List the books available on the shelf, sorted by id.
    ///
    /// One entry per id: when several files share a stem, the listed file is
    /// the one the loader would serve, per the extension probe order.
    pub fn list(&self) -> BookResult<Vec<BookSummary>> {
        let entries = std::fs::read_dir(&self.loader.dir).map_err(|e| BookError::Io {
            path: self.loader.dir.display().to_string(),
            source: e,
        })?;

        let mut best: HashMap<String, (usize, String)> = HashMap::new();
        for entry in entries.flatten() {
            let filename = entry.file_name().to_string_lossy().to_string();
            if detect_format(&filename).is_none() {
                continue;
            }
            let id = match Path::new(&filename).file_stem() {
                Some(stem) => stem.to_string_lossy().to_string(),
                None => continue,
            };
            let rank = extension_rank(&filename);
            match best.entry(id) {
                Entry::Occupied(mut slot) => {
                    if rank < slot.get().0 {
                        slot.insert((rank, filename));
                    }
                }
                Entry::Vacant(slot) => {
                    slot.insert((rank, filename));
                }
            }
        }

        let mut books = Vec::new();
        for (id, (_, filename)) in best {
            let format = require_format(&filename)?;
            books.push(BookSummary {
                title: self.titles.resolve(&id),
                id,
                filename,
                format,
            });
        }
        books.sort_by(|a, b| a.id.cmp(&b.id));
        Ok(books)
    }

    /// The cached canonical record for `id`, loading it on first access.
    pub fn record(&self, id: &str) -> BookResult<Arc<BookRecord>> {
        self.cache.get_or_load(id, &self.loader)
    }

    /// Sections of the display text under an arbitrary caller budget.
    pub fn sections(&self, id: &str, budget_words: usize) -> BookResult<Vec<Section>> {
        let record = self.record(id)?;
        segment::segment(&record.text.display, budget_words)
    }

    /// World projection of the book.
    pub fn world_view(&self, id: &str) -> BookResult<WorldPayload> {
        let record = self.record(id)?;
        Ok(world::generate(&record, &self.config.world))
    }

    /// Audio projection of the book.
    pub fn audio_view(&self, id: &str) -> BookResult<AudioPayload> {
        let record = self.record(id)?;
        audio::generate(&record, &self.config.audio)
    }

    /// Analysis projection of the requested kind.
    pub fn analysis(&self, id: &str, kind: &str) -> BookResult<AnalysisPayload> {
        let record = self.record(id)?;
        Ok(analysis::generate(&record, kind, &self.config.analysis))
    }

    /// Drop the cached record for `id` so the next access re-reads the file.
    pub fn invalidate(&self, id: &str) {
        self.cache.invalidate(id);
    }

    /// The view tables this shelf was opened with.
    pub fn config(&self) -> &Config {
        &self.config
    }
}
