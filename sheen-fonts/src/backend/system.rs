//! Default native backend: a `fontdb` registry plus swash-validated font data.

use std::fmt;
use std::path::Path;

use anyhow::{Context, Result};
use fontdb::Database;

use super::FontBackend;
use super::fallbacks::DefaultMonospace;
use super::loader;
use super::types::{FontSource, LoadedFont};

/// Font backend over a `fontdb::Database`.
///
/// The database plays the role of the platform's font registry: names given
/// to [`FontBackend::load_by_name`] are looked up there, and fonts registered
/// with [`SystemBackend::register_font_data`] or
/// [`SystemBackend::register_font_file`] become reachable by name. Resolution
/// only reads the database, so a shared `&SystemBackend` can be used from
/// several threads.
pub struct SystemBackend {
    /// Font database for name lookups
    db: Database,
    /// Well-known monospace font tried before the built-in default
    monospace: DefaultMonospace,
}

impl fmt::Debug for SystemBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SystemBackend")
            .field("faces", &self.db.len())
            .field("monospace", &self.monospace)
            .finish()
    }
}

impl Default for SystemBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl SystemBackend {
    /// Create a backend with all system fonts registered.
    pub fn new() -> Self {
        let mut db = Database::new();
        db.load_system_fonts();
        log::info!("Loaded {} system fonts", db.len());
        Self::with_database(db)
    }

    /// Create a backend with an empty registry.
    ///
    /// Useful for hermetic setups (tests, sandboxes) where only explicitly
    /// registered fonts should be visible.
    pub fn empty() -> Self {
        Self::with_database(Database::new())
    }

    /// Create a backend over an existing database.
    pub fn with_database(db: Database) -> Self {
        Self {
            db,
            monospace: DefaultMonospace::for_target(),
        }
    }

    /// Override the well-known monospace font for this backend.
    pub fn with_default_monospace(mut self, monospace: DefaultMonospace) -> Self {
        self.monospace = monospace;
        self
    }

    /// Register font bytes so they can be resolved by name.
    pub fn register_font_data(&mut self, data: Vec<u8>) {
        let before = self.db.len();
        self.db.load_font_data(data);
        log::debug!("Registered {} font face(s) from memory", self.db.len() - before);
    }

    /// Register a font file so it can be resolved by name.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read.
    pub fn register_font_file(&mut self, path: &Path) -> Result<()> {
        let before = self.db.len();
        self.db
            .load_font_file(path)
            .with_context(|| format!("Failed to register font file {}", path.display()))?;
        if self.db.len() == before {
            log::warn!("Font file {} contains no usable faces", path.display());
        } else {
            log::debug!("Registered font file {}", path.display());
        }
        Ok(())
    }

    /// Number of faces in the registry.
    pub fn face_count(&self) -> usize {
        self.db.len()
    }

    pub fn database(&self) -> &Database {
        &self.db
    }
}

impl FontBackend for SystemBackend {
    type Font = LoadedFont;

    fn load_by_name(&self, name: &str, size: f64) -> Option<LoadedFont> {
        match loader::load_font_from_db(&self.db, name) {
            Ok(font) => Some(LoadedFont::new(
                font,
                size,
                FontSource::Registry {
                    name: name.to_string(),
                },
            )),
            Err(e) => {
                log::debug!("{e}");
                None
            }
        }
    }

    fn load_from_file(&self, path: &Path, size: f64) -> Option<LoadedFont> {
        match loader::load_font_file(path) {
            Ok(font) => Some(LoadedFont::new(
                font,
                size,
                FontSource::File(path.to_path_buf()),
            )),
            Err(e) => {
                log::debug!("{e}");
                None
            }
        }
    }

    fn default_system_font(&self, size: f64) -> LoadedFont {
        if let Some(font) = loader::load_monospace_from_db(&self.db) {
            let name = font.family_name().unwrap_or_else(|| "monospace".to_string());
            return LoadedFont::new(font, size, FontSource::Registry { name });
        }
        LoadedFont::new(loader::load_bundled_font(), size, FontSource::Bundled)
    }

    fn default_monospace(&self) -> DefaultMonospace {
        self.monospace
    }
}
