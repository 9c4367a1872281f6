//! Font data and native handle types for the default backend.

use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use swash::{CacheKey, FontRef, StringId};

/// Owned font bytes plus the location of one validated face inside them.
///
/// The face is checked once on construction; [`FontData::font_ref`] then hands
/// out a swash `FontRef` borrowing from the shared bytes.
#[derive(Clone)]
pub struct FontData {
    /// Raw font data bytes (TTF/OTF/TTC)
    pub data: Arc<Vec<u8>>,
    offset: u32,
    key: CacheKey,
}

impl fmt::Debug for FontData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FontData")
            .field("data_len", &self.data.len())
            .field("offset", &self.offset)
            .finish()
    }
}

impl FontData {
    /// Create a new FontData from bytes using face index 0.
    ///
    /// # Returns
    /// `Some(FontData)` if the font data is valid, `None` otherwise.
    pub fn new(data: Vec<u8>) -> Option<Self> {
        Self::new_with_index(data, 0)
    }

    /// Create a new FontData from bytes with a specific face index.
    ///
    /// Needed for TrueType Collection (.ttc) files where several faces share
    /// the same data.
    pub fn new_with_index(data: Vec<u8>, face_index: usize) -> Option<Self> {
        let (offset, key) = {
            let font_ref = FontRef::from_index(&data, face_index)?;
            (font_ref.offset, font_ref.key)
        };
        Some(FontData {
            data: Arc::new(data),
            offset,
            key,
        })
    }

    /// Swash font reference for glyph and metrics lookups.
    pub fn font_ref(&self) -> FontRef<'_> {
        FontRef {
            data: self.data.as_slice(),
            offset: self.offset,
            key: self.key,
        }
    }

    /// Family name from the font's name table, English entry preferred.
    pub fn family_name(&self) -> Option<String> {
        let font_ref = self.font_ref();
        let strings = font_ref.localized_strings();
        strings
            .find_by_id(StringId::Family, Some("en"))
            .or_else(|| strings.find_by_id(StringId::Family, None))
            .map(|name| name.chars().collect())
    }
}

/// Where a [`LoadedFont`] came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FontSource {
    /// Found in the font registry under this name
    Registry { name: String },
    /// Read from a font file
    File(PathBuf),
    /// The monospace face shipped with this crate
    Bundled,
}

/// Native font handle produced by [`SystemBackend`](super::SystemBackend).
#[derive(Clone)]
pub struct LoadedFont {
    font: FontData,
    size: f64,
    source: FontSource,
}

impl fmt::Debug for LoadedFont {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoadedFont")
            .field("family", &self.family_name())
            .field("size", &self.size)
            .field("source", &self.source)
            .finish()
    }
}

impl LoadedFont {
    pub(crate) fn new(font: FontData, size: f64, source: FontSource) -> Self {
        Self { font, size, source }
    }

    /// Point size this font was loaded at.
    pub fn size(&self) -> f64 {
        self.size
    }

    pub fn source(&self) -> &FontSource {
        &self.source
    }

    /// File the font was read from, if it came from a file.
    pub fn path(&self) -> Option<&Path> {
        match &self.source {
            FontSource::File(path) => Some(path),
            FontSource::Registry { .. } | FontSource::Bundled => None,
        }
    }

    pub fn family_name(&self) -> Option<String> {
        self.font.family_name()
    }

    pub fn font_ref(&self) -> FontRef<'_> {
        self.font.font_ref()
    }

    pub fn data(&self) -> &FontData {
        &self.font
    }

    /// Behavioral equivalence: same family at the same size.
    ///
    /// Two resolutions of one descriptor produce distinct handles; this is the
    /// comparison that should hold between them.
    pub fn same_font_as(&self, other: &LoadedFont) -> bool {
        self.size == other.size && self.family_name() == other.family_name()
    }
}
