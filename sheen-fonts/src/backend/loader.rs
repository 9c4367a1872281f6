//! Font loading utilities for registry, file and bundled fonts.

use std::fs;
use std::path::Path;

use fontdb::{Database, Family, ID, Query};

use super::types::FontData;
use crate::error::FontLoadError;

/// Bundled Hack Regular (TTF), the last-resort monospace face.
pub const BUNDLED_MONOSPACE: &[u8] = epaint_default_fonts::HACK_REGULAR;

/// Load the bundled monospace font.
///
/// The bytes are a fixed, known-good TTF compiled into the binary, so parsing
/// them cannot fail at runtime.
pub fn load_bundled_font() -> FontData {
    FontData::new(BUNDLED_MONOSPACE.to_vec()).expect("bundled Hack Regular is a valid font")
}

/// Read a font file and validate its first face.
pub fn load_font_file(path: &Path) -> Result<FontData, FontLoadError> {
    let bytes = fs::read(path).map_err(|source| FontLoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    FontData::new(bytes).ok_or_else(|| FontLoadError::InvalidFontData {
        path: path.to_path_buf(),
    })
}

/// Load a registered font by family name, then by exact PostScript name.
pub fn load_font_from_db(db: &Database, name: &str) -> Result<FontData, FontLoadError> {
    let query = Query {
        families: &[Family::Name(name)],
        weight: fontdb::Weight::NORMAL,
        style: fontdb::Style::Normal,
        ..Query::default()
    };

    db.query(&query)
        .or_else(|| {
            db.faces()
                .find(|face| face.post_script_name == name)
                .map(|face| face.id)
        })
        .and_then(|id| load_face(db, id))
        .ok_or_else(|| FontLoadError::NotRegistered {
            name: name.to_string(),
        })
}

/// Load the registry's generic monospace face, if it has one.
pub fn load_monospace_from_db(db: &Database) -> Option<FontData> {
    let query = Query {
        families: &[Family::Monospace],
        ..Query::default()
    };
    db.query(&query).and_then(|id| load_face(db, id))
}

/// Copy a face's bytes out of the database.
///
/// Passes the face index through so faces inside TrueType Collections
/// resolve to the right font.
fn load_face(db: &Database, id: ID) -> Option<FontData> {
    db.with_face_data(id, |data, face_index| {
        FontData::new_with_index(data.to_vec(), face_index as usize)
    })
    .flatten()
}
