//! Typed errors for font loading.
//!
//! Resolution never surfaces these: the resolver collapses every failure into
//! a fallback step. They exist so backends can say *why* a strategy failed in
//! their logs, and so setup code outside resolution can match on causes.

use std::path::PathBuf;

use thiserror::Error;

/// Why a single loading strategy did not produce a font.
#[derive(Debug, Error)]
pub enum FontLoadError {
    /// The font file could not be read.
    #[error("Font file read failed for '{}': {source}", path.display())]
    Io {
        /// Path to the font file.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The bytes were read but are not a font face swash can use.
    #[error("'{}' does not contain usable font data", path.display())]
    InvalidFontData {
        /// Path to the offending file.
        path: PathBuf,
    },

    /// No face in the registry matches the requested name.
    #[error("Font '{name}' is not registered")]
    NotRegistered {
        /// Requested family or PostScript name.
        name: String,
    },
}
