//! Typed error variants for the sheen-config crate.
//!
//! Callers that only want a message can rely on `Display`; callers that want
//! to react to a specific failure (missing file vs. malformed theme) can match
//! on the variant.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur when loading a theme's font configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The theme file could not be read.
    #[error("I/O error reading theme '{}': {source}", path.display())]
    Io {
        /// Path to the theme file.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The theme file contained invalid YAML.
    #[error("YAML parse error in theme: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),

    /// The theme file contained invalid TOML.
    #[error("TOML parse error in theme: {0}")]
    Toml(#[from] toml::de::Error),
}
