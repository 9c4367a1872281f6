//! Reading the font section out of theme files.

use std::fs;
use std::path::Path;

use crate::error::ConfigError;
use crate::font::{FontConfig, ThemeFontSection};

/// On-disk format of a theme file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeFormat {
    Yaml,
    Toml,
}

impl ThemeFormat {
    /// Pick the format from a file extension: `.toml` is TOML, anything else
    /// (including no extension) is YAML.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("toml") => ThemeFormat::Toml,
            _ => ThemeFormat::Yaml,
        }
    }
}

/// Parse the `font` section out of theme file contents.
///
/// A theme without a `font` section yields [`FontConfig::default`].
pub fn parse_font_config(contents: &str, format: ThemeFormat) -> Result<FontConfig, ConfigError> {
    let section: ThemeFontSection = match format {
        ThemeFormat::Yaml if contents.trim().is_empty() => ThemeFontSection::default(),
        ThemeFormat::Yaml => serde_yaml_ng::from_str(contents)?,
        ThemeFormat::Toml => toml::from_str(contents)?,
    };
    Ok(section.font)
}

/// Load the `font` section of the theme file at `path`.
///
/// # Errors
/// Returns [`ConfigError::Io`] when the file cannot be read, or a parse error
/// matching the file's format.
pub fn load_font_config(path: &Path) -> Result<FontConfig, ConfigError> {
    log::info!("Loading theme font config from {:?}", path);
    let contents = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_font_config(&contents, ThemeFormat::from_path(path))
}
