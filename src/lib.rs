//! sheen: portable fonts for syntax-highlighting themes.
//!
//! Themes describe their font declaratively (a font file, a font already
//! registered with the platform, or just "the system monospace font") and the
//! renderer resolves that description into a native font when it needs one.
//! Resolution never fails; anything unavailable falls back to the platform's
//! default monospace font.
//!
//! The work is split across two crates, re-exported here:
//! - [`config`]: the `font` section of YAML/TOML theme files
//! - [`fonts`]: descriptors, font backends and the resolver

use std::path::Path;

use anyhow::{Context, Result};

pub use sheen_config as config;
pub use sheen_fonts as fonts;

pub use sheen_fonts::{FontDescriptor, LoadedFont, SystemBackend, resolve};

/// Read the `font` section of the theme file at `path` as a descriptor.
///
/// A theme without a `font` section yields the system font at the default
/// size. Path resources have `~` expanded.
///
/// # Errors
/// Returns an error if the theme file cannot be read or parsed.
pub fn load_theme_font(path: &Path) -> Result<FontDescriptor> {
    let config = sheen_config::load_font_config(path)
        .with_context(|| format!("Failed to load font from theme {}", path.display()))?;
    log::debug!("Theme {} font: {:?}", path.display(), config);
    Ok(FontDescriptor::from(config))
}
