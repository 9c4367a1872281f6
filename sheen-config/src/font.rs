//! Font section of a theme file.

use serde::{Deserialize, Serialize};

/// How a theme wants its font loaded.
///
/// Written as a single-key map (or a bare string for `system`), so in YAML
/// the three forms read as:
///
/// ```yaml
/// resource: system
/// resource:
///   path: ~/fonts/Iosevka.ttf
/// resource:
///   preloaded:
///     name: Menlo-Regular
///     size: 13
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum FontResourceConfig {
    /// Use the platform's default monospace font (default)
    #[default]
    System,
    /// Use a font already registered with the platform under `name`
    Preloaded {
        /// Family or PostScript name
        name: String,
        /// Size for the preloaded font; the outer `size` is used when omitted
        #[serde(default, skip_serializing_if = "Option::is_none")]
        size: Option<f64>,
    },
    /// Load a font file from disk; a leading `~` is expanded on conversion
    Path(String),
}

/// Font configuration for a highlighting theme.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FontConfig {
    /// Point size
    #[serde(default = "crate::defaults::font_size")]
    pub size: f64,

    /// Resource to load the font from
    #[serde(default, with = "serde_yaml_ng::with::singleton_map")]
    pub resource: FontResourceConfig,
}

impl Default for FontConfig {
    fn default() -> Self {
        Self {
            size: crate::defaults::font_size(),
            resource: FontResourceConfig::default(),
        }
    }
}

impl FontConfig {
    /// Size the preloaded font should be requested at.
    ///
    /// Returns the preloaded entry's own size when it has one, otherwise the
    /// outer size. `None` for non-preloaded resources.
    pub fn preloaded_size(&self) -> Option<f64> {
        match &self.resource {
            FontResourceConfig::Preloaded { size, .. } => Some(size.unwrap_or(self.size)),
            FontResourceConfig::System | FontResourceConfig::Path(_) => None,
        }
    }
}

/// The subset of a theme file this crate cares about.
///
/// Unknown keys (colors, token styles, ...) are ignored so a full theme file
/// can be handed over as-is.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ThemeFontSection {
    /// Font section; defaults to the system font at the default size
    #[serde(default)]
    pub font: FontConfig,
}
