//! Theme font configuration for sheen.
//!
//! A highlighting theme describes its font declaratively. This crate owns the
//! serde representation of that description as it appears in a theme file:
//!
//! - [`FontConfig`]: point size plus the resource to load
//! - [`FontResourceConfig`]: system default, preloaded-by-name, or file path
//! - [`load_font_config`]: read the `font` section of a YAML or TOML theme file
//!
//! Converting a [`FontConfig`] into a resolvable descriptor is the job of the
//! `sheen-fonts` crate; nothing here touches the file system beyond reading
//! the theme file itself.

pub mod defaults;
pub mod error;
pub mod font;
mod persistence;

pub use error::ConfigError;
pub use font::{FontConfig, FontResourceConfig, ThemeFontSection};
pub use persistence::{ThemeFormat, load_font_config, parse_font_config};
