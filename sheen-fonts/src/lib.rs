//! Font descriptors and native font resolution for sheen.
//!
//! This crate provides:
//! - [`FontDescriptor`]: a portable description of a font (system default,
//!   preloaded-by-name, or font file) plus a point size
//! - [`FontBackend`]: the native font-loading capability resolution runs on
//! - [`resolve`]: turns a descriptor into a native handle and never fails
//! - [`SystemBackend`]: the default backend, a `fontdb` registry with
//!   swash-validated font data and a bundled monospace face as last resort
//!
//! # Fallback chain
//!
//! 1. The requested resource (preloaded name or font file)
//! 2. The platform's well-known monospace font ([`DefaultMonospace`])
//! 3. The backend's default system font, which always succeeds
//!
//! Failures along the way are never returned. They are logged at `debug`
//! level and can be observed with [`resolve_observed`].
//!
//! ```no_run
//! use sheen_fonts::{FontDescriptor, SystemBackend};
//!
//! let backend = SystemBackend::new();
//! let font = FontDescriptor::from_path("~/fonts/Iosevka.ttf", 14.0).resolve(&backend);
//! println!("{:?} at {}pt", font.family_name(), font.size());
//! ```

pub mod backend;
mod config;
pub mod descriptor;
pub mod error;
pub mod resolver;

// Re-export main types for convenience
pub use backend::{
    BUNDLED_MONOSPACE, DefaultMonospace, FontBackend, FontData, FontSource, LoadedFont,
    SystemBackend,
};
pub use descriptor::{FontDescriptor, PreloadedFont, ResourceKind};
pub use error::FontLoadError;
pub use resolver::{Fallback, resolve, resolve_observed};
