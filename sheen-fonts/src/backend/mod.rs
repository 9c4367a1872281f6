//! Native font-loading capability.
//!
//! The resolver never talks to a platform API directly. It goes through a
//! [`FontBackend`], which supplies three primitives (load by name, load from
//! a file, and an infallible default font) plus the well-known monospace font
//! to try before the default. [`SystemBackend`] is the implementation used
//! outside of tests, built on `fontdb` and `swash`.

mod fallbacks;
mod loader;
mod system;
mod types;

use std::path::Path;

pub use fallbacks::DefaultMonospace;
pub use loader::BUNDLED_MONOSPACE;
pub use system::SystemBackend;
pub use types::{FontData, FontSource, LoadedFont};

/// Platform font-loading primitives consumed by [`crate::resolve`].
///
/// Loading methods return `None` for any failure (unknown name, missing
/// file, corrupt or unsupported data). Only [`FontBackend::default_system_font`]
/// is required to always succeed.
pub trait FontBackend {
    /// Native font handle type.
    type Font;

    /// Look up a registered font by family or PostScript name.
    fn load_by_name(&self, name: &str, size: f64) -> Option<Self::Font>;

    /// Load a font from a file on disk.
    fn load_from_file(&self, path: &Path, size: f64) -> Option<Self::Font>;

    /// The platform's own default font. Must never fail.
    fn default_system_font(&self, size: f64) -> Self::Font;

    /// Monospace font tried before [`FontBackend::default_system_font`].
    fn default_monospace(&self) -> DefaultMonospace {
        DefaultMonospace::for_target()
    }
}

impl<B: FontBackend + ?Sized> FontBackend for &B {
    type Font = B::Font;

    fn load_by_name(&self, name: &str, size: f64) -> Option<Self::Font> {
        (**self).load_by_name(name, size)
    }

    fn load_from_file(&self, path: &Path, size: f64) -> Option<Self::Font> {
        (**self).load_from_file(path, size)
    }

    fn default_system_font(&self, size: f64) -> Self::Font {
        (**self).default_system_font(size)
    }

    fn default_monospace(&self) -> DefaultMonospace {
        (**self).default_monospace()
    }
}
