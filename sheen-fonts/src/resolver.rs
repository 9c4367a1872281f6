//! Descriptor resolution with a fixed fallback chain.
//!
//! Order of attempts, each tried at most once:
//! 1. The requested resource: preloaded name (at the preloaded size) or font
//!    file (at the descriptor size). `System` skips straight to step 2.
//! 2. The backend's well-known monospace font, at the descriptor size.
//! 3. The backend's default system font, at the descriptor size. Always succeeds.

use std::fmt;
use std::path::Path;

use crate::backend::{DefaultMonospace, FontBackend};
use crate::descriptor::{FontDescriptor, ResourceKind};

/// A loading strategy that failed and was skipped.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Fallback<'a> {
    /// The preloaded font was not found in the registry
    Preloaded { name: &'a str },
    /// The font file could not be loaded
    Path { path: &'a Path },
    /// The platform's well-known monospace font could not be loaded
    PlatformMonospace(DefaultMonospace),
}

impl fmt::Display for Fallback<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Fallback::Preloaded { name } => {
                write!(f, "preloaded font '{name}' unavailable, using platform default")
            }
            Fallback::Path { path } => write!(
                f,
                "font file {} unavailable, using platform default",
                path.display()
            ),
            Fallback::PlatformMonospace(DefaultMonospace::Named(name)) => {
                write!(f, "monospace font '{name}' unavailable, using system font")
            }
            Fallback::PlatformMonospace(DefaultMonospace::File(path)) => {
                write!(f, "monospace font file {path} unavailable, using system font")
            }
        }
    }
}

/// Resolve `descriptor` into a native font handle.
///
/// Never fails: if the requested resource cannot be loaded, the platform
/// default is used instead.
pub fn resolve<B>(backend: &B, descriptor: &FontDescriptor) -> B::Font
where
    B: FontBackend + ?Sized,
{
    resolve_observed(backend, descriptor, |_| {})
}

/// Like [`resolve`], calling `on_fallback` once per skipped strategy, in order.
pub fn resolve_observed<B, F>(backend: &B, descriptor: &FontDescriptor, mut on_fallback: F) -> B::Font
where
    B: FontBackend + ?Sized,
    F: FnMut(&Fallback<'_>),
{
    let size = descriptor.size();
    match descriptor.resource() {
        ResourceKind::System => {}
        ResourceKind::Preloaded(font) => {
            if let Some(loaded) = backend.load_by_name(&font.name, font.size) {
                return loaded;
            }
            report(
                &mut on_fallback,
                Fallback::Preloaded {
                    name: font.name.as_str(),
                },
            );
        }
        ResourceKind::Path(path) => {
            if let Some(loaded) = backend.load_from_file(path, size) {
                return loaded;
            }
            report(
                &mut on_fallback,
                Fallback::Path {
                    path: path.as_path(),
                },
            );
        }
    }
    load_platform_default(backend, size, &mut on_fallback)
}

fn load_platform_default<B, F>(backend: &B, size: f64, on_fallback: &mut F) -> B::Font
where
    B: FontBackend + ?Sized,
    F: FnMut(&Fallback<'_>),
{
    let monospace = backend.default_monospace();
    let loaded = match monospace {
        DefaultMonospace::Named(name) => backend.load_by_name(name, size),
        DefaultMonospace::File(path) => backend.load_from_file(Path::new(path), size),
    };
    if let Some(font) = loaded {
        return font;
    }
    report(on_fallback, Fallback::PlatformMonospace(monospace));
    backend.default_system_font(size)
}

fn report<F: FnMut(&Fallback<'_>)>(on_fallback: &mut F, fallback: Fallback<'_>) {
    log::debug!("{fallback}");
    on_fallback(&fallback);
}

impl FontDescriptor {
    /// Resolve this descriptor with `backend`. See [`resolve`].
    pub fn resolve<B>(&self, backend: &B) -> B::Font
    where
        B: FontBackend + ?Sized,
    {
        resolve(backend, self)
    }
}
