//! Portable font descriptors.
//!
//! A [`FontDescriptor`] says *what* font a theme wants without saying *how*
//! the platform loads it. Resolution into a native handle happens later, in
//! [`crate::resolve`].

use std::path::{Path, PathBuf};

/// A font already registered with the platform's font registry.
#[derive(Debug, Clone, PartialEq)]
pub struct PreloadedFont {
    /// Family or PostScript name the registry knows the font by
    pub name: String,
    /// Size the preloaded font is requested at.
    ///
    /// Independent of [`FontDescriptor::size`]; this one wins for the
    /// preloaded lookup, the descriptor's size is used for any fallback.
    pub size: f64,
}

impl PreloadedFont {
    pub fn new(name: impl Into<String>, size: f64) -> Self {
        Self {
            name: name.into(),
            size,
        }
    }
}

/// How to obtain the font.
///
/// Matched exhaustively by the resolver; adding a variant is a breaking change
/// every consumer has to handle.
#[derive(Debug, Clone, PartialEq)]
pub enum ResourceKind {
    /// The platform's best-effort default monospace font
    System,
    /// A font already registered with the platform by name
    Preloaded(PreloadedFont),
    /// A font file on disk, `~` already expanded
    Path(PathBuf),
}

/// Declarative description of a font: a resource plus a point size.
///
/// Construction never fails and never touches the file system. The only
/// normalization is expanding a leading `~` in file paths, done here rather
/// than at resolution time.
#[derive(Debug, Clone, PartialEq)]
pub struct FontDescriptor {
    resource: ResourceKind,
    size: f64,
}

impl FontDescriptor {
    /// Describe a font file on disk at `size` points.
    ///
    /// A leading `~` is expanded against the current user's home directory.
    pub fn from_path(path: impl AsRef<Path>, size: f64) -> Self {
        Self {
            resource: ResourceKind::Path(expand_home_dir(path.as_ref())),
            size,
        }
    }

    /// Describe the platform's default monospace font at `size` points.
    pub fn system(size: f64) -> Self {
        Self {
            resource: ResourceKind::System,
            size,
        }
    }

    /// Describe a font already registered with the platform.
    ///
    /// `size` is used only if the preloaded font is unavailable and the
    /// resolver falls back to the platform default.
    pub fn preloaded(font: PreloadedFont, size: f64) -> Self {
        Self {
            resource: ResourceKind::Preloaded(font),
            size,
        }
    }

    /// Build a descriptor from any resource kind.
    ///
    /// `Path` resources get the same `~` expansion as [`Self::from_path`].
    pub fn from_resource(resource: ResourceKind, size: f64) -> Self {
        match resource {
            ResourceKind::Path(path) => Self::from_path(path, size),
            ResourceKind::System => Self::system(size),
            ResourceKind::Preloaded(font) => Self::preloaded(font, size),
        }
    }

    pub fn resource(&self) -> &ResourceKind {
        &self.resource
    }

    /// Point size used for path loading and for every fallback step.
    pub fn size(&self) -> f64 {
        self.size
    }

    /// Stored font file path, for `Path` descriptors.
    pub fn path(&self) -> Option<&Path> {
        match &self.resource {
            ResourceKind::Path(path) => Some(path),
            ResourceKind::System | ResourceKind::Preloaded(_) => None,
        }
    }
}

impl Default for FontDescriptor {
    fn default() -> Self {
        Self::system(12.0)
    }
}

/// Expand a leading `~` to the home directory.
///
/// `~` and `~/rest` are expanded; `~user/rest` and everything else is kept
/// as-is, as is the whole path when no home directory is known.
pub(crate) fn expand_home_dir(path: &Path) -> PathBuf {
    expand_home_dir_with(path, dirs::home_dir())
}

fn expand_home_dir_with(path: &Path, home: Option<PathBuf>) -> PathBuf {
    if let Ok(rest) = path.strip_prefix("~")
        && let Some(home) = home
    {
        if rest.as_os_str().is_empty() {
            return home;
        }
        return home.join(rest);
    }
    path.to_path_buf()
}
