//! Well-known monospace font per target platform.
//!
//! First step of the platform-default procedure: before settling for the
//! backend's built-in default font, the resolver tries the monospace font the
//! running platform is known to ship.

/// A well-known monospace font and how to reach it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DefaultMonospace {
    /// Ask the font registry for this family or PostScript name
    Named(&'static str),
    /// Load this font file
    File(&'static str),
}

impl DefaultMonospace {
    /// The entry for the platform this crate was compiled for.
    pub const fn for_target() -> Self {
        #[cfg(any(target_os = "ios", target_os = "tvos", target_os = "visionos"))]
        {
            DefaultMonospace::Named("Menlo-Regular")
        }

        #[cfg(target_os = "macos")]
        {
            DefaultMonospace::File("/Library/Fonts/Courier New.ttf")
        }

        #[cfg(target_os = "windows")]
        {
            DefaultMonospace::File("C:\\Windows\\Fonts\\consola.ttf")
        }

        #[cfg(not(any(
            target_os = "ios",
            target_os = "tvos",
            target_os = "visionos",
            target_os = "macos",
            target_os = "windows"
        )))]
        {
            DefaultMonospace::Named("DejaVu Sans Mono")
        }
    }
}

impl Default for DefaultMonospace {
    fn default() -> Self {
        Self::for_target()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_target_entry_is_not_empty() {
        match DefaultMonospace::for_target() {
            DefaultMonospace::Named(name) => assert!(!name.is_empty()),
            DefaultMonospace::File(path) => assert!(!path.is_empty()),
        }
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn test_linux_uses_dejavu_by_name() {
        assert_eq!(
            DefaultMonospace::for_target(),
            DefaultMonospace::Named("DejaVu Sans Mono")
        );
    }

    #[cfg(target_os = "macos")]
    #[test]
    fn test_macos_uses_courier_new_file() {
        assert_eq!(
            DefaultMonospace::for_target(),
            DefaultMonospace::File("/Library/Fonts/Courier New.ttf")
        );
    }
}
