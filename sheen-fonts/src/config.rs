//! Conversion from theme configuration to descriptors.

use sheen_config::{FontConfig, FontResourceConfig};

use crate::descriptor::{FontDescriptor, PreloadedFont};

impl From<&FontConfig> for FontDescriptor {
    fn from(config: &FontConfig) -> Self {
        match &config.resource {
            FontResourceConfig::System => FontDescriptor::system(config.size),
            FontResourceConfig::Path(path) => FontDescriptor::from_path(path, config.size),
            FontResourceConfig::Preloaded { name, .. } => {
                let size = config.preloaded_size().unwrap_or(config.size);
                FontDescriptor::preloaded(PreloadedFont::new(name.clone(), size), config.size)
            }
        }
    }
}

impl From<FontConfig> for FontDescriptor {
    fn from(config: FontConfig) -> Self {
        FontDescriptor::from(&config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descriptor::ResourceKind;

    #[test]
    fn test_default_config_is_system_descriptor() {
        let descriptor = FontDescriptor::from(FontConfig::default());
        assert_eq!(descriptor, FontDescriptor::system(12.0));
    }

    #[test]
    fn test_preloaded_without_size_inherits_outer_size() {
        let config = FontConfig {
            size: 13.0,
            resource: FontResourceConfig::Preloaded {
                name: "Menlo-Regular".to_string(),
                size: None,
            },
        };
        let descriptor = FontDescriptor::from(&config);
        assert_eq!(
            descriptor.resource(),
            &ResourceKind::Preloaded(PreloadedFont::new("Menlo-Regular", 13.0))
        );
        assert_eq!(descriptor.size(), 13.0);
    }

    #[test]
    fn test_preloaded_with_size_keeps_it() {
        let config = FontConfig {
            size: 13.0,
            resource: FontResourceConfig::Preloaded {
                name: "Menlo-Regular".to_string(),
                size: Some(18.0),
            },
        };
        let descriptor = FontDescriptor::from(&config);
        assert_eq!(
            descriptor.resource(),
            &ResourceKind::Preloaded(PreloadedFont::new("Menlo-Regular", 18.0))
        );
    }

    #[test]
    fn test_path_config_is_expanded() {
        let Some(home) = dirs::home_dir() else {
            return;
        };
        let config = FontConfig {
            size: 14.0,
            resource: FontResourceConfig::Path("~/fonts/x.ttf".to_string()),
        };
        let descriptor = FontDescriptor::from(config);
        assert_eq!(descriptor.path(), Some(home.join("fonts").join("x.ttf").as_path()));
    }
}
