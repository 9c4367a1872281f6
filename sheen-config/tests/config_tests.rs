//! Integration tests for theme font configuration loading.

use std::fs;

use sheen_config::{ConfigError, FontConfig, FontResourceConfig, load_font_config};
use tempfile::TempDir;

#[test]
fn test_load_yaml_theme_with_preloaded_font() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let theme_path = temp_dir.path().join("theme.yaml");
    fs::write(
        &theme_path,
        r#"
name: Midnight
font:
  size: 12
  resource:
    preloaded:
      name: Menlo-Regular
      size: 13
"#,
    )
    .expect("Failed to write theme");

    let config = load_font_config(&theme_path).expect("Theme should load");
    assert_eq!(config.size, 12.0);
    assert_eq!(
        config.resource,
        FontResourceConfig::Preloaded {
            name: "Menlo-Regular".to_string(),
            size: Some(13.0),
        }
    );
    assert_eq!(config.preloaded_size(), Some(13.0));
}

#[test]
fn test_load_toml_theme_with_path_font() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let theme_path = temp_dir.path().join("theme.toml");
    fs::write(
        &theme_path,
        r#"
name = "Midnight"

[font]
size = 14.0

[font.resource]
path = "~/fonts/Iosevka.ttf"
"#,
    )
    .expect("Failed to write theme");

    let config = load_font_config(&theme_path).expect("Theme should load");
    assert_eq!(config.size, 14.0);
    assert_eq!(
        config.resource,
        FontResourceConfig::Path("~/fonts/Iosevka.ttf".to_string()),
        "Config keeps the raw path; expansion happens on conversion"
    );
}

#[test]
fn test_font_section_defaults() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let theme_path = temp_dir.path().join("theme.yaml");
    fs::write(&theme_path, "font:\n  size: 18\n").expect("Failed to write theme");

    let config = load_font_config(&theme_path).expect("Theme should load");
    assert_eq!(config.size, 18.0);
    assert_eq!(config.resource, FontResourceConfig::System);
}

#[test]
fn test_theme_without_font_section() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let theme_path = temp_dir.path().join("theme.toml");
    fs::write(&theme_path, "name = \"Plain\"\n").expect("Failed to write theme");

    let config = load_font_config(&theme_path).expect("Theme should load");
    assert_eq!(config, FontConfig::default());
}

#[test]
fn test_missing_theme_file_is_io_error() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let theme_path = temp_dir.path().join("missing.yaml");

    let err = load_font_config(&theme_path).expect_err("Missing file should fail");
    assert!(matches!(err, ConfigError::Io { .. }));
    assert!(err.to_string().contains("missing.yaml"));
}

#[test]
fn test_unknown_resource_kind_is_rejected() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let theme_path = temp_dir.path().join("theme.yaml");
    fs::write(&theme_path, "font:\n  resource: bitmap\n").expect("Failed to write theme");

    let err = load_font_config(&theme_path).expect_err("Unknown variant should fail");
    assert!(matches!(err, ConfigError::Yaml(_)));
}

#[test]
fn test_load_yaml_theme_with_path_font() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let theme_path = temp_dir.path().join("theme.yml");
    fs::write(
        &theme_path,
        "font:\n  resource:\n    path: /usr/share/fonts/Iosevka.ttf\n",
    )
    .expect("Failed to write theme");

    let config = load_font_config(&theme_path).expect("Theme should load");
    assert_eq!(config.size, 12.0);
    assert_eq!(
        config.resource,
        FontResourceConfig::Path("/usr/share/fonts/Iosevka.ttf".to_string())
    );
}

#[test]
fn test_load_yaml_preloaded_font_inherits_size() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let theme_path = temp_dir.path().join("theme.yaml");
    fs::write(
        &theme_path,
        "font:\n  size: 16\n  resource:\n    preloaded:\n      name: Menlo-Regular\n",
    )
    .expect("Failed to write theme");

    let config = load_font_config(&theme_path).expect("Theme should load");
    assert_eq!(config.preloaded_size(), Some(16.0));
}
