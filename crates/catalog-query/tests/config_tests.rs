//! Catalog configuration loading tests

use std::fs;

use catalog_query::{CatalogConfig, ConfigError, CONFIG_FILE_NAME};
use tempfile::TempDir;

fn write_project_config(dir: &TempDir, content: &str) {
    let config_dir = dir.path().join(".catalog");
    fs::create_dir_all(&config_dir).unwrap();
    fs::write(config_dir.join(CONFIG_FILE_NAME), content).unwrap();
}

#[test]
fn test_load_project_config() {
    let dir = TempDir::new().unwrap();
    write_project_config(
        &dir,
        r#"
name = "prints"

[refinement]
facets = ["artist", "medium"]
page_size = 12

[[categories]]
code = "AR"
label = "Artist"

[[categories]]
code = "MD"
label = "Medium"
"#,
    );

    let config = CatalogConfig::load_standard(Some(dir.path())).unwrap();
    assert_eq!(config.name, "prints");
    assert_eq!(config.refinement.page_size, 12);

    let registry = config.registry().unwrap();
    assert_eq!(registry.code_for("Medium"), Some("MD"));
    // The catch-all category is always present
    assert_eq!(registry.code_for("All"), Some("All"));
}

#[test]
fn test_missing_project_config_keeps_preset() {
    let dir = TempDir::new().unwrap();
    let config = CatalogConfig::load_standard(Some(dir.path())).unwrap();
    assert_eq!(config.refinement.facets.len(), 2);
}

#[test]
fn test_invalid_project_config_is_an_error() {
    let dir = TempDir::new().unwrap();
    write_project_config(&dir, "[refinement]\npage_size = 0\n");
    assert!(matches!(
        CatalogConfig::load_standard(Some(dir.path())),
        Err(ConfigError::Invalid(_))
    ));
}

#[test]
fn test_malformed_toml_is_an_error() {
    let dir = TempDir::new().unwrap();
    write_project_config(&dir, "name = [unterminated");
    assert!(matches!(
        CatalogConfig::load_standard(Some(dir.path())),
        Err(ConfigError::Toml(_))
    ));
}

#[test]
fn test_load_missing_file() {
    let dir = TempDir::new().unwrap();
    let result = CatalogConfig::load(&dir.path().join("absent.toml"));
    assert!(matches!(result, Err(ConfigError::Io(_))));
}
