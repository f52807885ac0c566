//! Catalog configuration
//!
//! Which categories a catalog can be searched by, which facets its results
//! can be refined by, and how many results a page shows. Built-in presets
//! cover the artwork and music score catalogs; a TOML file can replace them.

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::registry::{
    CategoryEntry, CategoryRegistry, ARTWORK_CATEGORIES, MUSIC_SCORE_CATEGORIES,
};

/// File name looked up in `~/.catalog/` and `<project>/.catalog/`.
pub const CONFIG_FILE_NAME: &str = "catalog.toml";

/// Default number of results per page
pub const DEFAULT_PAGE_SIZE: usize = 5;

/// Configuration for one catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// Catalog name, for logs and display
    pub name: String,
    /// Result refinement settings
    pub refinement: RefinementConfig,
    /// Searchable categories in display order
    pub categories: Vec<CategoryEntry>,
}

/// Result refinement configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RefinementConfig {
    /// Item fields offered as multi-select facets
    pub facets: Vec<String>,
    /// Results shown per page
    pub page_size: usize,
}

impl Default for RefinementConfig {
    fn default() -> Self {
        Self {
            facets: Vec::new(),
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self::artwork()
    }
}

impl CatalogConfig {
    /// Artwork catalog preset.
    pub fn artwork() -> Self {
        Self {
            name: "artwork".to_string(),
            refinement: RefinementConfig {
                facets: vec!["artist".to_string(), "collection".to_string()],
                ..RefinementConfig::default()
            },
            categories: table_entries(ARTWORK_CATEGORIES),
        }
    }

    /// Music score catalog preset.
    pub fn music_score() -> Self {
        Self {
            name: "music-score".to_string(),
            refinement: RefinementConfig {
                facets: ["composer", "genre", "instrumentation", "emotion"]
                    .iter()
                    .map(|f| f.to_string())
                    .collect(),
                ..RefinementConfig::default()
            },
            categories: table_entries(MUSIC_SCORE_CATEGORIES),
        }
    }

    /// Load configuration from a TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(toml_str)?)
    }

    /// Serialize configuration to TOML
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Load configuration from a JSON string
    pub fn from_json(json_str: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json_str)?)
    }

    /// Serialize configuration to JSON
    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.refinement.page_size == 0 {
            return Err(ConfigError::Invalid(
                "refinement.page_size must be positive".to_string(),
            ));
        }

        let mut seen = HashSet::new();
        for facet in &self.refinement.facets {
            if facet.trim().is_empty() {
                return Err(ConfigError::Invalid(
                    "refinement.facets contains an empty name".to_string(),
                ));
            }
            if !seen.insert(facet.as_str()) {
                return Err(ConfigError::Invalid(format!(
                    "refinement facet '{}' listed twice",
                    facet
                )));
            }
        }

        self.registry()?;
        Ok(())
    }

    /// Build the category registry described by this configuration.
    pub fn registry(&self) -> Result<CategoryRegistry, ConfigError> {
        Ok(CategoryRegistry::new(self.categories.iter().cloned())?)
    }

    /// Read and validate a TOML configuration file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config = Self::from_toml(&content)?;
        config.validate()?;
        tracing::debug!(path = ?path, catalog = %config.name, "loaded catalog configuration");
        Ok(config)
    }

    /// Load configuration from standard locations
    ///
    /// Starts from the artwork preset, then `~/.catalog/catalog.toml`, then
    /// `<project_root>/.catalog/catalog.toml`. A later file replaces an
    /// earlier one entirely.
    pub fn load_standard(project_root: Option<&Path>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(home) = dirs::home_dir() {
            let user_path = home.join(".catalog").join(CONFIG_FILE_NAME);
            if user_path.is_file() {
                config = Self::load(&user_path)?;
            }
        }

        if let Some(root) = project_root {
            let project_path = root.join(".catalog").join(CONFIG_FILE_NAME);
            if project_path.is_file() {
                config = Self::load(&project_path)?;
            }
        }

        Ok(config)
    }
}

fn table_entries(table: &[(&str, &str)]) -> Vec<CategoryEntry> {
    table
        .iter()
        .map(|(code, label)| CategoryEntry::new(*code, *label))
        .collect()
}
