//! Error types for catalog-query

use std::fmt;

use thiserror::Error;

/// Result type alias for query operations
pub type Result<T> = std::result::Result<T, QueryError>;

/// Errors raised when producing canonical query text or a search request.
///
/// Parsing never produces these: the parser degrades instead of failing.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QueryError {
    /// A criterion cannot be rendered or submitted
    #[error("Invalid criterion at index {index}: {reason}")]
    InvalidCriterion { index: usize, reason: InvalidReason },

    /// A criterion after the first has no combining logic
    #[error("Criterion at index {index} has no logic operator")]
    MissingLogic { index: usize },

    /// Category label is not in the registry
    #[error("Unknown category: {0}")]
    UnknownCategory(String),

    /// Collection scope name is not recognized
    #[error("Unknown collection scope: {0}")]
    UnknownCollection(String),

    /// The query text yielded no criteria
    #[error("Nothing to search")]
    NothingToSearch,
}

/// Why a single criterion was rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvalidReason {
    /// Text is empty or whitespace only
    EmptyText,
    /// Category label is not registered
    UnknownCategory(String),
}

impl fmt::Display for InvalidReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvalidReason::EmptyText => write!(f, "search text is empty"),
            InvalidReason::UnknownCategory(label) => write!(f, "unknown category '{}'", label),
        }
    }
}

/// Error from building a category registry.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    #[error("Duplicate category code '{code}' used by '{first}' and '{second}'")]
    DuplicateCode {
        code: String,
        first: String,
        second: String,
    },

    #[error("Duplicate category label: {0}")]
    DuplicateLabel(String),

    #[error("Category '{0}' has an empty code")]
    EmptyCode(String),

    #[error("Category code '{0}' must contain only letters, digits or '_'")]
    InvalidCode(String),

    #[error("Category with code '{0}' has an empty label")]
    EmptyLabel(String),
}

/// Error from loading or validating catalog configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(String),

    #[error("TOML error: {0}")]
    Toml(String),

    #[error("JSON error: {0}")]
    Json(String),

    #[error("Registry error: {0}")]
    Registry(#[from] RegistryError),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

impl From<std::io::Error> for ConfigError {
    fn from(err: std::io::Error) -> Self {
        ConfigError::Io(err.to_string())
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(err: toml::de::Error) -> Self {
        ConfigError::Toml(err.to_string())
    }
}

impl From<toml::ser::Error> for ConfigError {
    fn from(err: toml::ser::Error) -> Self {
        ConfigError::Toml(err.to_string())
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        ConfigError::Json(err.to_string())
    }
}
