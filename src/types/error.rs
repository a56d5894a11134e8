//! Error types for lintview

/// Main error type for lintview operations
#[derive(Debug, thiserror::Error)]
pub enum LintviewError {
    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Verifier reported an internal failure
    #[error("Verifier failure: {0}")]
    Verifier(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing error
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML parsing error
    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),

    /// TOML parsing error
    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Result type alias for lintview operations
pub type Result<T> = std::result::Result<T, LintviewError>;
