//! Configuration parsing and management

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::types::{LintviewError, Result};

/// Coordinator settings
///
/// `enabled` is only the default for a fresh installation; once persisted,
/// the preference store value wins (see
/// [`crate::coordinator::LintCoordinator::attach`]).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Whether linting starts enabled when no preference is persisted yet
    #[serde(default = "default_enabled")]
    pub enabled: bool,

    /// File extensions (dot included) the coordinator lints
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,
}

fn default_enabled() -> bool {
    true
}

fn default_extensions() -> Vec<String> {
    vec![".css".to_string(), ".less".to_string()]
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            extensions: default_extensions(),
        }
    }
}

impl Settings {
    /// Create settings with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Load settings from a JSON file
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let settings = serde_json::from_str(&content)?;
        Ok(settings)
    }

    /// Load settings from a YAML file
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let settings = serde_yaml_ng::from_str(&content)?;
        Ok(settings)
    }

    /// Load settings from a TOML file
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let settings = toml::from_str(&content)?;
        Ok(settings)
    }

    /// Load settings from a file (auto-detect format)
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let ext = path.extension().and_then(|e| e.to_str());

        match ext {
            Some("json") => Self::from_json_file(path),
            Some("yaml") | Some("yml") => Self::from_yaml_file(path),
            Some("toml") => Self::from_toml_file(path),
            _ => {
                // Try JSON first, then YAML, then TOML
                Self::from_json_file(path)
                    .or_else(|_| Self::from_yaml_file(path))
                    .or_else(|_| Self::from_toml_file(path))
            }
        }
    }
}

/// Case-insensitive matcher over the supported extension set
///
/// Matches whole extensions only: `.css` matches, `.css2` and `css` do not.
#[derive(Debug, Clone)]
pub struct ExtensionFilter {
    pattern: Regex,
}

impl ExtensionFilter {
    /// Build a filter from a list of dot-included extensions
    ///
    /// # Examples
    /// ```
    /// use lintview::config::ExtensionFilter;
    ///
    /// let filter = ExtensionFilter::new(&[".css".to_string(), ".less".to_string()]).unwrap();
    /// assert!(filter.matches(".CSS"));
    /// assert!(!filter.matches(".js"));
    /// ```
    pub fn new(extensions: &[String]) -> Result<Self> {
        if extensions.is_empty() {
            return Err(LintviewError::InvalidConfig(
                "supported extension set is empty".to_string(),
            ));
        }

        let alternation = extensions
            .iter()
            .map(|ext| regex::escape(ext))
            .collect::<Vec<_>>()
            .join("|");
        let pattern = Regex::new(&format!("(?i)^({alternation})$"))
            .map_err(|e| LintviewError::InvalidConfig(format!("bad extension pattern: {e}")))?;

        Ok(Self { pattern })
    }

    /// Whether the given extension belongs to the supported set
    pub fn matches(&self, extension: &str) -> bool {
        !extension.is_empty() && self.pattern.is_match(extension)
    }
}
