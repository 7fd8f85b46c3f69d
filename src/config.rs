//! `playground.toml` support.
//!
//! ```toml
//! color = false
//! headers = true
//! category = "behavioral"
//! patterns = ["state", "strategy"]
//! ```

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::catalog::{self, Category};
use crate::error::{PlaygroundError, Result};

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PlaygroundConfig {
    pub color: bool,
    pub headers: bool,
    pub category: Option<Category>,
    /// Empty means every pattern in the catalog.
    pub patterns: Vec<String>,
}

impl Default for PlaygroundConfig {
    fn default() -> Self {
        Self {
            color: true,
            headers: true,
            category: None,
            patterns: Vec::new(),
        }
    }
}

impl PlaygroundConfig {
    pub fn parse(content: &str, origin: &Path) -> Result<Self> {
        let config: PlaygroundConfig = toml::from_str(content)
            .map_err(|err| PlaygroundError::config(origin, err.message().to_string()))?;
        config.validate(origin)?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self> {
        tracing::debug!(path = %path.display(), "loading config");
        let content = fs::read_to_string(path)
            .map_err(|err| PlaygroundError::config(path, format!("failed to read: {err}")))?;
        Self::parse(&content, path)
    }

    /// Every listed pattern must exist in the catalog.
    pub fn validate(&self, origin: &Path) -> Result<()> {
        let known = catalog::names();
        for name in &self.patterns {
            let normalized = catalog::normalize_name(name);
            if !known.contains(&normalized.as_str()) {
                let message = match catalog::find_similar_name(&normalized, &known) {
                    Some(s) => format!("unknown pattern '{name}' (did you mean '{s}'?)"),
                    None => format!("unknown pattern '{name}'"),
                };
                return Err(PlaygroundError::config(origin, message));
            }
        }
        Ok(())
    }

    /// Colors are off when the config says so or `NO_COLOR` is set.
    pub fn use_colors(&self) -> bool {
        self.color && std::env::var_os("NO_COLOR").is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_defaults_when_empty() {
        let config = PlaygroundConfig::parse("", Path::new("empty.toml")).unwrap();
        assert_eq!(config, PlaygroundConfig::default());
        assert!(config.headers);
        assert!(config.patterns.is_empty());
    }

    #[test]
    fn test_parse_full_config() {
        let content = r#"
color = false
headers = false
category = "behavioral"
patterns = ["state", "Strategy"]
"#;
        let config = PlaygroundConfig::parse(content, Path::new("p.toml")).unwrap();
        assert!(!config.color);
        assert!(!config.headers);
        assert_eq!(config.category, Some(Category::Behavioral));
        assert_eq!(config.patterns, vec!["state", "Strategy"]);
        assert!(!config.use_colors());
    }

    #[test]
    fn test_unknown_pattern_is_rejected_with_suggestion() {
        let err = PlaygroundConfig::parse(r#"patterns = ["memnto"]"#, Path::new("p.toml"))
            .unwrap_err();
        let message = err.to_string();
        assert!(message.contains("memnto"));
        assert!(message.contains("did you mean 'memento'"));
    }

    #[test]
    fn test_unknown_field_is_rejected() {
        let err = PlaygroundConfig::parse("colour = true", Path::new("p.toml")).unwrap_err();
        assert!(matches!(err, PlaygroundError::Config { .. }));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "category = \"creational\"").unwrap();
        let config = PlaygroundConfig::load(file.path()).unwrap();
        assert_eq!(config.category, Some(Category::Creational));
    }

    #[test]
    fn test_bundled_sample_config_is_valid() {
        let sample = include_str!("../playground.toml");
        let config = PlaygroundConfig::parse(sample, Path::new("playground.toml")).unwrap();
        assert_eq!(config.patterns, vec!["singleton", "monostate", "observer"]);
        assert_eq!(config.category, None);
    }

    #[test]
    fn test_load_missing_file() {
        let err = PlaygroundConfig::load(Path::new("/definitely/not/here.toml")).unwrap_err();
        assert!(err.to_string().contains("failed to read"));
    }
}
