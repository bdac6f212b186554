//! Configuration model for go-init.
//!
//! An optional YAML file (passed with `--config`) can pin the author, the
//! copyright year and the parent directory projects are created in. Unknown
//! fields are ignored. Values given on the command line win over the file.
//!
//! The file never changes *which* files are generated.

use crate::error::{Result, ScaffoldError};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Contents of a go-init config file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Author for copyright lines. When set, git is not consulted.
    pub author: Option<String>,

    /// Copyright year. Defaults to the current local year.
    pub year: Option<i32>,

    /// Directory the new project is created in. Defaults to the current
    /// working directory.
    pub output_dir: Option<PathBuf>,
}

impl Config {
    /// Load config from a YAML file.
    ///
    /// # Returns
    ///
    /// * `Ok(Config)` - Successfully loaded and validated config
    /// * `Err(ScaffoldError::Config)` - Read error, parse error or validation failure
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| {
            ScaffoldError::Config(format!(
                "failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        Self::from_yaml(&content)
    }

    /// Parse config from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        // An empty file is a valid, empty config.
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: Config = serde_yaml::from_str(yaml)
            .map_err(|e| ScaffoldError::Config(format!("failed to parse config YAML: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Validation rules:
    /// - `author`, if present, must not be blank
    /// - `year`, if present, must be positive
    pub fn validate(&self) -> Result<()> {
        if let Some(author) = &self.author
            && author.trim().is_empty()
        {
            return Err(ScaffoldError::Config(
                "config validation failed: author must not be empty".to_string(),
            ));
        }

        if let Some(year) = self.year
            && year <= 0
        {
            return Err(ScaffoldError::Config(format!(
                "config validation failed: year must be positive (found {})",
                year
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn empty_yaml_is_default() {
        assert_eq!(Config::from_yaml("").unwrap(), Config::default());
        assert_eq!(Config::from_yaml("  \n").unwrap(), Config::default());
    }

    #[test]
    fn parses_all_fields() {
        let config = Config::from_yaml(
            r#"
author: Jane Doe
year: 2024
output_dir: /tmp/projects
"#,
        )
        .unwrap();

        assert_eq!(config.author.as_deref(), Some("Jane Doe"));
        assert_eq!(config.year, Some(2024));
        assert_eq!(config.output_dir, Some(PathBuf::from("/tmp/projects")));
    }

    #[test]
    fn unknown_fields_are_ignored() {
        let config = Config::from_yaml("year: 2030\nfuture_option: true\n").unwrap();
        assert_eq!(config.year, Some(2030));
        assert!(config.author.is_none());
    }

    #[test]
    fn blank_author_is_rejected() {
        let err = Config::from_yaml("author: '   '\n").unwrap_err();
        assert!(matches!(err, ScaffoldError::Config(_)));
        assert!(err.to_string().contains("author must not be empty"));
    }

    #[test]
    fn non_positive_year_is_rejected() {
        let err = Config::from_yaml("year: 0\n").unwrap_err();
        assert!(err.to_string().contains("year must be positive"));
    }

    #[test]
    fn invalid_yaml_is_config_error() {
        let err = Config::from_yaml("year: [not a number\n").unwrap_err();
        assert!(matches!(err, ScaffoldError::Config(_)));
    }

    #[test]
    fn load_reads_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("go-init.yaml");
        std::fs::write(&path, "author: Jane Doe\n").unwrap();

        let config = Config::load(&path).unwrap();
        assert_eq!(config.author.as_deref(), Some("Jane Doe"));
    }

    #[test]
    fn load_missing_file_is_config_error() {
        let temp_dir = TempDir::new().unwrap();
        let err = Config::load(temp_dir.path().join("missing.yaml")).unwrap_err();
        assert!(err.to_string().contains("failed to read config file"));
    }
}
