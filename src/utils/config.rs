use super::changelog::ChangelogConfig;
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// main configuration for relnotes
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RelnotesConfig {
    /// changelog generation configuration
    #[serde(default)]
    pub changelog: ChangelogConfig,
}

impl RelnotesConfig {
    /// load configuration from a TOML file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents =
            std::fs::read_to_string(path).map_err(|e| crate::error::Error::FileReadError {
                path: path.to_path_buf(),
                source: e,
            })?;

        let config: RelnotesConfig =
            toml::from_str(&contents).map_err(|e| crate::error::Error::TomlParseError {
                path: path.to_path_buf(),
                source: e,
            })?;

        Ok(config)
    }

    /// find and load configuration file in repository
    ///
    /// looks for `relnotes.toml` in the repository root
    /// returns default config if file is not found
    pub fn load_or_default<P: AsRef<Path>>(repo_path: P) -> Self {
        match Self::find_config_file(&repo_path) {
            Some(config_path) => {
                // if config exists but can't be parsed, use default
                // (the error surfaces separately when loaded explicitly)
                Self::load_from_file(&config_path).unwrap_or_default()
            }
            None => Self::default(),
        }
    }

    /// find configuration file in repository
    ///
    /// looks for `relnotes.toml` in the repository root
    pub fn find_config_file<P: AsRef<Path>>(repo_path: P) -> Option<PathBuf> {
        let repo_path = repo_path.as_ref();
        let config_path = repo_path.join("relnotes.toml");

        if config_path.exists() && config_path.is_file() {
            Some(config_path)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = RelnotesConfig::default();
        assert_eq!(config.changelog.output_file_name, "CHANGELOG.md");
        assert_eq!(config.changelog.series_major, 1);
        assert_eq!(config.changelog.series_minor, 0);
    }

    #[test]
    fn test_parse_partial_changelog_table() {
        let config: RelnotesConfig =
            toml::from_str("[changelog]\noutput_file_name = \"HISTORY.md\"\n").unwrap();
        assert_eq!(config.changelog.output_file_name, "HISTORY.md");
        assert_eq!(config.changelog.series_major, 1);
    }

    #[test]
    fn test_parse_full_config() {
        let text = r#"
[changelog]
output_file_name = "NOTES.md"
series_major = 2
series_minor = 5
"#;
        let config: RelnotesConfig = toml::from_str(text).unwrap();
        assert_eq!(config.changelog.output_file_name, "NOTES.md");
        assert_eq!(config.changelog.series_major, 2);
        assert_eq!(config.changelog.series_minor, 5);
    }

    #[test]
    fn test_load_or_default_without_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let config = RelnotesConfig::load_or_default(dir.path());
        assert_eq!(config.changelog.output_file_name, "CHANGELOG.md");
    }
}
