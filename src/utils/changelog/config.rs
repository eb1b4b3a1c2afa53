// changelog configuration

use serde::{Deserialize, Serialize};

/// configuration for changelog generation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChangelogConfig {
    /// name of the generated file, relative to the repository root
    /// (default: "CHANGELOG.md")
    #[serde(default = "default_output_file_name")]
    pub output_file_name: String,

    /// major component of the release series
    #[serde(default = "default_series_major")]
    pub series_major: u64,

    /// minor component of the release series
    #[serde(default)]
    pub series_minor: u64,
}

fn default_output_file_name() -> String {
    "CHANGELOG.md".to_string()
}

fn default_series_major() -> u64 {
    1
}

impl ChangelogConfig {
    /// create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    pub fn output_file_name(mut self, name: impl Into<String>) -> Self {
        self.output_file_name = name.into();
        self
    }

    pub fn series(mut self, major: u64, minor: u64) -> Self {
        self.series_major = major;
        self.series_minor = minor;
        self
    }
}

impl Default for ChangelogConfig {
    fn default() -> Self {
        Self {
            output_file_name: default_output_file_name(),
            series_major: default_series_major(),
            series_minor: 0,
        }
    }
}
