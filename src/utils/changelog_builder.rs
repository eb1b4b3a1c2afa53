use super::changelog::{ChangelogConfig, ChangelogDocument, build_document, split_blocks};
use super::git_ops::GitOps;
use crate::error::{Error, Result};
use semver::Version;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

/// one-shot driver: repository history in, changelog file out
pub struct ChangelogBuilder;

/// summary of a completed run, for display or json output
#[derive(Debug, Clone, Serialize)]
pub struct BuildReport {
    pub repository: PathBuf,
    pub output_path: PathBuf,
    pub sections: usize,
    pub newest_version: Option<Version>,
    pub bytes_written: usize,
}

impl ChangelogBuilder {
    /// parse and render history text without touching a repository or the
    /// filesystem
    pub fn render_from_text(raw: &str, config: &ChangelogConfig) -> Result<ChangelogDocument> {
        let blocks = split_blocks(raw);
        build_document(&blocks, config)
    }

    /// discover the repository, query its history, render, and overwrite
    /// the changelog file at the repository root
    pub fn build_from_repository<P: AsRef<Path>>(
        path: P,
        config: &ChangelogConfig,
    ) -> Result<BuildReport> {
        let root = GitOps::detect_repository_root(path)?;
        let raw = GitOps::read_history_log(&root)?;
        let document = Self::render_from_text(&raw, config)?;
        let rendered = document.render();

        let output_path = root.join(&config.output_file_name);
        fs::write(&output_path, rendered.as_bytes()).map_err(|e| Error::FileWriteError {
            path: output_path.clone(),
            source: e,
        })?;

        Ok(BuildReport {
            repository: root,
            output_path,
            sections: document.sections.len(),
            newest_version: document.newest_version().cloned(),
            bytes_written: rendered.len(),
        })
    }
}

impl BuildReport {
    /// display the report in human format
    pub fn display(&self) {
        println!("changelog generated:");
        println!("  repository: {}", self.repository.display());
        println!("  output: {}", self.output_path.display());
        println!("  sections: {}", self.sections);
        match &self.newest_version {
            Some(version) => println!("  newest version: {}", version),
            None => println!("  newest version: none (no history entries)"),
        }
        println!("  bytes written: {}", self.bytes_written);
    }
}
