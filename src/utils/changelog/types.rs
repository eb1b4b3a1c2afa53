// changelog data structures

use semver::Version;
use serde::{Deserialize, Serialize};

/// one history entry as a flat run of lines, marker line first
///
/// the lines are kept positional because the rendering pass works by
/// index: metadata lines are identified and removed by position, not by
/// parsing their content
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogBlock {
    pub lines: Vec<String>,
}

impl LogBlock {
    pub fn new(lines: Vec<String>) -> Self {
        Self { lines }
    }

    /// the marker line that opened this block
    pub fn header(&self) -> Option<&str> {
        self.lines.first().map(|s| s.as_str())
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }
}

/// one rendered release entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReleaseSection {
    pub version: Version,
    pub date: String,
    pub body: Vec<String>,
}

impl ReleaseSection {
    pub fn heading(&self) -> String {
        format!("## {} ({})", self.version, self.date)
    }
}

/// the full document, sections in newest-first history order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChangelogDocument {
    pub sections: Vec<ReleaseSection>,
}

impl ChangelogDocument {
    pub fn new() -> Self {
        Self {
            sections: Vec::new(),
        }
    }

    pub fn push_section(&mut self, section: ReleaseSection) {
        self.sections.push(section);
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    pub fn newest_version(&self) -> Option<&Version> {
        self.sections.first().map(|s| &s.version)
    }

    /// serialize to the final Markdown text
    ///
    /// every section contributes a blank line, its heading, a blank line,
    /// the `CHANGES` subheading, a blank line, then its body; every line
    /// is newline-terminated and an empty document renders as ""
    pub fn render(&self) -> String {
        let mut out = String::new();
        for section in &self.sections {
            out.push('\n');
            out.push_str(&section.heading());
            out.push('\n');
            out.push('\n');
            out.push_str("CHANGES\n");
            out.push('\n');
            for line in &section.body {
                out.push_str(line);
                out.push('\n');
            }
        }
        out
    }
}

impl Default for ChangelogDocument {
    fn default() -> Self {
        Self::new()
    }
}
