// section rendering and version assignment

use super::config::ChangelogConfig;
use super::parser::MERGE_MARKER;
use super::types::{ChangelogDocument, LogBlock, ReleaseSection};
use crate::error::{Error, Result};
use semver::Version;

/// bullet prepended to every non-empty body line
const BULLET: &str = "*  ";

/// column where the date text starts on a `Date:` metadata line
const DATE_COLUMN: usize = 8;

/// lines folded into the section heading: marker, author, date
const HEADING_LINES: usize = 3;

/// assign a descending version to each block and render all sections
///
/// with `n` blocks, block `i` in encountered (newest-first) order gets
/// patch number `n - 1 - i`, so the newest entry carries the highest
/// version and the oldest carries 0
pub fn build_document(blocks: &[LogBlock], config: &ChangelogConfig) -> Result<ChangelogDocument> {
    let total = blocks.len();
    let mut document = ChangelogDocument::new();

    for (position, block) in blocks.iter().enumerate() {
        let patch = (total - 1 - position) as u64;
        let version = Version::new(config.series_major, config.series_minor, patch);
        document.push_section(render_section(block, position, version)?);
    }

    Ok(document)
}

/// turn one block into a release section
pub fn render_section(block: &LogBlock, position: usize, version: Version) -> Result<ReleaseSection> {
    let mut lines = block.lines.clone();

    // merge entries carry one extra metadata line that must not reach the
    // output nor shift the date line
    if lines.len() > 1 && lines[1].starts_with(MERGE_MARKER) {
        lines.remove(1);
    }

    if lines.len() < HEADING_LINES {
        return Err(Error::MalformedBlock {
            block: position,
            lines: lines.len(),
        });
    }

    let date: String = lines[2].chars().skip(DATE_COLUMN).collect();

    let mut body: Vec<String> = lines
        .iter()
        .map(|line| {
            if line.is_empty() {
                String::new()
            } else {
                format!("{}{}", BULLET, line)
            }
        })
        .collect();

    // destructive delete order matters: index 2 goes while the list is
    // still full length, then the front twice; survivors are the lines
    // past the three metadata lines
    body.remove(2);
    body.remove(0);
    body.remove(0);

    Ok(ReleaseSection {
        version,
        date,
        body,
    })
}
