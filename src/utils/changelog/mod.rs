// changelog generation module

pub mod config;
pub mod parser;
pub mod renderer;
pub mod types;

pub use config::ChangelogConfig;
pub use parser::{COMMIT_MARKER, MERGE_MARKER, split_blocks};
pub use renderer::{build_document, render_section};
pub use types::{ChangelogDocument, LogBlock, ReleaseSection};
