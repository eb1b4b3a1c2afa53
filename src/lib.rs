pub mod error;
pub mod utils;

pub use error::*;
pub use utils::changelog::{
    COMMIT_MARKER, ChangelogConfig, ChangelogDocument, LogBlock, MERGE_MARKER, ReleaseSection,
    build_document, render_section, split_blocks,
};
pub use utils::changelog_builder::{BuildReport, ChangelogBuilder};
pub use utils::config::RelnotesConfig;
pub use utils::git_ops::GitOps;
