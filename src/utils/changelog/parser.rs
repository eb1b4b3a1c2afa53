// history log partitioning

use super::types::LogBlock;

/// line prefix that opens a new history entry in `git log` output
pub const COMMIT_MARKER: &str = "commit ";

/// optional second line of a merge entry
pub const MERGE_MARKER: &str = "Merge: ";

/// partition raw history text into per-entry blocks
///
/// a line starting with the commit marker closes the running block and
/// opens a new one seeded with that line; every other line joins the
/// running block with each `*` defused to a space so message text cannot
/// form Markdown list items downstream
///
/// whatever accumulated before the first marker line (empty for
/// well-formed input, the whole text when there is no marker at all) is
/// dropped as the leading block
pub fn split_blocks(raw: &str) -> Vec<LogBlock> {
    let mut blocks = Vec::new();
    let mut current: Vec<String> = Vec::new();

    for line in raw.split('\n') {
        if line.starts_with(COMMIT_MARKER) {
            blocks.push(LogBlock::new(current));
            current = vec![line.to_string()];
        } else {
            current.push(line.replace('*', " "));
        }
    }
    blocks.push(LogBlock::new(current));

    // the leading block is never a real entry
    blocks.remove(0);
    blocks
}
