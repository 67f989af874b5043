//! The on-disk snapshot format.
//!
//! A snapshot is a UTF-8 text file: a `# ` header line, then one `- ` bullet
//! line per item in list order. Blank lines are ignored. Items may not
//! contain newlines; everything after the `- ` prefix, including whitespace,
//! is the item verbatim.
//!
//! ```text
//! # To Do
//!
//! - Buy milk
//! - Fix the fence
//! ```
//!
//! This shape is the external contract: it must stay stable so that old
//! snapshots keep loading. The mandatory header doubles as a corruption
//! check — a damaged or foreign file fails parsing instead of being read
//! as a list of garbage items.

use crate::model::list::TodoList;

/// Header written at the top of every snapshot.
pub const SNAPSHOT_HEADER: &str = "# To Do";

/// Error type for snapshot parsing
#[derive(Debug, thiserror::Error)]
pub enum SnapshotParseError {
    #[error("missing '# ' header line")]
    MissingHeader,
    #[error("unrecognized content on line {line}: {text:?}")]
    UnrecognizedLine { line: usize, text: String },
}

/// Parse snapshot text into a list. Strict: any line that is not the
/// header, a bullet, or blank makes the snapshot corrupt.
pub fn parse_snapshot(source: &str) -> Result<TodoList, SnapshotParseError> {
    let mut items = Vec::new();
    let mut saw_header = false;

    for (i, line) in source.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        if !saw_header {
            if line.starts_with("# ") {
                saw_header = true;
                continue;
            }
            return Err(SnapshotParseError::MissingHeader);
        }
        match line.strip_prefix("- ") {
            Some(rest) => items.push(rest.to_string()),
            None => {
                return Err(SnapshotParseError::UnrecognizedLine {
                    line: i + 1,
                    text: line.to_string(),
                });
            }
        }
    }

    if !saw_header {
        return Err(SnapshotParseError::MissingHeader);
    }
    Ok(TodoList::from_items(items))
}

/// Serialize a list to snapshot text.
pub fn serialize_snapshot(list: &TodoList) -> String {
    let mut out = String::new();
    out.push_str(SNAPSHOT_HEADER);
    out.push('\n');
    if !list.is_empty() {
        out.push('\n');
        for item in list.items() {
            out.push_str("- ");
            out.push_str(item);
            out.push('\n');
        }
    }
    out
}
