//! Loading and saving the snapshot file.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use crate::model::list::TodoList;
use crate::parse::{parse_snapshot, serialize_snapshot};

/// Error type for snapshot I/O
#[derive(Debug, thiserror::Error)]
pub enum SnapshotError {
    /// The file exists but is not a readable snapshot. Recoverable: callers
    /// fall back to an empty list and report the failure.
    #[error("corrupt snapshot {path}: {reason}")]
    Corrupt { path: PathBuf, reason: String },
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Load the list from `path`.
///
/// A missing file is not an error — it is simply an empty list (first run,
/// or the user never saved). A present-but-unreadable file is
/// [`SnapshotError::Corrupt`].
pub fn load_list(path: &Path) -> Result<TodoList, SnapshotError> {
    let bytes = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(TodoList::new()),
        Err(e) => return Err(SnapshotError::Io(e)),
    };
    let text = String::from_utf8(bytes).map_err(|_| SnapshotError::Corrupt {
        path: path.to_path_buf(),
        reason: "not valid UTF-8".to_string(),
    })?;
    parse_snapshot(&text).map_err(|e| SnapshotError::Corrupt {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })
}

/// Save the list to `path`, replacing any previous snapshot.
///
/// The write is atomic (temp file in the same directory, then rename): a
/// crash or full disk mid-write leaves the previous snapshot in place
/// rather than a truncated one. On failure the in-memory list is untouched.
pub fn save_list(path: &Path, list: &TodoList) -> Result<(), SnapshotError> {
    let content = serialize_snapshot(list);
    atomic_write(path, content.as_bytes())?;
    Ok(())
}

/// Load the list, applying the recoverable-corruption policy: a corrupt
/// snapshot is appended to the recovery log and replaced by an empty list
/// instead of aborting startup. Returns the list plus a user-facing warning
/// when that fallback happened. Hard I/O errors still propagate.
pub fn load_or_recover(path: &Path) -> Result<(TodoList, Option<String>), SnapshotError> {
    match load_list(path) {
        Ok(list) => Ok((list, None)),
        Err(err @ SnapshotError::Corrupt { .. }) => {
            let body = fs::read_to_string(path).unwrap_or_default();
            crate::io::recovery::log_recovery(
                path,
                crate::io::recovery::RecoveryEntry::new(
                    crate::io::recovery::RecoveryCategory::CorruptSnapshot,
                    err.to_string(),
                    body,
                ),
            );
            Ok((
                TodoList::new(),
                Some(format!("{err}; starting with an empty list")),
            ))
        }
        Err(e) => Err(e),
    }
}

fn atomic_write(path: &Path, content: &[u8]) -> std::io::Result<()> {
    let dir = path.parent().unwrap_or(Path::new("."));
    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(content)?;
    tmp.flush()?;
    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}
