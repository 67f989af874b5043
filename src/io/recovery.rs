//! Append-only recovery log.
//!
//! Soft failures that the tool recovers from — a corrupt snapshot replaced
//! by an empty list, a write that did not land — are recorded as JSON lines
//! in a log next to the snapshot, so the user can find out what happened
//! (and, for a corrupt snapshot, what the raw content was). Logging is
//! best-effort and never fails the caller.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Name of the log file, placed in the snapshot's directory.
pub const RECOVERY_LOG: &str = ".lineup-recovery.jsonl";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum RecoveryCategory {
    CorruptSnapshot,
    WriteFailed,
}

#[derive(Debug, Serialize)]
pub struct RecoveryEntry {
    pub timestamp: DateTime<Utc>,
    pub category: RecoveryCategory,
    pub description: String,
    /// Raw content related to the failure (e.g. the corrupt snapshot text)
    pub body: String,
}

impl RecoveryEntry {
    pub fn new(category: RecoveryCategory, description: String, body: String) -> Self {
        RecoveryEntry {
            timestamp: Utc::now(),
            category,
            description,
            body,
        }
    }
}

/// Append an entry to the recovery log beside `snapshot_path`.
pub fn log_recovery(snapshot_path: &Path, entry: RecoveryEntry) {
    let dir = snapshot_path.parent().unwrap_or(Path::new("."));
    let log_path = dir.join(RECOVERY_LOG);

    let Ok(line) = serde_json::to_string(&entry) else {
        return;
    };
    let Ok(mut file) = OpenOptions::new().create(true).append(true).open(&log_path) else {
        return;
    };
    let _ = writeln!(file, "{line}");
}
