pub mod snapshot;

pub use snapshot::{SnapshotParseError, parse_snapshot, serialize_snapshot};
