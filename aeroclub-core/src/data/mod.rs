//! Data access: the source trait, JSON snapshots and the demo club.

pub mod sample;
pub mod snapshot;
pub mod source;

pub use sample::demo_snapshot;
pub use snapshot::{Snapshot, SnapshotFile, SnapshotIssue};
pub use source::{DataError, ScheduleSource};
