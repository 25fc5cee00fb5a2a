//! Storage layer — persisting store snapshots between runs.
//!
//! The in-memory [`crate::store::Store`] owns no durability of its own.
//! Front ends load a snapshot at start-up, mutate the store, and save the
//! snapshot back.
//!
//! # Directory layout
//!
//! ```text
//! ~/.pdr/
//! └── records.json
//! ```
//!
//! # Modules
//!
//! - [`snapshot_store`] — versioned, checksummed JSON snapshot file.

pub mod snapshot_store;

pub use snapshot_store::{Snapshot, SnapshotStore, SNAPSHOT_FILE_NAME};
