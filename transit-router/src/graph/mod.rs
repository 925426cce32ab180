//! Transit graph access.
//!
//! The graph itself is built offline; this module exposes a read-only
//! query interface over it and an in-memory implementation loaded from
//! a snapshot file.

mod memory;
#[cfg(test)]
pub(crate) mod mock;
mod snapshot;
mod store;

pub use memory::{GraphSnapshot, GraphStats};
pub use snapshot::{EdgeRecord, NodeRecord, RouteRecord, SnapshotError, SnapshotFile, StopRecord};
pub use store::{GraphStore, StoreError};
