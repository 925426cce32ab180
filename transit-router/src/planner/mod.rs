//! Path finding over the transit graph.
//!
//! This module implements the fewest-hop search that connects the nodes
//! resolved near the origin to the nodes resolved near the destination.
//!
//! Two modes exist: a general search with generous bounds, and a direct
//! search that probes for a single connecting edge before trying a very
//! shallow breadth-first search.

mod bfs;
mod config;
mod direct;
mod observer;

pub use bfs::{SearchOutcome, find_path};
pub use config::SearchBounds;
pub use direct::find_direct_path;
pub use observer::{NoopObserver, SearchObserver, StopReason, TracingObserver};
