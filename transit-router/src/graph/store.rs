//! Read interface over the persisted transit graph.
//!
//! The path finder and itinerary builder only talk to the graph through
//! [`GraphStore`], so they can run against the in-memory snapshot in
//! production and against small fakes in tests.

use std::future::Future;

use crate::domain::{Coordinate, Edge, EdgeId, EnrichedEdge, NodeId};

/// Errors from the graph store.
///
/// Store errors are fatal for the request that hit them and are never
/// retried inside the router.
#[derive(Debug, Clone, thiserror::Error)]
pub enum StoreError {
    /// The backing store cannot be reached
    #[error("graph store unavailable: {0}")]
    Unavailable(String),

    /// A query was rejected or failed
    #[error("graph query failed: {0}")]
    Query(String),
}

/// Read-only access to nodes, edges and reference data.
///
/// Implementations must allow concurrent readers; the router never writes.
pub trait GraphStore: Send + Sync {
    /// Up to `k` nodes ordered by ascending distance from `point`.
    ///
    /// Distance is measured to the stop each node stands at. Returns an
    /// empty list when the graph has no nodes.
    fn nearest_nodes(
        &self,
        point: Coordinate,
        k: usize,
    ) -> impl Future<Output = Result<Vec<NodeId>, StoreError>> + Send;

    /// Every edge whose source is in `from`. No ordering guarantee.
    fn outgoing_edges(
        &self,
        from: &[NodeId],
    ) -> impl Future<Output = Result<Vec<Edge>, StoreError>> + Send;

    /// Edges matching the pairs `(froms[i], tos[i])`. No ordering guarantee.
    fn edges_for_pairs(
        &self,
        froms: &[NodeId],
        tos: &[NodeId],
    ) -> impl Future<Output = Result<Vec<Edge>, StoreError>> + Send;

    /// Joins edges with their stops and routes, in the order of `ids`.
    ///
    /// Edges whose nodes or stops cannot be resolved are left out.
    fn enrich_edges(
        &self,
        ids: &[EdgeId],
    ) -> impl Future<Output = Result<Vec<EnrichedEdge>, StoreError>> + Send;

    /// Whether at least one edge goes straight from `from` to `to`.
    fn has_edge(
        &self,
        from: NodeId,
        to: NodeId,
    ) -> impl Future<Output = Result<bool, StoreError>> + Send;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = StoreError::Unavailable("connection refused".into());
        assert_eq!(err.to_string(), "graph store unavailable: connection refused");

        let err = StoreError::Query("mismatched pair lengths".into());
        assert_eq!(err.to_string(), "graph query failed: mismatched pair lengths");
    }
}
