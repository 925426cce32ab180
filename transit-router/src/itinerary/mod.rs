//! Itinerary building.
//!
//! Turns a node path into the legs shown to a rider:
//!
//! 1. **Materialize** the path's node pairs into graph edges.
//! 2. **Enrich** the edges with stop and route metadata in one batch.
//! 3. **Aggregate** consecutive edges of the same `(mode, route)` into legs.
//! 4. **Merge** same-route legs that a walk split apart.

mod aggregate;
mod materialize;
mod merge;

pub use aggregate::aggregate_legs;
pub use materialize::materialize_edges;
pub use merge::merge_split_legs;

use tracing::{debug, warn};

use crate::domain::{Edge, EdgeId, Itinerary, Path};
use crate::graph::{GraphStore, StoreError};

/// Builds the rider-facing itinerary for `path`.
pub async fn build_itinerary<S: GraphStore>(store: &S, path: &Path) -> Result<Itinerary, StoreError> {
    let edges = materialize_edges(store, path).await?;
    if edges.len() < path.hop_count() {
        warn!(
            hops = path.hop_count(),
            edges = edges.len(),
            "path has node pairs with no edge"
        );
    }
    itinerary_from_edges(store, &edges).await
}

/// Builds an itinerary from edges already in travel order.
pub async fn itinerary_from_edges<S: GraphStore>(
    store: &S,
    edges: &[Edge],
) -> Result<Itinerary, StoreError> {
    if edges.is_empty() {
        return Ok(Itinerary::empty());
    }

    let ids: Vec<EdgeId> = edges.iter().map(|e| e.id).collect();
    let enriched = store.enrich_edges(&ids).await?;
    if enriched.len() < ids.len() {
        warn!(
            requested = ids.len(),
            enriched = enriched.len(),
            "edges dropped during enrichment"
        );
    }

    let legs = aggregate_legs(&enriched);
    let raw = legs.len();
    let legs = merge_split_legs(legs);
    debug!(edges = enriched.len(), raw_legs = raw, legs = legs.len(), "itinerary built");

    Ok(Itinerary::new(legs))
}
