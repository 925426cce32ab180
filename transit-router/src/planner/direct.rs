//! Direct-route search.
//!
//! A direct route is either a single edge between a start and a goal
//! candidate, or a short path found by a shallow breadth-first search.

use std::collections::HashSet;

use super::bfs::{SearchOutcome, dedup, find_path};
use super::config::SearchBounds;
use super::observer::{SearchObserver, StopReason};
use crate::domain::{NodeId, Path};
use crate::graph::{GraphStore, StoreError};

/// Probe every `(start, goal)` pair for a connecting edge, then fall back
/// to [`find_path`] with `bounds` (normally [`SearchBounds::direct`]).
///
/// Pairs are probed starts-outer, goals-inner, in candidate order; the
/// first pair with an edge wins.
pub async fn find_direct_path<S, O>(
    store: &S,
    starts: &[NodeId],
    goals: &[NodeId],
    bounds: &SearchBounds,
    observer: &O,
) -> Result<SearchOutcome, StoreError>
where
    S: GraphStore,
    O: SearchObserver + ?Sized,
{
    if starts.is_empty() || goals.is_empty() {
        observer.finished(StopReason::NoCandidates, 0, 0, None);
        return Ok(SearchOutcome::not_found(StopReason::NoCandidates, 0, 0));
    }

    let starts = dedup(starts.iter().copied());
    let goals = dedup(goals.iter().copied());

    for &start in &starts {
        for &goal in &goals {
            if store.has_edge(start, goal).await? {
                observer.finished(StopReason::DirectEdge, 1, 2, Some(goal));
                let path = Path::from_nodes(vec![start, goal]);
                return Ok(SearchOutcome::found(path, StopReason::DirectEdge, 1, 2));
            }
        }
    }

    let goal_set: HashSet<NodeId> = goals.iter().copied().collect();
    find_path(store, &starts, &goal_set, bounds, observer).await
}
