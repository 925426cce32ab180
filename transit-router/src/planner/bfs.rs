//! Bounded multi-source, multi-target breadth-first search.
//!
//! Finds a fewest-hop path from any start node to any goal node. Edge
//! attributes (mode, schedule) are ignored: every edge costs one hop.
//! The search expands one whole layer per store query, so a path of `h`
//! hops costs `h` round trips to the store.

use std::collections::{HashMap, HashSet};

use super::config::SearchBounds;
use super::observer::{SearchObserver, StopReason};
use crate::domain::{NodeId, Path};
use crate::graph::{GraphStore, StoreError};

/// Result of a path search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchOutcome {
    /// The path found, if any.
    pub path: Option<Path>,

    /// Why the search stopped.
    pub reason: StopReason,

    /// Number of layers expanded.
    pub depth: usize,

    /// Number of distinct nodes visited.
    pub visited: usize,
}

impl SearchOutcome {
    pub(crate) fn found(path: Path, reason: StopReason, depth: usize, visited: usize) -> Self {
        Self {
            path: Some(path),
            reason,
            depth,
            visited,
        }
    }

    pub(crate) fn not_found(reason: StopReason, depth: usize, visited: usize) -> Self {
        Self {
            path: None,
            reason,
            depth,
            visited,
        }
    }

    /// Number of hops on the path found, if any.
    pub fn hops(&self) -> Option<usize> {
        self.path.as_ref().map(Path::hop_count)
    }
}

/// Find a fewest-hop path from any of `starts` to any of `goals`.
///
/// Before each layer is expanded the frontier is scanned in order and the
/// first goal found wins. When a node is reachable from several frontier
/// nodes, the first edge processed sets its parent; with
/// `bounds.stable_tie_break` that order is fixed, otherwise it follows the
/// store.
///
/// Empty `starts` or `goals` return a not-found outcome without querying
/// the store. Exhausting any bound also returns not-found; only store
/// failures are errors.
pub async fn find_path<S, O>(
    store: &S,
    starts: &[NodeId],
    goals: &HashSet<NodeId>,
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

    let mut frontier = dedup(starts.iter().copied());
    let mut visited: HashSet<NodeId> = frontier.iter().copied().collect();
    let mut parent: HashMap<NodeId, NodeId> = HashMap::new();
    let mut depth = 0;

    while !frontier.is_empty() && visited.len() < bounds.max_visited && depth < bounds.max_depth {
        if let Some(&goal) = frontier.iter().find(|node| goals.contains(node)) {
            let path = reconstruct(goal, &parent);
            observer.finished(StopReason::GoalReached, depth, visited.len(), Some(goal));
            return Ok(SearchOutcome::found(
                path,
                StopReason::GoalReached,
                depth,
                visited.len(),
            ));
        }

        let mut edges = store.outgoing_edges(&frontier).await?;

        if bounds.stable_tie_break {
            let position: HashMap<NodeId, usize> =
                frontier.iter().enumerate().map(|(i, n)| (*n, i)).collect();
            edges.sort_by_key(|e| (position.get(&e.from).copied().unwrap_or(usize::MAX), e.to));
        }

        let mut next = Vec::new();
        for edge in &edges {
            if visited.insert(edge.to) {
                parent.entry(edge.to).or_insert(edge.from);
                next.push(edge.to);
            }
        }

        let mut next = dedup(next);
        next.truncate(bounds.max_frontier);

        observer.layer_expanded(depth, frontier.len(), edges.len(), next.len());

        frontier = next;
        depth += 1;
    }

    let reason = if frontier.is_empty() {
        StopReason::FrontierExhausted
    } else if visited.len() >= bounds.max_visited {
        StopReason::VisitedBudget
    } else {
        StopReason::DepthBudget
    };

    observer.finished(reason, depth, visited.len(), None);
    Ok(SearchOutcome::not_found(reason, depth, visited.len()))
}

/// Deduplicate, keeping the first occurrence of each node.
pub(crate) fn dedup(nodes: impl IntoIterator<Item = NodeId>) -> Vec<NodeId> {
    let mut seen = HashSet::new();
    nodes.into_iter().filter(|n| seen.insert(*n)).collect()
}

/// Follow parent pointers from `goal` back to a start node.
fn reconstruct(goal: NodeId, parent: &HashMap<NodeId, NodeId>) -> Path {
    let mut nodes = vec![goal];
    let mut current = goal;
    while let Some(&prev) = parent.get(&current) {
        nodes.push(prev);
        current = prev;
    }
    nodes.reverse();
    Path::from_nodes(nodes)
}
