//! Search progress reporting.
//!
//! The path finder reports what it does through a [`SearchObserver`]
//! instead of logging directly, so tests can inspect the search and
//! deployments can route events wherever they like.

use tracing::{debug, trace};

use crate::domain::NodeId;

/// Why a search stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    /// A goal node was reached by breadth-first search
    GoalReached,
    /// The direct-edge probe found a single connecting edge
    DirectEdge,
    /// The start or goal set was empty
    NoCandidates,
    /// No unvisited nodes were left to expand
    FrontierExhausted,
    /// The visited-node budget ran out
    VisitedBudget,
    /// The depth budget ran out
    DepthBudget,
}

impl StopReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            StopReason::GoalReached => "goal_reached",
            StopReason::DirectEdge => "direct_edge",
            StopReason::NoCandidates => "no_candidates",
            StopReason::FrontierExhausted => "frontier_exhausted",
            StopReason::VisitedBudget => "visited_budget",
            StopReason::DepthBudget => "depth_budget",
        }
    }
}

/// Receives search events. All methods default to doing nothing.
pub trait SearchObserver: Send + Sync {
    /// A layer was expanded into `next_frontier` new nodes.
    fn layer_expanded(&self, _depth: usize, _frontier: usize, _edges: usize, _next_frontier: usize) {}

    /// The search finished.
    fn finished(&self, _reason: StopReason, _depth: usize, _visited: usize, _goal: Option<NodeId>) {}
}

/// Observer that emits `tracing` events.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

impl SearchObserver for TracingObserver {
    fn layer_expanded(&self, depth: usize, frontier: usize, edges: usize, next_frontier: usize) {
        trace!(depth, frontier, edges, next_frontier, "BFS layer expanded");
    }

    fn finished(&self, reason: StopReason, depth: usize, visited: usize, goal: Option<NodeId>) {
        debug!(
            reason = reason.as_str(),
            depth,
            visited,
            goal = goal.map(|g| g.0),
            "path search finished"
        );
    }
}

/// Observer that ignores every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl SearchObserver for NoopObserver {}
