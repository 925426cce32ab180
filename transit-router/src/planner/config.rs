//! Search bounds for the path finder.

/// Resource bounds for one breadth-first search.
///
/// The search gives up with "no path" as soon as any bound is hit, which
/// caps the work a single request can do on a large graph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchBounds {
    /// Stop once this many nodes have been visited.
    pub max_visited: usize,

    /// Stop after expanding this many layers.
    pub max_depth: usize,

    /// Maximum number of nodes kept in the next frontier.
    /// Nodes beyond the cap stay visited but are never expanded.
    pub max_frontier: usize,

    /// Sort each layer's edges by (source position in frontier, target id)
    /// before assigning parents, so ties resolve the same way whatever
    /// order the store returns edges in.
    pub stable_tie_break: bool,
}

impl SearchBounds {
    /// Create bounds with the given limits and stable tie-breaking.
    pub fn new(max_visited: usize, max_depth: usize, max_frontier: usize) -> Self {
        Self {
            max_visited,
            max_depth,
            max_frontier,
            stable_tie_break: true,
        }
    }

    /// Bounds for a full route search.
    pub fn general() -> Self {
        Self::new(200_000, 2_000, 200_000)
    }

    /// Shallow bounds for the direct-route fallback search.
    pub fn direct() -> Self {
        Self::new(10_000, 5, 10_000)
    }

    /// Returns these bounds with tie-breaking left to store order.
    pub fn with_store_order(mut self) -> Self {
        self.stable_tie_break = false;
        self
    }
}

impl Default for SearchBounds {
    fn default() -> Self {
        Self::general()
    }
}
