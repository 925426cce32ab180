//! Mock graph store for tests.
//!
//! Wraps an in-memory snapshot with call counting, failure injection and
//! reversible edge ordering, so callers can be checked against a store
//! that makes no ordering promises.

use std::sync::atomic::{AtomicUsize, Ordering};

use super::memory::GraphSnapshot;
use super::store::{GraphStore, StoreError};
use crate::domain::{
    AgencyId, Coordinate, Edge, EdgeId, EnrichedEdge, Mode, Node, NodeId, Route, RouteId, Stop,
    StopId,
};

/// Fluent builder for small test graphs.
#[derive(Debug, Default)]
pub struct GraphBuilder {
    nodes: Vec<Node>,
    stops: Vec<Stop>,
    routes: Vec<Route>,
    edges: Vec<Edge>,
}

impl GraphBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a stop named after its id.
    pub fn stop(mut self, id: &str, lat: f64, lon: f64) -> Self {
        let position = Coordinate::new(lat, lon).expect("valid test coordinate");
        self.stops.push(Stop::new(StopId::new(id), id, position));
        self
    }

    pub fn node(mut self, id: i64, stop: &str) -> Self {
        self.nodes.push(Node {
            id: NodeId(id),
            stop_id: StopId::new(stop),
        });
        self
    }

    pub fn route(mut self, id: &str, short_name: &str, agency: &str) -> Self {
        self.routes.push(Route {
            id: RouteId::parse(id).expect("non-blank test route"),
            short_name: Some(short_name.to_string()),
            long_name: None,
            agency_id: Some(AgencyId::new(agency)),
        });
        self
    }

    /// Adds a transit edge on `route`.
    pub fn ride(mut self, id: i64, from: i64, to: i64, route: &str) -> Self {
        self.edges.push(Edge::new(
            EdgeId(id),
            NodeId(from),
            NodeId(to),
            Mode::Transit,
            RouteId::parse(route),
        ));
        self
    }

    /// Adds a walk edge.
    pub fn walk(mut self, id: i64, from: i64, to: i64) -> Self {
        self.edges
            .push(Edge::new(EdgeId(id), NodeId(from), NodeId(to), Mode::Walk, None));
        self
    }

    pub fn build(self) -> GraphSnapshot {
        GraphSnapshot::new(self.nodes, self.stops, self.routes, self.edges)
    }
}

/// Test store around a [`GraphSnapshot`].
pub struct MockGraph {
    inner: GraphSnapshot,
    calls: AtomicUsize,
    fail: bool,
    reverse: bool,
}

impl MockGraph {
    pub fn new(inner: GraphSnapshot) -> Self {
        Self {
            inner,
            calls: AtomicUsize::new(0),
            fail: false,
            reverse: false,
        }
    }

    /// A store whose every query fails as unavailable.
    pub fn failing(inner: GraphSnapshot) -> Self {
        Self {
            fail: true,
            ..Self::new(inner)
        }
    }

    /// A store returning edge lists sorted by descending id.
    pub fn reversed(inner: GraphSnapshot) -> Self {
        Self {
            reverse: true,
            ..Self::new(inner)
        }
    }

    /// A store returning edge lists sorted by ascending id.
    pub fn ordered(inner: GraphSnapshot) -> Self {
        Self::new(inner)
    }

    /// Number of queries made so far.
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn record(&self) -> Result<(), StoreError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            return Err(StoreError::Unavailable("mock store offline".into()));
        }
        Ok(())
    }

    fn order(&self, mut edges: Vec<Edge>) -> Vec<Edge> {
        edges.sort_by_key(|e| e.id);
        if self.reverse {
            edges.reverse();
        }
        edges
    }
}

impl GraphStore for MockGraph {
    async fn nearest_nodes(&self, point: Coordinate, k: usize) -> Result<Vec<NodeId>, StoreError> {
        self.record()?;
        self.inner.nearest_nodes(point, k).await
    }

    async fn outgoing_edges(&self, from: &[NodeId]) -> Result<Vec<Edge>, StoreError> {
        self.record()?;
        let edges = self.inner.outgoing_edges(from).await?;
        Ok(self.order(edges))
    }

    async fn edges_for_pairs(
        &self,
        froms: &[NodeId],
        tos: &[NodeId],
    ) -> Result<Vec<Edge>, StoreError> {
        self.record()?;
        let edges = self.inner.edges_for_pairs(froms, tos).await?;
        Ok(self.order(edges))
    }

    async fn enrich_edges(&self, ids: &[EdgeId]) -> Result<Vec<EnrichedEdge>, StoreError> {
        self.record()?;
        self.inner.enrich_edges(ids).await
    }

    async fn has_edge(&self, from: NodeId, to: NodeId) -> Result<bool, StoreError> {
        self.record()?;
        self.inner.has_edge(from, to).await
    }
}
