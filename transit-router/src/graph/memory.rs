//! In-memory graph store.
//!
//! Holds a finished graph (nodes, edges, stops, routes) loaded once at
//! startup. Nearest-node queries go through an R-tree over stop positions;
//! adjacency and pair lookups are hash indexes into the edge list.

use std::collections::{HashMap, HashSet};

use rstar::RTree;
use rstar::primitives::GeomWithData;
use serde::Serialize;
use tracing::{debug, warn};

use super::store::{GraphStore, StoreError};
use crate::domain::{
    Coordinate, Edge, EdgeId, EnrichedEdge, Node, NodeId, Route, RouteId, Stop, StopId,
};

/// Spatial index entry: `[lon, lat]` of the node's stop.
type IndexedNode = GeomWithData<[f64; 2], NodeId>;

/// Counts describing a loaded graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GraphStats {
    pub nodes: usize,
    pub edges: usize,
    pub stops: usize,
    pub routes: usize,
}

/// A read-only transit graph held in memory.
///
/// Shared between requests behind an `Arc`; all queries take `&self`.
#[derive(Debug)]
pub struct GraphSnapshot {
    nodes: HashMap<NodeId, Node>,
    stops: HashMap<StopId, Stop>,
    routes: HashMap<RouteId, Route>,
    edges: Vec<Edge>,
    by_id: HashMap<EdgeId, usize>,
    outgoing: HashMap<NodeId, Vec<usize>>,
    by_pair: HashMap<(NodeId, NodeId), Vec<usize>>,
    spatial: RTree<IndexedNode>,
}

impl GraphSnapshot {
    /// Builds the snapshot and its indexes.
    ///
    /// Nodes whose stop is unknown are kept for traversal but left out of
    /// the spatial index, so they can never be chosen as a start or goal.
    pub fn new(nodes: Vec<Node>, stops: Vec<Stop>, routes: Vec<Route>, edges: Vec<Edge>) -> Self {
        let stops: HashMap<StopId, Stop> = stops.into_iter().map(|s| (s.id.clone(), s)).collect();
        let routes: HashMap<RouteId, Route> =
            routes.into_iter().map(|r| (r.id.clone(), r)).collect();

        let mut indexed = Vec::with_capacity(nodes.len());
        let mut unplaced = 0usize;
        for node in &nodes {
            match stops.get(&node.stop_id) {
                Some(stop) => indexed.push(IndexedNode::new(stop.position.to_xy(), node.id)),
                None => unplaced += 1,
            }
        }
        if unplaced > 0 {
            warn!(unplaced, "nodes reference unknown stops and are not indexed");
        }

        let nodes: HashMap<NodeId, Node> = nodes.into_iter().map(|n| (n.id, n)).collect();

        let mut by_id = HashMap::with_capacity(edges.len());
        let mut outgoing: HashMap<NodeId, Vec<usize>> = HashMap::new();
        let mut by_pair: HashMap<(NodeId, NodeId), Vec<usize>> = HashMap::new();
        for (idx, edge) in edges.iter().enumerate() {
            by_id.insert(edge.id, idx);
            outgoing.entry(edge.from).or_default().push(idx);
            by_pair.entry(edge.endpoints()).or_default().push(idx);
        }

        let spatial = RTree::bulk_load(indexed);

        debug!(
            nodes = nodes.len(),
            edges = edges.len(),
            stops = stops.len(),
            routes = routes.len(),
            "graph snapshot indexed"
        );

        Self {
            nodes,
            stops,
            routes,
            edges,
            by_id,
            outgoing,
            by_pair,
            spatial,
        }
    }

    /// Returns counts of the loaded data.
    pub fn stats(&self) -> GraphStats {
        GraphStats {
            nodes: self.nodes.len(),
            edges: self.edges.len(),
            stops: self.stops.len(),
            routes: self.routes.len(),
        }
    }

    /// Looks up the stop a node stands at.
    pub fn stop_of(&self, node: NodeId) -> Option<&Stop> {
        self.nodes
            .get(&node)
            .and_then(|n| self.stops.get(&n.stop_id))
    }

    fn nearest(&self, point: Coordinate, k: usize) -> Vec<NodeId> {
        self.spatial
            .nearest_neighbor_iter(&point.to_xy())
            .take(k)
            .map(|entry| entry.data)
            .collect()
    }

    fn outgoing_from(&self, from: &[NodeId]) -> Vec<Edge> {
        let unique: HashSet<NodeId> = from.iter().copied().collect();
        unique
            .iter()
            .filter_map(|node| self.outgoing.get(node))
            .flatten()
            .map(|&idx| self.edges[idx].clone())
            .collect()
    }

    fn pairs(&self, froms: &[NodeId], tos: &[NodeId]) -> Result<Vec<Edge>, StoreError> {
        if froms.len() != tos.len() {
            return Err(StoreError::Query(format!(
                "mismatched pair lengths: {} sources, {} targets",
                froms.len(),
                tos.len()
            )));
        }

        let unique: HashSet<(NodeId, NodeId)> =
            froms.iter().copied().zip(tos.iter().copied()).collect();

        Ok(unique
            .iter()
            .filter_map(|pair| self.by_pair.get(pair))
            .flatten()
            .map(|&idx| self.edges[idx].clone())
            .collect())
    }

    fn enrich(&self, ids: &[EdgeId]) -> Vec<EnrichedEdge> {
        ids.iter()
            .filter_map(|id| {
                let Some(edge) = self.by_id.get(id).map(|&idx| &self.edges[idx]) else {
                    warn!(edge = %id, "edge not found during enrichment, dropping");
                    return None;
                };
                let (Some(from_stop), Some(to_stop)) = (self.stop_of(edge.from), self.stop_of(edge.to))
                else {
                    warn!(
                        edge = %id,
                        from = %edge.from,
                        to = %edge.to,
                        "edge endpoint has no known stop, dropping"
                    );
                    return None;
                };
                let route = edge
                    .route_id
                    .as_ref()
                    .and_then(|r| self.routes.get(r))
                    .cloned();

                Some(EnrichedEdge {
                    edge: edge.clone(),
                    from_stop: from_stop.clone(),
                    to_stop: to_stop.clone(),
                    route,
                })
            })
            .collect()
    }
}

impl GraphStore for GraphSnapshot {
    async fn nearest_nodes(&self, point: Coordinate, k: usize) -> Result<Vec<NodeId>, StoreError> {
        Ok(self.nearest(point, k))
    }

    async fn outgoing_edges(&self, from: &[NodeId]) -> Result<Vec<Edge>, StoreError> {
        Ok(self.outgoing_from(from))
    }

    async fn edges_for_pairs(
        &self,
        froms: &[NodeId],
        tos: &[NodeId],
    ) -> Result<Vec<Edge>, StoreError> {
        self.pairs(froms, tos)
    }

    async fn enrich_edges(&self, ids: &[EdgeId]) -> Result<Vec<EnrichedEdge>, StoreError> {
        Ok(self.enrich(ids))
    }

    async fn has_edge(&self, from: NodeId, to: NodeId) -> Result<bool, StoreError> {
        Ok(self.by_pair.contains_key(&(from, to)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{AgencyId, Mode};

    fn stop(id: &str, lat: f64, lon: f64) -> Stop {
        Stop::new(StopId::new(id), format!("Stop {id}"), Coordinate::new(lat, lon).unwrap())
    }

    fn node(id: i64, stop: &str) -> Node {
        Node {
            id: NodeId(id),
            stop_id: StopId::new(stop),
        }
    }

    fn edge(id: i64, from: i64, to: i64, route: Option<&str>) -> Edge {
        let mode = if route.is_some() { Mode::Transit } else { Mode::Walk };
        Edge::new(
            EdgeId(id),
            NodeId(from),
            NodeId(to),
            mode,
            route.and_then(RouteId::parse),
        )
    }

    fn snapshot() -> GraphSnapshot {
        GraphSnapshot::new(
            vec![node(1, "A"), node(2, "B"), node(3, "C"), node(4, "GHOST")],
            vec![stop("A", 14.0, -17.0), stop("B", 14.1, -17.0), stop("C", 14.5, -17.0)],
            vec![Route {
                id: RouteId::parse("R1").unwrap(),
                short_name: Some("1".into()),
                long_name: None,
                agency_id: Some(AgencyId::new("AG")),
            }],
            vec![
                edge(10, 1, 2, Some("R1")),
                edge(11, 2, 3, Some("R1")),
                edge(12, 2, 3, None),
                edge(13, 3, 4, None),
            ],
        )
    }

    #[tokio::test]
    async fn nearest_orders_by_distance() {
        let graph = snapshot();
        let point = Coordinate::new(14.45, -17.0).unwrap();

        let nodes = graph.nearest_nodes(point, 2).await.unwrap();
        assert_eq!(nodes, vec![NodeId(3), NodeId(2)]);

        let all = graph.nearest_nodes(point, 10).await.unwrap();
        assert_eq!(all.len(), 3, "node without a stop must not be indexed");
    }

    #[tokio::test]
    async fn nearest_on_empty_graph() {
        let graph = GraphSnapshot::new(vec![], vec![], vec![], vec![]);
        let point = Coordinate::new(0.0, 0.0).unwrap();
        assert!(graph.nearest_nodes(point, 5).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn outgoing_edges_for_set() {
        let graph = snapshot();
        let mut ids: Vec<EdgeId> = graph
            .outgoing_edges(&[NodeId(2), NodeId(2), NodeId(3)])
            .await
            .unwrap()
            .iter()
            .map(|e| e.id)
            .collect();
        ids.sort();
        assert_eq!(ids, vec![EdgeId(11), EdgeId(12), EdgeId(13)]);

        assert!(graph.outgoing_edges(&[]).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn pairs_return_all_parallel_edges() {
        let graph = snapshot();
        let edges = graph
            .edges_for_pairs(&[NodeId(1), NodeId(2)], &[NodeId(2), NodeId(3)])
            .await
            .unwrap();
        assert_eq!(edges.len(), 3);
    }

    #[tokio::test]
    async fn pairs_reject_mismatched_lengths() {
        let graph = snapshot();
        let result = graph.edges_for_pairs(&[NodeId(1)], &[]).await;
        assert!(matches!(result, Err(StoreError::Query(_))));
    }

    #[tokio::test]
    async fn enrich_preserves_order_and_drops_inconsistent() {
        let graph = snapshot();
        let enriched = graph
            .enrich_edges(&[EdgeId(11), EdgeId(13), EdgeId(99), EdgeId(10)])
            .await
            .unwrap();

        let ids: Vec<EdgeId> = enriched.iter().map(|e| e.edge.id).collect();
        assert_eq!(ids, vec![EdgeId(11), EdgeId(10)]);

        assert_eq!(enriched[0].from_stop.id.as_str(), "B");
        assert_eq!(enriched[0].to_stop.id.as_str(), "C");
        let route = enriched[0].route.as_ref().unwrap();
        assert_eq!(route.short_name.as_deref(), Some("1"));
    }

    #[tokio::test]
    async fn has_edge_probe() {
        let graph = snapshot();
        assert!(graph.has_edge(NodeId(1), NodeId(2)).await.unwrap());
        assert!(!graph.has_edge(NodeId(2), NodeId(1)).await.unwrap());
    }

    #[test]
    fn stats_counts() {
        let stats = snapshot().stats();
        assert_eq!(
            stats,
            GraphStats {
                nodes: 4,
                edges: 4,
                stops: 3,
                routes: 1,
            }
        );
    }
}
