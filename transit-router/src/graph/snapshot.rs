//! Graph snapshot file format.
//!
//! The graph build job exports its finished tables as one JSON document.
//! Records here mirror the table columns; [`GraphSnapshot::from_json`]
//! validates them and converts them to domain types.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::info;

use super::memory::GraphSnapshot;
use crate::domain::{
    AgencyId, Coordinate, DomainError, Edge, EdgeId, Mode, Node, NodeId, Route, RouteId,
    ScheduleOffset, Stop, StopId,
};

/// Errors from loading a graph snapshot.
#[derive(Debug, thiserror::Error)]
pub enum SnapshotError {
    /// The file could not be read
    #[error("failed to read graph snapshot {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The document is not valid JSON for the expected shape
    #[error("graph snapshot JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// A record failed validation
    #[error("invalid {table} record {id}: {source}")]
    Record {
        table: &'static str,
        id: String,
        #[source]
        source: DomainError,
    },

    /// Two records share an identifier
    #[error("duplicate {table} id {id}")]
    Duplicate { table: &'static str, id: String },
}

/// Top-level snapshot document.
#[derive(Debug, Deserialize)]
pub struct SnapshotFile {
    #[serde(default)]
    pub stops: Vec<StopRecord>,
    #[serde(default)]
    pub routes: Vec<RouteRecord>,
    #[serde(default)]
    pub nodes: Vec<NodeRecord>,
    #[serde(default)]
    pub edges: Vec<EdgeRecord>,
}

/// Row of the stops table.
#[derive(Debug, Deserialize)]
pub struct StopRecord {
    pub stop_id: String,
    pub stop_name: String,
    pub stop_lat: f64,
    pub stop_lon: f64,
}

/// Row of the routes table.
#[derive(Debug, Deserialize)]
pub struct RouteRecord {
    pub route_id: String,
    pub route_short_name: Option<String>,
    pub route_long_name: Option<String>,
    pub agency_id: Option<String>,
}

/// Row of the node table.
#[derive(Debug, Deserialize)]
pub struct NodeRecord {
    pub id: i64,
    pub stop_id: String,
}

/// Row of the edges table.
#[derive(Debug, Deserialize)]
pub struct EdgeRecord {
    pub id: i64,
    pub from_node: i64,
    pub to_node: i64,
    pub mode: String,
    pub route_id: Option<String>,
    #[serde(alias = "line_trip_id")]
    pub trip_id: Option<String>,
    pub dep_time_s: Option<u32>,
    pub arr_time_s: Option<u32>,
}

impl GraphSnapshot {
    /// Reads and indexes a snapshot file.
    pub async fn load(path: impl AsRef<Path>) -> Result<Self, SnapshotError> {
        let path = path.as_ref();
        let json = tokio::fs::read_to_string(path)
            .await
            .map_err(|source| SnapshotError::Io {
                path: path.to_path_buf(),
                source,
            })?;

        let snapshot = Self::from_json(&json)?;
        let stats = snapshot.stats();
        info!(
            path = %path.display(),
            nodes = stats.nodes,
            edges = stats.edges,
            stops = stats.stops,
            routes = stats.routes,
            "loaded graph snapshot"
        );
        Ok(snapshot)
    }

    /// Parses and indexes a snapshot document.
    pub fn from_json(json: &str) -> Result<Self, SnapshotError> {
        let file: SnapshotFile = serde_json::from_str(json)?;
        Self::from_file(file)
    }

    /// Validates parsed records and builds the snapshot.
    pub fn from_file(file: SnapshotFile) -> Result<Self, SnapshotError> {
        let stops = convert_stops(file.stops)?;
        let routes = convert_routes(file.routes)?;
        let nodes = convert_nodes(file.nodes)?;
        let edges = convert_edges(file.edges)?;
        Ok(Self::new(nodes, stops, routes, edges))
    }
}

fn convert_stops(records: Vec<StopRecord>) -> Result<Vec<Stop>, SnapshotError> {
    let mut seen = HashSet::new();
    records
        .into_iter()
        .map(|r| {
            if !seen.insert(r.stop_id.clone()) {
                return Err(SnapshotError::Duplicate {
                    table: "stop",
                    id: r.stop_id,
                });
            }
            let position =
                Coordinate::new(r.stop_lat, r.stop_lon).map_err(|source| SnapshotError::Record {
                    table: "stop",
                    id: r.stop_id.clone(),
                    source,
                })?;
            Ok(Stop::new(StopId::new(r.stop_id), r.stop_name, position))
        })
        .collect()
}

fn convert_routes(records: Vec<RouteRecord>) -> Result<Vec<Route>, SnapshotError> {
    let mut seen = HashSet::new();
    let mut routes = Vec::with_capacity(records.len());
    for r in records {
        // Blank ids cannot be referenced by any edge.
        let Some(id) = RouteId::parse(&r.route_id) else {
            continue;
        };
        if !seen.insert(id.clone()) {
            return Err(SnapshotError::Duplicate {
                table: "route",
                id: id.to_string(),
            });
        }
        routes.push(Route {
            id,
            short_name: r.route_short_name,
            long_name: r.route_long_name,
            agency_id: r.agency_id.filter(|a| !a.is_empty()).map(AgencyId::new),
        });
    }
    Ok(routes)
}

fn convert_nodes(records: Vec<NodeRecord>) -> Result<Vec<Node>, SnapshotError> {
    let mut seen = HashSet::new();
    records
        .into_iter()
        .map(|r| {
            if !seen.insert(r.id) {
                return Err(SnapshotError::Duplicate {
                    table: "node",
                    id: r.id.to_string(),
                });
            }
            Ok(Node {
                id: NodeId(r.id),
                stop_id: StopId::new(r.stop_id),
            })
        })
        .collect()
}

fn convert_edges(records: Vec<EdgeRecord>) -> Result<Vec<Edge>, SnapshotError> {
    let mut seen = HashSet::new();
    records
        .into_iter()
        .map(|r| {
            if !seen.insert(r.id) {
                return Err(SnapshotError::Duplicate {
                    table: "edge",
                    id: r.id.to_string(),
                });
            }
            let mode: Mode = r.mode.parse().map_err(|source| SnapshotError::Record {
                table: "edge",
                id: r.id.to_string(),
                source,
            })?;
            Ok(Edge {
                id: EdgeId(r.id),
                from: NodeId(r.from_node),
                to: NodeId(r.to_node),
                mode,
                route_id: RouteId::parse_opt(r.route_id.as_deref()),
                trip_id: r.trip_id.filter(|t| !t.is_empty()),
                departure: r.dep_time_s.map(ScheduleOffset),
                arrival: r.arr_time_s.map(ScheduleOffset),
            })
        })
        .collect()
}
