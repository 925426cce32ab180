//! Graph edge types.
//!
//! An `Edge` is a directed arc between two nodes. Edges are produced by the
//! graph build and are never mutated by the router.

use std::fmt;
use std::str::FromStr;

use chrono::Duration;

use super::{DomainError, EdgeId, NodeId, Route, RouteId, Stop};

/// How an edge is travelled.
///
/// The graph tables carry the mode as free text. `walk` and `transit` are
/// recognised; any other name (`transfer`, `bus`, ...) is kept verbatim so
/// legs still split wherever the name changes.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Mode {
    /// On foot, between stops or between nodes of the same stop
    Walk,
    /// On board a vehicle of a route
    Transit,
    /// Any other mode name, as written in the graph
    Other(String),
}

impl Mode {
    /// Returns the name used in the graph tables and responses.
    pub fn as_str(&self) -> &str {
        match self {
            Mode::Walk => "walk",
            Mode::Transit => "transit",
            Mode::Other(name) => name,
        }
    }
}

impl FromStr for Mode {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        if name.is_empty() {
            return Err(DomainError::BlankMode);
        }
        Ok(match name.to_ascii_lowercase().as_str() {
            "walk" => Mode::Walk,
            "transit" => Mode::Transit,
            _ => Mode::Other(name.to_string()),
        })
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Scheduled time as seconds past midnight of the service day.
///
/// Values past 24:00:00 are legal (trips running after midnight).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ScheduleOffset(pub u32);

impl ScheduleOffset {
    /// Returns the offset as a duration since midnight.
    pub fn as_duration(&self) -> Duration {
        Duration::seconds(i64::from(self.0))
    }

    /// Signed duration from `earlier` to `self`.
    pub fn signed_duration_since(&self, earlier: ScheduleOffset) -> Duration {
        self.as_duration() - earlier.as_duration()
    }
}

impl fmt::Display for ScheduleOffset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let secs = self.0;
        write!(
            f,
            "{:02}:{:02}:{:02}",
            secs / 3600,
            (secs % 3600) / 60,
            secs % 60
        )
    }
}

/// A directed edge of the transit graph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edge {
    pub id: EdgeId,
    pub from: NodeId,
    pub to: NodeId,
    pub mode: Mode,
    /// `None` for walk and transfer edges
    pub route_id: Option<RouteId>,
    pub trip_id: Option<String>,
    pub departure: Option<ScheduleOffset>,
    pub arrival: Option<ScheduleOffset>,
}

impl Edge {
    /// Creates an edge without schedule information.
    pub fn new(
        id: EdgeId,
        from: NodeId,
        to: NodeId,
        mode: Mode,
        route_id: Option<RouteId>,
    ) -> Self {
        Self {
            id,
            from,
            to,
            mode,
            route_id,
            trip_id: None,
            departure: None,
            arrival: None,
        }
    }

    /// Returns the `(from, to)` pair this edge connects.
    pub fn endpoints(&self) -> (NodeId, NodeId) {
        (self.from, self.to)
    }
}

/// An edge joined with the reference data needed for display.
#[derive(Debug, Clone, PartialEq)]
pub struct EnrichedEdge {
    pub edge: Edge,
    pub from_stop: Stop,
    pub to_stop: Stop,
    /// Route metadata, when the edge has a route and the route is known
    pub route: Option<Route>,
}
