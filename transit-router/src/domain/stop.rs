//! Reference data joined into itineraries for display.

use super::{AgencyId, Coordinate, NodeId, RouteId, StopId};

/// A graph node and the stop it stands at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    pub id: NodeId,
    pub stop_id: StopId,
}

/// A physical stop.
#[derive(Debug, Clone, PartialEq)]
pub struct Stop {
    pub id: StopId,
    pub name: String,
    pub position: Coordinate,
}

impl Stop {
    pub fn new(id: StopId, name: impl Into<String>, position: Coordinate) -> Self {
        Self {
            id,
            name: name.into(),
            position,
        }
    }
}

/// A transit route and its display names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    pub id: RouteId,
    pub short_name: Option<String>,
    pub long_name: Option<String>,
    pub agency_id: Option<AgencyId>,
}
