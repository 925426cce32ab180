//! Itinerary leg type.
//!
//! A `Leg` collapses a contiguous run of edges that share a travel mode and
//! route into one segment a rider can follow. Legs are built per request and
//! never persisted.

use chrono::Duration;

use super::{AgencyId, EnrichedEdge, Mode, RouteId, ScheduleOffset, Stop};

/// A leg of an itinerary.
///
/// The origin stop and the route display fields are fixed by the first edge
/// of the leg; extending the leg only moves its destination.
#[derive(Debug, Clone, PartialEq)]
pub struct Leg {
    pub mode: Mode,
    pub route_id: Option<RouteId>,
    pub route_short_name: Option<String>,
    pub route_long_name: Option<String>,
    pub agency_id: Option<AgencyId>,
    /// Trip of the first edge, if scheduled
    pub trip_id: Option<String>,
    pub from_stop: Stop,
    pub to_stop: Stop,
    /// Number of graph edges folded into this leg
    pub hops: usize,
    pub departure: Option<ScheduleOffset>,
    pub arrival: Option<ScheduleOffset>,
}

impl Leg {
    /// Starts a new leg from its first edge.
    pub fn start(first: &EnrichedEdge) -> Self {
        let route = first.route.as_ref();
        Self {
            mode: first.edge.mode.clone(),
            route_id: first.edge.route_id.clone(),
            route_short_name: route.and_then(|r| r.short_name.clone()),
            route_long_name: route.and_then(|r| r.long_name.clone()),
            agency_id: route.and_then(|r| r.agency_id.clone()),
            trip_id: first.edge.trip_id.clone(),
            from_stop: first.from_stop.clone(),
            to_stop: first.to_stop.clone(),
            hops: 1,
            departure: first.edge.departure,
            arrival: first.edge.arrival,
        }
    }

    /// Returns true if `edge` travels in the same `(mode, route)` bucket.
    ///
    /// Edges without a route share one bucket.
    pub fn continues_with(&self, edge: &EnrichedEdge) -> bool {
        self.mode == edge.edge.mode && self.route_id == edge.edge.route_id
    }

    /// Extends the leg's destination to the end of `edge`.
    pub fn extend(&mut self, edge: &EnrichedEdge) {
        self.to_stop = edge.to_stop.clone();
        self.hops += 1;
        if edge.edge.arrival.is_some() {
            self.arrival = edge.edge.arrival;
        }
    }

    /// Folds a following leg into this one, keeping this leg's origin and
    /// route fields.
    pub fn absorb(&mut self, next: &Leg) {
        self.to_stop = next.to_stop.clone();
        self.hops += next.hops;
        if next.arrival.is_some() {
            self.arrival = next.arrival;
        }
    }

    /// Returns true for walk or transfer legs: no route, or walk mode.
    pub fn is_walk(&self) -> bool {
        self.route_id.is_none() || self.mode == Mode::Walk
    }

    /// Returns the route of a riding leg, `None` for walk legs.
    pub fn riding_route(&self) -> Option<&RouteId> {
        if self.is_walk() {
            None
        } else {
            self.route_id.as_ref()
        }
    }

    /// Scheduled duration, when both ends carry times.
    pub fn duration(&self) -> Option<Duration> {
        match (self.departure, self.arrival) {
            (Some(dep), Some(arr)) => Some(arr.signed_duration_since(dep)),
            _ => None,
        }
    }
}
