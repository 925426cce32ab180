//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::domain::{Coordinate, DomainError, Leg, Stop};
use crate::fares::FareAlternative;
use crate::journey::{RoutePlan, RouteRequest};

/// Body of `POST /route` and `POST /route/direct`.
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteQueryRequest {
    pub from_lat: f64,
    pub from_lon: f64,
    pub to_lat: f64,
    pub to_lon: f64,
}

impl RouteQueryRequest {
    /// Validates both coordinates.
    pub fn to_request(&self) -> Result<RouteRequest, DomainError> {
        Ok(RouteRequest {
            from: Coordinate::new(self.from_lat, self.from_lon)?,
            to: Coordinate::new(self.to_lat, self.to_lon)?,
        })
    }
}

/// A bare position.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLon {
    pub lat: f64,
    pub lon: f64,
}

impl From<Coordinate> for LatLon {
    fn from(c: Coordinate) -> Self {
        Self {
            lat: c.lat(),
            lon: c.lon(),
        }
    }
}

/// A stop at either end of a leg.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StopResult {
    pub stop_id: String,
    pub stop_name: String,
    pub stop_lat: f64,
    pub stop_lon: f64,
}

impl From<&Stop> for StopResult {
    fn from(stop: &Stop) -> Self {
        Self {
            stop_id: stop.id.to_string(),
            stop_name: stop.name.clone(),
            stop_lat: stop.position.lat(),
            stop_lon: stop.position.lon(),
        }
    }
}

/// One leg of an itinerary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LegResult {
    /// "walk" or "transit"
    pub mode: String,
    pub agency_id: Option<String>,
    pub route_id: Option<String>,
    pub route_short_name: Option<String>,
    pub route_long_name: Option<String>,
    pub trip_id: Option<String>,
    pub from_stop: StopResult,
    pub to_stop: StopResult,

    /// Scheduled departure as HH:MM:SS
    #[serde(skip_serializing_if = "Option::is_none")]
    pub departure: Option<String>,

    /// Scheduled arrival as HH:MM:SS
    #[serde(skip_serializing_if = "Option::is_none")]
    pub arrival: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_s: Option<i64>,
}

impl From<&Leg> for LegResult {
    fn from(leg: &Leg) -> Self {
        Self {
            mode: leg.mode.as_str().to_string(),
            agency_id: leg.agency_id.as_ref().map(|a| a.as_str().to_string()),
            route_id: leg.route_id.as_ref().map(|r| r.to_string()),
            route_short_name: leg.route_short_name.clone(),
            route_long_name: leg.route_long_name.clone(),
            trip_id: leg.trip_id.clone(),
            from_stop: StopResult::from(&leg.from_stop),
            to_stop: StopResult::from(&leg.to_stop),
            departure: leg.departure.map(|t| t.to_string()),
            arrival: leg.arrival.map(|t| t.to_string()),
            duration_s: leg.duration().map(|d| d.num_seconds()),
        }
    }
}

/// A priced ride-hailing alternative.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlternativeResult {
    /// Always "ride_hail"
    pub mode: String,
    pub agency_id: String,
    pub name: String,
    pub logo_url: Option<String>,
    pub cost: i64,
    pub est_duration_s: u64,
    pub from_stop: LatLon,
    pub to_stop: LatLon,
}

impl From<&FareAlternative> for AlternativeResult {
    fn from(alt: &FareAlternative) -> Self {
        Self {
            mode: "ride_hail".to_string(),
            agency_id: alt.agency_id.clone(),
            name: alt.name.clone(),
            logo_url: alt.logo_url.clone(),
            cost: alt.cost,
            est_duration_s: alt.est_duration_s,
            from_stop: alt.from.into(),
            to_stop: alt.to.into(),
        }
    }
}

/// A planned route.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteResponse {
    pub from: LatLon,
    pub to: LatLon,
    pub itinerary: Vec<LegResult>,
    #[serde(rename = "stepCount")]
    pub step_count: usize,
    pub alternatives: Vec<AlternativeResult>,
}

impl From<&RoutePlan> for RouteResponse {
    fn from(plan: &RoutePlan) -> Self {
        Self {
            from: plan.from.into(),
            to: plan.to.into(),
            itinerary: plan.itinerary.legs().iter().map(LegResult::from).collect(),
            step_count: plan.itinerary.step_count(),
            alternatives: plan.alternatives.iter().map(AlternativeResult::from).collect(),
        }
    }
}

/// Error payload, also used for "no path" answers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        AgencyId, Edge, EdgeId, EnrichedEdge, Mode, NodeId, Route, RouteId, ScheduleOffset, StopId,
    };

    fn stop(id: &str, lat: f64, lon: f64) -> Stop {
        Stop::new(StopId::new(id), format!("Stop {id}"), Coordinate::new(lat, lon).unwrap())
    }

    #[test]
    fn request_uses_camel_case() {
        let req: RouteQueryRequest = serde_json::from_str(
            r#"{"fromLat": 14.69, "fromLon": -17.44, "toLat": 14.75, "toLon": -17.39}"#,
        )
        .unwrap();
        let request = req.to_request().unwrap();
        assert_eq!(request.from.lat(), 14.69);
        assert_eq!(request.to.lon(), -17.39);
    }

    #[test]
    fn request_rejects_out_of_range() {
        let req = RouteQueryRequest {
            from_lat: 91.0,
            from_lon: 0.0,
            to_lat: 0.0,
            to_lon: 0.0,
        };
        assert!(req.to_request().is_err());
    }

    #[test]
    fn leg_serialization() {
        let route_id = RouteId::parse("R7");
        let mut edge = Edge::new(EdgeId(1), NodeId(1), NodeId(2), Mode::Transit, route_id.clone());
        edge.departure = Some(ScheduleOffset(7 * 3600));
        edge.arrival = Some(ScheduleOffset(7 * 3600 + 540));
        let leg = Leg::start(&EnrichedEdge {
            edge,
            from_stop: stop("A", 14.69, -17.44),
            to_stop: stop("B", 14.70, -17.43),
            route: route_id.map(|id| Route {
                id,
                short_name: Some("7".into()),
                long_name: Some("Plateau - Parcelles".into()),
                agency_id: Some(AgencyId::new("DDD")),
            }),
        });

        let json = serde_json::to_value(LegResult::from(&leg)).unwrap();
        assert_eq!(json["mode"], "transit");
        assert_eq!(json["route_id"], "R7");
        assert_eq!(json["agency_id"], "DDD");
        assert_eq!(json["from_stop"]["stop_id"], "A");
        assert_eq!(json["to_stop"]["stop_name"], "Stop B");
        assert_eq!(json["departure"], "07:00:00");
        assert_eq!(json["arrival"], "07:09:00");
        assert_eq!(json["duration_s"], 540);
    }

    #[test]
    fn unscheduled_walk_omits_times() {
        let leg = Leg::start(&EnrichedEdge {
            edge: Edge::new(EdgeId(1), NodeId(1), NodeId(2), Mode::Walk, None),
            from_stop: stop("A", 14.69, -17.44),
            to_stop: stop("B", 14.70, -17.43),
            route: None,
        });

        let json = serde_json::to_value(LegResult::from(&leg)).unwrap();
        assert_eq!(json["mode"], "walk");
        assert!(json["route_id"].is_null());
        assert!(json.get("departure").is_none());
        assert!(json.get("duration_s").is_none());
    }
}
