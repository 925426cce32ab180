//! Ride-hailing cost alternatives.

use std::future::Future;

use geo::{Distance, Haversine};
use tracing::debug;

use super::error::FareError;
use super::profile::FareProfile;
use crate::domain::Coordinate;

/// A priced door-to-door alternative to the transit itinerary.
#[derive(Debug, Clone, PartialEq)]
pub struct FareAlternative {
    pub agency_id: String,
    pub name: String,
    pub logo_url: Option<String>,
    /// Rounded cost in the profile's currency unit
    pub cost: i64,
    /// Rounded estimated duration in seconds
    pub est_duration_s: u64,
    pub from: Coordinate,
    pub to: Coordinate,
}

/// Source of cost alternatives for an origin/destination pair.
pub trait FareEstimator: Send + Sync {
    /// Returns alternatives sorted by ascending cost.
    fn estimate(
        &self,
        from: Coordinate,
        to: Coordinate,
    ) -> impl Future<Output = Result<Vec<FareAlternative>, FareError>> + Send;
}

/// Prices trips from straight-line distance and a list of fare profiles.
#[derive(Debug, Clone)]
pub struct RideHailEstimator {
    profiles: Vec<FareProfile>,
}

impl RideHailEstimator {
    /// Creates an estimator; with no profiles the default one is used.
    pub fn new(profiles: Vec<FareProfile>) -> Self {
        let profiles = if profiles.is_empty() {
            vec![FareProfile::default_ride_hail()]
        } else {
            profiles
        };
        Self { profiles }
    }

    /// Prices every profile for a trip of `distance_m` metres.
    pub fn quote(&self, from: Coordinate, to: Coordinate, distance_m: f64) -> Vec<FareAlternative> {
        let distance_km = distance_m / 1000.0;

        let mut quotes: Vec<FareAlternative> = self
            .profiles
            .iter()
            .map(|profile| {
                let cost = profile.effective_base_cost() + distance_km * profile.effective_cost_per_km();
                let duration = distance_m / profile.effective_avg_speed();
                FareAlternative {
                    agency_id: profile.id.clone(),
                    name: profile.name.clone(),
                    logo_url: profile.logo_url.clone(),
                    cost: cost.round() as i64,
                    est_duration_s: duration.round() as u64,
                    from,
                    to,
                }
            })
            .collect();

        quotes.sort_by_key(|q| q.cost);
        quotes
    }
}

impl Default for RideHailEstimator {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

/// Great-circle distance in metres.
pub fn haversine_m(from: Coordinate, to: Coordinate) -> f64 {
    Haversine.distance(from.to_point(), to.to_point())
}

impl FareEstimator for RideHailEstimator {
    async fn estimate(&self, from: Coordinate, to: Coordinate) -> Result<Vec<FareAlternative>, FareError> {
        let distance_m = haversine_m(from, to);
        let quotes = self.quote(from, to, distance_m);
        debug!(distance_m, quotes = quotes.len(), "ride-hail alternatives priced");
        Ok(quotes)
    }
}
