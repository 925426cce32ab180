//! Ride-hailing fare profiles.
//!
//! A profile describes one operator's pricing: a flat pickup charge, a
//! per-kilometre rate and an average speed used for duration estimates.
//! Profiles are loaded from a JSON array at startup.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use super::error::FareError;

/// Pickup charge used when a profile's own is missing or non-positive.
pub const FALLBACK_BASE_COST: f64 = 1000.0;
/// Per-kilometre rate used when a profile's own is missing or non-positive.
pub const FALLBACK_COST_PER_KM: f64 = 500.0;
/// Average speed in m/s used when a profile's own is missing or non-positive.
pub const FALLBACK_AVG_SPEED_MPS: f64 = 7.0;

/// Pricing for one ride-hailing operator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FareProfile {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub logo_url: Option<String>,
    #[serde(alias = "base_cost_cfa", default)]
    pub base_cost: f64,
    #[serde(alias = "cost_per_km_cfa", default)]
    pub cost_per_km: f64,
    #[serde(alias = "avg_speed_ms", default)]
    pub avg_speed_mps: f64,
}

impl FareProfile {
    /// The profile used when none are configured.
    pub fn default_ride_hail() -> Self {
        Self {
            id: "ride_hail".to_string(),
            name: "Ride-hail".to_string(),
            logo_url: None,
            base_cost: 1000.0,
            cost_per_km: 100.0,
            avg_speed_mps: 7.0,
        }
    }

    pub fn effective_base_cost(&self) -> f64 {
        positive_or(self.base_cost, FALLBACK_BASE_COST)
    }

    pub fn effective_cost_per_km(&self) -> f64 {
        positive_or(self.cost_per_km, FALLBACK_COST_PER_KM)
    }

    pub fn effective_avg_speed(&self) -> f64 {
        positive_or(self.avg_speed_mps, FALLBACK_AVG_SPEED_MPS)
    }
}

fn positive_or(value: f64, fallback: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        fallback
    }
}

/// Parses a JSON array of profiles.
pub fn profiles_from_json(json: &str) -> Result<Vec<FareProfile>, FareError> {
    Ok(serde_json::from_str(json)?)
}

/// Reads profiles from a JSON file.
pub async fn load_profiles(path: &Path) -> Result<Vec<FareProfile>, FareError> {
    let json = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| FareError::Io {
            path: path.to_path_buf(),
            source,
        })?;
    let profiles = profiles_from_json(&json)?;
    info!(path = %path.display(), count = profiles.len(), "loaded fare profiles");
    Ok(profiles)
}
