//! Cost alternatives to transit.
//!
//! The journey planner asks a [`FareEstimator`] for priced alternatives
//! alongside each itinerary. [`RideHailEstimator`] prices straight-line
//! trips from a set of [`FareProfile`]s.
//!
//! An estimator that fails does not fail the journey; the planner returns
//! the itinerary without alternatives.

mod error;
mod estimator;
mod profile;

pub use error::FareError;
pub use estimator::{FareAlternative, FareEstimator, RideHailEstimator, haversine_m};
pub use profile::{
    FALLBACK_AVG_SPEED_MPS, FALLBACK_BASE_COST, FALLBACK_COST_PER_KM, FareProfile, load_profiles,
    profiles_from_json,
};
