//! Application state for the web layer.

use std::sync::Arc;

use crate::fares::RideHailEstimator;
use crate::graph::GraphSnapshot;
use crate::journey::JourneyPlanner;

/// The planner served over HTTP.
pub type Planner = JourneyPlanner<GraphSnapshot, RideHailEstimator>;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Journey planner over the loaded graph
    pub planner: Arc<Planner>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(planner: Planner) -> Self {
        Self {
            planner: Arc::new(planner),
        }
    }
}
