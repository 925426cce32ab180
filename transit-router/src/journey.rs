//! Journey planning.
//!
//! [`JourneyPlanner`] answers one route request end to end: it resolves both
//! coordinates to nearby graph nodes, searches for a path between them, then
//! builds the itinerary while pricing ride-hailing alternatives.

use std::collections::HashSet;
use std::sync::Arc;
use std::time::Duration;

use futures::future;
use tracing::{debug, info, warn};

use crate::domain::{Coordinate, Itinerary};
use crate::fares::{FareAlternative, FareEstimator};
use crate::graph::{GraphStore, StoreError};
use crate::itinerary::build_itinerary;
use crate::planner::{
    SearchBounds, SearchObserver, SearchOutcome, StopReason, TracingObserver, find_direct_path,
    find_path,
};

/// Tunables for the journey planner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannerConfig {
    /// Number of nearest nodes resolved for each end of the trip.
    pub nearest_k: usize,
    /// Bounds for [`JourneyPlanner::plan_route`].
    pub general: SearchBounds,
    /// Bounds for the search behind [`JourneyPlanner::plan_direct`].
    pub direct: SearchBounds,
    /// Wall-clock budget for one plan.
    pub timeout: Duration,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            nearest_k: 5,
            general: SearchBounds::general(),
            direct: SearchBounds::direct(),
            timeout: Duration::from_secs(10),
        }
    }
}

impl PlannerConfig {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Which path finder a plan uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchKind {
    /// Full bounded breadth-first search.
    General,
    /// Single-edge probe, then a shallow search.
    Direct,
}

/// Origin and destination of a trip.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RouteRequest {
    pub from: Coordinate,
    pub to: Coordinate,
}

/// A planned journey.
#[derive(Debug, Clone, PartialEq)]
pub struct RoutePlan {
    pub from: Coordinate,
    pub to: Coordinate,
    pub itinerary: Itinerary,
    /// Ride-hailing alternatives, cheapest first. Empty if pricing failed.
    pub alternatives: Vec<FareAlternative>,
    pub search: SearchOutcome,
}

/// Why no journey was produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoPathReason {
    /// No graph node near the origin
    NoOriginNodes,
    /// No graph node near the destination
    NoDestinationNodes,
    /// The search ended without reaching a destination node
    Unreachable(StopReason),
}

/// Result of a plan that did not fail.
#[derive(Debug, Clone, PartialEq)]
pub enum PlanOutcome {
    Found(RoutePlan),
    NoPath(NoPathReason),
}

/// Errors that abort a plan.
#[derive(Debug, thiserror::Error)]
pub enum PlanError {
    /// The graph store failed
    #[error(transparent)]
    Store(#[from] StoreError),

    /// The plan ran past its wall-clock budget
    #[error("planning timed out after {0:?}")]
    Timeout(Duration),
}

/// Plans journeys over a graph store, with fares from an estimator.
pub struct JourneyPlanner<S, F> {
    store: Arc<S>,
    fares: Arc<F>,
    config: PlannerConfig,
    observer: Arc<dyn SearchObserver>,
}

impl<S: GraphStore, F: FareEstimator> JourneyPlanner<S, F> {
    /// Creates a planner that reports search progress through `tracing`.
    pub fn new(store: Arc<S>, fares: Arc<F>, config: PlannerConfig) -> Self {
        Self {
            store,
            fares,
            config,
            observer: Arc::new(TracingObserver),
        }
    }

    /// Replaces the search observer.
    pub fn with_observer(mut self, observer: Arc<dyn SearchObserver>) -> Self {
        self.observer = observer;
        self
    }

    pub fn config(&self) -> &PlannerConfig {
        &self.config
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Plans a journey with the general search.
    pub async fn plan_route(&self, request: RouteRequest) -> Result<PlanOutcome, PlanError> {
        self.plan(request, SearchKind::General).await
    }

    /// Plans a journey preferring a single connecting edge.
    pub async fn plan_direct(&self, request: RouteRequest) -> Result<PlanOutcome, PlanError> {
        self.plan(request, SearchKind::Direct).await
    }

    /// Plans a journey with the chosen path finder, within the time budget.
    pub async fn plan(&self, request: RouteRequest, kind: SearchKind) -> Result<PlanOutcome, PlanError> {
        let budget = self.config.timeout;
        match tokio::time::timeout(budget, self.plan_unbounded(request, kind)).await {
            Ok(result) => result,
            Err(_) => {
                warn!(?kind, ?budget, "journey planning timed out");
                Err(PlanError::Timeout(budget))
            }
        }
    }

    async fn plan_unbounded(
        &self,
        request: RouteRequest,
        kind: SearchKind,
    ) -> Result<PlanOutcome, PlanError> {
        let RouteRequest { from, to } = request;
        let k = self.config.nearest_k;

        let (starts, goals) = future::try_join(
            self.store.nearest_nodes(from, k),
            self.store.nearest_nodes(to, k),
        )
        .await?;
        debug!(starts = starts.len(), goals = goals.len(), "resolved trip endpoints");

        if starts.is_empty() {
            return Ok(PlanOutcome::NoPath(NoPathReason::NoOriginNodes));
        }
        if goals.is_empty() {
            return Ok(PlanOutcome::NoPath(NoPathReason::NoDestinationNodes));
        }

        let search = match kind {
            SearchKind::General => {
                let goal_set: HashSet<_> = goals.iter().copied().collect();
                find_path(
                    &*self.store,
                    &starts,
                    &goal_set,
                    &self.config.general,
                    &*self.observer,
                )
                .await?
            }
            SearchKind::Direct => {
                find_direct_path(
                    &*self.store,
                    &starts,
                    &goals,
                    &self.config.direct,
                    &*self.observer,
                )
                .await?
            }
        };

        let Some(path) = search.path.clone() else {
            info!(?kind, reason = search.reason.as_str(), "no path found");
            return Ok(PlanOutcome::NoPath(NoPathReason::Unreachable(search.reason)));
        };

        let (itinerary, alternatives) = future::join(
            build_itinerary(&*self.store, &path),
            self.alternatives(from, to),
        )
        .await;
        let itinerary = itinerary?;

        info!(
            ?kind,
            hops = path.hop_count(),
            steps = itinerary.step_count(),
            alternatives = alternatives.len(),
            "journey planned"
        );

        Ok(PlanOutcome::Found(RoutePlan {
            from,
            to,
            itinerary,
            alternatives,
            search,
        }))
    }

    async fn alternatives(&self, from: Coordinate, to: Coordinate) -> Vec<FareAlternative> {
        match self.fares.estimate(from, to).await {
            Ok(quotes) => quotes,
            Err(e) => {
                warn!(error = %e, "fare estimation failed, returning no alternatives");
                Vec::new()
            }
        }
    }
}
