//! HTTP route handlers.

use axum::body::Bytes;
use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use tower_http::trace::TraceLayer;
use tracing::{error, warn};

use crate::graph::GraphStats;
use crate::journey::{NoPathReason, PlanError, PlanOutcome, RouteRequest, SearchKind};

use super::dto::*;
use super::state::AppState;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/route", post(route))
        .route("/route/direct", post(route_direct))
        .route("/graph/stats", get(graph_stats))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Counts of the loaded graph.
async fn graph_stats(State(state): State<AppState>) -> Json<GraphStats> {
    Json(state.planner.store().stats())
}

/// Plan a route with the general search.
async fn route(State(state): State<AppState>, body: Bytes) -> Result<Response, AppError> {
    let request = parse_route_request(&body)?;
    let outcome = state.planner.plan_route(request).await?;
    Ok(respond(outcome, SearchKind::General))
}

/// Plan a route preferring a single connecting edge.
async fn route_direct(State(state): State<AppState>, body: Bytes) -> Result<Response, AppError> {
    let request = parse_route_request(&body)?;
    let outcome = state.planner.plan_direct(request).await?;
    Ok(respond(outcome, SearchKind::Direct))
}

fn parse_route_request(body: &[u8]) -> Result<RouteRequest, AppError> {
    // Parse JSON manually so we can log the body on failure
    let req: RouteQueryRequest = serde_json::from_slice(body).map_err(|e| {
        warn!(error = %e, body = %String::from_utf8_lossy(body), "invalid route request JSON");
        AppError::BadRequest {
            message: format!("Invalid JSON: {e}"),
        }
    })?;

    req.to_request().map_err(|e| AppError::BadRequest {
        message: e.to_string(),
    })
}

fn respond(outcome: PlanOutcome, kind: SearchKind) -> Response {
    match outcome {
        PlanOutcome::Found(plan) => Json(RouteResponse::from(&plan)).into_response(),
        PlanOutcome::NoPath(reason) => Json(ErrorResponse {
            error: no_path_message(reason, kind).to_string(),
        })
        .into_response(),
    }
}

/// Message for a request that found no journey.
///
/// Endpoint resolution failures read the same for both searches.
fn no_path_message(reason: NoPathReason, kind: SearchKind) -> &'static str {
    match (reason, kind) {
        (NoPathReason::Unreachable(_), SearchKind::Direct) => "No direct path found",
        _ => "No path found",
    }
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    Unavailable { message: String },
    Timeout { message: String },
}

impl From<PlanError> for AppError {
    fn from(e: PlanError) -> Self {
        match e {
            PlanError::Store(_) => AppError::Unavailable {
                message: e.to_string(),
            },
            PlanError::Timeout(_) => AppError::Timeout {
                message: e.to_string(),
            },
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::Unavailable { message } => (StatusCode::SERVICE_UNAVAILABLE, message),
            AppError::Timeout { message } => (StatusCode::GATEWAY_TIMEOUT, message),
        };

        if status.is_server_error() {
            error!(%status, %message, "request failed");
        } else {
            warn!(%status, %message, "request rejected");
        }

        (status, Json(ErrorResponse { error: message })).into_response()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::body::{Body, to_bytes};
    use axum::http::Request;
    use tower::ServiceExt;

    use super::*;
    use crate::fares::RideHailEstimator;
    use crate::graph::mock::GraphBuilder;
    use crate::journey::{JourneyPlanner, PlannerConfig};

    fn app() -> Router {
        let graph = GraphBuilder::new()
            .stop("A", 14.60, -17.40)
            .stop("B", 14.80, -17.20)
            .stop("C", 10.00, -10.00)
            .route("R1", "1", "DDD")
            .node(1, "A")
            .node(2, "B")
            .node(3, "C")
            .ride(10, 1, 2, "R1")
            .build();
        let config = PlannerConfig {
            nearest_k: 1,
            ..PlannerConfig::default()
        };
        let planner = JourneyPlanner::new(
            Arc::new(graph),
            Arc::new(RideHailEstimator::default()),
            config,
        );
        create_router(AppState::new(planner))
    }

    async fn post_json(uri: &str, body: &str) -> (StatusCode, serde_json::Value) {
        let response = app()
            .oneshot(
                Request::post(uri)
                    .header("content-type", "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn health_is_ok() {
        let response = app()
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&bytes[..], b"ok");
    }

    #[tokio::test]
    async fn stats_reports_counts() {
        let response = app()
            .oneshot(Request::get("/graph/stats").body(Body::empty()).unwrap())
            .await
            .unwrap();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(json["nodes"], 3);
        assert_eq!(json["edges"], 1);
        assert_eq!(json["stops"], 3);
        assert_eq!(json["routes"], 1);
    }

    #[tokio::test]
    async fn route_returns_itinerary() {
        let (status, json) = post_json(
            "/route",
            r#"{"fromLat": 14.601, "fromLon": -17.401, "toLat": 14.799, "toLon": -17.199}"#,
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["stepCount"], 1);
        assert_eq!(json["from"]["lat"], 14.601);
        assert_eq!(json["itinerary"][0]["route_id"], "R1");
        assert_eq!(json["itinerary"][0]["from_stop"]["stop_id"], "A");
        assert_eq!(json["itinerary"][0]["to_stop"]["stop_id"], "B");
        assert_eq!(json["alternatives"][0]["mode"], "ride_hail");
    }

    #[tokio::test]
    async fn unreachable_reports_no_path() {
        let body = r#"{"fromLat": 14.601, "fromLon": -17.401, "toLat": 10.0, "toLon": -10.0}"#;

        let (status, json) = post_json("/route", body).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["error"], "No path found");

        let (status, json) = post_json("/route/direct", body).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["error"], "No direct path found");
    }

    #[tokio::test]
    async fn bad_json_is_rejected() {
        let (status, json) = post_json("/route", r#"{"fromLat": "north"}"#).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(json["error"].as_str().unwrap().starts_with("Invalid JSON"));
    }

    #[tokio::test]
    async fn out_of_range_coordinate_is_rejected() {
        let (status, _) = post_json(
            "/route/direct",
            r#"{"fromLat": 14.6, "fromLon": -17.4, "toLat": 14.8, "toLon": 190.0}"#,
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[test]
    fn plan_errors_map_to_status() {
        let unavailable = AppError::from(PlanError::Store(
            crate::graph::StoreError::Unavailable("down".into()),
        ))
        .into_response();
        assert_eq!(unavailable.status(), StatusCode::SERVICE_UNAVAILABLE);

        let timeout = AppError::from(PlanError::Timeout(std::time::Duration::from_secs(10)))
            .into_response();
        assert_eq!(timeout.status(), StatusCode::GATEWAY_TIMEOUT);
    }
}
