//! Web layer for the transit journey planner.
//!
//! Provides HTTP endpoints for planning routes over the loaded graph.

mod dto;
mod routes;
mod state;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::{AppState, Planner};
