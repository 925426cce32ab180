//! Transit journey planner server.
//!
//! Answers "how do I get from here to there by bus and on foot?" over a
//! prebuilt transit graph: nearest-node resolution, a bounded breadth-first
//! path search, itinerary building, and ride-hailing price alternatives.

pub mod config;
pub mod domain;
pub mod fares;
pub mod graph;
pub mod itinerary;
pub mod journey;
pub mod planner;
pub mod web;
