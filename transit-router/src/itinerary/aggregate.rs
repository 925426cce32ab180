//! Edge to leg aggregation.

use crate::domain::{EnrichedEdge, Leg};

/// Collapse an ordered edge sequence into legs.
///
/// A new leg starts whenever the `(mode, route)` bucket changes; otherwise
/// the current leg is extended to the edge's destination.
pub fn aggregate_legs(edges: &[EnrichedEdge]) -> Vec<Leg> {
    let mut legs: Vec<Leg> = Vec::new();

    for edge in edges {
        match legs.last_mut() {
            Some(current) if current.continues_with(edge) => current.extend(edge),
            _ => legs.push(Leg::start(edge)),
        }
    }

    legs
}
