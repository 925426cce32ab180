//! Itinerary type.

use super::{Leg, Stop};

/// An ordered sequence of legs from origin to destination.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Itinerary {
    legs: Vec<Leg>,
}

impl Itinerary {
    /// Creates an itinerary from already merged legs.
    pub fn new(legs: Vec<Leg>) -> Self {
        Self { legs }
    }

    /// An itinerary with no legs (origin and destination share a node).
    pub fn empty() -> Self {
        Self::default()
    }

    /// Returns the legs in travel order.
    pub fn legs(&self) -> &[Leg] {
        &self.legs
    }

    /// Number of steps shown to the rider, one per leg.
    pub fn step_count(&self) -> usize {
        self.legs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.legs.is_empty()
    }

    /// Stop the first leg starts from.
    pub fn origin(&self) -> Option<&Stop> {
        self.legs.first().map(|l| &l.from_stop)
    }

    /// Stop the last leg ends at.
    pub fn destination(&self) -> Option<&Stop> {
        self.legs.last().map(|l| &l.to_stop)
    }
}
