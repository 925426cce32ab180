//! Domain types for the transit router.
//!
//! This module contains the value types shared by the graph store, the
//! path finder and the itinerary builder. Types that carry invariants
//! (coordinates, route ids, paths) enforce them at construction time.

mod coordinate;
mod edge;
mod error;
mod ids;
mod itinerary;
mod leg;
mod path;
mod stop;

pub use coordinate::Coordinate;
pub use edge::{Edge, EnrichedEdge, Mode, ScheduleOffset};
pub use error::DomainError;
pub use ids::{AgencyId, EdgeId, NodeId, RouteId, StopId};
pub use itinerary::Itinerary;
pub use leg::Leg;
pub use path::Path;
pub use stop::{Node, Route, Stop};
