//! Geographic coordinates.

use geo::Point;
use serde::Serialize;

use super::DomainError;

/// A WGS84 latitude/longitude pair.
///
/// Valid by construction: both components are finite and within range.
///
/// # Examples
///
/// ```
/// use transit_router::domain::Coordinate;
///
/// let dakar = Coordinate::new(14.6928, -17.4467).unwrap();
/// assert_eq!(dakar.lat(), 14.6928);
///
/// assert!(Coordinate::new(91.0, 0.0).is_err());
/// assert!(Coordinate::new(0.0, f64::NAN).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Coordinate {
    lat: f64,
    lon: f64,
}

impl Coordinate {
    /// Creates a coordinate, validating ranges.
    pub fn new(lat: f64, lon: f64) -> Result<Self, DomainError> {
        let valid = lat.is_finite()
            && lon.is_finite()
            && (-90.0..=90.0).contains(&lat)
            && (-180.0..=180.0).contains(&lon);

        if !valid {
            return Err(DomainError::InvalidCoordinate { lat, lon });
        }

        Ok(Self { lat, lon })
    }

    /// Latitude in degrees.
    pub fn lat(&self) -> f64 {
        self.lat
    }

    /// Longitude in degrees.
    pub fn lon(&self) -> f64 {
        self.lon
    }

    /// Planar `[x, y]` = `[lon, lat]` representation used by the spatial index.
    pub fn to_xy(&self) -> [f64; 2] {
        [self.lon, self.lat]
    }

    /// Converts to a `geo` point (x = longitude, y = latitude).
    pub fn to_point(&self) -> Point<f64> {
        Point::new(self.lon, self.lat)
    }
}
