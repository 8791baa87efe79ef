//! Observer location and equatorial coordinates.

use serde::{Deserialize, Serialize};

/// Default usable-horizon altitude in degrees.
pub const DEFAULT_HORIZON_DEG: f64 = 20.0;

/// Geographic location of an observing site.
///
/// Longitude is signed, east-positive. `horizon_deg` is the altitude above
/// the geometric horizon below which a target is considered unusable.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoLocation {
    pub latitude_deg: f64,
    pub longitude_deg: f64,
    pub horizon_deg: f64,
}

impl GeoLocation {
    /// Create a location with the default 20 degree horizon.
    pub fn new(latitude_deg: f64, longitude_deg: f64) -> Self {
        Self {
            latitude_deg,
            longitude_deg,
            horizon_deg: DEFAULT_HORIZON_DEG,
        }
    }

    pub fn with_horizon(mut self, horizon_deg: f64) -> Self {
        self.horizon_deg = horizon_deg;
        self
    }
}

/// Equatorial coordinate of a target or solar-system body at an instant.
///
/// Right ascension in hours `[0, 24)`, declination in degrees `[-90, 90]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EquatorialCoordinate {
    pub ra_hours: f64,
    pub dec_deg: f64,
}

impl EquatorialCoordinate {
    pub fn new(ra_hours: f64, dec_deg: f64) -> Self {
        Self { ra_hours, dec_deg }
    }

    /// Right ascension converted to degrees.
    pub fn ra_degrees(&self) -> f64 {
        self.ra_hours * 15.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_horizon() {
        let loc = GeoLocation::new(48.86, 2.35);
        assert_eq!(loc.horizon_deg, 20.0);
        assert_eq!(loc.with_horizon(30.0).horizon_deg, 30.0);
    }

    #[test]
    fn test_ra_degrees() {
        let coord = EquatorialCoordinate::new(5.59, -5.39);
        assert!((coord.ra_degrees() - 83.85).abs() < 1e-9);
    }
}
