use crate::distance::haversine_km;
use crate::domain::{DistanceError, DistanceUnit};

pub const MIN_LATITUDE: f64 = -90.0;
pub const MAX_LATITUDE: f64 = 90.0;
pub const MIN_LONGITUDE: f64 = -180.0;
pub const MAX_LONGITUDE: f64 = 180.0;

/// A latitude/longitude pair in decimal degrees.
///
/// A `GeoPoint` can only be constructed from in-range coordinates, so distances between two points never fail.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GeoPoint {
    latitude: f64,
    longitude: f64,
}

impl GeoPoint {
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, DistanceError> {
        let latitude = check_latitude(latitude)?;
        let longitude = check_longitude(longitude)?;
        Ok(GeoPoint { latitude, longitude })
    }

    /// Both coordinates must already have passed `check_latitude` and `check_longitude`.
    pub(crate) fn new_unchecked(latitude: f64, longitude: f64) -> Self {
        GeoPoint { latitude, longitude }
    }

    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Returns `(latitude, longitude)` in radians.
    pub fn to_radians(&self) -> (f64, f64) {
        (self.latitude.to_radians(), self.longitude.to_radians())
    }

    /// Great-circle distance to `other` in kilometers.
    pub fn distance_to(&self, other: &GeoPoint) -> f64 {
        haversine_km(self, other)
    }

    pub fn distance_to_in(&self, other: &GeoPoint, unit: DistanceUnit) -> f64 {
        unit.from_kilometers(self.distance_to(other))
    }
}

// The negated range checks also reject NaN.
pub(crate) fn check_latitude(latitude: f64) -> Result<f64, DistanceError> {
    if !(MIN_LATITUDE..=MAX_LATITUDE).contains(&latitude) {
        return Err(DistanceError::InvalidLatitude(latitude));
    }
    Ok(latitude)
}

pub(crate) fn check_longitude(longitude: f64) -> Result<f64, DistanceError> {
    if !(MIN_LONGITUDE..=MAX_LONGITUDE).contains(&longitude) {
        return Err(DistanceError::InvalidLongitude(longitude));
    }
    Ok(longitude)
}
