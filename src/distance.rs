use crate::domain::{DistanceError, DistanceUnit, GeoPoint, check_latitude, check_longitude};
use tracing::{debug, trace};

/// Mean Earth radius in kilometers.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Great-circle distance in kilometers between `(lat1, lon1)` and `(lat2, lon2)`, all in decimal degrees.
///
/// Both latitudes are validated before either longitude, so a pair that is invalid in both dimensions reports
/// [`DistanceError::InvalidLatitude`].
pub fn distance(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> Result<f64, DistanceError> {
    let (from, to) = validate(lat1, lon1, lat2, lon2).inspect_err(|err| debug!("Rejected coordinates: {}", err))?;

    let distance = haversine_km(&from, &to);
    trace!("Distance between {:?} and {:?} is {} km", from, to, distance);
    Ok(distance)
}

pub fn distance_miles(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> Result<f64, DistanceError> {
    distance_in(lat1, lon1, lat2, lon2, DistanceUnit::Miles)
}

pub fn distance_nautical_miles(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> Result<f64, DistanceError> {
    distance_in(lat1, lon1, lat2, lon2, DistanceUnit::NauticalMiles)
}

pub fn distance_in(lat1: f64, lon1: f64, lat2: f64, lon2: f64, unit: DistanceUnit) -> Result<f64, DistanceError> {
    let kilometers = distance(lat1, lon1, lat2, lon2)?;
    Ok(unit.from_kilometers(kilometers))
}

fn validate(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> Result<(GeoPoint, GeoPoint), DistanceError> {
    let lat1 = check_latitude(lat1)?;
    let lat2 = check_latitude(lat2)?;
    let lon1 = check_longitude(lon1)?;
    let lon2 = check_longitude(lon2)?;

    Ok((GeoPoint::new_unchecked(lat1, lon1), GeoPoint::new_unchecked(lat2, lon2)))
}

pub(crate) fn haversine_km(from: &GeoPoint, to: &GeoPoint) -> f64 {
    let (lat1, lon1) = from.to_radians();
    let (lat2, lon2) = to.to_radians();

    let d_lat = lat2 - lat1;
    let d_lon = lon2 - lon1;

    // Rounding can push `a` just past 1 for antipodal points
    let a = ((d_lat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (d_lon / 2.0).sin().powi(2)).min(1.0);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_KM * c
}
