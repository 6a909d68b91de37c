mod distance_error;
mod distance_unit;
mod geo_point;

pub use distance_error::DistanceError;
pub use distance_unit::{DistanceUnit, METERS_PER_KILOMETER, METERS_PER_MILE, METERS_PER_NAUTICAL_MILE};
pub(crate) use geo_point::{check_latitude, check_longitude};
pub use geo_point::{GeoPoint, MAX_LATITUDE, MAX_LONGITUDE, MIN_LATITUDE, MIN_LONGITUDE};
