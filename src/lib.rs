//! Great-circle distance between latitude/longitude points using the haversine formula.
//!
//! ```
//! let kilometers = haversine::distance(52.3676, 4.9041, 48.8566, 2.3522).unwrap();
//! assert!((kilometers - 429.86).abs() < 1.0);
//! ```

mod deserializers;
mod distance;
mod domain;

pub use distance::{EARTH_RADIUS_KM, distance, distance_in, distance_miles, distance_nautical_miles};
pub use domain::{
    DistanceError, DistanceUnit, GeoPoint, MAX_LATITUDE, MAX_LONGITUDE, METERS_PER_KILOMETER, METERS_PER_MILE, METERS_PER_NAUTICAL_MILE,
    MIN_LATITUDE, MIN_LONGITUDE,
};
