use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum DistanceError {
    #[error("invalid latitude: {0}, expected value between -90 and 90 degrees")]
    InvalidLatitude(f64),
    #[error("invalid longitude: {0}, expected value between -180 and 180 degrees")]
    InvalidLongitude(f64),
}
