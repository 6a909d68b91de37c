use crate::domain::GeoPoint;
use serde::de::Error;
use serde::{Deserialize, Deserializer};

impl<'de> Deserialize<'de> for GeoPoint {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Debug, Deserialize)]
        pub struct Inner {
            latitude: f64,
            longitude: f64,
        }

        let inner = Inner::deserialize(deserializer)?;
        GeoPoint::new(inner.latitude, inner.longitude).map_err(Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use serde_json::json;

    #[test]
    fn deserializes_a_valid_point() {
        let json = json!({ "latitude": 52.3676, "longitude": 4.9041 });

        let point = serde_json::from_value::<GeoPoint>(json).unwrap();
        assert_eq!(point, GeoPoint::new(52.3676, 4.9041).unwrap());
    }

    #[rstest]
    #[case::latitude_too_large(json!({ "latitude": 90.0001, "longitude": 0.0 }), "invalid latitude: 90.0001")]
    #[case::latitude_too_small(json!({ "latitude": -100, "longitude": 0.0 }), "invalid latitude: -100")]
    #[case::longitude_too_large(json!({ "latitude": 0.0, "longitude": 180.0001 }), "invalid longitude: 180.0001")]
    #[case::longitude_too_small(json!({ "latitude": 0.0, "longitude": -190 }), "invalid longitude: -190")]
    #[case::missing_longitude(json!({ "latitude": 0.0 }), "missing field `longitude`")]
    fn fails_for_an_invalid_point(#[case] json: serde_json::Value, #[case] message: &str) {
        let result = serde_json::from_value::<GeoPoint>(json);
        match result {
            Err(err) => assert!(err.to_string().starts_with(message), "unexpected error: {}", err),
            Ok(point) => panic!("Expected an error, found {:?}", point),
        }
    }
}
