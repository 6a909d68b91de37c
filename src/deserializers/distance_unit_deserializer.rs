use crate::domain::DistanceUnit;
use serde::{Deserialize, Deserializer};

impl<'de> Deserialize<'de> for DistanceUnit {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;

        match value.to_lowercase().as_str() {
            "km" | "kilometers" | "kilometres" => Ok(DistanceUnit::Kilometers),
            "mi" | "miles" => Ok(DistanceUnit::Miles),
            "nmi" | "nautical_miles" | "nautical miles" => Ok(DistanceUnit::NauticalMiles),
            _ => Err(serde::de::Error::custom(format!("invalid distance unit: {}", value))),
        }
    }
}
