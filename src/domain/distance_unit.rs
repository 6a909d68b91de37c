use std::fmt::Display;

pub const METERS_PER_KILOMETER: f64 = 1000.0;
pub const METERS_PER_MILE: f64 = 1609.344;
pub const METERS_PER_NAUTICAL_MILE: f64 = 1852.0;

#[derive(PartialEq, Eq, Hash, Debug, Clone, Copy, Default)]
pub enum DistanceUnit {
    #[default]
    Kilometers,
    Miles,
    NauticalMiles,
}

impl DistanceUnit {
    /// Converts a distance in kilometers into this unit. No rounding is applied.
    pub fn from_kilometers(&self, kilometers: f64) -> f64 {
        match self {
            DistanceUnit::Kilometers => kilometers,
            DistanceUnit::Miles => kilometers * METERS_PER_KILOMETER / METERS_PER_MILE,
            DistanceUnit::NauticalMiles => kilometers * METERS_PER_KILOMETER / METERS_PER_NAUTICAL_MILE,
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            DistanceUnit::Kilometers => "km",
            DistanceUnit::Miles => "mi",
            DistanceUnit::NauticalMiles => "nmi",
        }
    }

    pub fn all() -> [DistanceUnit; 3] {
        [DistanceUnit::Kilometers, DistanceUnit::Miles, DistanceUnit::NauticalMiles]
    }
}

impl Display for DistanceUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
