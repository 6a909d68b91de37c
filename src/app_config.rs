use config::{Config, ConfigError, Environment};
use haversine::{DistanceUnit, GeoPoint};
use serde::Deserialize;

const ENV_PREFIX: &str = "HAVERSINE";

#[derive(Debug, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    unit: DistanceUnit,
    #[serde(default)]
    routes: Vec<Route>,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from("config")
    }

    /// Loads `<name>` (required) and `<name>_local` (optional), then applies `HAVERSINE_*` environment variables.
    pub fn load_from(name: &str) -> Result<Self, ConfigError> {
        Self::load_with(name, Environment::with_prefix(ENV_PREFIX))
    }

    fn load_with(name: &str, environment: Environment) -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(config::File::with_name(name).required(true))
            .add_source(config::File::with_name(&format!("{}_local", name)).required(false))
            .add_source(environment)
            .build()?
            .try_deserialize()
    }

    pub fn unit(&self) -> DistanceUnit {
        self.unit
    }

    pub fn routes(&self) -> &[Route] {
        &self.routes
    }
}

#[derive(Debug, Deserialize)]
pub struct Route {
    name: String,
    from: GeoPoint,
    to: GeoPoint,
}

impl Route {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn from(&self) -> &GeoPoint {
        &self.from
    }

    pub fn to(&self) -> &GeoPoint {
        &self.to
    }

    pub fn distance(&self, unit: DistanceUnit) -> f64 {
        self.from.distance_to_in(&self.to, unit)
    }
}

#[cfg(test)]
pub struct AppConfigBuilder {
    config: AppConfig,
}

#[cfg(test)]
impl AppConfigBuilder {
    pub fn new() -> Self {
        AppConfigBuilder {
            config: AppConfig {
                unit: DistanceUnit::Kilometers,
                routes: vec![],
            },
        }
    }

    pub fn unit(mut self, unit: DistanceUnit) -> Self {
        self.config.unit = unit;
        self
    }

    pub fn route(mut self, name: &str, from: GeoPoint, to: GeoPoint) -> Self {
        self.config.routes.push(Route {
            name: name.to_string(),
            from,
            to,
        });
        self
    }

    pub fn build(self) -> AppConfig {
        self.config
    }
}
