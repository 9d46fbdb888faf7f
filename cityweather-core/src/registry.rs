//! The fixed city table. Defined at startup, never mutated.

use crate::{error::WeatherError, model::CityCoordinate};

/// City selected when the panel mounts, unless configured otherwise.
pub const DEFAULT_CITY: &str = "Warsaw";

const CITIES: &[CityCoordinate] = &[
    CityCoordinate { name: "Warsaw", latitude: 52.23, longitude: 21.01 },
    CityCoordinate { name: "London", latitude: 51.51, longitude: -0.13 },
    CityCoordinate { name: "Tokyo", latitude: 35.68, longitude: 139.76 },
    CityCoordinate { name: "New York", latitude: 40.71, longitude: -74.01 },
    CityCoordinate { name: "Madrid", latitude: 40.42, longitude: -3.70 },
];

/// Resolve a city name to its registered coordinates.
pub fn lookup(name: &str) -> Result<CityCoordinate, WeatherError> {
    CITIES
        .iter()
        .find(|city| city.name == name)
        .copied()
        .ok_or_else(|| WeatherError::UnknownCity(name.to_string()))
}

/// Names of all registered cities, in display order.
pub fn cities() -> impl Iterator<Item = &'static str> {
    CITIES.iter().map(|city| city.name)
}
