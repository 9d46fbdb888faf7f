use async_trait::async_trait;
use std::fmt::Debug;

use crate::{error::WeatherError, model::CurrentObservation};

pub mod open_meteo;

pub use open_meteo::OpenMeteoProvider;

/// A forecast backend that can report current conditions for a point.
///
/// Coordinates are taken on trust: the registry and the geolocation
/// capability only hand out values in range, so the provider does not
/// re-validate them.
#[async_trait]
pub trait ForecastProvider: Send + Sync + Debug {
    async fn fetch_current(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> Result<CurrentObservation, WeatherError>;
}
