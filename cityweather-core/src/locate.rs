//! Geolocation capability seam.

use async_trait::async_trait;
use std::fmt::Debug;

use crate::{error::WeatherError, model::Coordinates};

/// An environment-provided service that can resolve the device position.
#[async_trait]
pub trait GeoLocator: Send + Sync + Debug {
    /// Whether the environment exposes a usable location service at all.
    /// Checked synchronously before any resolution is attempted.
    fn available(&self) -> bool;

    /// Resolve the current position.
    async fn locate(&self) -> Result<Coordinates, WeatherError>;
}

/// Default probe for the host platform. Plain desktop and server builds
/// ship without a location backend, so this reports unavailable; embedders
/// with a real capability supply their own [`GeoLocator`].
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemLocator;

#[async_trait]
impl GeoLocator for SystemLocator {
    fn available(&self) -> bool {
        false
    }

    async fn locate(&self) -> Result<Coordinates, WeatherError> {
        Err(WeatherError::GeolocationUnavailable)
    }
}

/// A locator pinned to known coordinates, for callers that already have a
/// position (CLI flags, tests).
#[derive(Debug, Clone, Copy)]
pub struct FixedLocator {
    coordinates: Coordinates,
}

impl FixedLocator {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            coordinates: Coordinates { latitude, longitude },
        }
    }
}

#[async_trait]
impl GeoLocator for FixedLocator {
    fn available(&self) -> bool {
        true
    }

    async fn locate(&self) -> Result<Coordinates, WeatherError> {
        Ok(self.coordinates)
    }
}
