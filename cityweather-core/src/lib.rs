//! Core library for the `cityweather` panel.
//!
//! This crate defines:
//! - The fixed city registry and coordinate lookup
//! - An abstraction over forecast providers, backed by Open-Meteo
//! - Timezone-corrected clock formatting
//! - The panel controllers and the view state they share
//!
//! It is used by `cityweather-cli`, but can also be reused by other
//! binaries or embedding UIs.

pub mod config;
pub mod error;
pub mod locate;
pub mod model;
pub mod panel;
pub mod provider;
pub mod registry;
pub mod timefmt;

pub use config::Config;
pub use error::WeatherError;
pub use locate::{FixedLocator, GeoLocator, SystemLocator};
pub use model::{
    CityCoordinate, Coordinates, CurrentConditions, CurrentObservation, FetchPhase, ViewState,
    weather_code_description,
};
pub use panel::Panel;
pub use provider::{ForecastProvider, OpenMeteoProvider};
pub use timefmt::{Locale, TimeFormatter};
