//! Open-Meteo forecast client. Free, no API key required.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use crate::{
    error::WeatherError,
    model::{CurrentConditions, CurrentObservation},
};

use super::ForecastProvider;

const OPEN_METEO_URL: &str = "https://api.open-meteo.com";
const CURRENT_FIELDS: &str = "temperature_2m,weathercode,windspeed_10m";

#[derive(Debug, Clone)]
pub struct OpenMeteoProvider {
    base_url: String,
    http: Client,
}

impl Default for OpenMeteoProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl OpenMeteoProvider {
    pub fn new() -> Self {
        Self::with_base_url(OPEN_METEO_URL.to_string())
    }

    /// Point the client somewhere else (config override, mock server).
    pub fn with_base_url(base_url: String) -> Self {
        Self {
            base_url,
            http: Client::new(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct OmCurrent {
    temperature_2m: f64,
    windspeed_10m: f64,
    weathercode: i32,
}

#[derive(Debug, Deserialize)]
struct OmForecastResponse {
    timezone: String,
    current: OmCurrent,
}

#[async_trait]
impl ForecastProvider for OpenMeteoProvider {
    async fn fetch_current(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> Result<CurrentObservation, WeatherError> {
        let url = format!("{}/v1/forecast", self.base_url);

        tracing::debug!(latitude, longitude, "requesting current conditions");

        let res = self
            .http
            .get(&url)
            .query(&[
                ("latitude", latitude.to_string()),
                ("longitude", longitude.to_string()),
                ("current", CURRENT_FIELDS.to_string()),
                ("timezone", "auto".to_string()),
            ])
            .send()
            .await?;

        let status = res.status();
        let body = res.text().await?;

        if !status.is_success() {
            return Err(WeatherError::Api {
                status,
                body: truncate_body(&body),
            });
        }

        let parsed: OmForecastResponse = serde_json::from_str(&body)?;

        Ok(CurrentObservation {
            conditions: CurrentConditions {
                temperature_c: parsed.current.temperature_2m,
                wind_speed_kmh: parsed.current.windspeed_10m,
                weather_code: parsed.current.weathercode,
            },
            timezone: parsed.timezone,
        })
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    if body.len() > MAX {
        format!("{}...", &body[..MAX])
    } else {
        body.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_RESPONSE: &str = r#"{
        "latitude": 52.23,
        "longitude": 21.01,
        "generationtime_ms": 0.21,
        "utc_offset_seconds": 3600,
        "timezone": "Europe/Warsaw",
        "timezone_abbreviation": "CET",
        "elevation": 113.0,
        "current_units": {
            "time": "iso8601",
            "interval": "seconds",
            "temperature_2m": "°C",
            "weathercode": "wmo code",
            "windspeed_10m": "km/h"
        },
        "current": {
            "time": "2024-01-01T13:00",
            "interval": 900,
            "temperature_2m": 21.5,
            "weathercode": 3,
            "windspeed_10m": 12.0
        }
    }"#;

    #[test]
    fn parses_current_block_and_timezone() {
        let parsed: OmForecastResponse = serde_json::from_str(SAMPLE_RESPONSE).unwrap();
        assert_eq!(parsed.timezone, "Europe/Warsaw");
        assert_eq!(parsed.current.temperature_2m, 21.5);
        assert_eq!(parsed.current.windspeed_10m, 12.0);
        assert_eq!(parsed.current.weathercode, 3);
    }

    #[test]
    fn response_without_current_block_does_not_parse() {
        let body = r#"{"timezone": "Europe/Warsaw"}"#;
        assert!(serde_json::from_str::<OmForecastResponse>(body).is_err());
    }

    #[test]
    fn truncate_body_caps_long_payloads() {
        let long = "x".repeat(500);
        let truncated = truncate_body(&long);
        assert_eq!(truncated.len(), 203);
        assert!(truncated.ends_with("..."));

        assert_eq!(truncate_body("short"), "short");
    }
}
