use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A registered city and its fixed position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CityCoordinate {
    pub name: &'static str,
    pub latitude: f64,
    pub longitude: f64,
}

/// A bare position, as resolved by a geolocation capability.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

/// Current conditions for one point, replaced wholesale on every
/// successful fetch.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CurrentConditions {
    pub temperature_c: f64,
    pub wind_speed_kmh: f64,
    pub weather_code: i32,
}

/// What one forecast fetch yields: the conditions plus the IANA timezone
/// the service resolved for the point (`timezone=auto`).
#[derive(Debug, Clone, PartialEq)]
pub struct CurrentObservation {
    pub conditions: CurrentConditions,
    pub timezone: String,
}

/// Lifecycle of the selected-city target. The local-weather flow exposes
/// no phase of its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FetchPhase {
    #[default]
    Idle,
    Loading,
    Loaded,
    Failed,
}

/// Everything the render layer observes. Created once per panel, mutated
/// only by the controllers' completion handlers and by user events.
#[derive(Debug, Clone, Default)]
pub struct ViewState {
    pub selected_city: String,
    pub selected_conditions: Option<CurrentConditions>,
    pub local_conditions: Option<CurrentConditions>,
    /// Grow-only: a city keeps its last formatted time for the lifetime
    /// of the view, even after selection moves on.
    pub times_by_city: HashMap<String, String>,
    pub local_time: Option<String>,
    pub loading: bool,
    pub error: Option<String>,
    pub city_list_visible: bool,
    pub phase: FetchPhase,
}

/// Human-readable label for a WMO weather interpretation code.
/// See: https://open-meteo.com/en/docs#weathervariables
pub fn weather_code_description(code: i32) -> &'static str {
    match code {
        0 => "Clear sky",
        1 | 2 => "Partly cloudy",
        3 => "Overcast",
        45 | 48 => "Fog",
        51 | 53 | 55 | 56 | 57 => "Drizzle",
        61 | 63 | 65 | 66 | 67 | 80..=82 => "Rain",
        71 | 73 | 75 | 77 | 85 | 86 => "Snow",
        95 | 96 | 99 => "Thunderstorm",
        _ => "Unknown",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weather_code_covers_common_codes() {
        assert_eq!(weather_code_description(0), "Clear sky");
        assert_eq!(weather_code_description(3), "Overcast");
        assert_eq!(weather_code_description(48), "Fog");
        assert_eq!(weather_code_description(81), "Rain");
        assert_eq!(weather_code_description(95), "Thunderstorm");
    }

    #[test]
    fn weather_code_unknown_is_labelled() {
        assert_eq!(weather_code_description(-1), "Unknown");
        assert_eq!(weather_code_description(200), "Unknown");
    }

    #[test]
    fn view_state_starts_idle_and_empty() {
        let state = ViewState::default();
        assert_eq!(state.phase, FetchPhase::Idle);
        assert!(!state.loading);
        assert!(state.error.is_none());
        assert!(state.times_by_city.is_empty());
        assert!(!state.city_list_visible);
    }
}
