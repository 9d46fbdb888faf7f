//! Integration tests for the Open-Meteo provider using wiremock.
//!
//! These verify the request shape we send and how response bodies map
//! into observations, without touching the real service.

use cityweather_core::{
    FetchPhase, FixedLocator, ForecastProvider, OpenMeteoProvider, Panel, TimeFormatter,
    WeatherError,
};
use std::sync::Arc;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn warsaw_body() -> serde_json::Value {
    serde_json::json!({
        "latitude": 52.23,
        "longitude": 21.01,
        "timezone": "Europe/Warsaw",
        "timezone_abbreviation": "CET",
        "current": {
            "time": "2024-01-01T13:00",
            "interval": 900,
            "temperature_2m": 21.5,
            "weathercode": 3,
            "windspeed_10m": 12.0
        }
    })
}

#[tokio::test]
async fn fetch_current_sends_expected_query_and_parses_response() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/forecast"))
        .and(query_param("latitude", "52.23"))
        .and(query_param("longitude", "21.01"))
        .and(query_param("current", "temperature_2m,weathercode,windspeed_10m"))
        .and(query_param("timezone", "auto"))
        .respond_with(ResponseTemplate::new(200).set_body_json(warsaw_body()))
        .mount(&server)
        .await;

    let provider = OpenMeteoProvider::with_base_url(server.uri());
    let observation = provider.fetch_current(52.23, 21.01).await.unwrap();

    assert_eq!(observation.timezone, "Europe/Warsaw");
    assert_eq!(observation.conditions.temperature_c, 21.5);
    assert_eq!(observation.conditions.wind_speed_kmh, 12.0);
    assert_eq!(observation.conditions.weather_code, 3);
}

#[tokio::test]
async fn non_success_status_is_an_api_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/forecast"))
        .respond_with(ResponseTemplate::new(500).set_body_string("upstream exploded"))
        .mount(&server)
        .await;

    let provider = OpenMeteoProvider::with_base_url(server.uri());
    let err = provider.fetch_current(52.23, 21.01).await.unwrap_err();

    match err {
        WeatherError::Api { status, body } => {
            assert_eq!(status.as_u16(), 500);
            assert!(body.contains("upstream exploded"));
        }
        other => panic!("expected Api error, got {other:?}"),
    }
}

#[tokio::test]
async fn malformed_body_is_a_parse_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/forecast"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{ not json"))
        .mount(&server)
        .await;

    let provider = OpenMeteoProvider::with_base_url(server.uri());
    let err = provider.fetch_current(52.23, 21.01).await.unwrap_err();

    assert!(matches!(err, WeatherError::Parse(_)));
}

#[tokio::test]
async fn body_without_current_block_is_a_parse_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/forecast"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({"timezone": "Europe/Warsaw"})),
        )
        .mount(&server)
        .await;

    let provider = OpenMeteoProvider::with_base_url(server.uri());
    let err = provider.fetch_current(52.23, 21.01).await.unwrap_err();

    assert!(matches!(err, WeatherError::Parse(_)));
}

#[tokio::test]
async fn unreachable_server_is_a_network_error() {
    // Nothing listens here; the connection itself fails.
    let provider = OpenMeteoProvider::with_base_url("http://127.0.0.1:1".to_string());
    let err = provider.fetch_current(52.23, 21.01).await.unwrap_err();

    assert!(matches!(err, WeatherError::Network(_)));
}

#[tokio::test]
async fn panel_mount_against_mock_server_loads_both_targets() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/forecast"))
        .respond_with(ResponseTemplate::new(200).set_body_json(warsaw_body()))
        .mount(&server)
        .await;

    let provider = Arc::new(OpenMeteoProvider::with_base_url(server.uri()));
    let locator = Arc::new(FixedLocator::new(52.23, 21.01));
    let mut panel = Panel::new(provider, locator, TimeFormatter::default(), "Warsaw");

    panel.mount().await;

    let state = panel.state();
    assert_eq!(state.phase, FetchPhase::Loaded);
    assert!(state.error.is_none());
    assert!(!state.loading);

    let selected = state.selected_conditions.expect("selected conditions loaded");
    assert_eq!(selected.temperature_c, 21.5);
    let local = state.local_conditions.expect("local conditions loaded");
    assert_eq!(local.weather_code, 3);
    assert!(state.times_by_city.contains_key("Warsaw"));
    assert!(state.local_time.is_some());
}
