use thiserror::Error;

/// Failure taxonomy for the panel.
///
/// Controllers collapse every externally-triggerable variant into the
/// single user-facing `error` field of the view state; the variants exist
/// so callers and tests can still tell the cases apart.
#[derive(Debug, Error)]
pub enum WeatherError {
    /// Registry misuse: the name is not one of the fixed cities.
    #[error("unknown city '{0}'")]
    UnknownCity(String),

    /// The forecast service could not be reached.
    #[error("failed to reach the forecast service: {0}")]
    Network(#[from] reqwest::Error),

    /// The forecast service answered with a non-success status.
    #[error("forecast request failed with status {status}: {body}")]
    Api {
        status: reqwest::StatusCode,
        body: String,
    },

    /// The forecast response body was not the JSON we expect.
    #[error("failed to parse forecast response: {0}")]
    Parse(#[from] serde_json::Error),

    /// The service returned a timezone identifier the tz database rejects.
    #[error("invalid timezone identifier '{0}'")]
    Timezone(String),

    /// The environment exposes no geolocation capability at all.
    #[error("geolocation is not available in this environment")]
    GeolocationUnavailable,

    /// Geolocation exists but could not resolve a position.
    #[error("could not resolve the current position: {0}")]
    Geolocation(String),
}
