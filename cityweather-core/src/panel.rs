//! Panel controllers: city selection/refresh and local weather.
//!
//! Both flows share one [`ViewState`] owned by the [`Panel`]. Fetches run
//! as pure futures against the provider; their completions are applied to
//! the state by synchronous handlers, so writes are serialized through a
//! single owner even when the two mount-time fetches run concurrently.
//! A superseded request therefore cannot overwrite newer state with a
//! stale response.

use std::sync::Arc;

use crate::{
    error::WeatherError,
    locate::GeoLocator,
    model::{CurrentConditions, FetchPhase, ViewState},
    provider::ForecastProvider,
    registry,
    timefmt::TimeFormatter,
};

const FETCH_ERROR_MESSAGE: &str = "Could not fetch weather data.";
const LOCAL_FETCH_ERROR_MESSAGE: &str = "Could not fetch local weather.";
const GEOLOCATION_UNAVAILABLE_MESSAGE: &str = "Geolocation is not available on this device.";

/// Outcome of one fetch/format pass for either target. The formatted time
/// is optional: a timezone the tz database rejects only costs the clock
/// display, not the conditions.
type FetchOutcome = Result<(CurrentConditions, Option<String>), WeatherError>;

pub struct Panel {
    provider: Arc<dyn ForecastProvider>,
    locator: Arc<dyn GeoLocator>,
    formatter: TimeFormatter,
    state: ViewState,
}

impl Panel {
    pub fn new(
        provider: Arc<dyn ForecastProvider>,
        locator: Arc<dyn GeoLocator>,
        formatter: TimeFormatter,
        default_city: impl Into<String>,
    ) -> Self {
        Self {
            provider,
            locator,
            formatter,
            state: ViewState {
                selected_city: default_city.into(),
                ..ViewState::default()
            },
        }
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    /// Initial trigger when the view is created: the default-city fetch
    /// and the local-weather fetch start together, with no ordering
    /// guarantee between their completions.
    pub async fn mount(&mut self) {
        self.state.phase = FetchPhase::Loading;
        self.state.loading = true;
        self.state.error = None;

        let city = self.state.selected_city.clone();
        let (selected, local) = tokio::join!(self.fetch_city(&city), self.fetch_local());

        self.apply_selected(city, selected);
        self.apply_local(local);
    }

    /// Select a city and fetch its weather and local time.
    pub async fn select_city(&mut self, name: &str) {
        self.state.phase = FetchPhase::Loading;
        self.state.loading = true;
        self.state.error = None;

        let outcome = self.fetch_city(name).await;
        self.apply_selected(name.to_string(), outcome);
    }

    /// Re-fetch the currently selected city.
    pub async fn refresh(&mut self) {
        let city = self.state.selected_city.clone();
        self.select_city(&city).await;
    }

    /// Flip city-list visibility. Never touches fetch state.
    pub fn toggle_city_list(&mut self) {
        self.state.city_list_visible = !self.state.city_list_visible;
    }

    /// Fetch weather for the device position. Exposes no loading flag and
    /// leaves the city list alone; only the shared `error` field reports
    /// failures.
    pub async fn refresh_local(&mut self) {
        if !self.locator.available() {
            // Terminal, synchronously: nothing to wait for.
            self.state.error = Some(GEOLOCATION_UNAVAILABLE_MESSAGE.to_string());
            return;
        }

        let outcome = self.fetch_local().await;
        self.apply_local(outcome);
    }

    async fn fetch_city(&self, name: &str) -> FetchOutcome {
        let coord = registry::lookup(name)?;
        let observation = self
            .provider
            .fetch_current(coord.latitude, coord.longitude)
            .await?;
        let time = self.format_time(&observation.timezone, name);
        Ok((observation.conditions, time))
    }

    async fn fetch_local(&self) -> FetchOutcome {
        if !self.locator.available() {
            return Err(WeatherError::GeolocationUnavailable);
        }

        let position = self.locator.locate().await?;
        let observation = self
            .provider
            .fetch_current(position.latitude, position.longitude)
            .await?;
        let time = self.format_time(&observation.timezone, "local position");
        Ok((observation.conditions, time))
    }

    fn format_time(&self, timezone: &str, target: &str) -> Option<String> {
        match self.formatter.format_now(timezone) {
            Ok(time) => Some(time),
            Err(err) => {
                tracing::warn!(%err, target, "could not format local time");
                None
            }
        }
    }

    fn apply_selected(&mut self, name: String, outcome: FetchOutcome) {
        match outcome {
            Ok((conditions, time)) => {
                self.state.selected_conditions = Some(conditions);
                self.state.selected_city = name.clone();
                if let Some(time) = time {
                    self.state.times_by_city.insert(name, time);
                }
                self.state.phase = FetchPhase::Loaded;
            }
            Err(err) => {
                tracing::warn!(%err, city = %name, "selected-city fetch failed");
                self.state.error = Some(FETCH_ERROR_MESSAGE.to_string());
                self.state.phase = FetchPhase::Failed;
            }
        }

        self.state.loading = false;
        self.state.city_list_visible = false;
    }

    fn apply_local(&mut self, outcome: FetchOutcome) {
        match outcome {
            Ok((conditions, time)) => {
                self.state.local_conditions = Some(conditions);
                if let Some(time) = time {
                    self.state.local_time = Some(time);
                }
            }
            Err(WeatherError::GeolocationUnavailable) => {
                self.state.error = Some(GEOLOCATION_UNAVAILABLE_MESSAGE.to_string());
            }
            Err(err) => {
                tracing::warn!(%err, "local weather fetch failed");
                // Previously loaded local weather stays on screen.
                self.state.error = Some(LOCAL_FETCH_ERROR_MESSAGE.to_string());
            }
        }
    }
}
