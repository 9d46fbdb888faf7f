//! Timezone-corrected clock rendering.

use chrono::{DateTime, Duration, Utc};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::WeatherError;

/// Hours added to the wall clock before formatting. Inherited from the
/// original deployment, where it compensated for one specific host clock;
/// almost certainly wrong elsewhere. Kept overridable via [`crate::Config`]
/// rather than baked into the formatter.
pub const DEFAULT_CORRECTION_HOURS: i64 = 3;

/// Display locale for formatted times.
///
/// Both supported locales render 24-hour `HH:MM` with the same digits and
/// separator; the knob exists so the convention stays configuration
/// instead of a constant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    Pl,
    En,
}

impl Locale {
    pub fn as_str(self) -> &'static str {
        match self {
            Locale::Pl => "pl",
            Locale::En => "en",
        }
    }

    fn hour_minute_pattern(self) -> &'static str {
        "%H:%M"
    }
}

impl FromStr for Locale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pl" => Ok(Locale::Pl),
            "en" => Ok(Locale::En),
            other => Err(format!("unknown locale '{other}', expected 'pl' or 'en'")),
        }
    }
}

/// Renders "now" as a localized `HH:MM` string in a target timezone,
/// after applying the fixed hour correction.
#[derive(Debug, Clone, Copy)]
pub struct TimeFormatter {
    pub correction_hours: i64,
    pub locale: Locale,
}

impl Default for TimeFormatter {
    fn default() -> Self {
        Self {
            correction_hours: DEFAULT_CORRECTION_HOURS,
            locale: Locale::default(),
        }
    }
}

impl TimeFormatter {
    pub fn new(correction_hours: i64, locale: Locale) -> Self {
        Self { correction_hours, locale }
    }

    /// Format the current wall-clock moment in `timezone_id`.
    pub fn format_now(&self, timezone_id: &str) -> Result<String, WeatherError> {
        self.format_at(Utc::now(), timezone_id)
    }

    /// Format a given instant in `timezone_id`. Deterministic; the entry
    /// point for anything that needs a frozen clock.
    pub fn format_at(
        &self,
        instant: DateTime<Utc>,
        timezone_id: &str,
    ) -> Result<String, WeatherError> {
        let tz = Tz::from_str(timezone_id)
            .map_err(|_| WeatherError::Timezone(timezone_id.to_string()))?;
        let corrected = instant + Duration::hours(self.correction_hours);
        Ok(corrected
            .with_timezone(&tz)
            .format(self.locale.hour_minute_pattern())
            .to_string())
    }
}
