//! Countdown and forecast window rules for the weather widget
use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

use crate::constants::{FORECAST_LOOKAHEAD_DAYS, MILLIS_PER_DAY};

/// Forecast for the event day as served by the forecast endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Forecast {
    pub icon: String,
    pub temperature: f64,
    pub rain_chance: f64,
}

/// Body of `GET /api/forecast`: either a forecast or an error message.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum ForecastPayload {
    Ready(Forecast),
    Failed { error: String },
}

/// What the widget shows in place of the forecast block.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ForecastDisplay {
    /// Request in flight.
    #[default]
    Pending,
    Ready(Forecast),
    /// Static "try again closer to the date" message.
    Unavailable,
}

/// Collapse a forecast fetch into what the widget can show.
///
/// Failures never propagate; they degrade to [`ForecastDisplay::Unavailable`].
pub fn resolve_forecast<E: Display>(result: Result<ForecastPayload, E>) -> ForecastDisplay {
    match result {
        Ok(ForecastPayload::Ready(forecast)) => ForecastDisplay::Ready(forecast),
        Ok(ForecastPayload::Failed { error }) => {
            log::warn!("forecast service reported an error: {error}");
            ForecastDisplay::Unavailable
        }
        Err(err) => {
            log::warn!("forecast request failed: {err}");
            ForecastDisplay::Unavailable
        }
    }
}

/// Whole days until the event, rounded up.
///
/// Anything later today counts as one day; a past event yields zero or less.
#[must_use]
pub fn days_until(event: NaiveDateTime, now: NaiveDateTime) -> i64 {
    let diff_ms = (event - now).num_milliseconds();
    -(-diff_ms).div_euclid(MILLIS_PER_DAY)
}

/// Whether the widget shows a countdown or the forecast itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WeatherStatus {
    Countdown { days_until_open: i64 },
    ForecastOpen,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ForecastWindow {
    pub lookahead_days: i64,
}

impl Default for ForecastWindow {
    fn default() -> Self {
        Self {
            lookahead_days: FORECAST_LOOKAHEAD_DAYS,
        }
    }
}

impl ForecastWindow {
    #[must_use]
    pub const fn new(lookahead_days: i64) -> Self {
        Self { lookahead_days }
    }

    #[must_use]
    pub fn status(&self, event: NaiveDateTime, now: NaiveDateTime) -> WeatherStatus {
        let diff_days = days_until(event, now);
        if diff_days > self.lookahead_days {
            WeatherStatus::Countdown {
                days_until_open: diff_days - self.lookahead_days,
            }
        } else {
            WeatherStatus::ForecastOpen
        }
    }
}

/// Path of the forecast endpoint for the given event day.
#[must_use]
pub fn forecast_path(day: NaiveDate) -> String {
    format!("/api/forecast?date={}", day.format("%Y-%m-%d"))
}
