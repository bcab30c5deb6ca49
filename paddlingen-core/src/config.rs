//! Event configuration loaded from the embedded asset
use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;
use thiserror::Error;

use crate::constants::{
    CURRENCY_LABEL, EVENT_DATE, FORECAST_LOOKAHEAD_DAYS, MAX_CANOES_PER_BOOKING, PRICE_PER_CANOE,
    TOTAL_CANOES,
};
use crate::forecast::ForecastWindow;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("JSON parsing error: {0}")]
    Parse(#[from] serde_json::Error),
}

fn default_event_date() -> NaiveDateTime {
    NaiveDateTime::parse_from_str(EVENT_DATE, "%Y-%m-%dT%H:%M:%S").unwrap_or_default()
}

const fn default_unit_price() -> u32 {
    PRICE_PER_CANOE
}

const fn default_total_canoes() -> u32 {
    TOTAL_CANOES
}

const fn default_max_per_booking() -> u32 {
    MAX_CANOES_PER_BOOKING
}

const fn default_lookahead() -> i64 {
    FORECAST_LOOKAHEAD_DAYS
}

fn default_currency() -> String {
    CURRENCY_LABEL.to_string()
}

/// Settings for one paddling event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventConfig {
    #[serde(default = "default_event_date")]
    pub event_date: NaiveDateTime,
    #[serde(default = "default_unit_price")]
    pub unit_price: u32,
    #[serde(default = "default_total_canoes")]
    pub total_canoes: u32,
    #[serde(default = "default_max_per_booking")]
    pub max_canoes_per_booking: u32,
    #[serde(default = "default_lookahead")]
    pub forecast_lookahead_days: i64,
    #[serde(default = "default_currency")]
    pub currency_label: String,
}

impl Default for EventConfig {
    fn default() -> Self {
        Self::default_config()
    }
}

impl EventConfig {
    #[must_use]
    pub fn default_config() -> Self {
        Self {
            event_date: default_event_date(),
            unit_price: PRICE_PER_CANOE,
            total_canoes: TOTAL_CANOES,
            max_canoes_per_booking: MAX_CANOES_PER_BOOKING,
            forecast_lookahead_days: FORECAST_LOOKAHEAD_DAYS,
            currency_label: CURRENCY_LABEL.to_string(),
        }
    }

    /// Parse the event asset.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] when the JSON is malformed.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Parse the event asset, falling back to the built-in defaults.
    #[must_use]
    pub fn from_json_or_default(json: &str) -> Self {
        Self::from_json(json).unwrap_or_else(|err| {
            log::error!("Failed to load event config, using defaults: {err}");
            Self::default_config()
        })
    }

    #[must_use]
    pub fn event_day(&self) -> NaiveDate {
        self.event_date.date()
    }

    #[must_use]
    pub const fn forecast_window(&self) -> ForecastWindow {
        ForecastWindow::new(self.forecast_lookahead_days)
    }

    /// Quantities the selector offers once `booked` canoes are taken.
    #[must_use]
    pub fn selectable_counts(&self, booked: u32) -> RangeInclusive<u32> {
        let remaining = self.total_canoes.saturating_sub(booked);
        0..=self.max_canoes_per_booking.min(remaining)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_take_defaults() {
        let cfg = EventConfig::from_json(r#"{"unitPrice": 750}"#).unwrap();
        assert_eq!(cfg.unit_price, 750);
        assert_eq!(cfg.total_canoes, TOTAL_CANOES);
        assert_eq!(cfg.event_date, default_event_date());
    }

    #[test]
    fn malformed_json_falls_back() {
        assert!(EventConfig::from_json("{").is_err());
        assert_eq!(
            EventConfig::from_json_or_default("{"),
            EventConfig::default_config()
        );
    }

    #[test]
    fn selector_range_shrinks_near_capacity() {
        let cfg = EventConfig::default_config();
        assert_eq!(cfg.selectable_counts(0), 0..=5);
        assert_eq!(cfg.selectable_counts(48), 0..=2);
        assert_eq!(cfg.selectable_counts(60), 0..=0);
    }

    #[test]
    fn event_date_parses_local_timestamp() {
        let cfg = EventConfig::from_json(r#"{"eventDate": "2026-06-12T09:30:00"}"#).unwrap();
        assert_eq!(cfg.event_day(), NaiveDate::from_ymd_opt(2026, 6, 12).unwrap());
    }
}
