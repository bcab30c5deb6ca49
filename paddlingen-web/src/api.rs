//! Fetches against the two JSON endpoints the page depends on.
use crate::dom;
use chrono::NaiveDate;
use paddlingen_core::{
    BOOKING_COUNT_PATH, BookingCount, ForecastDisplay, ForecastPayload, forecast_path,
    resolve_booking_count, resolve_forecast,
};
use serde::de::DeserializeOwned;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Request failed: {0}")]
    Request(String),
    #[error("HTTP {status}: {status_text}")]
    Status { status: u16, status_text: String },
    #[error("JSON parsing error: {0}")]
    Parse(#[from] serde_json::Error),
}

#[allow(clippy::future_not_send)]
async fn fetch_json<T: DeserializeOwned>(url: &str) -> Result<T, ApiError> {
    let response = dom::fetch_response(url)
        .await
        .map_err(|err| ApiError::Request(dom::js_error_message(&err)))?;

    if !response.ok() {
        return Err(ApiError::Status {
            status: response.status(),
            status_text: response.status_text(),
        });
    }

    let text = dom::response_text(&response)
        .await
        .map_err(|err| ApiError::Request(dom::js_error_message(&err)))?;
    Ok(serde_json::from_str(&text)?)
}

/// `GET /api/booking-count`.
///
/// # Errors
/// Fails on network errors, non-2xx statuses and malformed bodies.
#[allow(clippy::future_not_send)]
pub async fn fetch_booking_count() -> Result<BookingCount, ApiError> {
    fetch_json(BOOKING_COUNT_PATH).await
}

/// `GET /api/forecast?date=YYYY-MM-DD`.
///
/// # Errors
/// Fails on network errors, non-2xx statuses and malformed bodies.
#[allow(clippy::future_not_send)]
pub async fn fetch_forecast(day: NaiveDate) -> Result<ForecastPayload, ApiError> {
    fetch_json(&forecast_path(day)).await
}

/// Source of the event's live data. The browser implementation talks HTTP.
#[allow(async_fn_in_trait)]
pub trait EventFeed {
    async fn booking_count(&self) -> Result<BookingCount, ApiError>;
    async fn forecast(&self, day: NaiveDate) -> Result<ForecastPayload, ApiError>;
}

pub struct HttpFeed;

impl EventFeed for HttpFeed {
    async fn booking_count(&self) -> Result<BookingCount, ApiError> {
        fetch_booking_count().await
    }

    async fn forecast(&self, day: NaiveDate) -> Result<ForecastPayload, ApiError> {
        fetch_forecast(day).await
    }
}

/// Booked canoes, or zero when the count cannot be fetched.
#[allow(clippy::future_not_send)]
pub async fn load_booking_count(feed: &impl EventFeed) -> u32 {
    resolve_booking_count(feed.booking_count().await)
}

/// Forecast for the event day, or the unavailable message on any failure.
#[allow(clippy::future_not_send)]
pub async fn load_forecast(feed: &impl EventFeed, day: NaiveDate) -> ForecastDisplay {
    resolve_forecast(feed.forecast(day).await)
}
