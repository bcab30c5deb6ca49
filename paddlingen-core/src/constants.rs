//! Defaults for the event page.
//!
//! The embedded event asset overrides these; they remain the values used when
//! the asset is missing a field or fails to parse.

/// Price of one canoe in whole kronor.
pub const PRICE_PER_CANOE: u32 = 900;
/// Canoes available for the whole event.
pub const TOTAL_CANOES: u32 = 50;
/// Upper bound offered by the quantity selector in a single booking.
pub const MAX_CANOES_PER_BOOKING: u32 = 5;
/// Days before the event when the forecast becomes meaningful.
pub const FORECAST_LOOKAHEAD_DAYS: i64 = 14;
/// Event start in local time, `%Y-%m-%dT%H:%M:%S`.
pub const EVENT_DATE: &str = "2025-06-13T10:00:00";
pub const CURRENCY_LABEL: &str = "kr";

// Progress bar gradient endpoints, in HSL degrees.
pub(crate) const HUE_START: f64 = 120.0;
pub(crate) const HUE_END: f64 = 0.0;

// Gallery grid rows are nine cells wide.
pub(crate) const GRID_ROW_CELLS: usize = 9;

pub(crate) const MILLIS_PER_DAY: i64 = 1000 * 60 * 60 * 24;
