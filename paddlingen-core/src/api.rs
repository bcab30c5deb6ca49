//! Wire types for the booking-count endpoint
use serde::{Deserialize, Serialize};
use std::fmt::Display;

pub const BOOKING_COUNT_PATH: &str = "/api/booking-count";

/// Body of `GET /api/booking-count`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingCount {
    pub count: u32,
}

/// Booked canoes to display, substituting zero for any failed fetch.
pub fn resolve_booking_count<E: Display>(result: Result<BookingCount, E>) -> u32 {
    result.map_or_else(
        |err| {
            log::warn!("booking count unavailable, showing zero: {err}");
            0
        },
        |body| body.count,
    )
}
