//! Booking progress bar math
use crate::constants::{HUE_END, HUE_START};

/// Everything the progress bar and the book button need to render.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BookingProgress {
    pub booked: u32,
    pub total: u32,
}

impl BookingProgress {
    #[must_use]
    pub const fn new(booked: u32, total: u32) -> Self {
        Self { booked, total }
    }

    /// Fill level in `0.0..=100.0`. An event with no canoes reads as full.
    #[must_use]
    pub fn percent(&self) -> f64 {
        if self.total == 0 {
            return 100.0;
        }
        (f64::from(self.booked) / f64::from(self.total) * 100.0).clamp(0.0, 100.0)
    }

    /// Hue interpolated from green at 0% to red at 100%.
    #[must_use]
    pub fn hue(&self) -> f64 {
        HUE_START + (HUE_END - HUE_START) * (self.percent() / 100.0)
    }

    /// CSS colour for the bar background.
    #[must_use]
    pub fn color(&self) -> String {
        format!("hsl({}, 100%, 50%)", trim_float(self.hue()))
    }

    /// CSS width for the bar fill.
    #[must_use]
    pub fn width(&self) -> String {
        format!("{}%", trim_float(self.percent()))
    }

    #[must_use]
    pub const fn is_fully_booked(&self) -> bool {
        self.booked >= self.total
    }

    #[must_use]
    pub const fn remaining(&self) -> u32 {
        self.total.saturating_sub(self.booked)
    }
}

/// Render whole numbers without a trailing `.0`.
fn trim_float(value: f64) -> String {
    let rounded = (value * 100.0).round() / 100.0;
    if rounded.fract() == 0.0 {
        format!("{rounded:.0}")
    } else {
        rounded.to_string()
    }
}
