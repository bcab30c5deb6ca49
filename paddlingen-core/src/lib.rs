//! Paddlingen core
//!
//! Platform-agnostic logic behind the Paddlingen canoe event page: the booking
//! form state machine, progress bar math, forecast window, gallery cycling and
//! event configuration. Nothing here touches the DOM.

pub mod api;
pub mod booking;
pub mod config;
pub mod constants;
pub mod forecast;
pub mod gallery;
pub mod modals;
pub mod progress;

pub use api::{BOOKING_COUNT_PATH, BookingCount, resolve_booking_count};
pub use booking::{
    BookingController, BookingError, BookingRequest, BookingSession, FormState, NameField,
    NamePair, SubmitGate,
};
pub use config::{ConfigError, EventConfig};
pub use forecast::{
    Forecast, ForecastDisplay, ForecastPayload, ForecastWindow, WeatherStatus, days_until,
    forecast_path, resolve_forecast,
};
pub use gallery::{Gallery, GallerySection, grid_capacity, select_grid_images};
pub use modals::{FaqTab, KeyCommand, ModalId, ModalSet};
pub use progress::BookingProgress;
