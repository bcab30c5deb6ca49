use crate::app::state::AppState;
use chrono::NaiveDateTime;
use paddlingen_core::{EventConfig, ForecastDisplay, WeatherStatus};
use yew::prelude::*;

/// Whether the forecast endpoint should be asked at all.
#[must_use]
pub fn wants_forecast(config: &EventConfig, now: NaiveDateTime) -> bool {
    config.forecast_window().status(config.event_date, now) == WeatherStatus::ForecastOpen
}

#[derive(Clone)]
#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
struct BootstrapHandles {
    config: EventConfig,
    now: NaiveDateTime,
    booked: UseStateHandle<u32>,
    forecast: UseStateHandle<ForecastDisplay>,
}

fn handles_from_state(app_state: &AppState) -> BootstrapHandles {
    BootstrapHandles {
        config: (*app_state.config).clone(),
        now: *app_state.now,
        booked: app_state.booked.clone(),
        forecast: app_state.forecast.clone(),
    }
}

#[cfg(target_arch = "wasm32")]
fn spawn_live_loads(handles: BootstrapHandles) {
    use crate::api::{HttpFeed, load_booking_count, load_forecast};

    let booked = handles.booked.clone();
    wasm_bindgen_futures::spawn_local(async move {
        booked.set(load_booking_count(&HttpFeed).await);
    });

    if wants_forecast(&handles.config, handles.now) {
        let day = handles.config.event_day();
        let forecast = handles.forecast;
        wasm_bindgen_futures::spawn_local(async move {
            forecast.set(load_forecast(&HttpFeed, day).await);
        });
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn spawn_live_loads(handles: BootstrapHandles) {
    log::debug!(
        "skipping live loads off-browser ({} canoes configured)",
        handles.config.total_canoes
    );
}

/// Kick off the booking-count and forecast requests once after mount.
#[hook]
pub fn use_bootstrap(app_state: &AppState) {
    let handles = handles_from_state(app_state);
    use_effect_with((), move |()| {
        spawn_live_loads(handles);
        || {}
    });
}
