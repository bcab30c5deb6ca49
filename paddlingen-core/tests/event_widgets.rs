use chrono::NaiveDateTime;
use paddlingen_core::{
    BookingCount, BookingProgress, EventConfig, Forecast, ForecastDisplay, ForecastPayload,
    WeatherStatus, resolve_booking_count, resolve_forecast,
};

#[test]
fn failed_count_fetch_shows_zero_of_total() {
    let cfg = EventConfig::default_config();
    let fetched: Result<BookingCount, String> = Err("TypeError: Failed to fetch".into());
    let progress = BookingProgress::new(resolve_booking_count(fetched), cfg.total_canoes);
    assert_eq!(progress.booked, 0);
    assert_eq!(progress.width(), "0%");
    assert_eq!(progress.color(), "hsl(120, 100%, 50%)");
    assert!(!progress.is_fully_booked());
}

#[test]
fn nearly_full_event_keeps_button_enabled() {
    let progress = BookingProgress::new(49, 50);
    assert!(!progress.is_fully_booked());
    assert_eq!(EventConfig::default_config().selectable_counts(49), 0..=1);
}

#[test]
fn widget_switches_from_countdown_to_forecast() {
    let cfg = EventConfig::default_config();
    let window = cfg.forecast_window();
    let far = NaiveDateTime::parse_from_str("2025-05-01T08:00:00", "%Y-%m-%dT%H:%M:%S").unwrap();
    let near = NaiveDateTime::parse_from_str("2025-06-10T08:00:00", "%Y-%m-%dT%H:%M:%S").unwrap();

    assert!(matches!(
        window.status(cfg.event_date, far),
        WeatherStatus::Countdown { days_until_open } if days_until_open == 30
    ));
    assert_eq!(window.status(cfg.event_date, near), WeatherStatus::ForecastOpen);
}

#[test]
fn forecast_body_is_shown_as_is() {
    let body: Result<ForecastPayload, String> = serde_json::from_str(
        r#"{"icon":"🌧️","temperature":14.5,"rainChance":80}"#,
    )
    .map_err(|e| e.to_string());
    assert_eq!(
        resolve_forecast(body),
        ForecastDisplay::Ready(Forecast {
            icon: "🌧️".into(),
            temperature: 14.5,
            rain_chance: 80.0,
        })
    );
}
