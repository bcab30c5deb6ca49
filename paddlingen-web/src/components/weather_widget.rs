use crate::i18n::{fmt_date_long, fmt_number, t, tr};
use chrono::NaiveDateTime;
use paddlingen_core::{ForecastDisplay, ForecastWindow, WeatherStatus};
use std::collections::BTreeMap;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub event_date: NaiveDateTime,
    pub now: NaiveDateTime,
    pub window: ForecastWindow,
    pub forecast: ForecastDisplay,
}

fn countdown(days_until_open: i64) -> Html {
    let days = days_until_open.to_string();
    let mut vars = BTreeMap::new();
    vars.insert("count", days.as_str());
    html! {
        <p id="weatherStatus" class="weather-status">
            { t("weather.countdown") }
            {" "}
            <span id="daysUntil">{ days.clone() }</span>
            {" "}
            { tr("weather.days", Some(&vars)) }
        </p>
    }
}

fn forecast_block(forecast: &ForecastDisplay) -> Html {
    let body = match forecast {
        ForecastDisplay::Pending => html! {
            <p class="weather-note">{ t("weather.loading") }</p>
        },
        ForecastDisplay::Unavailable => html! {
            <p class="weather-note">{ t("weather.unavailable") }</p>
        },
        ForecastDisplay::Ready(data) => html! {
            <div class="weather-details">
                <span id="weatherIcon" class="weather-icon">{ data.icon.clone() }</span>
                <span class="weather-temp">
                    { t("weather.temperature") }{": "}
                    <span id="temperature">{ fmt_number(data.temperature) }</span>{"°C"}
                </span>
                <span class="weather-rain">
                    { t("weather.rain") }{": "}
                    <span id="rainChance">{ fmt_number(data.rain_chance) }</span>{"%"}
                </span>
            </div>
        },
    };
    html! {
        <div id="widgetForecast" class="widget-forecast" style="display: block">
            { body }
        </div>
    }
}

/// Event date with either a countdown to the forecast or the forecast itself.
#[function_component(WeatherWidget)]
pub fn weather_widget(props: &Props) -> Html {
    let status = props.window.status(props.event_date, props.now);
    html! {
        <aside class="weather-widget" aria-live="polite">
            <h3>
                { t("weather.title") }{" "}
                <span id="eventDateText">{ fmt_date_long(props.event_date.date()) }</span>
            </h3>
            { match status {
                WeatherStatus::Countdown { days_until_open } => html! {
                    <>
                        { countdown(days_until_open) }
                        <div id="widgetForecast" class="widget-forecast" style="display: none"></div>
                    </>
                },
                WeatherStatus::ForecastOpen => forecast_block(&props.forecast),
            } }
        </aside>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use paddlingen_core::Forecast;
    use yew::LocalServerRenderer;

    fn at(text: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(text, "%Y-%m-%dT%H:%M:%S").unwrap()
    }

    fn render(now: &str, forecast: ForecastDisplay) -> String {
        crate::i18n::set_lang("sv");
        let props = Props {
            event_date: at("2025-06-13T10:00:00"),
            now: at(now),
            window: ForecastWindow::new(14),
            forecast,
        };
        block_on(LocalServerRenderer::<WeatherWidget>::with_props(props).render())
    }

    #[test]
    fn far_event_shows_countdown() {
        let html = render("2025-05-24T10:00:00", ForecastDisplay::Pending);
        assert!(html.contains("Prognos kommer vara tillgänglig om"), "{html}");
        assert!(html.contains(r#"<span id="daysUntil">6</span>"#));
        assert!(html.contains("dagar"));
        assert!(html.contains("display: none"));
        assert!(html.contains("2025-06-13"));
    }

    #[test]
    fn near_event_shows_forecast() {
        let forecast = ForecastDisplay::Ready(Forecast {
            icon: "☀️".into(),
            temperature: 22.0,
            rain_chance: 10.0,
        });
        let html = render("2025-06-10T10:00:00", forecast);
        assert!(!html.contains("weatherStatus"));
        assert!(html.contains("☀️"));
        assert!(html.contains(r#"<span id="temperature">22</span>"#), "{html}");
        assert!(html.contains(r#"<span id="rainChance">10</span>"#));
    }

    #[test]
    fn failed_forecast_shows_fallback_message() {
        let html = render("2025-06-10T10:00:00", ForecastDisplay::Unavailable);
        assert!(html.contains("Försök igen närmare datumet."));
    }
}
