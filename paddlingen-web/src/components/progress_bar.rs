use crate::i18n::{t, tr};
use paddlingen_core::BookingProgress;
use std::collections::BTreeMap;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub booked: u32,
    pub total: u32,
    pub on_book: Callback<()>,
}

/// Booked-canoes bar plus the button that opens the booking dialog.
#[function_component(ProgressBar)]
pub fn progress_bar(props: &Props) -> Html {
    let progress = BookingProgress::new(props.booked, props.total);
    let full = progress.is_fully_booked();
    let bar_style = format!(
        "width: {}; background-color: {};",
        progress.width(),
        progress.color()
    );

    let booked = props.booked.to_string();
    let total = props.total.to_string();
    let mut vars = BTreeMap::new();
    vars.insert("booked", booked.as_str());
    vars.insert("total", total.as_str());

    let on_click = {
        let cb = props.on_book.clone();
        Callback::from(move |_: MouseEvent| {
            if !full {
                cb.emit(());
            }
        })
    };

    html! {
        <div class="booking-progress">
            <div class="progress-container" role="progressbar"
                aria-valuemin="0"
                aria-valuemax={total.clone()}
                aria-valuenow={booked.clone()}
            >
                <div id="progressBar" class="progress-bar" style={bar_style}></div>
                <span id="progressText" class="progress-text">{ tr("progress.booked", Some(&vars)) }</span>
            </div>
            <button
                id="bookBtn"
                type="button"
                disabled={full}
                aria-disabled={if full { "true" } else { "false" }}
                onclick={on_click}
            >
                { if full { t("progress.full") } else { t("progress.book") } }
            </button>
        </div>
    }
}
