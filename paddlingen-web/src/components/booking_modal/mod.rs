mod handlers;
mod name_fields;

pub use handlers::{BookingAction, apply_action, parse_count};
pub use name_fields::NameFields;

use crate::components::modal::Modal;
use crate::i18n::{t, tr};
use paddlingen_core::{BookingController, BookingRequest};
use std::collections::BTreeMap;
use wasm_bindgen::JsCast;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub controller: BookingController,
    /// Quantities offered by the selector, ascending.
    pub counts: Vec<u32>,
    #[prop_or(AttrValue::from("kr"))]
    pub currency: AttrValue,
    pub on_action: Callback<BookingAction>,
    /// Receives the hand-off once the gate is open and the form is submitted.
    pub on_submit: Callback<BookingRequest>,
}

/// "Totalt: 2700 kr (900 kr per kanot)" in the active locale.
///
/// Amounts are plain integers in every locale, never digit-grouped.
#[must_use]
pub fn price_label(total: u64, unit: u32, currency: &str) -> String {
    let total = total.to_string();
    let unit = unit.to_string();
    let mut vars = BTreeMap::new();
    vars.insert("total", total.as_str());
    vars.insert("unit", unit.as_str());
    vars.insert("currency", currency);
    tr("booking.price", Some(&vars))
}

#[function_component(BookingModal)]
pub fn booking_modal(props: &Props) -> Html {
    let controller = &props.controller;
    let session = controller.session();
    let gate = controller.gate();
    let selected = session.item_count();

    let on_close = {
        let cb = props.on_action.clone();
        Callback::from(move |()| cb.emit(BookingAction::Close))
    };
    let on_cancel = {
        let cb = props.on_action.clone();
        Callback::from(move |_: MouseEvent| cb.emit(BookingAction::Close))
    };
    let on_count = {
        let cb = props.on_action.clone();
        Callback::from(move |e: Event| {
            if let Some(sel) = e
                .target()
                .and_then(|t| t.dyn_into::<web_sys::HtmlSelectElement>().ok())
            {
                cb.emit(BookingAction::SetCount(parse_count(&sel.value())));
            }
        })
    };
    let on_submit = {
        let cb = props.on_submit.clone();
        let controller = controller.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            match controller.submit() {
                Ok(request) => cb.emit(request),
                Err(err) => log::warn!("booking not submitted: {err}"),
            }
        })
    };

    html! {
        <Modal
            id="bookingModal"
            open={controller.is_open()}
            title={t("booking.title")}
            on_close={on_close}
            return_focus_id={AttrValue::from("bookBtn")}
        >
            <form id="bookingForm" onsubmit={on_submit}>
                <label for="canoeCount">{ t("booking.count_label") }</label>
                <select id="canoeCount" name="canoeCount" onchange={on_count}>
                    { for props.counts.iter().map(|n| html! {
                        <option value={n.to_string()} selected={*n == selected}>{ n.to_string() }</option>
                    }) }
                </select>
                <NameFields fields={session.fields().to_vec()} on_action={props.on_action.clone()} />
                <p id="priceInfo">
                    { price_label(controller.total_price(), controller.unit_price(), &props.currency) }
                </p>
                <div class="modal-actions">
                    <button
                        type="button"
                        id="cancelBooking"
                        disabled={!gate.cancel_enabled}
                        onclick={on_cancel}
                    >
                        { t("booking.cancel") }
                    </button>
                    <button type="submit" id="confirmBooking" disabled={!gate.submit_enabled}>
                        { t("booking.confirm") }
                    </button>
                </div>
            </form>
        </Modal>
    }
}
