use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::HtmlSelectElement;
use yew::prelude::*;

use paddlingen_core::BookingController;
use paddlingen_web::components::booking_modal::{BookingAction, BookingModal, apply_action};

use crate::{click, count, find, fire_change, mount_root, press_key, settle, text_of};

#[function_component(BookingHarness)]
fn booking_harness() -> Html {
    let controller =
        use_state(|| apply_action(&BookingController::new(900), BookingAction::Open));
    let on_action = {
        let controller = controller.clone();
        Callback::from(move |action| controller.set(apply_action(&controller, action)))
    };
    html! {
        <BookingModal
            controller={(*controller).clone()}
            counts={(0..=5).collect::<Vec<u32>>()}
            {on_action}
            on_submit={Callback::noop()}
        />
    }
}

async fn mount_booking() -> (yew::AppHandle<BookingHarness>, web_sys::Element) {
    paddlingen_web::i18n::set_lang("sv");
    let root = mount_root();
    let handle = yew::Renderer::<BookingHarness>::with_root(root.clone()).render();
    settle().await;
    (handle, root)
}

fn select_count(root: &web_sys::Element, value: &str) {
    let select: HtmlSelectElement = find(root, "#canoeCount")
        .expect("count selector")
        .dyn_into()
        .expect("select element");
    select.set_value(value);
    fire_change(&select);
}

#[wasm_bindgen_test]
async fn count_change_rebuilds_fields_and_price() {
    let (handle, root) = mount_booking().await;
    assert_eq!(count(&root, ".canoe-field"), 0);
    assert_eq!(text_of(&root, "#priceInfo").trim(), "Totalt: 0 kr (900 kr per kanot)");

    select_count(&root, "3");
    settle().await;
    assert_eq!(count(&root, ".canoe-field"), 3);
    assert_eq!(text_of(&root, "#priceInfo").trim(), "Totalt: 2700 kr (900 kr per kanot)");

    select_count(&root, "1");
    settle().await;
    assert_eq!(count(&root, ".canoe-field"), 1);
    assert!(find(&root, "#canoe2_fname").is_none());
    assert_eq!(text_of(&root, "#priceInfo").trim(), "Totalt: 900 kr (900 kr per kanot)");

    handle.destroy();
    root.remove();
}

#[wasm_bindgen_test]
async fn backdrop_click_closes_but_content_click_does_not() {
    let (handle, root) = mount_booking().await;

    click(&root, "#bookingModal .modal-content");
    settle().await;
    assert!(find(&root, "#bookingModal").is_some());

    click(&root, "#bookingModal");
    settle().await;
    assert!(find(&root, "#bookingModal").is_none());

    handle.destroy();
    root.remove();
}

#[wasm_bindgen_test]
async fn escape_inside_form_closes_dialog() {
    let (handle, root) = mount_booking().await;
    let select = find(&root, "#canoeCount").expect("count selector");
    press_key(&select, "Escape");
    settle().await;
    assert!(find(&root, "#bookingModal").is_none());

    handle.destroy();
    root.remove();
}

#[wasm_bindgen_test]
async fn cancel_button_closes_dialog() {
    let (handle, root) = mount_booking().await;
    click(&root, "#cancelBooking");
    settle().await;
    assert!(find(&root, "#bookingForm").is_none());

    handle.destroy();
    root.remove();
}
