#![cfg(target_arch = "wasm32")]

mod booking_dialog;
mod gallery;
mod overview;

use std::time::Duration;
use wasm_bindgen::JsCast;
use web_sys::{Element, Event, EventInit, HtmlElement, KeyboardEvent, KeyboardEventInit};

use paddlingen_web::dom;

wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

/// Fresh mount point appended to `<body>`.
pub fn mount_root() -> Element {
    let doc = dom::document();
    let root = doc.create_element("div").expect("create root");
    doc.body()
        .expect("document body")
        .append_child(&root)
        .expect("append root");
    root
}

/// Let the Yew scheduler flush pending renders.
pub async fn settle() {
    for _ in 0..3 {
        yew::platform::time::sleep(Duration::from_millis(0)).await;
    }
}

pub fn find(root: &Element, selector: &str) -> Option<Element> {
    root.query_selector(selector).expect("valid selector")
}

pub fn count(root: &Element, selector: &str) -> u32 {
    root.query_selector_all(selector)
        .expect("valid selector")
        .length()
}

pub fn text_of(root: &Element, selector: &str) -> String {
    find(root, selector)
        .and_then(|el| el.text_content())
        .unwrap_or_default()
}

pub fn click(root: &Element, selector: &str) {
    find(root, selector)
        .expect("element to click")
        .dyn_into::<HtmlElement>()
        .expect("html element")
        .click();
}

pub fn press_key(target: &Element, key: &str) {
    let init = KeyboardEventInit::new();
    init.set_key(key);
    init.set_bubbles(true);
    init.set_cancelable(true);
    let event = KeyboardEvent::new_with_keyboard_event_init_dict("keydown", &init)
        .expect("keyboard event");
    target.dispatch_event(&event).expect("dispatch keydown");
}

pub fn fire_change(target: &Element) {
    let init = EventInit::new();
    init.set_bubbles(true);
    let event = Event::new_with_event_init_dict("change", &init).expect("change event");
    target.dispatch_event(&event).expect("dispatch change");
}
