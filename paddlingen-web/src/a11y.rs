// Accessibility helpers

use wasm_bindgen::JsCast;

const FOCUSABLE_QUERY: &str =
    "button:not([disabled]), [href], input, select, textarea, [tabindex]:not([tabindex='-1'])";

/// Id of the polite live region used for announcements.
pub const STATUS_REGION_ID: &str = "page-status";

/// Update the live region so screen readers announce `msg`.
pub fn set_status(msg: &str) {
    if let Some(node) = web_sys::window()
        .and_then(|win| win.document())
        .and_then(|doc| doc.get_element_by_id(STATUS_REGION_ID))
    {
        node.set_text_content(Some(msg));
    }
}

/// Move focus to the first focusable element inside `container_id`.
pub fn trap_focus_in(container_id: &str) {
    let Some(container) = web_sys::window()
        .and_then(|win| win.document())
        .and_then(|doc| doc.get_element_by_id(container_id))
    else {
        return;
    };
    if let Some(first) = container
        .query_selector(FOCUSABLE_QUERY)
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok())
    {
        let _ = first.focus();
    }
}

/// Return focus to the element that opened a dialog.
pub fn restore_focus(element_id: &str) {
    if let Some(el) = web_sys::window()
        .and_then(|win| win.document())
        .and_then(|doc| doc.get_element_by_id(element_id))
        .and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok())
    {
        let _ = el.focus();
    }
}
