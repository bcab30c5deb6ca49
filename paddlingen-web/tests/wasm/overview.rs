use wasm_bindgen_test::*;
use yew::prelude::*;

use paddlingen_core::EventConfig;
use paddlingen_web::components::overview_panel::OverviewPanel;

use crate::{click, find, mount_root, press_key, settle};

#[function_component(OverviewHarness)]
fn overview_harness() -> Html {
    let open = use_state(|| true);
    let on_close = {
        let open = open.clone();
        Callback::from(move |()| open.set(false))
    };
    html! {
        <OverviewPanel
            open={*open}
            config={EventConfig::default_config()}
            booked={10}
            {on_close}
        />
    }
}

fn is_scrolled(root: &web_sys::Element) -> bool {
    find(root, "#overviewPanel")
        .expect("panel stays mounted")
        .class_list()
        .contains("scrolled")
}

async fn mount_overview() -> (yew::AppHandle<OverviewHarness>, web_sys::Element) {
    paddlingen_web::i18n::set_lang("sv");
    let root = mount_root();
    let handle = yew::Renderer::<OverviewHarness>::with_root(root.clone()).render();
    settle().await;
    (handle, root)
}

#[wasm_bindgen_test]
async fn escape_slides_panel_out() {
    let (handle, root) = mount_overview().await;
    assert!(is_scrolled(&root));

    let panel = find(&root, "#overviewPanel").expect("panel");
    press_key(&panel, "Enter");
    settle().await;
    assert!(is_scrolled(&root));

    press_key(&panel, "Escape");
    settle().await;
    assert!(!is_scrolled(&root));

    handle.destroy();
    root.remove();
}

#[wasm_bindgen_test]
async fn only_backdrop_clicks_close_panel() {
    let (handle, root) = mount_overview().await;

    click(&root, ".overview-table");
    settle().await;
    assert!(is_scrolled(&root));

    click(&root, "#overviewPanel");
    settle().await;
    assert!(!is_scrolled(&root));

    handle.destroy();
    root.remove();
}
