use wasm_bindgen_test::*;

use paddlingen_web::app::App;

use crate::{click, count, find, mount_root, press_key, settle, text_of};

#[wasm_bindgen_test]
async fn lightbox_browses_the_rendered_grid() {
    paddlingen_web::i18n::set_lang("sv");
    let root = mount_root();
    let handle = yew::Renderer::<App>::with_root(root.clone()).render();
    settle().await;

    let section = find(&root, "#showPhotos2023")
        .and_then(|button| button.closest(".year-section").ok().flatten())
        .expect("2023 section");
    let cells = count(&section, ".grid-cell");
    assert_eq!(cells, 9);

    click(&root, "#showPhotos2023");
    settle().await;
    assert_eq!(text_of(&root, ".gallery-counter"), format!("1 / {cells}"));

    let first_cell = find(&section, ".grid-cell")
        .and_then(|cell| cell.get_attribute("style"))
        .unwrap_or_default();
    let shown = find(&root, ".gallery-image")
        .and_then(|img| img.get_attribute("src"))
        .expect("image shown");
    assert!(first_cell.contains(&shown), "{first_cell} vs {shown}");

    let modal = find(&root, "#galleryModal").expect("lightbox open");
    press_key(&modal, "ArrowLeft");
    settle().await;
    assert_eq!(text_of(&root, ".gallery-counter"), format!("{cells} / {cells}"));

    press_key(&modal, "Escape");
    settle().await;
    assert!(find(&root, "#galleryModal").is_none());

    handle.destroy();
    root.remove();
}

#[wasm_bindgen_test]
async fn header_buttons_show_one_dialog_at_a_time() {
    paddlingen_web::i18n::set_lang("sv");
    let root = mount_root();
    let handle = yew::Renderer::<App>::with_root(root.clone()).render();
    settle().await;

    click(&root, "#faqBtn");
    settle().await;
    assert!(find(&root, "#faqModal").is_some());

    click(&root, "#contactBtn");
    settle().await;
    assert!(find(&root, "#contactModal").is_some());
    assert!(find(&root, "#faqModal").is_none());

    handle.destroy();
    root.remove();
}
