use crate::components::modal::Modal;
use crate::i18n::{t, tr};
use paddlingen_core::{Gallery, KeyCommand};
use std::collections::BTreeMap;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub gallery: Gallery,
    pub on_close: Callback<()>,
    pub on_navigate: Callback<KeyCommand>,
    /// Button to refocus once the lightbox closes.
    #[prop_or_default]
    pub return_focus_id: Option<AttrValue>,
}

/// Lightbox cycling through one year's photos.
#[function_component(GalleryModal)]
pub fn gallery_modal(props: &Props) -> Html {
    let gallery = &props.gallery;
    let arrows = gallery.shows_arrows();

    let on_prev = {
        let nav = props.on_navigate.clone();
        Callback::from(move |_: MouseEvent| nav.emit(KeyCommand::Previous))
    };
    let on_next = {
        let nav = props.on_navigate.clone();
        Callback::from(move |_: MouseEvent| nav.emit(KeyCommand::Next))
    };

    let position = (gallery.index() + 1).to_string();
    let mut vars = BTreeMap::new();
    vars.insert("index", position.as_str());
    let alt = tr("gallery.image_alt", Some(&vars));

    let arrow_style = if arrows { "" } else { "display: none" };

    html! {
        <Modal
            id="galleryModal"
            open={gallery.is_open()}
            title={t("gallery.title")}
            on_close={props.on_close.clone()}
            on_navigate={Some(props.on_navigate.clone())}
            return_focus_id={props.return_focus_id.clone()}
            class={classes!("gallery-modal")}
        >
            <div class="gallery-stage">
                <button type="button" class="gallery-prev" style={arrow_style}
                    aria-label={t("gallery.prev")} onclick={on_prev}>
                    {"‹"}
                </button>
                if let Some(src) = gallery.current() {
                    <img class="gallery-image" src={src.to_string()} alt={alt} />
                }
                <button type="button" class="gallery-next" style={arrow_style}
                    aria-label={t("gallery.next")} onclick={on_next}>
                    {"›"}
                </button>
            </div>
            <span class="gallery-counter">{ gallery.counter() }</span>
        </Modal>
    }
}
