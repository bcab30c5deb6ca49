use crate::a11y::{restore_focus, trap_focus_in};
use crate::dom::is_backdrop_click;
use crate::i18n::t;
use paddlingen_core::KeyCommand;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    /// DOM id of the backdrop container, e.g. `bookingModal`.
    pub id: AttrValue,
    pub open: bool,
    pub title: AttrValue,
    pub on_close: Callback<()>,
    /// Arrow-key navigation for dialogs that page through content.
    #[prop_or_default]
    pub on_navigate: Option<Callback<KeyCommand>>,
    #[prop_or_default]
    pub return_focus_id: Option<AttrValue>,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(Modal)]
pub fn modal(props: &Props) -> Html {
    let container_ref = use_node_ref();
    let prev_open = use_mut_ref(|| props.open);

    {
        let container_ref = container_ref.clone();
        let container_id = props.id.to_string();
        let return_focus = props.return_focus_id.clone();
        use_effect_with(
            (props.open, return_focus),
            move |(is_open, return_focus_id)| {
                let was_open = *prev_open.borrow();
                *prev_open.borrow_mut() = *is_open;
                if *is_open {
                    if let Some(el) = container_ref.cast::<web_sys::HtmlElement>() {
                        let _ = el.set_attribute("tabindex", "-1");
                        let _ = el.focus();
                    }
                    trap_focus_in(&container_id);
                } else if was_open && let Some(id) = return_focus_id.as_ref() {
                    restore_focus(id);
                }
                || {}
            },
        );
    }

    if !props.open {
        return Html::default();
    }

    let on_backdrop = {
        let cb = props.on_close.clone();
        Callback::from(move |e: MouseEvent| {
            if is_backdrop_click(&e) {
                cb.emit(());
            }
        })
    };
    let on_close_button = {
        let cb = props.on_close.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let on_keydown = {
        let cb = props.on_close.clone();
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |e: KeyboardEvent| match KeyCommand::from_key(&e.key()) {
            Some(KeyCommand::Close) => {
                e.prevent_default();
                cb.emit(());
            }
            Some(command) => {
                if let Some(nav) = on_navigate.as_ref() {
                    e.prevent_default();
                    nav.emit(command);
                }
            }
            None => {}
        })
    };

    let title_id = format!("{}-title", props.id);
    html! {
        <div
            id={props.id.clone()}
            class={classes!("modal", props.class.clone())}
            style="display: flex"
            role="presentation"
            onclick={on_backdrop}
            onkeydown={on_keydown}
            ref={container_ref}
        >
            <div class="modal-content" role="dialog" aria-modal="true" aria-labelledby={title_id.clone()}>
                <div class="modal-header">
                    <h2 id={title_id}>{ props.title.clone() }</h2>
                    <button type="button" class="modal-close" aria-label={t("ui.close")} onclick={on_close_button}>
                        {"×"}
                    </button>
                </div>
                { for props.children.iter() }
            </div>
        </div>
    }
}
