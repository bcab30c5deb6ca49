use crate::components::modal::Modal;
use crate::i18n::t;
use paddlingen_core::ModalId;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub open: bool,
    pub on_close: Callback<()>,
}

#[function_component(ContactModal)]
pub fn contact_modal(props: &Props) -> Html {
    html! {
        <Modal
            id={ModalId::Contact.dom_id()}
            open={props.open}
            title={t("contact.title")}
            on_close={props.on_close.clone()}
            return_focus_id={Some(AttrValue::from("contactBtn"))}
        >
            <div class="modal-body">
                <p>{ t("contact.body") }</p>
            </div>
        </Modal>
    }
}
