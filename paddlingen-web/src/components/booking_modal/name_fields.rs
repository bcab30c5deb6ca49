use super::handlers::BookingAction;
use crate::i18n::{t, tr};
use paddlingen_core::{NameField, NamePair};
use std::collections::BTreeMap;
use wasm_bindgen::JsCast;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub fields: Vec<NamePair>,
    pub on_action: Callback<BookingAction>,
}

fn input_callback(
    on_action: &Callback<BookingAction>,
    index: usize,
    field: NameField,
) -> Callback<InputEvent> {
    let cb = on_action.clone();
    Callback::from(move |e: InputEvent| {
        if let Some(input) = e
            .target()
            .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
        {
            cb.emit(BookingAction::SetName {
                index,
                field,
                value: input.value(),
            });
        }
    })
}

/// One labelled first/last name pair per selected canoe.
#[function_component(NameFields)]
pub fn name_fields(props: &Props) -> Html {
    let count = props.fields.len();
    html! {
        <div id="nameFieldsContainer">
            { for props.fields.iter().enumerate().map(|(slot, pair)| {
                let index = slot + 1;
                let first_id = format!("canoe{index}_fname");
                let last_id = format!("canoe{index}_lname");
                let index_str = index.to_string();
                let mut vars = BTreeMap::new();
                vars.insert("index", index_str.as_str());
                html! {
                    // Keyed by count too, so a quantity change rebuilds the inputs.
                    <div class="canoe-field" key={format!("{count}-{index}")}>
                        <label for={first_id.clone()}>
                            { tr("booking.canoe_label", Some(&vars)) }
                            <br />
                            { t("booking.canoe_hint") }
                        </label>
                        <div class="inputs">
                            <input
                                type="text"
                                id={first_id.clone()}
                                name={first_id}
                                placeholder={t("booking.first_name")}
                                required={true}
                                value={pair.first_name.clone()}
                                oninput={input_callback(&props.on_action, index, NameField::First)}
                            />
                            <input
                                type="text"
                                id={last_id.clone()}
                                name={last_id}
                                placeholder={t("booking.last_name")}
                                required={true}
                                value={pair.last_name.clone()}
                                oninput={input_callback(&props.on_action, index, NameField::Last)}
                            />
                        </div>
                    </div>
                }
            }) }
        </div>
    }
}
