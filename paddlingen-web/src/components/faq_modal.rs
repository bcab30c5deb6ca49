use crate::components::modal::Modal;
use crate::i18n::t;
use paddlingen_core::{FaqTab, ModalId};
use yew::prelude::*;

const QUESTION_KEYS: [&str; 3] = ["q1", "q2", "q3"];
const RULE_KEYS: [&str; 3] = ["r1", "r2", "r3"];

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub open: bool,
    pub active: FaqTab,
    pub on_tab: Callback<FaqTab>,
    pub on_close: Callback<()>,
}

fn tab_label(tab: FaqTab) -> String {
    t(&format!("faq.tabs.{}", tab.panel_id()))
}

fn panel_body(tab: FaqTab) -> Html {
    match tab {
        FaqTab::Questions => html! {
            <dl class="faq-list">
                { for QUESTION_KEYS.iter().map(|key| html! {
                    <>
                        <dt>{ t(&format!("faq.questions.{key}.q")) }</dt>
                        <dd>{ t(&format!("faq.questions.{key}.a")) }</dd>
                    </>
                }) }
            </dl>
        },
        FaqTab::Rules => html! {
            <ol class="rules-list">
                { for RULE_KEYS.iter().map(|key| html! {
                    <li>{ t(&format!("faq.rules.{key}")) }</li>
                }) }
            </ol>
        },
    }
}

#[function_component(FaqModal)]
pub fn faq_modal(props: &Props) -> Html {
    let tabs = FaqTab::ALL.into_iter().map(|tab| {
        let active = tab == props.active;
        let on_click = {
            let cb = props.on_tab.clone();
            Callback::from(move |_: MouseEvent| cb.emit(tab))
        };
        html! {
            <button
                type="button"
                role="tab"
                class={classes!("modal-tab", active.then_some("modal-tab--active"))}
                data-tab={tab.panel_id()}
                aria-selected={active.to_string()}
                aria-controls={tab.panel_id()}
                onclick={on_click}
            >
                { tab_label(tab) }
            </button>
        }
    });

    let panels = FaqTab::ALL.into_iter().map(|tab| {
        let hidden = tab != props.active;
        html! {
            <div
                id={tab.panel_id()}
                role="tabpanel"
                class={classes!("modal-body", hidden.then_some("modal-body--hidden"))}
            >
                { panel_body(tab) }
            </div>
        }
    });

    html! {
        <Modal
            id={ModalId::Faq.dom_id()}
            open={props.open}
            title={t("faq.title")}
            on_close={props.on_close.clone()}
            return_focus_id={Some(AttrValue::from("faqBtn"))}
        >
            <div class="modal-tabs" role="tablist">{ for tabs }</div>
            { for panels }
        </Modal>
    }
}
