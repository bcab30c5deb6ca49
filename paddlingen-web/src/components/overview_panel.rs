use crate::a11y::restore_focus;
use crate::dom::is_backdrop_click;
use crate::i18n::{fmt_date_long, t, tr};
use paddlingen_core::{BookingProgress, EventConfig, KeyCommand, ModalId};
use std::collections::BTreeMap;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub open: bool,
    pub config: EventConfig,
    pub booked: u32,
    pub on_close: Callback<()>,
}

/// Event summary for narrow screens. Always in the DOM; `scrolled` slides it in.
#[function_component(OverviewPanel)]
pub fn overview_panel(props: &Props) -> Html {
    let panel_ref = use_node_ref();
    let prev_open = use_mut_ref(|| props.open);
    {
        let panel_ref = panel_ref.clone();
        use_effect_with(props.open, move |is_open| {
            let was_open = *prev_open.borrow();
            *prev_open.borrow_mut() = *is_open;
            if *is_open {
                if let Some(el) = panel_ref.cast::<web_sys::HtmlElement>() {
                    let _ = el.focus();
                }
            } else if was_open {
                restore_focus("mobileOverviewBtn");
            }
            || {}
        });
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
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };
    let on_keydown = {
        let cb = props.on_close.clone();
        let open = props.open;
        Callback::from(move |e: KeyboardEvent| {
            if open && KeyCommand::from_key(&e.key()) == Some(KeyCommand::Close) {
                e.prevent_default();
                cb.emit(());
            }
        })
    };

    let cfg = &props.config;
    let unit = cfg.unit_price.to_string();
    let mut vars = BTreeMap::new();
    vars.insert("unit", unit.as_str());
    vars.insert("currency", cfg.currency_label.as_str());
    let remaining = BookingProgress::new(props.booked, cfg.total_canoes).remaining();

    html! {
        <div
            id={ModalId::Overview.dom_id()}
            class={classes!("overview-panel", props.open.then_some("scrolled"))}
            aria-hidden={(!props.open).to_string()}
            tabindex="-1"
            onclick={on_backdrop}
            onkeydown={on_keydown}
            ref={panel_ref}
        >
            <div class="overview-content" role="dialog" aria-label={t("overview.title")}>
                <button type="button" class="overview-close" aria-label={t("ui.close")} onclick={on_close_button}>
                    {"×"}
                </button>
                <table class="overview-table">
                    <tbody>
                        <tr>
                            <th scope="row">{ t("overview.date") }</th>
                            <td>{ fmt_date_long(cfg.event_day()) }</td>
                        </tr>
                        <tr>
                            <th scope="row">{ t("overview.price") }</th>
                            <td>{ tr("overview.price_value", Some(&vars)) }</td>
                        </tr>
                        <tr>
                            <th scope="row">{ t("overview.remaining") }</th>
                            <td>{ format!("{remaining} / {}", cfg.total_canoes) }</td>
                        </tr>
                    </tbody>
                </table>
            </div>
        </div>
    }
}
