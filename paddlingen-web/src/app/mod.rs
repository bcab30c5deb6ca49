pub mod bootstrap;
pub mod state;

use crate::components::booking_modal::{BookingAction, BookingModal, apply_action};
use crate::components::contact_modal::ContactModal;
use crate::components::faq_modal::FaqModal;
use crate::components::footer::Footer;
use crate::components::gallery_modal::GalleryModal;
use crate::components::header::Header;
use crate::components::overview_panel::OverviewPanel;
use crate::components::photo_section::PhotoSection;
use crate::components::progress_bar::ProgressBar;
use crate::components::weather_widget::WeatherWidget;
use crate::i18n::t;
use paddlingen_core::{BookingRequest, FaqTab, KeyCommand, ModalId};
use yew::prelude::*;

/// Serialize the hand-off and announce it.
fn hand_off(request: &BookingRequest) {
    match serde_json::to_string(request) {
        Ok(json) => log::info!("booking handed to payment: {json}"),
        Err(err) => log::error!("could not serialize booking: {err}"),
    }
    #[cfg(target_arch = "wasm32")]
    crate::a11y::set_status(&t("booking.handoff"));
}

#[function_component(App)]
pub fn app() -> Html {
    let app_state = state::use_app_state();
    bootstrap::use_bootstrap(&app_state);

    let on_booking_action = {
        let booking = app_state.booking.clone();
        Callback::from(move |action: BookingAction| {
            booking.set(apply_action(&booking, action));
        })
    };
    let on_book = {
        let cb = on_booking_action.clone();
        Callback::from(move |()| cb.emit(BookingAction::Open))
    };
    let on_submit = {
        let cb = on_booking_action.clone();
        Callback::from(move |request: BookingRequest| {
            hand_off(&request);
            cb.emit(BookingAction::Close);
        })
    };

    let open_modal = |id: ModalId| {
        let modals = app_state.modals.clone();
        Callback::from(move |()| {
            let mut next = (*modals).clone();
            next.open_only(id);
            modals.set(next);
        })
    };
    let close_modal = |id: ModalId| {
        let modals = app_state.modals.clone();
        Callback::from(move |()| {
            let mut next = (*modals).clone();
            if next.close(id) {
                modals.set(next);
            }
        })
    };
    let on_open_faq = {
        let faq_tab = app_state.faq_tab.clone();
        let open = open_modal(ModalId::Faq);
        Callback::from(move |()| {
            faq_tab.set(FaqTab::default());
            open.emit(());
        })
    };
    let on_tab = {
        let faq_tab = app_state.faq_tab.clone();
        Callback::from(move |tab: FaqTab| faq_tab.set(tab))
    };
    let on_lang_change = {
        let current = app_state.current_language.clone();
        Callback::from(move |code: String| current.set(code))
    };

    let on_show_photos = |button_id: String| {
        let gallery = app_state.gallery.clone();
        let origin = app_state.gallery_origin.clone();
        Callback::from(move |images: Vec<String>| {
            let mut next = (*gallery).clone();
            if next.open(images, 0) {
                origin.set(Some(AttrValue::from(button_id.clone())));
                gallery.set(next);
            }
        })
    };
    let on_gallery_close = {
        let gallery = app_state.gallery.clone();
        Callback::from(move |()| {
            let mut next = (*gallery).clone();
            next.close();
            gallery.set(next);
        })
    };
    let on_gallery_navigate = {
        let gallery = app_state.gallery.clone();
        Callback::from(move |command: KeyCommand| {
            let mut next = (*gallery).clone();
            match command {
                KeyCommand::Close => next.close(),
                KeyCommand::Previous => next.prev(),
                KeyCommand::Next => next.next(),
            }
            gallery.set(next);
        })
    };

    let config = &*app_state.config;
    let modals = &*app_state.modals;

    html! {
        <>
            <Header
                current_lang={(*app_state.current_language).clone()}
                {on_lang_change}
                on_faq={on_open_faq}
                on_contact={open_modal(ModalId::Contact)}
                on_overview={open_modal(ModalId::Overview)}
            />
            <main id="main" role="main">
                <section class="hero">
                    <h1>{ t("page.title") }</h1>
                    <p class="tagline">{ t("page.tagline") }</p>
                    <ProgressBar booked={*app_state.booked} total={config.total_canoes} {on_book} />
                    <WeatherWidget
                        event_date={config.event_date}
                        now={*app_state.now}
                        window={config.forecast_window()}
                        forecast={(*app_state.forecast).clone()}
                    />
                </section>
                { for app_state.photo_years.iter().map(|year| html! {
                    <PhotoSection
                        key={year.year.clone()}
                        year={year.year.clone()}
                        button_id={year.button_id.clone()}
                        grid={year.grid.clone()}
                        on_show={on_show_photos(year.button_id.clone())}
                    />
                }) }
            </main>
            <Footer />

            <BookingModal
                controller={(*app_state.booking).clone()}
                counts={app_state.selectable_counts()}
                currency={config.currency_label.clone()}
                on_action={on_booking_action}
                {on_submit}
            />
            <GalleryModal
                gallery={(*app_state.gallery).clone()}
                on_close={on_gallery_close}
                on_navigate={on_gallery_navigate}
                return_focus_id={(*app_state.gallery_origin).clone()}
            />
            <FaqModal
                open={modals.is_open(ModalId::Faq)}
                active={*app_state.faq_tab}
                {on_tab}
                on_close={close_modal(ModalId::Faq)}
            />
            <ContactModal
                open={modals.is_open(ModalId::Contact)}
                on_close={close_modal(ModalId::Contact)}
            />
            <OverviewPanel
                open={modals.is_open(ModalId::Overview)}
                config={config.clone()}
                booked={*app_state.booked}
                on_close={close_modal(ModalId::Overview)}
            />
            <div id={crate::a11y::STATUS_REGION_ID} class="sr-only" aria-live="polite"></div>
        </>
    }
}
