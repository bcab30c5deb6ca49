use futures::executor::block_on;
use paddlingen_core::{BookingController, EventConfig, FaqTab, NameField};
use paddlingen_web::components::booking_modal::{BookingAction, BookingModal, apply_action};
use paddlingen_web::components::faq_modal::FaqModal;
use paddlingen_web::components::footer::Footer;
use paddlingen_web::components::header::Header;
use paddlingen_web::components::modal::Modal;
use paddlingen_web::components::progress_bar::ProgressBar;
use yew::{AttrValue, Callback, Children, Classes, LocalServerRenderer};

fn render_booking(controller: BookingController) -> String {
    let counts: Vec<u32> = EventConfig::default_config().selectable_counts(0).collect();
    let props = paddlingen_web::components::booking_modal::Props {
        controller,
        counts,
        currency: AttrValue::from("kr"),
        on_action: Callback::noop(),
        on_submit: Callback::noop(),
    };
    block_on(LocalServerRenderer::<BookingModal>::with_props(props).render())
}

#[test]
fn header_renders_language_and_dialog_buttons() {
    paddlingen_web::i18n::set_lang("en");
    let props = paddlingen_web::components::header::Props {
        current_lang: "en".to_string(),
        on_lang_change: Callback::noop(),
        on_faq: Callback::noop(),
        on_contact: Callback::noop(),
        on_overview: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<Header>::with_props(props).render());
    assert!(html.contains("lang-select"));
    assert!(html.contains("faqBtn"));
    assert!(html.contains("FAQ"));
}

#[test]
fn footer_renders_copy() {
    paddlingen_web::i18n::set_lang("sv");
    let html = block_on(LocalServerRenderer::<Footer>::new().render());
    assert!(html.contains("<footer"));
    assert!(html.contains("© Paddlingen"));
}

#[test]
fn modal_renders_when_open_and_skips_when_closed() {
    paddlingen_web::i18n::set_lang("sv");
    let props = |open| paddlingen_web::components::modal::Props {
        id: AttrValue::from("contactModal"),
        open,
        title: AttrValue::from("Kontakt"),
        on_close: Callback::noop(),
        on_navigate: None,
        return_focus_id: Some(AttrValue::from("contactBtn")),
        class: Classes::new(),
        children: Children::default(),
    };
    let open_html = block_on(LocalServerRenderer::<Modal>::with_props(props(true)).render());
    assert!(open_html.contains("modal-content"));
    let closed_html = block_on(LocalServerRenderer::<Modal>::with_props(props(false)).render());
    assert!(!closed_html.contains("modal-content"));
}

#[test]
fn booking_flow_renders_each_step() {
    paddlingen_web::i18n::set_lang("sv");
    let closed = BookingController::new(900);
    assert!(!render_booking(closed.clone()).contains("bookingModal"));

    let opened = apply_action(&closed, BookingAction::Open);
    let html = render_booking(opened.clone());
    assert!(html.contains("bookingModal"));
    assert!(html.contains("Totalt: 0 kr"));

    let two = apply_action(&opened, BookingAction::SetCount(2));
    let html = render_booking(two.clone());
    assert!(html.contains("canoe2_lname"));
    assert!(html.contains("Totalt: 1800 kr"));

    let filled = [
        (1, NameField::First, "Anna"),
        (1, NameField::Last, "Svensson"),
        (2, NameField::First, "Bo"),
        (2, NameField::Last, "Karlsson"),
    ]
    .into_iter()
    .fold(two, |controller, (index, field, value)| {
        apply_action(
            &controller,
            BookingAction::SetName {
                index,
                field,
                value: value.into(),
            },
        )
    });
    assert!(filled.gate().submit_enabled);
    assert!(filled.submit().is_ok());

    let cancelled = apply_action(&filled, BookingAction::Close);
    assert!(!cancelled.is_open());
    assert_eq!(cancelled.session().item_count(), 0);
}

#[test]
fn progress_bar_switches_to_fully_booked() {
    paddlingen_web::i18n::set_lang("en");
    let props = paddlingen_web::components::progress_bar::Props {
        booked: 50,
        total: 50,
        on_book: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<ProgressBar>::with_props(props).render());
    assert!(html.contains("disabled"));
    assert!(html.contains("width: 100%"));
}

#[test]
fn faq_tabs_follow_active_prop() {
    paddlingen_web::i18n::set_lang("en");
    for tab in FaqTab::ALL {
        let props = paddlingen_web::components::faq_modal::Props {
            open: true,
            active: tab,
            on_tab: Callback::noop(),
            on_close: Callback::noop(),
        };
        let html = block_on(LocalServerRenderer::<FaqModal>::with_props(props).render());
        assert_eq!(html.matches("modal-tab--active").count(), 1);
        assert!(html.contains(&format!(r#"data-tab="{}""#, tab.panel_id())));
    }
}
