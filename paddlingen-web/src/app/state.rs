use crate::assets::{PhotoYear, load_event_config, photo_years};
use chrono::NaiveDateTime;
use paddlingen_core::{
    BookingController, EventConfig, FaqTab, ForecastDisplay, Gallery, ModalSet,
};
use rand::SeedableRng;
use rand::rngs::SmallRng;
use yew::prelude::*;

#[derive(Clone)]
pub struct AppState {
    pub config: UseStateHandle<EventConfig>,
    pub photo_years: UseStateHandle<Vec<PhotoYear>>,
    pub booked: UseStateHandle<u32>,
    pub forecast: UseStateHandle<ForecastDisplay>,
    pub now: UseStateHandle<NaiveDateTime>,
    pub booking: UseStateHandle<BookingController>,
    pub gallery: UseStateHandle<Gallery>,
    /// Button that opened the lightbox, refocused when it closes.
    pub gallery_origin: UseStateHandle<Option<AttrValue>>,
    pub modals: UseStateHandle<ModalSet>,
    pub faq_tab: UseStateHandle<FaqTab>,
    pub current_language: UseStateHandle<String>,
}

/// Page clock. Host builds read the system clock.
#[must_use]
pub fn current_time() -> NaiveDateTime {
    #[cfg(target_arch = "wasm32")]
    {
        crate::dom::now_local()
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        chrono::Local::now().naive_local()
    }
}

fn grid_seed() -> u64 {
    #[cfg(target_arch = "wasm32")]
    {
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let seed = js_sys::Date::now() as u64;
        seed
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        0x5EED
    }
}

fn shuffled_photo_years() -> Vec<PhotoYear> {
    let mut rng = SmallRng::seed_from_u64(grid_seed());
    photo_years(&mut rng)
}

#[hook]
pub fn use_app_state() -> AppState {
    let config = use_state(load_event_config);
    let unit_price = config.unit_price;
    AppState {
        photo_years: use_state(shuffled_photo_years),
        booked: use_state(|| 0_u32),
        forecast: use_state(ForecastDisplay::default),
        now: use_state(current_time),
        booking: use_state(move || BookingController::new(unit_price)),
        gallery: use_state(Gallery::new),
        gallery_origin: use_state(|| None::<AttrValue>),
        modals: use_state(ModalSet::default),
        faq_tab: use_state(FaqTab::default),
        current_language: use_state(crate::i18n::current_lang),
        config,
    }
}

impl AppState {
    /// Quantities the booking selector offers right now.
    #[must_use]
    pub fn selectable_counts(&self) -> Vec<u32> {
        self.config.selectable_counts(*self.booked).collect()
    }
}
