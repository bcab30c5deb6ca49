#[cfg(target_arch = "wasm32")]
use crate::i18n::bundle::with_bundle;
use chrono::NaiveDate;
#[cfg(target_arch = "wasm32")]
use chrono::Datelike;
#[cfg(target_arch = "wasm32")]
use js_sys::{Date, Function, Intl, Object, Reflect};
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsValue;

#[cfg(target_arch = "wasm32")]
fn locales_array(lang: &str) -> js_sys::Array {
    let arr = js_sys::Array::new();
    arr.push(&JsValue::from_str(crate::i18n::locales::intl_tag(lang)));
    arr
}

/// Format a number using the current locale via `Intl`.
#[must_use]
pub fn fmt_number(num: f64) -> String {
    #[cfg(target_arch = "wasm32")]
    {
        with_bundle(|bundle| {
            let nf = Intl::NumberFormat::new(&locales_array(&bundle.lang), &Object::new());
            let format_fn: Function = nf.format();
            format_fn
                .call1(&nf, &JsValue::from_f64(num))
                .ok()
                .and_then(|v| v.as_string())
                .unwrap_or_else(|| num.to_string())
        })
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        num.to_string()
    }
}

/// Long-form date such as "13 juni 2025".
///
/// The host build has no `Intl`, so it prints the ISO date instead.
#[must_use]
pub fn fmt_date_long(date: NaiveDate) -> String {
    #[cfg(target_arch = "wasm32")]
    {
        with_bundle(|bundle| {
            let js_date = Date::new_with_year_month_day(
                u32::try_from(date.year()).unwrap_or_default(),
                i32::try_from(date.month0()).unwrap_or_default(),
                i32::try_from(date.day()).unwrap_or_default(),
            );
            let opts = Object::new();
            for (key, value) in [("day", "numeric"), ("month", "long"), ("year", "numeric")] {
                let _ = Reflect::set(&opts, &JsValue::from_str(key), &JsValue::from_str(value));
            }
            js_date
                .to_locale_date_string(crate::i18n::locales::intl_tag(&bundle.lang), &opts)
                .as_string()
                .unwrap_or_else(|| date.format("%Y-%m-%d").to_string())
        })
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        date.format("%Y-%m-%d").to_string()
    }
}
