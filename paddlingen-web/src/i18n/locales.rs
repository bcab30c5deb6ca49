use serde_json::Value;

#[derive(Clone, Copy, PartialEq, Eq)]
pub struct LocaleMeta {
    pub code: &'static str,
    pub name: &'static str,
    /// BCP 47 tag handed to `Intl` formatters.
    pub intl_tag: &'static str,
}

pub const LOCALE_META: &[LocaleMeta] = &[
    LocaleMeta {
        code: "sv",
        name: "Svenska",
        intl_tag: "sv-SE",
    },
    LocaleMeta {
        code: "en",
        name: "English",
        intl_tag: "en-GB",
    },
];

pub const DEFAULT_LANG: &str = "sv";

const LOCALE_TABLE: &[(&str, &str)] = &[
    ("sv", include_str!("../../i18n/sv.json")),
    ("en", include_str!("../../i18n/en.json")),
];

/// Supported locales with their native names.
#[must_use]
pub const fn locales() -> &'static [LocaleMeta] {
    LOCALE_META
}

#[must_use]
pub fn intl_tag(lang: &str) -> &'static str {
    LOCALE_META
        .iter()
        .find(|m| m.code == lang)
        .map_or(LOCALE_META[0].intl_tag, |m| m.intl_tag)
}

#[must_use]
pub fn is_supported(lang: &str) -> bool {
    LOCALE_META.iter().any(|m| m.code == lang)
}

pub fn load_translations(lang: &str) -> Option<Value> {
    let bundle = LOCALE_TABLE
        .iter()
        .find_map(|(code, data)| (*code == lang).then_some(*data))
        .unwrap_or(LOCALE_TABLE[0].1);

    serde_json::from_str(bundle).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_locale_parses() {
        for meta in locales() {
            let value = load_translations(meta.code).expect("locale json");
            assert!(value.get("booking").is_some(), "{} lacks booking keys", meta.code);
        }
    }

    #[test]
    fn unknown_locale_maps_to_swedish_tag() {
        assert_eq!(intl_tag("en"), "en-GB");
        assert_eq!(intl_tag("xx"), "sv-SE");
        assert!(!is_supported("xx"));
    }
}
