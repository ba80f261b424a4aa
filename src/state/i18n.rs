use std::collections::BTreeMap;
use std::sync::OnceLock;

use crate::state::locale::Locale;

pub fn tr(locale: Locale, key: &'static str) -> &'static str {
    catalog(locale)
        .get(key)
        .map(String::as_str)
        .or_else(|| catalog(Locale::En).get(key).map(String::as_str))
        .unwrap_or(key)
}

fn catalog(locale: Locale) -> &'static BTreeMap<String, String> {
    match locale {
        Locale::En => EN_CATALOG.get_or_init(|| parse_catalog(Locale::En)),
        Locale::Fr => FR_CATALOG.get_or_init(|| parse_catalog(Locale::Fr)),
    }
}

fn parse_catalog(locale: Locale) -> BTreeMap<String, String> {
    let source = match locale {
        Locale::En => include_str!("../../assets/i18n/en.json"),
        Locale::Fr => include_str!("../../assets/i18n/fr.json"),
    };

    serde_json::from_str(source).unwrap_or_else(|err| {
        panic!(
            "failed to parse i18n catalog for locale '{}': {err}",
            locale.code()
        )
    })
}

static EN_CATALOG: OnceLock<BTreeMap<String, String>> = OnceLock::new();
static FR_CATALOG: OnceLock<BTreeMap<String, String>> = OnceLock::new();
