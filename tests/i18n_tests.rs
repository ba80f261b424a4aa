use pulseboard::state::i18n;
use pulseboard::state::locale::Locale;
use std::collections::BTreeSet;

#[test]
fn test_default_locale_is_english() {
    assert_eq!(i18n::tr(Locale::default(), "entity.show"), "Show");
}

#[test]
fn test_locale_switch_changes_text() {
    assert_eq!(i18n::tr(Locale::En, "entity.show"), "Show");
    assert_eq!(i18n::tr(Locale::Fr, "entity.show"), "Montrer");
    assert_eq!(i18n::tr(Locale::Fr, "errors.none"), "Aucune erreur trouvée.");
}

#[test]
fn test_missing_key_falls_back_to_english() {
    assert_eq!(i18n::tr(Locale::Fr, "test.fallback_only"), "Fallback value");
}

#[test]
fn test_unknown_key_is_returned_as_is() {
    assert_eq!(i18n::tr(Locale::En, "no.such.key"), "no.such.key");
}

#[test]
fn test_fr_catalog_matches_english_keys_except_fallback_probe() {
    let en: serde_json::Map<String, serde_json::Value> =
        serde_json::from_str(include_str!("../assets/i18n/en.json"))
            .expect("en.json should be valid JSON object");
    let fr: serde_json::Map<String, serde_json::Value> =
        serde_json::from_str(include_str!("../assets/i18n/fr.json"))
            .expect("fr.json should be valid JSON object");

    let allowed_missing: BTreeSet<&str> = BTreeSet::from(["test.fallback_only"]);

    let en_keys: BTreeSet<&str> = en.keys().map(String::as_str).collect();
    let fr_keys: BTreeSet<&str> = fr.keys().map(String::as_str).collect();

    let missing: Vec<&str> = en_keys
        .difference(&fr_keys)
        .copied()
        .filter(|key| !allowed_missing.contains(key))
        .collect();

    assert!(
        missing.is_empty(),
        "fr catalog is missing keys: {}",
        missing.join(", ")
    );
}
