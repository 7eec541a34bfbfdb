mod proptest_roundtrip;

use super::*;
use crate::format::ChouonStyle;

pub(super) fn registry() -> &'static Registry {
    Registry::global()
}

pub(super) fn registry_with(edit: impl FnOnce(&mut Settings)) -> Registry {
    let mut settings = Settings::default();
    edit(&mut settings);
    Registry::build(&settings).unwrap()
}

#[test]
fn format_names_round_trip_through_strings() {
    for name in FormatName::ALL {
        assert_eq!(name.as_str().parse::<FormatName>().unwrap(), name);
        assert_eq!(name.to_string(), name.as_str());
    }
}

#[test]
fn unknown_format_name_lists_choices() {
    let err = "hebon".parse::<FormatName>().unwrap_err();
    assert!(matches!(err, ConvertError::UnknownFormat { ref name, .. } if name == "hebon"));
    let msg = err.to_string();
    assert!(msg.contains("hepburn-strict"), "{msg}");
    assert!(msg.contains("mixed"), "{msg}");
}

#[test]
fn every_name_is_registered() {
    let r = registry();
    for name in FormatName::ALL {
        assert_eq!(r.format(name).name(), name.as_str());
        assert_eq!(r.format(name).can_emit(), name.is_output());
    }
    assert_eq!(r.summaries().len(), FormatName::ALL.len());
}

#[test]
fn mixed_cannot_be_an_output() {
    let err = registry().convert("かな", "hiragana", "mixed").unwrap_err();
    assert!(matches!(err, ConvertError::InputOnly(FormatName::Mixed)));
}

#[test]
fn unknown_names_are_rejected_in_either_position() {
    let r = registry();
    assert!(matches!(
        r.convert("かな", "kana", "nihon"),
        Err(ConvertError::UnknownFormat { .. })
    ));
    assert!(matches!(
        r.convert("かな", "hiragana", "Nihon"),
        Err(ConvertError::UnknownFormat { .. })
    ));
}

#[test]
fn free_function_uses_global_registry() {
    assert_eq!(crate::convert("いちご", "hiragana", "nihon").unwrap(), "itigo");
}

#[test]
fn chouon_style_follows_settings() {
    let r = registry_with(|s| s.chouon.hepburn = ChouonStyle::DoubleVowel);
    assert_eq!(r.convert("コーヒー", "katakana", "hepburn").unwrap(), "koohii");
    assert_eq!(r.convert("koohii", "hepburn", "katakana").unwrap(), "コーヒー");
    assert_eq!(
        registry().convert("コーヒー", "katakana", "hepburn").unwrap(),
        "kōhī"
    );
}

#[test]
fn labial_nasal_follows_settings() {
    let r = registry_with(|s| s.nasal.hepburn_labial_m = true);
    assert_eq!(r.convert("さんぽ", "hiragana", "hepburn").unwrap(), "sampo");
    assert_eq!(r.convert("sampo", "hepburn-strict", "hiragana").unwrap(), "さんぽ");
    assert_eq!(r.convert("さんか", "hiragana", "hepburn").unwrap(), "sanka");
    // Other schemes keep the plain nasal.
    assert_eq!(r.convert("さんぽ", "hiragana", "nihon").unwrap(), "sanpo");
    assert_eq!(
        registry().convert("さんぽ", "hiragana", "hepburn").unwrap(),
        "sanpo"
    );
}

#[test]
fn mixed_reads_configured_romanization() {
    let r = registry_with(|s| s.mixed.romaji = FormatName::Nihon);
    assert_eq!(r.convert("siti と チ", "mixed", "hiragana").unwrap(), "しち と ち");
}
