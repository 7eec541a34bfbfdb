//! Property-based round trips through the canonical alphabet.
//!
//! Any text assembled from a kana table's own keys must survive
//! `emit(parse(s))` unchanged, however the keys happen to abut.

use proptest::prelude::*;

use super::registry;
use crate::registry::FormatName;

fn surfaces(name: FormatName) -> Vec<String> {
    let summary = registry().format(name).summary();
    summary.layers[0]
        .parse
        .iter()
        .map(|(surface, _)| surface.clone())
        .collect()
}

fn arb_kana(name: FormatName) -> impl Strategy<Value = String> {
    prop::collection::vec(prop::sample::select(surfaces(name)), 0..16).prop_map(|v| v.concat())
}

fn arb_mora_text() -> impl Strategy<Value = String> {
    // Native moras only, with separators the romanizations leave alone.
    prop::collection::vec(
        prop_oneof![
            8 => prop::sample::select(vec![
                "か", "し", "つ", "ね", "ふ", "み", "ら", "じ", "ぱ", "きゃ", "しょ", "ちゅ",
            ]),
            2 => prop::sample::select(vec!["あ", "い", "う", "え", "お"]),
            1 => Just(" "),
        ],
        0..12,
    )
    .prop_map(|v| v.concat())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn hiragana_round_trip(s in arb_kana(FormatName::Hiragana)) {
        let f = registry().format(FormatName::Hiragana);
        prop_assert_eq!(f.emit(&f.parse(&s)).unwrap(), s);
    }

    #[test]
    fn katakana_round_trip(s in arb_kana(FormatName::Katakana)) {
        let f = registry().format(FormatName::Katakana);
        prop_assert_eq!(f.emit(&f.parse(&s)).unwrap(), s);
    }

    #[test]
    fn scripts_agree_on_lemmas(s in arb_kana(FormatName::Hiragana)) {
        let r = registry();
        let katakana = r.convert(&s, "hiragana", "katakana").unwrap();
        prop_assert_eq!(r.convert(&katakana, "katakana", "hiragana").unwrap(), s);
    }

    #[test]
    fn nihon_round_trip(s in arb_mora_text()) {
        let r = registry();
        let romaji = r.convert(&s, "hiragana", "nihon").unwrap();
        prop_assert_eq!(r.convert(&romaji, "nihon", "hiragana").unwrap(), s);
    }

    #[test]
    fn parse_never_panics(s in "\\PC{0,24}") {
        let r = registry();
        for name in FormatName::ALL {
            let _ = r.format(name).parse(&s);
        }
    }
}
