use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::{Format, FormatSummary};
use crate::error::{ConfigError, FormatError};
use crate::mapping::{ContextualMapping, Layer, LayerSummary, Mapping};
use crate::table::data;

/// How a romanization spells a long vowel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ChouonStyle {
    /// `ā`
    Macron,
    /// `â`
    Circumflex,
    /// `aa`
    DoubleVowel,
    /// `a-`
    Hyphen,
}

impl ChouonStyle {
    pub fn table(self) -> &'static str {
        match self {
            ChouonStyle::Macron => data::CHOUON_MACRON,
            ChouonStyle::Circumflex => data::CHOUON_CIRCUMFLEX,
            ChouonStyle::DoubleVowel => data::CHOUON_DOUBLE_VOWEL,
            ChouonStyle::Hyphen => data::CHOUON_HYPHEN,
        }
    }

    pub fn mapping(self) -> Result<Mapping, ConfigError> {
        Mapping::from_tables(&[self.table()], &[], &[])
    }
}

/// Contextual nasal rules, applied in order in both directions.
///
/// Rules with narrower lookaheads must come first: once the general rule has
/// rewritten `n'` to `n` before a consonant, a labial rule can no longer see it.
#[derive(Debug, Clone)]
pub struct NasalLayer {
    rules: Vec<ContextualMapping>,
}

impl NasalLayer {
    pub fn new(rules: Vec<ContextualMapping>) -> Self {
        Self { rules }
    }

    /// `n` before a consonant or word boundary.
    pub fn standard() -> Result<Self, ConfigError> {
        Ok(Self::new(vec![ContextualMapping::nasal()?]))
    }

    /// As [`standard`](Self::standard), but `m` before `b`, `m` and `p`.
    pub fn with_labial_m() -> Result<Self, ConfigError> {
        Ok(Self::new(vec![
            ContextualMapping::labial_nasal()?,
            ContextualMapping::nasal()?,
        ]))
    }

    pub fn rules(&self) -> &[ContextualMapping] {
        &self.rules
    }
}

impl Layer for NasalLayer {
    fn parse(&self, text: &str) -> String {
        self.rules
            .iter()
            .fold(text.to_string(), |acc, rule| rule.parse(&acc))
    }

    fn emit(&self, text: &str) -> String {
        self.rules
            .iter()
            .fold(text.to_string(), |acc, rule| rule.emit(&acc))
    }

    fn summary(&self) -> LayerSummary {
        let mut summary = LayerSummary {
            kind: "nasal",
            parse: Vec::new(),
            emit: Vec::new(),
        };
        for rule in self.rules() {
            let rule = rule.summary();
            summary.parse.extend(rule.parse);
            summary.emit.extend(rule.emit);
        }
        summary
    }
}

/// A romanization scheme composed of four layers.
///
/// Length and gemination marks sit outside the base mora, so parsing
/// normalises them first (chouon, sokuon, nasal, base); emitting runs the
/// exact reverse, because doubling a consonant or lengthening a vowel needs
/// the surrounding spelling to exist already (base, nasal, sokuon, chouon).
#[derive(Debug, Clone)]
pub struct RomajiFormat {
    name: String,
    base: Mapping,
    nasal: NasalLayer,
    sokuon: Mapping,
    chouon: Mapping,
}

impl RomajiFormat {
    pub fn new(
        name: impl Into<String>,
        base: Mapping,
        nasal: NasalLayer,
        sokuon: Mapping,
        chouon: Mapping,
    ) -> Self {
        Self {
            name: name.into(),
            base,
            nasal,
            sokuon,
            chouon,
        }
    }

    pub fn base(&self) -> &Mapping {
        &self.base
    }

    fn parse_order(&self) -> [&dyn Layer; 4] {
        [&self.chouon, &self.sokuon, &self.nasal, &self.base]
    }

    fn emit_order(&self) -> [&dyn Layer; 4] {
        [&self.base, &self.nasal, &self.sokuon, &self.chouon]
    }
}

impl Format for RomajiFormat {
    fn name(&self) -> &str {
        &self.name
    }

    fn parse(&self, text: &str) -> String {
        self.parse_order()
            .iter()
            .fold(text.to_string(), |acc, layer| layer.parse(&acc))
    }

    fn emit(&self, text: &str) -> Result<String, FormatError> {
        Ok(self
            .emit_order()
            .iter()
            .fold(text.to_string(), |acc, layer| layer.emit(&acc)))
    }

    fn parsed_lemmas(&self) -> BTreeSet<&str> {
        self.base.parsed_lemmas()
    }

    fn emitted_lemmas(&self) -> BTreeSet<&str> {
        self.base.emitted_lemmas()
    }

    fn summary(&self) -> FormatSummary {
        FormatSummary {
            name: self.name.clone(),
            can_emit: true,
            layers: vec![
                self.chouon.summary_as("chouon"),
                self.sokuon.summary_as("sokuon"),
                self.nasal.summary(),
                self.base.summary_as("base"),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Nihon-shiki built by hand, independent of the registry.
    fn nihon(chouon: ChouonStyle) -> RomajiFormat {
        RomajiFormat::new(
            "nihon",
            Mapping::from_tables(&[data::ROMAJI_SHARED, data::NIHON], &[], &[]).unwrap(),
            NasalLayer::standard().unwrap(),
            Mapping::from_tables(&[data::SOKUON_BASE], &[], &[]).unwrap(),
            chouon.mapping().unwrap(),
        )
    }

    #[test]
    fn parse_runs_chouon_then_sokuon_then_nasal_then_base() {
        let f = nihon(ChouonStyle::Circumflex);
        assert_eq!(f.parse("kitte"), "KIQTE");
        assert_eq!(f.parse("tôkyô"), "TO-KYO-");
        assert_eq!(f.parse("sinbun"), "SIN'BUN'");
        assert_eq!(f.parse("zen'in"), "ZEN'IN'");
    }

    #[test]
    fn doubled_consonant_is_not_split_into_moras() {
        let f = nihon(ChouonStyle::Circumflex);
        let base_only = f.base().parse("kitte");
        assert_ne!(f.parse("kitte"), base_only);
    }

    #[test]
    fn emit_runs_in_reverse() {
        let f = nihon(ChouonStyle::Circumflex);
        assert_eq!(f.emit("KIQTE").unwrap(), "kitte");
        assert_eq!(f.emit("TO-KYO-").unwrap(), "tôkyô");
        assert_eq!(f.emit("SIN'BUN'").unwrap(), "sinbun");
        assert_eq!(f.emit("ZEN'IN'").unwrap(), "zen'in");
    }

    #[test]
    fn chouon_styles() {
        assert_eq!(nihon(ChouonStyle::Macron).emit("O-SAKA").unwrap(), "ōsaka");
        assert_eq!(nihon(ChouonStyle::DoubleVowel).emit("O-SAKA").unwrap(), "oosaka");
        assert_eq!(nihon(ChouonStyle::Hyphen).emit("O-SAKA").unwrap(), "o-saka");
        assert_eq!(nihon(ChouonStyle::DoubleVowel).parse("oosaka"), "O-SAKA");
    }

    #[test]
    fn unknown_text_survives_round_trip() {
        let f = nihon(ChouonStyle::Circumflex);
        let canonical = f.parse("ringo, 3 ko.");
        assert_eq!(canonical, "RIN'GO, 3 KO.");
        assert_eq!(f.emit(&canonical).unwrap(), "ringo, 3 ko.");
    }

    #[test]
    fn labial_nasal_layer() {
        let layer = NasalLayer::with_labial_m().unwrap();
        assert_eq!(layer.emit("san'po to kon'bu"), "sampo to kombu");
        assert_eq!(layer.emit("san'ka"), "sanka");
        assert_eq!(layer.parse("sampo"), "saN'po");
        assert_eq!(layer.parse("sanka"), "saN'ka");
    }

    #[test]
    fn labial_rule_precedes_general_rule() {
        let layer = NasalLayer::with_labial_m().unwrap();
        let surfaces: Vec<&str> = layer.rules().iter().map(|r| r.surface()).collect();
        assert_eq!(surfaces, vec!["m", "n"]);
        let summary = layer.summary();
        assert_eq!(summary.kind, "nasal");
        assert_eq!(summary.parse.len(), 2);
        assert_eq!(NasalLayer::standard().unwrap().rules().len(), 1);
    }

    #[test]
    fn summary_lists_layers_in_parse_order() {
        let kinds: Vec<&str> = nihon(ChouonStyle::Circumflex)
            .summary()
            .layers
            .iter()
            .map(|l| l.kind)
            .collect();
        assert_eq!(kinds, vec!["chouon", "sokuon", "nasal", "base"]);
    }
}
