//! Longest-match substitution between a surface form and canonical lemmas.
//!
//! A [`Mapping`] owns two dictionaries (surface→canonical for parsing,
//! canonical→surface for emitting) and one alternation pattern per direction.
//! Alternatives are ordered longest-first, so at any scan position a short key
//! never shadows a longer key that also matches there ("kya" is never read as
//! "k" + "ya").

mod contextual;

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use regex::{Captures, Regex, RegexBuilder};
use serde::Serialize;

use crate::error::{ConfigError, Direction};
use crate::table::{read_tables, TableEntry};

pub use contextual::{ContextualMapping, Lookahead};

/// A pure string-to-string transform that runs in both directions.
pub trait Layer: Send + Sync {
    /// Surface text to canonical.
    fn parse(&self, text: &str) -> String;
    /// Canonical text to surface.
    fn emit(&self, text: &str) -> String;
    /// Table view for debug dumps.
    fn summary(&self) -> LayerSummary;
}

/// Flattened view of a layer's rules.
#[derive(Debug, Clone, Serialize)]
pub struct LayerSummary {
    pub kind: &'static str,
    /// `(surface, canonical)` pairs accepted when parsing.
    pub parse: Vec<(String, String)>,
    /// `(canonical, surface)` pairs used when emitting.
    pub emit: Vec<(String, String)>,
}

#[derive(Debug, Clone)]
pub struct Mapping {
    surface_to_canonical: BTreeMap<String, String>,
    canonical_to_surface: BTreeMap<String, String>,
    parse_pattern: Regex,
    emit_pattern: Regex,
}

impl Mapping {
    /// Build a mapping from a bidirectional base table plus one-way overrides.
    ///
    /// Later entries replace earlier ones with the same key, and override
    /// entries replace base entries. When several surface spellings share a
    /// canonical token, the last one listed is the one emitted.
    pub fn new(
        base: &[TableEntry],
        parse_only: &[TableEntry],
        emit_only: &[TableEntry],
    ) -> Result<Self, ConfigError> {
        let mut surface_to_canonical = BTreeMap::new();
        let mut canonical_to_surface = BTreeMap::new();

        for entry in base {
            surface_to_canonical.insert(
                entry.surface.to_lowercase(),
                entry.canonical.to_uppercase(),
            );
            canonical_to_surface.insert(entry.canonical.to_uppercase(), entry.surface.clone());
        }
        for entry in parse_only {
            surface_to_canonical.insert(
                entry.surface.to_lowercase(),
                entry.canonical.to_uppercase(),
            );
        }
        for entry in emit_only {
            canonical_to_surface.insert(entry.canonical.to_uppercase(), entry.surface.clone());
        }

        let parse_pattern = build_pattern(surface_to_canonical.keys(), Direction::Parse)?;
        let emit_pattern = build_pattern(canonical_to_surface.keys(), Direction::Emit)?;

        Ok(Self {
            surface_to_canonical,
            canonical_to_surface,
            parse_pattern,
            emit_pattern,
        })
    }

    /// Load raw table text for each part and build the mapping.
    pub fn from_tables(
        base: &[&str],
        parse_only: &[&str],
        emit_only: &[&str],
    ) -> Result<Self, ConfigError> {
        Self::new(
            &read_tables(base)?,
            &read_tables(parse_only)?,
            &read_tables(emit_only)?,
        )
    }

    /// Replace every surface token with its canonical lemma.
    pub fn parse(&self, text: &str) -> String {
        substitute(&self.parse_pattern, text, |m| {
            self.surface_to_canonical.get(&m.to_lowercase())
        })
    }

    /// Replace every canonical lemma with its surface spelling.
    pub fn emit(&self, text: &str) -> String {
        substitute(&self.emit_pattern, text, |m| {
            self.canonical_to_surface.get(&m.to_uppercase())
        })
    }

    /// Whether `text` is made up entirely of surface tokens.
    pub fn matches_surface(&self, text: &str) -> bool {
        tiles(&self.parse_pattern, text)
    }

    /// Whether `text` is made up entirely of canonical lemmas.
    pub fn matches_canonical(&self, text: &str) -> bool {
        tiles(&self.emit_pattern, text)
    }

    /// Surface tokens this mapping reads.
    pub fn accepted_surfaces(&self) -> impl Iterator<Item = &str> {
        self.surface_to_canonical.keys().map(|s| s.as_str())
    }

    /// Surface tokens this mapping writes.
    pub fn produced_surfaces(&self) -> impl Iterator<Item = &str> {
        self.canonical_to_surface.values().map(|s| s.as_str())
    }

    /// Canonical tokens produced by [`parse`](Self::parse).
    pub fn parsed_lemmas(&self) -> BTreeSet<&str> {
        self.surface_to_canonical.values().map(|s| s.as_str()).collect()
    }

    /// Canonical tokens understood by [`emit`](Self::emit).
    pub fn emitted_lemmas(&self) -> BTreeSet<&str> {
        self.canonical_to_surface.keys().map(|s| s.as_str()).collect()
    }

    pub fn parse_entries(&self) -> impl Iterator<Item = (&str, &str)> {
        self.surface_to_canonical
            .iter()
            .map(|(s, c)| (s.as_str(), c.as_str()))
    }

    pub fn emit_entries(&self) -> impl Iterator<Item = (&str, &str)> {
        self.canonical_to_surface
            .iter()
            .map(|(c, s)| (c.as_str(), s.as_str()))
    }

    pub(crate) fn summary_as(&self, kind: &'static str) -> LayerSummary {
        LayerSummary {
            kind,
            parse: self
                .parse_entries()
                .map(|(s, c)| (s.to_string(), c.to_string()))
                .collect(),
            emit: self
                .emit_entries()
                .map(|(c, s)| (c.to_string(), s.to_string()))
                .collect(),
        }
    }
}

impl Layer for Mapping {
    fn parse(&self, text: &str) -> String {
        Mapping::parse(self, text)
    }

    fn emit(&self, text: &str) -> String {
        Mapping::emit(self, text)
    }

    fn summary(&self) -> LayerSummary {
        self.summary_as("mapping")
    }
}

impl fmt::Display for Mapping {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let join = |pairs: Vec<String>| pairs.join(",  ");
        writeln!(
            f,
            "{}",
            join(self.parse_entries().map(|(s, c)| format!("{s} {c}")).collect())
        )?;
        writeln!(f)?;
        writeln!(
            f,
            "{}",
            join(self.emit_entries().map(|(c, s)| format!("{c} {s}")).collect())
        )
    }
}

/// Compile one case-insensitive alternation over `keys`, longest first.
fn build_pattern<'a>(
    keys: impl Iterator<Item = &'a String>,
    direction: Direction,
) -> Result<Regex, ConfigError> {
    let mut keys: Vec<&str> = keys
        .map(|k| k.as_str())
        .filter(|k| !k.is_empty())
        .collect();
    if keys.is_empty() {
        return Err(ConfigError::EmptyMapping { direction });
    }
    // Ties are broken alphabetically so the pattern is reproducible.
    keys.sort_by(|a, b| {
        b.chars()
            .count()
            .cmp(&a.chars().count())
            .then_with(|| a.cmp(b))
    });
    let alternation = keys
        .iter()
        .map(|k| regex::escape(k))
        .collect::<Vec<_>>()
        .join("|");
    RegexBuilder::new(&alternation)
        .case_insensitive(true)
        .build()
        .map_err(|source| ConfigError::Pattern { direction, source })
}

/// True when the left-to-right scan of `pattern` covers all of a non-empty
/// `text` with no gaps.
fn tiles(pattern: &Regex, text: &str) -> bool {
    let mut end = 0;
    for m in pattern.find_iter(text) {
        if m.start() != end {
            return false;
        }
        end = m.end();
    }
    !text.is_empty() && end == text.len()
}

/// Scan `text` once, replacing each match with its looked-up value.
///
/// Case folding can match text whose normalised form has no entry (for
/// example the Kelvin sign against `k`); such matches are left untouched.
fn substitute<'m>(
    pattern: &Regex,
    text: &str,
    lookup: impl Fn(&str) -> Option<&'m String>,
) -> String {
    pattern
        .replace_all(text, |caps: &Captures| {
            let matched = &caps[0];
            match lookup(matched) {
                Some(value) => value.clone(),
                None => matched.to_string(),
            }
        })
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small() -> Mapping {
        Mapping::from_tables(&["k KU, ya YA, kya KYA, ka KA, a A"], &[], &[]).unwrap()
    }

    #[test]
    fn longest_key_wins() {
        let m = small();
        assert_eq!(m.parse("kya"), "KYA");
        assert_ne!(m.parse("kya"), format!("{}{}", m.parse("k"), m.parse("ya")));
    }

    #[test]
    fn scan_is_left_to_right_and_non_overlapping() {
        let m = small();
        // "kyaa": "kya" first, then "a".
        assert_eq!(m.parse("kyaa"), "KYAA");
        assert_eq!(m.parse("kaya"), "KAYA");
    }

    #[test]
    fn unmatched_text_passes_through() {
        let m = small();
        assert_eq!(m.parse("ka, 12 ka!"), "KA, 12 KA!");
        assert_eq!(m.parse("xyz"), "xyz");
    }

    #[test]
    fn parse_is_case_insensitive() {
        let m = small();
        assert_eq!(m.parse("KyA"), "KYA");
    }

    #[test]
    fn emit_normalises_case_before_lookup() {
        let m = small();
        assert_eq!(m.emit("KYA"), "kya");
        assert_eq!(m.emit("kya"), "kya");
        assert_eq!(m.emit("KaKYA"), "kakya");
    }

    #[test]
    fn later_spelling_is_emitted() {
        let m = Mapping::from_tables(&["zi ZI, ji ZI"], &[], &[]).unwrap();
        assert_eq!(m.parse("zi"), "ZI");
        assert_eq!(m.parse("ji"), "ZI");
        assert_eq!(m.emit("ZI"), "ji");
    }

    #[test]
    fn overrides_take_precedence() {
        let m = Mapping::from_tables(&["ti TI, di DI"], &["chi TI"], &["ji DI"]).unwrap();
        assert_eq!(m.parse("chi"), "TI");
        assert_eq!(m.parse("ti"), "TI");
        assert_eq!(m.emit("TI"), "ti");
        assert_eq!(m.emit("DI"), "ji");
        // Emit-only spellings are not read back.
        assert_eq!(m.parse("ji"), "ji");
    }

    #[test]
    fn emit_only_table_can_stand_alone() {
        let m = Mapping::from_tables(&["a A"], &[], &["o WO"]).unwrap();
        assert_eq!(m.emit("WO"), "o");
    }

    #[test]
    fn empty_mapping_is_rejected() {
        let err = Mapping::from_tables(&[], &[], &["o WO"]).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::EmptyMapping {
                direction: Direction::Parse
            }
        ));
    }

    #[test]
    fn empty_emit_side_is_rejected() {
        let err = Mapping::from_tables(&[], &["a A"], &[]).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::EmptyMapping {
                direction: Direction::Emit
            }
        ));
    }

    #[test]
    fn malformed_table_is_a_config_error() {
        let err = Mapping::from_tables(&["a A, i"], &[], &[]).unwrap_err();
        assert!(matches!(err, ConfigError::Table(_)));
    }

    #[test]
    fn blank_override_table_is_a_config_error() {
        let err = Mapping::from_tables(&["a A"], &[" "], &[]).unwrap_err();
        assert!(matches!(err, ConfigError::Table(_)));
    }

    #[test]
    fn metacharacters_are_literal() {
        let m = Mapping::from_tables(&["n' N', - -, a. DOT"], &[], &[]).unwrap();
        assert_eq!(m.parse("n'-a."), "N'-DOT");
        assert_eq!(m.parse("ab"), "ab");
        assert_eq!(m.emit("N'-"), "n'-");
    }

    #[test]
    fn accessors() {
        let m = Mapping::from_tables(&["zi ZI, ji ZI, a A"], &[], &["o WO"]).unwrap();
        let accepted: Vec<&str> = m.accepted_surfaces().collect();
        assert_eq!(accepted, vec!["a", "ji", "zi"]);
        let produced: BTreeSet<&str> = m.produced_surfaces().collect();
        assert_eq!(produced, BTreeSet::from(["a", "ji", "o"]));
        assert_eq!(m.parsed_lemmas(), BTreeSet::from(["A", "ZI"]));
        assert_eq!(m.emitted_lemmas(), BTreeSet::from(["A", "WO", "ZI"]));
    }

    #[test]
    fn whole_text_matches() {
        let m = small();
        assert!(m.matches_surface("kyaka"));
        assert!(m.matches_surface("KyA"));
        assert!(!m.matches_surface("kyax"));
        assert!(!m.matches_surface("xkya"));
        assert!(!m.matches_surface(""));
        assert!(m.matches_canonical("KYAKA"));
        assert!(m.matches_canonical("kyaka"));
        assert!(!m.matches_canonical("KYA KA"));
    }

    #[test]
    fn kana_keys() {
        let m = Mapping::from_tables(&["き KI, きゃ KYA, ゃ XYA"], &[], &[]).unwrap();
        assert_eq!(m.parse("きゃき"), "KYAKI");
        assert_eq!(m.emit("KIXYA"), "きゃ");
    }

    #[test]
    fn display_lists_both_directions() {
        let m = Mapping::from_tables(&["a A"], &[], &[]).unwrap();
        assert_eq!(m.to_string(), "a A\n\nA a\n");
    }
}
