//! The master canonical alphabet.
//!
//! Lemmas are unambiguous, script-independent tokens for one mora or marker.
//! Every format converts to and from this alphabet and nothing else.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::error::ConfigError;
use crate::table::data;

pub const SOKUON: &str = "Q";
pub const CHOUON: &str = "-";
pub const NASAL: &str = "N'";

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum LemmaGroup {
    Base,
    Borrowed,
    Archaic,
    Rare,
    SmallKana,
}

impl LemmaGroup {
    pub const ALL: [LemmaGroup; 5] = [
        LemmaGroup::Base,
        LemmaGroup::Borrowed,
        LemmaGroup::Archaic,
        LemmaGroup::Rare,
        LemmaGroup::SmallKana,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            LemmaGroup::Base => "base",
            LemmaGroup::Borrowed => "borrowed",
            LemmaGroup::Archaic => "archaic",
            LemmaGroup::Rare => "rare",
            LemmaGroup::SmallKana => "small-kana",
        }
    }

    fn source(self) -> &'static str {
        match self {
            LemmaGroup::Base => data::LEMMAS_BASE,
            LemmaGroup::Borrowed => data::LEMMAS_BORROWED,
            LemmaGroup::Archaic => data::LEMMAS_ARCHAIC,
            LemmaGroup::Rare => data::LEMMAS_RARE,
            LemmaGroup::SmallKana => data::LEMMAS_SMALL_KANA,
        }
    }
}

/// The closed set of canonical lemmas, each tagged with its group.
#[derive(Debug, Clone)]
pub struct Alphabet {
    lemmas: BTreeMap<String, LemmaGroup>,
    /// Lemmas in table order, for display.
    ordered: Vec<String>,
}

impl Alphabet {
    /// Build the alphabet from the compiled-in lemma lists.
    pub fn load() -> Result<Self, ConfigError> {
        let mut lemmas = BTreeMap::new();
        let mut ordered = Vec::new();
        for group in LemmaGroup::ALL {
            for lemma in group.source().split_whitespace() {
                if lemmas.insert(lemma.to_string(), group).is_some() {
                    return Err(ConfigError::DuplicateLemma(lemma.to_string()));
                }
                ordered.push(lemma.to_string());
            }
        }
        Ok(Self { lemmas, ordered })
    }

    pub fn contains(&self, lemma: &str) -> bool {
        self.lemmas.contains_key(lemma)
    }

    pub fn group(&self, lemma: &str) -> Option<LemmaGroup> {
        self.lemmas.get(lemma).copied()
    }

    pub fn len(&self) -> usize {
        self.ordered.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ordered.is_empty()
    }

    /// Lemmas in the order the source tables list them.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.ordered.iter().map(|s| s.as_str())
    }

    pub fn in_group(&self, group: LemmaGroup) -> impl Iterator<Item = &str> {
        self.ordered
            .iter()
            .filter(move |l| self.lemmas.get(l.as_str()) == Some(&group))
            .map(|s| s.as_str())
    }
}
