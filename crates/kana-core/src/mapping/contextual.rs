use regex::{Regex, RegexBuilder};

use super::{Layer, LayerSummary};
use crate::error::{ConfigError, Direction};

/// The set of characters allowed to follow a contextual trigger.
#[derive(Debug, Clone)]
pub struct Lookahead {
    /// Lower-case members of the class.
    class: String,
    /// Also admit end of input and any character that cannot continue a
    /// romanized word (anything but an ASCII letter or apostrophe).
    boundary: bool,
}

impl Lookahead {
    pub fn new(class: &str, boundary: bool) -> Self {
        Self {
            class: class.to_lowercase(),
            boundary,
        }
    }

    /// Consonants that close a syllabic nasal: every ASCII consonant but `y`,
    /// or a word boundary.
    pub fn nasal() -> Self {
        Self::new("bcdfghjklmnpqrstvwxz", true)
    }

    /// `b`, `m` and `p`, where traditional Hepburn writes the nasal as `m`.
    pub fn labial() -> Self {
        Self::new("bmp", false)
    }

    pub fn admits(&self, next: Option<char>) -> bool {
        match next {
            None => self.boundary,
            Some(c) if self.class.contains(c.to_ascii_lowercase()) => true,
            Some(c) => self.boundary && !(c.is_ascii_alphabetic() || c == '\''),
        }
    }

    pub fn class(&self) -> &str {
        &self.class
    }

    pub fn has_boundary(&self) -> bool {
        self.boundary
    }
}

/// A single substitution gated by what follows it.
///
/// Used for the syllabic nasal: a bare `n` is the nasal mora only when a
/// consonant or the end of the word follows; before a vowel or `y` it opens
/// the next syllable.
#[derive(Debug, Clone)]
pub struct ContextualMapping {
    surface: String,
    canonical: String,
    lookahead: Lookahead,
    parse_trigger: Regex,
    emit_trigger: Regex,
}

impl ContextualMapping {
    pub fn new(surface: &str, canonical: &str, lookahead: Lookahead) -> Result<Self, ConfigError> {
        Ok(Self {
            surface: surface.to_string(),
            canonical: canonical.to_uppercase(),
            parse_trigger: trigger(surface, Direction::Parse)?,
            emit_trigger: trigger(canonical, Direction::Emit)?,
            lookahead,
        })
    }

    /// `n` before a consonant or boundary is the nasal lemma `N'`.
    pub fn nasal() -> Result<Self, ConfigError> {
        Self::new("n", crate::lemma::NASAL, Lookahead::nasal())
    }

    /// `m` before a labial is the nasal lemma `N'`.
    pub fn labial_nasal() -> Result<Self, ConfigError> {
        Self::new("m", crate::lemma::NASAL, Lookahead::labial())
    }

    pub fn parse(&self, text: &str) -> String {
        self.substitute(&self.parse_trigger, text, &self.canonical)
    }

    pub fn emit(&self, text: &str) -> String {
        self.substitute(&self.emit_trigger, text, &self.surface)
    }

    pub fn surface(&self) -> &str {
        &self.surface
    }

    pub fn canonical(&self) -> &str {
        &self.canonical
    }

    pub fn lookahead(&self) -> &Lookahead {
        &self.lookahead
    }

    fn substitute(&self, trigger: &Regex, text: &str, replacement: &str) -> String {
        let mut out = String::with_capacity(text.len());
        let mut last = 0;
        for m in trigger.find_iter(text) {
            if self.lookahead.admits(text[m.end()..].chars().next()) {
                out.push_str(&text[last..m.start()]);
                out.push_str(replacement);
                last = m.end();
            }
        }
        out.push_str(&text[last..]);
        out
    }
}

impl Layer for ContextualMapping {
    fn parse(&self, text: &str) -> String {
        ContextualMapping::parse(self, text)
    }

    fn emit(&self, text: &str) -> String {
        ContextualMapping::emit(self, text)
    }

    fn summary(&self) -> LayerSummary {
        let lookahead = self.lookahead();
        let context = if lookahead.has_boundary() {
            format!("[{}]|$", lookahead.class())
        } else {
            format!("[{}]", lookahead.class())
        };
        LayerSummary {
            kind: "contextual",
            parse: vec![(
                format!("{}(?={context})", self.surface()),
                self.canonical().to_string(),
            )],
            emit: vec![(
                format!("{}(?={context})", self.canonical()),
                self.surface().to_string(),
            )],
        }
    }
}

fn trigger(literal: &str, direction: Direction) -> Result<Regex, ConfigError> {
    if literal.is_empty() {
        return Err(ConfigError::EmptyMapping { direction });
    }
    RegexBuilder::new(&regex::escape(literal))
        .case_insensitive(true)
        .build()
        .map_err(|source| ConfigError::Pattern { direction, source })
}
