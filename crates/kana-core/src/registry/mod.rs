//! The closed set of named formats and the `convert` entry point.

mod schemes;
#[cfg(test)]
mod tests;

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use std::sync::{Arc, OnceLock};

use serde::{Deserialize, Serialize};
use tracing::{debug, debug_span};

use crate::error::{ConfigError, ConvertError};
use crate::format::{Format, FormatSummary};
use crate::lemma::Alphabet;
use crate::settings::{settings, Settings};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum FormatName {
    Hiragana,
    Katakana,
    Nihon,
    Kunrei,
    Hepburn,
    HepburnStrict,
    Wapuro,
    /// Romaji, hiragana and katakana in one input. Cannot be an output.
    Mixed,
}

impl FormatName {
    pub const ALL: [FormatName; 8] = [
        FormatName::Hiragana,
        FormatName::Katakana,
        FormatName::Nihon,
        FormatName::Kunrei,
        FormatName::Hepburn,
        FormatName::HepburnStrict,
        FormatName::Wapuro,
        FormatName::Mixed,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            FormatName::Hiragana => "hiragana",
            FormatName::Katakana => "katakana",
            FormatName::Nihon => "nihon",
            FormatName::Kunrei => "kunrei",
            FormatName::Hepburn => "hepburn",
            FormatName::HepburnStrict => "hepburn-strict",
            FormatName::Wapuro => "wapuro",
            FormatName::Mixed => "mixed",
        }
    }

    /// Whether the format can be a conversion target.
    pub fn is_output(self) -> bool {
        self != FormatName::Mixed
    }

    fn expected() -> String {
        FormatName::ALL
            .iter()
            .map(|n| n.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for FormatName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FormatName {
    type Err = ConvertError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FormatName::ALL
            .into_iter()
            .find(|n| n.as_str() == s)
            .ok_or_else(|| ConvertError::UnknownFormat {
                name: s.to_string(),
                expected: FormatName::expected(),
            })
    }
}

/// Every format, built and validated against the lemma alphabet.
pub struct Registry {
    formats: BTreeMap<FormatName, Arc<dyn Format>>,
    alphabet: Alphabet,
}

impl Registry {
    /// Build all formats and check that they agree with the alphabet.
    pub fn build(settings: &Settings) -> Result<Self, ConfigError> {
        let _span = debug_span!("registry_build").entered();
        let registry = Self {
            formats: schemes::build_all(settings)?,
            alphabet: Alphabet::load()?,
        };
        registry.check_completeness()?;
        debug!(
            formats = registry.formats.len(),
            lemmas = registry.alphabet.len(),
            "registry built"
        );
        Ok(registry)
    }

    /// Get or build the process-wide registry from the active settings.
    pub fn global() -> &'static Registry {
        static INSTANCE: OnceLock<Registry> = OnceLock::new();
        INSTANCE
            .get_or_init(|| Registry::build(settings()).expect("built-in tables must be valid"))
    }

    /// Convert `text` between two formats named as strings.
    pub fn convert(&self, text: &str, from: &str, to: &str) -> Result<String, ConvertError> {
        self.convert_with(text, from.parse()?, to.parse()?)
    }

    pub fn convert_with(
        &self,
        text: &str,
        from: FormatName,
        to: FormatName,
    ) -> Result<String, ConvertError> {
        if !to.is_output() {
            return Err(ConvertError::InputOnly(to));
        }
        let _span = debug_span!("convert", %from, %to, len = text.len()).entered();
        let canonical = self.format(from).parse(text);
        debug!(canonical = canonical.as_str());
        let out = self.format(to).emit(&canonical)?;
        Ok(out.to_lowercase())
    }

    pub fn format(&self, name: FormatName) -> &dyn Format {
        // build_all registers every name.
        self.formats[&name].as_ref()
    }

    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    pub fn summaries(&self) -> Vec<FormatSummary> {
        self.formats.values().map(|f| f.summary()).collect()
    }

    fn check_completeness(&self) -> Result<(), ConfigError> {
        for format in self.formats.values() {
            let lemmas = format.parsed_lemmas().into_iter();
            for lemma in lemmas.chain(format.emitted_lemmas()) {
                if !self.alphabet.contains(lemma) {
                    return Err(ConfigError::UnknownLemma {
                        format: format.name().to_string(),
                        lemma: lemma.to_string(),
                    });
                }
            }
        }
        let hiragana = self.format(FormatName::Hiragana).parsed_lemmas();
        if let Some(missing) = self.alphabet.iter().find(|l| !hiragana.contains(l)) {
            return Err(ConfigError::UnhandledLemma(missing.to_string()));
        }
        Ok(())
    }
}

/// Convert `text` with the global registry.
///
/// ```
/// assert_eq!(kana_core::convert("いちご", "hiragana", "nihon").unwrap(), "itigo");
/// ```
pub fn convert(text: &str, from: &str, to: &str) -> Result<String, ConvertError> {
    Registry::global().convert(text, from, to)
}
