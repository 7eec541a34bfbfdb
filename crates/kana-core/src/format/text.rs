use std::collections::BTreeSet;

use super::{Format, FormatSummary};
use crate::error::{ConfigError, FormatError};
use crate::mapping::Mapping;
use crate::table::data;

/// A script that maps mora-for-mora onto lemmas (hiragana, katakana).
#[derive(Debug, Clone)]
pub struct TextFormat {
    name: String,
    mapping: Mapping,
}

impl TextFormat {
    pub fn new(name: impl Into<String>, mapping: Mapping) -> Self {
        Self {
            name: name.into(),
            mapping,
        }
    }

    pub fn hiragana() -> Result<Self, ConfigError> {
        Ok(Self::new(
            "hiragana",
            Mapping::from_tables(&[data::HIRAGANA], &[], &[])?,
        ))
    }

    pub fn katakana() -> Result<Self, ConfigError> {
        Ok(Self::new(
            "katakana",
            Mapping::from_tables(&[data::KATAKANA], &[], &[])?,
        ))
    }

    pub fn mapping(&self) -> &Mapping {
        &self.mapping
    }
}

impl Format for TextFormat {
    fn name(&self) -> &str {
        &self.name
    }

    fn parse(&self, text: &str) -> String {
        self.mapping.parse(text)
    }

    fn emit(&self, text: &str) -> Result<String, FormatError> {
        Ok(self.mapping.emit(text))
    }

    fn parsed_lemmas(&self) -> BTreeSet<&str> {
        self.mapping.parsed_lemmas()
    }

    fn emitted_lemmas(&self) -> BTreeSet<&str> {
        self.mapping.emitted_lemmas()
    }

    fn summary(&self) -> FormatSummary {
        FormatSummary {
            name: self.name.clone(),
            can_emit: true,
            layers: vec![self.mapping.summary_as("base")],
        }
    }
}
