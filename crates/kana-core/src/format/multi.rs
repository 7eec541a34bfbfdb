use std::collections::BTreeSet;
use std::sync::Arc;

use super::{Format, FormatSummary};
use crate::error::FormatError;

/// Input-only format that accepts several scripts in the same text.
///
/// Each constituent parses the whole string in turn. A constituent must not
/// match the canonical output of the ones before it, so romanizations go
/// first: kana layers produce Latin lemmas a romaji layer would re-read, but
/// never match Latin text themselves.
#[derive(Clone)]
pub struct MultiFormat {
    name: String,
    formats: Vec<Arc<dyn Format>>,
}

impl MultiFormat {
    pub fn new(name: impl Into<String>, formats: Vec<Arc<dyn Format>>) -> Self {
        Self {
            name: name.into(),
            formats,
        }
    }

    pub fn constituents(&self) -> impl Iterator<Item = &str> {
        self.formats.iter().map(|f| f.name())
    }
}

impl Format for MultiFormat {
    fn name(&self) -> &str {
        &self.name
    }

    fn parse(&self, text: &str) -> String {
        self.formats
            .iter()
            .fold(text.to_string(), |acc, format| format.parse(&acc))
    }

    fn emit(&self, _text: &str) -> Result<String, FormatError> {
        Err(FormatError::EmitUnsupported {
            format: self.name.clone(),
        })
    }

    fn can_emit(&self) -> bool {
        false
    }

    fn parsed_lemmas(&self) -> BTreeSet<&str> {
        self.formats
            .iter()
            .flat_map(|f| f.parsed_lemmas())
            .collect()
    }

    fn emitted_lemmas(&self) -> BTreeSet<&str> {
        BTreeSet::new()
    }

    fn summary(&self) -> FormatSummary {
        FormatSummary {
            name: self.name.clone(),
            can_emit: false,
            layers: self
                .formats
                .iter()
                .flat_map(|f| f.summary().layers)
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::TextFormat;

    fn kana() -> MultiFormat {
        MultiFormat::new(
            "kana",
            vec![
                Arc::new(TextFormat::hiragana().unwrap()),
                Arc::new(TextFormat::katakana().unwrap()),
            ],
        )
    }

    #[test]
    fn parses_each_script() {
        assert_eq!(kana().parse("ひらがなとカタカナ"), "HIRAGANATOKATAKANA");
    }

    #[test]
    fn emit_is_unsupported() {
        let f = kana();
        assert!(!f.can_emit());
        let err = f.emit("KANA").unwrap_err();
        assert!(matches!(err, FormatError::EmitUnsupported { ref format } if format == "kana"));
        assert!(f.emitted_lemmas().is_empty());
    }

    #[test]
    fn lemmas_are_the_union_of_constituents() {
        let f = kana();
        assert_eq!(f.parsed_lemmas().len(), 153);
        let names: Vec<&str> = f.constituents().collect();
        assert_eq!(names, vec!["hiragana", "katakana"]);
    }
}
