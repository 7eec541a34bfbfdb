use std::fmt;

use crate::registry::FormatName;
use crate::table::TableError;

/// Which side of a mapping a key set or pattern belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Surface to canonical.
    Parse,
    /// Canonical to surface.
    Emit,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Parse => f.write_str("parse"),
            Direction::Emit => f.write_str("emit"),
        }
    }
}

/// Static table data is inconsistent. Raised while building the registry,
/// never during a conversion.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error(transparent)]
    Table(#[from] TableError),
    #[error("mapping has no {direction} keys")]
    EmptyMapping { direction: Direction },
    #[error("failed to compile {direction} pattern: {source}")]
    Pattern {
        direction: Direction,
        #[source]
        source: regex::Error,
    },
    #[error("lemma {lemma:?} used by format {format} is not in the alphabet")]
    UnknownLemma { format: String, lemma: String },
    #[error("lemma {0:?} is not accepted by the hiragana format")]
    UnhandledLemma(String),
    #[error("lemma {0:?} listed twice in the alphabet")]
    DuplicateLemma(String),
}

#[derive(Debug, thiserror::Error)]
pub enum FormatError {
    #[error("format {format} is input-only and cannot emit")]
    EmitUnsupported { format: String },
}

#[derive(Debug, thiserror::Error)]
pub enum ConvertError {
    #[error("unknown format {name:?}; expected one of: {expected}")]
    UnknownFormat { name: String, expected: String },
    #[error("format {0} is input-only and cannot be used as output")]
    InputOnly(FormatName),
    #[error(transparent)]
    Format(#[from] FormatError),
}
