//! Conversion between Japanese kana scripts and romanizations.
//!
//! Every format reads into and writes out of one canonical lemma alphabet, so
//! any pair of formats can be chained through it.

pub mod error;
pub mod format;
pub mod lemma;
pub mod mapping;
pub mod registry;
pub mod settings;
pub mod table;

pub use error::{ConfigError, ConvertError, FormatError};
pub use registry::{convert, FormatName, Registry};
