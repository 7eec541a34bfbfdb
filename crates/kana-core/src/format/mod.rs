//! Named, directional formats built on top of mappings.
//!
//! - [`TextFormat`]: one mapping, for kana scripts.
//! - [`RomajiFormat`]: chouon, sokuon, nasal and base layers, for romanizations.
//! - [`MultiFormat`]: several formats chained for mixed-script input.

mod multi;
mod romaji;
mod text;

use std::collections::BTreeSet;

use serde::Serialize;

use crate::error::FormatError;
use crate::mapping::LayerSummary;

pub use multi::MultiFormat;
pub use romaji::{ChouonStyle, NasalLayer, RomajiFormat};
pub use text::TextFormat;

pub trait Format: Send + Sync {
    fn name(&self) -> &str;

    /// Convert surface text to canonical lemmas. Unknown text passes through.
    fn parse(&self, text: &str) -> String;

    /// Convert canonical lemmas to this format.
    fn emit(&self, text: &str) -> Result<String, FormatError>;

    /// Whether [`emit`](Format::emit) is supported.
    fn can_emit(&self) -> bool {
        true
    }

    /// Lemmas the base mapping can produce when parsing.
    fn parsed_lemmas(&self) -> BTreeSet<&str>;

    /// Lemmas the base mapping can render when emitting.
    fn emitted_lemmas(&self) -> BTreeSet<&str>;

    fn summary(&self) -> FormatSummary;
}

#[derive(Debug, Clone, Serialize)]
pub struct FormatSummary {
    pub name: String,
    pub can_emit: bool,
    pub layers: Vec<LayerSummary>,
}
