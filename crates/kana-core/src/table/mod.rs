//! Literal conversion tables and the loader that turns them into pair lists.
//!
//! Tables are written as comma-separated `surface canonical` entries. Newlines
//! and runs of spaces are free-form so the source can be laid out as a grid.

pub mod data;

/// One `(surface, canonical)` pair from a table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableEntry {
    pub surface: String,
    pub canonical: String,
}

impl TableEntry {
    pub fn new(surface: impl Into<String>, canonical: impl Into<String>) -> Self {
        Self {
            surface: surface.into(),
            canonical: canonical.into(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum TableError {
    #[error("table entry {index} ({entry:?}) has {tokens} tokens, expected 2")]
    MalformedEntry {
        index: usize,
        entry: String,
        tokens: usize,
    },
}

/// Parse table text into its entries, in source order.
///
/// Every comma-separated entry must hold exactly two tokens. Blank text and
/// a trailing comma both leave an empty entry, which is rejected like any
/// other malformed one.
pub fn read_table(text: &str) -> Result<Vec<TableEntry>, TableError> {
    text.split(',')
        .enumerate()
        .map(|(index, raw)| {
            let tokens: Vec<&str> = raw.split_whitespace().collect();
            match tokens.as_slice() {
                [surface, canonical] => Ok(TableEntry::new(*surface, *canonical)),
                _ => Err(TableError::MalformedEntry {
                    index,
                    entry: raw.trim().to_string(),
                    tokens: tokens.len(),
                }),
            }
        })
        .collect()
}

/// Read several tables and concatenate their entries.
pub fn read_tables(texts: &[&str]) -> Result<Vec<TableEntry>, TableError> {
    let mut entries = Vec::new();
    for text in texts {
        entries.extend(read_table(text)?);
    }
    Ok(entries)
}
