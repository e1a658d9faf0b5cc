use crate::types::{DeckError, Result};

/// Names of the CSV columns the four card fields are read from.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnMapping {
    pub word: String,
    pub part_of_speech: String,
    pub definition: String,
    pub example: String,
}

impl Default for ColumnMapping {
    fn default() -> Self {
        Self {
            word: "word".to_string(),
            part_of_speech: "part_of_speech".to_string(),
            definition: "definition".to_string(),
            example: "example".to_string(),
        }
    }
}

/// Resolved header positions for a [`ColumnMapping`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct ColumnIndexes {
    pub word: usize,
    pub part_of_speech: usize,
    pub definition: usize,
    pub example: usize,
}

impl ColumnMapping {
    /// Locate each configured column in the header row.
    ///
    /// Header cells are trimmed before comparison. A name that appears
    /// nowhere in the header is fatal for the whole parse.
    pub(crate) fn resolve(&self, headers: &csv::StringRecord) -> Result<ColumnIndexes> {
        Ok(ColumnIndexes {
            word: find_column(headers, &self.word)?,
            part_of_speech: find_column(headers, &self.part_of_speech)?,
            definition: find_column(headers, &self.definition)?,
            example: find_column(headers, &self.example)?,
        })
    }
}

fn find_column(headers: &csv::StringRecord, name: &str) -> Result<usize> {
    headers
        .iter()
        .position(|h| h.trim() == name)
        .ok_or_else(|| DeckError::MissingColumn(name.to_string()))
}
