use thiserror::Error;

#[derive(Error, Debug)]
pub enum DeckError {
    #[error("Encoding error: {0}")]
    Encoding(#[from] std::str::Utf8Error),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("Column '{0}' not found in CSV header")]
    MissingColumn(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Task join error: {0}")]
    TaskJoin(#[from] tokio::task::JoinError),
}

pub type Result<T> = std::result::Result<T, DeckError>;

/// One normalized vocabulary card.
///
/// A record only exists if all four text fields were non-empty after
/// trimming; `display_index` is the 1-based position among the rows that
/// survived that filter.
#[derive(Debug, Clone, PartialEq)]
pub struct CardRecord {
    pub word: String,
    pub part_of_speech: String,
    pub definition: String,
    pub example: String,
    pub display_index: usize,
}
