mod columns;
mod csv;
mod types;

pub use columns::ColumnMapping;
pub use self::csv::{load_from_csv, normalize};
pub use types::{CardRecord, DeckError, Result};
