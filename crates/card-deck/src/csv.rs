use crate::columns::ColumnMapping;
use crate::types::{CardRecord, Result};
use std::path::Path;

/// Parse raw CSV bytes into an ordered card sequence.
///
/// The first row is the header; the four configured columns are looked up
/// there by name. Every data row has its four fields trimmed and is kept
/// only if all of them are non-empty. Dropped rows leave no trace:
/// `display_index` counts 1..n over the survivors with no gaps.
///
/// Zero surviving rows is `Ok` with an empty vec. Errors are reserved for
/// input the parser cannot read at all: bytes that are not UTF-8, rows that
/// do not match the header shape (an unterminated quote usually surfaces
/// this way), or a configured column missing from the header.
pub fn normalize(bytes: &[u8], columns: &ColumnMapping) -> Result<Vec<CardRecord>> {
    let contents = std::str::from_utf8(bytes)?;

    let mut reader = csv::Reader::from_reader(contents.as_bytes());
    let indexes = columns.resolve(reader.headers()?)?;

    let mut cards = Vec::new();
    for result in reader.records() {
        let record = result?;

        let word = record.get(indexes.word).unwrap_or("").trim();
        let part_of_speech = record.get(indexes.part_of_speech).unwrap_or("").trim();
        let definition = record.get(indexes.definition).unwrap_or("").trim();
        let example = record.get(indexes.example).unwrap_or("").trim();

        if word.is_empty() || part_of_speech.is_empty() || definition.is_empty() || example.is_empty()
        {
            continue;
        }

        cards.push(CardRecord {
            word: word.to_string(),
            part_of_speech: part_of_speech.to_string(),
            definition: definition.to_string(),
            example: example.to_string(),
            display_index: cards.len() + 1,
        });
    }

    Ok(cards)
}

/// Read a CSV file and normalize it off the async runtime's worker threads.
pub async fn load_from_csv(
    path: impl AsRef<Path>,
    columns: &ColumnMapping,
) -> Result<Vec<CardRecord>> {
    let path = path.as_ref().to_owned();
    let columns = columns.clone();

    let bytes = tokio::fs::read(&path).await?;

    // Parsing is CPU-bound, spawn blocking
    let cards = tokio::task::spawn_blocking(move || normalize(&bytes, &columns)).await??;

    Ok(cards)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::DeckError;

    fn normalize_default(csv: &str) -> Result<Vec<CardRecord>> {
        normalize(csv.as_bytes(), &ColumnMapping::default())
    }

    #[test]
    fn test_all_valid_rows_kept_in_order() {
        let csv = "word,part_of_speech,definition,example\n\
                   apple,noun,a round fruit,she ate an apple\n\
                   run,verb,move quickly,they run every day\n\
                   blue,adjective,the color of the sky,the blue door\n";
        let cards = normalize_default(csv).unwrap();

        assert_eq!(cards.len(), 3);
        assert_eq!(cards[0].word, "apple");
        assert_eq!(cards[1].word, "run");
        assert_eq!(cards[2].word, "blue");
        let indexes: Vec<usize> = cards.iter().map(|c| c.display_index).collect();
        assert_eq!(indexes, vec![1, 2, 3]);
    }

    #[test]
    fn test_invalid_rows_dropped_and_survivors_renumbered() {
        let csv = "word,part_of_speech,definition,example\n\
                   apple,noun,a round fruit,she ate an apple\n\
                   ,noun,missing word,no word here\n\
                   run,verb,,they run every day\n\
                   blue,adjective,the color of the sky,the blue door\n";
        let cards = normalize_default(csv).unwrap();

        assert_eq!(cards.len(), 2);
        assert_eq!(cards[0].word, "apple");
        assert_eq!(cards[0].display_index, 1);
        assert_eq!(cards[1].word, "blue");
        assert_eq!(cards[1].display_index, 2);
    }

    #[test]
    fn test_whitespace_only_field_drops_row() {
        let csv = "word,part_of_speech,definition,example\n\
                   apple,noun,a round fruit,   \n\
                   run,verb,move quickly,they run every day\n";
        let cards = normalize_default(csv).unwrap();

        assert_eq!(cards.len(), 1);
        assert_eq!(cards[0].word, "run");
        assert_eq!(cards[0].display_index, 1);
    }

    #[test]
    fn test_fields_are_trimmed() {
        let csv = "word,part_of_speech,definition,example\n\
                   \"  apple \",\" noun\",\" a round fruit \",\" she ate an apple  \"\n";
        let cards = normalize_default(csv).unwrap();

        assert_eq!(cards.len(), 1);
        assert_eq!(cards[0].word, "apple");
        assert_eq!(cards[0].part_of_speech, "noun");
        assert_eq!(cards[0].definition, "a round fruit");
        assert_eq!(cards[0].example, "she ate an apple");
    }

    #[test]
    fn test_header_only_is_ok_and_empty() {
        let cards = normalize_default("word,part_of_speech,definition,example\n").unwrap();
        assert!(cards.is_empty());
    }

    #[test]
    fn test_all_rows_invalid_is_ok_and_empty() {
        let csv = "word,part_of_speech,definition,example\n\
                   ,noun,def,ex\n\
                   word,,def,ex\n";
        let cards = normalize_default(csv).unwrap();
        assert!(cards.is_empty());
    }

    #[test]
    fn test_empty_input_reports_missing_column() {
        let result = normalize_default("");
        match result {
            Err(DeckError::MissingColumn(name)) => assert_eq!(name, "word"),
            other => panic!("Expected MissingColumn error, got {:?}", other),
        }
    }

    #[test]
    fn test_invalid_utf8_is_encoding_error() {
        let bytes = b"word,part_of_speech,definition,example\napple,noun,\xff\xfe,example\n";
        let result = normalize(bytes, &ColumnMapping::default());
        assert!(matches!(result, Err(DeckError::Encoding(_))));
    }

    #[test]
    fn test_unterminated_quote_is_csv_error() {
        let csv = "word,part_of_speech,definition,example\n\
                   \"unterminated\n";
        let result = normalize_default(csv);
        assert!(matches!(result, Err(DeckError::Csv(_))));
    }

    #[test]
    fn test_ragged_row_is_csv_error() {
        let csv = "word,part_of_speech,definition,example\n\
                   apple,noun\n";
        let result = normalize_default(csv);
        assert!(matches!(result, Err(DeckError::Csv(_))));
    }

    #[test]
    fn test_custom_column_mapping() {
        let mapping = ColumnMapping {
            word: "term".to_string(),
            part_of_speech: "pos".to_string(),
            definition: "meaning".to_string(),
            example: "usage".to_string(),
        };
        let csv = "id,term,pos,meaning,usage\n\
                   7,apple,noun,a round fruit,she ate an apple\n";
        let cards = normalize(csv.as_bytes(), &mapping).unwrap();

        assert_eq!(cards.len(), 1);
        assert_eq!(cards[0].word, "apple");
        assert_eq!(cards[0].display_index, 1);
    }

    #[test]
    fn test_quoted_fields_with_commas_and_newlines() {
        let csv = "word,part_of_speech,definition,example\n\
                   serendipity,noun,\"luck, of the happy kind\",\"found it,\nby accident\"\n";
        let cards = normalize_default(csv).unwrap();

        assert_eq!(cards.len(), 1);
        assert_eq!(cards[0].definition, "luck, of the happy kind");
        assert_eq!(cards[0].example, "found it,\nby accident");
    }
}
