use card_deck::CardRecord;
use card_press::{LayoutOptions, build_document, generate_pdf, layout, render_pdf_bytes};

fn test_cards(count: usize) -> Vec<CardRecord> {
    (1..=count)
        .map(|i| CardRecord {
            word: format!("word{i}"),
            part_of_speech: "noun".to_string(),
            definition: format!("definition of word{i}"),
            example: format!("word{i} used in a short sentence"),
            display_index: i,
        })
        .collect()
}

#[test]
fn test_two_pages_per_sheet() {
    let options = LayoutOptions::default();

    for (count, expected_pages) in [(1, 2), (4, 2), (5, 4), (9, 6)] {
        let pairs = layout(&test_cards(count), &options).unwrap();
        let doc = build_document(&pairs, &options);
        assert_eq!(doc.pages.len(), expected_pages);
    }
}

#[test]
fn test_empty_deck_builds_empty_document() {
    let doc = build_document(&[], &LayoutOptions::default());
    assert!(doc.pages.is_empty());
}

#[test]
fn test_rendered_bytes_are_a_pdf() {
    let options = LayoutOptions::default();
    let pairs = layout(&test_cards(6), &options).unwrap();

    let bytes = render_pdf_bytes(&pairs, &options).unwrap();
    assert!(!bytes.is_empty());
    assert!(bytes.starts_with(b"%PDF"));
}

#[tokio::test]
async fn test_generate_pdf_writes_file() {
    let temp_dir = tempfile::tempdir().unwrap();
    let output_path = temp_dir.path().join("cards.pdf");

    let cards = test_cards(5);
    generate_pdf(&cards, &LayoutOptions::default(), &output_path)
        .await
        .unwrap();

    let bytes = std::fs::read(&output_path).unwrap();
    assert!(bytes.starts_with(b"%PDF"));
}

#[tokio::test]
async fn test_generate_pdf_rejects_bad_options() {
    let temp_dir = tempfile::tempdir().unwrap();
    let output_path = temp_dir.path().join("cards.pdf");

    let options = LayoutOptions {
        max_line_width: 0,
        ..LayoutOptions::default()
    };

    let result = generate_pdf(&test_cards(2), &options, &output_path).await;
    assert!(result.is_err());
    assert!(!output_path.exists());
}
