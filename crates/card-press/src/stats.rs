use crate::constants::CARDS_PER_SHEET;

/// Statistics about a card layout
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutStatistics {
    /// Number of cards being laid out
    pub card_count: usize,
    /// Physical sheets needed (one page pair each)
    pub sheet_count: usize,
    /// Pages in the output PDF (front and back of every sheet)
    pub pdf_page_count: usize,
    /// Cards on the final sheet (the full four unless the count leaves a
    /// remainder; zero only when there are no cards at all)
    pub last_sheet_cards: usize,
}

/// Calculate layout statistics for a card count
pub fn calculate_statistics(card_count: usize) -> LayoutStatistics {
    let sheet_count = (card_count + CARDS_PER_SHEET - 1) / CARDS_PER_SHEET;
    let pdf_page_count = sheet_count * 2;

    let remainder = card_count % CARDS_PER_SHEET;
    let last_sheet_cards = if card_count == 0 {
        0
    } else if remainder == 0 {
        CARDS_PER_SHEET
    } else {
        remainder
    };

    LayoutStatistics {
        card_count,
        sheet_count,
        pdf_page_count,
        last_sheet_cards,
    }
}
