//! Sheet layout: ordered cards in, paginated drawing data out

use crate::constants::CARDS_PER_SHEET;
use crate::options::LayoutOptions;
use crate::pairing::{grid_position, reflect_rect};
use crate::types::{BackCell, FrontCell, PagePair, Rect, Result};
use crate::wrap::wrap_text;
use card_deck::CardRecord;

/// Lay out cards on duplex sheets.
///
/// Cards are taken four at a time in input order; each batch becomes one
/// [`PagePair`] with the front page first, the order a duplex printer
/// expects. The final batch may hold fewer than four cards, and no cards at
/// all produces no pairs. Card data never causes an error here; only the
/// options can be invalid, and they are checked before any geometry is
/// produced.
pub fn layout(cards: &[CardRecord], options: &LayoutOptions) -> Result<Vec<PagePair>> {
    options.validate()?;

    let pairs = cards
        .chunks(CARDS_PER_SHEET)
        .enumerate()
        .map(|(sheet_index, batch)| layout_sheet(sheet_index, batch, options))
        .collect();

    Ok(pairs)
}

fn layout_sheet(sheet_index: usize, batch: &[CardRecord], options: &LayoutOptions) -> PagePair {
    let mut front_cells = Vec::with_capacity(batch.len());
    let mut back_cells = Vec::with_capacity(batch.len());

    for (i, card) in batch.iter().enumerate() {
        let front_rect = front_cell_rect(i, options);
        let back_rect = reflect_rect(front_rect, options.page_width_mm, options.page_height_mm);

        front_cells.push(FrontCell {
            display_index: card.display_index,
            word: card.word.clone(),
            part_of_speech: card.part_of_speech.clone(),
            rect: front_rect,
        });

        back_cells.push(BackCell {
            display_index: card.display_index,
            definition_lines: wrap_text(&card.definition, options.max_line_width),
            example_lines: wrap_text(&card.example, options.max_line_width),
            rect: back_rect,
        });
    }

    PagePair {
        sheet_index,
        front_cells,
        back_cells,
    }
}

/// Front cell bounds for a batch position, reading order from the top-left
fn front_cell_rect(index: usize, options: &LayoutOptions) -> Rect {
    let pos = grid_position(index);

    let x = options.margin_left_mm
        + pos.col as f32 * (options.cell_width_mm + options.cell_spacing_mm);
    let y = options.page_height_mm
        - options.margin_top_mm
        - (pos.row + 1) as f32 * options.cell_height_mm
        - pos.row as f32 * options.cell_spacing_mm;

    Rect::new(x, y, options.cell_width_mm, options.cell_height_mm)
}
