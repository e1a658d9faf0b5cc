//! On-screen preview model
//!
//! A preview group lists one sheet's front cells and back cells in the order
//! a column-by-column walk encounters them: the front page as printed, the
//! back page as seen after flipping the sheet along its long edge. That is
//! what a reader holding the printed sheet sees, so the arrangement can be
//! checked without printing anything. Renderers (the CLI's text dump, a
//! web or GUI grid) consume this model and never touch pairing logic.

use crate::pairing::{back_display_order, front_display_order};
use crate::types::{BackCell, FrontCell, PagePair};

/// One sheet's preview, borrowing cells from a [`PagePair`]
#[derive(Debug, Clone)]
pub struct PreviewGroup<'a> {
    pub sheet_index: usize,
    pub front: Vec<&'a FrontCell>,
    pub back: Vec<&'a BackCell>,
}

/// Build preview groups for at most `max_sheets` sheets (`None` shows all).
pub fn preview_groups(pairs: &[PagePair], max_sheets: Option<usize>) -> Vec<PreviewGroup<'_>> {
    let shown = match max_sheets {
        Some(n) => &pairs[..pairs.len().min(n)],
        None => pairs,
    };

    shown.iter().map(preview_group).collect()
}

fn preview_group(pair: &PagePair) -> PreviewGroup<'_> {
    let batch_len = pair.front_cells.len();

    PreviewGroup {
        sheet_index: pair.sheet_index,
        front: front_display_order(batch_len)
            .into_iter()
            .map(|i| &pair.front_cells[i])
            .collect(),
        back: back_display_order(batch_len)
            .into_iter()
            .map(|i| &pair.back_cells[i])
            .collect(),
    }
}
