mod constants;
mod layout;
mod options;
mod pairing;
mod pdf;
mod preview;
mod stats;
mod types;
mod wrap;

pub use constants::{CARDS_PER_SHEET, GRID_COLS, GRID_ROWS};
pub use layout::layout;
pub use options::LayoutOptions;
pub use pairing::{back_display_order, front_display_order, reflect_rect};
pub use pdf::{build_document, generate_pdf, render_pdf_bytes};
pub use preview::{PreviewGroup, preview_groups};
pub use stats::{LayoutStatistics, calculate_statistics};
pub use types::*;
