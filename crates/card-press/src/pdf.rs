//! PDF serialization of laid-out card sheets

use crate::constants::{BORDER_LINE_WIDTH, HELVETICA_CHAR_WIDTH_RATIO, pt_to_mm};
use crate::layout::layout;
use crate::options::LayoutOptions;
use crate::types::{BackCell, FrontCell, PagePair, Rect, Result};
use card_deck::CardRecord;
use printpdf::*;
use std::path::Path;

/// Lay out cards and write the duplex PDF to `output_path`.
pub async fn generate_pdf(
    cards: &[CardRecord],
    options: &LayoutOptions,
    output_path: impl AsRef<Path>,
) -> Result<()> {
    let cards = cards.to_vec();
    let options = options.clone();
    let output_path = output_path.as_ref().to_owned();

    // Layout and serialization are CPU-bound, spawn blocking
    let bytes = tokio::task::spawn_blocking(move || {
        let pairs = layout(&cards, &options)?;
        render_pdf_bytes(&pairs, &options)
    })
    .await??;

    tokio::fs::write(&output_path, bytes).await?;

    Ok(())
}

/// Serialize page pairs to PDF bytes.
pub fn render_pdf_bytes(pairs: &[PagePair], options: &LayoutOptions) -> Result<Vec<u8>> {
    let doc = build_document(pairs, options);

    let mut warnings = Vec::new();
    let bytes = doc.save(&PdfSaveOptions::default(), &mut warnings);

    Ok(bytes)
}

/// Build the PDF document for a sequence of page pairs.
///
/// Every pair contributes two pages, front first, so printing the document
/// double-sided with a long-edge flip puts each card's back behind its
/// front.
pub fn build_document(pairs: &[PagePair], options: &LayoutOptions) -> PdfDocument {
    let mut doc = PdfDocument::new("Flashcards");

    let mut pages = Vec::new();
    for pair in pairs {
        let mut front_ops = Vec::new();
        for cell in &pair.front_cells {
            push_front_cell_ops(&mut front_ops, cell, options);
        }

        let mut back_ops = Vec::new();
        for cell in &pair.back_cells {
            push_back_cell_ops(&mut back_ops, cell, options);
        }

        pages.push(PdfPage::new(
            Mm(options.page_width_mm),
            Mm(options.page_height_mm),
            front_ops,
        ));
        pages.push(PdfPage::new(
            Mm(options.page_width_mm),
            Mm(options.page_height_mm),
            back_ops,
        ));
    }
    doc.pages = pages;

    doc
}

// =============================================================================
// Cell Drawing
// =============================================================================

fn push_front_cell_ops(ops: &mut Vec<Op>, cell: &FrontCell, options: &LayoutOptions) {
    push_border_ops(ops, cell.rect);
    push_index_ops(ops, cell.display_index, cell.rect, options);

    // Word on the cell midline, part of speech one word-height below
    let word_y = cell.rect.center_y();
    let pos_y = word_y - pt_to_mm(options.word_font_size_pt);

    push_centered_text_ops(
        ops,
        &cell.word,
        options.word_font_size_pt,
        cell.rect.center_x(),
        word_y,
    );
    push_centered_text_ops(
        ops,
        &cell.part_of_speech,
        options.part_of_speech_font_size_pt,
        cell.rect.center_x(),
        pos_y,
    );
}

fn push_back_cell_ops(ops: &mut Vec<Op>, cell: &BackCell, options: &LayoutOptions) {
    push_border_ops(ops, cell.rect);
    push_index_ops(ops, cell.display_index, cell.rect, options);

    let text_x = cell.rect.x + options.cell_padding_mm;
    let mut line_y = cell.rect.top()
        - options.cell_padding_mm
        - pt_to_mm(options.index_font_size_pt)
        - options.line_pitch_mm;

    // Definition then example, stacked at the configured pitch
    for line in cell.definition_lines.iter().chain(cell.example_lines.iter()) {
        push_text_ops(ops, line, options.body_font_size_pt, text_x, line_y);
        line_y -= options.line_pitch_mm;
    }
}

fn push_index_ops(ops: &mut Vec<Op>, display_index: usize, rect: Rect, options: &LayoutOptions) {
    let x = rect.x + options.cell_padding_mm;
    let y = rect.top() - options.cell_padding_mm - pt_to_mm(options.index_font_size_pt);

    push_text_ops(ops, &display_index.to_string(), options.index_font_size_pt, x, y);
}

fn push_border_ops(ops: &mut Vec<Op>, rect: Rect) {
    let corners = [
        (rect.x, rect.y),
        (rect.right(), rect.y),
        (rect.right(), rect.top()),
        (rect.x, rect.top()),
    ];

    let points = corners
        .iter()
        .map(|&(x, y)| LinePoint {
            p: Point {
                x: Mm(x).into_pt(),
                y: Mm(y).into_pt(),
            },
            bezier: false,
        })
        .collect();

    ops.push(Op::SetOutlineColor {
        col: Color::Rgb(Rgb::new(0.0, 0.0, 0.0, None)),
    });
    ops.push(Op::SetOutlineThickness {
        pt: Pt(BORDER_LINE_WIDTH),
    });
    ops.push(Op::DrawLine {
        line: Line {
            points,
            is_closed: true,
        },
    });
}

// =============================================================================
// Text Ops
// =============================================================================

fn push_text_ops(ops: &mut Vec<Op>, text: &str, font_size_pt: f32, x_mm: f32, y_mm: f32) {
    ops.push(Op::StartTextSection);
    ops.push(Op::SetTextCursor {
        pos: Point {
            x: Mm(x_mm).into_pt(),
            y: Mm(y_mm).into_pt(),
        },
    });
    ops.push(Op::SetFontSizeBuiltinFont {
        font: BuiltinFont::Helvetica,
        size: Pt(font_size_pt),
    });
    ops.push(Op::WriteTextBuiltinFont {
        items: vec![TextItem::Text(text.to_string())],
        font: BuiltinFont::Helvetica,
    });
    ops.push(Op::EndTextSection);
}

fn push_centered_text_ops(
    ops: &mut Vec<Op>,
    text: &str,
    font_size_pt: f32,
    center_x_mm: f32,
    y_mm: f32,
) {
    let text_width_pt = text.chars().count() as f32 * font_size_pt * HELVETICA_CHAR_WIDTH_RATIO;
    let x_mm = center_x_mm - pt_to_mm(text_width_pt) / 2.0;

    push_text_ops(ops, text, font_size_pt, x_mm, y_mm);
}
