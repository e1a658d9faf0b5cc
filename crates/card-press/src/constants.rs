//! Shared constants for card sheet layout
//!
//! This module centralizes the grid shape and the magic numbers used by the
//! layout and rendering code.

// =============================================================================
// Grid Shape
// =============================================================================

/// Rows of cards on one side of a sheet
pub const GRID_ROWS: usize = 2;

/// Columns of cards on one side of a sheet
pub const GRID_COLS: usize = 2;

/// Cards laid out per sheet (each sheet is one front/back page pair)
pub const CARDS_PER_SHEET: usize = GRID_ROWS * GRID_COLS;

// =============================================================================
// Unit Conversion
// =============================================================================

/// Points per millimeter (1 inch = 72 points, 1 inch = 25.4mm)
pub const POINTS_PER_MM: f32 = 72.0 / 25.4; // ≈ 2.83465

/// Convert points to millimeters
#[inline]
pub fn pt_to_mm(pt: f32) -> f32 {
    pt / POINTS_PER_MM
}

// =============================================================================
// Drawing
// =============================================================================

/// Line width for cell borders (points)
pub const BORDER_LINE_WIDTH: f32 = 0.5;

/// Approximate character width ratio for Helvetica
pub const HELVETICA_CHAR_WIDTH_RATIO: f32 = 0.5;
