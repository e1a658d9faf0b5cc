use crate::constants::{GRID_COLS, GRID_ROWS};
use crate::types::{LayoutError, Orientation, PaperSize, Result};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Sheet layout configuration
///
/// Lengths are millimeters and font sizes are points, as the field names
/// say. The card grid is anchored at the left/top margins; the back page
/// needs no margins of its own because its cells are the point reflection
/// of the front cells.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LayoutOptions {
    // Page
    pub page_width_mm: f32,
    pub page_height_mm: f32,

    // Grid anchoring
    pub margin_left_mm: f32,
    pub margin_top_mm: f32,
    pub cell_spacing_mm: f32,

    // Cell geometry
    pub cell_width_mm: f32,
    pub cell_height_mm: f32,
    /// Inset between a cell's border and its text
    pub cell_padding_mm: f32,

    // Back-side text
    /// Maximum characters per wrapped line
    pub max_line_width: usize,
    /// Vertical distance between consecutive line baselines
    pub line_pitch_mm: f32,

    // Font sizes
    pub word_font_size_pt: f32,
    pub part_of_speech_font_size_pt: f32,
    pub body_font_size_pt: f32,
    pub index_font_size_pt: f32,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        // US Letter landscape with half-inch margins and a quarter-inch gap
        // between cells; the 2x2 grid fills the rest of the page.
        let mut options = Self {
            page_width_mm: 279.4,
            page_height_mm: 215.9,
            margin_left_mm: 12.7,
            margin_top_mm: 12.7,
            cell_spacing_mm: 6.35,
            cell_width_mm: 0.0,
            cell_height_mm: 0.0,
            cell_padding_mm: 4.0,
            max_line_width: 60,
            line_pitch_mm: 5.0,
            word_font_size_pt: 24.0,
            part_of_speech_font_size_pt: 12.0,
            body_font_size_pt: 10.0,
            index_font_size_pt: 10.0,
        };
        options.fit_cells_to_page();
        options
    }
}

impl LayoutOptions {
    /// Build options for a standard paper size, fitting the grid to the page.
    pub fn for_paper(paper: PaperSize, orientation: Orientation) -> Self {
        let (width_mm, height_mm) = paper.dimensions_with_orientation(orientation);
        let mut options = Self {
            page_width_mm: width_mm,
            page_height_mm: height_mm,
            ..Self::default()
        };
        options.fit_cells_to_page();
        options
    }

    /// Resize the cells so the grid exactly fills the page inside the
    /// margins, keeping the implied right and bottom margins equal to the
    /// left and top ones.
    pub fn fit_cells_to_page(&mut self) {
        self.cell_width_mm = (self.page_width_mm
            - 2.0 * self.margin_left_mm
            - (GRID_COLS - 1) as f32 * self.cell_spacing_mm)
            / GRID_COLS as f32;
        self.cell_height_mm = (self.page_height_mm
            - 2.0 * self.margin_top_mm
            - (GRID_ROWS - 1) as f32 * self.cell_spacing_mm)
            / GRID_ROWS as f32;
    }

    /// Load options from JSON file
    #[cfg(feature = "serde")]
    pub async fn load(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let bytes = tokio::fs::read(path).await?;
        let options = serde_json::from_slice(&bytes)
            .map_err(|e| LayoutError::Config(format!("Failed to parse config: {}", e)))?;
        Ok(options)
    }

    /// Save options to JSON file
    #[cfg(feature = "serde")]
    pub async fn save(&self, path: impl AsRef<std::path::Path>) -> Result<()> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| LayoutError::Config(format!("Failed to serialize config: {}", e)))?;
        tokio::fs::write(path, json).await?;
        Ok(())
    }

    /// Validate the options
    pub fn validate(&self) -> Result<()> {
        if self.page_width_mm <= 0.0 || self.page_height_mm <= 0.0 {
            return Err(LayoutError::Config(
                "Page dimensions must be positive".to_string(),
            ));
        }

        if self.cell_width_mm <= 0.0 || self.cell_height_mm <= 0.0 {
            return Err(LayoutError::Config(
                "Cell dimensions must be positive".to_string(),
            ));
        }

        if self.margin_left_mm < 0.0 || self.margin_top_mm < 0.0 || self.cell_spacing_mm < 0.0 {
            return Err(LayoutError::Config(
                "Margins and spacing must not be negative".to_string(),
            ));
        }

        if self.cell_padding_mm < 0.0 {
            return Err(LayoutError::Config(
                "Cell padding must not be negative".to_string(),
            ));
        }

        if self.max_line_width == 0 {
            return Err(LayoutError::Config(
                "Maximum line width must be at least 1".to_string(),
            ));
        }

        if self.line_pitch_mm <= 0.0 {
            return Err(LayoutError::Config("Line pitch must be positive".to_string()));
        }

        if self.word_font_size_pt <= 0.0
            || self.part_of_speech_font_size_pt <= 0.0
            || self.body_font_size_pt <= 0.0
            || self.index_font_size_pt <= 0.0
        {
            return Err(LayoutError::Config(
                "Font sizes must be positive".to_string(),
            ));
        }

        let grid_width = GRID_COLS as f32 * self.cell_width_mm
            + (GRID_COLS - 1) as f32 * self.cell_spacing_mm;
        let grid_height = GRID_ROWS as f32 * self.cell_height_mm
            + (GRID_ROWS - 1) as f32 * self.cell_spacing_mm;

        if self.margin_left_mm + grid_width > self.page_width_mm
            || self.margin_top_mm + grid_height > self.page_height_mm
        {
            return Err(LayoutError::Config(format!(
                "Card grid ({:.1}mm x {:.1}mm) does not fit the page ({:.1}mm x {:.1}mm)",
                grid_width, grid_height, self.page_width_mm, self.page_height_mm
            )));
        }

        Ok(())
    }
}
