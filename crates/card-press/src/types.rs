use thiserror::Error;

#[derive(Error, Debug)]
pub enum LayoutError {
    #[error("Invalid configuration: {0}")]
    Config(String),
    #[error("PDF error: {0}")]
    Pdf(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Task join error: {0}")]
    TaskJoin(#[from] tokio::task::JoinError),
}

pub type Result<T> = std::result::Result<T, LayoutError>;

/// Paper orientation
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Orientation {
    /// Landscape: width > height (card sheets print this way)
    #[default]
    Landscape,
    /// Portrait: height > width
    Portrait,
}

/// Standard paper sizes
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PaperSize {
    A4,
    A5,
    Letter,
    Legal,
    Custom { width_mm: f32, height_mm: f32 },
}

impl PaperSize {
    /// Get base dimensions (always portrait: width < height for standard sizes)
    pub fn dimensions_mm(self) -> (f32, f32) {
        match self {
            PaperSize::A4 => (210.0, 297.0),
            PaperSize::A5 => (148.0, 210.0),
            PaperSize::Letter => (215.9, 279.4),
            PaperSize::Legal => (215.9, 355.6),
            PaperSize::Custom {
                width_mm,
                height_mm,
            } => (width_mm, height_mm),
        }
    }

    /// Get dimensions with orientation applied
    ///
    /// Custom sizes are used exactly as given; orientation only reorders
    /// the standard sizes.
    pub fn dimensions_with_orientation(self, orientation: Orientation) -> (f32, f32) {
        let (w, h) = self.dimensions_mm();
        match (self, orientation) {
            (PaperSize::Custom { .. }, _) => (w, h),
            (_, Orientation::Portrait) => (w, h),
            (_, Orientation::Landscape) => (h, w),
        }
    }
}

/// Position within the card grid (row, column)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridPosition {
    /// Row index (0 = top row)
    pub row: usize,
    /// Column index (0 = leftmost column)
    pub col: usize,
}

impl GridPosition {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// A rectangular area in millimeters
///
/// The origin is the page's bottom-left corner, matching PDF user space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    /// X position (left edge)
    pub x: f32,
    /// Y position (bottom edge)
    pub y: f32,
    /// Width
    pub width: f32,
    /// Height
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Right edge x coordinate
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    /// Top edge y coordinate
    pub fn top(&self) -> f32 {
        self.y + self.height
    }

    /// Center x coordinate
    pub fn center_x(&self) -> f32 {
        self.x + self.width / 2.0
    }

    /// Center y coordinate
    pub fn center_y(&self) -> f32 {
        self.y + self.height / 2.0
    }
}

/// Drawing data for one card's front cell: the study prompt side.
#[derive(Debug, Clone, PartialEq)]
pub struct FrontCell {
    /// Sequence number printed on both sides of the card
    pub display_index: usize,
    pub word: String,
    pub part_of_speech: String,
    /// Cell bounds on the front page
    pub rect: Rect,
}

/// Drawing data for one card's back cell: the answer side.
///
/// Definition and example arrive already word-wrapped; renderers stack the
/// lines at the configured pitch without re-measuring text.
#[derive(Debug, Clone, PartialEq)]
pub struct BackCell {
    /// Sequence number printed on both sides of the card
    pub display_index: usize,
    pub definition_lines: Vec<String>,
    pub example_lines: Vec<String>,
    /// Cell bounds on the back page
    pub rect: Rect,
}

/// One sheet's front page and back page, derived from one batch of cards.
///
/// `back_cells[k]` always describes the same card as `front_cells[k]`; the
/// two rects differ by a point reflection through the page center, which is
/// what makes them line up after a long-edge duplex flip.
#[derive(Debug, Clone, PartialEq)]
pub struct PagePair {
    /// 0-based sheet number
    pub sheet_index: usize,
    pub front_cells: Vec<FrontCell>,
    pub back_cells: Vec<BackCell>,
}
