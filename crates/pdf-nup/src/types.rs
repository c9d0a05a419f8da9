use thiserror::Error;

#[derive(Error, Debug)]
pub enum LayoutError {
    #[error("PDF error: {0}")]
    Pdf(#[from] lopdf::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid configuration: {0}")]
    Config(String),
    #[error("Task join error: {0}")]
    TaskJoin(#[from] tokio::task::JoinError),
    #[error("No pages to lay out")]
    NoPages,
    #[error("Source page {0} not found")]
    PageNotFound(usize),
    #[error("Invalid geometry: {0}")]
    InvalidGeometry(String),
    #[error("Invalid grid: {rows} rows x {cols} columns")]
    InvalidGrid { rows: usize, cols: usize },
}

pub type Result<T> = std::result::Result<T, LayoutError>;

/// Sheet layout mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LayoutMode {
    /// No layout: the merged document is the final artifact
    #[default]
    None,
    /// 2 x 2 grid on a portrait A4 sheet ("4-in-1")
    Grid4,
    /// 2 rows x 3 columns on a landscape A4 sheet ("6-in-1")
    Grid6,
}

impl LayoutMode {
    /// Grid shape as (rows, cols), or `None` for passthrough
    pub fn grid_dimensions(self) -> Option<(usize, usize)> {
        match self {
            LayoutMode::None => None,
            LayoutMode::Grid4 => Some((2, 2)),
            LayoutMode::Grid6 => Some((2, 3)),
        }
    }

    /// Number of source pages placed on one sheet
    pub fn pages_per_sheet(self) -> usize {
        self.grid_dimensions()
            .map(|(rows, cols)| rows * cols)
            .unwrap_or(1)
    }

    /// Suffix appended to the merged file stem for the laid-out document
    pub fn file_suffix(self) -> Option<&'static str> {
        match self {
            LayoutMode::None => None,
            LayoutMode::Grid4 => Some("_4in1"),
            LayoutMode::Grid6 => Some("_6in1"),
        }
    }
}

/// Paper orientation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    /// Portrait: height > width
    #[default]
    Portrait,
    /// Landscape: width > height
    Landscape,
}

/// A rectangle in sheet coordinates (points).
///
/// Sheet coordinates have their origin at the top-left corner of the sheet
/// with y growing downward. The renderer flips to PDF user space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rect {
    /// X position (left edge)
    pub x: f32,
    /// Y position (top edge)
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

    pub fn x0(&self) -> f32 {
        self.x
    }

    pub fn y0(&self) -> f32 {
        self.y
    }

    pub fn x1(&self) -> f32 {
        self.x + self.width
    }

    pub fn y1(&self) -> f32 {
        self.y + self.height
    }

    /// True if `other` lies inside this rectangle, with tolerance `eps`
    pub fn contains(&self, other: &Rect, eps: f32) -> bool {
        other.x0() >= self.x0() - eps
            && other.y0() >= self.y0() - eps
            && other.x1() <= self.x1() + eps
            && other.y1() <= self.y1() + eps
    }

    /// True if the interiors of the two rectangles intersect
    pub fn overlaps(&self, other: &Rect, eps: f32) -> bool {
        self.x0() < other.x1() - eps
            && other.x0() < self.x1() - eps
            && self.y0() < other.y1() - eps
            && other.y0() < self.y1() - eps
    }
}

/// RGB stroke color, components in 0.0..=1.0
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Color {
    pub const BLACK: Color = Color {
        r: 0.0,
        g: 0.0,
        b: 0.0,
    };

    pub fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

/// One page of the merged source document
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SourcePage {
    /// Zero-based index into the owning document
    pub index: usize,
    /// Width of the visible box in points, as displayed
    pub width: f32,
    /// Height of the visible box in points, as displayed
    pub height: f32,
}

impl SourcePage {
    pub fn new(index: usize, width: f32, height: f32) -> Self {
        Self {
            index,
            width,
            height,
        }
    }
}

/// Margins trimmed from each page when cropping, in points.
///
/// `top` is measured from the upper edge of the page as it is displayed.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CropMargins {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl Default for CropMargins {
    fn default() -> Self {
        Self {
            left: 0.0,
            top: 400.0,
            right: 290.0,
            bottom: 0.0,
        }
    }
}

impl CropMargins {
    /// Create uniform margins on all sides
    pub fn uniform(margin: f32) -> Self {
        Self {
            left: margin,
            top: margin,
            right: margin,
            bottom: margin,
        }
    }

    /// No cropping at all
    pub fn zero() -> Self {
        Self::uniform(0.0)
    }
}

/// Statistics about a layout run
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutStatistics {
    /// Total number of source pages
    pub source_pages: usize,
    /// Grid cells per output sheet (1 for passthrough)
    pub pages_per_sheet: usize,
    /// Total number of output sheets
    pub output_sheets: usize,
    /// Occupied cells on the last sheet
    pub last_sheet_pages: usize,
    /// Empty cells left on the last sheet
    pub blank_cells: usize,
}
