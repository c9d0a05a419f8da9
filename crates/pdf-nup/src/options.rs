use crate::constants::{A4_LONG_EDGE_PT, A4_SHORT_EDGE_PT, DEFAULT_BORDER_WIDTH};
use crate::types::*;
use std::path::{Path, PathBuf};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Grid shape and sheet configuration for packing.
///
/// An immutable value passed into the packer; nothing in the layout code
/// falls back to global defaults.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GridLayout {
    /// Number of rows in the grid
    pub rows: usize,
    /// Number of columns in the grid
    pub cols: usize,
    /// Output sheet width in points
    pub sheet_width: f32,
    /// Output sheet height in points
    pub sheet_height: f32,
    /// Stroke an outline around every occupied cell
    pub with_border: bool,
    /// Border stroke width in points
    pub border_width: f32,
    /// Border stroke color
    pub border_color: Color,
}

impl GridLayout {
    /// A grid without borders
    pub fn new(rows: usize, cols: usize, sheet_width: f32, sheet_height: f32) -> Self {
        Self {
            rows,
            cols,
            sheet_width,
            sheet_height,
            with_border: false,
            border_width: DEFAULT_BORDER_WIDTH,
            border_color: Color::BLACK,
        }
    }

    /// Enable or disable cell borders
    pub fn with_border(mut self, with_border: bool) -> Self {
        self.with_border = with_border;
        self
    }

    /// Set the border stroke width
    pub fn border_width(mut self, width: f32) -> Self {
        self.border_width = width;
        self
    }

    /// Grid for a layout mode on A4, or `None` for passthrough
    pub fn for_mode(mode: LayoutMode, with_border: bool) -> Option<Self> {
        let (rows, cols) = mode.grid_dimensions()?;
        let orientation = match mode {
            LayoutMode::Grid6 => Orientation::Landscape,
            _ => Orientation::Portrait,
        };
        let (width, height) = a4_dimensions(orientation);
        Some(Self::new(rows, cols, width, height).with_border(with_border))
    }

    /// Total number of cells per sheet, saturating for absurd grids
    pub fn cell_count(&self) -> usize {
        self.rows.saturating_mul(self.cols)
    }

    /// Width of one grid cell in points
    pub fn cell_width(&self) -> f32 {
        self.sheet_width / self.cols as f32
    }

    /// Height of one grid cell in points
    pub fn cell_height(&self) -> f32 {
        self.sheet_height / self.rows as f32
    }

    /// Validate the grid shape and sheet size
    pub fn validate(&self) -> Result<()> {
        let cells = self.rows.checked_mul(self.cols).unwrap_or(0);
        if cells < 1 {
            return Err(LayoutError::InvalidGrid {
                rows: self.rows,
                cols: self.cols,
            });
        }

        if !is_positive(self.sheet_width) || !is_positive(self.sheet_height) {
            return Err(LayoutError::InvalidGeometry(format!(
                "sheet must have positive dimensions, got {} x {}",
                self.sheet_width, self.sheet_height
            )));
        }

        if self.with_border && !is_positive(self.border_width) {
            return Err(LayoutError::InvalidGeometry(format!(
                "border width must be positive, got {}",
                self.border_width
            )));
        }

        Ok(())
    }
}

/// A4 sheet dimensions in points for an orientation
pub fn a4_dimensions(orientation: Orientation) -> (f32, f32) {
    match orientation {
        Orientation::Portrait => (A4_SHORT_EDGE_PT, A4_LONG_EDGE_PT),
        Orientation::Landscape => (A4_LONG_EDGE_PT, A4_SHORT_EDGE_PT),
    }
}

pub(crate) fn is_positive(value: f32) -> bool {
    value.is_finite() && value > 0.0
}

/// What the layout driver should produce from a merged document
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct LayoutOptions {
    pub mode: LayoutMode,
    pub with_border: bool,
    pub border_width: f32,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            mode: LayoutMode::None,
            with_border: false,
            border_width: DEFAULT_BORDER_WIDTH,
        }
    }
}

impl LayoutOptions {
    pub fn new(mode: LayoutMode, with_border: bool) -> Self {
        Self {
            mode,
            with_border,
            ..Default::default()
        }
    }

    /// Grid configuration for these options, `None` for passthrough
    pub fn grid(&self) -> Option<GridLayout> {
        GridLayout::for_mode(self.mode, self.with_border)
            .map(|grid| grid.border_width(self.border_width))
    }
}

/// Configuration of one crop-merge-layout job
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct JobOptions {
    /// Input files, merged in this order
    pub input_files: Vec<PathBuf>,
    /// Where the merged document is written
    pub merged_output: PathBuf,
    /// Where the laid-out document is written; derived from
    /// `merged_output` when unset
    pub layout_output: Option<PathBuf>,
    /// Margins cropped from every page, `None` to keep pages as they are
    pub crop: Option<CropMargins>,
    pub layout: LayoutOptions,
}

impl Default for JobOptions {
    fn default() -> Self {
        Self {
            input_files: Vec::new(),
            merged_output: PathBuf::from("merged.pdf"),
            layout_output: None,
            crop: Some(CropMargins::default()),
            layout: LayoutOptions::default(),
        }
    }
}

impl JobOptions {
    /// Load options from JSON file
    #[cfg(feature = "serde")]
    pub async fn load(path: impl AsRef<Path>) -> Result<Self> {
        let bytes = tokio::fs::read(path).await?;
        let options = serde_json::from_slice(&bytes)
            .map_err(|e| LayoutError::Config(format!("Failed to parse config: {}", e)))?;
        Ok(options)
    }

    /// Save options to JSON file
    #[cfg(feature = "serde")]
    pub async fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| LayoutError::Config(format!("Failed to serialize config: {}", e)))?;
        tokio::fs::write(path, json).await?;
        Ok(())
    }

    /// Path of the laid-out document, `None` for passthrough
    pub fn layout_output_path(&self) -> Option<PathBuf> {
        let suffix = self.layout.mode.file_suffix()?;
        if let Some(path) = &self.layout_output {
            return Some(path.clone());
        }
        Some(suffixed_path(&self.merged_output, suffix))
    }

    /// Validate the options
    pub fn validate(&self) -> Result<()> {
        if self.input_files.is_empty() {
            return Err(LayoutError::Config("No input files specified".to_string()));
        }

        if self.merged_output.as_os_str().is_empty() {
            return Err(LayoutError::Config("No output file specified".to_string()));
        }

        if let Some(crop) = &self.crop {
            let margins = [crop.left, crop.top, crop.right, crop.bottom];
            if margins.iter().any(|m| !m.is_finite() || *m < 0.0) {
                return Err(LayoutError::Config(format!(
                    "Crop margins must be non-negative, got {:?}",
                    crop
                )));
            }
        }

        if let Some(grid) = self.layout.grid() {
            grid.validate()?;
        }

        if let Some(layout_path) = self.layout_output_path() {
            if layout_path == self.merged_output {
                return Err(LayoutError::Config(
                    "Layout output must differ from the merged output".to_string(),
                ));
            }
        }

        Ok(())
    }
}

/// `dir/name.pdf` + `_4in1` -> `dir/name_4in1.pdf`
fn suffixed_path(path: &Path, suffix: &str) -> PathBuf {
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let file_name = match path.extension() {
        Some(ext) => format!("{}{}.{}", stem, suffix, ext.to_string_lossy()),
        None => format!("{}{}", stem, suffix),
    };
    path.with_file_name(file_name)
}
