//! Layout data types
//!
//! These types sit between the packing calculations and PDF rendering.

use crate::types::{Color, Rect, SourcePage};

/// A fixed-size group of source pages destined for one sheet.
///
/// Always holds exactly `rows * cols` slots; trailing slots are `None`
/// when the page count does not fill the last sheet.
#[derive(Debug, Clone, PartialEq)]
pub struct Batch {
    slots: Vec<Option<SourcePage>>,
}

impl Batch {
    /// Build a batch of `capacity` slots from up to `capacity` pages
    pub fn new(pages: &[SourcePage], capacity: usize) -> Self {
        let slots = (0..capacity).map(|i| pages.get(i).copied()).collect();
        Self { slots }
    }

    /// Build a batch from explicit slots
    pub fn from_slots(slots: Vec<Option<SourcePage>>) -> Self {
        Self { slots }
    }

    pub fn slots(&self) -> &[Option<SourcePage>] {
        &self.slots
    }

    /// The page in the leading slot, which sets the geometry of the batch
    pub fn leading_page(&self) -> Option<&SourcePage> {
        self.slots.first().and_then(Option::as_ref)
    }

    /// Number of slots holding a page
    pub fn occupied(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }
}

/// Scale and cell rectangles for one grid, derived from one source size
#[derive(Debug, Clone, PartialEq)]
pub struct GridPlacements {
    /// Uniform scale applied to every source page of the batch
    pub scale: f32,
    /// Full grid cell regions, row-major
    pub cells: Vec<Rect>,
    /// Destination rectangles, row-major; each lies at its cell's origin
    pub rects: Vec<Rect>,
}

/// Final placement of a source page on a sheet
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    /// Index of the source page in the merged document
    pub source_index: usize,
    /// Grid cell index (row-major)
    pub cell_index: usize,
    /// The grid cell this page occupies
    pub cell: Rect,
    /// Where the scaled page content lands
    pub rect: Rect,
    /// Scale factor applied to the source page
    pub scale: f32,
}

/// A stroked rectangle outline
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stroke {
    pub rect: Rect,
    pub width: f32,
    pub color: Color,
}

/// One output sheet
#[derive(Debug, Clone, PartialEq)]
pub struct Sheet {
    /// Sheet width in points
    pub width: f32,
    /// Sheet height in points
    pub height: f32,
    /// One entry per grid cell, `None` for empty cells
    pub cells: Vec<Option<Placement>>,
    /// Border outlines, one per occupied cell when borders are enabled
    pub borders: Vec<Stroke>,
}

impl Sheet {
    pub(crate) fn blank(width: f32, height: f32, cell_count: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![None; cell_count],
            borders: Vec::new(),
        }
    }

    /// Iterate the occupied cells in row-major order
    pub fn placements(&self) -> impl Iterator<Item = &Placement> {
        self.cells.iter().flatten()
    }

    /// Number of cells holding a page
    pub fn occupied(&self) -> usize {
        self.placements().count()
    }
}
