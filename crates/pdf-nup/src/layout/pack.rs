//! Page packing
//!
//! Splits the source page sequence into fixed-size batches and turns each
//! batch into one sheet of placements.

use crate::options::GridLayout;
use crate::types::{LayoutError, Result, SourcePage};

use super::{Batch, Placement, Sheet, Stroke, compute_placements};

/// Split pages into consecutive batches of `capacity` slots.
///
/// The last batch is padded with empty slots.
pub fn batches(pages: &[SourcePage], capacity: usize) -> Vec<Batch> {
    if capacity == 0 {
        return Vec::new();
    }
    pages
        .chunks(capacity)
        .map(|chunk| Batch::new(chunk, capacity))
        .collect()
}

/// Pack source pages onto sheets.
///
/// Produces one sheet per batch, in input order. Empty input yields no
/// sheets. Fails before producing anything if the grid is invalid or any
/// batch has unusable geometry.
pub fn pack(pages: &[SourcePage], grid: &GridLayout) -> Result<Vec<Sheet>> {
    grid.validate()?;

    let sheets = batches(pages, grid.cell_count())
        .iter()
        .map(|batch| pack_batch(batch, grid))
        .collect::<Result<Vec<_>>>()?;

    log::debug!(
        "Packed {} pages onto {} sheets ({}x{})",
        pages.len(),
        sheets.len(),
        grid.rows,
        grid.cols
    );

    Ok(sheets)
}

/// Lay out a single batch on a new sheet.
///
/// The scale is taken from the leading page and reused for the whole batch.
pub fn pack_batch(batch: &Batch, grid: &GridLayout) -> Result<Sheet> {
    grid.validate()?;
    if batch.capacity() != grid.cell_count() {
        return Err(LayoutError::InvalidGrid {
            rows: grid.rows,
            cols: grid.cols,
        });
    }

    let leading = batch.leading_page().ok_or_else(|| {
        LayoutError::InvalidGeometry("batch has no leading page to size the grid".to_string())
    })?;

    let geometry = compute_placements(
        leading.width,
        leading.height,
        grid.sheet_width,
        grid.sheet_height,
        grid.rows,
        grid.cols,
    )?;

    let mut sheet = Sheet::blank(grid.sheet_width, grid.sheet_height, grid.cell_count());

    for (cell_index, slot) in batch.slots().iter().enumerate() {
        let Some(page) = slot else {
            continue;
        };

        let placement = Placement {
            source_index: page.index,
            cell_index,
            cell: geometry.cells[cell_index],
            rect: geometry.rects[cell_index],
            scale: geometry.scale,
        };

        if grid.with_border {
            sheet.borders.push(Stroke {
                rect: placement.rect,
                width: grid.border_width,
                color: grid.border_color,
            });
        }

        sheet.cells[cell_index] = Some(placement);
    }

    Ok(sheet)
}
