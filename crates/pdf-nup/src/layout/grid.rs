//! Grid geometry calculation
//!
//! Computes the uniform scale for a source page size and the cell and
//! destination rectangles of every grid slot on a sheet.

use crate::options::is_positive;
use crate::types::{LayoutError, Rect, Result};

use super::GridPlacements;

// =============================================================================
// Placements
// =============================================================================

/// Compute the scale and per-cell rectangles for a grid.
///
/// The scale is the largest factor at which `cols` pages fit across and
/// `rows` pages fit down the sheet. Cells are returned in row-major order,
/// each destination rectangle anchored at its cell's top-left corner.
///
/// # Arguments
/// * `source_width` - Width of the source page in points
/// * `source_height` - Height of the source page in points
/// * `sheet_width` - Output sheet width in points
/// * `sheet_height` - Output sheet height in points
/// * `rows` - Number of grid rows
/// * `cols` - Number of grid columns
pub fn compute_placements(
    source_width: f32,
    source_height: f32,
    sheet_width: f32,
    sheet_height: f32,
    rows: usize,
    cols: usize,
) -> Result<GridPlacements> {
    let dimensions = [
        ("source width", source_width),
        ("source height", source_height),
        ("sheet width", sheet_width),
        ("sheet height", sheet_height),
    ];
    for (name, value) in dimensions {
        if !is_positive(value) {
            return Err(LayoutError::InvalidGeometry(format!(
                "{} must be positive, got {}",
                name, value
            )));
        }
    }

    let cell_count = match rows.checked_mul(cols) {
        Some(count) if count > 0 => count,
        _ => {
            return Err(LayoutError::InvalidGeometry(format!(
                "grid must have at least one row and column, got {} x {}",
                rows, cols
            )));
        }
    };

    let scale = fit_scale(source_width, source_height, sheet_width, sheet_height, rows, cols);
    let placed_width = source_width * scale;
    let placed_height = source_height * scale;

    let (cells, rects): (Vec<Rect>, Vec<Rect>) = (0..cell_count)
        .map(|index| {
            let cell = cell_bounds(index, sheet_width, sheet_height, rows, cols);
            let rect = Rect::new(cell.x, cell.y, placed_width, placed_height);
            (cell, rect)
        })
        .unzip();

    Ok(GridPlacements { scale, cells, rects })
}

/// Uniform scale that fits `cols` x `rows` copies of the source on the sheet
fn fit_scale(
    source_width: f32,
    source_height: f32,
    sheet_width: f32,
    sheet_height: f32,
    rows: usize,
    cols: usize,
) -> f32 {
    let scale_w = sheet_width / (cols as f32 * source_width);
    let scale_h = sheet_height / (rows as f32 * source_height);
    scale_w.min(scale_h)
}

// =============================================================================
// Cell Calculations
// =============================================================================

/// Row and column of a row-major cell index
pub fn cell_position(index: usize, cols: usize) -> (usize, usize) {
    (index / cols, index % cols)
}

/// Bounds of the cell at `index`, in sheet coordinates (row 0 at the top).
pub fn cell_bounds(
    index: usize,
    sheet_width: f32,
    sheet_height: f32,
    rows: usize,
    cols: usize,
) -> Rect {
    let (row, col) = cell_position(index, cols);
    let cell_width = sheet_width / cols as f32;
    let cell_height = sheet_height / rows as f32;

    Rect::new(
        col as f32 * cell_width,
        row as f32 * cell_height,
        cell_width,
        cell_height,
    )
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-3;

    #[test]
    fn test_scale_width_limited() {
        // 2 x 200pt across 595pt is the tighter constraint
        let grid = compute_placements(200.0, 100.0, 595.0, 842.0, 2, 2).unwrap();
        assert!((grid.scale - 1.4875).abs() < EPS);
    }

    #[test]
    fn test_scale_height_limited() {
        // Tall pages on a landscape sheet: 2 x 400pt down 595pt
        let grid = compute_placements(100.0, 400.0, 842.0, 595.0, 2, 3).unwrap();
        let expected = (842.0_f32 / 300.0).min(595.0 / 800.0);
        assert!((grid.scale - expected).abs() < EPS);
        assert!((grid.scale - 0.74375).abs() < EPS);
    }

    #[test]
    fn test_quarto_cell_bounds() {
        let grid = compute_placements(200.0, 100.0, 595.0, 842.0, 2, 2).unwrap();
        let expected = [
            (0.0, 0.0, 297.5, 421.0),
            (297.5, 0.0, 595.0, 421.0),
            (0.0, 421.0, 297.5, 842.0),
            (297.5, 421.0, 595.0, 842.0),
        ];

        assert_eq!(grid.cells.len(), 4);
        for (cell, (x0, y0, x1, y1)) in grid.cells.iter().zip(expected) {
            assert!((cell.x0() - x0).abs() < EPS);
            assert!((cell.y0() - y0).abs() < EPS);
            assert!((cell.x1() - x1).abs() < EPS);
            assert!((cell.y1() - y1).abs() < EPS);
        }
    }

    #[test]
    fn test_rects_anchored_at_cell_origin() {
        let grid = compute_placements(200.0, 100.0, 595.0, 842.0, 2, 2).unwrap();

        for (cell, rect) in grid.cells.iter().zip(&grid.rects) {
            assert_eq!(rect.x, cell.x);
            assert_eq!(rect.y, cell.y);
            assert!((rect.width - 297.5).abs() < EPS);
            assert!((rect.height - 148.75).abs() < EPS);
            assert!(cell.contains(rect, EPS));
        }
    }

    #[test]
    fn test_cells_never_overlap() {
        let grid = compute_placements(300.0, 450.0, 842.0, 595.0, 2, 3).unwrap();

        for (i, a) in grid.cells.iter().enumerate() {
            for b in grid.cells.iter().skip(i + 1) {
                assert!(!a.overlaps(b, EPS), "{:?} overlaps {:?}", a, b);
            }
        }
    }

    #[test]
    fn test_cells_tile_sheet() {
        let grid = compute_placements(300.0, 450.0, 842.0, 595.0, 2, 3).unwrap();
        let area: f32 = grid.cells.iter().map(|c| c.width * c.height).sum();
        assert!((area - 842.0 * 595.0).abs() < 1.0);
    }

    #[test]
    fn test_cell_position_row_major() {
        assert_eq!(cell_position(0, 3), (0, 0));
        assert_eq!(cell_position(2, 3), (0, 2));
        assert_eq!(cell_position(3, 3), (1, 0));
        assert_eq!(cell_position(5, 3), (1, 2));
    }

    #[test]
    fn test_rejects_non_positive_dimensions() {
        assert!(matches!(
            compute_placements(0.0, 100.0, 595.0, 842.0, 2, 2),
            Err(LayoutError::InvalidGeometry(_))
        ));
        assert!(matches!(
            compute_placements(200.0, 100.0, -1.0, 842.0, 2, 2),
            Err(LayoutError::InvalidGeometry(_))
        ));
        assert!(matches!(
            compute_placements(200.0, f32::NAN, 595.0, 842.0, 2, 2),
            Err(LayoutError::InvalidGeometry(_))
        ));
    }

    #[test]
    fn test_rejects_empty_grid() {
        assert!(matches!(
            compute_placements(200.0, 100.0, 595.0, 842.0, 0, 2),
            Err(LayoutError::InvalidGeometry(_))
        ));
        assert!(matches!(
            compute_placements(200.0, 100.0, 595.0, 842.0, 2, 0),
            Err(LayoutError::InvalidGeometry(_))
        ));
        assert!(matches!(
            compute_placements(200.0, 100.0, 595.0, 842.0, usize::MAX, 2),
            Err(LayoutError::InvalidGeometry(_))
        ));
    }
}
