//! N-up sheet composition
//!
//! This module orchestrates the layout process:
//! 1. Load, crop and merge source documents
//! 2. Pick the grid for the requested layout mode
//! 3. Pack the merged pages onto sheets
//! 4. Render the sheets to an output PDF

mod crop;
mod io;
mod job;
mod merge;

pub use crop::crop_document;
pub use io::{load_multiple_pdfs, load_pdf, save_pdf};
pub use job::{JobReport, run_job};
pub use merge::merge_documents;

use crate::layout::{Sheet, pack};
use crate::options::{GridLayout, LayoutOptions};
use crate::render::{read_source_pages, render_sheets};
use crate::types::*;
use lopdf::Document;

/// Lay out source pages for a mode.
///
/// Returns `None` for [`LayoutMode::None`]; otherwise the packed sheets in
/// input order (empty when there are no pages).
pub fn layout(
    pages: &[SourcePage],
    mode: LayoutMode,
    with_border: bool,
) -> Result<Option<Vec<Sheet>>> {
    match GridLayout::for_mode(mode, with_border) {
        Some(grid) => pack(pages, &grid).map(Some),
        None => Ok(None),
    }
}

/// Lay out every page of a merged document into a new document.
///
/// Returns `None` when the mode is passthrough or the document has no pages.
pub fn layout_document(merged: &Document, options: &LayoutOptions) -> Result<Option<Document>> {
    let Some(grid) = options.grid() else {
        log::debug!("Layout mode is none, keeping merged document as is");
        return Ok(None);
    };

    let pages = read_source_pages(merged)?;
    let sheets = pack(&pages, &grid)?;
    if sheets.is_empty() {
        log::info!("No pages to lay out");
        return Ok(None);
    }

    log::info!(
        "Laying out {} pages on {} sheets ({:?}, borders: {})",
        pages.len(),
        sheets.len(),
        options.mode,
        grid.with_border
    );

    render_sheets(merged, &sheets).map(Some)
}

/// Async variant of [`layout_document`], run on a blocking task
pub async fn layout_pdf(merged: Document, options: &LayoutOptions) -> Result<Option<Document>> {
    let options = *options;
    tokio::task::spawn_blocking(move || layout_document(&merged, &options)).await?
}
