use crate::types::*;
use lopdf::Document;

/// Calculate statistics for laying out `source_pages` pages in `mode`
pub fn calculate_statistics(source_pages: usize, mode: LayoutMode) -> LayoutStatistics {
    let pages_per_sheet = mode.pages_per_sheet();

    let output_sheets = source_pages.div_ceil(pages_per_sheet);
    let last_sheet_pages = match source_pages % pages_per_sheet {
        0 if source_pages > 0 => pages_per_sheet,
        remainder => remainder,
    };
    let blank_cells = if output_sheets == 0 {
        0
    } else {
        pages_per_sheet - last_sheet_pages
    };

    LayoutStatistics {
        source_pages,
        pages_per_sheet,
        output_sheets,
        last_sheet_pages,
        blank_cells,
    }
}

/// Calculate statistics for the merge of `documents` laid out in `mode`
pub fn calculate_document_statistics(
    documents: &[Document],
    mode: LayoutMode,
) -> Result<LayoutStatistics> {
    let source_pages: usize = documents.iter().map(|doc| doc.get_pages().len()).sum();

    if source_pages == 0 {
        return Err(LayoutError::NoPages);
    }

    Ok(calculate_statistics(source_pages, mode))
}
