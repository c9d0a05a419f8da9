mod constants;
pub mod layout;
pub mod nup;
mod options;
pub mod render;
mod stats;
mod types;

pub use constants::*;
pub use layout::{
    Batch, GridPlacements, Placement, Sheet, Stroke, compute_placements, pack, pack_batch,
};
pub use nup::{
    JobReport, crop_document, layout, layout_document, layout_pdf, load_multiple_pdfs, load_pdf,
    merge_documents, run_job, save_pdf,
};
pub use options::*;
pub use render::{read_source_pages, render_sheets};
pub use stats::{calculate_document_statistics, calculate_statistics};
pub use types::*;
