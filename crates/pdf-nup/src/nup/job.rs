//! The full crop, merge and layout job

use crate::options::JobOptions;
use crate::types::*;
use lopdf::Document;
use std::path::PathBuf;

use super::{crop_document, layout_document, load_multiple_pdfs, merge_documents, save_pdf};

/// Outcome of a job run
#[derive(Debug, Clone, PartialEq)]
pub struct JobReport {
    /// Pages in the merged document
    pub source_pages: usize,
    /// Where the merged document was written
    pub merged_path: PathBuf,
    /// Where the laid-out document was written, if one was produced
    pub layout_path: Option<PathBuf>,
    /// Number of sheets in the laid-out document
    pub layout_sheets: usize,
}

/// Run a job: load, crop, merge, save, then lay out and save again.
///
/// Nothing after a failing step is written.
pub async fn run_job(options: &JobOptions) -> Result<JobReport> {
    options.validate()?;

    let documents = load_multiple_pdfs(&options.input_files).await?;
    log::info!("Loaded {} documents", documents.len());

    let job = options.clone();
    let (merged, laid_out) =
        tokio::task::spawn_blocking(move || prepare_documents(documents, &job)).await??;

    let source_pages = merged.get_pages().len();
    save_pdf(merged, &options.merged_output).await?;
    log::info!("Merged file saved: {}", options.merged_output.display());

    let mut report = JobReport {
        source_pages,
        merged_path: options.merged_output.clone(),
        layout_path: None,
        layout_sheets: 0,
    };

    if let (Some(doc), Some(path)) = (laid_out, options.layout_output_path()) {
        report.layout_sheets = doc.get_pages().len();
        save_pdf(doc, &path).await?;
        log::info!("Laid-out file saved: {}", path.display());
        report.layout_path = Some(path);
    }

    Ok(report)
}

/// The CPU-bound part of a job: crop, merge and lay out in memory.
fn prepare_documents(
    mut documents: Vec<Document>,
    options: &JobOptions,
) -> Result<(Document, Option<Document>)> {
    if let Some(margins) = &options.crop {
        for (doc, path) in documents.iter_mut().zip(&options.input_files) {
            crop_document(doc, margins)?;
            log::info!("Cropped: {}", path.display());
        }
    }

    let merged = merge_documents(&documents)?;
    let laid_out = layout_document(&merged, &options.layout)?;
    Ok((merged, laid_out))
}
