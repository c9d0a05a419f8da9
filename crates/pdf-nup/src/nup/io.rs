//! Document I/O operations

use crate::types::*;
use lopdf::Document;
use std::path::Path;

/// Load a single PDF document
pub async fn load_pdf(path: impl AsRef<Path>) -> Result<Document> {
    let path = path.as_ref().to_owned();
    let bytes = tokio::fs::read(&path).await?;
    let doc = tokio::task::spawn_blocking(move || Document::load_mem(&bytes)).await??;
    log::debug!("Loaded {} ({} pages)", path.display(), doc.get_pages().len());
    Ok(doc)
}

/// Load multiple PDF documents, preserving order
pub async fn load_multiple_pdfs(paths: &[impl AsRef<Path>]) -> Result<Vec<Document>> {
    let mut documents = Vec::with_capacity(paths.len());
    for path in paths {
        documents.push(load_pdf(path).await?);
    }
    Ok(documents)
}

/// Save a document.
///
/// The document is serialized in full before the file is touched, so a
/// serialization failure never leaves a truncated file behind.
pub async fn save_pdf(mut doc: Document, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref().to_owned();
    let bytes = tokio::task::spawn_blocking(move || {
        let mut writer = Vec::new();
        doc.save_to(&mut writer)?;
        Ok::<_, LayoutError>(writer)
    })
    .await??;
    tokio::fs::write(&path, bytes).await?;
    log::debug!("Saved {}", path.display());
    Ok(())
}
