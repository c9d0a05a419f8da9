//! Merging several documents into one

use crate::constants::OUTPUT_PDF_VERSION;
use crate::render::{
    INHERITABLE_ATTRIBUTES, copy_object_deep, finish_document, inherited_attribute,
};
use crate::types::*;
use lopdf::{Document, Object, ObjectId};
use std::collections::HashMap;

/// Merge documents into a single document, pages in input order.
///
/// Every page is deep-copied together with the objects it references.
/// Attributes inherited from the source page tree are written onto each
/// copied page, since the source tree itself is not carried over.
pub fn merge_documents(documents: &[Document]) -> Result<Document> {
    if documents.is_empty() {
        return Err(LayoutError::NoPages);
    }

    let mut output = Document::with_version(OUTPUT_PDF_VERSION);
    let pages_tree_id = output.new_object_id();
    let mut page_ids = Vec::new();

    for (doc_index, source) in documents.iter().enumerate() {
        // Object IDs are only meaningful within one source document
        let mut cache = HashMap::new();
        let source_pages = source.get_pages();

        for &source_page_id in source_pages.values() {
            let page_id =
                copy_page(&mut output, source, source_page_id, pages_tree_id, &mut cache)?;
            page_ids.push(page_id);
        }

        log::debug!(
            "Merged document {} ({} pages)",
            doc_index + 1,
            source_pages.len()
        );
    }

    finish_document(&mut output, pages_tree_id, &page_ids);
    log::info!(
        "Merged {} documents into {} pages",
        documents.len(),
        page_ids.len()
    );
    Ok(output)
}

fn copy_page(
    output: &mut Document,
    source: &Document,
    source_page_id: ObjectId,
    parent_id: ObjectId,
    cache: &mut HashMap<ObjectId, ObjectId>,
) -> Result<ObjectId> {
    let copied = copy_object_deep(output, source, &Object::Reference(source_page_id), cache)?;
    let page_id = copied.as_reference()?;

    let source_dict = source.get_dictionary(source_page_id)?;
    let mut inherited = Vec::new();
    for key in INHERITABLE_ATTRIBUTES {
        if source_dict.has(key) {
            continue;
        }
        if let Some(value) = inherited_attribute(source, source_page_id, key)? {
            inherited.push((key, copy_object_deep(output, source, value, cache)?));
        }
    }

    let page_dict = output.get_object_mut(page_id)?.as_dict_mut()?;
    page_dict.set("Parent", Object::Reference(parent_id));
    for (key, value) in inherited {
        page_dict.set(key, value);
    }

    Ok(page_id)
}
