//! XObject creation and page attribute access
//!
//! Source pages are turned into Form XObjects, which are then drawn onto
//! output sheets with a scaling transformation.

use crate::constants::DEFAULT_PAGE_DIMENSIONS;
use crate::types::Result;
use lopdf::{Dictionary, Document, Object, ObjectId, Stream};
use std::collections::HashMap;

/// Page attributes that may be inherited from ancestor `Pages` nodes
pub const INHERITABLE_ATTRIBUTES: [&[u8]; 4] = [b"MediaBox", b"CropBox", b"Resources", b"Rotate"];

/// Guard against malformed page trees with parent cycles
const MAX_TREE_DEPTH: usize = 64;

// =============================================================================
// XObject Creation
// =============================================================================

/// Create a Form XObject from a source page.
///
/// The XObject's bounding box is the page's visible box, so anything outside
/// a CropBox is clipped when the XObject is drawn.
///
/// # Arguments
/// * `output` - The output document to add the XObject to
/// * `source` - The source document containing the page
/// * `page_id` - The object ID of the source page
/// * `cache` - Source-to-output object ID map, shared across all pages of
///   one output document so shared resources are copied once
pub fn create_page_xobject(
    output: &mut Document,
    source: &Document,
    page_id: ObjectId,
    cache: &mut HashMap<ObjectId, ObjectId>,
) -> Result<ObjectId> {
    let page_dict = source.get_dictionary(page_id)?;
    let bbox = page_box(source, page_id)?;

    let content_data = get_page_content(source, page_dict)?;

    let mut xobject_dict = Dictionary::new();
    xobject_dict.set("Type", Object::Name(b"XObject".to_vec()));
    xobject_dict.set("Subtype", Object::Name(b"Form".to_vec()));
    xobject_dict.set(
        "BBox",
        Object::Array(bbox.iter().map(|&v| Object::Real(v)).collect()),
    );
    xobject_dict.set("FormType", Object::Integer(1));

    if let Some(resources) = inherited_attribute(source, page_id, b"Resources")? {
        xobject_dict.set(
            "Resources",
            copy_object_deep(output, source, resources, cache)?,
        );
    }

    Ok(output.add_object(Stream::new(xobject_dict, content_data)))
}

// =============================================================================
// Page Content Extraction
// =============================================================================

/// Get the decoded content stream data from a page.
fn get_page_content(doc: &Document, page_dict: &Dictionary) -> Result<Vec<u8>> {
    let contents = match page_dict.get(b"Contents") {
        Ok(c) => c,
        Err(_) => return Ok(Vec::new()), // blank page
    };

    match contents {
        Object::Reference(id) => match doc.get_object(*id)? {
            Object::Array(arr) => get_concatenated_content_streams(doc, arr),
            _ => get_single_content_stream(doc, *id),
        },
        Object::Array(arr) => get_concatenated_content_streams(doc, arr),
        _ => Ok(Vec::new()),
    }
}

fn get_single_content_stream(doc: &Document, id: ObjectId) -> Result<Vec<u8>> {
    if let Ok(stream) = doc.get_object(id)?.as_stream() {
        Ok(stream
            .decompressed_content()
            .unwrap_or_else(|_| stream.content.clone()))
    } else {
        Ok(Vec::new())
    }
}

fn get_concatenated_content_streams(doc: &Document, refs: &[Object]) -> Result<Vec<u8>> {
    let mut result = Vec::new();

    for obj in refs {
        if let Object::Reference(id) = obj {
            result.extend_from_slice(&get_single_content_stream(doc, *id)?);
            result.push(b'\n');
        }
    }

    Ok(result)
}

// =============================================================================
// Deep Copy
// =============================================================================

/// Deep copy an object from source to output document, following references.
///
/// Uses a cache to avoid copying the same object multiple times. `Parent`
/// links are never followed, so copying a page does not drag in the whole
/// source page tree.
pub fn copy_object_deep(
    output: &mut Document,
    source: &Document,
    obj: &Object,
    cache: &mut HashMap<ObjectId, ObjectId>,
) -> Result<Object> {
    match obj {
        Object::Reference(id) => {
            if let Some(&new_id) = cache.get(id) {
                return Ok(Object::Reference(new_id));
            }

            // Reserve the ID first so reference cycles resolve to it
            let new_id = output.new_object_id();
            cache.insert(*id, new_id);

            let referenced = source.get_object(*id)?;
            let copied = copy_object_deep(output, source, referenced, cache)?;
            output.objects.insert(new_id, copied);

            Ok(Object::Reference(new_id))
        }
        Object::Dictionary(dict) => Ok(Object::Dictionary(copy_dictionary(
            output, source, dict, cache,
        )?)),
        Object::Array(arr) => {
            let new_arr: Result<Vec<_>> = arr
                .iter()
                .map(|item| copy_object_deep(output, source, item, cache))
                .collect();
            Ok(Object::Array(new_arr?))
        }
        Object::Stream(stream) => Ok(Object::Stream(Stream {
            dict: copy_dictionary(output, source, &stream.dict, cache)?,
            content: stream.content.clone(),
            allows_compression: stream.allows_compression,
            start_position: None,
        })),
        _ => Ok(obj.clone()),
    }
}

fn copy_dictionary(
    output: &mut Document,
    source: &Document,
    dict: &Dictionary,
    cache: &mut HashMap<ObjectId, ObjectId>,
) -> Result<Dictionary> {
    let mut new_dict = Dictionary::new();
    for (key, value) in dict.iter() {
        if key.as_slice() == b"Parent" {
            continue;
        }
        new_dict.set(key.clone(), copy_object_deep(output, source, value, cache)?);
    }
    Ok(new_dict)
}

// =============================================================================
// Page Attributes
// =============================================================================

/// Look up a page attribute, walking up the page tree for inherited values.
pub fn inherited_attribute<'a>(
    doc: &'a Document,
    page_id: ObjectId,
    key: &[u8],
) -> Result<Option<&'a Object>> {
    let mut node = doc.get_dictionary(page_id)?;

    for _ in 0..MAX_TREE_DEPTH {
        if let Ok(value) = node.get(key) {
            return Ok(Some(value));
        }
        match node.get(b"Parent").and_then(Object::as_reference) {
            Ok(parent_id) => node = doc.get_dictionary(parent_id)?,
            Err(_) => return Ok(None),
        }
    }

    Ok(None)
}

/// Read a rectangle attribute (`MediaBox`, `CropBox`) as normalized
/// `[x0, y0, x1, y1]` with x0 <= x1 and y0 <= y1.
pub fn page_rect_attribute(
    doc: &Document,
    page_id: ObjectId,
    key: &[u8],
) -> Result<Option<[f32; 4]>> {
    let Some(value) = inherited_attribute(doc, page_id, key)? else {
        return Ok(None);
    };

    let array = match value {
        Object::Reference(id) => doc.get_object(*id)?.as_array()?,
        other => other.as_array()?,
    };

    if array.len() != 4 {
        return Ok(None);
    }

    let mut numbers = [0.0_f32; 4];
    for (slot, obj) in numbers.iter_mut().zip(array) {
        match extract_number(doc, obj) {
            Some(v) => *slot = v,
            None => return Ok(None),
        }
    }

    let [a, b, c, d] = numbers;
    Ok(Some([a.min(c), b.min(d), a.max(c), b.max(d)]))
}

/// The visible box of a page: CropBox if present, else MediaBox, else the
/// default page size.
///
/// The box is in unrotated page space; see [`page_rotation`].
pub fn page_box(doc: &Document, page_id: ObjectId) -> Result<[f32; 4]> {
    if let Some(crop) = page_rect_attribute(doc, page_id, b"CropBox")? {
        return Ok(crop);
    }
    if let Some(media) = page_rect_attribute(doc, page_id, b"MediaBox")? {
        return Ok(media);
    }
    Ok([0.0, 0.0, DEFAULT_PAGE_DIMENSIONS.0, DEFAULT_PAGE_DIMENSIONS.1])
}

/// Clockwise display rotation of a page in degrees: 0, 90, 180 or 270.
///
/// Values that are not a multiple of 90 are invalid and read as 0.
pub fn page_rotation(doc: &Document, page_id: ObjectId) -> Result<u16> {
    let degrees = inherited_attribute(doc, page_id, b"Rotate")?
        .and_then(|value| extract_number(doc, value))
        .map_or(0, |value| value as i64);

    let normalized = degrees.rem_euclid(360);
    if normalized % 90 != 0 {
        log::debug!("Ignoring invalid /Rotate {} on page {:?}", degrees, page_id);
        return Ok(0);
    }
    Ok(normalized as u16)
}

/// Get source page dimensions (width, height) in points, as displayed
pub fn get_page_dimensions(doc: &Document, page_id: ObjectId) -> Result<(f32, f32)> {
    let [x0, y0, x1, y1] = page_box(doc, page_id)?;
    let (width, height) = (x1 - x0, y1 - y0);
    match page_rotation(doc, page_id)? {
        90 | 270 => Ok((height, width)),
        _ => Ok((width, height)),
    }
}

/// Extract numeric value from a PDF object
fn extract_number(doc: &Document, obj: &Object) -> Option<f32> {
    match obj {
        Object::Integer(i) => Some(*i as f32),
        Object::Real(r) => Some(*r),
        Object::Reference(id) => doc
            .get_object(*id)
            .ok()
            .and_then(|inner| match inner {
                Object::Integer(i) => Some(*i as f32),
                Object::Real(r) => Some(*r),
                _ => None,
            }),
        _ => None,
    }
}
