//! Page cropping

use crate::render::{page_box, page_rotation};
use crate::types::*;
use lopdf::{Document, Object, ObjectId};

/// Crop every page of a document in place.
///
/// Each page's visible box is shrunk by `margins` and written to both
/// CropBox and MediaBox, so the page itself takes the cropped size.
/// Margins refer to the page as displayed, after its `/Rotate`.
pub fn crop_document(doc: &mut Document, margins: &CropMargins) -> Result<()> {
    let page_ids: Vec<ObjectId> = doc.get_pages().values().copied().collect();

    for (index, page_id) in page_ids.into_iter().enumerate() {
        let page_margins = unrotated_margins(margins, page_rotation(doc, page_id)?);
        let cropped = cropped_box(page_box(doc, page_id)?, &page_margins).ok_or_else(|| {
            LayoutError::InvalidGeometry(format!(
                "cropping page {} by {:?} leaves no visible area",
                index + 1,
                margins
            ))
        })?;

        let rect = Object::Array(cropped.iter().map(|&v| Object::Real(v)).collect());
        let page_dict = doc.get_object_mut(page_id)?.as_dict_mut()?;
        page_dict.set("CropBox", rect.clone());
        page_dict.set("MediaBox", rect);
    }

    Ok(())
}

/// Re-express displayed margins against the unrotated page edges.
///
/// A page rotated 90 degrees clockwise shows its left edge at the top, its
/// top edge at the right, and so on around.
fn unrotated_margins(margins: &CropMargins, rotation: u16) -> CropMargins {
    let CropMargins {
        left,
        top,
        right,
        bottom,
    } = *margins;

    match rotation {
        90 => CropMargins {
            left: top,
            top: right,
            right: bottom,
            bottom: left,
        },
        180 => CropMargins {
            left: right,
            top: bottom,
            right: left,
            bottom: top,
        },
        270 => CropMargins {
            left: bottom,
            top: left,
            right: top,
            bottom: right,
        },
        _ => *margins,
    }
}

/// Shrink `[x0, y0, x1, y1]` (PDF space, y up) by the margins.
///
/// Returns `None` if nothing would remain.
fn cropped_box(bbox: [f32; 4], margins: &CropMargins) -> Option<[f32; 4]> {
    let [x0, y0, x1, y1] = bbox;
    let cropped = [
        x0 + margins.left,
        y0 + margins.bottom,
        x1 - margins.right,
        y1 - margins.top,
    ];

    (cropped[2] > cropped[0] && cropped[3] > cropped[1]).then_some(cropped)
}
