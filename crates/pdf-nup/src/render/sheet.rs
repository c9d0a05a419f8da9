//! Output sheet rendering
//!
//! Implements the three drawing primitives the packer relies on: creating a
//! blank sheet, copying a source page into a rectangle, and stroking a
//! rectangle outline.

use crate::constants::OUTPUT_PDF_VERSION;
use crate::layout::{Placement, Sheet, Stroke};
use crate::types::{LayoutError, Result, SourcePage};
use lopdf::{Dictionary, Document, Object, ObjectId, Stream};
use std::collections::HashMap;

use super::xobject::{create_page_xobject, get_page_dimensions, page_box, page_rotation};

// =============================================================================
// Public API
// =============================================================================

/// Read the page sequence of a document as source pages.
pub fn read_source_pages(doc: &Document) -> Result<Vec<SourcePage>> {
    doc.get_pages()
        .values()
        .enumerate()
        .map(|(index, &page_id)| {
            let (width, height) = get_page_dimensions(doc, page_id)?;
            Ok(SourcePage::new(index, width, height))
        })
        .collect()
}

/// Render sheets into a new document, one page per sheet in order.
///
/// `source` is the document the sheets' placements index into.
pub fn render_sheets(source: &Document, sheets: &[Sheet]) -> Result<Document> {
    let source_page_ids: Vec<ObjectId> = source.get_pages().values().copied().collect();

    let mut output = Document::with_version(OUTPUT_PDF_VERSION);
    let pages_tree_id = output.new_object_id();
    let mut renderer = SheetRenderer {
        source,
        source_page_ids: &source_page_ids,
        object_cache: HashMap::new(),
        xobject_cache: HashMap::new(),
    };

    let mut page_ids = Vec::with_capacity(sheets.len());
    for sheet in sheets {
        page_ids.push(renderer.render_sheet(&mut output, sheet, pages_tree_id)?);
    }

    finish_document(&mut output, pages_tree_id, &page_ids);
    Ok(output)
}

/// Write the page tree and catalog for `page_ids` into `output`.
pub(crate) fn finish_document(
    output: &mut Document,
    pages_tree_id: ObjectId,
    page_ids: &[ObjectId],
) {
    let kids: Vec<Object> = page_ids.iter().map(|&id| Object::Reference(id)).collect();
    let count = kids.len() as i64;
    let pages_dict = Dictionary::from_iter(vec![
        ("Type", Object::Name(b"Pages".to_vec())),
        ("Kids", Object::Array(kids)),
        ("Count", Object::Integer(count)),
    ]);
    output
        .objects
        .insert(pages_tree_id, Object::Dictionary(pages_dict));

    let catalog_id = output.add_object(Dictionary::from_iter(vec![
        ("Type", Object::Name(b"Catalog".to_vec())),
        ("Pages", Object::Reference(pages_tree_id)),
    ]));

    output.trailer.set("Root", catalog_id);
}

// =============================================================================
// Sheet Rendering
// =============================================================================

struct SheetRenderer<'a> {
    source: &'a Document,
    source_page_ids: &'a [ObjectId],
    /// Source object ID -> output object ID, for shared resources
    object_cache: HashMap<ObjectId, ObjectId>,
    /// Source page ID -> (XObject ID, page frame)
    xobject_cache: HashMap<ObjectId, (ObjectId, PageFrame)>,
}

/// Unrotated visible box and display rotation of a source page
#[derive(Debug, Clone, Copy, PartialEq)]
struct PageFrame {
    bbox: [f32; 4],
    rotation: u16,
}

impl SheetRenderer<'_> {
    fn render_sheet(
        &mut self,
        output: &mut Document,
        sheet: &Sheet,
        parent_pages_id: ObjectId,
    ) -> Result<ObjectId> {
        let mut page_dict = new_sheet_dictionary(sheet.width, sheet.height, parent_pages_id);

        let mut content_ops = Vec::new();
        let mut xobjects = Dictionary::new();

        for placement in sheet.placements() {
            let (xobject_id, frame) = self.page_xobject(output, placement.source_index)?;
            let xobject_name = format!("P{}", placement.cell_index);
            xobjects.set(xobject_name.as_bytes(), Object::Reference(xobject_id));
            content_ops.push(placement_command(&xobject_name, placement, frame, sheet.height));
        }

        for stroke in &sheet.borders {
            content_ops.push(stroke_command(stroke, sheet.height));
        }

        let mut resources = Dictionary::new();
        resources.set("XObject", Object::Dictionary(xobjects));

        let content = content_ops.join("");
        let content_id = output.add_object(Stream::new(Dictionary::new(), content.into_bytes()));

        page_dict.set("Contents", Object::Reference(content_id));
        page_dict.set("Resources", Object::Dictionary(resources));

        Ok(output.add_object(page_dict))
    }

    fn page_xobject(
        &mut self,
        output: &mut Document,
        source_index: usize,
    ) -> Result<(ObjectId, PageFrame)> {
        let page_id = *self
            .source_page_ids
            .get(source_index)
            .ok_or(LayoutError::PageNotFound(source_index))?;

        if let Some(&cached) = self.xobject_cache.get(&page_id) {
            return Ok(cached);
        }

        let xobject_id =
            create_page_xobject(output, self.source, page_id, &mut self.object_cache)?;
        let frame = PageFrame {
            bbox: page_box(self.source, page_id)?,
            rotation: page_rotation(self.source, page_id)?,
        };
        self.xobject_cache.insert(page_id, (xobject_id, frame));
        Ok((xobject_id, frame))
    }
}

/// A blank page dictionary of the given size
fn new_sheet_dictionary(width: f32, height: f32, parent_pages_id: ObjectId) -> Dictionary {
    let mut page_dict = Dictionary::new();
    page_dict.set("Type", Object::Name(b"Page".to_vec()));
    page_dict.set("Parent", Object::Reference(parent_pages_id));
    page_dict.set(
        "MediaBox",
        Object::Array(vec![
            Object::Integer(0),
            Object::Integer(0),
            Object::Real(width),
            Object::Real(height),
        ]),
    );
    page_dict
}

// =============================================================================
// Content Stream Commands
// =============================================================================

/// Draw an XObject scaled and rotated into the placement rectangle.
///
/// Sheet coordinates have y pointing down; the rectangle's bottom edge maps
/// to `sheet_height - y1` in PDF space. The page's display rotation is
/// applied clockwise, and the rotated box lands on the rectangle's
/// lower-left corner.
fn placement_command(
    xobject_name: &str,
    placement: &Placement,
    frame: PageFrame,
    sheet_height: f32,
) -> String {
    let s = placement.scale;
    let x = placement.rect.x0();
    let y = sheet_height - placement.rect.y1();
    let [x0, y0, x1, y1] = frame.bbox;

    let (a, b, c, d, e, f) = match frame.rotation {
        90 => (0.0, -s, s, 0.0, x - y0 * s, y + x1 * s),
        180 => (-s, 0.0, 0.0, -s, x + x1 * s, y + y1 * s),
        270 => (0.0, s, -s, 0.0, x + y1 * s, y - x0 * s),
        _ => (s, 0.0, 0.0, s, x - x0 * s, y - y0 * s),
    };
    format!(
        "q {} {} {} {} {} {} cm /{} Do Q\n",
        a, b, c, d, e, f, xobject_name
    )
}

/// Stroke a rectangle outline.
fn stroke_command(stroke: &Stroke, sheet_height: f32) -> String {
    let rect = &stroke.rect;
    let color = stroke.color;
    format!(
        "q {} {} {} RG {} w {} {} {} {} re S Q\n",
        color.r,
        color.g,
        color.b,
        stroke.width,
        rect.x0(),
        sheet_height - rect.y1(),
        rect.width,
        rect.height
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Color, Rect};

    fn frame(bbox: [f32; 4], rotation: u16) -> PageFrame {
        PageFrame { bbox, rotation }
    }

    /// A 100 x 50 slot at (10, 20) on a sheet 300pt high
    fn rotated_placement() -> Placement {
        Placement {
            source_index: 0,
            cell_index: 0,
            cell: Rect::new(10.0, 20.0, 100.0, 100.0),
            rect: Rect::new(10.0, 20.0, 100.0, 50.0),
            scale: 0.5,
        }
    }

    /// Apply the `cm` matrix of a placement command to a point
    fn apply_matrix(cmd: &str, point: (f32, f32)) -> (f32, f32) {
        let m: Vec<f32> = cmd
            .split_whitespace()
            .skip(1)
            .take(6)
            .map(|v| v.parse().unwrap())
            .collect();
        (
            m[0] * point.0 + m[2] * point.1 + m[4],
            m[1] * point.0 + m[3] * point.1 + m[5],
        )
    }

    #[test]
    fn test_placement_command_flips_y() {
        let placement = Placement {
            source_index: 0,
            cell_index: 0,
            cell: Rect::new(0.0, 0.0, 297.5, 421.0),
            rect: Rect::new(0.0, 0.0, 297.5, 148.75),
            scale: 1.4875,
        };

        let cmd = placement_command("P0", &placement, frame([0.0, 0.0, 200.0, 100.0], 0), 842.0);
        assert_eq!(cmd, "q 1.4875 0 0 1.4875 0 693.25 cm /P0 Do Q\n");
    }

    #[test]
    fn test_placement_command_offsets_box_origin() {
        let placement = Placement {
            source_index: 0,
            cell_index: 1,
            cell: Rect::new(100.0, 0.0, 100.0, 100.0),
            rect: Rect::new(100.0, 0.0, 50.0, 50.0),
            scale: 0.5,
        };

        // Box starts at (20, 40): the origin must shift by -10, -20
        let cmd = placement_command("P1", &placement, frame([20.0, 40.0, 120.0, 140.0], 0), 100.0);
        assert_eq!(cmd, "q 0.5 0 0 0.5 90 30 cm /P1 Do Q\n");
    }

    #[test]
    fn test_placement_command_rotations() {
        let placement = rotated_placement();

        let cmd = placement_command("P0", &placement, frame([0.0, 0.0, 100.0, 200.0], 90), 300.0);
        assert_eq!(cmd, "q 0 -0.5 0.5 0 10 280 cm /P0 Do Q\n");

        let cmd = placement_command("P0", &placement, frame([0.0, 0.0, 200.0, 100.0], 180), 300.0);
        assert_eq!(cmd, "q -0.5 0 0 -0.5 110 280 cm /P0 Do Q\n");

        let cmd = placement_command("P0", &placement, frame([0.0, 0.0, 100.0, 200.0], 270), 300.0);
        assert_eq!(cmd, "q 0 0.5 -0.5 0 110 230 cm /P0 Do Q\n");
    }

    #[test]
    fn test_rotated_page_fills_rectangle() {
        let placement = rotated_placement();
        // Target rectangle in PDF space: x 10..110, y 230..280
        let bbox = [20.0, 40.0, 120.0, 240.0];

        let cmd = placement_command("P0", &placement, frame(bbox, 90), 300.0);

        // Clockwise: the page's left edge is displayed at the top
        assert_eq!(apply_matrix(&cmd, (20.0, 40.0)), (10.0, 280.0));
        assert_eq!(apply_matrix(&cmd, (20.0, 240.0)), (110.0, 280.0));
        assert_eq!(apply_matrix(&cmd, (120.0, 40.0)), (10.0, 230.0));
        assert_eq!(apply_matrix(&cmd, (120.0, 240.0)), (110.0, 230.0));

        let cmd = placement_command("P0", &placement, frame(bbox, 270), 300.0);

        // The page's left edge is displayed at the bottom
        assert_eq!(apply_matrix(&cmd, (20.0, 40.0)), (110.0, 230.0));
        assert_eq!(apply_matrix(&cmd, (20.0, 240.0)), (10.0, 230.0));
        assert_eq!(apply_matrix(&cmd, (120.0, 240.0)), (10.0, 280.0));
    }

    #[test]
    fn test_stroke_command() {
        let stroke = Stroke {
            rect: Rect::new(297.5, 0.0, 297.5, 148.75),
            width: 1.5,
            color: Color::BLACK,
        };
        assert_eq!(
            stroke_command(&stroke, 842.0),
            "q 0 0 0 RG 1.5 w 297.5 693.25 297.5 148.75 re S Q\n"
        );
    }
}
