use lopdf::{Dictionary, Document, Object, Stream};
use pdf_nup::*;

fn create_test_pdf(num_pages: usize) -> Document {
    let mut doc = Document::with_version("1.7");
    let pages_id = doc.new_object_id();

    let mut kids = Vec::new();
    for _ in 0..num_pages {
        let content_id = doc.add_object(Stream::new(Dictionary::new(), b"q Q".to_vec()));
        let page_id = doc.add_object(Dictionary::from_iter(vec![
            ("Type", Object::Name(b"Page".to_vec())),
            ("Parent", Object::Reference(pages_id)),
            (
                "MediaBox",
                Object::Array(vec![
                    Object::Integer(0),
                    Object::Integer(0),
                    Object::Integer(305),
                    Object::Integer(442),
                ]),
            ),
            ("Contents", Object::Reference(content_id)),
        ]));
        kids.push(Object::Reference(page_id));
    }

    let pages_dict = Dictionary::from_iter(vec![
        ("Type", Object::Name(b"Pages".to_vec())),
        ("Kids", Object::Array(kids)),
        ("Count", Object::Integer(num_pages as i64)),
    ]);
    doc.objects.insert(pages_id, Object::Dictionary(pages_dict));

    let catalog_id = doc.add_object(Dictionary::from_iter(vec![
        ("Type", Object::Name(b"Catalog".to_vec())),
        ("Pages", Object::Reference(pages_id)),
    ]));
    doc.trailer.set("Root", catalog_id);

    doc
}

#[test]
fn test_grid4_partial_last_sheet() {
    let stats = calculate_statistics(5, LayoutMode::Grid4);

    assert_eq!(stats.source_pages, 5);
    assert_eq!(stats.pages_per_sheet, 4);
    assert_eq!(stats.output_sheets, 2);
    assert_eq!(stats.last_sheet_pages, 1);
    assert_eq!(stats.blank_cells, 3);
}

#[test]
fn test_grid6_full_sheets() {
    let stats = calculate_statistics(12, LayoutMode::Grid6);

    assert_eq!(stats.pages_per_sheet, 6);
    assert_eq!(stats.output_sheets, 2);
    assert_eq!(stats.last_sheet_pages, 6);
    assert_eq!(stats.blank_cells, 0);
}

#[test]
fn test_passthrough_one_page_per_sheet() {
    let stats = calculate_statistics(7, LayoutMode::None);

    assert_eq!(stats.pages_per_sheet, 1);
    assert_eq!(stats.output_sheets, 7);
    assert_eq!(stats.last_sheet_pages, 1);
    assert_eq!(stats.blank_cells, 0);
}

#[test]
fn test_no_pages() {
    let stats = calculate_statistics(0, LayoutMode::Grid4);

    assert_eq!(stats.output_sheets, 0);
    assert_eq!(stats.last_sheet_pages, 0);
    assert_eq!(stats.blank_cells, 0);
}

#[test]
fn test_sheet_count_matches_packer() {
    for mode in [LayoutMode::Grid4, LayoutMode::Grid6] {
        let grid = GridLayout::for_mode(mode, false).unwrap();
        for n in 1..=25 {
            let pages: Vec<SourcePage> =
                (0..n).map(|i| SourcePage::new(i, 305.0, 442.0)).collect();
            let sheets = pack(&pages, &grid).unwrap();
            let stats = calculate_statistics(n, mode);

            assert_eq!(stats.output_sheets, sheets.len(), "{:?} with {} pages", mode, n);
            assert_eq!(
                stats.last_sheet_pages,
                sheets.last().unwrap().occupied(),
                "{:?} with {} pages",
                mode,
                n
            );
        }
    }
}

#[test]
fn test_document_statistics_sums_documents() {
    let docs = vec![create_test_pdf(3), create_test_pdf(4)];
    let stats = calculate_document_statistics(&docs, LayoutMode::Grid6).unwrap();

    assert_eq!(stats.source_pages, 7);
    assert_eq!(stats.output_sheets, 2);
    assert_eq!(stats.last_sheet_pages, 1);
    assert_eq!(stats.blank_cells, 5);
}

#[test]
fn test_document_statistics_no_pages() {
    let result = calculate_document_statistics(&[create_test_pdf(0)], LayoutMode::Grid4);
    assert!(matches!(result, Err(LayoutError::NoPages)));

    let result = calculate_document_statistics(&[], LayoutMode::Grid4);
    assert!(matches!(result, Err(LayoutError::NoPages)));
}
