use pdf_nup::*;

#[test]
fn test_layout_mode_grid_dimensions() {
    assert_eq!(LayoutMode::None.grid_dimensions(), None);
    assert_eq!(LayoutMode::Grid4.grid_dimensions(), Some((2, 2)));
    assert_eq!(LayoutMode::Grid6.grid_dimensions(), Some((2, 3)));
}

#[test]
fn test_layout_mode_pages_per_sheet() {
    assert_eq!(LayoutMode::None.pages_per_sheet(), 1);
    assert_eq!(LayoutMode::Grid4.pages_per_sheet(), 4);
    assert_eq!(LayoutMode::Grid6.pages_per_sheet(), 6);
}

#[test]
fn test_layout_mode_file_suffix() {
    assert_eq!(LayoutMode::None.file_suffix(), None);
    assert_eq!(LayoutMode::Grid4.file_suffix(), Some("_4in1"));
    assert_eq!(LayoutMode::Grid6.file_suffix(), Some("_6in1"));
    assert_eq!(LayoutMode::default(), LayoutMode::None);
}

#[test]
fn test_crop_margins() {
    let margins = CropMargins::default();
    assert_eq!(margins.left, 0.0);
    assert_eq!(margins.top, 400.0);
    assert_eq!(margins.right, 290.0);
    assert_eq!(margins.bottom, 0.0);

    let uniform = CropMargins::uniform(12.0);
    assert_eq!(
        [uniform.left, uniform.top, uniform.right, uniform.bottom],
        [12.0; 4]
    );
    assert_eq!(CropMargins::zero(), CropMargins::uniform(0.0));
}

#[test]
fn test_rect_edges() {
    let rect = Rect::new(10.0, 20.0, 30.0, 40.0);
    assert_eq!(rect.x0(), 10.0);
    assert_eq!(rect.y0(), 20.0);
    assert_eq!(rect.x1(), 40.0);
    assert_eq!(rect.y1(), 60.0);
}

#[test]
fn test_rect_contains() {
    let outer = Rect::new(0.0, 0.0, 100.0, 100.0);
    assert!(outer.contains(&Rect::new(10.0, 10.0, 50.0, 50.0), 0.0));
    assert!(outer.contains(&outer, 0.0));
    assert!(!outer.contains(&Rect::new(60.0, 60.0, 50.0, 50.0), 0.0));
    assert!(outer.contains(&Rect::new(0.0, 0.0, 100.001, 100.0), 0.01));
}

#[test]
fn test_rect_overlaps() {
    let a = Rect::new(0.0, 0.0, 100.0, 100.0);
    let touching = Rect::new(100.0, 0.0, 100.0, 100.0);
    let crossing = Rect::new(50.0, 50.0, 100.0, 100.0);

    assert!(!a.overlaps(&touching, 0.0));
    assert!(a.overlaps(&crossing, 0.0));
    assert!(crossing.overlaps(&a, 0.0));
}

#[test]
fn test_color() {
    assert_eq!(Color::default(), Color::BLACK);
    assert_eq!(Color::rgb(1.0, 0.5, 0.0).g, 0.5);
}

#[test]
fn test_error_messages() {
    assert_eq!(
        LayoutError::InvalidGrid { rows: 0, cols: 2 }.to_string(),
        "Invalid grid: 0 rows x 2 columns"
    );
    assert_eq!(
        LayoutError::PageNotFound(7).to_string(),
        "Source page 7 not found"
    );
    assert_eq!(LayoutError::NoPages.to_string(), "No pages to lay out");
}
