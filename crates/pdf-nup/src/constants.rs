//! Shared constants for sheet layout
//!
//! Defaults used when the caller does not configure a value explicitly.
//! The layout algorithms themselves never read these directly.

// =============================================================================
// Sheet Dimensions
// =============================================================================

/// A4 short edge in points
pub const A4_SHORT_EDGE_PT: f32 = 595.0;

/// A4 long edge in points
pub const A4_LONG_EDGE_PT: f32 = 842.0;

/// Default page dimensions for pages without a usable MediaBox (US Letter)
pub const DEFAULT_PAGE_DIMENSIONS: (f32, f32) = (612.0, 792.0);

// =============================================================================
// Borders
// =============================================================================

/// Stroke width of cell borders (points)
pub const DEFAULT_BORDER_WIDTH: f32 = 1.5;

// =============================================================================
// Geometry
// =============================================================================

/// Tolerance used when comparing computed coordinates
pub const GEOMETRY_EPSILON: f32 = 1e-3;

// =============================================================================
// Output
// =============================================================================

/// PDF version written for generated documents
pub const OUTPUT_PDF_VERSION: &str = "1.7";
