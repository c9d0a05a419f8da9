//! Layout calculation modules
//!
//! This module handles all the geometric work of sheet composition:
//! - Grid geometry (scale factor, cell and destination rectangles)
//! - Batching source pages into fixed-size groups
//! - Packing batches onto sheets with optional borders

mod grid;
mod pack;
mod types;

pub use grid::*;
pub use pack::*;
pub use types::*;
