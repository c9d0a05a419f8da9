//! PDF rendering modules
//!
//! This module is the bridge between computed sheets and `lopdf`:
//! - Creating XObjects from source pages
//! - Building output sheets (page copy, border strokes)
//! - Deep copying PDF objects and reading page attributes

mod sheet;
mod xobject;

pub use sheet::*;
pub use xobject::{
    INHERITABLE_ATTRIBUTES, copy_object_deep, create_page_xobject, get_page_dimensions,
    inherited_attribute, page_box, page_rect_attribute, page_rotation,
};
