//! Core type components.
//!
//! - [`ElementType`]: the closed set of element type tags
//! - [`TypeFlags`]: static properties of each tag

mod element_type;
mod flags;

pub use element_type::{ElementType, UnknownType};
pub use flags::TypeFlags;
