//! Element type tags for typed arrays.
//!
//! An array's element type comes from a small closed set ([`ElementType`])
//! rather than open-ended reflection. Host code names types through a
//! [`TypeTable`], which maps primitive names (`"i64"`, `"c_double"`, ...)
//! to tags.
//!
//! # Example
//!
//! ```
//! use arrayc_types::{ElementType, TypeTable};
//!
//! let table = TypeTable::standard();
//! assert_eq!(table.lookup("i64"), Some(ElementType::Int));
//! assert_eq!(ElementType::Int.native_name(), "c_longlong");
//! ```

#![cfg_attr(not(test), no_std)]
extern crate alloc;

pub mod kind;
pub mod table;

pub use kind::{ElementType, TypeFlags, UnknownType};
pub use table::{NONE_TYPE_NAME, TypeTable};
