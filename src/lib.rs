//! arrayc - typed, fixed-layout arrays with list-like operations
//!
//! # Overview
//!
//! A [`TypedArray`] holds a contiguous block of slots that all share one
//! element type (like a C array) and offers the operations of a list on top
//! of it: indexing with bounds checks, `count`, `find`, `remove`, `sort`,
//! `reverse`, and explicit growth.
//!
//! - The element type is fixed at construction and can never change.
//! - The length changes only through [`TypedArray::expand`], which
//!   reallocates; arrays built with `fixed = true` never grow.
//! - `pop` and `remove` reset a slot to the zero value instead of shifting
//!   later elements.
//!
//! # Quick Start
//!
//! ```
//! use arrayc::{Factory, Value};
//!
//! let factory = Factory::default();
//! let mut array = factory
//!     .builder()
//!     .values([1, 2, 3].map(Value::from))
//!     .length(5)
//!     .build()
//!     .unwrap();
//!
//! array.remove(&Value::Int(3)).unwrap();
//! array.expand(2).unwrap();
//! assert_eq!(array.to_string(), "[1, 2, 0, 0, 0, 0, 0]");
//! assert_eq!(array.count(&Value::Int(0)), 5);
//! ```
//!
//! # Scripts
//!
//! [`script`] parses small operation scripts (`"set 0 9; sort desc; show"`)
//! and applies them to an array; [`error_renderer`] prints their failures
//! against the script source.

// Error rendering utilities
pub mod error_renderer;
pub use error_renderer::{CharSet, RenderConfig, render_error, render_error_to};

pub mod script;
pub use script::{Script, ScriptError};

// Re-export public API from arrayc_core
pub use arrayc_core::{
    ArrayBuilder, ArrayError, ArrayIterator, ArrayOptions, ContiguousStore, ElementType,
    ErrorKind, Factory, Homogeneity, IterState, LengthField, Location, Pointer, ProtectedField,
    Result, TypeGuard, TypeSpec, TypeTable, TypedArray, Value,
};
