//! Typed, fixed-layout arrays with list-like operations.
//!
//! A [`TypedArray`] stores contiguous, homogeneously typed slots (like a C
//! array) behind bounds-checked, list-style operations: `count`, `find`,
//! `pop`, `remove`, `reverse`, `sort`, and explicit growth via `expand`.
//!
//! Pieces, leaf first:
//!
//! - [`ContiguousStore`]: the single owner of the raw allocation
//! - [`TypeGuard`]: homogeneity and value checks
//! - [`ProtectedField`] / [`LengthField`]: write-once and grow-only structure
//! - [`TypedArray`]: the array itself
//! - [`ArrayIterator`]: borrowing iteration with a captured stop bound
//! - [`Factory`]: validated construction with a [`TypeTable`]
//!
//! # Example
//!
//! ```
//! use arrayc_core::{Factory, Value};
//!
//! let factory = Factory::default();
//! let mut array = factory
//!     .construct([1, 2, 3].map(Value::from), None, Some(5), None)
//!     .unwrap();
//! array.remove(&Value::Int(3)).unwrap();
//! array.expand(2).unwrap();
//! assert_eq!(array.to_string(), "[1, 2, 0, 0, 0, 0, 0]");
//! ```

#![cfg_attr(all(not(feature = "std"), not(test)), no_std)]

// This works on std and no_std and is harmless.
extern crate alloc;

#[doc(hidden)]
pub mod shim {
    pub use alloc::{boxed::Box, format, string::String, string::ToString, vec, vec::Vec};
}

// Re-export (crate only) for convenience so other modules don't need alloc:: prefix
#[allow(unused_imports)]
pub(crate) use shim::*;

mod array;
mod error;
mod factory;
mod guard;
mod iter;
mod options;
mod protected;
mod render;
mod store;

pub use array::{TypeSpec, TypedArray};
pub use error::{ArrayError, ErrorKind, Location, Result};
pub use factory::{ArrayBuilder, Factory};
pub use guard::{Homogeneity, TypeGuard};
pub use iter::{ArrayIterator, IterState};
pub use options::ArrayOptions;
pub use protected::{LengthField, ProtectedField};
pub use store::ContiguousStore;

pub use arrayc_types::{ElementType, TypeTable};
pub use arrayc_values::{Pointer, Value};
