//! Element values for typed arrays.
//!
//! - [`Value`]: a dynamically tagged element, what array reads return
//! - [`typed::Element`]: the per-type capability (zero value, equality,
//!   conversion) implemented by each slot payload type
//! - [`dispatch_element!`]: bridges a runtime [`ElementType`] to its payload type

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

extern crate alloc;

#[doc(hidden)]
pub mod shim {
    pub use alloc::{string::String, vec::Vec};
}

#[macro_use]
mod macros;

pub mod dynamic;
mod pointer;
pub mod typed;

pub use arrayc_types::ElementType;
pub use dynamic::Value;
pub use pointer::Pointer;
