//! The per-type capability behind every slot.
//!
//! `Element` maps a Rust payload type to its [`ElementType`] tag and back to
//! the dynamic [`Value`]. Each tag has exactly one implementation.
//!
//! # Implemented for
//!
//! - `bool` (`Bool`)
//! - `i64` (`Int`)
//! - `f64` (`Float`)
//! - `String` (`Text`)
//! - `Vec<u8>` (`Bytes`)
//! - [`Pointer`] (`Pointer`)

use alloc::{string::String, vec::Vec};
use core::mem;

use arrayc_types::ElementType;

use crate::{Pointer, Value};

/// Capability set of a slot payload type.
///
/// Each implementation defines:
/// - the tag it stores
/// - its zero value, used for fresh, cleared and popped slots
/// - equality as seen by `count`, `find` and `remove`
/// - conversion from a dynamic [`Value`], including the coercions a slot of
///   this type accepts
pub trait Element: Clone + Sized {
    const TAG: ElementType;

    fn default_value() -> Self;

    fn equals(&self, other: &Self) -> bool;

    fn into_value(self) -> Value;

    fn to_value(&self) -> Value {
        self.clone().into_value()
    }

    /// Converts `value` into this payload type.
    ///
    /// Hands the value back when this type cannot absorb it.
    fn from_value(value: Value) -> Result<Self, Value>;
}

/// Width in bytes of one slot of type `ty`.
pub fn slot_size(ty: ElementType) -> usize {
    crate::dispatch_element!(ty, T => mem::size_of::<T>())
}

// =============================================================================
// Scalar implementations
// =============================================================================

impl Element for bool {
    const TAG: ElementType = ElementType::Bool;

    fn default_value() -> Self {
        false
    }

    fn equals(&self, other: &Self) -> bool {
        self == other
    }

    fn into_value(self) -> Value {
        Value::Bool(self)
    }

    fn from_value(value: Value) -> Result<Self, Value> {
        match value {
            Value::Bool(v) => Ok(v),
            Value::Int(v) => Ok(v != 0),
            other => Err(other),
        }
    }
}

impl Element for i64 {
    const TAG: ElementType = ElementType::Int;

    fn default_value() -> Self {
        0
    }

    fn equals(&self, other: &Self) -> bool {
        self == other
    }

    fn into_value(self) -> Value {
        Value::Int(self)
    }

    fn from_value(value: Value) -> Result<Self, Value> {
        match value {
            Value::Int(v) => Ok(v),
            Value::Bool(v) => Ok(v.into()),
            Value::Pointer(p) => i64::try_from(p.addr()).map_err(|_| Value::Pointer(p)),
            other => Err(other),
        }
    }
}

impl Element for f64 {
    const TAG: ElementType = ElementType::Float;

    fn default_value() -> Self {
        0.0
    }

    // IEEE equality: NaN never equals anything, including itself.
    fn equals(&self, other: &Self) -> bool {
        self == other
    }

    fn into_value(self) -> Value {
        Value::Float(self)
    }

    fn from_value(value: Value) -> Result<Self, Value> {
        match value {
            Value::Float(v) => Ok(v),
            Value::Int(v) => Ok(v as f64),
            Value::Bool(v) => Ok(if v { 1.0 } else { 0.0 }),
            other => Err(other),
        }
    }
}

// =============================================================================
// Heap-backed implementations
// =============================================================================

impl Element for String {
    const TAG: ElementType = ElementType::Text;

    fn default_value() -> Self {
        String::new()
    }

    fn equals(&self, other: &Self) -> bool {
        self == other
    }

    fn into_value(self) -> Value {
        Value::Text(self)
    }

    fn from_value(value: Value) -> Result<Self, Value> {
        match value {
            Value::Text(v) => Ok(v),
            other => Err(other),
        }
    }
}

impl Element for Vec<u8> {
    const TAG: ElementType = ElementType::Bytes;

    fn default_value() -> Self {
        Vec::new()
    }

    fn equals(&self, other: &Self) -> bool {
        self == other
    }

    fn into_value(self) -> Value {
        Value::Bytes(self)
    }

    fn from_value(value: Value) -> Result<Self, Value> {
        match value {
            Value::Bytes(v) => Ok(v),
            other => Err(other),
        }
    }
}

impl Element for Pointer {
    const TAG: ElementType = ElementType::Pointer;

    fn default_value() -> Self {
        Pointer::NULL
    }

    fn equals(&self, other: &Self) -> bool {
        self == other
    }

    fn into_value(self) -> Value {
        Value::Pointer(self)
    }

    fn from_value(value: Value) -> Result<Self, Value> {
        match value {
            Value::Pointer(p) => Ok(p),
            Value::Int(v) => usize::try_from(v).map(Pointer).map_err(|_| Value::Int(v)),
            other => Err(other),
        }
    }
}
