use alloc::{string::String, vec::Vec};
use core::{cmp::Ordering, fmt};

use arrayc_types::ElementType;

use crate::Pointer;
use crate::typed::Element;

/// A single element, tagged with its runtime type.
///
/// This is what crosses the array boundary: reads produce a `Value`, writes
/// consume one. Slots themselves hold the unwrapped payload.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
    Bytes(Vec<u8>),
    Pointer(Pointer),
}

impl Value {
    pub fn type_tag(&self) -> ElementType {
        match self {
            Value::Bool(_) => ElementType::Bool,
            Value::Int(_) => ElementType::Int,
            Value::Float(_) => ElementType::Float,
            Value::Text(_) => ElementType::Text,
            Value::Bytes(_) => ElementType::Bytes,
            Value::Pointer(_) => ElementType::Pointer,
        }
    }

    /// The zero value of `ty`: `0`, `0.0`, `""`, `b""`, `false`, null.
    pub fn default_for(ty: ElementType) -> Value {
        crate::dispatch_element!(ty, T => T::default_value().into_value())
    }

    /// Converts `self` into a value of type `ty`, the way a slot of that type
    /// would absorb it.
    ///
    /// Hands `self` back unchanged when the conversion is not allowed.
    pub fn coerce(self, ty: ElementType) -> Result<Value, Value> {
        if self.type_tag() == ty {
            return Ok(self);
        }
        crate::dispatch_element!(ty, T => T::from_value(self).map(Element::into_value))
    }

    /// Total order used for sorting.
    ///
    /// Floats compare with [`f64::total_cmp`]; values of different types
    /// order by their tag.
    pub fn total_cmp(&self, other: &Value) -> Ordering {
        match (self, other) {
            (Value::Bool(a), Value::Bool(b)) => a.cmp(b),
            (Value::Int(a), Value::Int(b)) => a.cmp(b),
            (Value::Float(a), Value::Float(b)) => a.total_cmp(b),
            (Value::Text(a), Value::Text(b)) => a.cmp(b),
            (Value::Bytes(a), Value::Bytes(b)) => a.cmp(b),
            (Value::Pointer(a), Value::Pointer(b)) => a.cmp(b),
            (a, b) => a.type_tag().cmp(&b.type_tag()),
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_float(&self) -> Option<f64> {
        match self {
            Value::Float(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Text(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            Value::Bytes(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_pointer(&self) -> Option<Pointer> {
        match self {
            Value::Pointer(v) => Some(*v),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Bool(v) => write!(f, "{v}"),
            Value::Int(v) => write!(f, "{v}"),
            // Debug keeps the trailing `.0` on integral floats.
            Value::Float(v) => write!(f, "{v:?}"),
            Value::Text(v) => write!(f, "{v:?}"),
            Value::Bytes(v) => write!(f, "b\"{}\"", v.escape_ascii()),
            Value::Pointer(v) => write!(f, "{v}"),
        }
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Int(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Int(v.into())
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float(v)
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::Text(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Text(v.into())
    }
}

impl From<Vec<u8>> for Value {
    fn from(v: Vec<u8>) -> Self {
        Value::Bytes(v)
    }
}

impl From<&[u8]> for Value {
    fn from(v: &[u8]) -> Self {
        Value::Bytes(v.into())
    }
}

impl From<Pointer> for Value {
    fn from(v: Pointer) -> Self {
        Value::Pointer(v)
    }
}
