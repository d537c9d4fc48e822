use core::{fmt, str::FromStr};

use super::TypeFlags;

/// The closed set of element types a typed array can hold.
///
/// Every slot of an array holds exactly one of these, fixed at construction.
/// The declaration order is also the cross-type sort order.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ElementType {
    /// `bool`, stored as a single byte.
    Bool,

    /// Signed 64-bit integer.
    Int,

    /// 64-bit IEEE float.
    Float,

    /// Owned UTF-8 string.
    Text,

    /// Owned byte string.
    Bytes,

    /// Opaque address; `0` is null.
    ///
    /// This is also the type an array falls back to when nothing declares
    /// or implies one (empty initializer, no explicit type).
    Pointer,
}

impl ElementType {
    pub const ALL: [ElementType; 6] = [
        ElementType::Bool,
        ElementType::Int,
        ElementType::Float,
        ElementType::Text,
        ElementType::Bytes,
        ElementType::Pointer,
    ];

    /// Canonical lowercase name, accepted back by [`FromStr`].
    pub const fn name(self) -> &'static str {
        match self {
            ElementType::Bool => "bool",
            ElementType::Int => "int",
            ElementType::Float => "float",
            ElementType::Text => "text",
            ElementType::Bytes => "bytes",
            ElementType::Pointer => "pointer",
        }
    }

    /// Name of the equivalent C scalar, used when rendering arrays in
    /// constructor form.
    pub const fn native_name(self) -> &'static str {
        match self {
            ElementType::Bool => "c_bool",
            ElementType::Int => "c_longlong",
            ElementType::Float => "c_double",
            ElementType::Text => "c_wchar_p",
            ElementType::Bytes => "c_char_p",
            ElementType::Pointer => "c_void_p",
        }
    }

    pub const fn flags(self) -> TypeFlags {
        match self {
            ElementType::Bool | ElementType::Int | ElementType::Float => {
                TypeFlags::NUMERIC.union(TypeFlags::ORDERED)
            }
            ElementType::Text | ElementType::Bytes => TypeFlags::HEAP.union(TypeFlags::ORDERED),
            ElementType::Pointer => TypeFlags::ADDRESS.union(TypeFlags::ORDERED),
        }
    }

    pub const fn is_numeric(self) -> bool {
        self.flags().contains(TypeFlags::NUMERIC)
    }
}

impl fmt::Display for ElementType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A string that names no element type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownType;

impl fmt::Display for UnknownType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("unknown element type")
    }
}

impl core::error::Error for UnknownType {}

impl FromStr for ElementType {
    type Err = UnknownType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ElementType::ALL
            .into_iter()
            .find(|ty| ty.name() == s || ty.native_name() == s)
            .ok_or(UnknownType)
    }
}

impl TryFrom<&str> for ElementType {
    type Error = UnknownType;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        s.parse()
    }
}
