//! Errors raised by typed array operations.
//!
//! Every failure is local and synchronous: nothing is retried, nothing is
//! swallowed. Each variant carries enough context (field, expected and found
//! type, index, bounds) to diagnose the failure without re-running.

use core::fmt;

use arrayc_values::{ElementType, Value};

use crate::String;

pub type Result<T, E = ArrayError> = core::result::Result<T, E>;

/// Where a type mismatch was detected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Location {
    /// A protected structural field (`element_type`, `length`).
    Field(&'static str),
    /// A slot, or the position of a value in an input sequence.
    Index(usize),
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Location::Field(name) => write!(f, "field `{name}`"),
            Location::Index(index) => write!(f, "index {index}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ArrayError {
    #[error("invalid capacity {requested}: a store needs a non-negative slot count")]
    InvalidCapacity { requested: isize },

    #[error("invalid length {requested}: {reason}")]
    InvalidLength {
        requested: isize,
        reason: &'static str,
    },

    #[error(
        "heterogeneous input: element {index} is {found} but element {} is {expected}",
        .index - 1
    )]
    HeterogeneousInput {
        index: usize,
        expected: ElementType,
        found: ElementType,
    },

    #[error("type mismatch at {location}: expected {expected}, found {found}")]
    TypeMismatch {
        location: Location,
        expected: String,
        found: String,
    },

    #[error("length mismatch: array length is {length}, input length is {given}")]
    LengthMismatch { length: usize, given: usize },

    #[error("index {index} out of range for length {length}")]
    IndexOutOfRange { index: isize, length: usize },

    #[error("{value} not found in [{start}, {stop})")]
    ValueNotFound {
        value: Value,
        start: usize,
        stop: usize,
    },

    #[error("field `{field}` is already initialized")]
    AlreadyInitialized { field: &'static str },

    #[error("field `{field}` read before initialization")]
    UnsetAccess { field: &'static str },

    #[error("{target} is immutable")]
    Immutable { target: &'static str },
}

/// Fieldless mirror of [`ArrayError`] for matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    InvalidCapacity,
    InvalidLength,
    HeterogeneousInput,
    TypeMismatch,
    LengthMismatch,
    IndexOutOfRange,
    ValueNotFound,
    AlreadyInitialized,
    UnsetAccess,
    Immutable,
}

impl ArrayError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ArrayError::InvalidCapacity { .. } => ErrorKind::InvalidCapacity,
            ArrayError::InvalidLength { .. } => ErrorKind::InvalidLength,
            ArrayError::HeterogeneousInput { .. } => ErrorKind::HeterogeneousInput,
            ArrayError::TypeMismatch { .. } => ErrorKind::TypeMismatch,
            ArrayError::LengthMismatch { .. } => ErrorKind::LengthMismatch,
            ArrayError::IndexOutOfRange { .. } => ErrorKind::IndexOutOfRange,
            ArrayError::ValueNotFound { .. } => ErrorKind::ValueNotFound,
            ArrayError::AlreadyInitialized { .. } => ErrorKind::AlreadyInitialized,
            ArrayError::UnsetAccess { .. } => ErrorKind::UnsetAccess,
            ArrayError::Immutable { .. } => ErrorKind::Immutable,
        }
    }

    /// Stable short code, used by renderers.
    pub fn code(&self) -> &'static str {
        match self.kind() {
            ErrorKind::InvalidCapacity => "E001",
            ErrorKind::InvalidLength => "E002",
            ErrorKind::HeterogeneousInput => "E003",
            ErrorKind::TypeMismatch => "E004",
            ErrorKind::LengthMismatch => "E005",
            ErrorKind::IndexOutOfRange => "E006",
            ErrorKind::ValueNotFound => "E007",
            ErrorKind::AlreadyInitialized => "E008",
            ErrorKind::UnsetAccess => "E009",
            ErrorKind::Immutable => "E010",
        }
    }

    /// A one-line hint on how to avoid the error, when there is one.
    pub fn help(&self) -> Option<&'static str> {
        match self {
            ArrayError::HeterogeneousInput { .. } => {
                Some("all initial values must share one type")
            }
            ArrayError::LengthMismatch { .. } => {
                Some("`setitems` truncates long input; `update` rejects it")
            }
            ArrayError::IndexOutOfRange { .. } => Some("indices run from 0 to length - 1"),
            ArrayError::Immutable { target: "fixed array" } => {
                Some("construct the array without `fixed` to allow growth")
            }
            _ => None,
        }
    }

    pub(crate) fn value_mismatch(index: usize, expected: ElementType, found: &Value) -> Self {
        ArrayError::TypeMismatch {
            location: Location::Index(index),
            expected: expected.name().into(),
            found: found.type_tag().name().into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ToString;

    #[test]
    fn test_messages_carry_context() {
        let err = ArrayError::IndexOutOfRange {
            index: -1,
            length: 5,
        };
        assert_eq!(err.to_string(), "index -1 out of range for length 5");

        let err = ArrayError::HeterogeneousInput {
            index: 2,
            expected: ElementType::Int,
            found: ElementType::Text,
        };
        assert_eq!(
            err.to_string(),
            "heterogeneous input: element 2 is text but element 1 is int"
        );

        let err = ArrayError::value_mismatch(3, ElementType::Float, &Value::from("x"));
        assert_eq!(
            err.to_string(),
            "type mismatch at index 3: expected float, found text"
        );
    }

    #[test]
    fn test_kind_and_code() {
        let err = ArrayError::Immutable {
            target: "fixed array",
        };
        assert_eq!(err.kind(), ErrorKind::Immutable);
        assert_eq!(err.code(), "E010");
        assert!(err.help().is_some());
        assert_eq!(
            ArrayError::UnsetAccess { field: "length" }.help(),
            None
        );
    }
}
