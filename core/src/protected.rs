//! Structural fields of a typed array.
//!
//! Two kinds:
//!
//! - [`ProtectedField`]: write-once. Accepts exactly one assignment, can never
//!   be deleted, and refuses reads before that assignment. Holds the element type.
//! - [`LengthField`]: read-only from outside. Fixed at construction and only
//!   ever advanced by the array's own growth path.

use core::{any, fmt};

use crate::{ArrayError, Location, Result, ToString};

/// A field that accepts exactly one assignment for its entire lifetime.
#[derive(Clone, PartialEq, Eq)]
pub struct ProtectedField<T> {
    name: &'static str,
    value: Option<T>,
}

impl<T> ProtectedField<T> {
    pub const fn unset(name: &'static str) -> Self {
        Self { name, value: None }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn is_set(&self) -> bool {
        self.value.is_some()
    }

    /// Stores `value`. Fails if the field already holds one; the stored
    /// value is left unchanged.
    pub fn set(&mut self, value: T) -> Result<()> {
        if self.is_set() {
            return Err(ArrayError::AlreadyInitialized { field: self.name });
        }
        self.value = Some(value);
        Ok(())
    }

    /// Stores the result of converting `value` into `T`.
    ///
    /// Fails with `TypeMismatch` when `value` does not describe a `T`.
    pub fn try_set<V>(&mut self, value: V) -> Result<()>
    where
        V: TryInto<T> + fmt::Display,
    {
        self.set_with(value, |v| v.try_into().ok())
    }

    /// Like [`ProtectedField::try_set`], with an explicit conversion.
    pub fn set_with<V>(&mut self, value: V, convert: impl FnOnce(V) -> Option<T>) -> Result<()>
    where
        V: fmt::Display,
    {
        if self.is_set() {
            return Err(ArrayError::AlreadyInitialized { field: self.name });
        }
        let found = value.to_string();
        match convert(value) {
            Some(converted) => self.set(converted),
            None => Err(ArrayError::TypeMismatch {
                location: Location::Field(self.name),
                expected: short_type_name::<T>().into(),
                found,
            }),
        }
    }

    pub fn get(&self) -> Result<&T> {
        self.value
            .as_ref()
            .ok_or(ArrayError::UnsetAccess { field: self.name })
    }

    /// Protected fields cannot be deleted.
    pub fn delete(&mut self) -> Result<()> {
        Err(ArrayError::Immutable { target: self.name })
    }
}

impl<T: fmt::Debug> fmt::Debug for ProtectedField<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.value {
            Some(value) => write!(f, "{}={:?}", self.name, value),
            None => write!(f, "{}=<unset>", self.name),
        }
    }
}

fn short_type_name<T>() -> &'static str {
    let full = any::type_name::<T>();
    full.rsplit("::").next().unwrap_or(full)
}

/// The logical length of an array.
///
/// Exposed through [`LengthField::get`] only. The owning array advances it
/// when it grows; nothing else can write it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LengthField {
    value: usize,
}

impl LengthField {
    pub(crate) const fn new(value: usize) -> Self {
        Self { value }
    }

    pub fn get(&self) -> usize {
        self.value
    }

    /// The length after growing by `extra` slots, without committing it.
    pub(crate) fn extended_by(&self, extra: usize, max: usize) -> Result<usize> {
        match self.value.checked_add(extra) {
            Some(total) if total <= max => Ok(total),
            _ => Err(ArrayError::InvalidLength {
                requested: isize::try_from(extra).unwrap_or(isize::MAX),
                reason: "growth would exceed the maximum length",
            }),
        }
    }

    pub(crate) fn commit(&mut self, total: usize) {
        debug_assert!(total >= self.value, "length only grows");
        self.value = total;
    }
}
