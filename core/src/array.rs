//! The typed array: one element type, list-like operations, gated growth.

use core::cmp::Ordering;
use core::fmt;
use core::ops::{Bound, RangeBounds};

use arrayc_types::TypeTable;
use arrayc_values::{ElementType, Value};

use crate::guard::Homogeneity;
use crate::{
    ArrayError, ArrayIterator, ArrayOptions, ContiguousStore, LengthField, ProtectedField, Result,
    TypeGuard, Vec,
};

/// How the element type of a new array is chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TypeSpec<'a> {
    /// Take the common type of the initial values, or the type table's
    /// fallback when there are none.
    #[default]
    Infer,

    /// Use this type. Initial values are converted to it as they are stored.
    Tag(ElementType),

    /// Look this name up in the factory's type table.
    Name(&'a str),
}

impl From<ElementType> for TypeSpec<'_> {
    fn from(ty: ElementType) -> Self {
        TypeSpec::Tag(ty)
    }
}

impl From<Option<ElementType>> for TypeSpec<'_> {
    fn from(ty: Option<ElementType>) -> Self {
        ty.map_or(TypeSpec::Infer, TypeSpec::Tag)
    }
}

impl<'a> From<&'a str> for TypeSpec<'a> {
    fn from(name: &'a str) -> Self {
        TypeSpec::Name(name)
    }
}

/// A fixed-layout array of homogeneously typed slots.
///
/// The element type is write-once and fixed at construction. The length is
/// read-only from outside and changes only through [`TypedArray::expand`],
/// which reallocates the whole store; arrays built with `fixed = true` never
/// grow.
///
/// # `pop` does not remove
///
/// [`TypedArray::pop`] and [`TypedArray::remove`] reset a slot to the type's
/// zero value. The length never shrinks and later elements never shift.
///
/// # Example
///
/// ```
/// use arrayc_core::{TypedArray, Value};
///
/// let mut array = TypedArray::new([1, 2, 3].map(Value::from), None, Some(5), false).unwrap();
/// assert_eq!(array.to_vec(), [1, 2, 3, 0, 0].map(Value::from));
///
/// array.remove(&Value::Int(3)).unwrap();
/// array.expand(2).unwrap();
/// assert_eq!(array.len(), 7);
/// assert_eq!(array.count(&Value::Int(0)), 5);
/// ```
#[derive(Clone)]
pub struct TypedArray {
    store: ContiguousStore,
    guard: TypeGuard,
    element_type: ProtectedField<ElementType>,
    length: LengthField,
    fixed: bool,
    options: ArrayOptions,
}

impl TypedArray {
    /// Builds an array from `values`.
    ///
    /// - `element_type`: `None` infers it from the values (an empty input
    ///   falls back to [`ElementType::Pointer`])
    /// - `length`: `None` uses the number of values; otherwise it must be at
    ///   least that many, and the remaining slots hold the zero value
    /// - `fixed`: forbids [`TypedArray::expand`] for the array's lifetime
    pub fn new(
        values: impl IntoIterator<Item = Value>,
        element_type: Option<ElementType>,
        length: Option<isize>,
        fixed: bool,
    ) -> Result<Self> {
        Self::construct(
            values.into_iter().collect(),
            element_type.into(),
            length,
            fixed,
            &TypeTable::new(),
            ArrayOptions::default(),
        )
    }

    /// Builds an array holding exactly `values`, with their common type.
    pub fn from_values(values: impl IntoIterator<Item = Value>) -> Result<Self> {
        Self::new(values, None, None, false)
    }

    pub(crate) fn construct(
        values: Vec<Value>,
        spec: TypeSpec<'_>,
        length: Option<isize>,
        fixed: bool,
        table: &TypeTable,
        options: ArrayOptions,
    ) -> Result<Self> {
        let homogeneity = TypeGuard::check_homogeneous(&values);
        if let Homogeneity::Mixed {
            index,
            expected,
            found,
        } = homogeneity
        {
            return Err(ArrayError::HeterogeneousInput {
                index,
                expected,
                found,
            });
        }

        let mut element_type = ProtectedField::unset("element_type");
        match spec {
            TypeSpec::Infer => {
                element_type.set(homogeneity.inferred().unwrap_or_else(|| table.fallback()))?
            }
            TypeSpec::Tag(ty) => element_type.set(ty)?,
            TypeSpec::Name(name) => element_type.set_with(name, |name| table.lookup(name))?,
        }
        let ty = *element_type.get()?;

        let length = match length {
            None => values.len(),
            Some(requested) => usize::try_from(requested).map_err(|_| {
                ArrayError::InvalidLength {
                    requested,
                    reason: "length must be non-negative",
                }
            })?,
        };
        if length > options.max_length {
            return Err(ArrayError::InvalidLength {
                requested: isize::try_from(length).unwrap_or(isize::MAX),
                reason: "length exceeds the configured maximum",
            });
        }
        TypeGuard::validate_sequence_length(values.len(), length)?;

        let mut store = ContiguousStore::with_capacity(length, ty)?;
        store.fill_prefix(values)?;

        tracing::debug!(element_type = %ty, length, fixed, "Constructed array");

        Ok(Self {
            store,
            guard: TypeGuard::new(ty),
            element_type,
            length: LengthField::new(length),
            fixed,
            options,
        })
    }

    // ------------------------------------------------------------------
    // Structure
    // ------------------------------------------------------------------

    pub fn len(&self) -> usize {
        self.length.get()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn element_type(&self) -> ElementType {
        self.guard.declared()
    }

    /// Width of one slot in bytes.
    pub fn element_size(&self) -> usize {
        self.store.element_size()
    }

    pub fn is_fixed(&self) -> bool {
        self.fixed
    }

    pub fn options(&self) -> &ArrayOptions {
        &self.options
    }

    pub fn guard(&self) -> &TypeGuard {
        &self.guard
    }

    pub fn store(&self) -> &ContiguousStore {
        &self.store
    }

    pub fn length_field(&self) -> &LengthField {
        &self.length
    }

    pub fn type_field(&self) -> &ProtectedField<ElementType> {
        &self.element_type
    }

    /// Attempts to redeclare the element type. The type is write-once and
    /// set at construction, so this always fails.
    pub fn set_element_type<V>(&mut self, ty: V) -> Result<()>
    where
        V: TryInto<ElementType> + fmt::Display,
    {
        self.element_type.try_set(ty)
    }

    pub fn delete_element_type(&mut self) -> Result<()> {
        self.element_type.delete()
    }

    // ------------------------------------------------------------------
    // Element access
    // ------------------------------------------------------------------

    fn slot(&self, index: isize) -> Result<usize> {
        usize::try_from(index)
            .ok()
            .filter(|&slot| slot < self.len())
            .ok_or(ArrayError::IndexOutOfRange {
                index,
                length: self.len(),
            })
    }

    pub fn get(&self, index: isize) -> Result<Value> {
        let slot = self.slot(index)?;
        self.store.get(slot)
    }

    /// Overwrites slot `index`, converting `value` to the element type.
    ///
    /// Only conversions a slot can absorb are applied (see
    /// [`Value::coerce`]); this does not run the stricter
    /// [`TypeGuard::validate_value`] check that [`TypedArray::update_items`] does.
    pub fn set(&mut self, index: isize, value: impl Into<Value>) -> Result<()> {
        let slot = self.slot(index)?;
        self.store.set(slot, value.into())
    }

    /// Resets slot `index` to the zero value.
    pub fn delete(&mut self, index: isize) -> Result<()> {
        let slot = self.slot(index)?;
        self.store.reset(slot)
    }

    pub fn iter(&self) -> ArrayIterator<'_> {
        ArrayIterator::new(self)
    }

    // ------------------------------------------------------------------
    // Bulk operations
    // ------------------------------------------------------------------

    /// All slots, in order.
    pub fn to_vec(&self) -> Vec<Value> {
        self.store.to_vec()
    }

    /// Writes `values[k]` into slot `k` for every `k` below the length.
    ///
    /// Input beyond the length is ignored (compare
    /// [`TypedArray::update_items`], which rejects it). Values are converted
    /// like [`TypedArray::set`] does; if one cannot be, nothing is written.
    pub fn set_items(&mut self, values: impl IntoIterator<Item = Value>) -> Result<()> {
        let values: Vec<Value> = values.into_iter().take(self.len()).collect();
        self.store.fill_prefix(values)
    }

    /// Like [`TypedArray::set_items`], but validated first: fails with
    /// `LengthMismatch` if `values` is longer than the array and with
    /// `TypeMismatch` if any value does not match the element type. On
    /// failure the array is unchanged.
    pub fn update_items(&mut self, values: impl IntoIterator<Item = Value>) -> Result<()> {
        let values: Vec<Value> = values.into_iter().collect();
        TypeGuard::validate_sequence_length(values.len(), self.len())?;
        self.guard.validate_all(&values)?;
        self.store.fill_prefix(values)
    }

    /// Resets every slot to the zero value.
    pub fn clear(&mut self) {
        self.store.reset_all();
    }

    /// An independent copy with its own store.
    pub fn duplicate(&self) -> TypedArray {
        tracing::debug!(length = self.len(), "Duplicating array");
        self.clone()
    }

    // ------------------------------------------------------------------
    // Queries
    // ------------------------------------------------------------------

    /// Number of slots equal to `value` under the element type's equality.
    ///
    /// `value` is converted to the element type first; values that cannot be
    /// converted match nothing.
    pub fn count(&self, value: &Value) -> usize {
        self.store.count(value)
    }

    /// Index of the first slot equal to `value`.
    pub fn find(&self, value: &Value) -> Result<usize> {
        self.find_in(value, ..)
    }

    /// Index of the first slot equal to `value` within `range`.
    ///
    /// The range is clamped to the array's length.
    pub fn find_in(&self, value: &Value, range: impl RangeBounds<usize>) -> Result<usize> {
        let len = self.len();
        let start = match range.start_bound() {
            Bound::Included(&start) => start,
            Bound::Excluded(&start) => start.saturating_add(1),
            Bound::Unbounded => 0,
        }
        .min(len);
        let stop = match range.end_bound() {
            Bound::Included(&stop) => stop.saturating_add(1),
            Bound::Excluded(&stop) => stop,
            Bound::Unbounded => len,
        }
        .min(len);

        let found = if start < stop {
            self.store.position(value, start..stop)
        } else {
            None
        };
        found.ok_or_else(|| ArrayError::ValueNotFound {
            value: value.clone(),
            start,
            stop,
        })
    }

    // ------------------------------------------------------------------
    // Mutation
    // ------------------------------------------------------------------

    /// Returns slot `index` and resets it to the zero value.
    ///
    /// The length is unchanged and no element moves.
    pub fn pop(&mut self, index: isize) -> Result<Value> {
        let slot = self.slot(index)?;
        let value = self.store.get(slot)?;
        self.store.reset(slot)?;
        Ok(value)
    }

    /// Resets the first slot equal to `value` to the zero value.
    pub fn remove(&mut self, value: &Value) -> Result<()> {
        let slot = self.find(value)?;
        self.store.reset(slot)
    }

    pub fn reverse(&mut self) {
        let order: Vec<usize> = (0..self.len()).rev().collect();
        self.store.reorder(&order);
    }

    /// Sorts the slots in ascending order (descending when `reverse`).
    ///
    /// Stable in both directions: equal elements keep their relative order.
    pub fn sort(&mut self, reverse: bool) {
        let values = self.to_vec();
        self.reorder_by(reverse, |a, b| values[a].total_cmp(&values[b]));
    }

    /// Sorts by `key`, computed once per element. Stable.
    pub fn sort_by_key<K, F>(&mut self, mut key: F, reverse: bool)
    where
        K: Ord,
        F: FnMut(&Value) -> K,
    {
        let keys: Vec<K> = self.store.to_vec().iter().map(&mut key).collect();
        self.reorder_by(reverse, |a, b| keys[a].cmp(&keys[b]));
    }

    fn reorder_by(&mut self, reverse: bool, mut compare: impl FnMut(usize, usize) -> Ordering) {
        let mut order: Vec<usize> = (0..self.len()).collect();
        order.sort_by(|&a, &b| {
            let ordering = compare(a, b);
            if reverse {
                ordering.reverse()
            } else {
                ordering
            }
        });
        self.store.reorder(&order);
    }

    // ------------------------------------------------------------------
    // Growth
    // ------------------------------------------------------------------

    fn extra_length(extra: isize) -> Result<usize> {
        usize::try_from(extra).map_err(|_| ArrayError::InvalidLength {
            requested: extra,
            reason: "extra length must be non-negative",
        })
    }

    /// Grows the array by `extra` zero-valued slots.
    ///
    /// Allocates a new store, copies every slot into its prefix and swaps it
    /// in. Fails with `Immutable` on a fixed array, whatever `extra` is.
    pub fn expand(&mut self, extra: isize) -> Result<()> {
        if self.fixed {
            return Err(ArrayError::Immutable {
                target: "fixed array",
            });
        }
        let extra = Self::extra_length(extra)?;
        self.expand_by(extra)
    }

    /// [`TypedArray::expand`] by [`ArrayOptions::expand_step`].
    pub fn grow(&mut self) -> Result<()> {
        if self.fixed {
            return Err(ArrayError::Immutable {
                target: "fixed array",
            });
        }
        self.expand_by(self.options.expand_step)
    }

    fn expand_by(&mut self, extra: usize) -> Result<()> {
        let old = self.len();
        let total = self.length.extended_by(extra, self.options.max_length)?;
        let store = self.store.grown(extra)?;
        self.store = store;
        self.length.commit(total);
        tracing::debug!(old, new = total, "Expanded array");
        Ok(())
    }

    /// A new array `extra` slots longer than this one, with the same type,
    /// contents and fixed flag. `self` is not modified, so this is allowed
    /// on fixed arrays too.
    pub fn expanded(&self, extra: isize) -> Result<TypedArray> {
        let extra = Self::extra_length(extra)?;
        self.expanded_by(extra)
    }

    /// [`TypedArray::expanded`] by [`ArrayOptions::expand_step`].
    pub fn expanded_default(&self) -> Result<TypedArray> {
        self.expanded_by(self.options.expand_step)
    }

    fn expanded_by(&self, extra: usize) -> Result<TypedArray> {
        let total = self.length.extended_by(extra, self.options.max_length)?;
        Ok(TypedArray {
            store: self.store.grown(extra)?,
            guard: self.guard,
            element_type: self.element_type.clone(),
            length: LengthField::new(total),
            fixed: self.fixed,
            options: self.options,
        })
    }

    /// Like [`TypedArray::expanded`], but returns the bare store.
    pub fn expanded_store(&self, extra: isize) -> Result<ContiguousStore> {
        let extra = Self::extra_length(extra)?;
        self.length.extended_by(extra, self.options.max_length)?;
        self.store.grown(extra)
    }
}

impl PartialEq for TypedArray {
    fn eq(&self, other: &Self) -> bool {
        self.store == other.store
    }
}

impl<'a> IntoIterator for &'a TypedArray {
    type Item = Value;
    type IntoIter = ArrayIterator<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
#[path = "array_test.rs"]
mod array_test;
