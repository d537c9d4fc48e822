//! Contiguous, homogeneously typed storage.
//!
//! A [`ContiguousStore`] owns exactly one block of `capacity` slots of its
//! element type's width. It never resizes: growth builds a new store with
//! the old contents as its prefix. Writes convert the incoming [`Value`] to
//! the slot type; whether a value *should* be written is the
//! [`TypeGuard`](crate::TypeGuard)'s concern, not this layer's.

use core::fmt;
use core::ops::Range;

use arrayc_slots::{RawSlots, SlotsError};
use arrayc_values::{ElementType, Value, dispatch_element, typed::Element};

use crate::{ArrayError, Box, Location, Result, Vec};

/// Type-erased view of one `RawSlots<T>` block.
trait SlotBlock: fmt::Debug {
    fn element_type(&self) -> ElementType;
    fn element_size(&self) -> usize;
    fn capacity(&self) -> usize;
    fn read(&self, index: usize) -> Option<Value>;
    /// Hands the value back when it cannot be stored in this block's type.
    fn write(&mut self, index: usize, value: Value) -> core::result::Result<(), Value>;
    fn reset(&mut self, index: usize);
    fn reset_all(&mut self);
    fn count(&self, probe: &Value) -> usize;
    fn position(&self, probe: &Value, range: Range<usize>) -> Option<usize>;
    /// Rearranges the slots so that slot `i` holds what slot `order[i]` held.
    fn reorder(&mut self, order: &[usize]);
    fn duplicate(&self) -> Box<dyn SlotBlock>;
    fn grown(&self, extra: usize) -> core::result::Result<Box<dyn SlotBlock>, SlotsError>;
}

impl<T> SlotBlock for RawSlots<T>
where
    T: Element + fmt::Debug + 'static,
{
    fn element_type(&self) -> ElementType {
        T::TAG
    }

    fn element_size(&self) -> usize {
        RawSlots::element_size(self)
    }

    fn capacity(&self) -> usize {
        self.len()
    }

    fn read(&self, index: usize) -> Option<Value> {
        self.get(index).map(Element::to_value)
    }

    fn write(&mut self, index: usize, value: Value) -> core::result::Result<(), Value> {
        let payload = T::from_value(value)?;
        if let Some(slot) = self.get_mut(index) {
            *slot = payload;
        }
        Ok(())
    }

    fn reset(&mut self, index: usize) {
        if let Some(slot) = self.get_mut(index) {
            *slot = T::default_value();
        }
    }

    fn reset_all(&mut self) {
        self.as_mut_slice().fill_with(T::default_value);
    }

    fn count(&self, probe: &Value) -> usize {
        match T::from_value(probe.clone()) {
            Ok(probe) => self.iter().filter(|slot| slot.equals(&probe)).count(),
            Err(_) => 0,
        }
    }

    fn position(&self, probe: &Value, range: Range<usize>) -> Option<usize> {
        let probe = T::from_value(probe.clone()).ok()?;
        let slots = self.as_slice().get(range.clone())?;
        slots
            .iter()
            .position(|slot| slot.equals(&probe))
            .map(|offset| range.start + offset)
    }

    fn reorder(&mut self, order: &[usize]) {
        let source = self.as_slice();
        let reordered: Vec<T> = order
            .iter()
            .filter_map(|&from| source.get(from).cloned())
            .collect();
        for (slot, payload) in self.as_mut_slice().iter_mut().zip(reordered) {
            *slot = payload;
        }
    }

    fn duplicate(&self) -> Box<dyn SlotBlock> {
        Box::new(self.clone())
    }

    fn grown(&self, extra: usize) -> core::result::Result<Box<dyn SlotBlock>, SlotsError> {
        let block = RawSlots::grown(self, extra, T::default_value)?;
        Ok(Box::new(block))
    }
}

/// The sole owner of an array's raw allocation.
pub struct ContiguousStore {
    block: Box<dyn SlotBlock>,
}

impl ContiguousStore {
    /// Allocates `capacity` default-initialized slots of `element_type`.
    pub fn create(capacity: isize, element_type: ElementType) -> Result<Self> {
        let len = usize::try_from(capacity)
            .map_err(|_| ArrayError::InvalidCapacity { requested: capacity })?;
        Self::with_capacity(len, element_type)
    }

    pub(crate) fn with_capacity(len: usize, element_type: ElementType) -> Result<Self> {
        let block: Box<dyn SlotBlock> = dispatch_element!(element_type, T => {
            Box::new(
                RawSlots::<T>::from_fn(len, |_| T::default_value()).map_err(|_| {
                    ArrayError::InvalidCapacity {
                        requested: isize::try_from(len).unwrap_or(isize::MAX),
                    }
                })?,
            )
        });
        tracing::trace!(
            capacity = len,
            element_size = block.element_size(),
            element_type = %element_type,
            "Allocated store"
        );
        Ok(Self { block })
    }

    pub fn element_type(&self) -> ElementType {
        self.block.element_type()
    }

    /// Width of one slot in bytes.
    pub fn element_size(&self) -> usize {
        self.block.element_size()
    }

    pub fn capacity(&self) -> usize {
        self.block.capacity()
    }

    /// Size of the backing block in bytes.
    pub fn byte_len(&self) -> usize {
        self.capacity() * self.element_size()
    }

    fn check_index(&self, index: usize) -> Result<()> {
        if index >= self.capacity() {
            return Err(ArrayError::IndexOutOfRange {
                index: isize::try_from(index).unwrap_or(isize::MAX),
                length: self.capacity(),
            });
        }
        Ok(())
    }

    pub fn get(&self, index: usize) -> Result<Value> {
        self.check_index(index)?;
        self.value_at(index).ok_or(ArrayError::IndexOutOfRange {
            index: isize::try_from(index).unwrap_or(isize::MAX),
            length: self.capacity(),
        })
    }

    /// Overwrites slot `index`, converting `value` to the slot type.
    pub fn set(&mut self, index: usize, value: Value) -> Result<()> {
        self.check_index(index)?;
        let element_type = self.element_type();
        self.block
            .write(index, value)
            .map_err(|rejected| ArrayError::value_mismatch(index, element_type, &rejected))
    }

    pub(crate) fn value_at(&self, index: usize) -> Option<Value> {
        self.block.read(index)
    }

    pub(crate) fn reset(&mut self, index: usize) -> Result<()> {
        self.check_index(index)?;
        self.block.reset(index);
        Ok(())
    }

    /// Resets every slot to the element type's zero value.
    pub(crate) fn reset_all(&mut self) {
        self.block.reset_all();
    }

    pub(crate) fn count(&self, probe: &Value) -> usize {
        self.block.count(probe)
    }

    pub(crate) fn position(&self, probe: &Value, range: Range<usize>) -> Option<usize> {
        self.block.position(probe, range)
    }

    /// Writes `values` into the prefix of the store.
    ///
    /// Every value is converted before the first slot is touched, so a
    /// rejected value leaves the store unchanged. Values past the capacity
    /// are ignored.
    pub(crate) fn fill_prefix(&mut self, values: Vec<Value>) -> Result<()> {
        let element_type = self.element_type();
        let converted = values
            .into_iter()
            .take(self.capacity())
            .enumerate()
            .map(|(index, value)| {
                value
                    .coerce(element_type)
                    .map_err(|rejected| ArrayError::value_mismatch(index, element_type, &rejected))
            })
            .collect::<Result<Vec<Value>>>()?;
        for (index, value) in converted.into_iter().enumerate() {
            self.block
                .write(index, value)
                .map_err(|rejected| ArrayError::value_mismatch(index, element_type, &rejected))?;
        }
        Ok(())
    }

    /// Applies a permutation of slot indices; see [`TypedArray::sort`](crate::TypedArray::sort).
    pub(crate) fn reorder(&mut self, order: &[usize]) {
        debug_assert_eq!(order.len(), self.capacity());
        self.block.reorder(order);
    }

    pub fn to_vec(&self) -> Vec<Value> {
        (0..self.capacity())
            .filter_map(|index| self.value_at(index))
            .collect()
    }

    /// A new store of `capacity + extra` slots holding a copy of this one's
    /// contents in its prefix and defaults in the suffix.
    pub fn grown(&self, extra: usize) -> Result<Self> {
        let block = self
            .block
            .grown(extra)
            .map_err(|error| ArrayError::InvalidLength {
                requested: isize::try_from(error.requested()).unwrap_or(isize::MAX),
                reason: match error {
                    SlotsError::CapacityOverflow { .. } => "length does not fit in memory",
                    SlotsError::OutOfMemory { .. } => "out of memory",
                },
            })?;
        Ok(Self { block })
    }
}

impl Clone for ContiguousStore {
    fn clone(&self) -> Self {
        Self {
            block: self.block.duplicate(),
        }
    }
}

impl fmt::Debug for ContiguousStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ContiguousStore")
            .field("element_type", &self.element_type())
            .field("capacity", &self.capacity())
            .field("slots", &self.block)
            .finish()
    }
}

impl PartialEq for ContiguousStore {
    fn eq(&self, other: &Self) -> bool {
        self.element_type() == other.element_type() && self.to_vec() == other.to_vec()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ErrorKind, String, vec};
    use arrayc_values::Pointer;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_create_defaults() {
        let store = ContiguousStore::create(3, ElementType::Int).unwrap();
        assert_eq!(store.capacity(), 3);
        assert_eq!(store.element_size(), 8);
        assert_eq!(store.byte_len(), 24);
        assert_eq!(store.to_vec(), vec![Value::Int(0); 3]);

        let store = ContiguousStore::create(2, ElementType::Text).unwrap();
        assert_eq!(store.to_vec(), vec![Value::Text(String::new()); 2]);

        let store = ContiguousStore::create(1, ElementType::Pointer).unwrap();
        assert_eq!(store.get(0), Ok(Value::Pointer(Pointer::NULL)));
    }

    #[test]
    fn test_negative_capacity() {
        assert_eq!(
            ContiguousStore::create(-1, ElementType::Int).unwrap_err(),
            ArrayError::InvalidCapacity { requested: -1 }
        );
    }

    #[test]
    fn test_unallocatable_capacity() {
        let requested = isize::MAX / 8;
        assert_eq!(
            ContiguousStore::create(requested, ElementType::Int).unwrap_err(),
            ArrayError::InvalidCapacity { requested }
        );

        let store = ContiguousStore::create(2, ElementType::Text).unwrap();
        let err = store.grown(isize::MAX as usize / 32).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidLength);
        assert_eq!(store.capacity(), 2);
    }

    #[test]
    fn test_bounds() {
        let mut store = ContiguousStore::create(2, ElementType::Float).unwrap();
        assert!(store.get(1).is_ok());
        assert_eq!(store.get(2).unwrap_err().kind(), ErrorKind::IndexOutOfRange);
        assert_eq!(
            store.set(2, Value::Float(1.0)).unwrap_err().kind(),
            ErrorKind::IndexOutOfRange
        );
    }

    #[test]
    fn test_set_converts_to_slot_type() {
        let mut store = ContiguousStore::create(2, ElementType::Float).unwrap();
        store.set(0, Value::Int(2)).unwrap();
        assert_eq!(store.get(0), Ok(Value::Float(2.0)));
        let err = store.set(1, Value::from("x")).unwrap_err();
        assert_eq!(
            err,
            ArrayError::TypeMismatch {
                location: Location::Index(1),
                expected: "float".into(),
                found: "text".into(),
            }
        );
        assert_eq!(store.get(1), Ok(Value::Float(0.0)));
    }

    #[test]
    fn test_fill_prefix_is_all_or_nothing() {
        let mut store = ContiguousStore::create(3, ElementType::Int).unwrap();
        let err = store
            .fill_prefix(vec![Value::Int(7), Value::from("bad")])
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::TypeMismatch);
        assert_eq!(store.to_vec(), vec![Value::Int(0); 3]);

        store
            .fill_prefix(vec![Value::Int(1), Value::Int(2), Value::Int(3), Value::Int(4)])
            .unwrap();
        assert_eq!(store.to_vec(), vec![Value::Int(1), Value::Int(2), Value::Int(3)]);
    }

    #[test]
    fn test_grown_is_a_new_store() {
        let mut store = ContiguousStore::create(2, ElementType::Bytes).unwrap();
        store.set(0, Value::from(b"ab".as_slice())).unwrap();
        let grown = store.grown(2).unwrap();
        assert_eq!(grown.capacity(), 4);
        assert_eq!(grown.get(0), Ok(Value::from(b"ab".as_slice())));
        assert_eq!(grown.get(3), Ok(Value::Bytes(Vec::new())));
        assert_eq!(store.capacity(), 2);
    }

    #[test]
    fn test_clone_is_independent() {
        let mut store = ContiguousStore::create(1, ElementType::Bool).unwrap();
        let copy = store.clone();
        store.set(0, Value::Bool(true)).unwrap();
        assert_eq!(copy.get(0), Ok(Value::Bool(false)));
        assert_ne!(copy, store);
    }

    #[test]
    fn test_count_and_position_use_slot_equality() {
        let mut store = ContiguousStore::create(4, ElementType::Int).unwrap();
        store.fill_prefix(vec![Value::Int(1), Value::Int(0), Value::Int(1)]).unwrap();
        assert_eq!(store.count(&Value::Int(1)), 2);
        assert_eq!(store.count(&Value::Bool(false)), 2);
        assert_eq!(store.count(&Value::from("1")), 0);
        assert_eq!(store.position(&Value::Int(1), 1..4), Some(2));
        assert_eq!(store.position(&Value::Int(1), 3..4), None);
        assert_eq!(store.position(&Value::Int(1), 3..9), None);
    }

    #[test]
    fn test_reset_all() {
        let mut store = ContiguousStore::create(3, ElementType::Text).unwrap();
        store
            .fill_prefix(vec![Value::from("a"), Value::from("b")])
            .unwrap();
        store.reset_all();
        assert_eq!(store.to_vec(), vec![Value::Text(String::new()); 3]);
    }

    #[test]
    fn test_reorder() {
        let mut store = ContiguousStore::create(3, ElementType::Text).unwrap();
        store
            .fill_prefix(vec![Value::from("a"), Value::from("b"), Value::from("c")])
            .unwrap();
        store.reorder(&[2, 0, 1]);
        assert_eq!(
            store.to_vec(),
            vec![Value::from("c"), Value::from("a"), Value::from("b")]
        );
    }
}
