use core::iter::FusedIterator;

use arrayc_values::Value;

use crate::TypedArray;

/// Whether an [`ArrayIterator`] can still produce values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IterState {
    Active,
    Exhausted,
}

/// A lazy, borrowing iterator over an array's slots.
///
/// The stop bound is captured when the iterator is created. The borrow keeps
/// the array from being mutated (or grown) while the iterator lives.
#[derive(Debug, Clone)]
pub struct ArrayIterator<'a> {
    array: &'a TypedArray,
    cursor: usize,
    stop: usize,
}

impl<'a> ArrayIterator<'a> {
    pub(crate) fn new(array: &'a TypedArray) -> Self {
        Self {
            array,
            cursor: 0,
            stop: array.len(),
        }
    }

    pub fn state(&self) -> IterState {
        if self.cursor < self.stop {
            IterState::Active
        } else {
            IterState::Exhausted
        }
    }

    /// Index of the next slot to be produced.
    pub fn position(&self) -> usize {
        self.cursor
    }
}

impl Iterator for ArrayIterator<'_> {
    type Item = Value;

    fn next(&mut self) -> Option<Value> {
        if self.state() == IterState::Exhausted {
            return None;
        }
        let value = self.array.store().value_at(self.cursor)?;
        self.cursor += 1;
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.stop - self.cursor;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for ArrayIterator<'_> {}

impl FusedIterator for ArrayIterator<'_> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vec;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_state_machine() {
        let array = TypedArray::from_values([Value::Int(1), Value::Int(2)]).unwrap();
        let mut iter = array.iter();
        assert_eq!(iter.state(), IterState::Active);
        assert_eq!(iter.len(), 2);
        assert_eq!(iter.next(), Some(Value::Int(1)));
        assert_eq!(iter.state(), IterState::Active);
        assert_eq!(iter.next(), Some(Value::Int(2)));
        assert_eq!(iter.state(), IterState::Exhausted);
        assert_eq!(iter.next(), None);
        assert_eq!(iter.next(), None);
        assert_eq!(iter.position(), 2);
    }

    #[test]
    fn test_fresh_iterator_per_call() {
        let array = TypedArray::from_values([Value::from("a"), Value::from("b")]).unwrap();
        let first: crate::Vec<Value> = array.iter().collect();
        let second: crate::Vec<Value> = (&array).into_iter().collect();
        assert_eq!(first, second);
        assert_eq!(first, vec![Value::from("a"), Value::from("b")]);
    }

    #[test]
    fn test_empty_array_starts_exhausted() {
        let array = TypedArray::from_values([]).unwrap();
        assert_eq!(array.iter().state(), IterState::Exhausted);
        assert_eq!(array.iter().count(), 0);
    }
}
