//! Type checks applied before values reach storage.

use arrayc_values::{ElementType, Value};

use crate::{ArrayError, Result};

/// Outcome of scanning a candidate initializer for a common type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Homogeneity {
    /// No elements: trivially homogeneous, nothing to infer from.
    Empty,
    /// Every element carries this tag.
    Uniform(ElementType),
    /// Element `index` differs from element `index - 1`.
    Mixed {
        index: usize,
        expected: ElementType,
        found: ElementType,
    },
}

impl Homogeneity {
    pub fn is_homogeneous(&self) -> bool {
        !matches!(self, Homogeneity::Mixed { .. })
    }

    pub fn inferred(&self) -> Option<ElementType> {
        match self {
            Homogeneity::Uniform(ty) => Some(*ty),
            _ => None,
        }
    }
}

/// Validates values against an array's declared element type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypeGuard {
    declared: ElementType,
}

impl TypeGuard {
    pub const fn new(declared: ElementType) -> Self {
        Self { declared }
    }

    pub const fn declared(&self) -> ElementType {
        self.declared
    }

    /// Reduces `values` left to right, comparing each adjacent pair's tag.
    ///
    /// The first divergence decides the result, not the most common type.
    pub fn check_homogeneous(values: &[Value]) -> Homogeneity {
        let mut tags = values.iter().map(Value::type_tag).enumerate();
        let Some((_, first)) = tags.next() else {
            return Homogeneity::Empty;
        };
        let reduced = tags.try_fold(first, |expected, (index, found)| {
            if found == expected {
                Ok(found)
            } else {
                Err(Homogeneity::Mixed {
                    index,
                    expected,
                    found,
                })
            }
        });
        match reduced {
            Ok(ty) => Homogeneity::Uniform(ty),
            Err(mixed) => mixed,
        }
    }

    /// Whether `value` may be written as-is under the declared type.
    ///
    /// Strict: the tag must match, except that booleans are accepted where
    /// integers are declared.
    pub fn validate_value(&self, value: &Value) -> bool {
        let found = value.type_tag();
        found == self.declared || (self.declared == ElementType::Int && found == ElementType::Bool)
    }

    /// Checks every value, reporting the first one that fails.
    pub fn validate_all(&self, values: &[Value]) -> Result<()> {
        match values.iter().position(|v| !self.validate_value(v)) {
            Some(index) => Err(ArrayError::value_mismatch(
                index,
                self.declared,
                &values[index],
            )),
            None => Ok(()),
        }
    }

    /// Rejects sequences longer than `declared_length`; shorter ones only
    /// fill a prefix and are accepted.
    pub fn validate_sequence_length(given: usize, declared_length: usize) -> Result<()> {
        if given > declared_length {
            return Err(ArrayError::LengthMismatch {
                length: declared_length,
                given,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ErrorKind, vec};

    #[test]
    fn test_homogeneity_trivial_cases() {
        assert_eq!(TypeGuard::check_homogeneous(&[]), Homogeneity::Empty);
        assert!(Homogeneity::Empty.is_homogeneous());
        assert_eq!(Homogeneity::Empty.inferred(), None);

        let single = TypeGuard::check_homogeneous(&[Value::from("a")]);
        assert_eq!(single, Homogeneity::Uniform(ElementType::Text));
        assert_eq!(single.inferred(), Some(ElementType::Text));
    }

    #[test]
    fn test_first_divergence_wins() {
        let values = vec![
            Value::Int(1),
            Value::Int(2),
            Value::Float(3.0),
            Value::from("x"),
            Value::from("y"),
            Value::from("z"),
        ];
        assert_eq!(
            TypeGuard::check_homogeneous(&values),
            Homogeneity::Mixed {
                index: 2,
                expected: ElementType::Int,
                found: ElementType::Float,
            }
        );
    }

    #[test]
    fn test_bool_and_int_are_distinct_tags() {
        let values = vec![Value::Int(1), Value::Bool(true)];
        assert!(!TypeGuard::check_homogeneous(&values).is_homogeneous());
    }

    #[test]
    fn test_validate_value_is_strict() {
        let guard = TypeGuard::new(ElementType::Int);
        assert!(guard.validate_value(&Value::Int(1)));
        assert!(guard.validate_value(&Value::Bool(false)));
        assert!(!guard.validate_value(&Value::Float(1.0)));

        let guard = TypeGuard::new(ElementType::Float);
        assert!(!guard.validate_value(&Value::Int(1)));
    }

    #[test]
    fn test_validate_all_reports_first_offender() {
        let guard = TypeGuard::new(ElementType::Text);
        let values = vec![Value::from("a"), Value::Int(1), Value::Bool(true)];
        let err = guard.validate_all(&values).unwrap_err();
        assert_eq!(err, ArrayError::value_mismatch(1, ElementType::Text, &Value::Int(1)));
    }

    #[test]
    fn test_sequence_length() {
        assert!(TypeGuard::validate_sequence_length(3, 5).is_ok());
        assert!(TypeGuard::validate_sequence_length(5, 5).is_ok());
        assert_eq!(
            TypeGuard::validate_sequence_length(6, 5).unwrap_err().kind(),
            ErrorKind::LengthMismatch
        );
    }
}
