//! Validated construction of typed arrays.

use arrayc_types::TypeTable;
use arrayc_values::Value;

use crate::{ArrayOptions, Result, TypeSpec, TypedArray, Vec};

/// Builds arrays using an owned type table and shared options.
///
/// # Example
///
/// ```
/// use arrayc_core::{ElementType, Factory, Value};
///
/// let factory = Factory::default();
/// let array = factory
///     .builder()
///     .values([1, 2, 3].map(Value::from))
///     .element_type("c_double")
///     .length(4)
///     .build()
///     .unwrap();
/// assert_eq!(array.element_type(), ElementType::Float);
/// assert_eq!(array.get(3).unwrap(), Value::Float(0.0));
/// ```
#[derive(Debug, Clone)]
pub struct Factory {
    table: TypeTable,
    options: ArrayOptions,
}

impl Factory {
    pub fn new(table: TypeTable, options: ArrayOptions) -> Self {
        Self { table, options }
    }

    /// The standard type table with custom options.
    pub fn with_options(options: ArrayOptions) -> Self {
        Self::new(TypeTable::standard(), options)
    }

    pub fn table(&self) -> &TypeTable {
        &self.table
    }

    pub fn options(&self) -> &ArrayOptions {
        &self.options
    }

    pub fn builder(&self) -> ArrayBuilder<'_> {
        ArrayBuilder {
            factory: self,
            values: Vec::new(),
            element_type: TypeSpec::Infer,
            length: None,
            fixed: None,
        }
    }

    /// Builds an array in one call.
    ///
    /// `fixed` defaults to [`ArrayOptions::fixed`].
    pub fn construct<'a>(
        &self,
        values: impl IntoIterator<Item = Value>,
        element_type: impl Into<TypeSpec<'a>>,
        length: Option<isize>,
        fixed: Option<bool>,
    ) -> Result<TypedArray> {
        TypedArray::construct(
            values.into_iter().collect(),
            element_type.into(),
            length,
            fixed.unwrap_or(self.options.fixed),
            &self.table,
            self.options,
        )
    }
}

impl Default for Factory {
    fn default() -> Self {
        Self::new(TypeTable::standard(), ArrayOptions::default())
    }
}

/// Step-by-step construction parameters for [`Factory::construct`].
#[derive(Debug, Clone)]
pub struct ArrayBuilder<'a> {
    factory: &'a Factory,
    values: Vec<Value>,
    element_type: TypeSpec<'a>,
    length: Option<isize>,
    fixed: Option<bool>,
}

impl<'a> ArrayBuilder<'a> {
    pub fn values(mut self, values: impl IntoIterator<Item = Value>) -> Self {
        self.values.extend(values);
        self
    }

    pub fn value(mut self, value: impl Into<Value>) -> Self {
        self.values.push(value.into());
        self
    }

    /// A tag, or a name resolved through the factory's type table.
    pub fn element_type(mut self, element_type: impl Into<TypeSpec<'a>>) -> Self {
        self.element_type = element_type.into();
        self
    }

    pub fn length(mut self, length: isize) -> Self {
        self.length = Some(length);
        self
    }

    pub fn fixed(mut self, fixed: bool) -> Self {
        self.fixed = Some(fixed);
        self
    }

    pub fn build(self) -> Result<TypedArray> {
        self.factory
            .construct(self.values, self.element_type, self.length, self.fixed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ArrayError, ElementType, ErrorKind, Location, vec};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_names_resolve_through_table() {
        let factory = Factory::default();
        let array = factory.construct(vec![], "c_wchar_p", Some(2), None).unwrap();
        assert_eq!(array.element_type(), ElementType::Text);
        assert_eq!(array.len(), 2);
    }

    #[test]
    fn test_unknown_name_is_type_mismatch() {
        let factory = Factory::default();
        let err = factory.builder().element_type("u128").build().unwrap_err();
        assert_eq!(
            err,
            ArrayError::TypeMismatch {
                location: Location::Field("element_type"),
                expected: "ElementType".into(),
                found: "u128".into(),
            }
        );
    }

    #[test]
    fn test_custom_table() {
        let mut table = TypeTable::new();
        table.insert("number", ElementType::Float);
        let factory = Factory::new(table, ArrayOptions::default());
        let array = factory
            .builder()
            .value(1.5)
            .element_type("number")
            .build()
            .unwrap();
        assert_eq!(array.element_type(), ElementType::Float);
        assert_eq!(
            factory.builder().element_type("i64").build().unwrap_err().kind(),
            ErrorKind::TypeMismatch
        );
    }

    #[test]
    fn test_empty_untyped_input_falls_back_to_pointer() {
        let array = Factory::default().builder().build().unwrap();
        assert_eq!(array.element_type(), ElementType::Pointer);
        assert!(array.is_empty());
    }

    #[test]
    fn test_options_defaults_apply() {
        let factory = Factory::with_options(ArrayOptions {
            fixed: true,
            ..Default::default()
        });
        let mut array = factory.builder().value(1).build().unwrap();
        assert!(array.is_fixed());
        assert_eq!(array.expand(1).unwrap_err().kind(), ErrorKind::Immutable);

        let array = factory.builder().value(1).fixed(false).build().unwrap();
        assert!(!array.is_fixed());
    }

    #[test]
    fn test_max_length() {
        let factory = Factory::with_options(ArrayOptions {
            max_length: 4,
            ..Default::default()
        });
        let too_long = factory
            .builder()
            .length(5)
            .element_type(ElementType::Int)
            .build();
        assert_eq!(too_long.unwrap_err().kind(), ErrorKind::InvalidLength);

        let mut array = factory
            .builder()
            .length(4)
            .element_type(ElementType::Int)
            .build()
            .unwrap();
        assert_eq!(array.expand(1).unwrap_err().kind(), ErrorKind::InvalidLength);
        assert_eq!(array.len(), 4);
    }
}
