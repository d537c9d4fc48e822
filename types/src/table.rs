//! Mapping from host primitive names to element types.
//!
//! A [`TypeTable`] is owned by whoever constructs arrays from type names
//! (the factory in `arrayc-core`). Nothing global: two factories may carry
//! different tables.

use alloc::{string::String, vec::Vec};

use hashbrown::HashMap;

use crate::ElementType;

/// Name under which the fallback type is registered in the standard table.
pub const NONE_TYPE_NAME: &str = "none";

#[derive(Debug, Clone, Default)]
pub struct TypeTable {
    entries: HashMap<String, ElementType>,
}

impl TypeTable {
    /// An empty table. Lookups only succeed after [`TypeTable::insert`].
    pub fn new() -> Self {
        Self::default()
    }

    /// The standard table: Rust primitive names, short aliases, and the C
    /// scalar names each element type renders as.
    pub fn standard() -> Self {
        let mut table = Self::new();
        let names: [(&str, ElementType); 17] = [
            ("i64", ElementType::Int),
            ("int", ElementType::Int),
            ("c_longlong", ElementType::Int),
            ("f64", ElementType::Float),
            ("float", ElementType::Float),
            ("c_double", ElementType::Float),
            ("c_longdouble", ElementType::Float),
            ("String", ElementType::Text),
            ("str", ElementType::Text),
            ("c_wchar_p", ElementType::Text),
            ("Vec<u8>", ElementType::Bytes),
            ("bytes", ElementType::Bytes),
            ("c_char_p", ElementType::Bytes),
            ("bool", ElementType::Bool),
            ("c_bool", ElementType::Bool),
            ("usize", ElementType::Pointer),
            ("c_void_p", ElementType::Pointer),
        ];
        for (name, ty) in names {
            table.insert(name, ty);
        }
        table.insert(NONE_TYPE_NAME, ElementType::Pointer);
        table.insert("text", ElementType::Text);
        table.insert("pointer", ElementType::Pointer);
        table
    }

    /// Registers `name`, returning the type it previously mapped to.
    pub fn insert(&mut self, name: impl Into<String>, ty: ElementType) -> Option<ElementType> {
        self.entries.insert(name.into(), ty)
    }

    pub fn lookup(&self, name: &str) -> Option<ElementType> {
        self.entries.get(name).copied()
    }

    /// Type used when neither a declaration nor the initializer names one.
    pub fn fallback(&self) -> ElementType {
        self.lookup(NONE_TYPE_NAME).unwrap_or(ElementType::Pointer)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All names mapping to `ty`, sorted.
    pub fn names_for(&self, ty: ElementType) -> Vec<&str> {
        let mut names: Vec<&str> = self
            .entries
            .iter()
            .filter(|(_, t)| **t == ty)
            .map(|(name, _)| name.as_str())
            .collect();
        names.sort_unstable();
        names
    }

    /// Entries sorted by type, then name.
    pub fn entries(&self) -> Vec<(&str, ElementType)> {
        let mut entries: Vec<(&str, ElementType)> = self
            .entries
            .iter()
            .map(|(name, ty)| (name.as_str(), *ty))
            .collect();
        entries.sort_unstable_by(|a, b| a.1.cmp(&b.1).then(a.0.cmp(b.0)));
        entries
    }
}
