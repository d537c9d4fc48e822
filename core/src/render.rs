//! Human-readable forms of an array.
//!
//! `Display` shows the contents as a list; `Debug` shows the constructor
//! call that would rebuild the array.

use core::fmt;

use crate::{String, TypedArray, format};

struct Contents<'a>(&'a TypedArray);

impl fmt::Display for Contents<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, value) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{value}")?;
        }
        f.write_str("]")
    }
}

impl fmt::Display for TypedArray {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&Contents(self), f)
    }
}

impl fmt::Debug for TypedArray {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "arrayc(iterable={}, arrtype={}, length={}",
            Contents(self),
            self.element_type().native_name(),
            self.len()
        )?;
        if self.is_fixed() {
            f.write_str(", fixed=true")?;
        }
        f.write_str(")")
    }
}

impl TypedArray {
    /// The constructor form, e.g. `arrayc(iterable=[1, 2], arrtype=c_longlong, length=2)`.
    pub fn repr(&self) -> String {
        format!("{self:?}")
    }
}
