use core::fmt;

/// An opaque machine address stored in a `Pointer` slot.
///
/// Never dereferenced; arrays only store, compare and print it.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Pointer(pub usize);

static_assertions::assert_eq_size!(Pointer, usize);

impl Pointer {
    pub const NULL: Pointer = Pointer(0);

    pub const fn addr(self) -> usize {
        self.0
    }

    pub const fn is_null(self) -> bool {
        self.0 == 0
    }
}

impl fmt::Display for Pointer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_null() {
            f.write_str("null")
        } else {
            write!(f, "{:#x}", self.0)
        }
    }
}
