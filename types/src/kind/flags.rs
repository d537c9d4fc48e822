use bitflags::bitflags;

bitflags! {
    /// Static properties of an element type, computed from the tag alone.
    #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
    pub struct TypeFlags: u8 {
        /// Integer-like or floating-point payload.
        const NUMERIC = 1;
        /// Slot owns a heap allocation (text, bytes).
        const HEAP = 1 << 1;
        /// Values of this type have a total order.
        const ORDERED = 1 << 2;
        /// Payload is an opaque machine address.
        const ADDRESS = 1 << 3;
    }
}
