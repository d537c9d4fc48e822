mod element;

pub use element::{Element, slot_size};
