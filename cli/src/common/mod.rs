//! Common utilities shared across CLI commands.

pub mod array;
pub mod error;
pub mod input;
