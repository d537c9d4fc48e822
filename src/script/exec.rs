use core::fmt;

use arrayc_core::{Result, TypedArray, Value};

use super::Op;

/// What an operation printed.
#[derive(Debug, Clone, PartialEq)]
pub enum Output {
    Value(Value),
    Index(usize),
    Count(usize),
    Text(String),
}

impl fmt::Display for Output {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Output::Value(value) => write!(f, "{value}"),
            Output::Index(n) | Output::Count(n) => write!(f, "{n}"),
            Output::Text(text) => f.write_str(text),
        }
    }
}

/// Applies a single operation to `array`.
pub fn execute(array: &mut TypedArray, op: &Op) -> Result<Option<Output>> {
    let output = match op {
        Op::Get(index) => Some(Output::Value(array.get(*index)?)),
        Op::Set(index, value) => {
            array.set(*index, value.clone())?;
            None
        }
        Op::Del(index) => {
            array.delete(*index)?;
            None
        }
        Op::Count(value) => Some(Output::Count(array.count(value))),
        Op::Find { value, start, stop } => {
            let start = start.unwrap_or(0);
            let index = match stop {
                Some(stop) => array.find_in(value, start..*stop)?,
                None => array.find_in(value, start..)?,
            };
            Some(Output::Index(index))
        }
        Op::Pop(index) => Some(Output::Value(array.pop(*index)?)),
        Op::Remove(value) => {
            array.remove(value)?;
            None
        }
        Op::Reverse => {
            array.reverse();
            None
        }
        Op::Sort { descending } => {
            array.sort(*descending);
            None
        }
        Op::Clear => {
            array.clear();
            None
        }
        Op::Expand(Some(extra)) => {
            array.expand(*extra)?;
            None
        }
        Op::Expand(None) => {
            array.grow()?;
            None
        }
        Op::Update(values) => {
            array.update_items(values.iter().cloned())?;
            None
        }
        Op::SetItems(values) => {
            array.set_items(values.iter().cloned())?;
            None
        }
        Op::Len => Some(Output::Count(array.len())),
        Op::Show => Some(Output::Text(array.to_string())),
        Op::Repr => Some(Output::Text(array.repr())),
    };
    Ok(output)
}
