//! Operation scripts.
//!
//! A script is a `;`-separated list of operations applied, in order, to one
//! [`TypedArray`](crate::TypedArray):
//!
//! ```text
//! set 0 42; get 0; sort desc; find 42; expand 2; show
//! ```
//!
//! | Operation           | Output        |
//! |---------------------|---------------|
//! | `get I`             | the value     |
//! | `set I V`, `del I`  |               |
//! | `count V`           | a count       |
//! | `find V [START [STOP]]` | an index  |
//! | `pop I`             | the old value |
//! | `remove V`          |               |
//! | `reverse`, `sort [asc\|desc]`, `clear` |  |
//! | `expand [N]`        |               |
//! | `update V, ...`, `setitems V, ...` |  |
//! | `len`, `show`, `repr` | the length / contents / constructor form |
//!
//! Literals: integers, floats (`1.5`), `true`/`false`, `"text"`,
//! `b"bytes"`, and pointers (`null`, `0x1f`).
//!
//! # Example
//!
//! ```
//! use arrayc::TypedArray;
//! use arrayc::script::{self, Output};
//!
//! let values = script::parse_values("3, 1, 2").unwrap();
//! let mut array = TypedArray::from_values(values.into_iter().map(|v| v.node)).unwrap();
//! let outputs = script::parse("sort; show").unwrap().run(&mut array).unwrap();
//! assert_eq!(outputs, [Output::Text("[1, 2, 3]".to_string())]);
//! ```

mod error;
mod exec;
mod parser;

pub use error::ScriptError;
pub use exec::{Output, execute};
pub use parser::{parse, parse_values};

use core::fmt;
use core::ops::Range;

use arrayc_core::{TypedArray, Value};

/// A byte range in the script source.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Span(pub Range<usize>);

impl From<pest::Span<'_>> for Span {
    fn from(span: pest::Span<'_>) -> Self {
        Span(span.start()..span.end())
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.0.start, self.0.end)
    }
}

/// A node together with where it came from.
#[derive(Debug, Clone, PartialEq)]
pub struct Spanned<T> {
    pub node: T,
    pub span: Span,
}

/// One array operation.
#[derive(Debug, Clone, PartialEq)]
pub enum Op {
    Get(isize),
    Set(isize, Value),
    Del(isize),
    Count(Value),
    Find {
        value: Value,
        start: Option<usize>,
        stop: Option<usize>,
    },
    Pop(isize),
    Remove(Value),
    Reverse,
    Sort {
        descending: bool,
    },
    Clear,
    /// `None` grows by the array's configured step.
    Expand(Option<isize>),
    Update(Vec<Value>),
    SetItems(Vec<Value>),
    Len,
    Show,
    Repr,
}

impl Op {
    /// The keyword the operation is written with.
    pub fn name(&self) -> &'static str {
        match self {
            Op::Get(_) => "get",
            Op::Set(..) => "set",
            Op::Del(_) => "del",
            Op::Count(_) => "count",
            Op::Find { .. } => "find",
            Op::Pop(_) => "pop",
            Op::Remove(_) => "remove",
            Op::Reverse => "reverse",
            Op::Sort { .. } => "sort",
            Op::Clear => "clear",
            Op::Expand(_) => "expand",
            Op::Update(_) => "update",
            Op::SetItems(_) => "setitems",
            Op::Len => "len",
            Op::Show => "show",
            Op::Repr => "repr",
        }
    }
}

/// A parsed script.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Script {
    pub ops: Vec<Spanned<Op>>,
}

impl Script {
    pub fn len(&self) -> usize {
        self.ops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    /// Applies every operation in order, stopping at the first failure.
    ///
    /// Operations before the failing one stay applied.
    pub fn run(&self, array: &mut TypedArray) -> Result<Vec<Output>, ScriptError> {
        let mut outputs = Vec::new();
        self.run_with(array, |output| outputs.push(output))?;
        Ok(outputs)
    }

    /// Like [`Script::run`], handing each output to `emit` as it is produced.
    pub fn run_with(
        &self,
        array: &mut TypedArray,
        mut emit: impl FnMut(Output),
    ) -> Result<(), ScriptError> {
        for op in &self.ops {
            tracing::debug!(op = op.node.name(), span = %op.span, "Executing");
            match execute(array, &op.node) {
                Ok(Some(output)) => emit(output),
                Ok(None) => {}
                Err(error) => {
                    return Err(ScriptError::Array {
                        error,
                        span: op.span.clone(),
                    });
                }
            }
        }
        Ok(())
    }
}
