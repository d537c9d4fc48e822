//! Building the initial array from command-line arguments.

use arrayc::script::{self, Span};
use arrayc::{Factory, ScriptError, TypeSpec, TypedArray};

use crate::cli::ArrayArgs;

/// Build the array described by `args` with the standard type table.
///
/// Errors point into `args.values`.
pub fn build_array(args: &ArrayArgs) -> Result<TypedArray, ScriptError> {
    let values = script::parse_values(&args.values)?;
    let element_type = match &args.element_type {
        Some(name) => TypeSpec::Name(name),
        None => TypeSpec::Infer,
    };

    Factory::default()
        .construct(
            values.iter().map(|value| value.node.clone()),
            element_type,
            args.length,
            Some(args.fixed),
        )
        .map_err(|error| ScriptError::construction(error, &values, Span(0..args.values.len())))
}
