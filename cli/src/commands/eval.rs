//! The `eval` command - run an operation script given on the command line.

use std::process::ExitCode;

use arrayc::{TypedArray, script};

use crate::cli::EvalArgs;
use crate::common::{array::build_array, error::render};

/// Run the eval command.
pub fn run(args: EvalArgs, no_color: bool) -> ExitCode {
    let array = match build_array(&args.array) {
        Ok(array) => array,
        Err(e) => {
            render(&e, &args.array.values, Some("--values"), no_color);
            return ExitCode::FAILURE;
        }
    };
    interpret_input(array, &args.script, None, no_color)
}

/// Run `input` against `array`, printing each operation's output as it is
/// produced and then the final contents.
pub fn interpret_input(
    mut array: TypedArray,
    input: &str,
    filename: Option<&str>,
    no_color: bool,
) -> ExitCode {
    let script = match script::parse(input) {
        Ok(script) => script,
        Err(e) => {
            render(&e, input, filename, no_color);
            return ExitCode::FAILURE;
        }
    };
    tracing::debug!(ops = script.len(), length = array.len(), "Parsed script");

    match script.run_with(&mut array, |output| println!("{output}")) {
        Ok(()) => {
            println!("{array}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            render(&e, input, filename, no_color);
            ExitCode::FAILURE
        }
    }
}
