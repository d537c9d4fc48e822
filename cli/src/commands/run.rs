//! The `run` command - run an operation script from a file.

use std::process::ExitCode;

use crate::cli::RunArgs;
use crate::common::{array::build_array, error::render, input::read_input};

use super::eval::interpret_input;

/// Run the run command.
pub fn run(args: RunArgs, no_color: bool) -> ExitCode {
    let (content, filename) = match read_input(&args.file) {
        Ok(input) => input,
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::FAILURE;
        }
    };

    let array = match build_array(&args.array) {
        Ok(array) => array,
        Err(e) => {
            render(&e, &args.array.values, Some("--values"), no_color);
            return ExitCode::FAILURE;
        }
    };
    interpret_input(array, &content, Some(&filename), no_color)
}
