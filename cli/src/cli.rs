//! Command-line interface definitions.
//!
//! This module contains only clap struct definitions - no business logic.
//! All command implementations are in the `commands` module.

use clap::{Args, Parser, Subcommand};

/// arrayc - typed, fixed-layout arrays with list-like operations
#[derive(Parser, Debug)]
#[command(name = "arrayc", version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Build an array and run an operation script on it
    Eval(EvalArgs),

    /// Build an array and run the operation script in a file
    Run(RunArgs),

    /// List the element types and the names that map to them
    Types,
}

/// How to build the initial array.
#[derive(Args, Debug, Clone, Default)]
pub struct ArrayArgs {
    /// Element type name, e.g. `int`, `c_double` or `bytes` (inferred if omitted)
    #[arg(long = "type", value_name = "NAME")]
    pub element_type: Option<String>,

    /// Number of slots (defaults to the number of values)
    #[arg(long, allow_hyphen_values = true)]
    pub length: Option<isize>,

    /// Forbid growing the array
    #[arg(long)]
    pub fixed: bool,

    /// Comma-separated initial values, e.g. `1, 2, 3` or `"a", "b"`
    #[arg(long, default_value = "", allow_hyphen_values = true)]
    pub values: String,
}

/// Arguments for the `eval` command.
#[derive(Args, Debug)]
pub struct EvalArgs {
    #[command(flatten)]
    pub array: ArrayArgs,

    /// Operations to run, separated by `;`
    #[arg(default_value = "")]
    pub script: String,
}

/// Arguments for the `run` command.
#[derive(Args, Debug)]
pub struct RunArgs {
    #[command(flatten)]
    pub array: ArrayArgs,

    /// Script file to run (use "-" for stdin)
    pub file: String,
}
