//! Error handling utilities for the CLI.

use arrayc::{RenderConfig, ScriptError, render_error_to};

/// Render an error against its source to stderr.
pub fn render(error: &ScriptError, source: &str, filename: Option<&str>, no_color: bool) {
    let config = RenderConfig {
        color: !no_color,
        filename,
        ..Default::default()
    };
    render_error_to(error, source, &mut std::io::stderr(), &config).ok();
}
