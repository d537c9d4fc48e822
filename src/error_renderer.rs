//! Error rendering using ariadne
//!
//! Script and construction errors are rendered with a snippet of the source
//! they came from and a label on the failing operation or value.

use crate::ScriptError;
use ariadne::{ColorGenerator, Label, Report, ReportKind, Source};
use std::io::Write;

/// Character set for rendering error messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CharSet {
    /// Use Unicode characters for rich visual output.
    #[default]
    Unicode,
    /// Use ASCII-only characters for compatibility.
    Ascii,
}

/// Configuration for error rendering.
#[derive(Debug, Clone)]
pub struct RenderConfig<'a> {
    /// Whether to use ANSI color codes in output.
    pub color: bool,
    /// The filename to display in error messages.
    /// Defaults to "<script>" if not provided.
    pub filename: Option<&'a str>,
    /// The character set to use for rendering.
    pub charset: CharSet,
}

impl Default for RenderConfig<'_> {
    fn default() -> Self {
        RenderConfig::default()
    }
}

impl RenderConfig<'_> {
    const fn default() -> Self {
        Self {
            color: true,
            filename: None,
            charset: CharSet::Unicode,
        }
    }
}

/// Render an error to stderr using the default config.
///
/// # Example
/// ```no_run
/// use arrayc::{TypedArray, render_error, script};
///
/// let source = "get 10";
/// let mut array = TypedArray::from_values([]).unwrap();
/// if let Err(e) = script::parse(source).and_then(|s| s.run(&mut array)) {
///     render_error(&e, source);
/// }
/// ```
pub fn render_error(error: &ScriptError, source: &str) {
    render_error_to(error, source, &mut std::io::stderr(), &RenderConfig::default()).ok();
}

/// Render an error to a writer with the given configuration.
///
/// # Example
/// ```
/// use arrayc::{RenderConfig, TypedArray, render_error_to, script};
///
/// let source = "len; get 10";
/// let mut array = TypedArray::from_values([]).unwrap();
/// let error = script::parse(source)
///     .and_then(|s| s.run(&mut array))
///     .unwrap_err();
///
/// let mut buf = Vec::new();
/// let config = RenderConfig { color: false, ..Default::default() };
/// render_error_to(&error, source, &mut buf, &config).unwrap();
/// let output = String::from_utf8_lossy(&buf);
/// assert!(output.contains("[E006] Error: index 10 out of range for length 0"));
/// ```
pub fn render_error_to(
    error: &ScriptError,
    source: &str,
    writer: &mut dyn Write,
    config: &RenderConfig,
) -> std::io::Result<()> {
    let filename = config.filename.unwrap_or("<script>");
    let message = error.to_string();
    let span = error.span().0.clone();

    let mut colors = ColorGenerator::new();
    colors.next(); // Skip the first color.

    let ariadne_charset = match config.charset {
        CharSet::Unicode => ariadne::CharSet::Unicode,
        CharSet::Ascii => ariadne::CharSet::Ascii,
    };
    let ariadne_config = ariadne::Config::default()
        .with_color(config.color)
        .with_char_set(ariadne_charset);

    let mut report = Report::build(ReportKind::Error, (filename, span.clone()))
        .with_code(error.code())
        .with_message(&message)
        .with_config(ariadne_config);

    let label = match error {
        ScriptError::Syntax { .. } => message.clone(),
        ScriptError::Array { .. } => "this operation failed".to_string(),
    };
    report = report.with_label(
        Label::new((filename, span))
            .with_message(label)
            .with_color(colors.next()),
    );

    if let Some(help) = error.help() {
        report = report.with_help(help);
    }

    report
        .finish()
        .write((filename, Source::from(source)), &mut *writer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{TypedArray, Value, script};

    const UNICODE_CONFIG: RenderConfig = RenderConfig {
        color: false,
        filename: Some("test.ops"),
        charset: CharSet::Unicode,
    };

    const ASCII_CONFIG: RenderConfig = RenderConfig {
        color: false,
        filename: Some("test.ops"),
        charset: CharSet::Ascii,
    };

    fn render_error_string(source: &str, config: &RenderConfig) -> String {
        let mut array =
            TypedArray::from_values([Value::Int(1), Value::Int(2)]).unwrap();
        let error = match script::parse(source).and_then(|s| s.run(&mut array)) {
            Err(e) => e,
            Ok(_) => panic!("Expected an error for script: {source}"),
        };
        let mut buf = Vec::new();
        render_error_to(&error, source, &mut buf, config).unwrap();
        String::from_utf8_lossy(&buf).into_owned()
    }

    #[test]
    fn test_syntax_error() {
        let output = render_error_to_lines("len; frob", &UNICODE_CONFIG);
        assert!(output[0].starts_with("[S001] Error: unknown operation `frob`"));
        assert!(output.iter().any(|line| line.contains("test.ops:1:6")));
        assert!(output.iter().any(|line| line.contains("len; frob")));
    }

    #[test]
    fn test_operation_error_with_help() {
        let output = render_error_string("get 0; get 2", &UNICODE_CONFIG);
        assert!(output.starts_with("[E006] Error: index 2 out of range for length 2"));
        assert!(output.contains("this operation failed"));
        assert!(output.contains("Help: indices run from 0 to length - 1"));
    }

    #[test]
    fn test_ascii_charset() {
        let output = render_error_string("get 2", &ASCII_CONFIG);
        assert!(output.is_ascii());
        assert!(output.contains("test.ops:1:1"));
    }

    #[test]
    fn test_default_filename() {
        let config = RenderConfig {
            color: false,
            ..Default::default()
        };
        let output = render_error_string("remove 9", &config);
        assert!(output.contains("[E007]"));
        assert!(output.contains("<script>"));
    }

    #[test]
    fn test_charset_default_is_unicode() {
        assert_eq!(CharSet::default(), CharSet::Unicode);
    }

    fn render_error_to_lines(source: &str, config: &RenderConfig) -> Vec<String> {
        render_error_string(source, config)
            .lines()
            .map(str::to_string)
            .collect()
    }
}
