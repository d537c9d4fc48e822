use arrayc_core::ArrayError;

use super::{Span, Spanned};

/// A script that could not be parsed, or an operation that failed.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ScriptError {
    #[error("{message}")]
    Syntax { message: String, span: Span },

    #[error("{error}")]
    Array { error: ArrayError, span: Span },
}

impl ScriptError {
    pub(crate) fn syntax(message: impl Into<String>, span: Span) -> Self {
        ScriptError::Syntax {
            message: message.into(),
            span,
        }
    }

    /// Attributes a construction failure to the initial value it concerns,
    /// or to the whole value list when no single value is at fault.
    pub fn construction(
        error: ArrayError,
        values: &[Spanned<arrayc_core::Value>],
        whole: Span,
    ) -> Self {
        let index = match &error {
            ArrayError::HeterogeneousInput { index, .. } => Some(*index),
            ArrayError::TypeMismatch {
                location: arrayc_core::Location::Index(index),
                ..
            } => Some(*index),
            _ => None,
        };
        let span = index
            .and_then(|index| values.get(index))
            .map_or(whole, |value| value.span.clone());
        ScriptError::Array { error, span }
    }

    pub fn span(&self) -> &Span {
        match self {
            ScriptError::Syntax { span, .. } | ScriptError::Array { span, .. } => span,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            ScriptError::Syntax { .. } => "S001",
            ScriptError::Array { error, .. } => error.code(),
        }
    }

    pub fn help(&self) -> Option<&'static str> {
        match self {
            ScriptError::Syntax { .. } => None,
            ScriptError::Array { error, .. } => error.help(),
        }
    }
}
