//! Error records.
//!
//! A [`FormatError`] is a message plus the context objects a caller needs to
//! point at the problem: source spans, offending text, and nested causes.
//! The free functions at the bottom build one record per failure class so
//! message wording stays uniform across the scanner, parser, and tree.

use std::fmt;

use opal_ir::{Arity, Span};

use crate::ErrorCode;

/// A context object attached to an error record.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorArg {
    /// Location in the parsed text (for highlighting).
    Span(Span),
    /// Offending text fragment or element name.
    Text(String),
    /// An underlying error this one was derived from.
    Error(Box<FormatError>),
}

impl fmt::Display for ErrorArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorArg::Span(span) => write!(f, "at {span}"),
            ErrorArg::Text(text) => write!(f, "`{text}`"),
            ErrorArg::Error(cause) => write!(f, "caused by: {cause}"),
        }
    }
}

/// A single structured error record.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[must_use = "errors should be recorded in an error set, not silently dropped"]
pub struct FormatError {
    code: ErrorCode,
    message: String,
    args: Vec<ErrorArg>,
}

impl FormatError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        FormatError {
            code,
            message: message.into(),
            args: Vec::new(),
        }
    }

    /// Attach a source location.
    pub fn with_span(mut self, span: Span) -> Self {
        self.args.push(ErrorArg::Span(span));
        self
    }

    /// Attach an offending text fragment.
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.args.push(ErrorArg::Text(text.into()));
        self
    }

    /// Attach an underlying error.
    pub fn with_cause(mut self, cause: FormatError) -> Self {
        self.args.push(ErrorArg::Error(Box::new(cause)));
        self
    }

    pub fn code(&self) -> ErrorCode {
        self.code
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn args(&self) -> &[ErrorArg] {
        &self.args
    }

    /// All spans attached directly to this record, in attachment order.
    pub fn spans(&self) -> impl Iterator<Item = Span> + '_ {
        self.args.iter().filter_map(|arg| match arg {
            ErrorArg::Span(span) => Some(*span),
            _ => None,
        })
    }

    /// The first attached span, used for highlighting.
    pub fn primary_span(&self) -> Option<Span> {
        self.spans().next()
    }
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)?;
        for arg in &self.args {
            if let ErrorArg::Span(span) = arg {
                write!(f, " (at {span})")?;
            }
        }
        for arg in &self.args {
            if let ErrorArg::Error(cause) = arg {
                write!(f, "; caused by: {cause}")?;
            }
        }
        Ok(())
    }
}

/// Create an "unrecognized character" error.
pub fn unrecognized_char(c: char, span: Span) -> FormatError {
    FormatError::new(ErrorCode::E0002, format!("unrecognized character '{c}'"))
        .with_span(span)
        .with_text(c.to_string())
}

/// Create an "unterminated quoted literal" error; `span` runs from the
/// opening quote to the end of input.
pub fn unterminated_string(span: Span) -> FormatError {
    FormatError::new(ErrorCode::E0001, "unterminated quoted literal")
        .with_span(span)
}

/// Create an "invalid literal" error from a conversion failure.
pub fn invalid_literal(reason: &dyn fmt::Display, lexeme: &str, span: Span) -> FormatError {
    FormatError::new(ErrorCode::E0003, reason.to_string())
        .with_span(span)
        .with_text(lexeme)
}

/// Create an "unexpected token" error; `found` is the token text, empty at
/// end of input.
pub fn unexpected_token(found: &str, span: Span) -> FormatError {
    let message = if found.is_empty() {
        "unexpected end of input".to_owned()
    } else {
        format!("unexpected token '{found}'")
    };
    FormatError::new(ErrorCode::E1001, message)
        .with_span(span)
        .with_text(found)
}

/// Create an "expected X" error.
pub fn expected_token(expected: &str, found: &str, span: Span) -> FormatError {
    let found = if found.is_empty() {
        "end of input".to_owned()
    } else {
        format!("'{found}'")
    };
    FormatError::new(ErrorCode::E1002, format!("expected '{expected}' but found {found}"))
        .with_span(span)
        .with_text(expected)
}

/// Create a "non-associative operator" error for a chained `symbol`.
pub fn non_associative(symbol: &str, span: Span) -> FormatError {
    FormatError::new(
        ErrorCode::E1003,
        format!("operator '{symbol}' cannot be chained without brackets"),
    )
    .with_span(span)
    .with_text(symbol)
}

/// Create a "call arity mismatch" error.
pub fn call_arity_mismatch(symbol: &str, expected: usize, found: usize, span: Span) -> FormatError {
    FormatError::new(
        ErrorCode::E1004,
        format!("'{symbol}' expects {expected} argument(s) but was given {found}"),
    )
    .with_span(span)
    .with_text(symbol)
}

/// Create an "unparsed suffix" error for input left after a complete
/// expression.
pub fn unparsed_suffix(suffix: &str, span: Span) -> FormatError {
    FormatError::new(ErrorCode::E1005, format!("unparsed suffix '{suffix}'"))
        .with_span(span)
        .with_text(suffix)
}

/// Create a "nested too deeply" error.
pub fn nested_too_deeply(max_depth: usize, span: Span) -> FormatError {
    FormatError::new(
        ErrorCode::E1006,
        format!("expression nested deeper than {max_depth} levels"),
    )
    .with_span(span)
}

/// Create an "arity mismatch" error for a fixed tree node.
pub fn arity_mismatch(symbol: &str, expected: Arity, found: usize, span: Span) -> FormatError {
    FormatError::new(
        ErrorCode::E2001,
        format!("operator '{symbol}' has arity {expected} but {found} operand(s)"),
    )
    .with_span(span)
    .with_text(symbol)
}

#[cfg(test)]
mod tests;
