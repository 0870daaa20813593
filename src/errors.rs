//! Error types with rich diagnostics using miette
//!
//! Literal errors carry the offending text and a span so a document loader
//! can point at the exact column that failed to parse.

use miette::{Diagnostic, NamedSource, SourceSpan};
use pest::error::InputLocation;
use thiserror::Error;

use crate::Rule;
use crate::types::NumericError;

// ============================================================================
// Literal Errors
// ============================================================================

/// Errors that occur while reading a persisted attribute value
#[derive(Error, Diagnostic, Debug)]
pub enum LiteralError {
    #[error("malformed literal: {message}")]
    #[diagnostic(code(drawaid::literal::syntax))]
    Syntax {
        message: String,
        #[source_code]
        src: NamedSource<String>,
        #[label("here")]
        span: SourceSpan,
    },

    #[error("invalid number: {token}")]
    #[diagnostic(code(drawaid::literal::number))]
    Number {
        token: String,
        #[source_code]
        src: NamedSource<String>,
        #[label("does not fit")]
        span: SourceSpan,
    },
}

impl LiteralError {
    pub(crate) fn syntax(text: &str, err: pest::error::Error<Rule>) -> Self {
        let span: SourceSpan = match err.location {
            InputLocation::Pos(pos) => (pos, 0).into(),
            InputLocation::Span((start, end)) => (start, end - start).into(),
        };
        LiteralError::Syntax {
            message: err.variant.message().into_owned(),
            src: NamedSource::new("<value>", text.to_string()),
            span,
        }
    }

    pub(crate) fn number(text: &str, token: &str, start: usize) -> Self {
        LiteralError::Number {
            token: token.to_string(),
            src: NamedSource::new("<value>", text.to_string()),
            span: (start, token.len()).into(),
        }
    }
}

// ============================================================================
// Constraint Errors
// ============================================================================

/// Errors raised when a path constraint cannot hold for the current geometry
#[derive(Error, Diagnostic, Debug, Clone, PartialEq, Eq)]
pub enum ConstraintError {
    #[error("orthogonal routing needs at least 3 handles, line has {count}")]
    #[diagnostic(
        code(drawaid::constraint::too_few_handles),
        help("load or insert an interior point before enabling orthogonal routing")
    )]
    TooFewHandles { count: usize },
}

// ============================================================================
// Load Errors
// ============================================================================

/// Errors that occur while applying a persisted attribute to a primitive
#[derive(Error, Diagnostic, Debug)]
pub enum LoadError {
    #[error("malformed value for `{attribute}`")]
    #[diagnostic(code(drawaid::load::malformed))]
    Malformed {
        attribute: String,
        #[source]
        #[diagnostic_source]
        source: LiteralError,
    },

    #[error("`{attribute}` expects {expected}, found {found}")]
    #[diagnostic(code(drawaid::load::wrong_shape))]
    WrongShape {
        attribute: String,
        expected: &'static str,
        found: String,
    },

    #[error("`{attribute}` is not a valid extent")]
    #[diagnostic(code(drawaid::load::invalid_extent))]
    InvalidExtent {
        attribute: String,
        #[source]
        reason: NumericError,
    },

    #[error("a line needs at least 2 points, found {count}")]
    #[diagnostic(code(drawaid::load::too_few_points))]
    TooFewPoints { count: usize },

    #[error("unknown item kind: {kind}")]
    #[diagnostic(
        code(drawaid::load::unknown_kind),
        help("known kinds are Line, Box and Ellipse")
    )]
    UnknownKind { kind: String },

    #[error(transparent)]
    #[diagnostic(transparent)]
    Constraint(#[from] ConstraintError),
}
