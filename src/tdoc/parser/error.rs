//! Parse error definitions
//!
//! Every parse error carries the span of the offending line. Parsing halts
//! at the first error; there is no recovery or partial document.

use crate::tdoc::ast::Span;
use std::fmt;

/// The ways a tdoc document can be malformed
#[derive(Debug, Clone, PartialEq)]
pub enum ParseErrorKind {
    /// A header whose level skips past its parent's (e.g. `===` directly
    /// under `=`, or a `==` with no enclosing section)
    InconsistentNesting { found: usize, max_allowed: usize },
    /// A header marker with no title text after it
    EmptyTitle,
    /// A `::` line with nothing after the marker
    EmptyDirective,
    /// A `::` line whose keyword is not a recognized directive
    UnknownDirective(String),
    /// An `include` or `example` directive without a target path
    MissingTarget(String),
    /// A directive option that is not a well-formed `key=value` pair
    MalformedOption(String),
    /// A target where the directive does not take one, or a second target
    UnexpectedTarget(String),
}

impl fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseErrorKind::InconsistentNesting { found, max_allowed } => write!(
                f,
                "inconsistent nesting: level {} header where at most level {} is allowed",
                found, max_allowed
            ),
            ParseErrorKind::EmptyTitle => write!(f, "header marker with no title"),
            ParseErrorKind::EmptyDirective => write!(f, "directive marker with no keyword"),
            ParseErrorKind::UnknownDirective(keyword) => {
                write!(f, "unknown directive '{}'", keyword)
            }
            ParseErrorKind::MissingTarget(keyword) => {
                write!(f, "directive '{}' requires a target path", keyword)
            }
            ParseErrorKind::MalformedOption(word) => {
                write!(f, "malformed directive option '{}'", word)
            }
            ParseErrorKind::UnexpectedTarget(word) => {
                write!(f, "unexpected directive target '{}'", word)
            }
        }
    }
}

/// A parse failure with the location of the offending line
#[derive(Debug, Clone, PartialEq)]
pub struct ParseError {
    pub kind: ParseErrorKind,
    pub span: Span,
}

impl ParseError {
    pub fn new(kind: ParseErrorKind, span: Span) -> Self {
        Self { kind, span }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "parse error at {}: {}", self.span.start, self.kind)
    }
}

impl std::error::Error for ParseError {}
