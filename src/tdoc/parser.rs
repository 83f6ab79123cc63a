//! Parser module for the tdoc format
//!
//! This module contains the parsing logic for the tdoc format. Parsing is
//! line-based: the token stream from the lexer is grouped into lines, each
//! line is classified as a header, a directive, or paragraph text, and the
//! section tree is built with a level stack. The first malformed line aborts
//! the parse.
//!
//! ## Testing
//!
//! Parser tests should use the canonical sample sources and the fluent
//! assertions from the [testing module](crate::tdoc::testing).

pub mod directives;
pub mod document;
pub mod error;
pub mod inlines;
pub mod lines;
#[cfg(test)]
mod tests;

pub use document::parse;
pub use error::{ParseError, ParseErrorKind};

// Re-export AST types so parser consumers have a single import surface
pub use crate::tdoc::ast::{
    slugify, AstNode, Block, Container, CrossRef, Directive, DirectiveKind, DirectiveOption,
    Document, Inline, Paragraph, ParagraphLine, Position, Section, Span,
};
