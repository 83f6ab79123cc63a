//! Abstract Syntax Tree (AST) definitions for the tdoc format
//!
//! This module defines the data structures that represent the parsed
//! structure of a tdoc document. Documents are immutable after parsing:
//! the lifecycle is parse once, resolve once, render once.
//!
//! ## Testing
//!
//! Parser tests should use the fluent assertions in the
//! [testing module](crate::tdoc::testing) rather than matching on the
//! enum variants by hand.

pub mod node;
pub mod span;

pub use node::{
    slugify, AstNode, Block, Container, CrossRef, Directive, DirectiveKind, DirectiveOption,
    Document, Inline, Paragraph, ParagraphLine, Section,
};
pub use span::{Position, Span};
