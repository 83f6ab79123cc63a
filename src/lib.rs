//! # tdoc
//!
//! A parser, reference resolver, and renderer for the tdoc format.
//!
//! tdoc is a small line-oriented markup format for tutorial documents:
//! nested sections, directives pointing at external example scripts, and
//! inline cross-references. The library parses a document into an AST,
//! validates every reference against a caller-supplied lookup, and renders
//! the result as HTML with a table of contents and a gallery of examples.
//!
//! ## Testing
//!
//! For testing guidelines, see the [testing module](tdoc::testing).
//! Parser tests should use the canonical sample sources and the fluent
//! AST assertion API.

pub mod tdoc;
