//! Lexer module for the tdoc format
//!
//! This module contains the tokenization logic for the tdoc format,
//! including token definitions and the lexer implementation.
//!
//! Structure Handling
//!
//! Unlike indentation-based formats, tdoc marks section nesting explicitly
//! with runs of `=` at the start of a header line, so the lexer never has to
//! synthesize indent or dedent tokens. A single vanilla logos pass produces
//! the full token stream; all structural decisions (which line is a header,
//! a directive, or paragraph text) happen in the parser's line classifier.

pub mod lexer_impl;
pub mod tokens;

pub use lexer_impl::{tokenize, tokenize_with_spans};
pub use tokens::Token;
