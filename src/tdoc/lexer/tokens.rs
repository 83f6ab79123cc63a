//! Token definitions for the tdoc format
//!
//! This module defines all the tokens that can be produced by the tdoc lexer.
//! The tokens are defined using the logos derive macro for efficient
//! tokenization. Header levels are encoded in the length of a `HeaderMarker`
//! run, so the lexer stays free of any stateful nesting logic.

use logos::Logos;
use serde::Serialize;

/// All possible tokens in the tdoc format
#[derive(Logos, Debug, PartialEq, Clone, Serialize)]
pub enum Token {
    // Directive marker at the start of a directive line
    #[token("::")]
    DirectiveMarker,

    // Header marker - a run of '=' whose length is the section level
    #[regex(r"=+")]
    HeaderMarker,

    // Cross-reference delimiters
    #[token("[[")]
    RefOpen,
    #[token("]]")]
    RefClose,
    #[token("|")]
    Pipe,

    // Single brackets and colons appear in ordinary prose
    #[token("[")]
    OpenBracket,
    #[token("]")]
    CloseBracket,
    #[token(":")]
    Colon,

    // Line breaks
    #[token("\n")]
    Newline,

    // Whitespace (excluding newlines)
    #[regex(r"[ \t]+")]
    Whitespace,

    // Text content (catch-all for non-special characters)
    #[regex(r"[^ \t\n=|\[\]:]+")]
    Text,
}

impl Token {
    /// Check if this token is whitespace (including newlines)
    pub fn is_whitespace(&self) -> bool {
        matches!(self, Token::Whitespace | Token::Newline)
    }

    /// Check if this token opens a structural line (header or directive)
    pub fn is_structural_marker(&self) -> bool {
        matches!(self, Token::HeaderMarker | Token::DirectiveMarker)
    }

    /// Check if this token is a cross-reference delimiter
    pub fn is_reference_delimiter(&self) -> bool {
        matches!(self, Token::RefOpen | Token::RefClose | Token::Pipe)
    }

    /// Check if this token is text content
    pub fn is_text(&self) -> bool {
        matches!(self, Token::Text)
    }
}
