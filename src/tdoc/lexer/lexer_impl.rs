//! Implementation of the tdoc lexer
//!
//! This module provides convenience functions for tokenizing tdoc text.
//! The actual tokenization is handled entirely by logos.

use crate::tdoc::lexer::tokens::Token;
use logos::Logos;

/// Tokenize a string and collect all tokens
pub fn tokenize(source: &str) -> Vec<Token> {
    Token::lexer(source).filter_map(|result| result.ok()).collect()
}

/// Tokenize a string and collect tokens with their byte spans
pub fn tokenize_with_spans(source: &str) -> Vec<(Token, logos::Span)> {
    let mut lexer = Token::lexer(source);
    let mut tokens = Vec::new();

    while let Some(result) = lexer.next() {
        if let Ok(token) = result {
            tokens.push((token, lexer.span()));
        }
    }

    tokens
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_tokenization() {
        let tokens = tokenize("hello world");
        assert_eq!(tokens, vec![Token::Text, Token::Whitespace, Token::Text]);
    }

    #[test]
    fn test_empty_input() {
        let tokens = tokenize("");
        assert_eq!(tokens, vec![]);
    }

    #[test]
    fn test_newline_only() {
        let tokens = tokenize("\n");
        assert_eq!(tokens, vec![Token::Newline]);
    }

    #[test]
    fn test_multiline_tokenization() {
        let tokens = tokenize("= Tensors\n\nWarm-up text");
        assert_eq!(
            tokens,
            vec![
                Token::HeaderMarker,
                Token::Whitespace,
                Token::Text,
                Token::Newline,
                Token::Newline,
                Token::Text, // "Warm-up"
                Token::Whitespace,
                Token::Text, // "text"
            ]
        );
    }

    #[test]
    fn test_tokenize_with_spans() {
        let tokens = tokenize_with_spans("== Title");
        assert_eq!(tokens.len(), 3);
        assert_eq!(tokens[0], (Token::HeaderMarker, 0..2));
        assert_eq!(tokens[1], (Token::Whitespace, 2..3));
        assert_eq!(tokens[2], (Token::Text, 3..8));
    }

    #[test]
    fn test_header_marker_span_carries_level() {
        let tokens = tokenize_with_spans("=== Deep");
        let (token, span) = &tokens[0];
        assert_eq!(*token, Token::HeaderMarker);
        assert_eq!(span.len(), 3);
    }
}
