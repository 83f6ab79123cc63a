//! Token line grouping
//!
//! The parser works line by line. This module groups the spanned token
//! stream into `TokenLine`s, each carrying its 1-based line number, the byte
//! range of the line, and the tokens on it. Newline tokens delimit lines and
//! are not kept.

use crate::tdoc::lexer::{tokenize_with_spans, Token};
use std::ops::Range;

/// One source line with its tokens and byte range
#[derive(Debug, Clone, PartialEq)]
pub struct TokenLine {
    /// 1-based line number
    pub number: usize,
    /// Byte range of the line content (excluding the newline)
    pub range: Range<usize>,
    /// Tokens on this line, with their byte spans
    pub tokens: Vec<(Token, Range<usize>)>,
}

impl TokenLine {
    /// The raw text of the line
    pub fn text<'a>(&self, source: &'a str) -> &'a str {
        &source[self.range.clone()]
    }

    /// True when the line has no tokens or only whitespace
    pub fn is_blank(&self) -> bool {
        self.tokens
            .iter()
            .all(|(token, _)| matches!(token, Token::Whitespace))
    }

    /// The first non-whitespace token on the line
    pub fn first_significant(&self) -> Option<&(Token, Range<usize>)> {
        self.tokens
            .iter()
            .find(|(token, _)| !matches!(token, Token::Whitespace))
    }
}

/// Tokenize the source and group tokens into lines
pub fn group_lines(source: &str) -> Vec<TokenLine> {
    let spanned = tokenize_with_spans(source);
    let mut lines = Vec::new();
    let mut current: Vec<(Token, Range<usize>)> = Vec::new();
    let mut line_start = 0usize;
    let mut number = 1usize;

    for (token, span) in spanned {
        if token == Token::Newline {
            lines.push(TokenLine {
                number,
                range: line_start..span.start,
                tokens: std::mem::take(&mut current),
            });
            line_start = span.end;
            number += 1;
        } else {
            current.push((token, span));
        }
    }

    // Trailing line without a final newline
    if !current.is_empty() || line_start < source.len() {
        lines.push(TokenLine {
            number,
            range: line_start..source.len(),
            tokens: current,
        });
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_single_line() {
        let source = "hello world";
        let lines = group_lines(source);
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].number, 1);
        assert_eq!(lines[0].text(source), "hello world");
    }

    #[test]
    fn test_group_multiple_lines() {
        let source = "= Tensors\n\ntext here\n";
        let lines = group_lines(source);
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0].text(source), "= Tensors");
        assert_eq!(lines[1].text(source), "");
        assert!(lines[1].is_blank());
        assert_eq!(lines[2].text(source), "text here");
        assert_eq!(lines[2].number, 3);
    }

    #[test]
    fn test_blank_line_with_whitespace() {
        let source = "a\n   \nb";
        let lines = group_lines(source);
        assert_eq!(lines.len(), 3);
        assert!(lines[1].is_blank());
        assert!(!lines[0].is_blank());
    }

    #[test]
    fn test_first_significant_skips_whitespace() {
        let source = "  == Indented header";
        let lines = group_lines(source);
        let (token, span) = lines[0].first_significant().unwrap();
        assert_eq!(*token, Token::HeaderMarker);
        assert_eq!(span.clone(), 2..4);
    }

    #[test]
    fn test_empty_source() {
        assert!(group_lines("").is_empty());
    }

    #[test]
    fn test_trailing_newline_does_not_add_line() {
        let lines = group_lines("a\n");
        assert_eq!(lines.len(), 1);
    }
}
