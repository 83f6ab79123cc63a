//! Property-based tests for the lexer and document-level invariants

use proptest::prelude::*;
use tdoc::tdoc::lexer::{tokenize, tokenize_with_spans, Token};
use tdoc::tdoc::parser::parse;
use tdoc::tdoc::resolver::{resolve, ReferenceLookup};

proptest! {
    /// Lexing is total: every input produces tokens whose spans tile the
    /// input exactly, with no gaps and no overlaps
    #[test]
    fn lexer_spans_tile_the_input(input in "\\PC*") {
        let spanned = tokenize_with_spans(&input);
        let mut cursor = 0;
        for (_, span) in &spanned {
            prop_assert_eq!(span.start, cursor);
            cursor = span.end;
        }
        prop_assert_eq!(cursor, input.len());
    }

    /// Newline count is preserved by tokenization
    #[test]
    fn lexer_preserves_newlines(input in "\\PC*\n\\PC*\n\\PC*") {
        let newline_tokens = tokenize(&input)
            .iter()
            .filter(|t| **t == Token::Newline)
            .count();
        let newlines = input.chars().filter(|c| *c == '\n').count();
        prop_assert_eq!(newline_tokens, newlines);
    }

    /// A run of '=' at the start of a line is always one header marker
    #[test]
    fn header_marker_run_is_single_token(level in 1usize..10) {
        let line = format!("{} Title", "=".repeat(level));
        let tokens = tokenize_with_spans(&line);
        prop_assert_eq!(&tokens[0].0, &Token::HeaderMarker);
        prop_assert_eq!(tokens[0].1.len(), level);
    }

    /// A document of N generated top-level sections yields N sections and
    /// N table-of-contents entries, in document order
    #[test]
    fn toc_entry_per_section(titles in prop::collection::vec("[a-z]{1,8}( [a-z]{1,8}){0,2}", 1..12)) {
        let source: String = titles
            .iter()
            .map(|title| format!("= {}\n\n", title))
            .collect();

        let doc = parse(&source).unwrap();
        prop_assert_eq!(doc.section_count(), titles.len());

        let resolved = resolve(doc, &ReferenceLookup::new()).unwrap();
        prop_assert_eq!(resolved.toc.len(), titles.len());
        for (entry, title) in resolved.toc.iter().zip(&titles) {
            prop_assert_eq!(&entry.title, title);
        }
    }

    /// Parsing never panics, whatever the input
    #[test]
    fn parse_never_panics(input in "\\PC*") {
        let _ = parse(&input);
    }
}
