//! Document-level parser for the tdoc format
//!
//! Walks the grouped token lines, classifies each line, and builds the
//! section tree with a level stack. Headers push and pop sections; directive
//! lines parse on the spot; runs of text lines accumulate into paragraphs.

use crate::tdoc::ast::{
    Block, Container, Document, Paragraph, ParagraphLine, Section, Span,
};
use crate::tdoc::lexer::Token;
use crate::tdoc::parser::directives::parse_directive;
use crate::tdoc::parser::error::{ParseError, ParseErrorKind};
use crate::tdoc::parser::inlines::parse_inlines;
use crate::tdoc::parser::lines::{group_lines, TokenLine};

/// What a single line means for the block structure
enum LineClass {
    Blank,
    Header { level: usize, marker_end: usize },
    Directive { marker_end: usize },
    Text,
}

fn classify(line: &TokenLine) -> LineClass {
    if line.is_blank() {
        return LineClass::Blank;
    }
    match line.first_significant() {
        Some((Token::HeaderMarker, span)) if span.start == line.range.start => LineClass::Header {
            level: span.len(),
            marker_end: span.end,
        },
        Some((Token::DirectiveMarker, span)) if span.start == line.range.start => {
            LineClass::Directive {
                marker_end: span.end,
            }
        }
        _ => LineClass::Text,
    }
}

/// Incremental document builder: a stack of open sections plus the
/// paragraph currently being accumulated
struct DocumentBuilder {
    root: Vec<Block>,
    stack: Vec<Section>,
    paragraph: Vec<(usize, String)>,
}

impl DocumentBuilder {
    fn new() -> Self {
        Self {
            root: Vec::new(),
            stack: Vec::new(),
            paragraph: Vec::new(),
        }
    }

    fn attach(&mut self, block: Block) {
        match self.stack.last_mut() {
            Some(section) => section.children_mut().push(block),
            None => self.root.push(block),
        }
    }

    fn flush_paragraph(&mut self) {
        if self.paragraph.is_empty() {
            return;
        }
        let first_line = self.paragraph[0].0;
        let (last_line, last_text) = {
            let last = &self.paragraph[self.paragraph.len() - 1];
            (last.0, last.1.len())
        };
        let span = Span::new(
            Span::of_line(first_line, 1).start,
            Span::of_line(last_line, last_text).end,
        );
        let lines = std::mem::take(&mut self.paragraph)
            .into_iter()
            .map(|(_, text)| ParagraphLine::new(parse_inlines(&text)))
            .collect();
        self.attach(Block::Paragraph(Paragraph::new(lines, span)));
    }

    fn close_sections_to(&mut self, depth: usize) {
        while self.stack.len() > depth {
            let Some(section) = self.stack.pop() else { break };
            match self.stack.last_mut() {
                Some(parent) => parent.children_mut().push(Block::Section(section)),
                None => self.root.push(Block::Section(section)),
            }
        }
    }

    fn open_section(&mut self, section: Section, level: usize) -> Result<(), ParseError> {
        if level > self.stack.len() + 1 {
            return Err(ParseError::new(
                ParseErrorKind::InconsistentNesting {
                    found: level,
                    max_allowed: self.stack.len() + 1,
                },
                section.span,
            ));
        }
        self.close_sections_to(level - 1);
        self.stack.push(section);
        Ok(())
    }

    fn finish(mut self) -> Document {
        self.flush_paragraph();
        self.close_sections_to(0);
        Document::new(self.root)
    }
}

/// Parse a tdoc source string into a document
pub fn parse(source: &str) -> Result<Document, ParseError> {
    let lines = group_lines(source);
    let mut builder = DocumentBuilder::new();

    for line in &lines {
        let text = line.text(source);
        let line_span = Span::of_line(line.number, text.len());

        match classify(line) {
            LineClass::Blank => builder.flush_paragraph(),
            LineClass::Header { level, marker_end } => {
                builder.flush_paragraph();
                let title = source[marker_end..line.range.end].trim();
                if title.is_empty() {
                    return Err(ParseError::new(ParseErrorKind::EmptyTitle, line_span));
                }
                let section = Section::new(title.to_string(), level, line_span);
                builder.open_section(section, level)?;
            }
            LineClass::Directive { marker_end } => {
                builder.flush_paragraph();
                let rest = &source[marker_end..line.range.end];
                let directive = parse_directive(rest, line_span)?;
                builder.attach(Block::Directive(directive));
            }
            LineClass::Text => {
                builder.paragraph.push((line.number, text.to_string()));
            }
        }
    }

    Ok(builder.finish())
}
