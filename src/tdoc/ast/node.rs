//! AST node definitions for the tdoc format
//!
//! AST nodes carry semantic field names (`title`, `blocks`, `target`), while
//! the `AstNode` and `Container` traits expose the uniform interface that
//! generic code (the tag serializer, the test assertions) traverses. This
//! mirrors the split between what a node *is* and how a tree walker sees it.

use super::span::Span;
use std::fmt;

// ============================================================================
// AST Traits - Common interfaces for uniform node access
// ============================================================================

/// Common interface for all AST nodes
pub trait AstNode {
    /// Get the node type name for display/debugging
    fn node_type(&self) -> &'static str;

    /// Get the display label for this node (for tree visualization)
    fn display_label(&self) -> String;
}

/// Trait for container nodes that have a label and child blocks
pub trait Container: AstNode {
    /// Get the label/title of this container
    fn label(&self) -> &str;

    /// Get the children of this container
    fn children(&self) -> &[Block];

    /// Get a mutable reference to children (for tree construction)
    fn children_mut(&mut self) -> &mut Vec<Block>;
}

// ============================================================================
// AST Node Definitions
// ============================================================================

/// A complete tdoc document
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    /// Top-level blocks (paragraphs, sections, directives)
    pub blocks: Vec<Block>,
}

/// A block is a section, a paragraph, or a directive
#[derive(Debug, Clone, PartialEq)]
pub enum Block {
    Section(Section),
    Paragraph(Paragraph),
    Directive(Directive),
}

/// A section is a titled, nestable unit of document content
#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    /// The section title
    pub title: String,
    /// Nesting level (1 for a top-level section)
    pub level: usize,
    /// The anchor slug derived from the title
    pub anchor: String,
    /// Blocks nested within this section
    pub blocks: Vec<Block>,
    /// Location of the header line
    pub span: Span,
}

/// A paragraph is a contiguous run of text lines
#[derive(Debug, Clone, PartialEq)]
pub struct Paragraph {
    /// The lines that make up this paragraph
    pub lines: Vec<ParagraphLine>,
    /// Location of the paragraph in the source
    pub span: Span,
}

/// A single paragraph line, split into inline runs
#[derive(Debug, Clone, PartialEq)]
pub struct ParagraphLine {
    pub inlines: Vec<Inline>,
}

/// Inline content within a paragraph line
#[derive(Debug, Clone, PartialEq)]
pub enum Inline {
    Text(String),
    CrossRef(CrossRef),
}

/// An inline cross-reference: a target anchor plus an optional display label
#[derive(Debug, Clone, PartialEq)]
pub struct CrossRef {
    /// The referenced anchor (a section slug or a lookup key)
    pub target: String,
    /// Display label; defaults to the target when absent
    pub label: Option<String>,
}

/// The recognized directive kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DirectiveKind {
    /// Splice an external example file into the output
    Include,
    /// Register an external example script as a gallery item
    Example,
    /// Request the table of contents
    Contents,
}

/// A directive option: a `key=value` pair
#[derive(Debug, Clone, PartialEq)]
pub struct DirectiveOption {
    pub key: String,
    pub value: String,
}

/// A directive line: kind, optional target path, and options
#[derive(Debug, Clone, PartialEq)]
pub struct Directive {
    pub kind: DirectiveKind,
    /// Target path or anchor; always present for Include and Example
    pub target: Option<String>,
    pub options: Vec<DirectiveOption>,
    /// Location of the directive line
    pub span: Span,
}

// ============================================================================
// Constructors and accessors
// ============================================================================

impl Document {
    pub fn new(blocks: Vec<Block>) -> Self {
        Self { blocks }
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// All sections in document order (preorder walk)
    pub fn sections(&self) -> Vec<&Section> {
        let mut out = Vec::new();
        collect_sections(&self.blocks, &mut out);
        out
    }

    /// All directives in document order (preorder walk)
    pub fn directives(&self) -> Vec<&Directive> {
        let mut out = Vec::new();
        collect_directives(&self.blocks, &mut out);
        out
    }

    /// Number of section headers in the document
    pub fn section_count(&self) -> usize {
        self.sections().len()
    }
}

fn collect_sections<'a>(blocks: &'a [Block], out: &mut Vec<&'a Section>) {
    for block in blocks {
        if let Block::Section(section) = block {
            out.push(section);
            collect_sections(&section.blocks, out);
        }
    }
}

fn collect_directives<'a>(blocks: &'a [Block], out: &mut Vec<&'a Directive>) {
    for block in blocks {
        match block {
            Block::Directive(directive) => out.push(directive),
            Block::Section(section) => collect_directives(&section.blocks, out),
            Block::Paragraph(_) => {}
        }
    }
}

impl Section {
    /// Create a section; the anchor is derived from the title
    pub fn new(title: String, level: usize, span: Span) -> Self {
        let anchor = slugify(&title);
        Self {
            title,
            level,
            anchor,
            blocks: Vec::new(),
            span,
        }
    }
}

impl Paragraph {
    pub fn new(lines: Vec<ParagraphLine>, span: Span) -> Self {
        Self { lines, span }
    }

    /// The plain text of the paragraph, lines joined with spaces and
    /// cross-references reduced to their display labels
    pub fn text(&self) -> String {
        self.lines
            .iter()
            .map(ParagraphLine::text)
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// All cross-references in this paragraph, in order
    pub fn cross_refs(&self) -> Vec<&CrossRef> {
        self.lines
            .iter()
            .flat_map(|line| line.inlines.iter())
            .filter_map(|inline| match inline {
                Inline::CrossRef(cross_ref) => Some(cross_ref),
                Inline::Text(_) => None,
            })
            .collect()
    }
}

impl ParagraphLine {
    pub fn new(inlines: Vec<Inline>) -> Self {
        Self { inlines }
    }

    /// The plain text of the line
    pub fn text(&self) -> String {
        self.inlines
            .iter()
            .map(|inline| match inline {
                Inline::Text(text) => text.clone(),
                Inline::CrossRef(cross_ref) => cross_ref.display_label().to_string(),
            })
            .collect()
    }
}

impl CrossRef {
    pub fn new(target: String, label: Option<String>) -> Self {
        Self { target, label }
    }

    /// The label shown to the reader; falls back to the target anchor
    pub fn display_label(&self) -> &str {
        self.label.as_deref().unwrap_or(&self.target)
    }
}

impl DirectiveKind {
    /// Parse a directive kind from its source keyword
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword {
            "include" => Some(DirectiveKind::Include),
            "example" => Some(DirectiveKind::Example),
            "contents" => Some(DirectiveKind::Contents),
            _ => None,
        }
    }

    /// The source keyword for this kind
    pub fn keyword(&self) -> &'static str {
        match self {
            DirectiveKind::Include => "include",
            DirectiveKind::Example => "example",
            DirectiveKind::Contents => "contents",
        }
    }

    /// Whether this kind requires a target path
    pub fn requires_target(&self) -> bool {
        matches!(self, DirectiveKind::Include | DirectiveKind::Example)
    }
}

impl fmt::Display for DirectiveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.keyword())
    }
}

impl Directive {
    /// Look up an option value by key
    pub fn option(&self, key: &str) -> Option<&str> {
        self.options
            .iter()
            .find(|opt| opt.key == key)
            .map(|opt| opt.value.as_str())
    }
}

// ============================================================================
// Trait implementations
// ============================================================================

impl AstNode for Section {
    fn node_type(&self) -> &'static str {
        "section"
    }

    fn display_label(&self) -> String {
        self.title.clone()
    }
}

impl Container for Section {
    fn label(&self) -> &str {
        &self.title
    }

    fn children(&self) -> &[Block] {
        &self.blocks
    }

    fn children_mut(&mut self) -> &mut Vec<Block> {
        &mut self.blocks
    }
}

impl AstNode for Paragraph {
    fn node_type(&self) -> &'static str {
        "paragraph"
    }

    fn display_label(&self) -> String {
        let text = self.text();
        if text.chars().count() > 40 {
            let prefix: String = text.chars().take(40).collect();
            format!("{}...", prefix)
        } else {
            text
        }
    }
}

impl AstNode for Directive {
    fn node_type(&self) -> &'static str {
        "directive"
    }

    fn display_label(&self) -> String {
        match &self.target {
            Some(target) => format!("{} {}", self.kind, target),
            None => self.kind.to_string(),
        }
    }
}

// ============================================================================
// Anchors
// ============================================================================

/// Derive an anchor slug from a section title: lowercase, with runs of
/// non-alphanumeric characters collapsed to single hyphens
pub fn slugify(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    let mut pending_hyphen = false;

    for ch in title.chars() {
        if ch.is_alphanumeric() {
            if pending_hyphen && !slug.is_empty() {
                slug.push('-');
            }
            pending_hyphen = false;
            for lower in ch.to_lowercase() {
                slug.push(lower);
            }
        } else {
            pending_hyphen = true;
        }
    }

    slug
}
