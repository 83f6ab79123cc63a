//! Testing utilities for AST assertions
//!
//! # Parser Testing Guidelines
//!
//! Parser tests should use two tools together:
//!
//! 1. **[sources]** - canonical tdoc sample documents. The format is small
//!    but easy to get subtly wrong in hand-written test strings; the samples
//!    here are the vetted sources, and reusing them keeps tests in step when
//!    the format evolves.
//! 2. **[assert_ast](fn@assert_ast)** - a fluent assertion API that verifies
//!    AST shape and content with far less boilerplate than matching enum
//!    variants by hand, and with error messages that carry the path to the
//!    failing node (e.g. `blocks[2]:children[1]: ...`).
//!
//! ## Example
//!
//! ```rust,ignore
//! use tdoc::tdoc::parser::parse;
//! use tdoc::tdoc::testing::{assert_ast, sources};
//!
//! let doc = parse(sources::get("010-sections-flat.tdoc")).unwrap();
//! assert_ast(&doc).block(0, |block| {
//!     block
//!         .assert_section()
//!         .title("Tensors")
//!         .level(1)
//!         .child_count(1)
//!         .child(0, |child| {
//!             child.assert_paragraph().text_contains("numeric arrays");
//!         });
//! });
//! ```

use crate::tdoc::ast::{Block, Directive, DirectiveKind, Document, Paragraph, Section};

// ============================================================================
// Canonical sample sources
// ============================================================================

/// Verified tdoc sample documents for tests
pub mod sources {
    pub const PARAGRAPHS: &str = "\
This tutorial introduces tensor computation through a series of
self-contained examples.

At its core, every example trains a small network on random data.
";

    pub const SECTIONS_FLAT: &str = "\
= Tensors

Before introducing the framework, we implement the network using plain
numeric arrays.

= Autograd

Automatic differentiation removes the hand-written backward pass.
";

    pub const SECTIONS_NESTED: &str = "\
= Tensors

Tensors are n-dimensional arrays.

== Warm-up: numpy

A fully-connected network with hand-rolled gradients.

== Tensors on accelerators

The same network, moved onto an accelerator device.

= Autograd

Automatic differentiation removes the hand-written backward pass.
";

    pub const DIRECTIVES: &str = "\
:: contents depth=2

= Tensors

:: include two_layer_net_numpy.py

= Autograd

:: example two_layer_net_autograd.py caption=\"Tensors and autograd\"
";

    pub const CROSSREFS: &str = "\
= Tensors

Once comfortable here, continue with [[autograd]] and then
[[nn-module|the nn package]].

= Autograd

Back to [[tensors|raw tensors]] whenever needed.

= nn module

High-level building blocks.
";

    pub const TUTORIAL: &str = "\
Learning with examples: this tutorial walks through tensor computation
concepts, each step shown as a runnable script.

:: contents

= Tensors

Before introducing the framework, we implement the network using plain
numeric arrays. See [[autograd|the autograd section]] for what comes next.

:: example two_layer_net_numpy.py caption=\"Warm-up: numpy\"

= Autograd

Autograd tracks operations on tensors and differentiates them
automatically, replacing the manual backward pass.

:: example two_layer_net_autograd.py caption=\"Tensors and autograd\"

= nn module

The nn package defines modules roughly equivalent to neural network
layers, plus optimizers to update their weights.

:: example two_layer_net_nn.py caption=\"A two-layer network with nn\"
";

    /// Get a sample source by name; panics on an unknown name so tests fail
    /// loudly instead of silently testing the wrong content
    pub fn get(name: &str) -> &'static str {
        match name {
            "000-paragraphs.tdoc" => PARAGRAPHS,
            "010-sections-flat.tdoc" => SECTIONS_FLAT,
            "020-sections-nested.tdoc" => SECTIONS_NESTED,
            "030-directives.tdoc" => DIRECTIVES,
            "040-crossrefs.tdoc" => CROSSREFS,
            "050-tutorial.tdoc" => TUTORIAL,
            _ => panic!("unknown tdoc sample source: {}", name),
        }
    }
}

// ============================================================================
// Entry point
// ============================================================================

/// Create an assertion builder for a document
pub fn assert_ast(doc: &Document) -> DocumentAssertion<'_> {
    DocumentAssertion { doc }
}

fn summarize_blocks(blocks: &[Block]) -> String {
    blocks
        .iter()
        .map(|block| match block {
            Block::Section(s) => format!("Section({})", s.title),
            Block::Paragraph(_) => "Paragraph".to_string(),
            Block::Directive(d) => format!("Directive({})", d.kind),
        })
        .collect::<Vec<_>>()
        .join(", ")
}

// ============================================================================
// Document assertions
// ============================================================================

pub struct DocumentAssertion<'a> {
    doc: &'a Document,
}

impl<'a> DocumentAssertion<'a> {
    /// Assert the number of top-level blocks
    pub fn block_count(self, expected: usize) -> Self {
        let actual = self.doc.blocks.len();
        assert_eq!(
            actual,
            expected,
            "Expected {} blocks, found {}: [{}]",
            expected,
            actual,
            summarize_blocks(&self.doc.blocks)
        );
        self
    }

    /// Assert the total number of sections (at any depth)
    pub fn section_count(self, expected: usize) -> Self {
        let actual = self.doc.section_count();
        assert_eq!(actual, expected, "Expected {} sections, found {}", expected, actual);
        self
    }

    /// Assert on a specific top-level block by index
    pub fn block<F>(self, index: usize, assertion: F) -> Self
    where
        F: FnOnce(BlockAssertion<'a>),
    {
        assert!(
            index < self.doc.blocks.len(),
            "Block index {} out of bounds (document has {} blocks)",
            index,
            self.doc.blocks.len()
        );
        assertion(BlockAssertion {
            block: &self.doc.blocks[index],
            context: format!("blocks[{}]", index),
        });
        self
    }
}

// ============================================================================
// Block assertions
// ============================================================================

pub struct BlockAssertion<'a> {
    block: &'a Block,
    context: String,
}

impl<'a> BlockAssertion<'a> {
    /// Assert this block is a Section
    pub fn assert_section(self) -> SectionAssertion<'a> {
        match self.block {
            Block::Section(section) => SectionAssertion {
                section,
                context: self.context,
            },
            other => panic!(
                "{}: Expected Section, found [{}]",
                self.context,
                summarize_blocks(std::slice::from_ref(other))
            ),
        }
    }

    /// Assert this block is a Paragraph
    pub fn assert_paragraph(self) -> ParagraphAssertion<'a> {
        match self.block {
            Block::Paragraph(para) => ParagraphAssertion {
                para,
                context: self.context,
            },
            other => panic!(
                "{}: Expected Paragraph, found [{}]",
                self.context,
                summarize_blocks(std::slice::from_ref(other))
            ),
        }
    }

    /// Assert this block is a Directive
    pub fn assert_directive(self) -> DirectiveAssertion<'a> {
        match self.block {
            Block::Directive(directive) => DirectiveAssertion {
                directive,
                context: self.context,
            },
            other => panic!(
                "{}: Expected Directive, found [{}]",
                self.context,
                summarize_blocks(std::slice::from_ref(other))
            ),
        }
    }
}

// ============================================================================
// Section assertions
// ============================================================================

pub struct SectionAssertion<'a> {
    section: &'a Section,
    context: String,
}

impl<'a> SectionAssertion<'a> {
    pub fn title(self, expected: &str) -> Self {
        assert_eq!(
            self.section.title, expected,
            "{}: Expected title '{}', got '{}'",
            self.context, expected, self.section.title
        );
        self
    }

    pub fn level(self, expected: usize) -> Self {
        assert_eq!(
            self.section.level, expected,
            "{}: Expected level {}, got {}",
            self.context, expected, self.section.level
        );
        self
    }

    pub fn anchor(self, expected: &str) -> Self {
        assert_eq!(
            self.section.anchor, expected,
            "{}: Expected anchor '{}', got '{}'",
            self.context, expected, self.section.anchor
        );
        self
    }

    pub fn child_count(self, expected: usize) -> Self {
        let actual = self.section.blocks.len();
        assert_eq!(
            actual,
            expected,
            "{}: Expected {} children, found {}: [{}]",
            self.context,
            expected,
            actual,
            summarize_blocks(&self.section.blocks)
        );
        self
    }

    pub fn child<F>(self, index: usize, assertion: F) -> Self
    where
        F: FnOnce(BlockAssertion<'a>),
    {
        assert!(
            index < self.section.blocks.len(),
            "{}: Child index {} out of bounds ({} children)",
            self.context,
            index,
            self.section.blocks.len()
        );
        assertion(BlockAssertion {
            block: &self.section.blocks[index],
            context: format!("{}:children[{}]", self.context, index),
        });
        self
    }
}

// ============================================================================
// Paragraph assertions
// ============================================================================

pub struct ParagraphAssertion<'a> {
    para: &'a Paragraph,
    context: String,
}

impl<'a> ParagraphAssertion<'a> {
    pub fn text(self, expected: &str) -> Self {
        let actual = self.para.text();
        assert_eq!(
            actual, expected,
            "{}: Expected text '{}', got '{}'",
            self.context, expected, actual
        );
        self
    }

    pub fn text_contains(self, needle: &str) -> Self {
        let actual = self.para.text();
        assert!(
            actual.contains(needle),
            "{}: Expected text to contain '{}', got '{}'",
            self.context,
            needle,
            actual
        );
        self
    }

    pub fn line_count(self, expected: usize) -> Self {
        assert_eq!(
            self.para.lines.len(),
            expected,
            "{}: Expected {} lines, found {}",
            self.context,
            expected,
            self.para.lines.len()
        );
        self
    }

    pub fn ref_count(self, expected: usize) -> Self {
        let actual = self.para.cross_refs().len();
        assert_eq!(
            actual, expected,
            "{}: Expected {} cross-references, found {}",
            self.context, expected, actual
        );
        self
    }

    pub fn ref_target(self, index: usize, expected: &str) -> Self {
        let refs = self.para.cross_refs();
        assert!(
            index < refs.len(),
            "{}: Reference index {} out of bounds ({} references)",
            self.context,
            index,
            refs.len()
        );
        assert_eq!(
            refs[index].target, expected,
            "{}: Expected reference target '{}', got '{}'",
            self.context, expected, refs[index].target
        );
        self
    }
}

// ============================================================================
// Directive assertions
// ============================================================================

pub struct DirectiveAssertion<'a> {
    directive: &'a Directive,
    context: String,
}

impl<'a> DirectiveAssertion<'a> {
    pub fn kind(self, expected: DirectiveKind) -> Self {
        assert_eq!(
            self.directive.kind, expected,
            "{}: Expected directive kind '{}', got '{}'",
            self.context, expected, self.directive.kind
        );
        self
    }

    pub fn target(self, expected: &str) -> Self {
        assert_eq!(
            self.directive.target.as_deref(),
            Some(expected),
            "{}: Expected target '{}', got {:?}",
            self.context,
            expected,
            self.directive.target
        );
        self
    }

    pub fn no_target(self) -> Self {
        assert_eq!(
            self.directive.target, None,
            "{}: Expected no target, got {:?}",
            self.context, self.directive.target
        );
        self
    }

    pub fn option(self, key: &str, expected: &str) -> Self {
        assert_eq!(
            self.directive.option(key),
            Some(expected),
            "{}: Expected option {}={}, got {:?}",
            self.context,
            key,
            expected,
            self.directive.option(key)
        );
        self
    }
}
