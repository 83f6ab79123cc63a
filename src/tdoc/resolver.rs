//! Reference resolution for parsed documents
//!
//! The resolver validates a parsed document against a caller-supplied
//! [`ReferenceLookup`] mapping paths and anchors to external content. It
//! performs no I/O of its own. Resolution walks the document once, in
//! document order, and fails on the first dangling target; on success it
//! produces an immutable [`ResolvedDocument`] carrying everything the
//! renderer needs: the anchor table, the table-of-contents entries, the
//! gallery items, and the content of every included file.

use crate::tdoc::ast::{Block, Directive, DirectiveKind, Document, Paragraph, Span};
use std::collections::{HashMap, HashSet};
use std::fmt;

/// A mapping from path/anchor to external content
///
/// Keys are the targets directives and cross-references may name: example
/// script paths, or anchors exported by other documents. Values are the raw
/// content (opaque text; example scripts are never parsed or executed).
#[derive(Debug, Clone, Default)]
pub struct ReferenceLookup {
    entries: HashMap<String, String>,
}

impl ReferenceLookup {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register external content under a path or anchor key
    pub fn insert(&mut self, key: impl Into<String>, content: impl Into<String>) {
        self.entries.insert(key.into(), content.into());
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for ReferenceLookup {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut lookup = Self::new();
        for (key, value) in iter {
            lookup.insert(key, value);
        }
        lookup
    }
}

/// One table-of-contents entry
#[derive(Debug, Clone, PartialEq)]
pub struct TocEntry {
    pub title: String,
    pub anchor: String,
    pub level: usize,
}

/// One gallery item, produced by an `example` directive
#[derive(Debug, Clone, PartialEq)]
pub struct GalleryItem {
    pub target: String,
    pub caption: String,
}

/// A resolution failure: a directive or cross-reference names a target that
/// is neither a section anchor nor a lookup key
#[derive(Debug, Clone, PartialEq)]
pub struct ResolveError {
    pub target: String,
    pub span: Span,
}

impl fmt::Display for ResolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unresolved reference at {}: no target '{}'",
            self.span.start, self.target
        )
    }
}

impl std::error::Error for ResolveError {}

/// A fully validated document, ready to render
#[derive(Debug, Clone)]
pub struct ResolvedDocument {
    pub document: Document,
    /// Table-of-contents entries, one per section, in document order
    pub toc: Vec<TocEntry>,
    /// Gallery items, one per `example` directive, in document order
    pub gallery: Vec<GalleryItem>,
    /// Content of every included file, keyed by target path
    pub includes: HashMap<String, String>,
    /// Depth limit requested by a `contents` directive, when present
    pub contents_depth: Option<usize>,
    anchors: HashSet<String>,
}

impl ResolvedDocument {
    /// Whether a target names a section anchor in this document
    pub fn is_section_anchor(&self, target: &str) -> bool {
        self.anchors.contains(target)
    }
}

/// Validate a document against a reference lookup
///
/// Anchors are collected first so a cross-reference may point forward to a
/// later section. Duplicate section slugs keep their first occurrence in the
/// anchor table; every section still gets its own TOC entry.
pub fn resolve(
    document: Document,
    lookup: &ReferenceLookup,
) -> Result<ResolvedDocument, ResolveError> {
    let mut toc = Vec::new();
    let mut anchors = HashSet::new();
    for section in document.sections() {
        anchors.insert(section.anchor.clone());
        toc.push(TocEntry {
            title: section.title.clone(),
            anchor: section.anchor.clone(),
            level: section.level,
        });
    }

    let mut resolver = Walker {
        lookup,
        anchors: &anchors,
        gallery: Vec::new(),
        includes: HashMap::new(),
        contents_depth: None,
    };
    resolver.walk_blocks(&document.blocks)?;

    let Walker {
        gallery,
        includes,
        contents_depth,
        ..
    } = resolver;

    Ok(ResolvedDocument {
        document,
        toc,
        gallery,
        includes,
        contents_depth,
        anchors,
    })
}

struct Walker<'a> {
    lookup: &'a ReferenceLookup,
    anchors: &'a HashSet<String>,
    gallery: Vec<GalleryItem>,
    includes: HashMap<String, String>,
    contents_depth: Option<usize>,
}

impl Walker<'_> {
    fn walk_blocks(&mut self, blocks: &[Block]) -> Result<(), ResolveError> {
        for block in blocks {
            match block {
                Block::Section(section) => self.walk_blocks(&section.blocks)?,
                Block::Paragraph(paragraph) => self.check_paragraph(paragraph)?,
                Block::Directive(directive) => self.check_directive(directive)?,
            }
        }
        Ok(())
    }

    fn check_paragraph(&self, paragraph: &Paragraph) -> Result<(), ResolveError> {
        for cross_ref in paragraph.cross_refs() {
            let known = self.anchors.contains(&cross_ref.target)
                || self.lookup.contains(&cross_ref.target);
            if !known {
                return Err(ResolveError {
                    target: cross_ref.target.clone(),
                    span: paragraph.span,
                });
            }
        }
        Ok(())
    }

    fn check_directive(&mut self, directive: &Directive) -> Result<(), ResolveError> {
        match directive.kind {
            DirectiveKind::Include => {
                let target = self.require_target(directive)?;
                let content = self.lookup.get(target).ok_or_else(|| ResolveError {
                    target: target.to_string(),
                    span: directive.span,
                })?;
                self.includes.insert(target.to_string(), content.to_string());
            }
            DirectiveKind::Example => {
                let target = self.require_target(directive)?;
                if !self.lookup.contains(target) {
                    return Err(ResolveError {
                        target: target.to_string(),
                        span: directive.span,
                    });
                }
                let caption = directive
                    .option("caption")
                    .unwrap_or(target)
                    .to_string();
                self.gallery.push(GalleryItem {
                    target: target.to_string(),
                    caption,
                });
            }
            DirectiveKind::Contents => {
                if self.contents_depth.is_none() {
                    self.contents_depth = directive
                        .option("depth")
                        .and_then(|value| value.parse::<usize>().ok());
                }
            }
        }
        Ok(())
    }

    // The parser guarantees a target for include/example; treat a missing
    // one as unresolved rather than panicking if a caller built the AST
    // by hand
    fn require_target<'d>(&self, directive: &'d Directive) -> Result<&'d str, ResolveError> {
        directive.target.as_deref().ok_or_else(|| ResolveError {
            target: String::new(),
            span: directive.span,
        })
    }
}
