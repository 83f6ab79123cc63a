//! HTML renderer for resolved documents
//!
//! Walks the resolved tree and emits, in order: a table of contents with one
//! entry per section, the document body, and a gallery listing every
//! `example` directive. The renderer is a pure function over an immutable
//! [`ResolvedDocument`]; rendering the same tree twice yields byte-identical
//! output. All failure cases live in the parser and resolver - by the time a
//! document reaches this module it can always be rendered.

use crate::tdoc::ast::{Block, Directive, DirectiveKind, Inline, Paragraph, Section};
use crate::tdoc::resolver::ResolvedDocument;

/// Render a resolved document to an HTML fragment
pub fn render_html(resolved: &ResolvedDocument) -> String {
    let mut out = String::new();

    render_toc(resolved, &mut out);
    for block in &resolved.document.blocks {
        render_block(resolved, block, &mut out);
    }
    render_gallery(resolved, &mut out);

    out
}

fn render_toc(resolved: &ResolvedDocument, out: &mut String) {
    out.push_str("<nav class=\"contents\">\n<ul>\n");
    for entry in &resolved.toc {
        if let Some(depth) = resolved.contents_depth {
            if entry.level > depth {
                continue;
            }
        }
        out.push_str(&format!(
            "<li class=\"toc-level-{}\"><a href=\"#{}\">{}</a></li>\n",
            entry.level,
            escape_html(&entry.anchor),
            escape_html(&entry.title)
        ));
    }
    out.push_str("</ul>\n</nav>\n");
}

fn render_gallery(resolved: &ResolvedDocument, out: &mut String) {
    out.push_str("<aside class=\"gallery\">\n<ul>\n");
    for item in &resolved.gallery {
        out.push_str(&format!(
            "<li><a href=\"{}\">{}</a></li>\n",
            escape_html(&item.target),
            escape_html(&item.caption)
        ));
    }
    out.push_str("</ul>\n</aside>\n");
}

fn render_block(resolved: &ResolvedDocument, block: &Block, out: &mut String) {
    match block {
        Block::Section(section) => render_section(resolved, section, out),
        Block::Paragraph(paragraph) => render_paragraph(resolved, paragraph, out),
        Block::Directive(directive) => render_directive(resolved, directive, out),
    }
}

fn render_section(resolved: &ResolvedDocument, section: &Section, out: &mut String) {
    // h7+ does not exist; clamp deep nesting
    let heading = section.level.min(6);
    out.push_str(&format!(
        "<section id=\"{}\">\n<h{}>{}</h{}>\n",
        escape_html(&section.anchor),
        heading,
        escape_html(&section.title),
        heading
    ));
    for block in &section.blocks {
        render_block(resolved, block, out);
    }
    out.push_str("</section>\n");
}

fn render_paragraph(resolved: &ResolvedDocument, paragraph: &Paragraph, out: &mut String) {
    out.push_str("<p>");
    for (index, line) in paragraph.lines.iter().enumerate() {
        if index > 0 {
            out.push('\n');
        }
        for inline in &line.inlines {
            match inline {
                Inline::Text(text) => out.push_str(&escape_html(text)),
                Inline::CrossRef(cross_ref) => {
                    // Section anchors become fragment links; lookup keys
                    // link to the external target directly
                    let href = if resolved.is_section_anchor(&cross_ref.target) {
                        format!("#{}", cross_ref.target)
                    } else {
                        cross_ref.target.clone()
                    };
                    out.push_str(&format!(
                        "<a href=\"{}\">{}</a>",
                        escape_html(&href),
                        escape_html(cross_ref.display_label())
                    ));
                }
            }
        }
    }
    out.push_str("</p>\n");
}

fn render_directive(resolved: &ResolvedDocument, directive: &Directive, out: &mut String) {
    match directive.kind {
        DirectiveKind::Include => {
            if let Some(target) = directive.target.as_deref() {
                let content = resolved
                    .includes
                    .get(target)
                    .map(String::as_str)
                    .unwrap_or_default();
                out.push_str(&format!(
                    "<pre class=\"include\" data-path=\"{}\">{}</pre>\n",
                    escape_html(target),
                    escape_html(content)
                ));
            }
        }
        DirectiveKind::Example => {
            if let Some(target) = directive.target.as_deref() {
                let caption = directive.option("caption").unwrap_or(target);
                out.push_str(&format!(
                    "<p class=\"example-ref\"><a href=\"{}\">{}</a></p>\n",
                    escape_html(target),
                    escape_html(caption)
                ));
            }
        }
        // The TOC always renders at the top; the directive only carries
        // options
        DirectiveKind::Contents => {}
    }
}

/// Escape text for HTML element and attribute positions
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}
