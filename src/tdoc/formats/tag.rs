//! XML-like AST tag serialization
//!
//! Serializes AST nodes to an XML-like format that directly reflects the
//! tree structure. Used by the `ast-tag` processing format and by tests that
//! want to assert on document shape in one string comparison.
//!
//! ## Format
//!
//! ```text
//! <document>
//!   <section>Tensors<children>
//!     <paragraph>Plain numeric arrays first.</paragraph>
//!     <directive kind="example" target="net.py" caption="A net"/>
//!   </children></section>
//! </document>
//! ```

use crate::tdoc::ast::{Block, Container, Directive, Document};

/// Serialize a document to AST tag format
pub fn serialize_ast_tag(doc: &Document) -> String {
    let mut result = String::new();
    result.push_str("<document>\n");
    for block in &doc.blocks {
        serialize_block(block, 1, &mut result);
    }
    result.push_str("</document>");
    result
}

fn serialize_block(block: &Block, indent_level: usize, output: &mut String) {
    let indent = "  ".repeat(indent_level);

    match block {
        Block::Paragraph(paragraph) => {
            output.push_str(&format!(
                "{}<paragraph>{}</paragraph>\n",
                indent,
                escape_xml(&paragraph.text())
            ));
        }
        Block::Section(section) => {
            output.push_str(&format!("{}<section>", indent));
            output.push_str(&escape_xml(section.label()));

            if section.children().is_empty() {
                output.push_str("</section>\n");
            } else {
                output.push_str("<children>\n");
                for child in section.children() {
                    serialize_block(child, indent_level + 1, output);
                }
                output.push_str(&format!("{}</children></section>\n", indent));
            }
        }
        Block::Directive(directive) => {
            serialize_directive(directive, &indent, output);
        }
    }
}

fn serialize_directive(directive: &Directive, indent: &str, output: &mut String) {
    output.push_str(&format!(
        "{}<directive kind=\"{}\"",
        indent, directive.kind
    ));
    if let Some(target) = &directive.target {
        output.push_str(&format!(" target=\"{}\"", escape_xml(target)));
    }
    for option in &directive.options {
        output.push_str(&format!(
            " {}=\"{}\"",
            option.key,
            escape_xml(&option.value)
        ));
    }
    output.push_str("/>\n");
}

fn escape_xml(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tdoc::parser::parse;

    #[test]
    fn test_serialize_flat_document() {
        let doc = parse("= Tensors\n\nplain arrays\n").unwrap();
        let tag = serialize_ast_tag(&doc);
        assert_eq!(
            tag,
            "<document>\n  <section>Tensors<children>\n    <paragraph>plain arrays</paragraph>\n  </children></section>\n</document>"
        );
    }

    #[test]
    fn test_serialize_empty_section() {
        let doc = parse("= Empty\n").unwrap();
        let tag = serialize_ast_tag(&doc);
        assert!(tag.contains("<section>Empty</section>"));
    }

    #[test]
    fn test_serialize_directive_attributes() {
        let doc = parse(":: example net.py caption=\"A <net>\"\n").unwrap();
        let tag = serialize_ast_tag(&doc);
        assert!(tag.contains(
            "<directive kind=\"example\" target=\"net.py\" caption=\"A &lt;net&gt;\"/>"
        ));
    }

    #[test]
    fn test_serialize_nested_sections() {
        let doc = parse("= Outer\n\n== Inner\n\ndeep text\n").unwrap();
        let tag = serialize_ast_tag(&doc);
        assert!(tag.contains("<section>Outer<children>"));
        assert!(tag.contains("    <section>Inner<children>"));
        assert!(tag.contains("      <paragraph>deep text</paragraph>"));
    }

    #[test]
    fn test_serialize_escapes_titles() {
        let doc = parse("= A & B\n").unwrap();
        let tag = serialize_ast_tag(&doc);
        assert!(tag.contains("<section>A &amp; B</section>"));
    }
}
