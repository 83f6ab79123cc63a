//! Parser tests over the canonical sample sources

use crate::tdoc::parser::{parse, DirectiveKind, ParseErrorKind};
use crate::tdoc::testing::{assert_ast, sources};

#[test]
fn test_paragraphs_only() {
    let doc = parse(sources::get("000-paragraphs.tdoc")).unwrap();

    assert_ast(&doc)
        .block_count(2)
        .section_count(0)
        .block(0, |block| {
            block
                .assert_paragraph()
                .line_count(2)
                .text_contains("series of");
        })
        .block(1, |block| {
            block.assert_paragraph().text_contains("random data");
        });
}

#[test]
fn test_flat_sections() {
    let doc = parse(sources::get("010-sections-flat.tdoc")).unwrap();

    assert_ast(&doc)
        .block_count(2)
        .section_count(2)
        .block(0, |block| {
            block
                .assert_section()
                .title("Tensors")
                .level(1)
                .anchor("tensors")
                .child_count(1)
                .child(0, |child| {
                    child.assert_paragraph().text_contains("numeric arrays");
                });
        })
        .block(1, |block| {
            block
                .assert_section()
                .title("Autograd")
                .anchor("autograd")
                .child_count(1);
        });
}

#[test]
fn test_nested_sections() {
    let doc = parse(sources::get("020-sections-nested.tdoc")).unwrap();

    assert_ast(&doc)
        .block_count(2)
        .section_count(4)
        .block(0, |block| {
            block
                .assert_section()
                .title("Tensors")
                .level(1)
                // paragraph + two subsections
                .child_count(3)
                .child(1, |child| {
                    child
                        .assert_section()
                        .title("Warm-up: numpy")
                        .level(2)
                        .anchor("warm-up-numpy")
                        .child_count(1);
                })
                .child(2, |child| {
                    child
                        .assert_section()
                        .title("Tensors on accelerators")
                        .level(2);
                });
        })
        .block(1, |block| {
            block.assert_section().title("Autograd").level(1);
        });
}

#[test]
fn test_directives_attach_to_enclosing_section() {
    let doc = parse(sources::get("030-directives.tdoc")).unwrap();

    assert_ast(&doc)
        .block_count(3)
        .block(0, |block| {
            block
                .assert_directive()
                .kind(DirectiveKind::Contents)
                .no_target()
                .option("depth", "2");
        })
        .block(1, |block| {
            block
                .assert_section()
                .title("Tensors")
                .child_count(1)
                .child(0, |child| {
                    child
                        .assert_directive()
                        .kind(DirectiveKind::Include)
                        .target("two_layer_net_numpy.py");
                });
        })
        .block(2, |block| {
            block.assert_section().child_count(1).child(0, |child| {
                child
                    .assert_directive()
                    .kind(DirectiveKind::Example)
                    .target("two_layer_net_autograd.py")
                    .option("caption", "Tensors and autograd");
            });
        });
}

#[test]
fn test_cross_references() {
    let doc = parse(sources::get("040-crossrefs.tdoc")).unwrap();

    assert_ast(&doc).section_count(3).block(0, |block| {
        block.assert_section().child(0, |child| {
            child
                .assert_paragraph()
                .ref_count(2)
                .ref_target(0, "autograd")
                .ref_target(1, "nn-module")
                .text_contains("the nn package");
        });
    });
}

#[test]
fn test_subsection_without_parent_is_rejected() {
    let error = parse("== Orphan subsection\n").unwrap_err();
    assert_eq!(
        error.kind,
        ParseErrorKind::InconsistentNesting {
            found: 2,
            max_allowed: 1
        }
    );
    assert_eq!(error.span.start.line, 1);
}

#[test]
fn test_nesting_jump_is_rejected() {
    let source = "= Top\n\n=== Too deep\n";
    let error = parse(source).unwrap_err();
    assert_eq!(
        error.kind,
        ParseErrorKind::InconsistentNesting {
            found: 3,
            max_allowed: 2
        }
    );
    assert_eq!(error.span.start.line, 3);
}

#[test]
fn test_sibling_and_dedent_nesting() {
    let source = "\
= A

== A.1

== A.2

= B

== B.1
";
    let doc = parse(source).unwrap();

    assert_ast(&doc)
        .block_count(2)
        .section_count(5)
        .block(0, |block| {
            block
                .assert_section()
                .title("A")
                .child_count(2)
                .child(0, |c| {
                    c.assert_section().title("A.1").child_count(0);
                })
                .child(1, |c| {
                    c.assert_section().title("A.2");
                });
        })
        .block(1, |block| {
            block.assert_section().title("B").child_count(1);
        });
}

#[test]
fn test_empty_title_is_rejected() {
    let error = parse("=\n").unwrap_err();
    assert_eq!(error.kind, ParseErrorKind::EmptyTitle);

    let error = parse("==   \n").unwrap_err();
    assert_eq!(error.kind, ParseErrorKind::EmptyTitle);
}

#[test]
fn test_directive_error_carries_line() {
    let source = "= Tensors\n\n:: include\n";
    let error = parse(source).unwrap_err();
    assert_eq!(error.kind, ParseErrorKind::MissingTarget("include".to_string()));
    assert_eq!(error.span.start.line, 3);
}

#[test]
fn test_marker_mid_line_is_prose() {
    // '=' and '::' only open structure at the start of a line
    let doc = parse("x = y and a :: b\n").unwrap();
    assert_ast(&doc).block_count(1).block(0, |block| {
        block.assert_paragraph().text("x = y and a :: b");
    });
}

#[test]
fn test_empty_document() {
    let doc = parse("").unwrap();
    assert!(doc.is_empty());

    let doc = parse("\n\n\n").unwrap();
    assert!(doc.is_empty());
}

#[test]
fn test_paragraph_split_by_blank_line_within_section() {
    let source = "= S\n\nfirst\n\nsecond\n";
    let doc = parse(source).unwrap();
    assert_ast(&doc).block(0, |block| {
        block.assert_section().child_count(2);
    });
}
