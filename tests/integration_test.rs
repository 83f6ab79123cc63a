//! End-to-end pipeline tests over the full tutorial sample

use tdoc::tdoc::formats::{render_html, serialize_ast_tag};
use tdoc::tdoc::parser::parse;
use tdoc::tdoc::resolver::{resolve, ReferenceLookup};
use tdoc::tdoc::testing::{assert_ast, sources};

fn tutorial_lookup() -> ReferenceLookup {
    [
        (
            "two_layer_net_numpy.py",
            "import numpy as np\n\nx = np.random.randn(64, 1000)\n",
        ),
        (
            "two_layer_net_autograd.py",
            "import torch\n\nx = torch.randn(64, 1000)\n",
        ),
        (
            "two_layer_net_nn.py",
            "import torch\n\nmodel = torch.nn.Sequential()\n",
        ),
    ]
    .into_iter()
    .collect()
}

#[test]
fn test_tutorial_document_structure() {
    let doc = parse(sources::get("050-tutorial.tdoc")).unwrap();

    // Intro paragraph, contents directive, then three sections
    assert_ast(&doc)
        .block_count(5)
        .section_count(3)
        .block(0, |block| {
            block.assert_paragraph().text_contains("runnable script");
        })
        .block(2, |block| {
            block
                .assert_section()
                .title("Tensors")
                .child_count(2)
                .child(0, |child| {
                    child
                        .assert_paragraph()
                        .ref_count(1)
                        .ref_target(0, "autograd");
                });
        })
        .block(4, |block| {
            block.assert_section().title("nn module").anchor("nn-module");
        });
}

#[test]
fn test_tutorial_renders_complete_page() {
    let doc = parse(sources::get("050-tutorial.tdoc")).unwrap();
    let resolved = resolve(doc, &tutorial_lookup()).unwrap();
    let html = render_html(&resolved);

    // TOC
    assert!(html.contains("<a href=\"#tensors\">Tensors</a>"));
    assert!(html.contains("<a href=\"#autograd\">Autograd</a>"));
    assert!(html.contains("<a href=\"#nn-module\">nn module</a>"));

    // Body with resolved cross-reference
    assert!(html.contains("<a href=\"#autograd\">the autograd section</a>"));

    // Gallery links to the example scripts
    assert!(html.contains("<a href=\"two_layer_net_numpy.py\">Warm-up: numpy</a>"));
    assert!(html.contains("<a href=\"two_layer_net_nn.py\">A two-layer network with nn</a>"));
}

#[test]
fn test_tag_serialization_reflects_structure() {
    let doc = parse(sources::get("050-tutorial.tdoc")).unwrap();
    let tag = serialize_ast_tag(&doc);

    assert!(tag.contains("<section>Tensors<children>"));
    assert!(tag.contains("<section>Autograd<children>"));
    assert!(tag.contains(
        "<directive kind=\"example\" target=\"two_layer_net_nn.py\" caption=\"A two-layer network with nn\"/>"
    ));
}

#[test]
fn test_missing_example_script_blocks_rendering() {
    let mut lookup = tutorial_lookup();
    let doc = parse(sources::get("050-tutorial.tdoc")).unwrap();
    assert!(resolve(doc.clone(), &lookup).is_ok());

    // Remove one script: resolution now fails and nothing renders
    lookup = [
        ("two_layer_net_numpy.py", ""),
        ("two_layer_net_autograd.py", ""),
    ]
    .into_iter()
    .collect();
    let error = resolve(doc, &lookup).unwrap_err();
    assert_eq!(error.target, "two_layer_net_nn.py");
}

#[test]
fn test_document_is_immutable_through_pipeline() {
    let doc = parse(sources::get("050-tutorial.tdoc")).unwrap();
    let copy = doc.clone();
    let resolved = resolve(doc, &tutorial_lookup()).unwrap();
    // Resolution stores the document unchanged
    assert_eq!(resolved.document, copy);
}
