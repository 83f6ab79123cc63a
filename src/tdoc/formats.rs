//! Output formats for tdoc documents
//!
//! Two renderers: the HTML output (table of contents, section bodies,
//! example gallery) and an XML-like tag serialization of the raw AST used
//! for inspection and tests.

pub mod html;
pub mod tag;

pub use html::render_html;
pub use tag::serialize_ast_tag;
