//! Inline cross-reference scanning
//!
//! Paragraph lines may embed cross-references written as `[[target]]` or
//! `[[target|display label]]`. The scanner splits a line into text and
//! reference runs with a static regex. Anything that does not match the
//! reference shape (unclosed `[[`, empty target) stays ordinary text.

use crate::tdoc::ast::{CrossRef, Inline};
use once_cell::sync::Lazy;
use regex::Regex;

static CROSS_REF: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\[\[([^\[\]|]+)(?:\|([^\[\]]+))?\]\]").unwrap());

/// Split a paragraph line into inline runs
pub fn parse_inlines(text: &str) -> Vec<Inline> {
    let mut inlines = Vec::new();
    let mut last_end = 0;

    for captures in CROSS_REF.captures_iter(text) {
        let whole = captures.get(0).unwrap();
        if whole.start() > last_end {
            inlines.push(Inline::Text(text[last_end..whole.start()].to_string()));
        }

        let target = captures[1].trim().to_string();
        let label = captures
            .get(2)
            .map(|m| m.as_str().trim().to_string())
            .filter(|label| !label.is_empty());
        inlines.push(Inline::CrossRef(CrossRef::new(target, label)));

        last_end = whole.end();
    }

    if last_end < text.len() {
        inlines.push(Inline::Text(text[last_end..].to_string()));
    }

    if inlines.is_empty() {
        inlines.push(Inline::Text(String::new()));
    }

    inlines
}
