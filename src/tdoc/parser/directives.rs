//! Directive line parsing
//!
//! A directive line has the shape `:: <keyword> [<target>] [key=value ...]`.
//! Option values may be quoted to contain spaces: `caption="A caption"`.
//! The keyword must be one of the recognized kinds; `include` and `example`
//! require a target path and `contents` takes none.

use crate::tdoc::ast::{Directive, DirectiveKind, DirectiveOption, Span};
use crate::tdoc::parser::error::{ParseError, ParseErrorKind};
use once_cell::sync::Lazy;
use regex::Regex;

// A word is either a key=value option (quoted or bare value) or a bare token
static WORD: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"[A-Za-z_][A-Za-z0-9_.-]*="[^"]*"|\S+"#).unwrap());

static OPTION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"^([A-Za-z_][A-Za-z0-9_.-]*)=(?:"([^"]*)"|(\S*))$"#).unwrap());

/// Parse the remainder of a directive line (everything after the `::` marker)
pub fn parse_directive(rest: &str, span: Span) -> Result<Directive, ParseError> {
    let rest = rest.trim();
    if rest.is_empty() {
        return Err(ParseError::new(ParseErrorKind::EmptyDirective, span));
    }

    let (keyword, args) = match rest.split_once(char::is_whitespace) {
        Some((keyword, args)) => (keyword, args),
        None => (rest, ""),
    };

    let kind = DirectiveKind::from_keyword(keyword).ok_or_else(|| {
        ParseError::new(ParseErrorKind::UnknownDirective(keyword.to_string()), span)
    })?;

    let mut target: Option<String> = None;
    let mut options = Vec::new();

    for word in WORD.find_iter(args).map(|m| m.as_str()) {
        if word.contains('=') {
            let captures = OPTION.captures(word).ok_or_else(|| {
                ParseError::new(ParseErrorKind::MalformedOption(word.to_string()), span)
            })?;
            let key = captures[1].to_string();
            let value = captures
                .get(2)
                .or_else(|| captures.get(3))
                .map(|m| m.as_str().to_string())
                .unwrap_or_default();
            options.push(DirectiveOption { key, value });
        } else if target.is_none() && kind.requires_target() {
            target = Some(word.to_string());
        } else {
            return Err(ParseError::new(
                ParseErrorKind::UnexpectedTarget(word.to_string()),
                span,
            ));
        }
    }

    if kind.requires_target() && target.is_none() {
        return Err(ParseError::new(
            ParseErrorKind::MissingTarget(keyword.to_string()),
            span,
        ));
    }

    Ok(Directive {
        kind,
        target,
        options,
        span,
    })
}
