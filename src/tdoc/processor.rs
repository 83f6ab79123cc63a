//! File processing API for the tdoc format
//!
//! This module provides the high-level API for processing tdoc files with
//! different stages (token, ast, doc) and formats (simple, json, tag, html).
//! A processing spec is written as `<stage>-<format>`, e.g. `token-json` or
//! `doc-html`.
//!
//! The `doc` stage runs the full pipeline: parse, resolve references, render.
//! Reference lookups are built by the caller; [`process_file`] builds one
//! from the files sitting next to the document, which is how example scripts
//! referenced by `include` and `example` directives are found.

use crate::tdoc::formats::{render_html, serialize_ast_tag};
use crate::tdoc::lexer::{tokenize_with_spans, Token};
use crate::tdoc::parser::{parse, ParseError};
use crate::tdoc::resolver::{resolve, ReferenceLookup, ResolveError};
use serde::Serialize;
use std::fmt;
use std::fs;
use std::path::Path;

/// Represents the processing stage (how far the pipeline runs)
#[derive(Debug, Clone, PartialEq)]
pub enum ProcessingStage {
    Token,
    Ast,
    Doc,
}

/// Represents the output format
#[derive(Debug, Clone, PartialEq)]
pub enum OutputFormat {
    Simple,
    Json,
    Tag,
    Html,
}

/// A complete processing specification
#[derive(Debug, Clone, PartialEq)]
pub struct ProcessingSpec {
    pub stage: ProcessingStage,
    pub format: OutputFormat,
}

impl ProcessingSpec {
    /// Parse a format string like "token-simple" or "doc-html"
    pub fn from_string(format_str: &str) -> Result<Self, ProcessingError> {
        let (stage_str, format_part) = format_str
            .split_once('-')
            .ok_or_else(|| ProcessingError::InvalidFormat(format_str.to_string()))?;

        let stage = match stage_str {
            "token" => ProcessingStage::Token,
            "ast" => ProcessingStage::Ast,
            "doc" => ProcessingStage::Doc,
            _ => return Err(ProcessingError::InvalidStage(stage_str.to_string())),
        };

        let format = match format_part {
            "simple" => OutputFormat::Simple,
            "json" => OutputFormat::Json,
            "tag" => OutputFormat::Tag,
            "html" => OutputFormat::Html,
            _ => return Err(ProcessingError::InvalidFormatType(format_part.to_string())),
        };

        // Validate stage/format compatibility
        match (&stage, &format) {
            (ProcessingStage::Token, OutputFormat::Simple | OutputFormat::Json) => {}
            (ProcessingStage::Ast, OutputFormat::Tag) => {}
            (ProcessingStage::Doc, OutputFormat::Html) => {}
            (stage, format) => {
                return Err(ProcessingError::InvalidFormatType(format!(
                    "Format '{:?}' not supported for {:?} stage",
                    format, stage
                )))
            }
        }

        Ok(ProcessingSpec { stage, format })
    }

    /// All valid processing specifications
    pub fn available_specs() -> Vec<ProcessingSpec> {
        vec![
            ProcessingSpec {
                stage: ProcessingStage::Token,
                format: OutputFormat::Simple,
            },
            ProcessingSpec {
                stage: ProcessingStage::Token,
                format: OutputFormat::Json,
            },
            ProcessingSpec {
                stage: ProcessingStage::Ast,
                format: OutputFormat::Tag,
            },
            ProcessingSpec {
                stage: ProcessingStage::Doc,
                format: OutputFormat::Html,
            },
        ]
    }
}

/// The format strings accepted by [`ProcessingSpec::from_string`]
pub fn available_formats() -> Vec<&'static str> {
    vec!["token-simple", "token-json", "ast-tag", "doc-html"]
}

/// Errors that can occur during processing
#[derive(Debug)]
pub enum ProcessingError {
    FileNotFound(String),
    IoError(String),
    InvalidFormat(String),
    InvalidStage(String),
    InvalidFormatType(String),
    Serialization(String),
    Parse(ParseError),
    Resolve(ResolveError),
}

impl fmt::Display for ProcessingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProcessingError::FileNotFound(path) => write!(f, "file not found: {}", path),
            ProcessingError::IoError(message) => write!(f, "io error: {}", message),
            ProcessingError::InvalidFormat(format) => {
                write!(f, "invalid format string '{}' (expected <stage>-<format>)", format)
            }
            ProcessingError::InvalidStage(stage) => write!(f, "invalid stage '{}'", stage),
            ProcessingError::InvalidFormatType(format) => write!(f, "invalid format '{}'", format),
            ProcessingError::Serialization(message) => {
                write!(f, "serialization error: {}", message)
            }
            ProcessingError::Parse(error) => write!(f, "{}", error),
            ProcessingError::Resolve(error) => write!(f, "{}", error),
        }
    }
}

impl std::error::Error for ProcessingError {}

impl From<ParseError> for ProcessingError {
    fn from(error: ParseError) -> Self {
        ProcessingError::Parse(error)
    }
}

impl From<ResolveError> for ProcessingError {
    fn from(error: ResolveError) -> Self {
        ProcessingError::Resolve(error)
    }
}

#[derive(Serialize)]
struct TokenRecord {
    token: Token,
    start: usize,
    end: usize,
}

/// Process a source string according to a spec
pub fn process_string(
    source: &str,
    spec: &ProcessingSpec,
    lookup: &ReferenceLookup,
) -> Result<String, ProcessingError> {
    match spec.stage {
        ProcessingStage::Token => {
            let tokens = tokenize_with_spans(source);
            match spec.format {
                OutputFormat::Simple => Ok(tokens
                    .iter()
                    .map(|(token, span)| format!("{:?} @ {}..{}", token, span.start, span.end))
                    .collect::<Vec<_>>()
                    .join("\n")),
                OutputFormat::Json => {
                    let records: Vec<TokenRecord> = tokens
                        .into_iter()
                        .map(|(token, span)| TokenRecord {
                            token,
                            start: span.start,
                            end: span.end,
                        })
                        .collect();
                    serde_json::to_string_pretty(&records)
                        .map_err(|e| ProcessingError::Serialization(e.to_string()))
                }
                _ => Err(ProcessingError::InvalidFormatType(format!(
                    "{:?}",
                    spec.format
                ))),
            }
        }
        ProcessingStage::Ast => {
            let document = parse(source)?;
            match spec.format {
                OutputFormat::Tag => Ok(serialize_ast_tag(&document)),
                _ => Err(ProcessingError::InvalidFormatType(format!(
                    "{:?}",
                    spec.format
                ))),
            }
        }
        ProcessingStage::Doc => {
            let document = parse(source)?;
            let resolved = resolve(document, lookup)?;
            match spec.format {
                OutputFormat::Html => Ok(render_html(&resolved)),
                _ => Err(ProcessingError::InvalidFormatType(format!(
                    "{:?}",
                    spec.format
                ))),
            }
        }
    }
}

/// Process a file according to a spec
///
/// For the `doc` stage, the reference lookup is built from the document's
/// sibling files: each UTF-8 readable file in the same directory is
/// registered under its file name, so directives can target example scripts
/// placed next to the document.
pub fn process_file(path: &Path, spec: &ProcessingSpec) -> Result<String, ProcessingError> {
    if !path.exists() {
        return Err(ProcessingError::FileNotFound(path.display().to_string()));
    }
    let source =
        fs::read_to_string(path).map_err(|e| ProcessingError::IoError(e.to_string()))?;

    let lookup = match spec.stage {
        ProcessingStage::Doc => sibling_lookup(path)?,
        _ => ReferenceLookup::new(),
    };

    process_string(&source, spec, &lookup)
}

fn sibling_lookup(path: &Path) -> Result<ReferenceLookup, ProcessingError> {
    let mut lookup = ReferenceLookup::new();
    let Some(parent) = path.parent() else {
        return Ok(lookup);
    };

    let entries = fs::read_dir(parent).map_err(|e| ProcessingError::IoError(e.to_string()))?;
    for entry in entries {
        let entry = entry.map_err(|e| ProcessingError::IoError(e.to_string()))?;
        let entry_path = entry.path();
        if entry_path == path || !entry_path.is_file() {
            continue;
        }
        // Binary siblings are not referenceable content; skip them
        let Ok(content) = fs::read_to_string(&entry_path) else {
            continue;
        };
        if let Some(name) = entry_path.file_name().and_then(|n| n.to_str()) {
            lookup.insert(name, content);
        }
    }

    Ok(lookup)
}
