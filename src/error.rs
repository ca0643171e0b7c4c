//! Typed errors for extraction, resource building and scanning.
//!
//! Extraction failures are local to one document and recoverable by the caller.
//! Validation failures leave the builder untouched. I/O failures are propagated as-is.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// The part of a document that extraction could not locate.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Missing {
    /// No `module <name>;` declaration
    #[error("module declaration")]
    Module,

    /// No `type <name>: record { ... };` block (or none with the requested name)
    #[error("{}", record_label(.name))]
    Record { name: Option<String> },

    /// A body line without both a name and a type token
    #[error("well-formed field declaration (got '{line}')")]
    FieldLine { line: String },
}

fn record_label(name: &Option<String>) -> String {
    match name {
        Some(name) => format!("record type '{}'", name),
        None => "record type block".to_string(),
    }
}

/// Structural invariant violations on fields, groups and resources.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("group name is empty")]
    EmptyGroupName,

    #[error("group '{0}' already present in the resource")]
    DuplicateGroup(String),

    #[error("group '{0}' contains no extraction definitions")]
    EmptyGroup(String),

    #[error("extraction name is empty")]
    EmptyFieldName,

    #[error("'{0}' extraction name already exists")]
    DuplicateField(String),

    #[error("index {0} is negative")]
    NegativeIndex(i64),

    #[error("index {index} of '{name}' is already taken")]
    DuplicateIndex { name: String, index: usize },

    #[error("unknown engine '{0}' (expected 'fields' or 'csv')")]
    UnknownEngine(String),

    #[error("invalid version {found} (expected {expected})")]
    InvalidVersion { found: u32, expected: u32 },

    #[error("the set is empty, no groups present")]
    EmptyResource,
}

/// Errors produced while turning one document into a group.
#[derive(Debug, Error)]
pub enum ExtractError {
    /// A required pattern is absent from the document
    #[error("not found: {0}")]
    NotFound(Missing),

    /// The extracted fields do not form a valid group
    #[error("invalid group: {0}")]
    Validation(#[from] ValidationError),

    /// Reading the document failed
    #[error("failed to read document: {0}")]
    Io(#[from] io::Error),
}

impl ExtractError {
    /// True for the NotFound class (missing module, record block or field line).
    pub fn is_not_found(&self) -> bool {
        matches!(self, ExtractError::NotFound(_))
    }
}

impl From<Missing> for ExtractError {
    fn from(missing: Missing) -> Self {
        ExtractError::NotFound(missing)
    }
}

/// Errors produced while exporting or loading a resource.
#[derive(Debug, Error)]
pub enum ResourceError {
    #[error("invalid resource: {0}")]
    Validation(#[from] ValidationError),

    #[error("resource I/O failed: {0}")]
    Io(#[from] io::Error),

    #[error("malformed resource document: {0}")]
    Format(#[from] serde_json::Error),
}

/// Errors produced while discovering candidate documents.
#[derive(Debug, Error)]
pub enum ScanError {
    #[error("cannot scan {}: {source}", .path.display())]
    Root {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("directory walk failed: {0}")]
    Walk(#[from] ignore::Error),
}
