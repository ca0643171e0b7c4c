//! Extraction
//!
//!     Turns one Bro/Zeek script into a [`Group`] of named, indexed fields.
//!
//! The Extraction Pipeline
//!
//!     1. Tokenize the document. See [lexing](crate::lexing).
//!     2. Find the module name, which becomes the group name. See [module].
//!     3. Find the record block. See [record]. The first block in source order is used unless
//!        a record name was requested.
//!     4. Split the top level of the body into declaration lines. See [lines]. A nested
//!        `{ ... }` group belongs to the declaration it opens on.
//!     5. Parse each line into a name/type pair. See [declaration]. One malformed line fails
//!        the whole document; there is no partial result.
//!     6. Assign indices, expanding composite fields. See [expansion].
//!     7. Build the group through [`Group::push_field`] so the group invariants hold. A record
//!        without declarations gives an empty group, which is rejected here already.
//!
//!     Any failure is local to the document. Callers decide whether to skip it and go on.

pub mod declaration;
pub mod expansion;
pub mod lines;
pub mod module;
pub mod record;

pub use declaration::{parse_declaration, Declaration};
pub use expansion::{assign_indices, Component, Expansion};
pub use lines::body_lines;
pub use module::find_module;
pub use record::{find_records, RecordBlock};

use crate::error::{ExtractError, Missing};
use crate::lexing::tokenize;
use crate::resource::{Engine, Group};
use std::fs;
use std::path::Path;
use tracing::debug;

/// Knobs for an [`Extractor`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractOptions {
    /// Record type to extract; `None` takes the first record block
    pub record: Option<String>,
    /// Composite fields to expand, tried in order
    pub expansions: Vec<Expansion>,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        ExtractOptions {
            record: None,
            expansions: vec![Expansion::conn_id()],
        }
    }
}

/// Extracts one group per document
#[derive(Debug, Clone, Default)]
pub struct Extractor {
    options: ExtractOptions,
}

impl Extractor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: ExtractOptions) -> Self {
        Extractor { options }
    }

    /// Only extract the record type with this name
    pub fn with_record(mut self, name: impl Into<String>) -> Self {
        self.options.record = Some(name.into());
        self
    }

    /// Replace the composite expansions
    pub fn with_expansions(mut self, expansions: Vec<Expansion>) -> Self {
        self.options.expansions = expansions;
        self
    }

    pub fn options(&self) -> &ExtractOptions {
        &self.options
    }

    /// Extract a group from raw document bytes. Invalid UTF-8 is replaced, not rejected.
    pub fn extract(&self, bytes: &[u8]) -> Result<Group, ExtractError> {
        self.extract_str(&String::from_utf8_lossy(bytes))
    }

    /// Read a document from disk and extract it
    pub fn extract_path(&self, path: impl AsRef<Path>) -> Result<Group, ExtractError> {
        let bytes = fs::read(path.as_ref())?;
        self.extract(&bytes)
    }

    pub fn extract_str(&self, source: &str) -> Result<Group, ExtractError> {
        let tokens = tokenize(source);
        let module = find_module(&tokens)?;

        let records = find_records(source, &tokens);
        let record = match &self.options.record {
            Some(wanted) => records.iter().find(|r| &r.name == wanted),
            None => records.first(),
        }
        .ok_or_else(|| Missing::Record {
            name: self.options.record.clone(),
        })?;

        let body = record.top_level();
        let declarations = body_lines(&body)
            .into_iter()
            .map(parse_declaration)
            .collect::<Result<Vec<_>, _>>()?;

        let mut group = Group::new(&module, Some(Engine::Fields), None)?;
        for field in assign_indices(&declarations, &self.options.expansions) {
            group.push_field(field)?;
        }
        group.validate()?;

        debug!(
            module = %module,
            record = %record.name,
            fields = group.fields().len(),
            "extracted record"
        );
        Ok(group)
    }
}

/// Extract with the default options
pub fn extract(bytes: &[u8]) -> Result<Group, ExtractError> {
    Extractor::new().extract(bytes)
}
