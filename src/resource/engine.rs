//! Extraction engine tag

use crate::error::ValidationError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How a consumer splits raw records into positional values.
///
/// Decoding goes through [`FromStr`], so an unknown tag reports the accepted ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum Engine {
    /// Split on the group delimiter
    #[default]
    Fields,
    /// Comma structured; the delimiter is ignored
    Csv,
}

impl Engine {
    pub fn as_str(&self) -> &'static str {
        match self {
            Engine::Fields => "fields",
            Engine::Csv => "csv",
        }
    }

    pub fn is_default(&self) -> bool {
        *self == Engine::default()
    }

    /// Whether the group delimiter means anything to this engine
    pub fn uses_delimiter(&self) -> bool {
        matches!(self, Engine::Fields)
    }
}

impl fmt::Display for Engine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Engine {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "fields" => Ok(Engine::Fields),
            "csv" => Ok(Engine::Csv),
            other => Err(ValidationError::UnknownEngine(other.to_string())),
        }
    }
}

impl TryFrom<String> for Engine {
    type Error = ValidationError;

    fn try_from(tag: String) -> Result<Self, Self::Error> {
        tag.parse()
    }
}
