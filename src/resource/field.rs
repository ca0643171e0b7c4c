//! A single name to index mapping

use serde::{Deserialize, Serialize};

/// One named, typed, positional extraction target.
///
/// The type tag is informational only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Field {
    pub name: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub data_type: String,
    pub index: usize,
}

impl Field {
    pub fn new(name: impl Into<String>, data_type: impl Into<String>, index: usize) -> Self {
        Field {
            name: name.into(),
            data_type: data_type.into(),
            index,
        }
    }
}
