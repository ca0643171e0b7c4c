//! Named-fields resources
//!
//!     A [`Resource`] is the versioned collection of every [`Group`] produced in one run. Each
//!     group maps field names to positional indices for one source document, and tags the
//!     [`Engine`] that splits raw records into those positions.
//!
//!     Resources are assembled with a [`ResourceBuilder`], which enforces the group invariants
//!     as groups arrive, and are written once at the end. See [format] for the document layout.

pub mod builder;
pub mod engine;
pub mod field;
pub mod format;
pub mod group;

pub use builder::ResourceBuilder;
pub use engine::Engine;
pub use field::Field;
pub use group::{Group, DEFAULT_DELIMITER};

use crate::error::{ResourceError, ValidationError};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;

/// Schema version written into, and expected from, resource documents
pub const SCHEMA_VERSION: u32 = 2;

/// The top-level serialized artifact
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Resource {
    #[serde(default, skip_serializing_if = "is_zero")]
    pub version: u32,
    #[serde(rename = "Set", default)]
    pub groups: Vec<Group>,
}

fn is_zero(version: &u32) -> bool {
    *version == 0
}

impl Resource {
    /// Check the version, that groups exist with unique names, and each group on its own
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.version != SCHEMA_VERSION {
            return Err(ValidationError::InvalidVersion {
                found: self.version,
                expected: SCHEMA_VERSION,
            });
        }
        if self.groups.is_empty() {
            return Err(ValidationError::EmptyResource);
        }
        let mut names = HashSet::new();
        for group in &self.groups {
            group.validate()?;
            if !names.insert(group.name()) {
                return Err(ValidationError::DuplicateGroup(group.name().to_string()));
            }
        }
        Ok(())
    }

    /// Read and validate a resource document
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ResourceError> {
        let text = fs::read_to_string(path)?;
        format::from_str(&text)
    }

    pub fn group(&self, name: &str) -> Option<&Group> {
        self.groups.iter().find(|g| g.name() == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn group(name: &str) -> Group {
        let mut group = Group::new(name, None, None).expect("group to build");
        group.add_field("a", "count", 0).expect("field to add");
        group
    }

    #[test]
    fn test_validate() {
        let resource = Resource {
            version: SCHEMA_VERSION,
            groups: vec![group("a"), group("b")],
        };
        assert_eq!(resource.validate(), Ok(()));
        assert!(resource.group("b").is_some());
        assert!(resource.group("c").is_none());
    }

    #[test]
    fn test_validate_duplicate_groups() {
        let resource = Resource {
            version: SCHEMA_VERSION,
            groups: vec![group("a"), group("a")],
        };
        assert_eq!(
            resource.validate(),
            Err(ValidationError::DuplicateGroup("a".to_string()))
        );
    }

    #[test]
    fn test_validate_empty() {
        let resource = Resource {
            version: SCHEMA_VERSION,
            groups: vec![],
        };
        assert_eq!(resource.validate(), Err(ValidationError::EmptyResource));
    }

    #[test]
    fn test_validate_version_mismatch() {
        let resource = Resource {
            version: 1,
            groups: vec![group("a")],
        };
        assert_eq!(
            resource.validate(),
            Err(ValidationError::InvalidVersion {
                found: 1,
                expected: SCHEMA_VERSION
            })
        );
    }
}
