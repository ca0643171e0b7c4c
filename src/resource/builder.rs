//! Incremental resource assembly
//!
//! The builder rejects a bad group at the moment it is added, so each document gets its own
//! error and the groups accepted so far stay untouched. Export happens once, at the end.

use super::format;
use super::group::Group;
use super::{Resource, SCHEMA_VERSION};
use crate::error::{ResourceError, ValidationError};
use std::collections::HashSet;
use std::fs;
use std::io::Write;
use std::path::Path;
use tracing::{debug, info};

/// Accumulates groups into a [`Resource`].
///
/// Not synchronized: concurrent callers must serialize calls to [`ResourceBuilder::add_group`].
#[derive(Debug, Clone)]
pub struct ResourceBuilder {
    version: u32,
    groups: Vec<Group>,
    seen: HashSet<String>,
}

impl ResourceBuilder {
    /// A builder for the current schema version
    pub fn new() -> Self {
        Self::with_version(SCHEMA_VERSION)
    }

    pub fn with_version(version: u32) -> Self {
        ResourceBuilder {
            version,
            groups: Vec::new(),
            seen: HashSet::new(),
        }
    }

    /// Accept a group, or reject it and leave the builder as it was
    pub fn add_group(&mut self, group: Group) -> Result<(), ValidationError> {
        if group.name().is_empty() {
            return Err(ValidationError::EmptyGroupName);
        }
        if self.seen.contains(group.name()) {
            return Err(ValidationError::DuplicateGroup(group.name().to_string()));
        }
        if group.fields().is_empty() {
            return Err(ValidationError::EmptyGroup(group.name().to_string()));
        }
        group.validate()?;

        debug!(group = group.name(), fields = group.fields().len(), "group added");
        self.seen.insert(group.name().to_string());
        self.groups.push(group);
        Ok(())
    }

    pub fn version(&self) -> u32 {
        self.version
    }

    pub fn groups(&self) -> &[Group] {
        &self.groups
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Snapshot of the accumulated resource
    pub fn to_resource(&self) -> Resource {
        Resource {
            version: self.version,
            groups: self.groups.clone(),
        }
    }

    /// Check the export preconditions and encode the document
    pub fn render(&self) -> Result<String, ResourceError> {
        if self.version == 0 {
            return Err(ValidationError::InvalidVersion {
                found: self.version,
                expected: SCHEMA_VERSION,
            }
            .into());
        }
        if self.groups.is_empty() {
            return Err(ValidationError::EmptyResource.into());
        }
        Ok(format::to_string(&self.to_resource())?)
    }

    /// Encode the resource into a writer
    pub fn write_to<W: Write>(&self, mut writer: W) -> Result<(), ResourceError> {
        let text = self.render()?;
        writer.write_all(text.as_bytes())?;
        writer.flush()?;
        Ok(())
    }

    /// Write the resource to a file, replacing any previous content
    pub fn export(&self, path: impl AsRef<Path>) -> Result<(), ResourceError> {
        let path = path.as_ref();
        let text = self.render()?;
        fs::write(path, text)?;
        info!(
            path = %path.display(),
            groups = self.groups.len(),
            version = self.version,
            "resource exported"
        );
        Ok(())
    }
}

impl Default for ResourceBuilder {
    fn default() -> Self {
        Self::new()
    }
}
