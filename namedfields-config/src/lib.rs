//! Shared configuration loader for the namedfields tools.
//!
//! `defaults/namedfields.default.toml` is embedded into every binary so that docs and
//! runtime behavior stay in sync. Applications layer user-specific files on top of those
//! defaults via [`Loader`] before deserializing into [`NamedFieldsConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, File, FileFormat};
use serde::Deserialize;
use std::path::{Path, PathBuf};

pub use config::ConfigError;

const DEFAULT_TOML: &str = include_str!("../defaults/namedfields.default.toml");

/// Top-level configuration consumed by namedfields applications.
#[derive(Debug, Clone, Deserialize)]
pub struct NamedFieldsConfig {
    pub scan: ScanConfig,
    pub extraction: ExtractionConfig,
    pub output: OutputConfig,
}

/// Which files of the input tree are read.
#[derive(Debug, Clone, Deserialize)]
pub struct ScanConfig {
    pub file_pattern: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ExtractionConfig {
    /// Empty means the first record block of each script
    pub record: String,
    pub expansions: Vec<ExpansionConfig>,
}

impl ExtractionConfig {
    pub fn record_name(&self) -> Option<&str> {
        Some(self.record.as_str()).filter(|r| !r.is_empty())
    }
}

/// A composite declaration and the fields it turns into.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ExpansionConfig {
    pub name: String,
    #[serde(rename = "type")]
    pub data_type: String,
    pub components: Vec<ComponentConfig>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ComponentConfig {
    pub name: String,
    #[serde(rename = "type")]
    pub data_type: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    pub path: PathBuf,
}

/// Layers configuration sources over the embedded defaults, last one wins.
///
/// The usual order is defaults, the optional `namedfields.toml` of the working directory, an
/// explicit `--config` file, then single settings taken from the command line.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Default for Loader {
    fn default() -> Self {
        Loader {
            builder: Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml)),
        }
    }
}

impl Loader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Layer a TOML file that must exist
    pub fn with_file(self, path: impl AsRef<Path>) -> Self {
        self.layer(path.as_ref(), true)
    }

    /// Layer a TOML file that is skipped when absent
    pub fn with_optional_file(self, path: impl AsRef<Path>) -> Self {
        self.layer(path.as_ref(), false)
    }

    fn layer(mut self, path: &Path, required: bool) -> Self {
        let source = File::from(path).format(FileFormat::Toml).required(required);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Where the resource is written (`output.path`)
    pub fn output_path(self, path: &str) -> Result<Self, ConfigError> {
        self.set("output.path", path)
    }

    /// Which file names are read (`scan.file_pattern`)
    pub fn file_pattern(self, pattern: &str) -> Result<Self, ConfigError> {
        self.set("scan.file_pattern", pattern)
    }

    /// Which record type is extracted (`extraction.record`)
    pub fn record(self, name: &str) -> Result<Self, ConfigError> {
        self.set("extraction.record", name)
    }

    fn set(mut self, key: &str, value: &str) -> Result<Self, ConfigError> {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Merge every layer and deserialize.
    ///
    /// Every expansion must list at least one component.
    pub fn build(self) -> Result<NamedFieldsConfig, ConfigError> {
        checked(self.builder.build()?.try_deserialize()?)
    }
}

fn checked(config: NamedFieldsConfig) -> Result<NamedFieldsConfig, ConfigError> {
    if let Some(empty) = config
        .extraction
        .expansions
        .iter()
        .find(|e| e.components.is_empty())
    {
        return Err(ConfigError::Message(format!(
            "expansion '{}: {}' has no components",
            empty.name, empty.data_type
        )));
    }
    Ok(config)
}
