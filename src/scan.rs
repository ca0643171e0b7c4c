//! Candidate discovery and the collection run
//!
//!     Walks a directory tree for scripts whose file name matches a pattern (by default only
//!     `main.bro`), extracts each one and feeds the groups to a [`ResourceBuilder`]. Documents
//!     that fail extraction or validation are logged and skipped; the run goes on.
//!
//!     Every file is considered: hidden files and ignore files (.gitignore and friends) are not
//!     honoured. Symlinks are not followed.

use crate::error::ScanError;
use crate::extraction::Extractor;
use crate::resource::ResourceBuilder;
use ignore::WalkBuilder;
use once_cell::sync::Lazy;
use regex::Regex;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Default candidate name: the entry script of a Bro package
pub static MAIN_BRO: Lazy<Regex> = Lazy::new(|| Regex::new(r"^main\.bro$").unwrap());

/// Which files to consider
#[derive(Debug, Clone)]
pub struct ScanOptions {
    /// Matched against the file name only, not the full path
    pub file_pattern: Regex,
}

impl Default for ScanOptions {
    fn default() -> Self {
        ScanOptions {
            file_pattern: MAIN_BRO.clone(),
        }
    }
}

/// Outcome of a collection run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Summary {
    /// Documents whose group made it into the builder
    pub extracted: Vec<PathBuf>,
    /// Documents that were skipped
    pub skipped: Vec<PathBuf>,
}

/// List matching regular files under `root`, sorted by path
pub fn candidates(root: &Path, options: &ScanOptions) -> Result<Vec<PathBuf>, ScanError> {
    fs::metadata(root).map_err(|source| ScanError::Root {
        path: root.to_path_buf(),
        source,
    })?;

    let mut found = Vec::new();
    for entry in WalkBuilder::new(root).standard_filters(false).build() {
        let entry = entry?;
        if !entry.file_type().is_some_and(|t| t.is_file()) {
            continue;
        }
        let name = entry.file_name().to_string_lossy();
        if options.file_pattern.is_match(&name) {
            found.push(entry.into_path());
        } else {
            debug!(path = %entry.path().display(), "skipping non matching file");
        }
    }
    found.sort();
    Ok(found)
}

/// Extract every candidate under `root` into `builder`
pub fn collect(
    root: &Path,
    extractor: &Extractor,
    builder: &mut ResourceBuilder,
    options: &ScanOptions,
) -> Result<Summary, ScanError> {
    let mut summary = Summary::default();

    for path in candidates(root, options)? {
        let added = extractor
            .extract_path(&path)
            .map_err(|e| e.to_string())
            .and_then(|group| {
                let fields = group.fields().len();
                builder
                    .add_group(group)
                    .map(|()| fields)
                    .map_err(|e| e.to_string())
            });

        match added {
            Ok(fields) => {
                debug!(path = %path.display(), fields, "extracted names");
                summary.extracted.push(path);
            }
            Err(reason) => {
                warn!(path = %path.display(), %reason, "failed to process document");
                summary.skipped.push(path);
            }
        }
    }

    Ok(summary)
}
