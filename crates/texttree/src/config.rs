//! Load configuration.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Result, TextTreeError};
use crate::tree::EntityStore;

/// Files at or above this size (in bytes) are skipped by default.
pub const DEFAULT_MAX_FILE_SIZE: u64 = 16 << 10; // 16 KB

/// Where to load a tree from and which files qualify.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoadConfig {
    /// Root directory to scan.
    pub root: PathBuf,
    /// Exclusive upper bound on file size; larger files are not indexed.
    #[serde(default = "default_max_file_size")]
    pub max_file_size: u64,
}

fn default_max_file_size() -> u64 {
    DEFAULT_MAX_FILE_SIZE
}

impl LoadConfig {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            max_file_size: DEFAULT_MAX_FILE_SIZE,
        }
    }

    pub fn with_max_file_size(mut self, max_file_size: u64) -> Self {
        self.max_file_size = max_file_size;
        self
    }

    /// Loads the tree described by this config.
    pub fn load(&self) -> Result<EntityStore> {
        EntityStore::from_config(self)
    }
}

/// Strips a single trailing `/` from the root path.
///
/// `/` itself is kept as is.
pub fn normalize_root(path: &Path) -> Result<PathBuf> {
    if path.as_os_str().is_empty() {
        return Err(TextTreeError::InvalidInput(
            "root path must not be empty".to_string(),
        ));
    }

    Ok(strip_trailing_separator(path))
}

#[cfg(unix)]
fn strip_trailing_separator(path: &Path) -> PathBuf {
    use std::ffi::OsStr;
    use std::os::unix::ffi::OsStrExt;

    match path.as_os_str().as_bytes().strip_suffix(b"/") {
        Some(trimmed) if !trimmed.is_empty() => PathBuf::from(OsStr::from_bytes(trimmed)),
        _ => path.to_path_buf(),
    }
}

#[cfg(not(unix))]
fn strip_trailing_separator(path: &Path) -> PathBuf {
    let Some(raw) = path.to_str() else {
        return path.to_path_buf();
    };

    match raw.strip_suffix('/') {
        Some(trimmed) if !trimmed.is_empty() => PathBuf::from(trimmed),
        _ => path.to_path_buf(),
    }
}
