//! Discovery of available locales from a filesystem-like directory listing.

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;

/// External source enumerating available locale codes.
///
/// Implementations are supplied by the host; the filesystem implementation
/// below treats each child directory name as a locale code. Failure to
/// enumerate degrades to an empty listing, never an error.
pub trait LocaleScanner: Send + Sync {
    /// Enumerate available locale codes. Order should be deterministic.
    fn scan(&self) -> Vec<String>;
}

/// Error enumerating a locale directory.
#[derive(Debug, Error)]
pub enum ScanError {
    #[error("locale directory {path} is not readable")]
    Unreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Scans a directory of per-locale subdirectories (e.g. a `lang/` tree where
/// each child directory is named after its locale code).
#[derive(Debug, Clone)]
pub struct FsLocaleScanner {
    root: PathBuf,
}

impl FsLocaleScanner {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Enumerate child directory names, sorted for a deterministic catalog.
    pub fn try_scan(&self) -> Result<Vec<String>, ScanError> {
        let entries = std::fs::read_dir(&self.root).map_err(|source| ScanError::Unreadable {
            path: self.root.clone(),
            source,
        })?;

        let mut codes = Vec::new();
        for entry in entries.flatten() {
            let path = entry.path();
            if path.is_dir() {
                if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
                    codes.push(name.to_string());
                }
            }
        }
        codes.sort();
        Ok(codes)
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl LocaleScanner for FsLocaleScanner {
    fn scan(&self) -> Vec<String> {
        self.try_scan().unwrap_or_else(|e| {
            debug!("locale directory scan skipped: {}", e);
            Vec::new()
        })
    }
}
