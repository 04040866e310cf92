//! The splash document: a fixed source path whose contents are read fresh
//! on every access.

use crate::error::{Error, Result};
use std::ffi::OsStr;
use std::path::{Path, PathBuf};

/// Media type used when the document is served in development.
pub const HTML_CONTENT_TYPE: &str = "text/html; charset=utf-8";

/// Handle to the splash document on disk.
///
/// Only the location is stored. Contents are never cached, so edits made
/// while the dev server runs show up on the next request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplashDocument {
    source: PathBuf,
}

impl SplashDocument {
    /// Create a handle for the document at `source`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingFileName`] if `source` has no final component
    /// (e.g. `/` or `..`), since the production copy is named after it.
    pub fn new(source: impl Into<PathBuf>) -> Result<Self> {
        let source = source.into();
        if source.file_name().is_none() {
            return Err(Error::MissingFileName(source));
        }
        Ok(Self { source })
    }

    /// Location of the document.
    pub fn source(&self) -> &Path {
        &self.source
    }

    /// Base name shared by the source and its production copy.
    pub fn file_name(&self) -> &OsStr {
        // Checked in `new`.
        self.source.file_name().unwrap_or_default()
    }

    /// Read the current contents.
    pub async fn read(&self) -> Result<Vec<u8>> {
        tokio::fs::read(&self.source).await.map_err(|source| Error::Read {
            path: self.source.clone(),
            source,
        })
    }

    /// Blocking variant of [`read`](Self::read) for the build lifecycle.
    pub fn read_blocking(&self) -> Result<Vec<u8>> {
        std::fs::read(&self.source).map_err(|source| Error::Read {
            path: self.source.clone(),
            source,
        })
    }
}
