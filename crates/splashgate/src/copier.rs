//! Post-build copy of the splash document into the production output.
//!
//! The copy is staged next to the destination and renamed into place, so a
//! failed run never leaves a truncated file behind. Failures are logged and
//! swallowed by [`PostBuildCopier::run`]: a missing splash document must not
//! fail a build that produced everything else.

use crate::document::SplashDocument;
use crate::error::{Error, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Copies the splash document into the output directory once bundling ends.
#[derive(Debug, Clone)]
pub struct PostBuildCopier {
    document: SplashDocument,
    out_dir: PathBuf,
}

impl PostBuildCopier {
    /// Create a copier from `document` into `out_dir`.
    ///
    /// `out_dir` is expected to exist by the time the copy runs; it is never
    /// created here.
    pub fn new(document: SplashDocument, out_dir: impl Into<PathBuf>) -> Self {
        Self {
            document,
            out_dir: out_dir.into(),
        }
    }

    /// Source document.
    pub fn document(&self) -> &SplashDocument {
        &self.document
    }

    /// Final location of the copy: `out_dir/<source file name>`.
    pub fn destination(&self) -> PathBuf {
        self.out_dir.join(self.document.file_name())
    }

    /// Copy the document, overwriting any previous copy.
    ///
    /// Returns the number of bytes written.
    ///
    /// # Errors
    ///
    /// - [`Error::Read`] if the source cannot be read; nothing is written
    /// - [`Error::Write`] if the staged file cannot be created in `out_dir`
    /// - [`Error::Persist`] if the staged file cannot replace the destination
    pub fn copy(&self) -> Result<u64> {
        let content = self.document.read_blocking()?;
        let destination = self.destination();
        let staged = staged_path(&self.out_dir, &destination);

        fs::write(&staged, &content).map_err(|source| {
            discard(&staged);
            Error::Write {
                path: staged.clone(),
                source,
            }
        })?;

        fs::rename(&staged, &destination).map_err(|source| {
            discard(&staged);
            Error::Persist {
                from: staged.clone(),
                to: destination.clone(),
                source,
            }
        })?;

        Ok(content.len() as u64)
    }

    /// Build-completion hook body: copy, then report the outcome.
    ///
    /// Never fails. Returns whether the copy succeeded.
    pub fn run(&self) -> bool {
        match self.copy() {
            Ok(bytes) => {
                tracing::info!(
                    "Copied {} to {} ({} bytes)",
                    self.document.source().display(),
                    self.destination().display(),
                    bytes
                );
                true
            }
            Err(e) => {
                tracing::error!("Error copying splash document: {}", e);
                false
            }
        }
    }
}

/// Hidden sibling of the destination used while writing.
fn staged_path(out_dir: &Path, destination: &Path) -> PathBuf {
    let name = destination
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    out_dir.join(format!(".{name}.tmp"))
}

/// Best-effort removal of a staged file after a failure.
fn discard(staged: &Path) {
    if staged.exists() {
        if let Err(e) = fs::remove_file(staged) {
            tracing::warn!(
                "Failed to clean up temporary file '{}': {}",
                staged.display(),
                e
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::sync::{Arc, Mutex};
    use tempfile::TempDir;

    fn copier(temp: &TempDir) -> PostBuildCopier {
        let document = SplashDocument::new(temp.path().join("splashscreen.html")).unwrap();
        PostBuildCopier::new(document, temp.path().join("dist"))
    }

    /// Collects formatted log output for assertions.
    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<u8>>>);

    impl Write for Captured {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    fn run_captured(copier: &PostBuildCopier) -> (bool, String) {
        let captured = Captured::default();
        let writer = captured.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_ansi(false)
            .with_writer(move || writer.clone())
            .finish();

        let ok = tracing::subscriber::with_default(subscriber, || copier.run());
        let output = String::from_utf8(captured.0.lock().unwrap().clone()).unwrap();
        (ok, output)
    }

    #[test]
    fn test_destination_keeps_file_name() {
        let temp = TempDir::new().unwrap();
        let copier = copier(&temp);
        assert_eq!(
            copier.destination(),
            temp.path().join("dist").join("splashscreen.html")
        );
    }

    #[test]
    fn test_copy_is_byte_identical() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join("dist")).unwrap();
        let content = b"<!doctype html>\n<div class=\"spinner\"></div>\xff";
        fs::write(temp.path().join("splashscreen.html"), content).unwrap();

        let copier = copier(&temp);
        let bytes = copier.copy().unwrap();

        assert_eq!(bytes, content.len() as u64);
        assert_eq!(fs::read(copier.destination()).unwrap(), content);
        assert!(!temp.path().join("dist/.splashscreen.html.tmp").exists());
    }

    #[test]
    fn test_second_copy_overwrites_first() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join("dist")).unwrap();
        let source = temp.path().join("splashscreen.html");
        let copier = copier(&temp);

        fs::write(&source, "a much longer first version").unwrap();
        copier.copy().unwrap();
        fs::write(&source, "second").unwrap();
        copier.copy().unwrap();
        copier.copy().unwrap();

        assert_eq!(fs::read(copier.destination()).unwrap(), b"second");
    }

    #[test]
    fn test_missing_source_creates_nothing() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join("dist")).unwrap();
        let copier = copier(&temp);

        let err = copier.copy().unwrap_err();
        assert!(matches!(err, Error::Read { .. }));
        assert_eq!(fs::read_dir(temp.path().join("dist")).unwrap().count(), 0);
    }

    #[test]
    fn test_missing_out_dir_is_a_write_error() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("splashscreen.html"), "splash").unwrap();
        let copier = copier(&temp);

        let err = copier.copy().unwrap_err();
        assert!(matches!(err, Error::Write { .. }));
        assert!(!temp.path().join("dist").exists());
    }

    #[test]
    fn test_rename_failure_discards_staged_file() {
        let temp = TempDir::new().unwrap();
        // A non-empty directory where the copy should land blocks the rename.
        fs::create_dir_all(temp.path().join("dist/splashscreen.html/inner")).unwrap();
        fs::write(temp.path().join("splashscreen.html"), "splash").unwrap();
        let copier = copier(&temp);

        let err = copier.copy().unwrap_err();
        assert!(matches!(err, Error::Persist { .. }));
        assert!(!temp.path().join("dist/.splashscreen.html.tmp").exists());

        let (ok, output) = run_captured(&copier);
        assert!(!ok);
        assert!(output.contains("ERROR"));
        assert!(!temp.path().join("dist/.splashscreen.html.tmp").exists());
        assert!(temp.path().join("dist/splashscreen.html/inner").is_dir());
    }

    #[test]
    fn test_run_logs_success() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join("dist")).unwrap();
        fs::write(temp.path().join("splashscreen.html"), "splash").unwrap();

        let (ok, output) = run_captured(&copier(&temp));
        assert!(ok);
        assert!(output.contains("INFO"));
        assert!(output.contains("Copied"));
    }

    #[test]
    fn test_run_logs_failure_without_panicking() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join("dist")).unwrap();

        let (ok, output) = run_captured(&copier(&temp));
        assert!(!ok);
        assert!(output.contains("ERROR"));
        assert!(output.contains("Error copying splash document"));
        assert!(!temp.path().join("dist/splashscreen.html").exists());
    }
}
