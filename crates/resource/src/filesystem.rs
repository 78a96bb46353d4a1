//! Filesystem-based file saver for native platforms.
//!
//! Documents are written below a base directory. Filenames that would
//! resolve outside it (e.g. `../../etc/cron.d/x`) are rejected.

use async_trait::async_trait;
use eventdoc_traits::{FileSaver, SaveError};
use std::path::{Component, Path, PathBuf};

#[derive(Debug)]
pub struct FilesystemFileSaver {
    base_path: PathBuf,
}

impl FilesystemFileSaver {
    /// Creates a saver rooted at `base_path`. The directory is created on
    /// first save if it does not exist yet.
    pub fn new<P: AsRef<Path>>(base_path: P) -> Self {
        Self {
            base_path: base_path.as_ref().to_path_buf(),
        }
    }

    pub fn base(&self) -> &Path {
        &self.base_path
    }

    /// Resolves `filename` below the base directory.
    ///
    /// Returns `None` for absolute paths and for anything containing `..`.
    fn resolve_path_safe(&self, filename: &str) -> Option<PathBuf> {
        if filename.trim().is_empty() || Path::new(filename).is_absolute() {
            return None;
        }
        for component in Path::new(filename).components() {
            match component {
                Component::Normal(_) | Component::CurDir => {}
                Component::ParentDir | Component::RootDir | Component::Prefix(_) => return None,
            }
        }
        Some(self.base_path.join(filename))
    }
}

#[async_trait]
impl FileSaver for FilesystemFileSaver {
    async fn save(&self, blob: &[u8], filename: &str) -> Result<String, SaveError> {
        let full_path = self
            .resolve_path_safe(filename)
            .ok_or_else(|| SaveError::InvalidFilename(filename.to_string()))?;

        if let Some(parent) = full_path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        tokio::fs::write(&full_path, blob).await?;
        log::info!("Saved {} bytes to {}", blob.len(), full_path.display());
        Ok(full_path.display().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_filesystem_saver_writes_file() {
        let dir = tempdir().unwrap();
        let saver = FilesystemFileSaver::new(dir.path());

        let location = saver.save(b"PK", "robotics_report.docx").await.unwrap();
        assert!(location.ends_with("robotics_report.docx"));
        let written = std::fs::read(dir.path().join("robotics_report.docx")).unwrap();
        assert_eq!(written, b"PK");
    }

    #[tokio::test]
    async fn test_filesystem_saver_creates_missing_base() {
        let dir = tempdir().unwrap();
        let saver = FilesystemFileSaver::new(dir.path().join("out/reports"));

        saver.save(b"x", "nested/a.docx").await.unwrap();
        assert!(dir.path().join("out/reports/nested/a.docx").exists());
    }

    // Security tests for path traversal prevention

    #[tokio::test]
    async fn test_filesystem_saver_blocks_path_traversal() {
        let dir = tempdir().unwrap();
        let saver = FilesystemFileSaver::new(dir.path());

        for name in ["../escape.docx", "a/../../b.docx", "/etc/passwd", ""] {
            let result = saver.save(b"x", name).await;
            assert!(
                matches!(result, Err(SaveError::InvalidFilename(_))),
                "{name:?} should be rejected"
            );
        }
    }
}
