use async_trait::async_trait;
use std::collections::HashMap;
use std::fmt::Debug;
use std::sync::{Arc, RwLock};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SaveError {
    #[error("Invalid filename '{0}'")]
    InvalidFilename(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Hands a finished document to its destination.
#[async_trait]
pub trait FileSaver: Send + Sync + Debug {
    /// Stores `blob` under `filename` and returns where it ended up.
    async fn save(&self, blob: &[u8], filename: &str) -> Result<String, SaveError>;
}

/// Keeps saved documents in memory, keyed by filename.
#[derive(Debug, Default)]
pub struct InMemoryFileSaver {
    files: RwLock<HashMap<String, Arc<Vec<u8>>>>,
}

impl InMemoryFileSaver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, filename: &str) -> Option<Arc<Vec<u8>>> {
        self.files.read().ok()?.get(filename).cloned()
    }

    pub fn filenames(&self) -> Vec<String> {
        let mut names: Vec<String> = self
            .files
            .read()
            .map(|f| f.keys().cloned().collect())
            .unwrap_or_default();
        names.sort();
        names
    }
}

#[async_trait]
impl FileSaver for InMemoryFileSaver {
    async fn save(&self, blob: &[u8], filename: &str) -> Result<String, SaveError> {
        if filename.trim().is_empty() {
            return Err(SaveError::InvalidFilename(filename.to_string()));
        }
        let mut files = self
            .files
            .write()
            .map_err(|_| std::io::Error::other("file store lock poisoned"))?;
        files.insert(filename.to_string(), Arc::new(blob.to_vec()));
        Ok(format!("memory://{filename}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn stores_and_returns_blob() {
        let saver = InMemoryFileSaver::new();
        let location = saver.save(b"doc", "a_report.docx").await.unwrap();
        assert_eq!(location, "memory://a_report.docx");
        assert_eq!(saver.get("a_report.docx").as_deref().map(Vec::as_slice), Some(&b"doc"[..]));
        assert_eq!(saver.filenames(), vec!["a_report.docx".to_string()]);
    }

    #[tokio::test]
    async fn rejects_blank_filename() {
        let saver = InMemoryFileSaver::new();
        assert!(matches!(
            saver.save(b"doc", " ").await,
            Err(SaveError::InvalidFilename(_))
        ));
    }
}
