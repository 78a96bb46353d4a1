//! RemoteFetcher trait for resolving non-embedded resource locators.
//!
//! The engine never performs network I/O itself; the embedding application
//! supplies a fetcher (an HTTP client, an object-store client, or the
//! in-memory fetcher below for tests).

use async_trait::async_trait;
use std::collections::HashMap;
use std::fmt::Debug;
use std::sync::{Arc, RwLock};
use thiserror::Error;

/// Error type for resource loading operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResourceError {
    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Request for '{url}' failed with status {status}")]
    Http { url: String, status: u16 },

    #[error("Failed to fetch '{url}': {message}")]
    Fetch { url: String, message: String },

    #[error("Invalid resource encoding: {0}")]
    InvalidEncoding(String),

    #[error("Unsupported resource format: {0}")]
    UnsupportedFormat(String),

    #[error("I/O error: {0}")]
    Io(String),
}

impl From<std::io::Error> for ResourceError {
    fn from(err: std::io::Error) -> Self {
        ResourceError::Io(err.to_string())
    }
}

/// Shared resource data type (reference-counted bytes).
pub type SharedResourceData = Arc<Vec<u8>>;

/// Fetches the bytes behind a remote locator.
///
/// A non-success response must be reported as an error; the caller turns
/// it into a placeholder and never retries.
#[async_trait]
pub trait RemoteFetcher: Send + Sync + Debug {
    async fn fetch(&self, url: &str) -> Result<SharedResourceData, ResourceError>;

    /// Returns a human-readable name for this fetcher (for logging/debugging).
    fn name(&self) -> &'static str;
}

/// A fetcher serving pre-populated bytes keyed by locator.
#[derive(Debug, Default)]
pub struct InMemoryFetcher {
    resources: RwLock<HashMap<String, SharedResourceData>>,
}

impl InMemoryFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// # Errors
    ///
    /// Returns `ResourceError::Fetch` if the internal lock is poisoned.
    pub fn add(&self, url: impl Into<String>, data: Vec<u8>) -> Result<(), ResourceError> {
        self.add_shared(url, Arc::new(data))
    }

    pub fn add_shared(
        &self,
        url: impl Into<String>,
        data: SharedResourceData,
    ) -> Result<(), ResourceError> {
        let url = url.into();
        let mut resources = self.resources.write().map_err(|_| ResourceError::Fetch {
            url: url.clone(),
            message: "resource store lock poisoned".to_string(),
        })?;
        resources.insert(url, data);
        Ok(())
    }

    /// Builder-style variant of [`InMemoryFetcher::add`] for test setup.
    pub fn with(self, url: impl Into<String>, data: Vec<u8>) -> Self {
        if let Ok(mut resources) = self.resources.write() {
            resources.insert(url.into(), Arc::new(data));
        }
        self
    }

    /// Returns 0 if the lock is poisoned.
    pub fn len(&self) -> usize {
        self.resources.read().map(|r| r.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl RemoteFetcher for InMemoryFetcher {
    async fn fetch(&self, url: &str) -> Result<SharedResourceData, ResourceError> {
        let resources = self.resources.read().map_err(|_| ResourceError::Fetch {
            url: url.to_string(),
            message: "resource store lock poisoned".to_string(),
        })?;
        resources
            .get(url)
            .cloned()
            .ok_or_else(|| ResourceError::NotFound(url.to_string()))
    }

    fn name(&self) -> &'static str {
        "InMemoryFetcher"
    }
}
