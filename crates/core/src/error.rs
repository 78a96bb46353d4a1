//! Defines the error type for document builds.

use eventdoc_model::ModelError;
use eventdoc_traits::{SaveError, SerializeError};
use thiserror::Error;

/// The only failures that abort a build. Everything a single block or
/// attachment can go wrong with is recovered inside the builders.
#[derive(Error, Debug)]
pub enum BuildError {
    #[error("Invalid report: {0}")]
    InvalidReport(#[from] ModelError),
    #[error("Serialization failed: {0}")]
    Serialize(#[from] SerializeError),
    #[error("Saving the document failed: {0}")]
    Save(#[from] SaveError),
    #[error("Configuration error: {0}")]
    Config(String),
}
