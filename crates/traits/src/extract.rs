use std::fmt::Debug;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExtractError {
    #[error("Not a readable document archive: {0}")]
    Archive(String),

    #[error("Malformed document XML: {0}")]
    Xml(String),

    #[error("Document part '{0}' is missing")]
    MissingPart(String),
}

/// Pulls plain text out of a word-processor document.
///
/// Paragraphs are separated by a single newline.
pub trait WordTextExtractor: Send + Sync + Debug {
    fn extract_text(&self, bytes: &[u8]) -> Result<String, ExtractError>;
}
