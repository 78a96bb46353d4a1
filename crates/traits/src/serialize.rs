use eventdoc_idf::DocumentTree;
use std::fmt::Debug;
use thiserror::Error;

/// A failure in the serializer. Always fatal for the build it occurs in.
#[derive(Error, Debug)]
pub enum SerializeError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Package error: {0}")]
    Zip(String),

    #[error("XML error: {0}")]
    Xml(String),

    #[error("Invalid document tree: {0}")]
    InvalidTree(String),
}

/// Turns a finished node tree into the bytes of a binary document container.
pub trait DocumentSerializer: Send + Sync + Debug {
    fn serialize(&self, tree: &DocumentTree) -> Result<Vec<u8>, SerializeError>;

    /// File extension (without the dot) of the produced container.
    fn extension(&self) -> &'static str;
}
