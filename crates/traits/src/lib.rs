//! Narrow interfaces the assembly engine consumes: remote fetching, word
//! document text extraction, document serialization and file saving.
//! In-memory implementations are provided for tests and embedding.

pub mod extract;
pub mod resource;
pub mod save;
pub mod serialize;

pub use extract::{ExtractError, WordTextExtractor};
pub use resource::{InMemoryFetcher, RemoteFetcher, ResourceError, SharedResourceData};
pub use save::{FileSaver, InMemoryFileSaver, SaveError};
pub use serialize::{DocumentSerializer, SerializeError};
