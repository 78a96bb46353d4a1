//! Resource loading for the eventdoc engine.
//!
//! ## Available pieces
//!
//! - [`BinaryResourceLoader`]: resolves embedded data URLs, remote locators and
//!   in-memory buffers into bytes plus a detected image subtype
//! - [`FilesystemFileSaver`]: writes finished documents below a base directory
//! - `HttpFetcher` (feature `http`): a `reqwest` based [`RemoteFetcher`]
//!
//! For convenience the in-memory collaborators from eventdoc-traits are
//! re-exported as well.

mod data_url;
mod detect;
mod filesystem;
#[cfg(feature = "http")]
mod http;
mod loader;

pub use data_url::{DataUrl, parse_data_url};
pub use detect::detect_subtype;
pub use filesystem::FilesystemFileSaver;
#[cfg(feature = "http")]
pub use http::HttpFetcher;
pub use loader::{BinaryResourceLoader, LoadedImage, RawResource, ResourceRef};

pub use eventdoc_traits::{InMemoryFetcher, InMemoryFileSaver, RemoteFetcher, ResourceError};
