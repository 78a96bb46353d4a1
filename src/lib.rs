//! # eventdoc
//!
//! Turns structured event reports into word-processor documents.
//!
//! ```no_run
//! use eventdoc::{DocumentKind, InMemoryFileSaver, RenderMode, ReportEngine};
//! # async fn run(report: eventdoc::model::EventReport) -> Result<(), eventdoc::BuildError> {
//! let engine = ReportEngine::builder().build();
//! let saver = InMemoryFileSaver::new();
//! engine
//!     .generate_and_save(&report, RenderMode::Replica, DocumentKind::Full, &saver)
//!     .await?;
//! # Ok(())
//! # }
//! ```
//!
//! Remote image references are resolved through a [`RemoteFetcher`]. The
//! default engine only knows what an [`InMemoryFetcher`] has been given;
//! enable the `http` feature for [`HttpFetcher`].

pub use eventdoc_core::*;

pub use eventdoc_extract::{AttachmentTextExtractor, DocxTextExtractor, Extraction, FileKind};
pub use eventdoc_layout::{Arrangement, ArrangementKind, LayoutSizes, plan};
pub use eventdoc_render_docx::DocxSerializer;
#[cfg(feature = "http")]
pub use eventdoc_resource::HttpFetcher;
pub use eventdoc_resource::{
    BinaryResourceLoader, FilesystemFileSaver, InMemoryFetcher, InMemoryFileSaver, RemoteFetcher,
    ResourceError, ResourceRef,
};
pub use eventdoc_types::{Color, ImageSubtype, PixelSize};
