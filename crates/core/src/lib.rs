//! # eventdoc-core
//!
//! The document assembly engine for event reports.
//!
//! - **engine**: [`ReportEngine`] and its builder, the entry point for builds
//! - **template** / **replica**: the two layout strategies
//! - **render**: block rendering and sections shared by both strategies
//! - **style**: per-strategy styling policies
//! - **config** / **logos**: injected, read-only configuration
//! - **error**: the build-fatal error type
//!
//! A build walks the report in authored order and awaits each image fetch
//! and attachment extraction in turn. A resource that fails to load becomes
//! a placeholder; only an invalid report or a serializer failure aborts the
//! build.

// Re-export foundation crates
pub use eventdoc_idf as idf;
pub use eventdoc_model as model;
pub use eventdoc_traits as traits;

mod config;
mod engine;
mod error;
mod filename;
mod logos;
mod render;
mod replica;
mod style;
mod template;

pub use config::EngineConfig;
pub use engine::{DocumentKind, GeneratedDocument, RenderMode, ReportEngine, ReportEngineBuilder};
pub use error::BuildError;
pub use filename::report_filename;
pub use logos::LogoRegistry;
pub use render::BuildStats;
pub use style::{StylePolicy, TextMode};
