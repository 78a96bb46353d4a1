//! In-memory representation of an event report.
//!
//! The model is pure data: the authoring side owns it and the engine only
//! ever borrows it for the duration of a build. Field names serialize in
//! camelCase so a report saved by the authoring store deserializes directly.

mod attachment;
mod block;
mod report;

pub use attachment::{AttachmentFile, FileOrigin};
pub use block::{BlockKind, ContentBlock, ImageBlock, ImageLayout};
pub use report::{
    ChiefGuest, DateRange, EventReport, FacultyCoordinator, LogoRef, ModelError, ReportStatus,
    StudentCoordinator,
};
