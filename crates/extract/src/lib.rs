//! Attachment text extraction.
//!
//! [`AttachmentTextExtractor`] turns any attached file into display text. It
//! never fails: unsupported types and broken files yield a fixed placeholder.

mod docx;
mod extractor;
mod kind;
mod text;

pub use docx::DocxTextExtractor;
pub use extractor::{AttachmentTextExtractor, Extraction};
pub use kind::FileKind;
pub use text::decode_text;
