use crate::docx::DocxTextExtractor;
use crate::kind::FileKind;
use crate::text::decode_text;
use eventdoc_model::{AttachmentFile, FileOrigin};
use eventdoc_resource::{BinaryResourceLoader, ResourceRef};
use eventdoc_traits::WordTextExtractor;
use std::sync::Arc;

fn failure_marker(name: &str) -> String {
    format!("[Could not extract text from {name}]")
}

/// Display text produced for one attachment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Extraction {
    /// Text read from the file, or the fixed description of a type without text.
    Text(String),
    /// The file could not be read or parsed. Holds the marker to display instead.
    Failed(String),
}

impl Extraction {
    fn failed(name: &str) -> Self {
        Extraction::Failed(failure_marker(name))
    }

    pub fn as_str(&self) -> &str {
        match self {
            Extraction::Text(text) | Extraction::Failed(text) => text,
        }
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, Extraction::Failed(_))
    }
}

/// Produces display text for any attachment.
#[derive(Debug, Clone)]
pub struct AttachmentTextExtractor {
    word: Arc<dyn WordTextExtractor>,
}

impl Default for AttachmentTextExtractor {
    fn default() -> Self {
        Self::new(Arc::new(DocxTextExtractor::new()))
    }
}

impl AttachmentTextExtractor {
    pub fn new(word: Arc<dyn WordTextExtractor>) -> Self {
        Self { word }
    }

    /// Extracts text from bytes already in hand.
    pub fn extract(&self, file: &AttachmentFile, bytes: &[u8]) -> Extraction {
        let name = file.name.as_str();
        let text = match FileKind::of(file) {
            FileKind::WordDocument => match self.word.extract_text(bytes) {
                Ok(text) => text,
                Err(e) => {
                    log::warn!("Text extraction failed for '{}': {}", name, e);
                    return Extraction::failed(name);
                }
            },
            FileKind::PlainText => decode_text(bytes),
            FileKind::Pdf => format!(
                "[PDF Document: {name}]\nThis PDF file is attached to the report. \
                 Please refer to the original file for its contents."
            ),
            FileKind::Spreadsheet => format!(
                "[Spreadsheet: {name}]\nThis spreadsheet is attached to the report. \
                 Please refer to the original file for its data."
            ),
            FileKind::Image => format!(
                "[Image: {name}]\nThis image is attached to the report. \
                 Please refer to the original file."
            ),
            FileKind::Presentation | FileKind::Other => {
                let mime = file.declared_mime().unwrap_or_else(|| "unknown".to_string());
                format!(
                    "[Unsupported file type: {mime}]\nText extraction is not available for {name}."
                )
            }
        };
        Extraction::Text(text)
    }

    /// Resolves the attachment's bytes through `loader`, then extracts.
    pub async fn extract_attachment(
        &self,
        loader: &BinaryResourceLoader,
        file: &AttachmentFile,
    ) -> Extraction {
        let kind = FileKind::of(file);
        if !matches!(kind, FileKind::WordDocument | FileKind::PlainText) {
            return self.extract(file, &[]);
        }

        let reference = match &file.origin {
            FileOrigin::Binary(data) => ResourceRef::Binary {
                data: Arc::clone(data),
                declared: file.mime_type.as_deref(),
            },
            FileOrigin::Reference(reference) => ResourceRef::parse(reference),
        };
        match loader.load(reference).await {
            Ok(raw) => self.extract(file, &raw.bytes),
            Err(e) => {
                log::warn!("Could not load attachment '{}': {}", file.name, e);
                Extraction::failed(&file.name)
            }
        }
    }
}
