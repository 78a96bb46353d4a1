use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Where the bytes of an attachment come from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", tag = "kind", content = "value")]
pub enum FileOrigin {
    /// Bytes already held in memory (e.g. a file picked in the authoring UI).
    Binary(Arc<Vec<u8>>),
    /// A data URL or remote locator that the resource loader can resolve.
    Reference(String),
}

/// An attendance sheet or miscellaneous file attached to a report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttachmentFile {
    pub name: String,
    /// Declared media type; inferred from the name when absent.
    #[serde(default)]
    pub mime_type: Option<String>,
    #[serde(default)]
    pub size: u64,
    pub origin: FileOrigin,
}

impl AttachmentFile {
    pub fn from_bytes(name: impl Into<String>, mime_type: Option<&str>, bytes: Vec<u8>) -> Self {
        let size = bytes.len() as u64;
        Self {
            name: name.into(),
            mime_type: mime_type.map(str::to_string),
            size,
            origin: FileOrigin::Binary(Arc::new(bytes)),
        }
    }

    pub fn from_reference(
        name: impl Into<String>,
        mime_type: Option<&str>,
        reference: impl Into<String>,
        size: u64,
    ) -> Self {
        Self {
            name: name.into(),
            mime_type: mime_type.map(str::to_string),
            size,
            origin: FileOrigin::Reference(reference.into()),
        }
    }

    /// Lower-cased extension of the original filename, if any.
    pub fn extension(&self) -> Option<String> {
        let (stem, ext) = self.name.rsplit_once('.')?;
        if stem.is_empty() || ext.is_empty() {
            return None;
        }
        Some(ext.to_ascii_lowercase())
    }

    /// Declared media type, lower-cased and stripped of parameters.
    pub fn declared_mime(&self) -> Option<String> {
        self.mime_type
            .as_deref()
            .map(|m| m.split(';').next().unwrap_or(m).trim().to_ascii_lowercase())
            .filter(|m| !m.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extension_and_mime() {
        let file = AttachmentFile::from_bytes("Sheet.PDF", Some("Application/PDF; q=1"), vec![1, 2]);
        assert_eq!(file.extension().as_deref(), Some("pdf"));
        assert_eq!(file.declared_mime().as_deref(), Some("application/pdf"));
        assert_eq!(file.size, 2);

        let hidden = AttachmentFile::from_bytes(".profile", None, vec![]);
        assert_eq!(hidden.extension(), None);
        assert_eq!(hidden.declared_mime(), None);
    }

    #[test]
    fn origin_serializes_tagged() {
        let file = AttachmentFile::from_reference("a.png", None, "https://example.org/a.png", 10);
        let json = serde_json::to_value(&file).unwrap();
        assert_eq!(json["origin"]["kind"], "reference");
        assert_eq!(json["origin"]["value"], "https://example.org/a.png");
    }
}
