use eventdoc_model::AttachmentFile;

/// Broad category of an attachment, used to pick an extraction strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FileKind {
    WordDocument,
    PlainText,
    Pdf,
    Spreadsheet,
    Presentation,
    Image,
    Other,
}

impl FileKind {
    /// Classifies by declared mimetype first, then by filename extension.
    pub fn of(file: &AttachmentFile) -> Self {
        let from_mime = file.declared_mime().as_deref().and_then(Self::from_mime);
        from_mime
            .or_else(|| file.extension().as_deref().and_then(Self::from_extension))
            .unwrap_or(FileKind::Other)
    }

    pub fn from_mime(mime: &str) -> Option<Self> {
        let kind = match mime {
            "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
            | "application/msword" => FileKind::WordDocument,
            "application/pdf" => FileKind::Pdf,
            "text/csv" => FileKind::Spreadsheet,
            m if m.starts_with("text/plain") => FileKind::PlainText,
            m if m.starts_with("image/") => FileKind::Image,
            m if m.contains("spreadsheet") || m.contains("ms-excel") => FileKind::Spreadsheet,
            m if m.contains("presentation") || m.contains("ms-powerpoint") => {
                FileKind::Presentation
            }
            _ => return None,
        };
        Some(kind)
    }

    pub fn from_extension(ext: &str) -> Option<Self> {
        let kind = match ext {
            "docx" | "doc" => FileKind::WordDocument,
            "txt" | "text" | "log" | "md" => FileKind::PlainText,
            "pdf" => FileKind::Pdf,
            "xls" | "xlsx" | "ods" | "csv" => FileKind::Spreadsheet,
            "ppt" | "pptx" | "odp" => FileKind::Presentation,
            "png" | "jpg" | "jpeg" | "gif" | "bmp" | "webp" | "tif" | "tiff" => FileKind::Image,
            _ => return None,
        };
        Some(kind)
    }

    /// Human-readable label used in attachment placeholders.
    pub fn label(self) -> &'static str {
        match self {
            FileKind::WordDocument => "Word Document",
            FileKind::PlainText => "Text File",
            FileKind::Pdf => "PDF Document",
            FileKind::Spreadsheet => "Spreadsheet",
            FileKind::Presentation => "Presentation",
            FileKind::Image => "Image",
            FileKind::Other => "File",
        }
    }
}
