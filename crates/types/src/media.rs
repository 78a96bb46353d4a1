use serde::{Deserialize, Serialize};

/// Raster formats the serializer can embed inline.
///
/// Anything that cannot be identified is treated as [`ImageSubtype::Png`],
/// which is also the [`Default`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageSubtype {
    #[default]
    Png,
    #[serde(alias = "jpeg")]
    Jpg,
    Gif,
    Bmp,
}

impl ImageSubtype {
    /// File extension used for the media part inside the package.
    pub fn extension(self) -> &'static str {
        match self {
            ImageSubtype::Png => "png",
            ImageSubtype::Jpg => "jpg",
            ImageSubtype::Gif => "gif",
            ImageSubtype::Bmp => "bmp",
        }
    }

    pub fn mime_type(self) -> &'static str {
        match self {
            ImageSubtype::Png => "image/png",
            ImageSubtype::Jpg => "image/jpeg",
            ImageSubtype::Gif => "image/gif",
            ImageSubtype::Bmp => "image/bmp",
        }
    }

    /// Maps a mimetype (`image/jpeg`) or bare subtype/extension (`jpeg`, `JPG`)
    /// to a subtype. Returns `None` when the value names nothing we embed.
    pub fn from_declared(value: &str) -> Option<Self> {
        let value = value.trim().to_ascii_lowercase();
        let subtype = value.strip_prefix("image/").unwrap_or(&value);
        let subtype = subtype.split(';').next().unwrap_or(subtype).trim();
        match subtype {
            "png" => Some(ImageSubtype::Png),
            "jpg" | "jpeg" | "pjpeg" => Some(ImageSubtype::Jpg),
            "gif" => Some(ImageSubtype::Gif),
            "bmp" | "x-ms-bmp" | "x-bmp" => Some(ImageSubtype::Bmp),
            _ => None,
        }
    }

    /// Looks at the extension of a filename or URL path, ignoring query strings.
    pub fn from_path(path: &str) -> Option<Self> {
        let path = path.split(['?', '#']).next().unwrap_or(path);
        let (_, ext) = path.rsplit_once('.')?;
        if ext.contains('/') {
            return None;
        }
        Self::from_declared(ext)
    }
}
