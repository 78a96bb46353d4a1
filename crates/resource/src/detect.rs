use eventdoc_traits::ResourceError;
use eventdoc_types::ImageSubtype;
use image::ImageFormat;

/// Decides which subtype to embed `bytes` as.
///
/// The byte signature wins. When the signature is unknown the declared
/// mimetype or extension is used, and failing that PNG. A signature that is
/// recognized but cannot be embedded (WebP, TIFF, ...) is an error so the
/// caller can substitute a placeholder instead of a corrupt image.
pub fn detect_subtype(bytes: &[u8], declared: Option<&str>) -> Result<ImageSubtype, ResourceError> {
    if bytes.is_empty() {
        return Err(ResourceError::InvalidEncoding("empty image payload".to_string()));
    }

    if let Ok(format) = image::guess_format(bytes) {
        return match format {
            ImageFormat::Png => Ok(ImageSubtype::Png),
            ImageFormat::Jpeg => Ok(ImageSubtype::Jpg),
            ImageFormat::Gif => Ok(ImageSubtype::Gif),
            ImageFormat::Bmp => Ok(ImageSubtype::Bmp),
            other => Err(ResourceError::UnsupportedFormat(format!("{other:?}"))),
        };
    }

    let from_declared = declared.and_then(|d| {
        ImageSubtype::from_declared(d).or_else(|| ImageSubtype::from_path(d))
    });
    match from_declared {
        Some(subtype) => Ok(subtype),
        None => {
            log::debug!(
                "Could not determine image subtype (declared: {:?}); defaulting to PNG",
                declared
            );
            Ok(ImageSubtype::default())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PNG_MAGIC: &[u8] = b"\x89PNG\r\n\x1a\n\0\0\0\rIHDR";
    const JPEG_MAGIC: &[u8] = &[0xFF, 0xD8, 0xFF, 0xE0, 0, 0x10, b'J', b'F', b'I', b'F'];

    #[test]
    fn signature_beats_declared_type() {
        assert_eq!(detect_subtype(JPEG_MAGIC, Some("image/png")), Ok(ImageSubtype::Jpg));
        assert_eq!(detect_subtype(PNG_MAGIC, Some("photo.gif")), Ok(ImageSubtype::Png));
        assert_eq!(detect_subtype(b"GIF89a....", None), Ok(ImageSubtype::Gif));
    }

    #[test]
    fn unknown_signature_uses_declared_then_default() {
        assert_eq!(detect_subtype(b"????", Some("image/bmp")), Ok(ImageSubtype::Bmp));
        assert_eq!(detect_subtype(b"????", Some("https://x/a.jpeg?w=2")), Ok(ImageSubtype::Jpg));
        assert_eq!(detect_subtype(b"????", Some("image/x-unknown")), Ok(ImageSubtype::Png));
        assert_eq!(detect_subtype(b"????", None), Ok(ImageSubtype::Png));
    }

    #[test]
    fn non_embeddable_signature_is_rejected() {
        let webp = b"RIFF\x00\x00\x00\x00WEBPVP8 ";
        assert!(matches!(
            detect_subtype(webp, Some("image/png")),
            Err(ResourceError::UnsupportedFormat(_))
        ));
        assert!(matches!(
            detect_subtype(&[], None),
            Err(ResourceError::InvalidEncoding(_))
        ));
    }
}
