//! The binary resource loader.
//!
//! A reference is one of three shapes: an embedded `data:` URL, a remote
//! locator handed to the configured [`RemoteFetcher`] (this includes `blob:`
//! handles and relative asset paths), or bytes already held in memory.

use crate::data_url::parse_data_url;
use crate::detect::detect_subtype;
use eventdoc_traits::{RemoteFetcher, ResourceError, SharedResourceData};
use eventdoc_types::ImageSubtype;
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq)]
pub enum ResourceRef<'a> {
    Embedded(&'a str),
    Remote(&'a str),
    Binary {
        data: SharedResourceData,
        /// Declared mimetype or original filename, used as a detection hint.
        declared: Option<&'a str>,
    },
}

impl<'a> ResourceRef<'a> {
    /// Classifies a textual reference.
    pub fn parse(reference: &'a str) -> Self {
        let trimmed = reference.trim();
        if trimmed
            .get(..5)
            .is_some_and(|scheme| scheme.eq_ignore_ascii_case("data:"))
        {
            ResourceRef::Embedded(trimmed)
        } else {
            ResourceRef::Remote(trimmed)
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            ResourceRef::Embedded(_) => "embedded",
            ResourceRef::Remote(_) => "remote",
            ResourceRef::Binary { .. } => "binary",
        }
    }

    /// A short label for log lines. Embedded payloads are not echoed.
    pub fn describe(&self) -> String {
        match self {
            ResourceRef::Embedded(uri) => {
                let header = uri.split(',').next().unwrap_or("data:");
                format!("{header},...")
            }
            ResourceRef::Remote(url) => (*url).to_string(),
            ResourceRef::Binary { data, declared } => {
                format!("{} bytes ({})", data.len(), declared.unwrap_or("undeclared"))
            }
        }
    }
}

/// Bytes resolved from a reference, together with whatever type hint came with them.
#[derive(Debug, Clone, PartialEq)]
pub struct RawResource {
    pub bytes: SharedResourceData,
    pub declared: Option<String>,
}

/// An image ready to embed.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedImage {
    pub bytes: SharedResourceData,
    pub subtype: ImageSubtype,
}

#[derive(Debug, Clone)]
pub struct BinaryResourceLoader {
    fetcher: Arc<dyn RemoteFetcher>,
}

impl BinaryResourceLoader {
    pub fn new(fetcher: Arc<dyn RemoteFetcher>) -> Self {
        Self { fetcher }
    }

    /// Resolves a reference into its bytes.
    pub async fn load(&self, reference: ResourceRef<'_>) -> Result<RawResource, ResourceError> {
        let kind = reference.kind();
        let raw = match reference {
            ResourceRef::Embedded(uri) => {
                let decoded = parse_data_url(uri)?;
                RawResource {
                    bytes: Arc::new(decoded.data),
                    declared: decoded.mime,
                }
            }
            ResourceRef::Remote(url) => {
                if url.is_empty() {
                    return Err(ResourceError::NotFound("empty reference".to_string()));
                }
                let bytes = self.fetcher.fetch(url).await?;
                RawResource {
                    bytes,
                    declared: Some(url.to_string()),
                }
            }
            ResourceRef::Binary { data, declared } => RawResource {
                bytes: data,
                declared: declared.map(str::to_string),
            },
        };
        log::debug!("Loaded {} resource ({} bytes)", kind, raw.bytes.len());
        Ok(raw)
    }

    /// Resolves a reference and decides which subtype to embed it as.
    ///
    /// `hint` (a mimetype or filename) takes precedence over the hint the
    /// reference itself carried; both only matter when the byte signature
    /// is inconclusive.
    pub async fn load_image(
        &self,
        reference: ResourceRef<'_>,
        hint: Option<&str>,
    ) -> Result<LoadedImage, ResourceError> {
        let raw = self.load(reference).await?;
        let subtype = detect_subtype(&raw.bytes, hint.or(raw.declared.as_deref()))?;
        Ok(LoadedImage {
            bytes: raw.bytes,
            subtype,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use eventdoc_traits::InMemoryFetcher;

    const PNG_MAGIC: &[u8] = b"\x89PNG\r\n\x1a\n\0\0\0\rIHDR";

    fn loader(fetcher: InMemoryFetcher) -> BinaryResourceLoader {
        BinaryResourceLoader::new(Arc::new(fetcher))
    }

    #[test]
    fn classifies_references() {
        assert_eq!(ResourceRef::parse(" DATA:image/png;base64,AA==").kind(), "embedded");
        assert_eq!(ResourceRef::parse("https://cdn.test/a.png").kind(), "remote");
        assert_eq!(ResourceRef::parse("blob:http://localhost/1234").kind(), "remote");
        assert_eq!(ResourceRef::parse("data:,x").describe(), "data:,...");
    }

    #[tokio::test]
    async fn loads_embedded_image() {
        let loader = loader(InMemoryFetcher::new());
        // "/9j/" is the base64 prefix of a JPEG signature
        let image = loader
            .load_image(ResourceRef::parse("data:image/png;base64,/9j/4AAQSkZJRg=="), None)
            .await
            .unwrap();
        assert_eq!(image.subtype, ImageSubtype::Jpg);
    }

    #[tokio::test]
    async fn upper_case_data_scheme_decodes() {
        let loader = loader(InMemoryFetcher::new());
        let reference = ResourceRef::parse("DATA:image/png;base64,iVBORw0KGgoAAAANSUhEUg==");
        assert_eq!(reference.kind(), "embedded");
        let raw = loader.load(reference).await.unwrap();
        assert_eq!(raw.declared.as_deref(), Some("image/png"));
        assert_eq!(&raw.bytes[..4], b"\x89PNG");

        let image = loader
            .load_image(ResourceRef::parse(" Data:,GIF89a"), None)
            .await
            .unwrap();
        assert_eq!(image.subtype, ImageSubtype::Gif);
    }

    #[tokio::test]
    async fn caller_hint_overrides_declared_type() {
        let loader = loader(InMemoryFetcher::new());
        let image = loader
            .load_image(
                ResourceRef::Binary {
                    data: Arc::new(b"????".to_vec()),
                    declared: Some("image/png"),
                },
                Some("scan.bmp"),
            )
            .await
            .unwrap();
        assert_eq!(image.subtype, ImageSubtype::Bmp);
    }

    #[tokio::test]
    async fn loads_remote_image_via_fetcher() {
        let loader = loader(InMemoryFetcher::new().with("/logos/bvm.png", PNG_MAGIC.to_vec()));
        let image = loader
            .load_image(ResourceRef::parse("/logos/bvm.png"), None)
            .await
            .unwrap();
        assert_eq!(image.subtype, ImageSubtype::Png);
        assert_eq!(image.bytes.len(), PNG_MAGIC.len());
    }

    #[tokio::test]
    async fn missing_remote_resource_is_an_error() {
        let loader = loader(InMemoryFetcher::new());
        let result = loader
            .load_image(ResourceRef::parse("https://cdn.test/gone.png"), None)
            .await;
        assert!(matches!(result, Err(ResourceError::NotFound(_))));
        assert!(loader.load(ResourceRef::parse("   ")).await.is_err());
    }

    #[tokio::test]
    async fn binary_reference_keeps_declared_hint() {
        let loader = loader(InMemoryFetcher::new());
        let raw = loader
            .load(ResourceRef::Binary {
                data: Arc::new(b"hello".to_vec()),
                declared: Some("text/plain"),
            })
            .await
            .unwrap();
        assert_eq!(raw.declared.as_deref(), Some("text/plain"));
        assert_eq!(&*raw.bytes, b"hello");
    }
}
