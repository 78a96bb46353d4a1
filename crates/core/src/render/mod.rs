//! Rendering shared by both builders.
//!
//! Builders differ only in section order and in the [`StylePolicy`] they
//! pass in; block dispatch, omission rules and failure handling live here.

pub(crate) mod blocks;
pub(crate) mod nodes;
pub(crate) mod sections;

use crate::config::EngineConfig;
use crate::logos::LogoRegistry;
use crate::style::StylePolicy;
use eventdoc_extract::AttachmentTextExtractor;
use eventdoc_idf::{InlineImage, InlineNode};
use eventdoc_model::{AttachmentFile, FileOrigin};
use eventdoc_resource::{BinaryResourceLoader, ResourceRef};
use eventdoc_types::{PixelSize, TWIPS_PER_INCH};
use std::sync::Arc;

/// Text substituted for an image that could not be loaded.
pub(crate) const IMAGE_PLACEHOLDER: &str = "[Image could not be loaded]";

/// Counters collected while building one document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BuildStats {
    /// Content blocks rendered.
    pub blocks: usize,
    /// Images embedded, logos included.
    pub images: usize,
    /// Placeholder texts emitted for content that failed to load.
    pub placeholders: usize,
}

/// Per-build state. Created fresh for every build and dropped with it.
pub(crate) struct RenderContext<'a> {
    pub loader: &'a BinaryResourceLoader,
    pub extractor: &'a AttachmentTextExtractor,
    pub config: &'a EngineConfig,
    pub policy: &'a StylePolicy,
    pub logos: &'a LogoRegistry,
    pub stats: BuildStats,
}

impl<'a> RenderContext<'a> {
    /// Width between the page margins, in pixels at 96 DPI.
    pub fn content_width_px(&self) -> u32 {
        self.config.page.content_width() * 96 / TWIPS_PER_INCH
    }

    /// Loads an image for inline display.
    ///
    /// Any failure is logged and turned into a placeholder run; it never
    /// propagates. `hint` is a mimetype or filename consulted when the byte
    /// signature is inconclusive.
    pub async fn inline_image(
        &mut self,
        reference: ResourceRef<'_>,
        hint: Option<&str>,
        size: PixelSize,
        description: &str,
    ) -> InlineNode {
        let label = reference.describe();
        match self.loader.load_image(reference, hint).await {
            Ok(loaded) => {
                self.stats.images += 1;
                InlineNode::Image(InlineImage {
                    data: loaded.bytes,
                    subtype: loaded.subtype,
                    size,
                    description: description.to_string(),
                })
            }
            Err(e) => {
                log::warn!("Image '{}' ({}) could not be loaded: {}", description, label, e);
                self.placeholder_run(IMAGE_PLACEHOLDER)
            }
        }
    }

    /// An italic placeholder run, counted in the build statistics.
    pub fn placeholder_run(&mut self, text: &str) -> InlineNode {
        self.stats.placeholders += 1;
        InlineNode::text(text, nodes::body_run(self.policy).italic().colored(self.policy.muted))
    }
}

/// The loader reference for an attachment's bytes.
pub(crate) fn attachment_ref(file: &AttachmentFile) -> ResourceRef<'_> {
    match &file.origin {
        FileOrigin::Binary(data) => ResourceRef::Binary {
            data: Arc::clone(data),
            declared: file.mime_type.as_deref(),
        },
        FileOrigin::Reference(reference) => ResourceRef::parse(reference),
    }
}
