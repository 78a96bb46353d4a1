//! Styling policies for the two builders.
//!
//! Both builders share one block renderer; everything that differs between
//! them visually is a field here.

use eventdoc_layout::LayoutSizes;
use eventdoc_types::{Color, PixelSize};
use serde::{Deserialize, Serialize};

/// How a free-text block is broken into paragraphs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TextMode {
    /// One left-aligned paragraph per non-blank line.
    PerLine,
    /// The whole content as a single justified paragraph.
    Justified,
}

/// Font sizes are in half-points, spacing in twips, images in pixels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StylePolicy {
    pub font: String,
    pub body_size: u32,
    pub header_size: u32,
    pub title_size: u32,
    pub tagline_size: u32,
    pub heading_size: u32,
    pub block_title_size: u32,
    pub caption_size: u32,
    pub footer_size: u32,
    pub accent: Color,
    pub muted: Color,
    pub paragraph_after: u32,
    pub section_before: u32,
    pub logo_size: PixelSize,
    /// Spaces inserted between neighbouring logos.
    pub logo_gap: u32,
    pub layout: LayoutSizes,
    pub attendance_size: PixelSize,
    /// Empty paragraphs above the signature block.
    pub signature_spacing: u32,
    pub text_mode: TextMode,
    /// Draw cell borders on the metadata table.
    pub table_borders: bool,
}

impl Default for StylePolicy {
    fn default() -> Self {
        Self::template()
    }
}

impl StylePolicy {
    /// Conservative styling for the generic template documents.
    pub fn template() -> Self {
        Self {
            font: "Times New Roman".to_string(),
            body_size: 24,
            header_size: 28,
            title_size: 36,
            tagline_size: 24,
            heading_size: 28,
            block_title_size: 26,
            caption_size: 20,
            footer_size: 18,
            accent: Color::rgb(0x1F, 0x38, 0x64),
            muted: Color::gray(0x59),
            paragraph_after: 120,
            section_before: 240,
            logo_size: PixelSize::new(80, 80),
            logo_gap: 4,
            layout: LayoutSizes {
                large: PixelSize::new(500, 350),
                narrow_height: 200,
                row_width: 600,
                medium: PixelSize::new(180, 135),
            },
            attendance_size: PixelSize::new(600, 780),
            signature_spacing: 2,
            text_mode: TextMode::PerLine,
            table_borders: true,
        }
    }

    /// Styling that mirrors the live HTML preview.
    pub fn replica() -> Self {
        Self {
            header_size: 30,
            title_size: 40,
            tagline_size: 26,
            heading_size: 26,
            footer_size: 16,
            accent: Color::rgb(0x1A, 0x23, 0x7E),
            paragraph_after: 160,
            section_before: 320,
            logo_size: PixelSize::new(100, 100),
            logo_gap: 8,
            layout: LayoutSizes {
                large: PixelSize::new(550, 400),
                narrow_height: 220,
                row_width: 600,
                medium: PixelSize::new(190, 140),
            },
            attendance_size: PixelSize::new(600, 800),
            signature_spacing: 4,
            text_mode: TextMode::Justified,
            table_borders: false,
            ..Self::template()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replica_differs_where_the_preview_does() {
        let template = StylePolicy::template();
        let replica = StylePolicy::replica();
        assert!(replica.logo_size.width > template.logo_size.width);
        assert!(replica.logo_gap > template.logo_gap);
        assert!(replica.signature_spacing > template.signature_spacing);
        assert!(replica.footer_size < template.footer_size);
        assert_eq!(replica.font, "Times New Roman");
    }

    #[test]
    fn partial_json_overrides_defaults() {
        let policy: StylePolicy =
            serde_json::from_str(r##"{"bodySize": 22, "accent": "#000000", "textMode": "justified"}"##)
                .unwrap();
        assert_eq!(policy.body_size, 22);
        assert_eq!(policy.accent, Color::BLACK);
        assert_eq!(policy.text_mode, TextMode::Justified);
        assert_eq!(policy.title_size, StylePolicy::template().title_size);
    }
}
