use serde::{Deserialize, Serialize};

/// How the images of a multi-image block are arranged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageLayout {
    #[default]
    Single,
    Row,
    Grid,
}

impl ImageLayout {
    fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "single" => Some(ImageLayout::Single),
            "row" => Some(ImageLayout::Row),
            "grid" => Some(ImageLayout::Grid),
            _ => None,
        }
    }

    fn as_str(self) -> &'static str {
        match self {
            ImageLayout::Single => "single",
            ImageLayout::Row => "row",
            ImageLayout::Grid => "grid",
        }
    }
}

/// Payload of an `image` block.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ImageBlock {
    /// Legacy single-image reference.
    pub image_url: Option<String>,
    pub image_urls: Vec<String>,
    pub layout: Option<ImageLayout>,
    pub caption: Option<String>,
    pub credit: Option<String>,
}

impl ImageBlock {
    pub fn new(urls: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            image_urls: urls.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    pub fn with_layout(mut self, layout: ImageLayout) -> Self {
        self.layout = Some(layout);
        self
    }

    pub fn with_caption(mut self, caption: impl Into<String>) -> Self {
        self.caption = Some(caption.into());
        self
    }

    pub fn with_credit(mut self, credit: impl Into<String>) -> Self {
        self.credit = Some(credit.into());
        self
    }

    /// The references to render. The list form wins whenever it holds at
    /// least one non-blank entry; otherwise the legacy field is used.
    pub fn effective_images(&self) -> Vec<&str> {
        let listed: Vec<&str> = self
            .image_urls
            .iter()
            .map(String::as_str)
            .filter(|u| !u.trim().is_empty())
            .collect();
        if !listed.is_empty() {
            return listed;
        }
        self.image_url
            .as_deref()
            .filter(|u| !u.trim().is_empty())
            .into_iter()
            .collect()
    }

    pub fn effective_layout(&self) -> ImageLayout {
        self.layout.unwrap_or_default()
    }
}

/// Type-specific payload of a [`ContentBlock`].
#[derive(Debug, Clone, PartialEq)]
pub enum BlockKind {
    Text { content: String },
    Achievement { content: String },
    Quote { content: String },
    Image(ImageBlock),
}

impl BlockKind {
    pub fn type_name(&self) -> &'static str {
        match self {
            BlockKind::Text { .. } => "text",
            BlockKind::Achievement { .. } => "achievement",
            BlockKind::Quote { .. } => "quote",
            BlockKind::Image(_) => "image",
        }
    }
}

/// One user-authored unit of report content.
///
/// On the wire a block is a flat object with a `type` discriminator. Types
/// the engine does not know are read as `text`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawBlock", into = "RawBlock")]
pub struct ContentBlock {
    pub id: String,
    pub title: Option<String>,
    pub kind: BlockKind,
}

impl ContentBlock {
    pub fn text(id: impl Into<String>, content: impl Into<String>) -> Self {
        Self::new(id, BlockKind::Text { content: content.into() })
    }

    pub fn achievement(id: impl Into<String>, content: impl Into<String>) -> Self {
        Self::new(id, BlockKind::Achievement { content: content.into() })
    }

    pub fn quote(id: impl Into<String>, content: impl Into<String>) -> Self {
        Self::new(id, BlockKind::Quote { content: content.into() })
    }

    pub fn image(id: impl Into<String>, image: ImageBlock) -> Self {
        Self::new(id, BlockKind::Image(image))
    }

    fn new(id: impl Into<String>, kind: BlockKind) -> Self {
        Self {
            id: id.into(),
            title: None,
            kind,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Title with surrounding whitespace removed, `None` when blank.
    pub fn display_title(&self) -> Option<&str> {
        self.title.as_deref().map(str::trim).filter(|t| !t.is_empty())
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawBlock {
    #[serde(default)]
    id: String,
    #[serde(rename = "type", default)]
    block_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    content: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    image_url: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    image_urls: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    layout: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    caption: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    credit: Option<String>,
}

impl From<RawBlock> for ContentBlock {
    fn from(raw: RawBlock) -> Self {
        let content = raw.content.unwrap_or_default();
        let kind = match raw.block_type.trim().to_ascii_lowercase().as_str() {
            "image" => BlockKind::Image(ImageBlock {
                image_url: raw.image_url,
                image_urls: raw.image_urls,
                layout: raw.layout.as_deref().and_then(ImageLayout::parse),
                caption: raw.caption,
                credit: raw.credit,
            }),
            "quote" => BlockKind::Quote { content },
            "achievement" => BlockKind::Achievement { content },
            _ => BlockKind::Text { content },
        };
        ContentBlock {
            id: raw.id,
            title: raw.title,
            kind,
        }
    }
}

impl From<ContentBlock> for RawBlock {
    fn from(block: ContentBlock) -> Self {
        let mut raw = RawBlock {
            id: block.id,
            block_type: block.kind.type_name().to_string(),
            title: block.title,
            ..RawBlock::default()
        };
        match block.kind {
            BlockKind::Text { content }
            | BlockKind::Achievement { content }
            | BlockKind::Quote { content } => raw.content = Some(content),
            BlockKind::Image(image) => {
                raw.image_url = image.image_url;
                raw.image_urls = image.image_urls;
                raw.layout = image.layout.map(|l| l.as_str().to_string());
                raw.caption = image.caption;
                raw.credit = image.credit;
            }
        }
        raw
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn unknown_type_reads_as_text() {
        let block: ContentBlock = serde_json::from_value(json!({
            "id": "b1",
            "type": "callout",
            "content": "Hello"
        }))
        .unwrap();
        assert_eq!(block.kind, BlockKind::Text { content: "Hello".into() });
    }

    #[test]
    fn image_block_reads_both_reference_forms() {
        let block: ContentBlock = serde_json::from_value(json!({
            "id": "img",
            "type": "image",
            "imageUrl": "legacy.png",
            "imageUrls": ["a.png", "b.png"],
            "layout": "GRID",
            "caption": "Hall"
        }))
        .unwrap();
        let BlockKind::Image(image) = &block.kind else {
            panic!("expected image block");
        };
        assert_eq!(image.effective_images(), vec!["a.png", "b.png"]);
        assert_eq!(image.effective_layout(), ImageLayout::Grid);
    }

    #[test]
    fn legacy_reference_used_when_list_empty() {
        let image = ImageBlock {
            image_url: Some("legacy.png".into()),
            image_urls: vec!["  ".into()],
            ..ImageBlock::default()
        };
        assert_eq!(image.effective_images(), vec!["legacy.png"]);
        assert!(ImageBlock::default().effective_images().is_empty());
    }

    #[test]
    fn unknown_layout_falls_back_to_single() {
        let block: ContentBlock = serde_json::from_value(json!({
            "id": "img", "type": "image", "imageUrls": ["a.png"], "layout": "mosaic"
        }))
        .unwrap();
        let BlockKind::Image(image) = block.kind else {
            panic!("expected image block");
        };
        assert_eq!(image.layout, None);
        assert_eq!(image.effective_layout(), ImageLayout::Single);
    }

    #[test]
    fn serializes_flat_with_type_tag() {
        let block = ContentBlock::quote("q1", "Stay curious").with_title("Motto");
        let value = serde_json::to_value(&block).unwrap();
        assert_eq!(value["type"], "quote");
        assert_eq!(value["content"], "Stay curious");
        assert_eq!(value["title"], "Motto");
        let back: ContentBlock = serde_json::from_value(value).unwrap();
        assert_eq!(back, block);
    }

    #[test]
    fn blank_title_is_not_displayed() {
        let block = ContentBlock::text("t", "x").with_title("   ");
        assert_eq!(block.display_title(), None);
    }
}
