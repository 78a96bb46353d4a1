//! Intermediate Document Format (IDF)
//! The ordered, fully styled tree of block-level nodes that the document
//! builders produce and a serializer turns into a binary container.
//!
//! All lengths in this tree are already in the units the word-processor
//! format expects: twips for spacing and widths, half-points for font sizes,
//! and pixels (converted by the serializer at a fixed scale) for images.

use eventdoc_types::{Color, ImageSubtype, PixelSize};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

// --- Shared Types ---

pub type TextStr = String;

/// A reference-counted container for shared, immutable data like images.
pub type SharedData = Arc<Vec<u8>>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    #[default]
    Left,
    Center,
    Right,
    Justify,
}

/// A single ruled line drawn along a paragraph edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BorderLine {
    /// Line width in eighths of a point.
    pub size: u32,
    pub color: Color,
}

impl Default for BorderLine {
    fn default() -> Self {
        Self {
            size: 12,
            color: Color::BLACK,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ParagraphStyle {
    pub alignment: Alignment,
    /// Space before the paragraph, in twips.
    pub spacing_before: u32,
    /// Space after the paragraph, in twips.
    pub spacing_after: u32,
    /// Left indent, in twips.
    pub indent_left: u32,
    pub keep_with_next: bool,
    pub border_top: Option<BorderLine>,
    pub border_bottom: Option<BorderLine>,
}

impl ParagraphStyle {
    pub fn aligned(alignment: Alignment) -> Self {
        Self {
            alignment,
            ..Self::default()
        }
    }

    pub fn with_spacing(mut self, before: u32, after: u32) -> Self {
        self.spacing_before = before;
        self.spacing_after = after;
        self
    }
}

/// Character formatting of a text run. Unset fields inherit the document defaults.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RunStyle {
    pub bold: bool,
    pub italic: bool,
    pub underline: bool,
    /// Font size in half-points.
    pub size: Option<u32>,
    pub color: Option<Color>,
    pub font: Option<TextStr>,
}

impl RunStyle {
    pub fn sized(size: u32) -> Self {
        Self {
            size: Some(size),
            ..Self::default()
        }
    }

    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub fn italic(mut self) -> Self {
        self.italic = true;
        self
    }

    pub fn colored(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }
}

/// Decoded image bytes embedded inline at an explicit display size.
#[derive(Debug, Clone, PartialEq)]
pub struct InlineImage {
    pub data: SharedData,
    pub subtype: ImageSubtype,
    pub size: PixelSize,
    pub description: TextStr,
}

// --- Main Node Enums ---

/// Represents a block-level element in the document tree.
#[derive(Debug, Clone, PartialEq)]
pub enum IRNode {
    /// A paragraph, containing only inline content.
    Paragraph {
        style: ParagraphStyle,
        children: Vec<InlineNode>,
    },
    /// A table. Cells may hold further tables.
    Table(TableNode),
    /// A hard page break.
    PageBreak,
}

impl IRNode {
    pub fn paragraph(style: ParagraphStyle, children: Vec<InlineNode>) -> Self {
        IRNode::Paragraph { style, children }
    }

    /// A paragraph holding a single styled run.
    pub fn text(text: impl Into<TextStr>, run: RunStyle, style: ParagraphStyle) -> Self {
        IRNode::Paragraph {
            style,
            children: vec![InlineNode::text(text, run)],
        }
    }

    /// An empty paragraph, used as vertical spacing.
    pub fn spacer() -> Self {
        IRNode::Paragraph {
            style: ParagraphStyle::default(),
            children: Vec::new(),
        }
    }

    /// Returns a string identifier for the node type.
    pub fn kind(&self) -> &'static str {
        match self {
            IRNode::Paragraph { .. } => "paragraph",
            IRNode::Table(_) => "table",
            IRNode::PageBreak => "page-break",
        }
    }

    /// Number of block nodes in this subtree, including `self`.
    pub fn node_count(&self) -> usize {
        match self {
            IRNode::Paragraph { .. } | IRNode::PageBreak => 1,
            IRNode::Table(table) => 1 + table.cells().map(|c| count_nodes(&c.children)).sum::<usize>(),
        }
    }

    pub fn image_count(&self) -> usize {
        match self {
            IRNode::Paragraph { children, .. } => children
                .iter()
                .filter(|c| matches!(c, InlineNode::Image(_)))
                .count(),
            IRNode::Table(table) => table
                .cells()
                .flat_map(|c| c.children.iter())
                .map(IRNode::image_count)
                .sum(),
            IRNode::PageBreak => 0,
        }
    }

    fn collect_text(&self, out: &mut Vec<String>) {
        match self {
            IRNode::Paragraph { children, .. } => {
                let mut line = String::new();
                for child in children {
                    match child {
                        InlineNode::Text { text, .. } => line.push_str(text),
                        InlineNode::LineBreak => line.push('\n'),
                        InlineNode::Image(_) => {}
                    }
                }
                if !line.is_empty() {
                    out.push(line);
                }
            }
            IRNode::Table(table) => {
                for cell in table.cells() {
                    for child in &cell.children {
                        child.collect_text(out);
                    }
                }
            }
            IRNode::PageBreak => {}
        }
    }
}

/// Represents an inline-level element within a `Paragraph`.
#[derive(Debug, Clone, PartialEq)]
pub enum InlineNode {
    Text { text: TextStr, style: RunStyle },
    Image(InlineImage),
    /// A soft line break.
    LineBreak,
}

impl InlineNode {
    pub fn text(text: impl Into<TextStr>, style: RunStyle) -> Self {
        InlineNode::Text {
            text: text.into(),
            style,
        }
    }
}

// --- Table-specific Structures ---

#[derive(Debug, Clone, PartialEq, Default)]
pub struct TableNode {
    pub columns: Vec<TableColumnDefinition>,
    pub rows: Vec<TableRow>,
    /// Draw single-line borders around every cell.
    pub borders: bool,
    pub alignment: Alignment,
    /// Left and right cell padding in twips. `None` keeps the style default.
    pub cell_margin: Option<u32>,
}

impl TableNode {
    /// A table with `count` equally wide columns spanning `total_width` twips.
    pub fn with_equal_columns(count: usize, total_width: u32) -> Self {
        let width = if count == 0 { 0 } else { total_width / count as u32 };
        Self {
            columns: vec![TableColumnDefinition { width }; count],
            ..Self::default()
        }
    }

    pub fn cells(&self) -> impl Iterator<Item = &TableCell> {
        self.rows.iter().flat_map(|r| r.cells.iter())
    }

    pub fn total_width(&self) -> u32 {
        self.columns.iter().map(|c| c.width).sum()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TableColumnDefinition {
    /// Column width in twips.
    pub width: u32,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct TableRow {
    pub cells: Vec<TableCell>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct TableCell {
    pub children: Vec<IRNode>,
}

impl TableCell {
    pub fn new(children: Vec<IRNode>) -> Self {
        Self { children }
    }

    /// A cell with nothing in it. The serializer still emits an empty paragraph.
    pub fn empty() -> Self {
        Self::default()
    }
}

// --- Document ---

/// Page geometry in twips. Defaults to A4 portrait with one-inch margins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PageSetup {
    pub width: u32,
    pub height: u32,
    pub margin_top: u32,
    pub margin_right: u32,
    pub margin_bottom: u32,
    pub margin_left: u32,
}

impl Default for PageSetup {
    fn default() -> Self {
        Self {
            width: 11906,
            height: 16838,
            margin_top: 1440,
            margin_right: 1440,
            margin_bottom: 1440,
            margin_left: 1440,
        }
    }
}

impl PageSetup {
    /// Width available to content between the side margins.
    pub fn content_width(&self) -> u32 {
        self.width
            .saturating_sub(self.margin_left)
            .saturating_sub(self.margin_right)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DocumentMetadata {
    pub title: TextStr,
    pub creator: TextStr,
    pub subject: Option<TextStr>,
}

/// A complete document ready for serialization.
#[derive(Debug, Clone, PartialEq)]
pub struct DocumentTree {
    pub page: PageSetup,
    pub default_font: TextStr,
    /// Default font size in half-points.
    pub default_size: u32,
    pub metadata: DocumentMetadata,
    pub body: Vec<IRNode>,
}

impl Default for DocumentTree {
    fn default() -> Self {
        Self {
            page: PageSetup::default(),
            default_font: "Times New Roman".to_string(),
            default_size: 24,
            metadata: DocumentMetadata::default(),
            body: Vec::new(),
        }
    }
}

impl DocumentTree {
    pub fn node_count(&self) -> usize {
        count_nodes(&self.body)
    }

    pub fn image_count(&self) -> usize {
        self.body.iter().map(IRNode::image_count).sum()
    }

    /// Every non-empty paragraph's text in document order, one per line.
    pub fn text_content(&self) -> String {
        let mut lines = Vec::new();
        for node in &self.body {
            node.collect_text(&mut lines);
        }
        lines.join("\n")
    }
}

fn count_nodes(nodes: &[IRNode]) -> usize {
    nodes.iter().map(IRNode::node_count).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn image() -> InlineImage {
        InlineImage {
            data: Arc::new(vec![0u8; 4]),
            subtype: ImageSubtype::Png,
            size: PixelSize::new(10, 10),
            description: "img".into(),
        }
    }

    #[test]
    fn counts_nodes_inside_nested_tables() {
        let mut inner = TableNode::with_equal_columns(2, 4000);
        inner.rows.push(TableRow {
            cells: vec![
                TableCell::new(vec![IRNode::paragraph(
                    ParagraphStyle::default(),
                    vec![InlineNode::Image(image())],
                )]),
                TableCell::empty(),
            ],
        });
        let mut outer = TableNode::with_equal_columns(1, 4000);
        outer.rows.push(TableRow {
            cells: vec![TableCell::new(vec![IRNode::Table(inner)])],
        });
        let tree = DocumentTree {
            body: vec![
                IRNode::text("Heading", RunStyle::default().bold(), ParagraphStyle::default()),
                IRNode::Table(outer),
                IRNode::PageBreak,
            ],
            ..DocumentTree::default()
        };
        // heading, outer table, inner table, image paragraph, page break
        assert_eq!(tree.node_count(), 5);
        assert_eq!(tree.image_count(), 1);
    }

    #[test]
    fn text_content_skips_empty_paragraphs() {
        let tree = DocumentTree {
            body: vec![
                IRNode::text("One", RunStyle::default(), ParagraphStyle::default()),
                IRNode::spacer(),
                IRNode::paragraph(
                    ParagraphStyle::default(),
                    vec![
                        InlineNode::text("Two", RunStyle::default()),
                        InlineNode::LineBreak,
                        InlineNode::text("Three", RunStyle::default()),
                    ],
                ),
            ],
            ..DocumentTree::default()
        };
        assert_eq!(tree.text_content(), "One\nTwo\nThree");
    }

    #[test]
    fn equal_columns_split_width() {
        let table = TableNode::with_equal_columns(3, 9000);
        assert_eq!(table.columns, vec![TableColumnDefinition { width: 3000 }; 3]);
        assert_eq!(TableNode::with_equal_columns(0, 9000).total_width(), 0);
        assert_eq!(PageSetup::default().content_width(), 9026);
    }
}
