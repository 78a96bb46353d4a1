//! Shared content-block rendering.

use super::{IMAGE_PLACEHOLDER, RenderContext, nodes};
use crate::style::{StylePolicy, TextMode};
use eventdoc_idf::{
    Alignment, IRNode, InlineNode, ParagraphStyle, TableCell, TableNode, TableRow,
};
use eventdoc_layout::{Arrangement, ArrangementKind, plan};
use eventdoc_model::{BlockKind, ContentBlock, ImageBlock};
use eventdoc_resource::ResourceRef;
use eventdoc_types::{PixelSize, px_to_twips};

const QUOTE_INDENT: u32 = 720;

/// Renders `blocks` in authored order.
pub(crate) async fn render_blocks(ctx: &mut RenderContext<'_>, blocks: &[ContentBlock]) -> Vec<IRNode> {
    let mut out = Vec::new();
    for (index, block) in blocks.iter().enumerate() {
        out.extend(render_block(ctx, index, block).await);
    }
    out
}

/// Renders one block. A titled block is prefixed with `"<index+1>. <title>"`.
pub(crate) async fn render_block(
    ctx: &mut RenderContext<'_>,
    index: usize,
    block: &ContentBlock,
) -> Vec<IRNode> {
    ctx.stats.blocks += 1;
    log::debug!("Rendering {} block '{}'", block.kind.type_name(), block.id);

    let mut out = Vec::new();
    if let Some(title) = block.display_title() {
        out.push(nodes::block_title(ctx.policy, format!("{}. {}", index + 1, title)));
    }
    match &block.kind {
        BlockKind::Text { content } | BlockKind::Achievement { content } => {
            out.extend(text_paragraphs(ctx.policy, content));
        }
        BlockKind::Quote { content } => out.extend(quote(ctx.policy, content)),
        BlockKind::Image(image) => out.extend(image_block(ctx, &block.id, image).await),
    }
    out
}

/// Free text as paragraphs, broken up according to the policy's text mode.
pub(crate) fn text_paragraphs(policy: &StylePolicy, content: &str) -> Vec<IRNode> {
    match policy.text_mode {
        TextMode::PerLine => content
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(|line| nodes::body(policy, line, Alignment::Left))
            .collect(),
        TextMode::Justified => {
            let trimmed = content.trim();
            if trimmed.is_empty() {
                Vec::new()
            } else {
                vec![nodes::body(policy, trimmed, Alignment::Justify)]
            }
        }
    }
}

fn quote(policy: &StylePolicy, content: &str) -> Option<IRNode> {
    let trimmed = content.trim();
    if trimmed.is_empty() {
        return None;
    }
    let mut style = nodes::body_style(policy, Alignment::Left);
    style.indent_left = QUOTE_INDENT;
    Some(IRNode::text(
        format!("\u{201C}{trimmed}\u{201D}"),
        nodes::body_run(policy).italic(),
        style,
    ))
}

async fn image_block(ctx: &mut RenderContext<'_>, block_id: &str, image: &ImageBlock) -> Vec<IRNode> {
    let urls = image.effective_images();
    if urls.is_empty() {
        log::debug!("Image block '{}' has no images", block_id);
        return Vec::new();
    }

    let arrangement = plan(urls.len(), image.effective_layout(), &ctx.policy.layout);
    let cell = fit_to_width(arrangement.cell, arrangement.columns, ctx.content_width_px());
    let description = image
        .caption
        .as_deref()
        .map(str::trim)
        .filter(|c| !c.is_empty())
        .unwrap_or(block_id);

    let mut out = match arrangement.kind {
        ArrangementKind::Stacked => {
            let mut paragraphs = Vec::with_capacity(urls.len());
            for url in &urls {
                let node = ctx
                    .inline_image(ResourceRef::parse(url), None, cell, description)
                    .await;
                paragraphs.push(IRNode::paragraph(
                    nodes::body_style(ctx.policy, Alignment::Center),
                    vec![node],
                ));
            }
            paragraphs
        }
        ArrangementKind::Row | ArrangementKind::Grid => {
            vec![image_table(ctx, &arrangement, &urls, cell, description).await]
        }
    };

    if let Some(caption) = image.caption.as_deref().map(str::trim).filter(|c| !c.is_empty()) {
        out.push(nodes::caption(ctx.policy, caption, Alignment::Center));
    }
    if let Some(credit) = image.credit.as_deref().map(str::trim).filter(|c| !c.is_empty()) {
        out.push(nodes::caption(
            ctx.policy,
            format!("Photo Credit: {credit}"),
            Alignment::Right,
        ));
    }
    out
}

/// A borderless table holding one image per cell. Cells past the last image
/// stay empty; a failed image leaves its placeholder in the cell.
async fn image_table(
    ctx: &mut RenderContext<'_>,
    arrangement: &Arrangement,
    urls: &[&str],
    cell: PixelSize,
    description: &str,
) -> IRNode {
    let column_width = px_to_twips(cell.width);
    let mut table = TableNode::with_equal_columns(
        arrangement.columns,
        column_width * arrangement.columns as u32,
    );
    table.alignment = Alignment::Center;
    table.cell_margin = Some(0);

    let mut row = TableRow::default();
    for slot in arrangement.slots() {
        let content = match slot.image.and_then(|i| urls.get(i)) {
            Some(url) => {
                let node = ctx
                    .inline_image(ResourceRef::parse(url), None, cell, description)
                    .await;
                TableCell::new(vec![image_paragraph(node)])
            }
            None => TableCell::empty(),
        };
        row.cells.push(content);
        if slot.column + 1 == arrangement.columns {
            table.rows.push(std::mem::take(&mut row));
        }
    }
    IRNode::Table(table)
}

fn image_paragraph(node: InlineNode) -> IRNode {
    IRNode::paragraph(ParagraphStyle::aligned(Alignment::Center), vec![node])
}

/// Scales `cell` down proportionally when `columns` of it would overflow
/// `available` pixels.
pub(crate) fn fit_to_width(cell: PixelSize, columns: usize, available: u32) -> PixelSize {
    let columns = columns.max(1) as u32;
    let needed = cell.width.saturating_mul(columns);
    if needed <= available || needed == 0 {
        return cell;
    }
    let width = available / columns;
    let height = (u64::from(cell.height) * u64::from(width) / u64::from(cell.width)) as u32;
    PixelSize::new(width.max(1), height.max(1))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(nodes: &[IRNode]) -> Vec<String> {
        nodes
            .iter()
            .filter_map(|n| match n {
                IRNode::Paragraph { children, .. } => Some(
                    children
                        .iter()
                        .filter_map(|c| match c {
                            InlineNode::Text { text, .. } => Some(text.clone()),
                            _ => None,
                        })
                        .collect::<String>(),
                ),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn per_line_mode_skips_blank_lines() {
        let policy = StylePolicy::template();
        let out = text_paragraphs(&policy, "First\n\n   \nSecond\r\n");
        assert_eq!(texts(&out), vec!["First", "Second"]);
    }

    #[test]
    fn justified_mode_keeps_one_paragraph() {
        let policy = StylePolicy::replica();
        let out = text_paragraphs(&policy, "  First\nSecond  ");
        assert_eq!(out.len(), 1);
        assert_eq!(texts(&out), vec!["First\nSecond"]);
        match &out[0] {
            IRNode::Paragraph { style, .. } => assert_eq!(style.alignment, Alignment::Justify),
            other => panic!("expected paragraph, got {}", other.kind()),
        }
    }

    #[test]
    fn blank_text_renders_nothing() {
        assert!(text_paragraphs(&StylePolicy::template(), " \n ").is_empty());
        assert!(text_paragraphs(&StylePolicy::replica(), "").is_empty());
        assert!(quote(&StylePolicy::template(), "   ").is_none());
    }

    #[test]
    fn quote_is_italic_and_marked() {
        let node = quote(&StylePolicy::template(), " Stay curious. ").unwrap();
        assert_eq!(texts(std::slice::from_ref(&node)), vec!["\u{201C}Stay curious.\u{201D}"]);
        match node {
            IRNode::Paragraph { style, children } => {
                assert_eq!(style.indent_left, QUOTE_INDENT);
                assert!(matches!(&children[0], InlineNode::Text { style, .. } if style.italic));
            }
            other => panic!("expected paragraph, got {}", other.kind()),
        }
    }

    #[test]
    fn fitting_only_shrinks_overflowing_rows() {
        let cell = PixelSize::new(180, 135);
        assert_eq!(fit_to_width(cell, 3, 601), cell);
        assert_eq!(fit_to_width(cell, 4, 600), PixelSize::new(150, 112));
    }
}
