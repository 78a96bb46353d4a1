//! The replica builder.
//!
//! Mirrors the live preview's layout: larger logos, rules around the title,
//! a paired metadata grid, one page per attendance sheet and an appendix of
//! miscellaneous files.

use crate::render::blocks::{render_blocks, text_paragraphs};
use crate::render::sections::{self, people_groups};
use crate::render::{RenderContext, attachment_ref, nodes};
use eventdoc_extract::{Extraction, FileKind};
use eventdoc_idf::{Alignment, IRNode, InlineNode, ParagraphStyle, TableCell, TableNode, TableRow};
use eventdoc_model::{AttachmentFile, ContentBlock, EventReport};

pub(crate) async fn build(
    ctx: &mut RenderContext<'_>,
    report: &EventReport,
    blocks: &[ContentBlock],
) -> Vec<IRNode> {
    let mut body = Vec::new();

    body.extend(sections::logo_row(ctx, report).await);
    body.extend(sections::institution_header(ctx, report));
    body.push(nodes::rule(ctx.policy));
    body.extend(sections::title_block(ctx, report));
    body.push(nodes::rule(ctx.policy));
    body.push(metadata_grid(ctx, report));
    body.extend(people(ctx, report));

    if !blocks.is_empty() {
        body.push(nodes::heading(ctx.policy, "EVENT DETAILS"));
        body.extend(render_blocks(ctx, blocks).await);
    }
    if sections::narrative_visible(report, blocks) {
        if let Some(narrative) = report.narrative_text() {
            body.push(nodes::heading(ctx.policy, "EVENT SUMMARY"));
            body.extend(text_paragraphs(ctx.policy, narrative));
        }
    }
    if let Some(mentions) = report.special_mentions_text() {
        body.push(nodes::heading(ctx.policy, "SPECIAL MENTIONS"));
        body.extend(text_paragraphs(ctx.policy, mentions));
    }

    body.extend(attendance(ctx, &report.attendance_files).await);
    body.extend(misc_files(ctx, &report.misc_files).await);

    body.extend(sections::signature(ctx, report));
    body.push(sections::footer(ctx));
    body
}

/// Consecutive metadata entries paired into two-column rows. An odd entry
/// out shares its row with an empty cell.
fn metadata_grid(ctx: &RenderContext<'_>, report: &EventReport) -> IRNode {
    let policy = ctx.policy;
    let entries = sections::metadata_entries(report, ctx.config, true);

    let mut table = TableNode::with_equal_columns(2, ctx.config.page.content_width());
    table.borders = policy.table_borders;
    for pair in entries.chunks(2) {
        let mut cells: Vec<TableCell> = pair
            .iter()
            .map(|(label, value)| {
                TableCell::new(vec![IRNode::paragraph(
                    nodes::body_style(policy, Alignment::Left),
                    vec![
                        InlineNode::text(format!("{label}: "), nodes::body_run(policy).bold()),
                        InlineNode::text(value.clone(), nodes::body_run(policy)),
                    ],
                )])
            })
            .collect();
        if cells.len() < 2 {
            cells.push(TableCell::empty());
        }
        table.rows.push(TableRow { cells });
    }
    IRNode::Table(table)
}

fn people(ctx: &RenderContext<'_>, report: &EventReport) -> Vec<IRNode> {
    let policy = ctx.policy;
    let mut out = Vec::new();
    for group in people_groups(report) {
        out.push(nodes::heading(policy, group.label.to_uppercase()));
        out.extend(
            group
                .lines
                .into_iter()
                .map(|line| nodes::body(policy, line, Alignment::Left)),
        );
    }
    out
}

/// Image attendance sheets, one per page. Other file types are left out.
async fn attendance(ctx: &mut RenderContext<'_>, files: &[AttachmentFile]) -> Vec<IRNode> {
    let sheets: Vec<&AttachmentFile> = files
        .iter()
        .filter(|file| {
            let is_image = FileKind::of(file) == FileKind::Image;
            if !is_image {
                log::debug!("Leaving non-image attendance file '{}' out", file.name);
            }
            is_image
        })
        .collect();

    let total = sheets.len();
    let size = ctx.policy.attendance_size;
    let mut out = Vec::new();
    for (index, file) in sheets.into_iter().enumerate() {
        out.push(IRNode::PageBreak);
        let heading = if total > 1 {
            format!("ATTENDANCE SHEET {} OF {}", index + 1, total)
        } else {
            "ATTENDANCE SHEET".to_string()
        };
        out.push(nodes::heading(ctx.policy, heading));
        let hint = file.mime_type.as_deref().unwrap_or(&file.name);
        let node = ctx
            .inline_image(attachment_ref(file), Some(hint), size, &file.name)
            .await;
        out.push(IRNode::paragraph(
            nodes::body_style(ctx.policy, Alignment::Center),
            vec![node],
        ));
    }
    out
}

async fn misc_files(ctx: &mut RenderContext<'_>, files: &[AttachmentFile]) -> Vec<IRNode> {
    if files.is_empty() {
        return Vec::new();
    }

    let mut out = vec![IRNode::PageBreak, nodes::heading(ctx.policy, "ADDITIONAL DOCUMENTS")];
    for file in files {
        out.push(nodes::block_title(ctx.policy, file.name.as_str()));
        match FileKind::of(file) {
            FileKind::Image => {
                let hint = file.mime_type.as_deref().unwrap_or(&file.name);
                let size = ctx.policy.layout.large;
                let node = ctx
                    .inline_image(attachment_ref(file), Some(hint), size, &file.name)
                    .await;
                out.push(IRNode::paragraph(
                    nodes::body_style(ctx.policy, Alignment::Center),
                    vec![node],
                ));
            }
            FileKind::WordDocument | FileKind::PlainText => {
                match ctx.extractor.extract_attachment(ctx.loader, file).await {
                    Extraction::Failed(marker) => {
                        let node = ctx.placeholder_run(&marker);
                        out.push(IRNode::paragraph(
                            nodes::body_style(ctx.policy, Alignment::Left),
                            vec![node],
                        ));
                    }
                    Extraction::Text(text) => {
                        out.extend(extracted_paragraphs(ctx, &file.name, &text));
                    }
                }
            }
            kind => {
                let node = ctx.placeholder_run(&format!(
                    "[{}: {} ({})]",
                    kind.label(),
                    file.name,
                    format_size(file.size)
                ));
                out.push(IRNode::paragraph(
                    nodes::body_style(ctx.policy, Alignment::Left),
                    vec![node],
                ));
                out.push(nodes::caption(
                    ctx.policy,
                    "This file is attached to the report. Please refer to the original file.",
                    Alignment::Left,
                ));
            }
        }
    }
    out
}

/// One paragraph per non-blank line, cut off at the configured maximum with
/// a notice saying how much was left out.
fn extracted_paragraphs(ctx: &RenderContext<'_>, name: &str, text: &str) -> Vec<IRNode> {
    let policy = ctx.policy;
    let max = ctx.config.max_misc_paragraphs;
    let lines: Vec<&str> = text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();

    let mut out: Vec<IRNode> = lines
        .iter()
        .take(max)
        .map(|line| {
            IRNode::text(
                *line,
                nodes::body_run(policy),
                ParagraphStyle::aligned(Alignment::Justify).with_spacing(0, policy.paragraph_after),
            )
        })
        .collect();

    if lines.len() > max {
        log::debug!(
            "Truncated '{}' to {} of {} paragraphs",
            name,
            max,
            lines.len()
        );
        out.push(nodes::caption(
            policy,
            format!(
                "[Content truncated: showing first {} of {} paragraphs. \
                 Please refer to the original file for the complete content.]",
                max,
                lines.len()
            ),
            Alignment::Left,
        ));
    }
    out
}

fn format_size(bytes: u64) -> String {
    const KB: f64 = 1024.0;
    let value = bytes as f64;
    if value < KB {
        format!("{bytes} B")
    } else if value < KB * KB {
        format!("{:.1} KB", value / KB)
    } else {
        format!("{:.1} MB", value / (KB * KB))
    }
}
