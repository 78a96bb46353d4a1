//! The template builder: a conservative rendering used for full and
//! summary documents alike.

use crate::render::blocks::{render_blocks, text_paragraphs};
use crate::render::sections::{self, people_groups};
use crate::render::{RenderContext, attachment_ref, nodes};
use eventdoc_extract::FileKind;
use eventdoc_idf::{Alignment, IRNode, TableCell, TableColumnDefinition, TableNode, TableRow};
use eventdoc_model::{AttachmentFile, ContentBlock, EventReport};

/// Builds the document body. `blocks` is the list to render, which is empty
/// for summary documents.
pub(crate) async fn build(
    ctx: &mut RenderContext<'_>,
    report: &EventReport,
    blocks: &[ContentBlock],
) -> Vec<IRNode> {
    let mut body = Vec::new();

    body.extend(sections::logo_row(ctx, report).await);
    body.extend(sections::institution_header(ctx, report));
    body.extend(sections::title_block(ctx, report));
    body.push(metadata_table(ctx, report));
    body.extend(people(ctx, report));

    if !blocks.is_empty() {
        body.push(nodes::heading(ctx.policy, "Event Details"));
        body.extend(render_blocks(ctx, blocks).await);
    }
    if sections::narrative_visible(report, blocks) {
        if let Some(narrative) = report.narrative_text() {
            body.push(nodes::heading(ctx.policy, "Event Summary"));
            body.extend(text_paragraphs(ctx.policy, narrative));
        }
    }
    if let Some(mentions) = report.special_mentions_text() {
        body.push(nodes::heading(ctx.policy, "Special Mentions"));
        body.extend(text_paragraphs(ctx.policy, mentions));
    }
    if let Some(file) = report.attendance_files.first() {
        body.extend(attendance(ctx, file).await);
    }

    body.extend(sections::signature(ctx, report));
    body.push(sections::footer(ctx));
    body
}

/// Two columns: a bold label and its value, one row per present field.
fn metadata_table(ctx: &RenderContext<'_>, report: &EventReport) -> IRNode {
    let policy = ctx.policy;
    let width = ctx.config.page.content_width();
    let label_width = width * 3 / 10;

    let rows = sections::metadata_entries(report, ctx.config, false)
        .into_iter()
        .map(|(label, value)| TableRow {
            cells: vec![
                TableCell::new(vec![nodes::bold(policy, label, Alignment::Left)]),
                TableCell::new(vec![nodes::body(policy, value, Alignment::Left)]),
            ],
        })
        .collect();

    IRNode::Table(TableNode {
        columns: vec![
            TableColumnDefinition { width: label_width },
            TableColumnDefinition { width: width - label_width },
        ],
        rows,
        borders: policy.table_borders,
        ..TableNode::default()
    })
}

fn people(ctx: &RenderContext<'_>, report: &EventReport) -> Vec<IRNode> {
    let groups = people_groups(report);
    if groups.is_empty() {
        return Vec::new();
    }

    let policy = ctx.policy;
    let mut out = vec![nodes::heading(policy, "People Involved")];
    for group in groups {
        out.push(nodes::bold(policy, format!("{}:", group.label), Alignment::Left));
        out.extend(
            group
                .lines
                .into_iter()
                .map(|line| nodes::body(policy, line, Alignment::Left)),
        );
    }
    out
}

/// The first attendance file only: inline when it is an image, otherwise a
/// placeholder naming the file.
async fn attendance(ctx: &mut RenderContext<'_>, file: &AttachmentFile) -> Vec<IRNode> {
    let mut out = vec![nodes::heading(ctx.policy, "Attendance")];
    let style = nodes::body_style(ctx.policy, Alignment::Center);

    let node = if FileKind::of(file) == FileKind::Image {
        let hint = file.mime_type.as_deref().unwrap_or(&file.name);
        let size = ctx.policy.attendance_size;
        ctx.inline_image(attachment_ref(file), Some(hint), size, &file.name)
            .await
    } else {
        log::debug!("Attendance file '{}' is not an image", file.name);
        ctx.placeholder_run(&format!(
            "[Attendance file: {} could not be displayed inline. Please refer to the original file.]",
            file.name
        ))
    };
    out.push(IRNode::paragraph(style, vec![node]));
    out
}
