//! Report sections and the omission rules both builders share.

use super::{RenderContext, nodes};
use crate::config::EngineConfig;
use eventdoc_idf::{Alignment, IRNode, InlineNode, ParagraphStyle, RunStyle, TableCell, TableNode, TableRow};
use eventdoc_model::{ChiefGuest, ContentBlock, EventReport, FacultyCoordinator, StudentCoordinator};
use eventdoc_resource::ResourceRef;
use itertools::Itertools;

const SIGNATURE_LINE: &str = "_________________________";

/// A labelled group of people lines, e.g. all faculty coordinators.
pub(crate) struct PeopleGroup {
    pub label: &'static str,
    pub lines: Vec<String>,
}

fn present(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// `"<name>, <designation> (<email>)"`, dropping absent parts with their punctuation.
pub(crate) fn faculty_line(faculty: &FacultyCoordinator) -> Option<String> {
    let name = present(Some(faculty.name.as_str()))?;
    let mut line = name.to_string();
    if let Some(designation) = present(faculty.designation.as_deref()) {
        line.push_str(", ");
        line.push_str(designation);
    }
    if let Some(email) = present(faculty.email.as_deref()) {
        line.push_str(&format!(" ({email})"));
    }
    Some(line)
}

/// `"<name> (<rollNo>) - <contact>"`, dropping absent parts with their punctuation.
pub(crate) fn student_line(student: &StudentCoordinator) -> Option<String> {
    let name = present(Some(student.name.as_str()))?;
    let mut line = name.to_string();
    if let Some(roll_no) = present(student.roll_no.as_deref()) {
        line.push_str(&format!(" ({roll_no})"));
    }
    if let Some(contact) = present(student.contact.as_deref()) {
        line.push_str(" - ");
        line.push_str(contact);
    }
    Some(line)
}

pub(crate) fn chief_guest_line(guest: &ChiefGuest) -> Option<String> {
    present(Some(guest.name.as_str()))?;
    Some(
        [
            Some(guest.name.as_str()),
            guest.designation.as_deref(),
            guest.affiliation.as_deref(),
        ]
        .into_iter()
        .filter_map(present)
        .join(", "),
    )
}

/// The non-empty people groups, in display order.
pub(crate) fn people_groups(report: &EventReport) -> Vec<PeopleGroup> {
    let groups = [
        PeopleGroup {
            label: "Faculty Coordinators",
            lines: report.faculty_coordinators.iter().filter_map(faculty_line).collect(),
        },
        PeopleGroup {
            label: "Student Coordinators",
            lines: report.student_coordinators.iter().filter_map(student_line).collect(),
        },
        PeopleGroup {
            label: "Chief Guest",
            lines: report.named_chief_guest().and_then(chief_guest_line).into_iter().collect(),
        },
    ];
    groups.into_iter().filter(|g| !g.lines.is_empty()).collect()
}

/// The metadata rows to show, in order, with empty fields left out.
///
/// `extended` adds the fields only the replica layout shows.
pub(crate) fn metadata_entries(
    report: &EventReport,
    config: &EngineConfig,
    extended: bool,
) -> Vec<(&'static str, String)> {
    let dates = &report.dates;
    let date = if dates.is_single_day() {
        config.format_date(dates.start_date)
    } else {
        format!(
            "{} to {}",
            config.format_date(dates.start_date),
            config.format_date(dates.end_date)
        )
    };

    let mut entries = vec![("Date", date)];
    let mut push = |label: &'static str, value: Option<&str>| {
        if let Some(value) = present(value) {
            entries.push((label, value.to_string()));
        }
    };
    push("Venue", report.venue.as_deref());
    push("Event Type", report.event_type.as_deref());
    push("Organized By", report.organized_by.as_deref());
    push("Target Audience", report.target_audience.as_deref());
    let participants = report.participants.filter(|&n| n > 0).map(|n| n.to_string());
    push("Participants", participants.as_deref());
    push("Academic Year", report.academic_year.as_deref());
    if extended {
        push("Semester", report.semester.as_deref());
        push("Hosted By", report.hosted_by.as_deref());
        push("Guests of Honor", report.guests_of_honor.as_deref());
    }
    entries
}

/// Whether the narrative section is shown for a build rendering `blocks`.
///
/// Content blocks take precedence: the narrative only appears when no block
/// is rendered.
pub(crate) fn narrative_visible(report: &EventReport, blocks: &[ContentBlock]) -> bool {
    let has_narrative = report.narrative_text().is_some();
    if has_narrative && !blocks.is_empty() {
        log::info!(
            "Report '{}' has {} content block(s); narrative text is not rendered",
            report.title,
            blocks.len()
        );
    }
    has_narrative && blocks.is_empty()
}

/// The centred row of selected logos. `None` when no logo resolves.
pub(crate) async fn logo_row(ctx: &mut RenderContext<'_>, report: &EventReport) -> Option<IRNode> {
    let logos = ctx.logos;
    let resolved = logos.resolve(&report.logos);
    if resolved.is_empty() {
        return None;
    }

    let size = ctx.policy.logo_size;
    let gap = " ".repeat(ctx.policy.logo_gap as usize);
    let mut children = Vec::with_capacity(resolved.len() * 2);
    for (index, (id, logo)) in resolved.into_iter().enumerate() {
        if index > 0 {
            children.push(InlineNode::text(gap.clone(), RunStyle::default()));
        }
        let hint = logo.subtype.mime_type();
        let node = ctx
            .inline_image(ResourceRef::parse(&logo.src), Some(hint), size, id)
            .await;
        children.push(node);
    }
    Some(IRNode::paragraph(
        ParagraphStyle::aligned(Alignment::Center).with_spacing(0, ctx.policy.paragraph_after),
        children,
    ))
}

/// Institution lines followed by the organizing unit.
pub(crate) fn institution_header(ctx: &RenderContext<'_>, report: &EventReport) -> Vec<IRNode> {
    let policy = ctx.policy;
    let run = RunStyle::sized(policy.header_size).bold();
    let style = ParagraphStyle::aligned(Alignment::Center);
    let mut out: Vec<IRNode> = ctx
        .config
        .institution_lines
        .iter()
        .map(|line| line.trim())
        .filter(|line| !line.is_empty())
        .map(|line| IRNode::text(line, run.clone(), style.clone()))
        .collect();
    if let Some(unit) = present(report.organized_by.as_deref()) {
        out.push(IRNode::text(
            unit,
            RunStyle::sized(policy.body_size).bold().colored(policy.accent),
            style.with_spacing(0, policy.paragraph_after),
        ));
    }
    out
}

/// The report title, then the tagline if there is one.
pub(crate) fn title_block(ctx: &RenderContext<'_>, report: &EventReport) -> Vec<IRNode> {
    let policy = ctx.policy;
    let mut out = vec![IRNode::text(
        report.title.trim(),
        RunStyle::sized(policy.title_size).bold().colored(policy.accent),
        ParagraphStyle::aligned(Alignment::Center).with_spacing(policy.paragraph_after, 0),
    )];
    if let Some(tagline) = present(report.tagline.as_deref()) {
        out.push(IRNode::text(
            tagline,
            RunStyle::sized(policy.tagline_size).italic().colored(policy.muted),
            ParagraphStyle::aligned(Alignment::Center).with_spacing(0, policy.paragraph_after),
        ));
    }
    out
}

/// Spacing lines, then "Event Coordinator" and "Head of Department" side by side.
pub(crate) fn signature(ctx: &RenderContext<'_>, report: &EventReport) -> Vec<IRNode> {
    let policy = ctx.policy;
    let cell = |lines: Vec<(&str, bool)>| {
        TableCell::new(
            lines
                .into_iter()
                .map(|(text, bold)| {
                    let run = if bold { nodes::body_run(policy).bold() } else { nodes::body_run(policy) };
                    IRNode::text(text, run, ParagraphStyle::aligned(Alignment::Center))
                })
                .collect(),
        )
    };

    let mut coordinator = vec![(SIGNATURE_LINE, false)];
    if let Some(name) = report.first_faculty_name() {
        coordinator.push((name, false));
    }
    coordinator.push(("Event Coordinator", true));

    let mut head = vec![(SIGNATURE_LINE, false), ("Head of Department", true)];
    if let Some(unit) = present(report.organized_by.as_deref()) {
        head.push((unit, false));
    }

    let mut table = TableNode::with_equal_columns(2, ctx.config.page.content_width());
    table.rows.push(TableRow {
        cells: vec![cell(coordinator), cell(head)],
    });

    let mut out: Vec<IRNode> = nodes::spacers(policy.signature_spacing).collect();
    out.push(IRNode::Table(table));
    out
}

pub(crate) fn footer(ctx: &RenderContext<'_>) -> IRNode {
    let policy = ctx.policy;
    let date = ctx.config.format_date(ctx.config.generation_date());
    IRNode::text(
        format!("Generated on {date}"),
        RunStyle::sized(policy.footer_size).italic().colored(policy.muted),
        ParagraphStyle::aligned(Alignment::Center).with_spacing(policy.section_before, 0),
    )
}
