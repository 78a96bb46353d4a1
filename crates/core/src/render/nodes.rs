//! Small constructors for policy-styled nodes.

use crate::style::StylePolicy;
use eventdoc_idf::{Alignment, BorderLine, IRNode, ParagraphStyle, RunStyle};

pub(crate) fn body_run(policy: &StylePolicy) -> RunStyle {
    RunStyle::sized(policy.body_size)
}

pub(crate) fn body_style(policy: &StylePolicy, alignment: Alignment) -> ParagraphStyle {
    ParagraphStyle::aligned(alignment).with_spacing(0, policy.paragraph_after)
}

pub(crate) fn body(policy: &StylePolicy, text: impl Into<String>, alignment: Alignment) -> IRNode {
    IRNode::text(text, body_run(policy), body_style(policy, alignment))
}

pub(crate) fn bold(policy: &StylePolicy, text: impl Into<String>, alignment: Alignment) -> IRNode {
    IRNode::text(text, body_run(policy).bold(), body_style(policy, alignment))
}

/// A section heading that stays on the page of the content that follows.
pub(crate) fn heading(policy: &StylePolicy, text: impl Into<String>) -> IRNode {
    let mut style = ParagraphStyle::aligned(Alignment::Left)
        .with_spacing(policy.section_before, policy.paragraph_after);
    style.keep_with_next = true;
    IRNode::text(
        text,
        RunStyle::sized(policy.heading_size).bold().colored(policy.accent),
        style,
    )
}

pub(crate) fn block_title(policy: &StylePolicy, text: impl Into<String>) -> IRNode {
    let mut style = ParagraphStyle::aligned(Alignment::Left)
        .with_spacing(policy.paragraph_after, policy.paragraph_after / 2);
    style.keep_with_next = true;
    IRNode::text(text, RunStyle::sized(policy.block_title_size).bold(), style)
}

pub(crate) fn caption(policy: &StylePolicy, text: impl Into<String>, alignment: Alignment) -> IRNode {
    IRNode::text(
        text,
        RunStyle::sized(policy.caption_size).italic().colored(policy.muted),
        body_style(policy, alignment),
    )
}

/// An empty paragraph drawing a full-width horizontal rule.
pub(crate) fn rule(policy: &StylePolicy) -> IRNode {
    let mut style = ParagraphStyle::default().with_spacing(0, policy.paragraph_after);
    style.border_bottom = Some(BorderLine {
        size: 12,
        color: policy.accent,
    });
    IRNode::paragraph(style, Vec::new())
}

pub(crate) fn spacers(count: u32) -> impl Iterator<Item = IRNode> {
    (0..count).map(|_| IRNode::spacer())
}
