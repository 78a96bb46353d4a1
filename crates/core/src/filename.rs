use crate::engine::DocumentKind;

/// Derives the download filename for a report.
///
/// The title is slugified (non-alphanumeric runs collapsed, lower-cased)
/// with underscores as separators, then the kind's suffix is appended.
pub fn report_filename(title: &str, kind: DocumentKind) -> String {
    let slug = slug::slugify(title).replace('-', "_");
    let stem = if slug.is_empty() { "event" } else { slug.as_str() };
    let suffix = match kind {
        DocumentKind::Full => "_report",
        DocumentKind::Summary => "_Summary",
    };
    format!("{stem}{suffix}.docx")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collapses_punctuation_and_case() {
        assert_eq!(
            report_filename("Robotics Workshop 2024!", DocumentKind::Full),
            "robotics_workshop_2024_report.docx"
        );
        assert_eq!(
            report_filename("  AI / ML -- Expert Talk ", DocumentKind::Summary),
            "ai_ml_expert_talk_Summary.docx"
        );
    }

    #[test]
    fn empty_titles_fall_back() {
        assert_eq!(report_filename("***", DocumentKind::Full), "event_report.docx");
    }
}
