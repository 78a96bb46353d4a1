mod common;

use common::fixtures::*;
use common::{TestResult, images_in, init_logger, node_text, tables};
use eventdoc::idf::IRNode;
use eventdoc::model::{ContentBlock, FacultyCoordinator, ImageBlock, ImageLayout, StudentCoordinator};
use eventdoc::{BuildError, DocumentKind, PixelSize, RenderMode};

#[tokio::test]
async fn test_scenario_titled_text_block() -> TestResult {
    init_logger();
    let mut report = report("Robotics Workshop");
    report.blocks = vec![ContentBlock::text("b1", "Great turnout.").with_title("Overview")];

    let engine = engine(fetcher_with(&[]));
    let (tree, stats) = engine
        .build_tree(&report, RenderMode::Template, DocumentKind::Full)
        .await?;
    let text = tree.text_content();

    assert!(text.contains("Birla Vishvakarma Mahavidyalaya"));
    assert!(text.contains("1. Overview"));
    assert!(text.contains("Great turnout."));
    assert!(!text.contains("Event Summary"));
    assert!(!text.contains("People Involved"));

    let metadata = tables(&tree)[0];
    assert_eq!(metadata.rows.len(), 1, "only the date row is present");
    assert_eq!(node_text(&IRNode::Table(metadata.clone())), "Date\n05 March 2024");

    assert_eq!(stats.blocks, 1);
    assert_eq!(stats.images, 1, "institution logo");
    assert_eq!(stats.placeholders, 0);
    Ok(())
}

#[tokio::test]
async fn test_scenario_row_layout_uses_one_row() -> TestResult {
    init_logger();
    let urls = ["/img/1.jpg", "/img/2.jpg", "/img/3.jpg"];
    let mut report = report("Robotics Workshop");
    report.blocks = vec![ContentBlock::image(
        "gallery",
        ImageBlock::new(urls).with_layout(ImageLayout::Row),
    )];

    let engine = engine(fetcher_with(&urls));
    for mode in [RenderMode::Template, RenderMode::Replica] {
        let (tree, _) = engine.build_tree(&report, mode, DocumentKind::Full).await?;
        let rows: Vec<_> = tables(&tree)
            .into_iter()
            .filter(|t| t.columns.len() == 3)
            .collect();
        assert_eq!(rows.len(), 1);
        let table = rows[0];
        assert_eq!(table.rows.len(), 1);
        for cell in &table.rows[0].cells {
            let images = images_in(&cell.children);
            assert_eq!(images.len(), 1);
        }
    }

    let (tree, _) = engine
        .build_tree(&report, RenderMode::Template, DocumentKind::Full)
        .await?;
    let table = tables(&tree).into_iter().find(|t| t.columns.len() == 3).unwrap();
    let size = images_in(&table.rows[0].cells[0].children)[0].size;
    assert_eq!(size, PixelSize::new(200, 200));
    Ok(())
}

#[tokio::test]
async fn test_grid_failure_leaves_one_placeholder_cell() -> TestResult {
    init_logger();
    let urls = ["/g/a.jpg", "/g/b.jpg", "/g/c.jpg", "/g/d.jpg", "/g/e.jpg"];
    let mut report = report("Grid");
    report.blocks = vec![ContentBlock::image(
        "grid",
        ImageBlock::new(urls).with_layout(ImageLayout::Grid),
    )];

    // "/g/c.jpg" is never registered.
    let engine = engine(fetcher_with(&["/g/a.jpg", "/g/b.jpg", "/g/d.jpg", "/g/e.jpg"]));
    let (tree, stats) = engine
        .build_tree(&report, RenderMode::Replica, DocumentKind::Full)
        .await?;

    let table = tables(&tree)
        .into_iter()
        .find(|t| t.columns.len() == 3)
        .unwrap();
    assert_eq!(table.rows.len(), 2);

    let cells: Vec<_> = table.cells().collect();
    assert_eq!(cells.len(), 6);
    let placeholders = cells
        .iter()
        .filter(|c| c.children.iter().map(node_text).any(|t| t == "[Image could not be loaded]"))
        .count();
    let with_images = cells.iter().filter(|c| !images_in(&c.children).is_empty()).count();
    let empty = cells.iter().filter(|c| c.children.is_empty()).count();
    assert_eq!(placeholders, 1);
    assert_eq!(with_images, 4);
    assert_eq!(empty, 1);
    assert_eq!(stats.placeholders, 1);
    Ok(())
}

#[tokio::test]
async fn test_empty_image_block_renders_only_its_title() -> TestResult {
    let mut report = report("Empty Gallery");
    report.blocks = vec![ContentBlock::image("g", ImageBlock::new(Vec::<String>::new())).with_title("Photos")];

    let (tree, stats) = engine(fetcher_with(&[]))
        .build_tree(&report, RenderMode::Template, DocumentKind::Full)
        .await?;
    assert!(tree.text_content().contains("1. Photos"));
    assert_eq!(stats.images, 1);
    assert_eq!(stats.placeholders, 0);
    Ok(())
}

#[tokio::test]
async fn test_narrative_only_when_no_blocks() -> TestResult {
    init_logger();
    let mut report = report("Narrative");
    report.narrative = Some("The workshop brought together forty students.".to_string());
    let engine = engine(fetcher_with(&[]));

    let (tree, _) = engine
        .build_tree(&report, RenderMode::Template, DocumentKind::Full)
        .await?;
    let text = tree.text_content();
    assert!(text.contains("Event Summary"));
    assert!(text.contains("forty students"));
    assert!(!text.contains("Event Details"));

    report.blocks = vec![ContentBlock::achievement("a1", "First prize.")];
    for mode in [RenderMode::Template, RenderMode::Replica] {
        let (tree, _) = engine.build_tree(&report, mode, DocumentKind::Full).await?;
        let text = tree.text_content();
        assert!(!text.contains("forty students"), "{mode:?} rendered the narrative");
        assert!(text.contains("First prize."));
    }
    Ok(())
}

#[tokio::test]
async fn test_summary_kind_renders_narrative_instead_of_blocks() -> TestResult {
    let mut report = report("Summary");
    report.narrative = Some("A concise summary.".to_string());
    report.blocks = vec![ContentBlock::text("b1", "Block body.")];

    let (tree, stats) = engine(fetcher_with(&[]))
        .build_tree(&report, RenderMode::Replica, DocumentKind::Summary)
        .await?;
    let text = tree.text_content();
    assert!(text.contains("EVENT SUMMARY"));
    assert!(text.contains("A concise summary."));
    assert!(!text.contains("Block body."));
    assert!(!text.contains("EVENT DETAILS"));
    assert_eq!(stats.blocks, 0);
    Ok(())
}

#[tokio::test]
async fn test_people_lines_drop_missing_punctuation() -> TestResult {
    let mut report = report("People");
    report.faculty_coordinators = vec![FacultyCoordinator {
        name: "Dr. Shah".to_string(),
        designation: None,
        email: Some("shah@bvm.edu".to_string()),
    }];
    report.student_coordinators = vec![StudentCoordinator {
        name: "Riya".to_string(),
        roll_no: None,
        contact: None,
    }];

    let (tree, _) = engine(fetcher_with(&[]))
        .build_tree(&report, RenderMode::Template, DocumentKind::Full)
        .await?;
    let lines: Vec<String> = tree.text_content().lines().map(str::to_string).collect();
    assert!(lines.contains(&"Dr. Shah (shah@bvm.edu)".to_string()));
    assert!(lines.contains(&"Riya".to_string()));
    assert!(!lines.iter().any(|l| l.starts_with("Dr. Shah,")));
    assert!(!lines.iter().any(|l| l.contains("()")));
    // The coordinator signs the signature block.
    assert!(lines.contains(&"Event Coordinator".to_string()));
    Ok(())
}

#[tokio::test]
async fn test_replica_people_use_uppercase_labels() -> TestResult {
    let mut report = report("People");
    report.chief_guest = Some(eventdoc::model::ChiefGuest {
        name: "Mr. Rao".to_string(),
        designation: Some("Director".to_string()),
        affiliation: Some("ISRO".to_string()),
    });

    let (tree, _) = engine(fetcher_with(&[]))
        .build_tree(&report, RenderMode::Replica, DocumentKind::Full)
        .await?;
    let text = tree.text_content();
    assert!(text.contains("CHIEF GUEST\nMr. Rao, Director, ISRO"));
    assert!(!text.contains("FACULTY COORDINATORS"));
    Ok(())
}

#[tokio::test]
async fn test_replica_metadata_pairs_entries() -> TestResult {
    let mut report = report("Grid Metadata");
    report.venue = Some("Seminar Hall".to_string());
    report.event_type = Some("Workshop".to_string());

    let (tree, _) = engine(fetcher_with(&[]))
        .build_tree(&report, RenderMode::Replica, DocumentKind::Full)
        .await?;
    let grid = tables(&tree)[0];
    assert_eq!(grid.rows.len(), 2);
    assert_eq!(node_text(&grid.rows[0].cells[0].children[0]), "Date: 05 March 2024");
    assert_eq!(node_text(&grid.rows[1].cells[0].children[0]), "Event Type: Workshop");
    assert!(grid.rows[1].cells[1].children.is_empty());
    Ok(())
}

#[tokio::test]
async fn test_builds_are_repeatable() -> TestResult {
    let urls = ["/r/1.jpg", "/r/2.jpg"];
    let mut report = report("Repeat");
    report.blocks = vec![
        ContentBlock::image("g", ImageBlock::new(urls).with_layout(ImageLayout::Grid)),
        ContentBlock::quote("q", "Stay curious."),
    ];
    let engine = engine(fetcher_with(&urls));

    for mode in [RenderMode::Template, RenderMode::Replica] {
        let (first, _) = engine.build_tree(&report, mode, DocumentKind::Full).await?;
        let (second, _) = engine.build_tree(&report, mode, DocumentKind::Full).await?;
        assert_eq!(first.node_count(), second.node_count());
        assert_eq!(first.text_content(), second.text_content());
        assert_eq!(first, second);
    }
    Ok(())
}

#[tokio::test]
async fn test_unreachable_logo_degrades_to_placeholder() -> TestResult {
    let report = report("No Logo");
    let engine = engine(eventdoc::InMemoryFetcher::new());
    let (tree, stats) = engine
        .build_tree(&report, RenderMode::Template, DocumentKind::Full)
        .await?;
    assert!(tree.text_content().contains("[Image could not be loaded]"));
    assert_eq!(stats.images, 0);
    assert_eq!(stats.placeholders, 1);
    Ok(())
}

#[tokio::test]
async fn test_embedded_images_need_no_fetcher() -> TestResult {
    let mut report = report("Embedded");
    report.logos.clear();
    report.blocks = vec![ContentBlock::image("e", ImageBlock::new([PNG_DATA_URL]))];

    let (tree, stats) = engine(eventdoc::InMemoryFetcher::new())
        .build_tree(&report, RenderMode::Template, DocumentKind::Full)
        .await?;
    // The institution logo is always requested and is not registered here.
    assert_eq!(stats.placeholders, 1);
    assert_eq!(stats.images, 1);
    assert_eq!(tree.image_count(), 1);
    Ok(())
}

#[tokio::test]
async fn test_invalid_report_is_rejected() {
    let mut report = report("   ");
    let engine = engine(fetcher_with(&[]));
    let result = engine
        .build_tree(&report, RenderMode::Template, DocumentKind::Full)
        .await;
    assert!(matches!(result, Err(BuildError::InvalidReport(_))));

    report.title = "Backwards".to_string();
    report.dates.end_date = event_date().pred_opt().unwrap();
    let result = engine
        .build_tree(&report, RenderMode::Replica, DocumentKind::Full)
        .await;
    assert!(matches!(result, Err(BuildError::InvalidReport(_))));
}

#[tokio::test]
async fn test_footer_uses_configured_generation_date() -> TestResult {
    let (tree, _) = engine(fetcher_with(&[]))
        .build_tree(&report("Footer"), RenderMode::Template, DocumentKind::Full)
        .await?;
    assert!(tree.text_content().ends_with("Generated on 10 March 2024"));
    Ok(())
}
