mod common;

use common::fixtures::*;
use common::{DocxPackage, TestResult, init_logger};
use eventdoc::model::{ContentBlock, ImageBlock, ImageLayout};
use eventdoc::{BuildError, DocumentKind, FilesystemFileSaver, InMemoryFileSaver, RenderMode};

#[tokio::test]
async fn test_generated_package_is_a_word_document() -> TestResult {
    init_logger();
    let urls = ["/p/1.jpg", "/p/2.jpg", "/p/3.jpg", "/p/4.jpg"];
    let mut report = report("Robotics Workshop");
    report.tagline = Some("Build & Learn".to_string());
    report.blocks = vec![
        ContentBlock::text("b1", "Great turnout.").with_title("Overview"),
        ContentBlock::image("g", ImageBlock::new(urls).with_layout(ImageLayout::Grid)),
    ];

    let engine = engine(fetcher_with(&urls));
    let document = engine
        .generate(&report, RenderMode::Replica, DocumentKind::Full)
        .await?;
    assert_eq!(document.filename, "robotics_workshop_report.docx");
    assert_eq!(document.stats.images, 5);

    let package = DocxPackage::from_bytes(&document.bytes)?;
    for part in [
        "[Content_Types].xml",
        "_rels/.rels",
        "word/document.xml",
        "word/_rels/document.xml.rels",
        "word/styles.xml",
        "docProps/core.xml",
    ] {
        assert!(package.names.iter().any(|n| n == part), "missing {part}");
    }
    assert_eq!(package.media_count(), 5);
    assert!(package.contains("1. Overview"));
    assert!(package.contains("Build &amp; Learn"));
    assert_eq!(package.document_xml.matches("<w:drawing>").count(), 5);
    Ok(())
}

#[tokio::test]
async fn test_summary_filename_suffix() -> TestResult {
    let mut report = report("AI / ML Expert Talk");
    report.narrative = Some("Summary text.".to_string());
    let document = engine(fetcher_with(&[]))
        .generate(&report, RenderMode::Template, DocumentKind::Summary)
        .await?;
    assert_eq!(document.filename, "ai_ml_expert_talk_Summary.docx");
    assert!(DocxPackage::from_bytes(&document.bytes)?.contains("Summary text."));
    Ok(())
}

#[tokio::test]
async fn test_generate_and_save_in_memory() -> TestResult {
    let saver = InMemoryFileSaver::new();
    let location = engine(fetcher_with(&[]))
        .generate_and_save(&report("Saved"), RenderMode::Template, DocumentKind::Full, &saver)
        .await?;
    assert_eq!(location, "memory://saved_report.docx");
    let blob = saver.get("saved_report.docx").unwrap();
    DocxPackage::from_bytes(&blob)?;
    Ok(())
}

#[tokio::test]
async fn test_generate_and_save_to_disk() -> TestResult {
    let dir = tempfile::tempdir()?;
    let saver = FilesystemFileSaver::new(dir.path());
    engine(fetcher_with(&[]))
        .generate_and_save(&report("On Disk"), RenderMode::Replica, DocumentKind::Full, &saver)
        .await?;

    let bytes = std::fs::read(dir.path().join("on_disk_report.docx"))?;
    assert!(DocxPackage::from_bytes(&bytes)?.contains("On Disk"));
    Ok(())
}

#[tokio::test]
async fn test_invalid_report_never_reaches_the_saver() {
    let saver = InMemoryFileSaver::new();
    let result = engine(fetcher_with(&[]))
        .generate_and_save(&report(""), RenderMode::Template, DocumentKind::Full, &saver)
        .await;
    assert!(matches!(result, Err(BuildError::InvalidReport(_))));
    assert!(saver.filenames().is_empty());
}
