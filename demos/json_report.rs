use eventdoc::model::{EventReport, LogoRef};
use eventdoc::{
    DocumentKind, FilesystemFileSaver, ImageSubtype, LogoRegistry, RenderMode, ReportEngine,
};
use std::env;
use std::fs;

/// 1x1 PNG used for both logos so the demo runs without network access.
const LOGO: &str = "data:image/png;base64,iVBORw0KGgoAAAANSUhEUgAAAAEAAAABCAYAAAAfFcSJAAAADUlEQVR42mNkYPhfDwAChwGA60e6kgAAAABJRU5ErkJggg==";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("eventdoc=info"))
        .init();

    let report_path = env::args()
        .nth(1)
        .unwrap_or_else(|| "demos/data/sample_report.json".to_string());
    let report: EventReport = serde_json::from_str(&fs::read_to_string(&report_path)?)?;
    println!("✓ Report loaded from {}", report_path);

    let logos = LogoRegistry::new("bvm")
        .with("bvm", LogoRef::new(LOGO, ImageSubtype::Png))
        .with("cvm", LogoRef::new(LOGO, ImageSubtype::Png));

    #[allow(unused_mut)]
    let mut builder = ReportEngine::builder().with_logo_registry(logos);
    #[cfg(feature = "http")]
    {
        builder = builder.with_fetcher(std::sync::Arc::new(eventdoc::HttpFetcher::new()));
    }
    let engine = builder.build();

    let saver = FilesystemFileSaver::new("output");
    for (mode, kind) in [
        (RenderMode::Template, DocumentKind::Full),
        (RenderMode::Replica, DocumentKind::Full),
        (RenderMode::Template, DocumentKind::Summary),
    ] {
        let location = engine.generate_and_save(&report, mode, kind, &saver).await?;
        println!("✓ {:?} {:?} document written to {}", mode, kind, location);
    }

    println!("\nSuccess!");
    Ok(())
}
