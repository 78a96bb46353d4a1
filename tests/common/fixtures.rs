use chrono::NaiveDate;
use eventdoc::model::{DateRange, EventReport};
use eventdoc::{EngineConfig, InMemoryFetcher, ReportEngine};
use std::sync::Arc;

pub const LOGO_URL: &str = "/logos/bvm.png";

/// A PNG signature followed by the start of an IHDR chunk.
pub fn png_bytes() -> Vec<u8> {
    b"\x89PNG\r\n\x1a\n\0\0\0\rIHDR\0\0\0\x01\0\0\0\x01\x08\x02\0\0\0".to_vec()
}

pub fn jpeg_bytes() -> Vec<u8> {
    vec![0xFF, 0xD8, 0xFF, 0xE0, 0x00, 0x10, b'J', b'F', b'I', b'F', 0x00]
}

/// The PNG signature and IHDR header as a base64 data URL.
pub const PNG_DATA_URL: &str = "data:image/png;base64,iVBORw0KGgoAAAANSUhEUg==";

pub fn event_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 3, 5).unwrap()
}

pub fn report(title: &str) -> EventReport {
    let mut report = EventReport::new(title, DateRange::single_day(event_date()));
    report.logos = vec!["bvm".to_string()];
    report
}

/// A fetcher that knows the institution logo and the given image URLs.
pub fn fetcher_with(urls: &[&str]) -> InMemoryFetcher {
    let fetcher = InMemoryFetcher::new().with(LOGO_URL, png_bytes());
    for url in urls {
        fetcher.add(*url, jpeg_bytes()).unwrap();
    }
    fetcher
}

pub fn config() -> EngineConfig {
    EngineConfig {
        generated_on: Some(NaiveDate::from_ymd_opt(2024, 3, 10).unwrap()),
        ..EngineConfig::default()
    }
}

pub fn engine(fetcher: InMemoryFetcher) -> ReportEngine {
    ReportEngine::builder()
        .with_config(config())
        .with_fetcher(Arc::new(fetcher))
        .build()
}
