//! Engine configuration.

use crate::error::BuildError;
use crate::style::StylePolicy;
use chrono::NaiveDate;
use eventdoc_idf::PageSetup;
use serde::{Deserialize, Serialize};
use std::fmt::Write;

const FALLBACK_DATE_FORMAT: &str = "%Y-%m-%d";

/// Settings shared by every build an engine performs.
///
/// Every field has a default, so a JSON document only needs the keys it
/// wants to override.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EngineConfig {
    /// chrono `strftime` pattern used for every date in the document.
    pub date_format: String,
    /// Date printed in the footer. `None` means the local date at build time.
    pub generated_on: Option<NaiveDate>,
    /// Header lines printed above the department line, in order.
    pub institution_lines: Vec<String>,
    /// Written to the package's core properties.
    pub creator: String,
    pub page: PageSetup,
    pub template_style: StylePolicy,
    pub replica_style: StylePolicy,
    /// Paragraphs shown per extracted miscellaneous attachment.
    pub max_misc_paragraphs: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            date_format: "%d %B %Y".to_string(),
            generated_on: None,
            institution_lines: vec![
                "Charutar Vidya Mandal".to_string(),
                "Birla Vishvakarma Mahavidyalaya".to_string(),
                "(An Autonomous Institution)".to_string(),
                "Vallabh Vidyanagar, Gujarat, India".to_string(),
            ],
            creator: "Event Report Generator".to_string(),
            page: PageSetup::default(),
            template_style: StylePolicy::template(),
            replica_style: StylePolicy::replica(),
            max_misc_paragraphs: 20,
        }
    }
}

impl EngineConfig {
    pub fn from_json_str(json: &str) -> Result<Self, BuildError> {
        serde_json::from_str(json).map_err(|e| BuildError::Config(e.to_string()))
    }

    /// Formats `date` with the configured pattern. An invalid pattern falls
    /// back to ISO dates rather than failing the build.
    pub fn format_date(&self, date: NaiveDate) -> String {
        let mut out = String::new();
        if write!(out, "{}", date.format(&self.date_format)).is_ok() {
            return out;
        }
        log::warn!(
            "Invalid date format '{}'; using {}",
            self.date_format,
            FALLBACK_DATE_FORMAT
        );
        date.format(FALLBACK_DATE_FORMAT).to_string()
    }

    pub fn generation_date(&self) -> NaiveDate {
        self.generated_on
            .unwrap_or_else(|| chrono::Local::now().date_naive())
    }
}
