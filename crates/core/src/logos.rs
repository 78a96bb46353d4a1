//! The logo registry.
//!
//! Maps logo identifiers selected in a report to their asset location. The
//! table is built once and handed to the engine; nothing mutates it after.

use crate::error::BuildError;
use eventdoc_model::LogoRef;
use eventdoc_types::ImageSubtype;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogoRegistry {
    /// The institution logo, shown first on every document.
    institution: String,
    logos: HashMap<String, LogoRef>,
}

impl Default for LogoRegistry {
    fn default() -> Self {
        Self::new("bvm")
            .with("bvm", LogoRef::new("/logos/bvm.png", ImageSubtype::Png))
            .with("cvm", LogoRef::new("/logos/cvm.png", ImageSubtype::Png))
    }
}

impl LogoRegistry {
    pub fn new(institution: impl Into<String>) -> Self {
        Self {
            institution: institution.into(),
            logos: HashMap::new(),
        }
    }

    pub fn with(mut self, id: impl Into<String>, logo: LogoRef) -> Self {
        self.logos.insert(id.into(), logo);
        self
    }

    pub fn from_json_str(json: &str) -> Result<Self, BuildError> {
        serde_json::from_str(json).map_err(|e| BuildError::Config(e.to_string()))
    }

    pub fn institution(&self) -> &str {
        &self.institution
    }

    pub fn get(&self, id: &str) -> Option<&LogoRef> {
        self.logos.get(id)
    }

    /// The logos to draw for a selection, in display order.
    ///
    /// The institution logo always comes first and appears exactly once.
    /// Duplicates are dropped and unknown identifiers skipped.
    pub fn resolve<'a>(&'a self, selected: &'a [String]) -> Vec<(&'a str, &'a LogoRef)> {
        let ids = std::iter::once(self.institution.as_str())
            .chain(selected.iter().map(|s| s.trim()))
            .filter(|id| !id.is_empty());

        let mut seen: Vec<&str> = Vec::new();
        let mut resolved = Vec::new();
        for id in ids {
            if seen.contains(&id) {
                continue;
            }
            seen.push(id);
            match self.logos.get(id) {
                Some(logo) => resolved.push((id, logo)),
                None => log::debug!("Skipping unknown logo identifier '{}'", id),
            }
        }
        resolved
    }
}
