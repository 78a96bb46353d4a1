use chrono::NaiveDate;
use eventdoc_types::ImageSubtype;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{AttachmentFile, ContentBlock};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ModelError {
    #[error("Report title must not be empty")]
    EmptyTitle,
    #[error("Event start date {start} is after end date {end}")]
    DateOrder { start: NaiveDate, end: NaiveDate },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportStatus {
    #[default]
    Draft,
    Generated,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DateRange {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

impl DateRange {
    pub fn new(start_date: NaiveDate, end_date: NaiveDate) -> Self {
        Self { start_date, end_date }
    }

    pub fn single_day(date: NaiveDate) -> Self {
        Self::new(date, date)
    }

    pub fn is_single_day(&self) -> bool {
        self.start_date == self.end_date
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FacultyCoordinator {
    pub name: String,
    pub designation: Option<String>,
    pub email: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StudentCoordinator {
    pub name: String,
    pub roll_no: Option<String>,
    pub contact: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ChiefGuest {
    pub name: String,
    pub designation: Option<String>,
    pub affiliation: Option<String>,
}

/// A logo asset: where to load it from and what it is encoded as.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogoRef {
    pub src: String,
    #[serde(default)]
    pub subtype: ImageSubtype,
}

impl LogoRef {
    pub fn new(src: impl Into<String>, subtype: ImageSubtype) -> Self {
        Self {
            src: src.into(),
            subtype,
        }
    }
}

/// The aggregate root handed to the engine for one document build.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventReport {
    pub title: String,
    #[serde(default)]
    pub tagline: Option<String>,
    /// Selected logo identifiers, in display order.
    #[serde(default)]
    pub logos: Vec<String>,
    #[serde(flatten)]
    pub dates: DateRange,
    #[serde(default)]
    pub venue: Option<String>,
    #[serde(default)]
    pub event_type: Option<String>,
    /// The department or club that organized the event.
    #[serde(default)]
    pub organized_by: Option<String>,
    #[serde(default)]
    pub academic_year: Option<String>,
    #[serde(default)]
    pub semester: Option<String>,
    #[serde(default)]
    pub target_audience: Option<String>,
    #[serde(default)]
    pub participants: Option<u32>,
    #[serde(default)]
    pub faculty_coordinators: Vec<FacultyCoordinator>,
    #[serde(default)]
    pub student_coordinators: Vec<StudentCoordinator>,
    #[serde(default)]
    pub chief_guest: Option<ChiefGuest>,
    #[serde(default)]
    pub hosted_by: Option<String>,
    #[serde(default)]
    pub guests_of_honor: Option<String>,
    #[serde(default)]
    pub special_mentions: Option<String>,
    #[serde(default)]
    pub blocks: Vec<ContentBlock>,
    #[serde(default)]
    pub attendance_files: Vec<AttachmentFile>,
    #[serde(default)]
    pub misc_files: Vec<AttachmentFile>,
    /// Pre-generated narrative text for the summary variant.
    #[serde(default)]
    pub narrative: Option<String>,
    #[serde(default)]
    pub status: ReportStatus,
}

impl EventReport {
    pub fn new(title: impl Into<String>, dates: DateRange) -> Self {
        Self {
            title: title.into(),
            tagline: None,
            logos: Vec::new(),
            dates,
            venue: None,
            event_type: None,
            organized_by: None,
            academic_year: None,
            semester: None,
            target_audience: None,
            participants: None,
            faculty_coordinators: Vec::new(),
            student_coordinators: Vec::new(),
            chief_guest: None,
            hosted_by: None,
            guests_of_honor: None,
            special_mentions: None,
            blocks: Vec::new(),
            attendance_files: Vec::new(),
            misc_files: Vec::new(),
            narrative: None,
            status: ReportStatus::Draft,
        }
    }

    /// Checks the preconditions a report must meet before a document is built.
    pub fn validate(&self) -> Result<(), ModelError> {
        if self.title.trim().is_empty() {
            return Err(ModelError::EmptyTitle);
        }
        if self.dates.start_date > self.dates.end_date {
            return Err(ModelError::DateOrder {
                start: self.dates.start_date,
                end: self.dates.end_date,
            });
        }
        Ok(())
    }

    pub fn narrative_text(&self) -> Option<&str> {
        non_blank(self.narrative.as_deref())
    }

    pub fn special_mentions_text(&self) -> Option<&str> {
        non_blank(self.special_mentions.as_deref())
    }

    /// The chief guest, if one with a non-blank name was recorded.
    pub fn named_chief_guest(&self) -> Option<&ChiefGuest> {
        self.chief_guest
            .as_ref()
            .filter(|guest| !guest.name.trim().is_empty())
    }

    pub fn first_faculty_name(&self) -> Option<&str> {
        self.faculty_coordinators
            .iter()
            .map(|f| f.name.trim())
            .find(|name| !name.is_empty())
    }

    pub fn has_people(&self) -> bool {
        !self.faculty_coordinators.is_empty()
            || !self.student_coordinators.is_empty()
            || self.named_chief_guest().is_some()
    }
}

pub(crate) fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}
