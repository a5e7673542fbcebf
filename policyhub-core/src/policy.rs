use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A policy proposal as served by the API.
///
/// Ownership, dates and votes are server-assigned and kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Policy {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub owner: String,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub votes: Vec<String>,
}

impl Policy {
    #[must_use]
    pub fn vote_count(&self) -> usize {
        self.votes.len()
    }

    #[must_use]
    pub fn has_voted(&self, voter: &str) -> bool {
        self.votes.iter().any(|v| v == voter)
    }

    /// Calendar year of the creation date, if it can be read.
    #[must_use]
    pub fn year(&self) -> Option<i32> {
        parse_date(&self.date)
            .map(|d| d.year())
            .or_else(|| leading_year(&self.date))
    }

    /// Creation date formatted as `M/D/YYYY`, or the raw value when unparseable.
    #[must_use]
    pub fn display_date(&self) -> String {
        parse_date(&self.date).map_or_else(
            || self.date.clone(),
            |d| d.format("%-m/%-d/%Y").to_string(),
        )
    }

    /// First `max_chars` characters of the description followed by an ellipsis.
    #[must_use]
    pub fn summary(&self, max_chars: usize) -> String {
        let head: String = self.description.chars().take(max_chars).collect();
        format!("{head}...")
    }
}

fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.date_naive());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(dt.date());
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()
}

fn leading_year(raw: &str) -> Option<i32> {
    let digits = raw.trim().get(..4)?;
    if digits.chars().all(|c| c.is_ascii_digit()) {
        digits.parse().ok()
    } else {
        None
    }
}

/// Categories offered when submitting a policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Academic,
    Administrative,
    StudentLife,
    Housing,
    Dining,
    HealthWellness,
    Technology,
    Other,
}

impl Category {
    pub const ALL: [Self; 8] = [
        Self::Academic,
        Self::Administrative,
        Self::StudentLife,
        Self::Housing,
        Self::Dining,
        Self::HealthWellness,
        Self::Technology,
        Self::Other,
    ];

    /// Label sent over the wire and shown in the UI.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Academic => "Academic",
            Self::Administrative => "Administrative",
            Self::StudentLife => "Student Life",
            Self::Housing => "Housing",
            Self::Dining => "Dining",
            Self::HealthWellness => "Health & Wellness",
            Self::Technology => "Technology",
            Self::Other => "Other",
        }
    }

    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.label() == label)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Body of an add-policy request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PolicyDraft {
    pub title: String,
    pub description: String,
    pub category: String,
}

impl PolicyDraft {
    #[must_use]
    pub fn new(title: impl Into<String>, description: impl Into<String>, category: Category) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            category: category.label().to_string(),
        }
    }
}
