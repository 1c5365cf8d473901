use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Application pipeline stages, ordered from first contact to final outcome.
///
/// `Rejected` is the last element of the flat order. Board controls only ever
/// reach it by advancing past `Offer`; direct assignment from any stage is
/// still allowed through the store (see DESIGN.md).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum JobStatus {
    Applied,
    Screening,
    Interview,
    Offer,
    Rejected,
}

impl JobStatus {
    /// Kanban column order. The `next`/`previous` transitions walk this list.
    pub const ORDER: [JobStatus; 5] = [
        JobStatus::Applied,
        JobStatus::Screening,
        JobStatus::Interview,
        JobStatus::Offer,
        JobStatus::Rejected,
    ];

    /// Human-readable column label.
    pub fn label(self) -> &'static str {
        match self {
            JobStatus::Applied => "Applied",
            JobStatus::Screening => "Online Assessment",
            JobStatus::Interview => "Interviewing",
            JobStatus::Offer => "Offer Received",
            JobStatus::Rejected => "Rejected",
        }
    }

    /// Visual category for the status badge. Consumed only by presentation.
    pub fn tone(self) -> &'static str {
        match self {
            JobStatus::Applied => "blue",
            JobStatus::Screening => "purple",
            JobStatus::Interview => "amber",
            JobStatus::Offer => "emerald",
            JobStatus::Rejected => "slate",
        }
    }

    fn position(self) -> usize {
        // ORDER contains every variant, so the lookup always succeeds.
        Self::ORDER.iter().position(|s| *s == self).unwrap_or(0)
    }

    /// The following status in the flat order, or `None` if already last.
    pub fn next(self) -> Option<JobStatus> {
        Self::ORDER.get(self.position() + 1).copied()
    }

    /// The preceding status in the flat order, or `None` if already first.
    pub fn previous(self) -> Option<JobStatus> {
        self.position().checked_sub(1).map(|i| Self::ORDER[i])
    }
}

/// How a record entered the board. Provenance only — never affects behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum JobSource {
    GmailAuto,
    Manual,
    LinkedinImport,
}

/// One tracked application. `id`, `date_applied`, and `source` are fixed at
/// creation; only `status` is mutated after insertion.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobApplication {
    pub id: Uuid,
    pub company: String,
    pub title: String,
    pub status: JobStatus,
    pub date_applied: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub salary_range: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ai_insights: Option<String>,
    pub source: JobSource,
}

impl JobApplication {
    /// A manually created record: fresh id, applied now, no enrichment fields.
    pub fn manual(company: impl Into<String>, title: impl Into<String>) -> Self {
        JobApplication {
            id: Uuid::new_v4(),
            company: company.into(),
            title: title.into(),
            status: JobStatus::Applied,
            date_applied: Utc::now(),
            description: None,
            salary_range: None,
            notes: None,
            ai_insights: None,
            source: JobSource::Manual,
        }
    }
}
