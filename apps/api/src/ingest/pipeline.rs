//! Import Pipeline — sequential extraction over an email batch, a validation
//! gate, and one atomic batch insert into the board.

use tokio::sync::RwLock;
use tracing::debug;
use uuid::Uuid;

use crate::board::JobBoard;
use crate::errors::AppError;
use crate::extraction::JobExtractor;
use crate::models::email::EmailSimulation;
use crate::models::job::{JobApplication, JobSource, JobStatus};

/// Runs one extraction call at a time over the batch — deliberate throttling
/// to keep the remote API rate-limit safe and result order deterministic —
/// and builds the records that survive the validation gate, in input order.
///
/// A failed extraction surfaces as an empty partial (absorbed inside the
/// adapter) and the batch keeps going; the caller cannot distinguish it from a
/// validation rejection beyond the final count.
pub async fn collect_imports(
    extractor: &dyn JobExtractor,
    emails: &[EmailSimulation],
) -> Vec<JobApplication> {
    let mut imported = Vec::new();

    for email in emails {
        let extracted = extractor.extract(&email.body).await;

        // Validation gate: no record without both a company and a title.
        let (Some(company), Some(title)) = (extracted.company, extracted.title) else {
            debug!("skipping email {}: missing company or title", email.id);
            continue;
        };
        if company.trim().is_empty() || title.trim().is_empty() {
            debug!("skipping email {}: blank company or title", email.id);
            continue;
        }

        imported.push(JobApplication {
            id: Uuid::new_v4(),
            company,
            title,
            status: extracted.status.unwrap_or(JobStatus::Applied),
            // The email's date, not the import time.
            date_applied: email.date,
            description: extracted.summary,
            salary_range: None,
            notes: None,
            ai_insights: None,
            source: JobSource::GmailAuto,
        });
    }

    imported
}

/// Full import: collect without holding the board lock, then apply the whole
/// batch in a single insert. Returns the number of records created, which may
/// be fewer than the input count.
pub async fn import_emails(
    extractor: &dyn JobExtractor,
    emails: &[EmailSimulation],
    board: &RwLock<JobBoard>,
) -> Result<usize, AppError> {
    let imported = collect_imports(extractor, emails).await;
    let mut board = board.write().await;
    board.insert_batch(imported)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extraction::ExtractedJob;
    use async_trait::async_trait;
    use chrono::{Duration, Utc};
    use std::collections::VecDeque;
    use std::sync::Mutex;

    /// Pops scripted outcomes in call order. Extraction is strictly
    /// sequential, so the order is deterministic.
    struct ScriptedExtractor {
        outcomes: Mutex<VecDeque<ExtractedJob>>,
    }

    impl ScriptedExtractor {
        fn new(outcomes: Vec<ExtractedJob>) -> Self {
            Self {
                outcomes: Mutex::new(outcomes.into()),
            }
        }
    }

    #[async_trait]
    impl JobExtractor for ScriptedExtractor {
        async fn extract(&self, _email_body: &str) -> ExtractedJob {
            self.outcomes
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or_default()
        }
    }

    fn email(id: &str, days_ago: i64) -> EmailSimulation {
        EmailSimulation {
            id: id.to_string(),
            subject: format!("subject {id}"),
            sender: format!("{id}@example.com"),
            body: format!("body of {id}"),
            date: Utc::now() - Duration::days(days_ago),
        }
    }

    fn extracted(company: &str, title: &str) -> ExtractedJob {
        ExtractedJob {
            company: Some(company.to_string()),
            title: Some(title.to_string()),
            ..ExtractedJob::default()
        }
    }

    #[tokio::test]
    async fn test_three_emails_one_without_company_creates_two_records() {
        let emails = [email("e1", 0), email("e2", 1), email("e3", 2)];
        let extractor = ScriptedExtractor::new(vec![
            extracted("TechCorp", "Frontend Engineer"),
            ExtractedJob {
                title: Some("Product Designer".to_string()),
                ..ExtractedJob::default()
            },
            extracted("OldBank", "Data Analyst"),
        ]);

        let board = RwLock::new(JobBoard::new());
        let created = import_emails(&extractor, &emails, &board).await.unwrap();
        assert_eq!(created, 2);

        let board = board.read().await;
        assert_eq!(board.len(), 2);
        // Relative input order preserved for the surviving subset.
        assert_eq!(board.jobs()[0].company, "TechCorp");
        assert_eq!(board.jobs()[1].company, "OldBank");
        // The third record carries the third email's date, not the import time.
        assert_eq!(board.jobs()[1].date_applied, emails[2].date);
    }

    #[tokio::test]
    async fn test_imported_records_are_gmail_sourced_with_email_dates() {
        let emails = [email("e1", 0), email("e2", 3)];
        let extractor = ScriptedExtractor::new(vec![
            extracted("TechCorp", "Frontend Engineer"),
            extracted("DesignStudio", "Product Designer"),
        ]);

        let jobs = collect_imports(&extractor, &emails).await;
        assert_eq!(jobs.len(), 2);
        for (job, source_email) in jobs.iter().zip(&emails) {
            assert_eq!(job.source, JobSource::GmailAuto);
            assert_eq!(job.date_applied, source_email.date);
        }
    }

    #[tokio::test]
    async fn test_status_defaults_to_applied_when_extractor_omits_it() {
        let extractor = ScriptedExtractor::new(vec![extracted("TechCorp", "Engineer")]);
        let jobs = collect_imports(&extractor, &[email("e1", 0)]).await;
        assert_eq!(jobs[0].status, JobStatus::Applied);
    }

    #[tokio::test]
    async fn test_extractor_status_and_summary_are_carried() {
        let extractor = ScriptedExtractor::new(vec![ExtractedJob {
            company: Some("DesignStudio".to_string()),
            title: Some("Product Designer".to_string()),
            status: Some(JobStatus::Screening),
            confidence: Some(0.9),
            summary: Some("Invited to a screening call.".to_string()),
        }]);
        let jobs = collect_imports(&extractor, &[email("e1", 0)]).await;
        assert_eq!(jobs[0].status, JobStatus::Screening);
        assert_eq!(jobs[0].description.as_deref(), Some("Invited to a screening call."));
    }

    #[tokio::test]
    async fn test_failed_extraction_does_not_abort_the_batch() {
        // An adapter failure arrives here as the empty partial.
        let emails = [email("e1", 0), email("e2", 1)];
        let extractor = ScriptedExtractor::new(vec![
            ExtractedJob::empty(),
            extracted("OldBank", "Data Analyst"),
        ]);

        let jobs = collect_imports(&extractor, &emails).await;
        assert_eq!(jobs.len(), 1);
        assert_eq!(jobs[0].company, "OldBank");
    }

    #[tokio::test]
    async fn test_blank_company_is_rejected_by_the_gate() {
        let extractor = ScriptedExtractor::new(vec![extracted("   ", "Engineer")]);
        let jobs = collect_imports(&extractor, &[email("e1", 0)]).await;
        assert!(jobs.is_empty());
    }

    #[tokio::test]
    async fn test_batch_lands_in_front_of_existing_records() {
        let board = RwLock::new(JobBoard::new());
        let existing = JobApplication::manual("Spotify", "Web Engineer II");
        board.write().await.add(existing.clone()).unwrap();

        let extractor = ScriptedExtractor::new(vec![extracted("TechCorp", "Engineer")]);
        let created = import_emails(&extractor, &[email("e1", 0)], &board)
            .await
            .unwrap();
        assert_eq!(created, 1);

        let board = board.read().await;
        assert_eq!(board.jobs()[0].company, "TechCorp");
        assert_eq!(board.jobs()[1].id, existing.id);
    }
}
