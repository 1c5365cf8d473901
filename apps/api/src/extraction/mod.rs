//! Email Extraction Adapter — maps raw email text to a best-effort partial job
//! record via a structured Gemini call.
//!
//! Failures never cross this boundary: any transport error, non-JSON response,
//! or schema mismatch degrades to the EMPTY partial. The adapter never writes
//! to the board; only the import pipeline decides whether an extraction result
//! is materialized into a record.

pub mod prompts;

use async_trait::async_trait;
use serde::Deserialize;
use tracing::warn;

use crate::llm_client::LlmClient;
use crate::models::job::JobStatus;

/// Best-effort partial record extracted from one email. The request marks
/// company, title, and status as required, but the remote service is not
/// trusted to supply them — every field is optional here.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ExtractedJob {
    pub company: Option<String>,
    pub title: Option<String>,
    pub status: Option<JobStatus>,
    pub confidence: Option<f64>,
    pub summary: Option<String>,
}

impl ExtractedJob {
    /// The fallback for any failed or unparsable extraction: no fields set.
    pub fn empty() -> Self {
        Self::default()
    }
}

/// Extraction seam. The pipeline only sees this trait, so tests script
/// extraction outcomes without a network and a future non-Gemini backend slots
/// in without touching pipeline code.
///
/// Carried in `AppState` as `Arc<dyn JobExtractor>`.
#[async_trait]
pub trait JobExtractor: Send + Sync {
    /// Never fails: remote errors are absorbed and surface as an empty partial.
    async fn extract(&self, email_body: &str) -> ExtractedJob;
}

/// The production extractor, backed by the shared Gemini client.
pub struct GeminiExtractor {
    llm: LlmClient,
}

impl GeminiExtractor {
    pub fn new(llm: LlmClient) -> Self {
        Self { llm }
    }
}

#[async_trait]
impl JobExtractor for GeminiExtractor {
    async fn extract(&self, email_body: &str) -> ExtractedJob {
        let prompt = prompts::EXTRACT_PROMPT_TEMPLATE.replace("{email_body}", email_body);
        match self
            .llm
            .generate_json::<ExtractedJob>(&prompt, prompts::extraction_schema())
            .await
        {
            Ok(extracted) => extracted,
            Err(e) => {
                warn!("email extraction failed, returning empty partial: {e}");
                ExtractedJob::empty()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extracted_job_deserializes_full_payload() {
        let json = r#"{
            "company": "TechCorp",
            "title": "Frontend Engineer",
            "status": "SCREENING",
            "confidence": 0.92,
            "summary": "Application received, under review."
        }"#;
        let extracted: ExtractedJob = serde_json::from_str(json).unwrap();
        assert_eq!(extracted.company.as_deref(), Some("TechCorp"));
        assert_eq!(extracted.status, Some(JobStatus::Screening));
        assert!(extracted.confidence.unwrap() > 0.9);
    }

    #[test]
    fn test_extracted_job_tolerates_missing_fields() {
        let extracted: ExtractedJob = serde_json::from_str(r#"{"company": "TechCorp"}"#).unwrap();
        assert_eq!(extracted.company.as_deref(), Some("TechCorp"));
        assert!(extracted.title.is_none());
        assert!(extracted.status.is_none());
    }

    #[test]
    fn test_unknown_status_string_fails_parse() {
        // An out-of-enumeration status must not sneak through as a record;
        // the whole parse fails and the adapter falls back to empty.
        let result = serde_json::from_str::<ExtractedJob>(r#"{"status": "GHOSTED"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_empty_partial_has_no_fields() {
        let empty = ExtractedJob::empty();
        assert!(empty.company.is_none());
        assert!(empty.title.is_none());
        assert!(empty.status.is_none());
        assert!(empty.summary.is_none());
    }

    #[tokio::test]
    async fn test_remote_failure_yields_empty_partial() {
        // Without a credential the remote call fails immediately; the failure
        // must not cross the adapter boundary.
        let extractor = GeminiExtractor::new(LlmClient::new(None));
        let extracted = extractor
            .extract("Thank you for applying to the Frontend Engineer position at TechCorp.")
            .await;
        assert!(extracted.company.is_none());
        assert!(extracted.title.is_none());
        assert!(extracted.status.is_none());
    }
}
