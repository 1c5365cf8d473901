//! Email source seam. The reference deployment ships a canned inbox; a real
//! mail-retrieval integration implements the same finite, batch-returned
//! interface (not a live stream).

use async_trait::async_trait;
use chrono::{Duration, Utc};

use crate::models::email::EmailSimulation;

/// Carried in `AppState` as `Arc<dyn EmailSource>`.
#[async_trait]
pub trait EmailSource: Send + Sync {
    /// The ordered batch of messages currently available for scanning.
    async fn fetch(&self) -> Vec<EmailSimulation>;
}

/// Three canned ATS-style notifications: an application receipt, a screening
/// invite, and a rejection.
pub struct MockInbox;

#[async_trait]
impl EmailSource for MockInbox {
    async fn fetch(&self) -> Vec<EmailSimulation> {
        let now = Utc::now();
        vec![
            EmailSimulation {
                id: "e1".to_string(),
                subject: "Application Received - Frontend Engineer".to_string(),
                sender: "careers@techcorp.com".to_string(),
                body: "Dear Candidate, Thank you for applying to the Frontend Engineer \
                       position at TechCorp. We have received your application and our \
                       team is currently reviewing it."
                    .to_string(),
                date: now,
            },
            EmailSimulation {
                id: "e2".to_string(),
                subject: "Next Steps: Product Designer Interview".to_string(),
                sender: "recruiting@designstudio.io".to_string(),
                body: "Hi there, We were impressed by your portfolio! We'd like to \
                       invite you to a screening call for the Product Designer role at \
                       DesignStudio."
                    .to_string(),
                date: now - Duration::days(1),
            },
            EmailSimulation {
                id: "e3".to_string(),
                subject: "Update on your application".to_string(),
                sender: "no-reply@oldbank.com".to_string(),
                body: "Thank you for your interest in OldBank. Unfortunately, we have \
                       decided to move forward with other candidates for the Data \
                       Analyst role."
                    .to_string(),
                date: now - Duration::days(2),
            },
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_inbox_returns_three_newest_first() {
        let emails = MockInbox.fetch().await;
        assert_eq!(emails.len(), 3);
        assert!(emails.windows(2).all(|w| w[0].date >= w[1].date));
        assert_eq!(emails[0].id, "e1");
    }
}
