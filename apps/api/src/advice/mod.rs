//! Advice Adapter — free-text career guidance for one tracked application.
//!
//! Purely informational: the result is shown to the user and never persisted
//! into the board. Remote failures are absorbed here and replaced with a fixed
//! user-facing message.

pub mod handlers;
pub mod prompts;

use tracing::warn;

use crate::llm_client::LlmClient;
use crate::models::job::JobApplication;

/// Shown when the remote call fails outright.
pub const ADVICE_FALLBACK: &str = "Unable to generate advice. Please check your connection.";
/// Shown when the remote call succeeds but returns no usable text.
pub const ADVICE_EMPTY: &str = "No advice available at the moment.";

/// Asks for three concise, actionable tips for the application's current
/// stage. Never fails; never mutates the board.
pub async fn career_advice(llm: &LlmClient, job: &JobApplication) -> String {
    let prompt = prompts::build_advice_prompt(job);
    match llm.generate(&prompt).await {
        Ok(response) => match response.text() {
            Some(text) if !text.trim().is_empty() => text.to_string(),
            _ => ADVICE_EMPTY.to_string(),
        },
        Err(e) => {
            warn!("advice generation failed for job {}: {e}", job.id);
            ADVICE_FALLBACK.to_string()
        }
    }
}
