//! Prompt construction for the career-advice call.

use crate::models::job::{JobApplication, JobStatus};

/// Extra instruction applied only to rejected applications: reframe toward
/// pivoting and requesting feedback instead of generic stage tips.
pub const REJECTED_TONE_INSTRUCTION: &str =
    "The application was rejected, so provide encouraging advice on how to pivot \
     or ask for feedback.";

pub fn build_advice_prompt(job: &JobApplication) -> String {
    let mut prompt = format!(
        "I have a job application for the role of \"{}\" at \"{}\".\n\
         The current status is \"{}\".\n\n\
         Provide 3 concise, actionable, and high-impact tips for me at this specific stage.\n",
        job.title,
        job.company,
        job.status.label()
    );
    if job.status == JobStatus::Rejected {
        prompt.push_str(REJECTED_TONE_INSTRUCTION);
        prompt.push('\n');
    }
    prompt.push_str("Keep the tone professional and encouraging. Max 100 words.");
    prompt
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_seeds_title_company_and_status_label() {
        let mut job = JobApplication::manual("Spotify", "Web Engineer II");
        job.status = JobStatus::Interview;
        let prompt = build_advice_prompt(&job);
        assert!(prompt.contains("\"Web Engineer II\""));
        assert!(prompt.contains("\"Spotify\""));
        assert!(prompt.contains("\"Interviewing\""));
        assert!(prompt.contains("3 concise"));
    }

    #[test]
    fn test_rejected_prompt_reframes_toward_pivoting() {
        let mut job = JobApplication::manual("OldBank", "Data Analyst");
        job.status = JobStatus::Rejected;
        let prompt = build_advice_prompt(&job);
        assert!(prompt.contains(REJECTED_TONE_INSTRUCTION));
    }

    #[test]
    fn test_non_rejected_prompt_has_no_pivot_instruction() {
        let job = JobApplication::manual("Google", "Engineer");
        let prompt = build_advice_prompt(&job);
        assert!(!prompt.contains(REJECTED_TONE_INSTRUCTION));
    }
}
