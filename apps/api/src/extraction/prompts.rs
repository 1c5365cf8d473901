//! Prompt and response schema for the email extraction call.

use serde_json::{json, Value};

/// Extraction prompt. Replace `{email_body}` before sending.
pub const EXTRACT_PROMPT_TEMPLATE: &str = r#"Analyze the following email text which is suspected to be related to a job application.
Extract the company name, job title, and determine the current status of the application based on the content.

Email Content:
"{email_body}""#;

/// Response schema sent with the structured call, using the Gemini schema
/// vocabulary. company/title/status are requested as required, but the
/// response is still treated as untrusted by the adapter.
pub fn extraction_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "company": { "type": "STRING", "description": "Name of the company" },
            "title": { "type": "STRING", "description": "Job title or role" },
            "status": {
                "type": "STRING",
                "enum": ["APPLIED", "SCREENING", "INTERVIEW", "OFFER", "REJECTED"],
                "description": "Inferred status of the application"
            },
            "confidence": { "type": "NUMBER", "description": "Confidence score 0-1" },
            "summary": { "type": "STRING", "description": "Brief summary of the email content" }
        },
        "required": ["company", "title", "status"]
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_template_has_body_placeholder() {
        assert!(EXTRACT_PROMPT_TEMPLATE.contains("{email_body}"));
        let prompt = EXTRACT_PROMPT_TEMPLATE.replace("{email_body}", "Thanks for applying!");
        assert!(prompt.contains("Thanks for applying!"));
        assert!(!prompt.contains("{email_body}"));
    }

    #[test]
    fn test_schema_requires_company_title_status() {
        let schema = extraction_schema();
        let required: Vec<_> = schema["required"]
            .as_array()
            .unwrap()
            .iter()
            .map(|v| v.as_str().unwrap())
            .collect();
        assert_eq!(required, vec!["company", "title", "status"]);
    }

    #[test]
    fn test_schema_status_enum_matches_pipeline_stages() {
        let schema = extraction_schema();
        let stages = schema["properties"]["status"]["enum"].as_array().unwrap();
        assert_eq!(stages.len(), 5);
        assert_eq!(stages[0], "APPLIED");
        assert_eq!(stages[4], "REJECTED");
    }
}
