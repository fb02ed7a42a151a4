//! Request and Response Payloads
//!
//! Explicit schemas for every endpoint body, replacing ad hoc field lookups.
//! Wire casing is camelCase to match the historical API.

use serde::{Deserialize, Serialize};

use crate::shared::messages;
use crate::shared::question::Question;

/// Body of the fetch-form endpoint
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FetchFormRequest {
    pub form_id: String,
}

/// Body of the save-form endpoint (create and update)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SaveFormRequest {
    /// Present in update mode; ignored on create
    #[serde(default)]
    pub form_id: Option<String>,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub questions: Vec<Question>,
    /// Selects edit-and-replace semantics versus create semantics
    #[serde(default)]
    pub update_only: bool,
}

impl SaveFormRequest {
    /// Pre-store validation: a form without questions is rejected before
    /// any database call is made.
    pub fn validate(&self) -> Result<(), &'static str> {
        if self.questions.is_empty() {
            return Err(messages::NO_QUESTIONS);
        }
        Ok(())
    }
}

/// Body of the submit-answers endpoint
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SubmitAnswersRequest {
    pub form_id: String,
    /// Questions in display order, each carrying its store `_id` and the
    /// respondent's answer
    #[serde(default)]
    pub questions: Vec<Question>,
}

/// Body of the delete-form endpoint
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DeleteFormRequest {
    #[serde(default)]
    pub form_id: String,
}

/// Payload returned by a successful save
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SaveFormData {
    pub form_id: String,
}

/// Payload of the health endpoint
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HealthStatus {
    pub status: String,
    /// Number of stored forms; absent when the store cannot be reached
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub forms: Option<u64>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn save_request_without_questions_is_invalid() {
        let req = SaveFormRequest {
            form_id: None,
            title: "Survey".into(),
            description: "desc".into(),
            questions: Vec::new(),
            update_only: false,
        };
        assert_eq!(req.validate(), Err(messages::NO_QUESTIONS));
    }

    #[test]
    fn save_request_with_questions_is_valid() {
        let req = SaveFormRequest {
            form_id: Some("x".repeat(25)),
            title: "Survey".into(),
            description: String::new(),
            questions: vec![Question::draft("Q1", 0)],
            update_only: true,
        };
        assert!(req.validate().is_ok());
    }

    #[test]
    fn save_request_uses_camel_case_on_the_wire() {
        let json = r#"{"formId":"abc","title":"T","updateOnly":true,"questions":[]}"#;
        let req: SaveFormRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.form_id.as_deref(), Some("abc"));
        assert!(req.update_only);
    }
}
