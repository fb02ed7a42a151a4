//! Form Data Structure
//!
//! A named, described collection of ordered questions. The `questions` field
//! is denormalized: it is filled from the `formquestions` collection when a
//! form is fetched and is never trusted from a stored form document.

use bson::oid::ObjectId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::shared::question::Question;

/// Represents a form
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Form {
    /// Store-assigned document id; absent until the form is persisted
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    /// Unique form identifier, generated at creation (25 chars)
    #[serde(rename = "formId")]
    pub form_id: String,
    /// Form title, unique among forms
    pub title: String,
    /// Free-form description
    #[serde(default)]
    pub description: String,
    /// When the form was created
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
    /// When the form was last updated
    #[serde(rename = "updatedAt")]
    pub updated_at: DateTime<Utc>,
    /// Questions belonging to this form, sorted by `order`.
    /// Populated at read time; not persisted with the form document.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub questions: Vec<Question>,
}

impl Form {
    /// Create a new form record with both timestamps set to now.
    pub fn new(
        form_id: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: None,
            form_id: form_id.into(),
            title: title.into(),
            description: description.into(),
            created_at: now,
            updated_at: now,
            questions: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_form_has_matching_timestamps_and_no_questions() {
        let form = Form::new("a".repeat(25), "Survey", "desc");
        assert_eq!(form.created_at, form.updated_at);
        assert!(form.questions.is_empty());
        assert!(form.id.is_none());
    }

    #[test]
    fn empty_question_list_is_not_serialized() {
        let form = Form::new("a".repeat(25), "Survey", "desc");
        let json = serde_json::to_value(&form).unwrap();
        assert!(json.get("questions").is_none());
        assert!(json.get("formId").is_some());
        assert!(json.get("createdAt").is_some());
    }
}
