//! Question Data Structure
//!
//! One input field belonging to a form, with a type, requiredness, display
//! order, and the answer collected from the respondent (if any).

use bson::oid::ObjectId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Maximum number of questions a form can carry (enforced by the editor UI).
pub const MAX_QUESTIONS_PER_FORM: usize = 20;

/// Input type of a question
///
/// The set is fixed; anything else is rejected when the payload is parsed.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum QuestionKind {
    /// Free text input
    Text,
    /// Email address input
    Email,
    /// Masked password input
    Password,
    /// Numeric input
    Number,
    /// Date input
    Date,
}

impl Default for QuestionKind {
    fn default() -> Self {
        QuestionKind::Text
    }
}

impl QuestionKind {
    /// Every kind, in the order the editor offers them.
    pub const ALL: [QuestionKind; 5] = [
        QuestionKind::Text,
        QuestionKind::Email,
        QuestionKind::Password,
        QuestionKind::Number,
        QuestionKind::Date,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            QuestionKind::Text => "text",
            QuestionKind::Email => "email",
            QuestionKind::Password => "password",
            QuestionKind::Number => "number",
            QuestionKind::Date => "date",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "text" => Some(QuestionKind::Text),
            "email" => Some(QuestionKind::Email),
            "password" => Some(QuestionKind::Password),
            "number" => Some(QuestionKind::Number),
            "date" => Some(QuestionKind::Date),
            _ => None,
        }
    }
}

/// Represents one question of a form
///
/// The wire field names (`questionId`, `formId`, `isTaken`, `takenAt`, `type`)
/// match the stored documents in the `formquestions` collection.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Question {
    /// Store-assigned document id; absent until the question is persisted
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    /// Unique question identifier, generated at creation
    #[serde(rename = "questionId", default)]
    pub question_id: String,
    /// Identifier of the owning form
    #[serde(rename = "formId", default)]
    pub form_id: String,
    /// Question label shown to the respondent
    pub title: String,
    /// Placeholder text for the input
    #[serde(default)]
    pub placeholder: String,
    /// Input type
    #[serde(rename = "type", default)]
    pub kind: QuestionKind,
    /// Whether an answer is required before submission
    #[serde(default)]
    pub required: bool,
    /// Display sequence; unique per form
    #[serde(default)]
    pub order: i32,
    /// Answer collected from the respondent
    #[serde(default)]
    pub answer: Option<String>,
    /// Derived flag: true iff `answer` is a non-empty trimmed string
    #[serde(rename = "isTaken", default)]
    pub is_taken: bool,
    /// When the answer became non-empty
    #[serde(rename = "takenAt", default)]
    pub taken_at: Option<DateTime<Utc>>,
}

impl Question {
    /// Create an unsaved draft question, as the editor does when the user
    /// clicks "Add question".
    pub fn draft(title: impl Into<String>, order: i32) -> Self {
        Self {
            id: None,
            question_id: String::new(),
            form_id: String::new(),
            title: title.into(),
            placeholder: String::new(),
            kind: QuestionKind::Text,
            required: false,
            order,
            answer: None,
            is_taken: false,
            taken_at: None,
        }
    }

    /// Whether a submitted answer counts as "taken".
    ///
    /// An answer is taken iff it is non-empty after trimming whitespace.
    pub fn answer_is_taken(answer: Option<&str>) -> bool {
        answer.map(|a| !a.trim().is_empty()).unwrap_or(false)
    }
}
