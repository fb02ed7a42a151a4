//! Request and document fixtures shared across tests

use formcraft::shared::{Question, QuestionKind, SaveFormRequest};

/// A required email question draft, the way the editor would produce it
pub fn email_question(title: &str, order: i32) -> Question {
    let mut question = Question::draft(title, order);
    question.kind = QuestionKind::Email;
    question.required = true;
    question
}

/// A create-mode save request
pub fn save_request(title: &str, questions: Vec<Question>) -> SaveFormRequest {
    SaveFormRequest {
        form_id: None,
        title: title.to_string(),
        description: "desc".to_string(),
        questions,
        update_only: false,
    }
}
