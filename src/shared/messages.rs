//! Contract Message Strings
//!
//! The UI decides styling (success/danger) and follow-up behavior purely on
//! these message texts, so they are defined once and used verbatim on both
//! sides of the wire.

/// Generic internal-error message; specific store faults are never exposed
pub const GENERIC_FAILURE: &str = "Something went wrong. Please try again!";

// list forms
pub const NO_FORMS_FOUND: &str = "No forms found!";
pub const FORMS_LOADED: &str = "Forms loaded successfully!";

// fetch form
pub const INVALID_RECORD_ID_FETCH: &str = "Invalid record-Id!";
pub const NO_QUESTIONS_FOR_FORM: &str = "No questions found for this form!";
pub const FORM_LOADED: &str = "Form loaded successfully!";

// save form
pub const NO_QUESTIONS: &str = "No questions found!";
pub const DUPLICATE_FORM_TITLE: &str = "Form with the same name already exists!";
pub const INVALID_RECORD_ID_UPDATE: &str = "Invalid record-id!";
pub const FORM_CREATED: &str = "Form created successfully!";
pub const FORM_UPDATED: &str = "Form updated successfully!";

// submit answers
pub const ANSWERS_SAVED: &str = "Your response has been submitted successfully!";
pub const NO_ANSWERS_SAVED: &str = "No answers were saved!";

// delete form
pub const RECORD_ID_NOT_FOUND: &str = "Record-id not found!";
pub const INVALID_FORM_ID: &str = "Invalid form-id!";
pub const FORM_DELETED: &str = "Form deleted successfully!";

/// Shown instead of performing submit/delete actions when demo mode is on
pub const DEMO_MODE_WARNING: &str = "This is a demo application, this action is disabled!";
