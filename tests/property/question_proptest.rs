//! Property-based tests for question semantics

use proptest::prelude::*;

use formcraft::shared::{Question, QuestionKind};

proptest! {
    #[test]
    fn answer_taken_matches_trimmed_emptiness(answer in ".*") {
        let expected = !answer.trim().is_empty();
        prop_assert_eq!(Question::answer_is_taken(Some(&answer)), expected);
    }

    #[test]
    fn questions_survive_the_wire(
        title in ".{0,40}",
        placeholder in ".{0,40}",
        required in any::<bool>(),
        order in 0i32..100,
        kind_index in 0usize..QuestionKind::ALL.len()
    ) {
        let mut question = Question::draft(title, order);
        question.placeholder = placeholder;
        question.required = required;
        question.kind = QuestionKind::ALL[kind_index];

        let json = serde_json::to_string(&question).unwrap();
        let back: Question = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(back, question);
    }
}
