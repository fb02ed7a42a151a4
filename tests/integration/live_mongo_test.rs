//! End-to-end scenario against a live MongoDB
//!
//! Ignored by default: point `MONGO_URI` at a running instance and run with
//! `cargo test -- --ignored` to exercise the full create → list → fetch →
//! edit → submit → delete cycle against real collections.

#[cfg(feature = "ssr")]
mod tests {
    use formcraft::backend::server::config::{connect_store, ServerConfig};
    use formcraft::shared::messages;
    use formcraft::shared::requests::{
        DeleteFormRequest, FetchFormRequest, SubmitAnswersRequest,
    };

    use crate::common::fixtures::{email_question, save_request};

    async fn test_store() -> formcraft::backend::FormStore {
        let mut config = ServerConfig::from_env();
        config.db_name = "formcraft_e2e".to_string();
        connect_store(&config).await.expect("store connects")
    }

    #[tokio::test]
    #[ignore] // Requires a running MongoDB (set MONGO_URI)
    async fn create_fetch_submit_delete_round_trip() {
        let store = test_store().await;
        let title = format!("Survey {}", std::process::id());

        // create
        let created = assert_ok!(
            store
                .save_form(save_request(&title, vec![email_question("Q1", 0)]))
                .await
        );
        assert!(created.success, "create failed: {}", created.message);
        let form_id = created.data.unwrap().form_id;
        assert_eq!(form_id.len(), 25);

        // duplicate title is rejected without touching the stored form
        let duplicate = assert_ok!(
            store
                .save_form(save_request(&title, vec![email_question("Q1", 0)]))
                .await
        );
        assert!(!duplicate.success);
        assert_eq!(duplicate.message, messages::DUPLICATE_FORM_TITLE);

        // list contains the new form
        let listed = assert_ok!(store.list_forms().await);
        assert!(listed.success);
        assert!(listed
            .data
            .unwrap()
            .iter()
            .any(|form| form.form_id == form_id));

        // fetch returns the question with its 0-based position preserved
        let fetch = FetchFormRequest {
            form_id: form_id.clone(),
        };
        let fetched = assert_ok!(store.fetch_form(&fetch).await);
        assert!(fetched.success);
        let form = fetched.data.unwrap();
        assert_eq!(form.questions.len(), 1);
        assert_eq!(form.questions[0].order, 0);
        assert!(!form.questions[0].is_taken);
        assert_eq!(form.questions[0].question_id.len(), 25);

        // submit an answer: isTaken flips, takenAt is set
        let mut answered = form.questions.clone();
        answered[0].answer = Some("someone@example.com".to_string());
        let submitted = assert_ok!(
            store
                .submit_answers(&SubmitAnswersRequest {
                    form_id: form_id.clone(),
                    questions: answered,
                })
                .await
        );
        assert!(submitted.success, "submit failed: {}", submitted.message);

        let refetched = assert_ok!(store.fetch_form(&fetch).await);
        let form = refetched.data.unwrap();
        assert!(form.questions[0].is_taken);
        assert!(form.questions[0].taken_at.is_some());

        // delete removes the form and cascades to its questions
        let deleted = assert_ok!(
            store
                .delete_form(&DeleteFormRequest {
                    form_id: form_id.clone(),
                })
                .await
        );
        assert!(deleted.success);

        let gone = assert_ok!(store.fetch_form(&fetch).await);
        assert!(!gone.success);
        assert_eq!(gone.message, messages::INVALID_RECORD_ID_FETCH);

        // deleting again reports the unknown id
        let again = assert_ok!(
            store
                .delete_form(&DeleteFormRequest { form_id })
                .await
        );
        assert!(!again.success);
        assert_eq!(again.message, messages::INVALID_FORM_ID);
    }
}
