//! Envelope contract integration tests
//!
//! Verifies the response contract of the form endpoints without a live
//! store: every answer is HTTP 200, logical failure travels in `success`
//! and `message`, and store faults surface as the generic internal-error
//! envelope. The app is wired to an unreachable store URI with short
//! timeouts, so any test that reaches a validation message proves the
//! validation ran before any store call.

#[cfg(feature = "ssr")]
mod tests {
    use axum::http::StatusCode;
    use axum_test::TestServer;
    use formcraft::backend::server::config::ServerConfig;
    use formcraft::backend::server::init::create_app_with_config;
    use formcraft::shared::{api_paths, messages};

    const UNREACHABLE_STORE: &str =
        "mongodb://127.0.0.1:9/?serverSelectionTimeoutMS=200&connectTimeoutMS=200";

    const ALLOWED_ORIGIN: &str = "http://localhost:5173";

    async fn create_test_server() -> TestServer {
        let config = ServerConfig {
            mongo_uri: UNREACHABLE_STORE.to_string(),
            db_name: "formcraft_test".to_string(),
            port: 0,
            allowed_origins: vec![ALLOWED_ORIGIN.to_string()],
        };
        let app = create_app_with_config(&config)
            .await
            .expect("app assembles without reaching the store");
        TestServer::new(app).unwrap()
    }

    #[tokio::test]
    async fn store_faults_answer_200_with_generic_envelope() {
        let server = create_test_server().await;

        let response = server
            .post(api_paths::FETCH_FORM)
            .json(&serde_json::json!({ "formId": "does-not-matter" }))
            .await;

        assert_eq!(response.status_code(), StatusCode::OK);
        let body: serde_json::Value = response.json();
        assert_eq!(body["success"], false);
        assert_eq!(body["message"], messages::GENERIC_FAILURE);
        assert!(body.get("error").is_some(), "fault detail should be attached");
    }

    #[tokio::test]
    async fn save_with_empty_question_list_fails_before_any_store_call() {
        let server = create_test_server().await;

        let response = server
            .post(api_paths::SAVE_FORM)
            .json(&serde_json::json!({
                "title": "Survey",
                "description": "desc",
                "questions": [],
                "updateOnly": false
            }))
            .await;

        assert_eq!(response.status_code(), StatusCode::OK);
        let body: serde_json::Value = response.json();
        assert_eq!(body["success"], false);
        assert_eq!(body["message"], messages::NO_QUESTIONS);
        // a store round-trip would have produced the generic message instead
        assert!(body.get("error").is_none());
    }

    #[tokio::test]
    async fn delete_with_blank_id_fails_before_any_store_call() {
        let server = create_test_server().await;

        let response = server
            .post(api_paths::DELETE_FORM)
            .json(&serde_json::json!({ "formId": "  " }))
            .await;

        let body: serde_json::Value = response.json();
        assert_eq!(body["success"], false);
        assert_eq!(body["message"], messages::RECORD_ID_NOT_FOUND);
    }

    #[tokio::test]
    async fn submit_without_store_ids_fails_before_any_store_call() {
        let server = create_test_server().await;

        // no question carries a store `_id`, so no update model is built
        let response = server
            .post(api_paths::SUBMIT_ANSWERS)
            .json(&serde_json::json!({
                "formId": "f",
                "questions": [{ "title": "Q1", "type": "text", "answer": "hi" }]
            }))
            .await;

        let body: serde_json::Value = response.json();
        assert_eq!(body["success"], false);
        assert_eq!(body["message"], messages::NO_QUESTIONS);
    }

    #[tokio::test]
    async fn health_stays_up_when_the_store_is_down() {
        let server = create_test_server().await;

        let response = server.get(api_paths::HEALTH).await;

        assert_eq!(response.status_code(), StatusCode::OK);
        let body: serde_json::Value = response.json();
        assert_eq!(body["status"], "ok");
        assert!(body.get("forms").is_none());
    }

    #[tokio::test]
    async fn allowed_origin_gets_cors_headers() {
        let server = create_test_server().await;

        let response = server
            .get(api_paths::HEALTH)
            .add_header(
                axum::http::header::ORIGIN,
                axum::http::HeaderValue::from_static(ALLOWED_ORIGIN),
            )
            .await;

        let allow = response
            .headers()
            .get("access-control-allow-origin")
            .and_then(|v| v.to_str().ok())
            .map(str::to_owned);
        assert_eq!(allow.as_deref(), Some(ALLOWED_ORIGIN));
    }

    #[tokio::test]
    async fn unlisted_origin_gets_no_cors_headers() {
        let server = create_test_server().await;

        let response = server
            .get(api_paths::HEALTH)
            .add_header(
                axum::http::header::ORIGIN,
                axum::http::HeaderValue::from_static("http://evil.example.com"),
            )
            .await;

        assert!(response
            .headers()
            .get("access-control-allow-origin")
            .is_none());
    }

    #[tokio::test]
    async fn unknown_routes_are_404() {
        let server = create_test_server().await;
        let response = server.post("/api/forms/unknown").await;
        assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
    }
}
