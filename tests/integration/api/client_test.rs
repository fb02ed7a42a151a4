//! Desktop API client integration tests
//!
//! Runs the blocking `FormsApiClient` against a wiremock server. The client
//! creates its own tokio runtime per call, so it must be driven from a plain
//! thread rather than from inside the test runtime.

use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use formcraft::egui_app::{Config, FormsApiClient};
use formcraft::shared::config::AppConfig;
use formcraft::shared::{api_paths, messages, ApiEnvelope, Form};

fn client_for(server_url: String) -> FormsApiClient {
    let config = Config::with_builder(AppConfig::builder().server_url(server_url))
        .expect("test config is valid");
    FormsApiClient::new(config)
}

#[tokio::test]
async fn list_forms_parses_the_success_envelope() {
    let mock_server = MockServer::start().await;
    let form = Form::new("a".repeat(25), "Survey", "desc");
    let envelope = ApiEnvelope::ok(messages::FORMS_LOADED, vec![form]);
    Mock::given(method("POST"))
        .and(path(api_paths::LIST_FORMS))
        .respond_with(ResponseTemplate::new(200).set_body_json(&envelope))
        .mount(&mock_server)
        .await;

    let client = client_for(mock_server.uri());
    let result = std::thread::spawn(move || client.list_forms())
        .join()
        .unwrap();

    let envelope = assert_ok!(result);
    assert!(envelope.success);
    assert_eq!(envelope.message, messages::FORMS_LOADED);
    let forms = envelope.data.unwrap();
    assert_eq!(forms.len(), 1);
    assert_eq!(forms[0].title, "Survey");
}

#[tokio::test]
async fn logical_failure_stays_inside_the_envelope() {
    let mock_server = MockServer::start().await;
    let envelope = ApiEnvelope::<()>::fail(messages::INVALID_FORM_ID);
    Mock::given(method("POST"))
        .and(path(api_paths::DELETE_FORM))
        .respond_with(ResponseTemplate::new(200).set_body_json(&envelope))
        .mount(&mock_server)
        .await;

    let client = client_for(mock_server.uri());
    let result = std::thread::spawn(move || client.delete_form("nope"))
        .join()
        .unwrap();

    let envelope = assert_ok!(result);
    assert!(!envelope.success);
    assert_eq!(envelope.message, messages::INVALID_FORM_ID);
}

#[tokio::test]
async fn http_failure_is_a_transport_error() {
    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(api_paths::FETCH_FORM))
        .respond_with(ResponseTemplate::new(500))
        .mount(&mock_server)
        .await;

    let client = client_for(mock_server.uri());
    let result = std::thread::spawn(move || client.fetch_form("abc"))
        .join()
        .unwrap();

    let error = result.expect_err("a 500 is not a logical failure");
    assert_contains!(error, "Request failed");
}
