//! Forms API Client
//!
//! This module provides the HTTP client the desktop app uses to talk to the
//! form endpoints. Calls are blocking: each one runs on its own tokio
//! runtime, so callers invoke them from a worker thread and ship the result
//! back over a channel.
//!
//! Logical failures travel inside the returned envelope (`success=false`
//! plus a message); the `Err` arm of these methods is reserved for
//! transport-level problems.

use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tokio::runtime::Runtime;

use crate::egui_app::config::Config;
use crate::shared::api_paths;
use crate::shared::envelope::ApiEnvelope;
use crate::shared::requests::{
    DeleteFormRequest, FetchFormRequest, SaveFormData, SaveFormRequest, SubmitAnswersRequest,
};
use crate::shared::Form;

/// Forms API client
#[derive(Clone)]
pub struct FormsApiClient {
    config: Config,
    client: Client,
}

impl FormsApiClient {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            client: Client::new(),
        }
    }

    /// List all forms
    pub fn list_forms(&self) -> Result<ApiEnvelope<Vec<Form>>, String> {
        self.post(api_paths::LIST_FORMS, &serde_json::json!({}))
    }

    /// Fetch one form with its questions
    pub fn fetch_form(&self, form_id: &str) -> Result<ApiEnvelope<Form>, String> {
        let request = FetchFormRequest {
            form_id: form_id.to_string(),
        };
        self.post(api_paths::FETCH_FORM, &request)
    }

    /// Create or update a form
    pub fn save_form(&self, request: &SaveFormRequest) -> Result<ApiEnvelope<SaveFormData>, String> {
        self.post(api_paths::SAVE_FORM, request)
    }

    /// Submit a respondent's answers
    pub fn submit_answers(
        &self,
        request: &SubmitAnswersRequest,
    ) -> Result<ApiEnvelope<()>, String> {
        self.post(api_paths::SUBMIT_ANSWERS, request)
    }

    /// Delete a form
    pub fn delete_form(&self, form_id: &str) -> Result<ApiEnvelope<()>, String> {
        let request = DeleteFormRequest {
            form_id: form_id.to_string(),
        };
        self.post(api_paths::DELETE_FORM, &request)
    }

    fn post<Req, Resp>(&self, path: &str, body: &Req) -> Result<Resp, String>
    where
        Req: Serialize,
        Resp: DeserializeOwned,
    {
        let url = self.config.api_url(path);

        let rt = Runtime::new().map_err(|e| format!("Failed to create runtime: {}", e))?;

        rt.block_on(async {
            let response = self
                .client
                .post(&url)
                .header("Content-Type", "application/json")
                .json(body)
                .send()
                .await
                .map_err(|e| format!("Network error: {}", e))?;

            if !response.status().is_success() {
                let status = response.status();
                let error_text = response
                    .text()
                    .await
                    .unwrap_or_else(|_| status.to_string());
                return Err(format!("Request failed: {} - {}", status, error_text));
            }

            response
                .json::<Resp>()
                .await
                .map_err(|e| format!("Failed to parse response: {}", e))
        })
    }
}
