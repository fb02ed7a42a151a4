//! Form HTTP Handlers
//!
//! One handler per endpoint. Each parses a typed JSON body, invokes the data
//! access layer, and answers HTTP 200 with the uniform envelope. Store faults
//! bubble out as `BackendError` and are converted to the generic
//! internal-error envelope (also HTTP 200) by the error conversion.

use axum::extract::State;
use axum::response::Json;

use crate::backend::error::BackendError;
use crate::backend::server::state::AppState;
use crate::shared::envelope::ApiEnvelope;
use crate::shared::requests::{
    DeleteFormRequest, FetchFormRequest, HealthStatus, SaveFormData, SaveFormRequest,
    SubmitAnswersRequest,
};
use crate::shared::Form;

/// List all forms
pub async fn list_forms(
    State(state): State<AppState>,
) -> Result<Json<ApiEnvelope<Vec<Form>>>, BackendError> {
    Ok(Json(state.store.list_forms().await?))
}

/// Fetch one form with its questions, for editing or filling out
pub async fn fetch_form(
    State(state): State<AppState>,
    Json(request): Json<FetchFormRequest>,
) -> Result<Json<ApiEnvelope<Form>>, BackendError> {
    tracing::debug!(form_id = %request.form_id, "fetch form");
    Ok(Json(state.store.fetch_form(&request).await?))
}

/// Create a new form or update an existing one
pub async fn save_form(
    State(state): State<AppState>,
    Json(request): Json<SaveFormRequest>,
) -> Result<Json<ApiEnvelope<SaveFormData>>, BackendError> {
    tracing::info!(
        title = %request.title,
        update_only = request.update_only,
        questions = request.questions.len(),
        "save form"
    );
    Ok(Json(state.store.save_form(request).await?))
}

/// Store a respondent's answers
pub async fn submit_answers(
    State(state): State<AppState>,
    Json(request): Json<SubmitAnswersRequest>,
) -> Result<Json<ApiEnvelope<()>>, BackendError> {
    tracing::info!(
        form_id = %request.form_id,
        questions = request.questions.len(),
        "submit answers"
    );
    Ok(Json(state.store.submit_answers(&request).await?))
}

/// Delete a form and its questions
pub async fn delete_form(
    State(state): State<AppState>,
    Json(request): Json<DeleteFormRequest>,
) -> Result<Json<ApiEnvelope<()>>, BackendError> {
    tracing::info!(form_id = %request.form_id, "delete form");
    Ok(Json(state.store.delete_form(&request).await?))
}

/// Liveness probe; reports the stored form count when the store is reachable
pub async fn health(State(state): State<AppState>) -> Json<HealthStatus> {
    let forms = match state.store.count_forms().await {
        Ok(count) => Some(count),
        Err(e) => {
            tracing::warn!("health probe could not reach the store: {e}");
            None
        }
    };
    Json(HealthStatus {
        status: "ok".to_string(),
        forms,
    })
}
