//! Error Conversion
//!
//! Converts `BackendError` into the HTTP response shape the API promises:
//! always 200, `success=false`, the generic internal-error message, and the
//! fault detail tucked into the `error` field. Handlers can therefore use
//! `?` on store calls and let the conversion produce the response.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};

use crate::backend::error::types::BackendError;
use crate::shared::envelope::ApiEnvelope;

impl IntoResponse for BackendError {
    fn into_response(self) -> Response {
        tracing::error!("request failed: {self}");
        let envelope = ApiEnvelope::<()>::internal_error(self.to_string());
        (StatusCode::OK, Json(envelope)).into_response()
    }
}
