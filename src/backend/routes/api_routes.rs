/**
 * API Route Handlers
 *
 * Wires the form endpoints onto the router. Every operation is a POST with a
 * JSON body; paths come from the shared path table so the client cannot
 * drift from the server.
 *
 * # Routes
 *
 * - `POST /api/forms/list`   - list all forms
 * - `POST /api/forms/fetch`  - fetch one form with questions
 * - `POST /api/forms/save`   - create or update a form
 * - `POST /api/forms/submit` - store a respondent's answers
 * - `POST /api/forms/delete` - delete a form and its questions
 */
use axum::Router;

use crate::backend::forms::handlers;
use crate::backend::server::state::AppState;
use crate::shared::api_paths;

/// Configure API routes
pub fn configure_api_routes(router: Router<AppState>) -> Router<AppState> {
    router
        .route(
            api_paths::LIST_FORMS,
            axum::routing::post(handlers::list_forms),
        )
        .route(
            api_paths::FETCH_FORM,
            axum::routing::post(handlers::fetch_form),
        )
        .route(
            api_paths::SAVE_FORM,
            axum::routing::post(handlers::save_form),
        )
        .route(
            api_paths::SUBMIT_ANSWERS,
            axum::routing::post(handlers::submit_answers),
        )
        .route(
            api_paths::DELETE_FORM,
            axum::routing::post(handlers::delete_form),
        )
}
