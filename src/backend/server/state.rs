/**
 * Application State Management
 *
 * The application state is the injected form store, shared by every request
 * handler. The store wraps the MongoDB client, which is internally pooled
 * and thread-safe; the `Arc` keeps cloning the state cheap.
 */
use std::sync::Arc;

use crate::backend::forms::FormStore;

/// State handed to every handler
#[derive(Clone)]
pub struct AppState {
    /// The injected document store
    pub store: Arc<FormStore>,
}

impl AppState {
    pub fn new(store: FormStore) -> Self {
        Self {
            store: Arc::new(store),
        }
    }
}
