//! HTTP surface.
//!
//! One method-agnostic route that runs the structure seed and reports the
//! outcome as a JSON envelope. Request method, headers and body are all
//! ignored; there is nothing to validate.

use crate::core::StoreError;
use crate::seed;
use crate::store::DocumentStore;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::any;
use axum::{Json, Router};
use serde::Serialize;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::error;

pub const INIT_SUCCESS_MESSAGE: &str = "Initial Firestore structure created/updated.";

#[derive(Debug, Serialize)]
pub struct InitResponse {
    pub success: bool,
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: String,
}

#[derive(Debug)]
pub struct WebError(StoreError);

impl From<StoreError> for WebError {
    fn from(err: StoreError) -> Self {
        Self(err)
    }
}

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        // Contract: every failure is one undifferentiated 500 carrying the
        // error's string form.
        let body = Json(ErrorResponse {
            success: false,
            error: self.0.to_string(),
        });
        (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
    }
}

pub type Result<T> = std::result::Result<T, WebError>;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn DocumentStore>,
}

/// Build the service router over a shared store handle.
pub fn router(store: Arc<dyn DocumentStore>) -> Router {
    Router::new()
        .route("/initStructure", any(init_structure))
        .layer(TraceLayer::new_for_http())
        .with_state(AppState { store })
}

async fn init_structure(State(state): State<AppState>) -> Result<Json<InitResponse>> {
    if let Err(err) = seed::apply_seed(state.store.as_ref()).await {
        error!(error = %err, "structure initialization failed");
        return Err(err.into());
    }
    Ok(Json(InitResponse {
        success: true,
        message: INIT_SUCCESS_MESSAGE.to_string(),
    }))
}
