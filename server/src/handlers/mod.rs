use axum::{extract::State, http::Uri, response::IntoResponse, response::Response};
use serde::Serialize;

use crate::routes::AppState;
use crate::utils::error::AppError;
use crate::utils::response::success;

pub mod admin;
pub mod directory;
pub mod inquiries;
pub mod waitlist;

#[derive(Serialize)]
struct HealthPayload {
    status: &'static str,
    service: &'static str,
    storage: &'static str,
}

pub async fn health_check(State(state): State<AppState>) -> Response {
    let payload = HealthPayload {
        status: "ok",
        service: "collab-api",
        storage: state.storage.backend_name(),
    };

    success(payload, "Health check successful").into_response()
}

pub async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(format!("No route for '{}'", uri.path()))
}
