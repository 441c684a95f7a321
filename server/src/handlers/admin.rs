use axum::extract::State;
use axum::response::Response;

use crate::models::WaitlistSummary;
use crate::routes::AppState;
use crate::utils::error::AppError;
use crate::utils::response::ok;

pub async fn list_waitlist(State(state): State<AppState>) -> Result<Response, AppError> {
    let entries = state.storage.list_waitlist().await?;
    Ok(ok(entries))
}

pub async fn waitlist_summary(State(state): State<AppState>) -> Result<Response, AppError> {
    let entries = state.storage.list_waitlist().await?;
    Ok(ok(WaitlistSummary::from_entries(&entries)))
}

pub async fn list_inquiries(State(state): State<AppState>) -> Result<Response, AppError> {
    let inquiries = state.storage.list_inquiries().await?;
    Ok(ok(inquiries))
}
