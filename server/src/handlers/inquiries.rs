use axum::extract::State;
use axum::response::Response;

use crate::models::InquiryPayload;
use crate::routes::AppState;
use crate::utils::error::AppError;
use crate::utils::response::created;
use crate::validation::ValidatedJson;

pub async fn create_inquiry(
    State(state): State<AppState>,
    ValidatedJson(inquiry): ValidatedJson<InquiryPayload>,
) -> Result<Response, AppError> {
    let inquiry = state.storage.create_inquiry(inquiry).await?;
    tracing::info!(inquiry_id = %inquiry.id, user_type = %inquiry.user_type, "Inquiry received");
    Ok(created(inquiry))
}
