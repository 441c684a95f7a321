use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::response::Response;
use axum::Json;

use crate::forms;
use crate::models::WaitlistPayload;
use crate::routes::AppState;
use crate::utils::error::AppError;
use crate::utils::response::{created, ok};
use crate::validation::ValidatedJson;

pub async fn join_waitlist(
    State(state): State<AppState>,
    ValidatedJson(signup): ValidatedJson<WaitlistPayload>,
) -> Result<Response, AppError> {
    let entry = state.storage.add_to_waitlist(signup).await?;
    tracing::info!(
        entry_id = %entry.id,
        interest = entry.signup.interest.as_deref().unwrap_or("unspecified"),
        "Waitlist signup"
    );
    Ok(created(entry))
}

/// Reports how far a partially filled form has got. Missing fields are not an error here.
pub async fn form_progress(
    draft: Result<Json<WaitlistPayload>, JsonRejection>,
) -> Result<Response, AppError> {
    let Json(draft) = draft.map_err(|rejection| AppError::ValidationError(rejection.body_text()))?;
    Ok(ok(forms::progress(&draft)))
}
