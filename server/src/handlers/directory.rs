use axum::extract::{Query, State};
use axum::response::Response;

use crate::models::CreatorFilter;
use crate::routes::AppState;
use crate::utils::error::AppError;
use crate::utils::response::ok;

pub async fn list_creators(
    State(state): State<AppState>,
    Query(filter): Query<CreatorFilter>,
) -> Result<Response, AppError> {
    let creators = filter.apply(state.storage.list_creators().await?);
    tracing::debug!(count = creators.len(), "Listing creators");
    Ok(ok(creators))
}

pub async fn list_campaigns(State(state): State<AppState>) -> Result<Response, AppError> {
    let campaigns = state.storage.list_campaigns().await?;
    Ok(ok(campaigns))
}
