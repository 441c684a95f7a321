use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::trace::TraceLayer;

use crate::config::{create_cors_layer, create_security_headers_layer};
use crate::handlers::{admin, directory, health_check, inquiries, not_found, waitlist};
use crate::storage::Storage;
use crate::utils::panic::handle_panic;

#[derive(Clone)]
pub struct AppState {
    pub storage: Arc<dyn Storage>,
}

impl AppState {
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self { storage }
    }
}

pub fn create_routes(state: AppState) -> Router {
    let api = Router::new()
        .route("/creators", get(directory::list_creators))
        .route("/campaigns", get(directory::list_campaigns))
        .route("/inquiries", post(inquiries::create_inquiry))
        .route("/waitlist", post(waitlist::join_waitlist))
        .route("/waitlist/progress", post(waitlist::form_progress))
        .route("/admin/waitlist", get(admin::list_waitlist))
        .route("/admin/waitlist/summary", get(admin::waitlist_summary))
        .route("/admin/inquiries", get(admin::list_inquiries));

    Router::new()
        .route("/health", get(health_check))
        .nest("/api", api)
        .fallback(not_found)
        .with_state(state)
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(TraceLayer::new_for_http())
        .layer(create_security_headers_layer())
        .layer(create_cors_layer())
}
