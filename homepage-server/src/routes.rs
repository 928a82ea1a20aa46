use axum::{routing::{get, post}, Router, Extension};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::{AppState, health};
use crate::controllers;

/// Router completo. `request_logging` accende il TraceLayer (spento in modalità test).
pub fn router(state: Arc<AppState>, request_logging: bool) -> Router {
    let app = Router::new()
        .route("/health", get(|Extension(state): Extension<Arc<AppState>>| async move {
            health(&state).await
        }))
        .route("/api/about", get(controllers::about))
        .route("/messages", get(controllers::list_messages))
        .route("/messages/save", post(controllers::save_message))
        .route("/messages/:messageId", get(controllers::get_message))
        .layer(CorsLayer::permissive())
        .layer(Extension(state));

    if request_logging {
        app.layer(TraceLayer::new_for_http())
    } else {
        app
    }
}
