//! Axum router construction for the message board.
//!
//! Assembles the asset and message routes into a single [`Router`] with
//! CORS and request tracing enabled.

use std::sync::Arc;

use axum::Router;
use axum::routing::any;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

/// Build the complete Axum router for the message board.
///
/// Every route answers any method. The router includes:
/// - `/` -- index page
/// - `/style1.css` -- stylesheet
/// - `/favicon.ico` -- icon
/// - `/messages` -- encoded snapshot (any method)
/// - `/new` -- append then snapshot (any method)
/// - fallback -- 299 page
pub fn build_router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Static assets
        .route("/", any(handlers::serve_root))
        .route("/style1.css", any(handlers::serve_style))
        .route("/favicon.ico", any(handlers::serve_favicon))
        // Message API
        .route("/messages", any(handlers::list_messages))
        .route("/new", any(handlers::new_message))
        .fallback(handlers::not_found)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
