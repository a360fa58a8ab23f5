//! Route table.

use crate::handlers::{self, SharedState};
use axum::routing::get;
use axum::Router;

/// Builds the axum router over shared page-store state.
pub fn build_router(state: SharedState) -> Router {
    Router::new()
        .route("/health", get(handlers::health_handler))
        .route(
            "/pages",
            get(handlers::list_pages_handler).post(handlers::create_page_handler),
        )
        .route(
            "/pages/:title",
            get(handlers::get_page_handler)
                .put(handlers::save_page_handler)
                .delete(handlers::delete_page_handler),
        )
        .with_state(state)
}
