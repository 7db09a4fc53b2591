// ============================================================================
// SENTIMENT-LABELING POSTS API
// ============================================================================

// - CRUD over text posts, each auto-labeled positive/negative/neutral
// - Stateless analyze endpoint for ad-hoc text
// - Input validation with field-level errors
// - Proper error handling
// - Structured logging

pub mod dto;
pub mod errors;
pub mod models;
pub mod routes;
pub mod sentiment;
pub mod state;

pub use state::AppState;

use axum::{
    Router,
    routing::{get, post},
};

/// Build the application router over the given state.
///
/// Kept separate from `main` so integration tests can drive the router
/// in-process.
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(routes::health::health_check))
        .route(
            "/api/posts/",
            get(routes::post::list_posts).post(routes::post::create_post),
        )
        .route("/api/posts/analyze/", post(routes::post::analyze))
        .route(
            "/api/posts/{id}/",
            get(routes::post::get_post)
                .put(routes::post::update_post)
                .patch(routes::post::update_post)
                .delete(routes::post::delete_post),
        )
        .with_state(state)
}
