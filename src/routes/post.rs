use crate::{
    dto::{AnalyzeRequest, AnalyzeResponse, CreatePostRequest, UpdatePostRequest},
    errors::ApiError,
    models::Post,
    sentiment,
    state::{AppState, PostChange},
};
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use tracing::info;
use validator::Validate;

/// POST /api/posts/
/// Body: { "author": "...", "content": "..." }
///
/// The stored sentiment is always computed from `content` on the server.
pub async fn create_post(
    State(state): State<AppState>,
    Json(payload): Json<CreatePostRequest>,
) -> Result<(StatusCode, Json<Post>), ApiError> {
    payload.validate()?;

    let sentiment = sentiment::label(&payload.content);
    let post = state.posts.create(payload.author, payload.content, sentiment);

    info!("Post created: id={} sentiment={}", post.id, post.sentiment.as_str());

    Ok((StatusCode::CREATED, Json(post)))
}

/// GET /api/posts/
///
/// Flat array, newest first. No pagination wrapper: the frontend consumes
/// the list directly.
pub async fn list_posts(State(state): State<AppState>) -> Json<Vec<Post>> {
    Json(state.posts.list())
}

/// GET /api/posts/:id/
pub async fn get_post(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Post>, ApiError> {
    let post = state.posts.get(id).ok_or(ApiError::NotFound)?;

    Ok(Json(post))
}

/// PUT/PATCH /api/posts/:id/
/// Body: any subset of { "author": "...", "content": "..." }
///
/// A new `content` gets re-labeled; `updated_at` refreshes on every
/// successful update.
pub async fn update_post(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<UpdatePostRequest>,
) -> Result<Json<Post>, ApiError> {
    payload.validate()?;

    let change = PostChange {
        author: payload.author,
        content: payload.content.map(|content| {
            let sentiment = sentiment::label(&content);
            (content, sentiment)
        }),
    };

    let post = state.posts.update(id, change).ok_or(ApiError::NotFound)?;

    info!("Post updated: id={} sentiment={}", post.id, post.sentiment.as_str());

    Ok(Json(post))
}

/// DELETE /api/posts/:id/
pub async fn delete_post(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    state.posts.remove(id).ok_or(ApiError::NotFound)?;

    info!("Post deleted: id={}", id);

    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/posts/analyze/
/// Body: { "text": "..." }
///
/// Labels the text without saving anything. Blank text is rejected here at
/// the boundary, so it never reaches the classifier.
pub async fn analyze(Json(payload): Json<AnalyzeRequest>) -> Result<Json<AnalyzeResponse>, ApiError> {
    payload.validate()?;

    let sentiment = sentiment::label(&payload.text);

    Ok(Json(AnalyzeResponse {
        text: payload.text,
        sentiment,
    }))
}
