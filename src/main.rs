use sentiment_api::{AppState, app};
use tower_http::cors::{Any, CorsLayer};
use tracing::info;

#[tokio::main]
async fn main() {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_target(false)
        .compact()
        .init();

    dotenvy::dotenv().ok();

    let port = std::env::var("PORT").unwrap_or_else(|_| "3000".to_string());

    // Create application state
    let state = AppState::default();

    // Configure CORS
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Build the router
    let app = app(state).layer(cors);

    // Start server
    let addr = format!("0.0.0.0:{port}");
    let listener = tokio::net::TcpListener::bind(&addr).await.unwrap();

    info!("Server running on http://{}", addr);
    info!("API Endpoints:");
    info!("  GET    /health              - Health check");
    info!("  GET    /api/posts/          - List posts (newest first)");
    info!("  POST   /api/posts/          - Create post (auto-labeled)");
    info!("  GET    /api/posts/:id/      - Get specific post");
    info!("  PUT    /api/posts/:id/      - Update post");
    info!("  PATCH  /api/posts/:id/      - Partial update");
    info!("  DELETE /api/posts/:id/      - Delete post");
    info!("  POST   /api/posts/analyze/  - Analyze text without saving");

    axum::serve(listener, app).await.unwrap();
}
