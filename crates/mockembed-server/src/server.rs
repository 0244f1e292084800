//! Server setup and routing.

use axum::{
    routing::{get, post},
    Router,
};
use std::net::SocketAddr;

use crate::{error::ServerError, handlers, state::AppState};

/// Create the API router with all routes.
///
/// Unmatched methods on known paths fall through to the same 404 as unknown
/// paths; the API has no 405 responses.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route(
            "/v1/embeddings",
            post(handlers::embeddings::handle_embeddings).fallback(handle_unknown_route),
        )
        .route(
            "/health",
            get(handlers::health::handle_health).fallback(handle_unknown_route),
        )
        .fallback(handle_unknown_route)
        .with_state(state)
}

/// Run the HTTP server.
pub async fn run_server(
    state: AppState,
    addr: SocketAddr,
) -> Result<(), Box<dyn std::error::Error>> {
    let app = create_router(state);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

/// Fallback for unknown paths and unmatched methods.
async fn handle_unknown_route() -> ServerError {
    ServerError::UnknownRoute
}
