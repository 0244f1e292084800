use mockembed_engine::HashEmbedder;
use mockembed_server::{run_server, AppState, ServerConfig};
use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    // Deterministic hash-based backend
    let engine = Arc::new(HashEmbedder::new());

    // Application state
    let state = AppState {
        engine,
        config: ServerConfig::default(),
    };

    // Bind on all interfaces; the port is part of the service contract.
    let addr = "0.0.0.0:8088".parse()?;
    tracing::info!("Starting server on {}", addr);

    run_server(state, addr).await?;
    Ok(())
}
