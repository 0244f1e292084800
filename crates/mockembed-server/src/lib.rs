//! # mockembed-server
//!
//! OpenAI-compatible HTTP API over a deterministic embedding backend.
//!
//! Exposes the `Embedder` trait through a REST endpoint shaped like the
//! OpenAI embeddings API, so pipelines can run against a local stand-in
//! instead of a hosted model. Identical requests always produce identical
//! response bodies.

pub mod error;
pub mod handlers;
pub mod models;
pub mod server;
pub mod state;

pub use error::ServerError;
pub use server::{create_router, run_server};
pub use state::{AppState, ServerConfig};
