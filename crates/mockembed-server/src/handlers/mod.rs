//! HTTP request handlers for API endpoints.

pub mod embeddings;
pub mod health;

pub use embeddings::handle_embeddings;
pub use health::handle_health;
