//! OpenAI-compatible request/response types.

pub mod common;
pub mod embeddings;

pub use common::Usage;
pub use embeddings::{Embedding, EmbeddingRequest, EmbeddingResponse};
