//! Embedding request/response types.

use crate::models::common::Usage;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Embedding input (single or batch).
///
/// The trailing `Invalid` variant absorbs any JSON value that is neither a
/// string nor an array, so shape errors surface as a rejected request rather
/// than a deserialization failure elsewhere in the document.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum EmbeddingInput {
    Single(String),
    Batch(Vec<Value>),
    Invalid(Value),
}

impl Default for EmbeddingInput {
    /// An absent `input` embeds the empty string.
    fn default() -> Self {
        EmbeddingInput::Single(String::new())
    }
}

/// Embedding request.
#[derive(Debug, Deserialize)]
pub struct EmbeddingRequest {
    pub model: Option<String>,
    #[serde(default)]
    pub input: EmbeddingInput,
}

/// Embedding object.
#[derive(Debug, Serialize)]
pub struct Embedding {
    pub object: String,
    pub embedding: Vec<f64>,
    pub index: usize,
}

/// Embedding response.
#[derive(Debug, Serialize)]
pub struct EmbeddingResponse {
    pub object: String,
    pub data: Vec<Embedding>,
    pub model: String,
    pub usage: Usage,
}
