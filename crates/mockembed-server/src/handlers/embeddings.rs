//! Embeddings handler.

use axum::{body::Bytes, extract::State, Json};
use serde_json::Value;

use crate::{
    error::ServerError,
    models::{embeddings::EmbeddingInput, Embedding, EmbeddingRequest, EmbeddingResponse, Usage},
    state::AppState,
};

/// Handle embedding requests.
///
/// The body is parsed from raw bytes rather than through the `Json`
/// extractor: both unparseable JSON and a wrong top-level shape must answer
/// 400, not the extractor's 415/422 family.
pub async fn handle_embeddings(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<EmbeddingResponse>, ServerError> {
    let req: EmbeddingRequest = serde_json::from_slice(&body)?;

    let model = req
        .model
        .unwrap_or_else(|| state.config.default_model.clone());

    // Flatten the input to one text per embedding. Non-string batch
    // elements are rendered as compact JSON before embedding.
    let texts: Vec<String> = match req.input {
        EmbeddingInput::Single(s) => vec![s],
        EmbeddingInput::Batch(values) => values
            .into_iter()
            .map(|v| match v {
                Value::String(s) => s,
                other => other.to_string(),
            })
            .collect(),
        EmbeddingInput::Invalid(value) => {
            return Err(ServerError::InvalidRequest(format!(
                "input must be a string or an array, got: {value}"
            )))
        }
    };

    // Token usage counts Unicode characters, not bytes or words.
    let prompt_tokens: usize = texts.iter().map(|t| t.chars().count()).sum();

    let data = texts
        .iter()
        .enumerate()
        .map(|(index, text)| {
            let embedding = state.engine.embed(text)?;
            Ok(Embedding {
                object: "embedding".to_string(),
                embedding,
                index,
            })
        })
        .collect::<Result<Vec<_>, ServerError>>()?;

    tracing::debug!(
        inputs = data.len(),
        prompt_tokens,
        model = %model,
        "embedding request served"
    );

    Ok(Json(EmbeddingResponse {
        object: "list".to_string(),
        data,
        model,
        usage: Usage {
            prompt_tokens,
            total_tokens: prompt_tokens,
        },
    }))
}
