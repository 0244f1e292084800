//! Types shared across the API surface.

use serde::{Deserialize, Serialize};

/// Token usage statistics.
///
/// Tokens are counted as Unicode characters of the embedded texts, summed
/// over the batch. Embedding requests generate nothing, so `total_tokens`
/// always equals `prompt_tokens` and there is no completion count.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Usage {
    pub prompt_tokens: usize,
    pub total_tokens: usize,
}
