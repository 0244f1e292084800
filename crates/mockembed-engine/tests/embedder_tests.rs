//! Integration tests for the embedder trait and error types.
//!
//! Validates:
//! - `Embedder` can be implemented by alternative backends
//! - Trait objects work for dynamic dispatch (the HTTP layer holds an
//!   `Arc<dyn Embedder>`)
//! - Error values display correctly and satisfy `std::error::Error`
//! - Implementations are shareable across threads

use mockembed_engine::*;
use std::sync::Arc;

/// A backend with a different dimension, demonstrating the trait is not tied
/// to the hash implementation.
struct ConstantEmbedder {
    dimension: usize,
}

impl Embedder for ConstantEmbedder {
    fn embed(&self, _text: &str) -> Result<Vec<f64>> {
        Ok(vec![0.5; self.dimension])
    }

    fn dimension(&self) -> usize {
        self.dimension
    }
}

/// A backend that always fails, as a remote embedder would on network error.
struct FailingEmbedder;

impl Embedder for FailingEmbedder {
    fn embed(&self, _text: &str) -> Result<Vec<f64>> {
        Err(EmbedError::Backend("connection refused".to_string()))
    }

    fn dimension(&self) -> usize {
        EMBEDDING_DIM
    }
}

// ---------------------------------------------------------------------------
// Trait Implementation Tests
// ---------------------------------------------------------------------------

#[test]
fn trait_object_dispatch() {
    let embedder: Arc<dyn Embedder> = Arc::new(HashEmbedder::new());
    let v = embedder.embed("hello").unwrap();
    assert_eq!(v.len(), EMBEDDING_DIM);
}

#[test]
fn alternative_backend_through_same_trait() {
    let embedder: Box<dyn Embedder> = Box::new(ConstantEmbedder { dimension: 8 });
    let v = embedder.embed("anything").unwrap();
    assert_eq!(v, vec![0.5; 8]);
    assert_eq!(embedder.dimension(), 8);
}

#[test]
fn different_backends_produce_different_vectors() {
    let hash: Box<dyn Embedder> = Box::new(HashEmbedder::new());
    let constant: Box<dyn Embedder> = Box::new(ConstantEmbedder { dimension: 64 });
    assert_ne!(
        hash.embed("hello").unwrap(),
        constant.embed("hello").unwrap()
    );
}

#[test]
fn default_embed_batch_uses_embed() {
    let embedder = ConstantEmbedder { dimension: 4 };
    let batch = embedder.embed_batch(&["x", "y"]).unwrap();
    assert_eq!(batch.len(), 2);
    assert!(batch.iter().all(|v| v == &vec![0.5; 4]));
}

#[test]
fn failing_backend_surfaces_error() {
    let embedder = FailingEmbedder;
    let err = embedder.embed("x").unwrap_err();
    assert!(matches!(err, EmbedError::Backend(_)));

    let err = embedder.embed_batch(&["x", "y"]).unwrap_err();
    assert!(matches!(err, EmbedError::Backend(_)));
}

// ---------------------------------------------------------------------------
// Error Type Tests
// ---------------------------------------------------------------------------

#[test]
fn error_display_carries_context() {
    let err = EmbedError::Backend("connection refused".to_string());
    let msg = format!("{err}");
    assert!(msg.contains("embedding backend failed"));
    assert!(msg.contains("connection refused"));
}

#[test]
fn error_is_std_error() {
    let err: Box<dyn std::error::Error> = Box::new(EmbedError::Backend("x".to_string()));
    assert!(err.to_string().contains("x"));
}

// ---------------------------------------------------------------------------
// Send + Sync Tests
// ---------------------------------------------------------------------------

#[test]
fn embedder_is_send_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HashEmbedder>();
    assert_send_sync::<FailingEmbedder>();
}

#[test]
fn embedder_behind_arc_is_thread_safe() {
    let embedder: Arc<dyn Embedder> = Arc::new(HashEmbedder::new());
    let clone = Arc::clone(&embedder);

    let handle = std::thread::spawn(move || clone.embed("hello").unwrap());

    let main_vector = embedder.embed("hello").unwrap();
    let thread_vector = handle.join().unwrap();
    assert_eq!(main_vector, thread_vector);
}
