//! Health check handler.

/// Handle health check requests.
///
/// The body is the fixed literal `ok` as plain text, so probes can compare
/// it byte-for-byte.
pub async fn handle_health() -> &'static str {
    "ok"
}
