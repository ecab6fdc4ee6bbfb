//! Liveness probe

/// Basic health check; reachable without a session
pub async fn health_check() -> &'static str {
    "OK"
}
