use async_trait::async_trait;
use thiserror::Error;

use concierge_core::{BackendReply, IndexSnapshot, Provider};

/// Failures at the backend boundary.
///
/// `Transport` and `Malformed` surface to the user as a rendered error turn
/// on the chat path; everywhere else they degrade to a silent retry or a log
/// line. No variant is ever fatal to the page.
#[derive(Debug, Error)]
pub enum BackendError {
    /// The request never completed (refused, reset, timed out).
    #[error("request failed: {0}")]
    Transport(String),
    /// A response arrived with a status the operation treats as failure.
    #[error("backend returned status {0}")]
    Status(u16),
    /// A response arrived but its body did not parse.
    #[error("malformed response: {0}")]
    Malformed(String),
}

/// The backend endpoints the console depends on.
#[async_trait]
pub trait Backend: Send + Sync {
    /// POST `/query` with `{query: text}`. The body is parsed regardless of
    /// HTTP status: an error status with a JSON body still carries
    /// renderable content.
    async fn query(&self, text: &str) -> Result<BackendReply, BackendError>;

    /// Liveness probe: POST `/query` with the literal `PING` sentinel. Only
    /// HTTP-ok-ness matters; the body is never read.
    async fn probe(&self) -> bool;

    /// POST `/restart`. Best-effort: callers may discard the result, and the
    /// response is ignored entirely.
    async fn restart(&self) -> Result<(), BackendError>;

    /// GET `/index-status`.
    async fn index_status(&self) -> Result<IndexSnapshot, BackendError>;

    /// POST `/open` with `{id, provider}`. Best-effort: callers may discard
    /// the result.
    async fn open_item(&self, id: &str, provider: Provider) -> Result<(), BackendError>;
}
