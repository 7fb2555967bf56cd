use serde::Deserialize;

use crate::render::ItemFields;
use crate::Provider;

/// A parsed answer from the query endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BackendReply {
    /// The backend matched concrete items and attached them to the answer.
    Results {
        content: String,
        items: Vec<ItemFields>,
    },
    /// Plain answer text (chat replies, backend-reported errors).
    Message { content: String },
}

/// One polled snapshot of the background indexer.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct IndexSnapshot {
    pub status: String,
    pub percent: u8,
}

impl IndexSnapshot {
    /// Whether the indexer is still working through content.
    pub fn is_busy(&self) -> bool {
        self.status != "Idle" || self.percent < 100
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// The page finished loading; kicks off the index-status loop.
    PageLoaded,
    /// User submitted the input form (raw, untrimmed text).
    InputSubmitted(String),
    /// A query round-trip finished; the error side carries the failure
    /// description surfaced to the user.
    QueryAnswered(Result<BackendReply, String>),
    /// User invoked a rendered card action.
    OpenRequested { id: String, provider: Provider },
    /// User confirmed the destructive restart prompt.
    RestartConfirmed,
    /// A liveness probe resolved.
    ProbeResolved { reachable: bool },
    /// An index-status fetch resolved; `None` means the fetch failed.
    StatusReported(Option<IndexSnapshot>),
    /// The indicator hide grace period ran out.
    HideGraceElapsed,
}
