use std::time::Duration;

use crate::render::TurnSpec;

/// Destination service for an open-item dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Provider {
    Files,
    Gmail,
    Outlook,
}

impl Provider {
    /// Wire name used by the open endpoint.
    pub fn wire_name(self) -> &'static str {
        match self {
            Provider::Files => "FILES",
            Provider::Gmail => "GMAIL",
            Provider::Outlook => "OUTLOOK",
        }
    }
}

/// Side effects requested by `update` and executed by the driver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Append one turn to the conversation view and scroll to it.
    AppendTurn(TurnSpec),
    /// Clear the input field after a submission.
    ClearInput,
    ShowTyping,
    RemoveTyping,
    /// POST the submitted text to the query endpoint.
    SendQuery { text: String },
    ShowOverlay,
    HideOverlay,
    /// Fire-and-forget restart request; the result is discarded.
    RequestRestart,
    /// Probe backend liveness after `delay`.
    ProbeBackend { delay: Duration },
    /// Terminal recovery step: navigation abandons all in-flight work.
    ReloadPage,
    /// Fetch the index status after `delay`.
    FetchIndexStatus { delay: Duration },
    /// Show or refresh the progress indicator.
    ShowIndexProgress { percent: u8 },
    /// Start the hide-grace timer; it runs independently of the poll timer.
    ScheduleIndicatorHide { delay: Duration },
    HideIndexProgress,
    /// Fire-and-forget open dispatch; failures are logged, never surfaced.
    OpenItem { id: String, provider: Provider },
}
