use std::time::Duration;

use crate::view_model::ConsoleView;

/// Timing policy for the polling loops.
///
/// Defaults match the production console: a 3s grace before the first
/// liveness probe, 2s between failed probes (unbounded retries), status polls
/// at 5s while indexing and 30s while idle, and a 10s grace before the
/// finished indicator hides.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PollPolicy {
    /// Wait after the restart request before the first liveness probe.
    pub restart_grace: Duration,
    /// Wait between failed liveness probes.
    pub probe_retry: Duration,
    /// Status poll interval while the indexer is busy.
    pub status_active: Duration,
    /// Status poll interval while idle; also the failure backoff.
    pub status_idle: Duration,
    /// How long the finished indicator stays visible before hiding.
    pub indicator_hide_grace: Duration,
    /// Give up probing after this many failures; `None` retries forever.
    pub max_probe_attempts: Option<u32>,
}

impl Default for PollPolicy {
    fn default() -> Self {
        Self {
            restart_grace: Duration::from_secs(3),
            probe_retry: Duration::from_secs(2),
            status_active: Duration::from_secs(5),
            status_idle: Duration::from_secs(30),
            indicator_hide_grace: Duration::from_secs(10),
            max_probe_attempts: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ConsoleState {
    policy: PollPolicy,
    // Count, not flag: interleaved submissions each show an indicator and
    // each response removes one.
    typing: u32,
    overlay_active: bool,
    index_progress: Option<u8>,
    probe_failures: u32,
}

impl ConsoleState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_policy(policy: PollPolicy) -> Self {
        Self {
            policy,
            ..Self::default()
        }
    }

    pub fn policy(&self) -> &PollPolicy {
        &self.policy
    }

    pub fn view(&self) -> ConsoleView {
        ConsoleView {
            typing_active: self.typing > 0,
            overlay_active: self.overlay_active,
            index_progress: self.index_progress,
        }
    }

    pub(crate) fn typing_shown(&mut self) {
        self.typing += 1;
    }

    pub(crate) fn typing_removed(&mut self) {
        self.typing = self.typing.saturating_sub(1);
    }

    pub(crate) fn begin_recovery(&mut self) {
        self.overlay_active = true;
        self.probe_failures = 0;
    }

    pub(crate) fn end_recovery(&mut self) {
        self.overlay_active = false;
    }

    pub(crate) fn record_probe_failure(&mut self) -> u32 {
        self.probe_failures += 1;
        self.probe_failures
    }

    pub(crate) fn set_index_progress(&mut self, percent: u8) {
        self.index_progress = Some(percent);
    }

    pub(crate) fn clear_index_progress(&mut self) {
        self.index_progress = None;
    }
}
