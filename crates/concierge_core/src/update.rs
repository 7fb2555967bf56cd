use std::time::Duration;

use crate::render::TurnSpec;
use crate::{BackendReply, ConsoleState, Effect, Msg};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: ConsoleState, msg: Msg) -> (ConsoleState, Vec<Effect>) {
    let effects = match msg {
        Msg::PageLoaded => vec![Effect::FetchIndexStatus {
            delay: Duration::ZERO,
        }],
        Msg::InputSubmitted(raw) => {
            let text = raw.trim();
            if text.is_empty() {
                return (state, Vec::new());
            }
            state.typing_shown();
            vec![
                Effect::AppendTurn(TurnSpec::user(text)),
                Effect::ClearInput,
                Effect::ShowTyping,
                Effect::SendQuery {
                    text: text.to_string(),
                },
            ]
        }
        Msg::QueryAnswered(outcome) => {
            state.typing_removed();
            let turn = match outcome {
                Ok(BackendReply::Results { content, items }) => {
                    TurnSpec::assistant(content, items)
                }
                Ok(BackendReply::Message { content }) => TurnSpec::assistant(content, Vec::new()),
                Err(reason) => TurnSpec::assistant(
                    format!("Error connecting to backend: {reason}"),
                    Vec::new(),
                ),
            };
            vec![Effect::RemoveTyping, Effect::AppendTurn(turn)]
        }
        Msg::OpenRequested { id, provider } => vec![Effect::OpenItem { id, provider }],
        Msg::RestartConfirmed => {
            state.begin_recovery();
            vec![
                Effect::ShowOverlay,
                Effect::RequestRestart,
                Effect::ProbeBackend {
                    delay: state.policy().restart_grace,
                },
            ]
        }
        Msg::ProbeResolved { reachable: true } => vec![Effect::ReloadPage],
        Msg::ProbeResolved { reachable: false } => {
            let failures = state.record_probe_failure();
            match state.policy().max_probe_attempts {
                Some(limit) if failures >= limit => {
                    state.end_recovery();
                    vec![Effect::HideOverlay]
                }
                _ => vec![Effect::ProbeBackend {
                    delay: state.policy().probe_retry,
                }],
            }
        }
        Msg::StatusReported(None) => vec![Effect::FetchIndexStatus {
            delay: state.policy().status_idle,
        }],
        Msg::StatusReported(Some(snapshot)) => {
            if snapshot.is_busy() {
                state.set_index_progress(snapshot.percent);
                vec![
                    Effect::ShowIndexProgress {
                        percent: snapshot.percent,
                    },
                    Effect::FetchIndexStatus {
                        delay: state.policy().status_active,
                    },
                ]
            } else {
                state.set_index_progress(100);
                // The hide grace and the next poll are independent timers; a
                // later busy report does not cancel a pending hide.
                vec![
                    Effect::ShowIndexProgress { percent: 100 },
                    Effect::ScheduleIndicatorHide {
                        delay: state.policy().indicator_hide_grace,
                    },
                    Effect::FetchIndexStatus {
                        delay: state.policy().status_idle,
                    },
                ]
            }
        }
        Msg::HideGraceElapsed => {
            state.clear_index_progress();
            vec![Effect::HideIndexProgress]
        }
    };

    (state, effects)
}
