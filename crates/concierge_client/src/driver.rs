use std::future::Future;
use std::sync::Arc;
use std::thread;

use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

use concierge_core::{update, ConsoleState, Effect, Msg, Provider, Renderer};
use concierge_logging::{client_debug, client_error, client_warn};

use crate::backend::Backend;
use crate::hooks::PageHooks;

/// Runs the console loop on a dedicated runtime thread.
///
/// Messages drain through the pure update function; view effects apply
/// synchronously through the injected hooks; network and timer effects
/// become tasks that resolve back into messages. Every task races the
/// cancellation token, the loop's only shutdown primitive (the page
/// analogue of navigating away).
pub struct Driver;

impl Driver {
    pub fn spawn(
        backend: Arc<dyn Backend>,
        hooks: Arc<dyn PageHooks>,
        renderer: Renderer,
        state: ConsoleState,
    ) -> DriverHandle {
        let (msg_tx, msg_rx) = mpsc::unbounded_channel();
        let cancel = CancellationToken::new();

        let loop_tx = msg_tx.clone();
        let loop_cancel = cancel.clone();
        let join = thread::spawn(move || {
            let runtime = tokio::runtime::Runtime::new().expect("tokio runtime");
            runtime.block_on(run_loop(
                state,
                renderer,
                backend,
                hooks,
                loop_tx,
                msg_rx,
                loop_cancel,
            ));
        });

        // The status loop starts with the page, not with the first input.
        let _ = msg_tx.send(Msg::PageLoaded);

        DriverHandle {
            msg_tx,
            cancel,
            join,
        }
    }
}

/// Handle for feeding stimuli into a running driver.
///
/// Dropping the handle without [`DriverHandle::shutdown`] leaves the loop
/// running for the rest of the process, matching the page-lifetime polling
/// of the console this drives.
pub struct DriverHandle {
    msg_tx: mpsc::UnboundedSender<Msg>,
    cancel: CancellationToken,
    join: thread::JoinHandle<()>,
}

impl DriverHandle {
    pub fn submit(&self, text: &str) {
        self.dispatch(Msg::InputSubmitted(text.to_string()));
    }

    pub fn confirm_restart(&self) {
        self.dispatch(Msg::RestartConfirmed);
    }

    pub fn open(&self, id: &str, provider: Provider) {
        self.dispatch(Msg::OpenRequested {
            id: id.to_string(),
            provider,
        });
    }

    /// Feed a raw message into the loop.
    pub fn dispatch(&self, msg: Msg) {
        let _ = self.msg_tx.send(msg);
    }

    /// Cancels every loop and in-flight task, then waits for the runtime
    /// thread to finish.
    pub fn shutdown(self) {
        self.cancel.cancel();
        let _ = self.join.join();
    }
}

#[allow(clippy::too_many_arguments)]
async fn run_loop(
    mut state: ConsoleState,
    renderer: Renderer,
    backend: Arc<dyn Backend>,
    hooks: Arc<dyn PageHooks>,
    msg_tx: mpsc::UnboundedSender<Msg>,
    mut msg_rx: mpsc::UnboundedReceiver<Msg>,
    cancel: CancellationToken,
) {
    loop {
        let msg = tokio::select! {
            _ = cancel.cancelled() => break,
            received = msg_rx.recv() => match received {
                Some(msg) => msg,
                None => break,
            },
        };

        client_debug!("msg: {msg:?}");
        let (next_state, effects) = update(state, msg);
        state = next_state;
        for effect in effects {
            apply_effect(effect, &renderer, &backend, &hooks, &msg_tx, &cancel);
        }
    }
}

fn apply_effect(
    effect: Effect,
    renderer: &Renderer,
    backend: &Arc<dyn Backend>,
    hooks: &Arc<dyn PageHooks>,
    msg_tx: &mpsc::UnboundedSender<Msg>,
    cancel: &CancellationToken,
) {
    match effect {
        Effect::AppendTurn(spec) => hooks.append_turn(renderer.render_turn(&spec)),
        Effect::ClearInput => hooks.clear_input(),
        Effect::ShowTyping => hooks.show_typing(&renderer.typing_turn()),
        Effect::RemoveTyping => hooks.remove_typing(),
        Effect::ShowOverlay => hooks.show_overlay(),
        Effect::HideOverlay => hooks.hide_overlay(),
        Effect::ShowIndexProgress { percent } => hooks.show_index_progress(percent),
        Effect::HideIndexProgress => hooks.hide_index_progress(),
        Effect::ReloadPage => hooks.reload(),
        Effect::SendQuery { text } => {
            let backend = backend.clone();
            let msg_tx = msg_tx.clone();
            spawn_cancellable(cancel, async move {
                let outcome = backend.query(&text).await.map_err(|err| err.to_string());
                let _ = msg_tx.send(Msg::QueryAnswered(outcome));
            });
        }
        Effect::RequestRestart => {
            let backend = backend.clone();
            spawn_cancellable(cancel, async move {
                // The restart signal may race the process dying; either way
                // the probes decide what happens next.
                if let Err(err) = backend.restart().await {
                    client_debug!("restart request not acknowledged: {err}");
                }
            });
        }
        Effect::ProbeBackend { delay } => {
            let backend = backend.clone();
            let msg_tx = msg_tx.clone();
            spawn_cancellable(cancel, async move {
                tokio::time::sleep(delay).await;
                let reachable = backend.probe().await;
                let _ = msg_tx.send(Msg::ProbeResolved { reachable });
            });
        }
        Effect::FetchIndexStatus { delay } => {
            let backend = backend.clone();
            let msg_tx = msg_tx.clone();
            spawn_cancellable(cancel, async move {
                tokio::time::sleep(delay).await;
                let snapshot = match backend.index_status().await {
                    Ok(snapshot) => Some(snapshot),
                    Err(err) => {
                        client_warn!("status poll failed: {err}");
                        None
                    }
                };
                let _ = msg_tx.send(Msg::StatusReported(snapshot));
            });
        }
        Effect::ScheduleIndicatorHide { delay } => {
            let msg_tx = msg_tx.clone();
            spawn_cancellable(cancel, async move {
                tokio::time::sleep(delay).await;
                let _ = msg_tx.send(Msg::HideGraceElapsed);
            });
        }
        Effect::OpenItem { id, provider } => {
            let backend = backend.clone();
            spawn_cancellable(cancel, async move {
                if let Err(err) = backend.open_item(&id, provider).await {
                    client_error!("failed to open {} item {id}: {err}", provider.wire_name());
                }
            });
        }
    }
}

fn spawn_cancellable(
    cancel: &CancellationToken,
    task: impl Future<Output = ()> + Send + 'static,
) {
    let cancel = cancel.clone();
    tokio::spawn(async move {
        tokio::select! {
            _ = cancel.cancelled() => {}
            _ = task => {}
        }
    });
}
