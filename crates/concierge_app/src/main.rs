mod logging;
mod page;
mod shell;

use std::sync::Arc;

use anyhow::Context;
use concierge_client::{Driver, HttpBackend};
use concierge_core::{ConsoleState, Renderer};
use concierge_logging::client_info;

fn main() -> anyhow::Result<()> {
    logging::initialize(logging::LogDestination::File);

    let base_url = std::env::args()
        .nth(1)
        .or_else(|| std::env::var("CONCIERGE_URL").ok())
        .unwrap_or_else(|| "http://127.0.0.1:8000".to_string());

    client_info!("terminal console starting against {base_url}");
    let backend = HttpBackend::new(&base_url)
        .with_context(|| format!("invalid backend url {base_url}"))?;

    let page = Arc::new(page::TerminalPage::new());
    let handle = Driver::spawn(
        Arc::new(backend),
        page.clone(),
        Renderer::new(None),
        ConsoleState::new(),
    );

    shell::run(&handle, &page, &base_url);
    handle.shutdown();
    Ok(())
}
