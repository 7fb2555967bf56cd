//! Terminal implementation of the page surface.

use std::sync::Mutex;

use concierge_client::PageHooks;
use concierge_core::{CardAction, RenderedTurn, Role};

/// Renders turns as plain terminal text and remembers the most recent set of
/// card actions so the shell can dispatch them by index.
pub struct TerminalPage {
    actions: Mutex<Vec<CardAction>>,
}

impl TerminalPage {
    pub fn new() -> Self {
        Self {
            actions: Mutex::new(Vec::new()),
        }
    }

    pub fn action(&self, index: usize) -> Option<CardAction> {
        self.actions.lock().unwrap().get(index).cloned()
    }
}

impl PageHooks for TerminalPage {
    fn append_turn(&self, turn: RenderedTurn) {
        let label = match turn.role {
            Role::User => "you",
            Role::Assistant => "concierge",
        };
        let text = html2md::parse_html(&turn.html);
        println!("\n[{label}] {}", text.trim());

        if !turn.actions.is_empty() {
            for (index, action) in turn.actions.iter().enumerate() {
                println!("  [{index}] {} ({})", action.label, action.id);
            }
            *self.actions.lock().unwrap() = turn.actions;
        }
    }

    fn clear_input(&self) {
        // Line-based stdin has nothing to clear.
    }

    fn show_typing(&self, _html: &str) {
        println!("concierge is thinking...");
    }

    fn remove_typing(&self) {
        // Printed lines cannot be withdrawn; the answer follows immediately.
    }

    fn show_overlay(&self) {
        println!("-- restarting the assistant service, hold on --");
    }

    fn hide_overlay(&self) {
        println!("-- the service did not come back; giving up --");
    }

    fn show_index_progress(&self, percent: u8) {
        println!("[indexing {percent}%]");
    }

    fn hide_index_progress(&self) {}

    fn reload(&self) {
        println!("-- service is back, session refreshed --");
    }
}
