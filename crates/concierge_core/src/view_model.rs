/// Host-facing projection of the console state.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ConsoleView {
    /// At least one typing indicator is on screen.
    pub typing_active: bool,
    /// The restart overlay is blocking the page.
    pub overlay_active: bool,
    /// Progress indicator percent, if visible.
    pub index_progress: Option<u8>,
}
