use concierge_core::RenderedTurn;

/// The page surface the driver renders into.
///
/// Implementations own the conversation log, the input field, the blocking
/// restart overlay and the index progress indicator. Every method is an
/// infallible fire-and-forget notification; a host that cannot honor one
/// simply ignores it.
pub trait PageHooks: Send + Sync {
    /// Append one rendered turn and scroll the view to the newest content.
    fn append_turn(&self, turn: RenderedTurn);
    /// Clear the input field after a submission.
    fn clear_input(&self);
    /// Insert the typing placeholder turn.
    fn show_typing(&self, html: &str);
    /// Remove the typing placeholder; must be a no-op when it is absent.
    fn remove_typing(&self);
    fn show_overlay(&self);
    fn hide_overlay(&self);
    /// Show or refresh the progress indicator (percent text and bar width).
    fn show_index_progress(&self, percent: u8);
    fn hide_index_progress(&self);
    /// Reload the page. This abandons all other in-flight work; it is the
    /// only cancellation the recovery flow uses.
    fn reload(&self);
}
