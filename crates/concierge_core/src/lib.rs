//! Console core: pure interaction state machine and turn rendering.
mod effect;
mod msg;
mod render;
mod state;
mod update;
mod view_model;

pub use effect::{Effect, Provider};
pub use msg::{BackendReply, IndexSnapshot, Msg};
pub use render::{
    classify, escape_html, CardAction, EmailItem, FileItem, ItemFields, MarkdownRenderer,
    RenderedTurn, Renderer, ResultItem, Role, TurnSpec, TYPING_TURN_ID,
};
pub use state::{ConsoleState, PollPolicy};
pub use update::update;
pub use view_model::ConsoleView;
