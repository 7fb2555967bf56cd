//! Turn rendering: sanitizer, item classification, markup building.
mod escape;
mod item;
mod turn;

pub use escape::escape_html;
pub use item::{classify, EmailItem, FileItem, ItemFields, ResultItem};
pub use turn::{
    CardAction, MarkdownRenderer, RenderedTurn, Renderer, Role, TurnSpec, TYPING_TURN_ID,
};
