use crate::render::escape::escape_html;
use crate::render::item::{classify, EmailItem, FileItem, ItemFields, ResultItem};
use crate::Provider;

/// Search URL that jumps a Gmail tab straight to a message id.
const GMAIL_DEEP_LINK: &str = "https://mail.google.com/mail/u/0/#search/rfc822msgid:";

/// Name of the host-global handler wired into card action buttons.
const OPEN_HANDLER: &str = "openResult";

/// Element id carried by the typing placeholder turn.
pub const TYPING_TURN_ID: &str = "typing-indicator";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    User,
    Assistant,
}

impl Role {
    fn class_name(self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Assistant => "assistant",
        }
    }
}

/// One turn to render: role, answer text, attached result items.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TurnSpec {
    pub role: Role,
    pub content: String,
    pub items: Vec<ItemFields>,
}

impl TurnSpec {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
            items: Vec::new(),
        }
    }

    pub fn assistant(content: impl Into<String>, items: Vec<ItemFields>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
            items,
        }
    }
}

/// A card button backed by the open dispatcher.
///
/// The id is the item identity exactly as received; embedding-level escaping
/// never leaks into it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardAction {
    pub label: String,
    pub id: String,
    pub provider: Provider,
}

/// Markup for one turn plus the structured actions wired into it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedTurn {
    pub role: Role,
    pub html: String,
    pub actions: Vec<CardAction>,
}

/// Pluggable "markdown text to sanitized HTML" capability.
pub trait MarkdownRenderer: Send + Sync {
    fn to_html(&self, text: &str) -> String;
}

/// Builds conversation markup from turn specs.
///
/// Turn content and email fields are inserted unescaped: the backend is the
/// trusted author of both. File snippets come from indexed disk content and
/// are escaped exactly once, here.
pub struct Renderer {
    markdown: Option<Box<dyn MarkdownRenderer>>,
}

impl Renderer {
    pub fn new(markdown: Option<Box<dyn MarkdownRenderer>>) -> Self {
        Self { markdown }
    }

    pub fn render_turn(&self, spec: &TurnSpec) -> RenderedTurn {
        let mut body = match &self.markdown {
            Some(markdown) => markdown.to_html(&spec.content),
            None => spec.content.clone(),
        };

        let mut actions = Vec::new();
        for fields in &spec.items {
            match classify(fields) {
                ResultItem::File(file) => body.push_str(&file_card(&file, &mut actions)),
                ResultItem::Email(email) => body.push_str(&email_card(&email, &mut actions)),
                ResultItem::Unknown => {}
            }
        }

        RenderedTurn {
            role: spec.role,
            html: format!(
                "<div class=\"message {}\"><div class=\"bubble\">{}</div></div>",
                spec.role.class_name(),
                body
            ),
            actions,
        }
    }

    /// The placeholder turn shown while a query is in flight. Identified by
    /// [`TYPING_TURN_ID`] so removal is a lookup that may find nothing.
    pub fn typing_turn(&self) -> String {
        format!(
            "<div class=\"message assistant\" id=\"{TYPING_TURN_ID}\">\
             <div class=\"bubble\"><div class=\"typing\">\
             <span></span><span></span><span></span>\
             </div></div></div>"
        )
    }
}

fn file_card(file: &FileItem, actions: &mut Vec<CardAction>) -> String {
    // Backslashes are doubled so Windows paths survive the single-quoted
    // inline handler. Quote characters in a path are a known hazard.
    let embedded_path = file.path.replace('\\', "\\\\");
    let label = file.action_label();
    actions.push(CardAction {
        label: label.to_string(),
        id: file.path.clone(),
        provider: Provider::Files,
    });
    format!(
        concat!(
            "<div class=\"file-card\">",
            "<div class=\"file-name\">{name}</div>",
            "<div class=\"file-path\">{path}</div>",
            "<div class=\"summary\">{snippet}</div>",
            "<div class=\"file-meta\"><span>Kind: {kind}</span><span>Date: {date}</span></div>",
            "<button class=\"card-action\" onclick=\"{handler}('FILES', '{embedded}')\">{label}</button>",
            "</div>"
        ),
        name = file.name,
        path = file.path,
        snippet = escape_html(&file.snippet),
        kind = file.kind,
        date = file.date,
        handler = OPEN_HANDLER,
        embedded = embedded_path,
        label = label,
    )
}

fn email_card(email: &EmailItem, actions: &mut Vec<CardAction>) -> String {
    let action_markup = match email.provider {
        Provider::Gmail => format!(
            "<a class=\"mail-link\" href=\"{}{}\" target=\"_blank\">View in Gmail</a>",
            GMAIL_DEEP_LINK,
            urlencoding::encode(&email.message_id),
        ),
        Provider::Outlook | Provider::Files => {
            actions.push(CardAction {
                label: "Open in Outlook".to_string(),
                id: email.message_id.clone(),
                provider: Provider::Outlook,
            });
            format!(
                "<button class=\"card-action\" onclick=\"{}('OUTLOOK', '{}')\">Open in Outlook</button>",
                OPEN_HANDLER, email.message_id,
            )
        }
    };

    format!(
        concat!(
            "<div class=\"email-card\">",
            "<div class=\"sender\">From: {sender}</div>",
            "<div class=\"subject\">{subject}</div>",
            "<div class=\"summary\">{snippet}</div>",
            "<div class=\"date\">{received}</div>",
            "{action}",
            "</div>"
        ),
        sender = email.sender,
        subject = email.subject,
        snippet = email.snippet,
        received = email.received,
        action = action_markup,
    )
}
