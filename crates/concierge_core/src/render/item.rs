use serde::Deserialize;

use crate::Provider;

/// Raw wire shape of one result item.
///
/// The payload carries no type tag; classification is inferred from field
/// presence, where presence means "present and non-empty".
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ItemFields {
    pub name: Option<String>,
    pub path: Option<String>,
    pub kind: Option<String>,
    pub sender: Option<String>,
    pub subject: Option<String>,
    pub message_id: Option<String>,
    pub provider: Option<String>,
    pub content: Option<String>,
    pub summary: Option<String>,
    pub date: Option<String>,
    pub received: Option<String>,
}

/// A classified result item.
///
/// `Unknown` renders nothing, but keeping it a variant makes every match site
/// exhaustive instead of silently falling through.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResultItem {
    File(FileItem),
    Email(EmailItem),
    Unknown,
}

/// An indexed file or folder match. Identity is the path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileItem {
    pub name: String,
    pub path: String,
    pub kind: String,
    pub snippet: String,
    pub date: String,
}

impl FileItem {
    pub fn is_folder(&self) -> bool {
        self.kind.eq_ignore_ascii_case("folder") || self.kind.eq_ignore_ascii_case("directory")
    }

    pub fn action_label(&self) -> &'static str {
        if self.is_folder() {
            "Open Folder"
        } else {
            "Open File"
        }
    }
}

/// An indexed mail match. Identity is the message id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailItem {
    pub sender: String,
    pub subject: String,
    pub snippet: String,
    pub received: String,
    pub message_id: String,
    /// `Gmail` gets a deep link; everything else opens through the
    /// dispatcher.
    pub provider: Provider,
}

fn filled(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|value| !value.is_empty())
}

/// Classifies one wire item: a sender makes it mail (and wins over a path),
/// a path makes it a file, anything else is `Unknown`.
pub fn classify(fields: &ItemFields) -> ResultItem {
    if let Some(sender) = filled(&fields.sender) {
        let provider = match filled(&fields.provider) {
            None | Some("GMAIL") => Provider::Gmail,
            Some(_) => Provider::Outlook,
        };
        return ResultItem::Email(EmailItem {
            sender: sender.to_string(),
            subject: filled(&fields.subject).unwrap_or_default().to_string(),
            snippet: filled(&fields.content)
                .or_else(|| filled(&fields.summary))
                .unwrap_or("No content snippet available.")
                .to_string(),
            received: filled(&fields.received)
                .unwrap_or("Recently indexed")
                .to_string(),
            message_id: filled(&fields.message_id).unwrap_or_default().to_string(),
            provider,
        });
    }

    if let Some(path) = filled(&fields.path) {
        return ResultItem::File(FileItem {
            name: filled(&fields.name).unwrap_or_default().to_string(),
            path: path.to_string(),
            kind: filled(&fields.kind).unwrap_or_default().to_string(),
            snippet: filled(&fields.content)
                .or_else(|| filled(&fields.summary))
                .unwrap_or("No snippet available.")
                .to_string(),
            date: filled(&fields.date)
                .or_else(|| filled(&fields.received))
                .unwrap_or("Recent")
                .to_string(),
        });
    }

    ResultItem::Unknown
}
