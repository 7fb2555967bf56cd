use serde::Deserialize;

use concierge_core::{BackendReply, ItemFields};

/// Body shape of the query endpoint.
#[derive(Debug, Deserialize)]
pub(crate) struct QueryReplyWire {
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub data: Option<Vec<ItemFields>>,
}

impl From<QueryReplyWire> for BackendReply {
    fn from(wire: QueryReplyWire) -> Self {
        match (wire.kind.as_str(), wire.data) {
            ("results", Some(items)) => BackendReply::Results {
                content: wire.content,
                items,
            },
            // Any other discriminant, or a results reply with no data,
            // renders as plain content.
            _ => BackendReply::Message {
                content: wire.content,
            },
        }
    }
}
