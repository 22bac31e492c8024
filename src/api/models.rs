use serde::{Deserialize, Serialize};

/// One node of a Gmail message body tree, as returned by `threads.get` with
/// `format=full`. A node with children is a multipart container; a leaf
/// carries either inline base64url data or an attachment reference.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessagePart {
    #[serde(default)]
    pub mime_type: String,
    pub body: Option<PartBody>,
    #[serde(default)]
    pub parts: Vec<MessagePart>,
    #[serde(default)]
    pub headers: Vec<Header>,
}

impl MessagePart {
    pub fn inline_data(&self) -> Option<&str> {
        self.body
            .as_ref()
            .and_then(|body| body.data.as_deref())
            .filter(|data| !data.is_empty())
    }

    pub fn has_inline_data(&self) -> bool {
        self.inline_data().is_some()
    }

    /// Attachment references carry no retrievable inline content.
    pub fn is_attachment(&self) -> bool {
        self.body
            .as_ref()
            .is_some_and(|body| body.attachment_id.is_some())
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PartBody {
    pub attachment_id: Option<String>,
    pub data: Option<String>,
    pub size: Option<u64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Header {
    pub name: String,
    pub value: String,
}

/// A fully-fetched message within a thread.
#[derive(Debug, Clone)]
pub struct Message {
    pub id: String,
    pub internal_date_ms: Option<i64>,
    pub payload: MessagePart,
}

impl Message {
    pub fn header(&self, name: &str) -> String {
        crate::mail::find_header(&self.payload.headers, name)
    }
}

#[derive(Debug, Clone)]
pub struct ThreadDetail {
    pub id: String,
    pub messages: Vec<Message>,
}

impl ThreadDetail {
    /// Threads from the API carry messages oldest-first.
    pub fn latest_message(&self) -> Option<&Message> {
        self.messages.last()
    }
}

/// Entry from `threads.list`; enough for the `list` command without a
/// follow-up `threads.get` per thread.
#[derive(Debug, Clone, Serialize)]
pub struct ThreadSummary {
    pub id: String,
    pub snippet: Option<String>,
}
