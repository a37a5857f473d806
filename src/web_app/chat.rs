// web_app/chat.rs - Chat assistant transcript
//
// Messages are tagged by shape instead of stuffing raw JSON into a text
// field. The transcript is persisted as JSON through the session store;
// `pending` is runtime only.

use std::sync::OnceLock;

use chrono::{DateTime, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::web_app::model::ChatResponse;
use crate::web_app::session::SessionStore;

pub const CHAT_STORAGE_KEY: &str = "chatbot_messages";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Assistant,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "content", rename_all = "snake_case")]
pub enum ChatBody {
    Text(String),
    /// Structured assistant reply
    Reply(ChatResponse),
    /// Assistant JSON that did not match the reply shape, kept verbatim
    Unparsed(String),
}

impl ChatBody {
    /// Decodes an assistant payload. A bare string is text, the reply shape
    /// is a `Reply`, anything else is kept as raw JSON.
    pub fn from_json(value: serde_json::Value) -> Self {
        if let serde_json::Value::String(text) = value {
            return ChatBody::Text(text);
        }
        match serde_json::from_value::<ChatResponse>(value.clone()) {
            Ok(reply) => ChatBody::Reply(reply),
            Err(_) => ChatBody::Unparsed(value.to_string()),
        }
    }

    /// Text shown for this body before any formatting
    pub fn display_text(&self) -> &str {
        match self {
            ChatBody::Text(text) | ChatBody::Unparsed(text) => text,
            ChatBody::Reply(reply) => &reply.description,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: Uuid,
    pub from: Sender,
    pub body: ChatBody,
    pub sent_at: DateTime<Utc>,
    #[serde(default)]
    pub is_error: bool,
}

impl ChatMessage {
    fn new(from: Sender, body: ChatBody) -> Self {
        ChatMessage {
            id: Uuid::new_v4(),
            from,
            body,
            sent_at: Utc::now(),
            is_error: false,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ChatTranscript {
    messages: Vec<ChatMessage>,
    pending: bool,
}

impl ChatTranscript {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Whether a question is waiting for its answer
    pub fn pending(&self) -> bool {
        self.pending
    }

    /// Appends the user's message and marks the transcript pending.
    ///
    /// Returns the trimmed text to send, or `None` for blank input or while
    /// another question is still pending.
    pub fn push_user(&mut self, text: &str) -> Option<String> {
        let text = text.trim();
        if text.is_empty() || self.pending {
            return None;
        }
        self.messages
            .push(ChatMessage::new(Sender::User, ChatBody::Text(text.to_string())));
        self.pending = true;
        Some(text.to_string())
    }

    pub fn push_reply(&mut self, body: ChatBody) {
        self.messages.push(ChatMessage::new(Sender::Assistant, body));
        self.pending = false;
    }

    pub fn push_error(&mut self, text: &str) {
        let mut message = ChatMessage::new(Sender::Assistant, ChatBody::Text(text.to_string()));
        message.is_error = true;
        self.messages.push(message);
        self.pending = false;
    }

    /// Loads the stored transcript; missing or corrupt data is an empty one.
    pub fn load(store: &dyn SessionStore) -> Self {
        let Some(raw) = store.load(CHAT_STORAGE_KEY) else {
            return Self::new();
        };
        match serde_json::from_str::<Vec<ChatMessage>>(&raw) {
            Ok(messages) => ChatTranscript {
                messages,
                pending: false,
            },
            Err(e) => {
                tracing::warn!("discarding unreadable chat transcript: {}", e);
                Self::new()
            }
        }
    }

    pub fn save(&self, store: &dyn SessionStore) {
        match serde_json::to_string(&self.messages) {
            Ok(json) => store.save(CHAT_STORAGE_KEY, &json),
            Err(e) => tracing::warn!("could not serialize chat transcript: {}", e),
        }
    }

    pub fn clear(&mut self, store: &dyn SessionStore) {
        self.messages.clear();
        self.pending = false;
        store.remove(CHAT_STORAGE_KEY);
    }
}

fn bold_pattern() -> Option<&'static Regex> {
    static BOLD: OnceLock<Option<Regex>> = OnceLock::new();
    BOLD.get_or_init(|| Regex::new(r"\*\*(.*?)\*\*").ok()).as_ref()
}

/// Runs on escaped text: `&amp;` stays inside a URL, any other entity ends it.
fn url_pattern() -> Option<&'static Regex> {
    static URL: OnceLock<Option<Regex>> = OnceLock::new();
    URL.get_or_init(|| Regex::new(r"https?://(?:[^\s<&]|&amp;)+").ok()).as_ref()
}

/// Renders chat text as HTML for `inner_html`.
///
/// Markup in the input is escaped first, so the only tags in the output
/// are the ones added here.
pub fn format_chat_text(text: &str) -> String {
    let mut html = text
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;");

    if let Some(bold) = bold_pattern() {
        html = bold.replace_all(&html, "<strong>$1</strong>").into_owned();
    }

    if let Some(url) = url_pattern() {
        html = url
            .replace_all(
                &html,
                r#"<a href="$0" target="_blank" rel="noopener noreferrer" class="text-blue-600 underline hover:text-blue-800">$0</a>"#,
            )
            .into_owned();
    }

    html.replace("\n\n", "<br><br>").replace('\n', "<br>")
}
