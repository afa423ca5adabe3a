//! Assistant panel state: the transcript, send planning, and the local
//! fallback responder.

pub mod api;
pub mod fallback;

use api::ChatRequest;
use fallback::ReplyTone;
use serde::Serialize;

/// Who said a transcript line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    User,
    Assistant,
}

/// One transcript line.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatEntry {
    pub role: ChatRole,
    pub text: String,
    pub tone: ReplyTone,
}

/// The simulation numbers embedded into outbound requests.
#[derive(Debug, Clone, Copy)]
pub struct SimSnapshot {
    pub satellite_count: usize,
    pub cme_active: bool,
    pub at_risk_count: usize,
    /// Hours from the current offset to the first predicted impact;
    /// None when no impact is classified.
    pub hours_to_first_impact: Option<f64>,
}

/// What a send attempt should do next.
#[derive(Debug, Clone)]
pub enum ChatPlan {
    /// No stored credential: prompt the user, never touch the network.
    NeedsKey,
    /// Ready to POST.
    Send(ChatRequest),
}

/// Terminal outcome of a send, handed to the UI as JSON.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "status")]
pub enum ChatOutcome {
    /// No stored credential; the UI should open the key prompt.
    #[serde(rename = "needsKey")]
    NeedsKey,
    /// A reply is already in flight; this send was ignored.
    #[serde(rename = "busy")]
    Busy,
    /// A reply was appended to the transcript. `fallback` marks replies
    /// from the local responder rather than the live API.
    #[serde(rename = "reply")]
    Reply {
        text: String,
        tone: ReplyTone,
        fallback: bool,
    },
}

impl ChatOutcome {
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

/// Decide what a send should do. Blank credentials count as missing.
pub fn plan_send(api_key: Option<&str>, snapshot: &SimSnapshot, message: &str) -> ChatPlan {
    match api_key {
        Some(key) if !key.trim().is_empty() => {
            ChatPlan::Send(api::build_request(snapshot, message))
        }
        _ => ChatPlan::NeedsKey,
    }
}

/// The assistant transcript plus in-flight state.
pub struct ChatLog {
    entries: Vec<ChatEntry>,
    pending: bool,
}

impl ChatLog {
    /// Opens with the fixed welcome line.
    pub fn new() -> Self {
        Self {
            entries: vec![ChatEntry {
                role: ChatRole::Assistant,
                text: fallback::WELCOME_MESSAGE.to_string(),
                tone: ReplyTone::Info,
            }],
            pending: false,
        }
    }

    pub fn entries(&self) -> &[ChatEntry] {
        &self.entries
    }

    /// A reply is in flight; the UI disables the send box meanwhile.
    pub fn is_pending(&self) -> bool {
        self.pending
    }

    /// Record the user's line and mark a reply in flight.
    pub fn push_user(&mut self, text: &str) {
        self.entries.push(ChatEntry {
            role: ChatRole::User,
            text: text.to_string(),
            tone: ReplyTone::Info,
        });
        self.pending = true;
    }

    /// Record the assistant's reply and clear the in-flight flag.
    pub fn push_assistant(&mut self, text: &str, tone: ReplyTone) {
        self.entries.push(ChatEntry {
            role: ChatRole::Assistant,
            text: text.to_string(),
            tone,
        });
        self.pending = false;
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(&self.entries)
    }
}

impl Default for ChatLog {
    fn default() -> Self {
        Self::new()
    }
}
