//! Request and response types for the Groq chat completion API.
//! The web crate does the actual POST; everything here is pure data so
//! request construction and response parsing test natively.

use super::SimSnapshot;
use serde::{Deserialize, Serialize};

pub const CHAT_ENDPOINT: &str = "https://api.groq.com/openai/v1/chat/completions";
pub const CHAT_MODEL: &str = "llama-3.1-8b-instant";
pub const CHAT_MAX_TOKENS: u32 = 300;
pub const CHAT_TEMPERATURE: f32 = 0.7;
/// Abort the request when the API hasn't answered within this window.
pub const CHAT_TIMEOUT_MS: u32 = 10_000;

#[derive(Debug, Clone, Serialize)]
pub struct ChatMessage {
    pub role: &'static str,
    pub content: String,
}

/// Outbound completion request. The credential travels in the
/// Authorization header, never in this body.
#[derive(Debug, Clone, Serialize)]
pub struct ChatRequest {
    pub model: &'static str,
    pub messages: Vec<ChatMessage>,
    pub max_tokens: u32,
    pub temperature: f32,
}

impl ChatRequest {
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

/// Build the outbound request for a user message, grounding the model
/// in the live simulation state.
pub fn build_request(snapshot: &SimSnapshot, user_message: &str) -> ChatRequest {
    ChatRequest {
        model: CHAT_MODEL,
        messages: vec![
            ChatMessage {
                role: "system",
                content: system_instruction(snapshot),
            },
            ChatMessage {
                role: "user",
                content: user_message.to_string(),
            },
        ],
        max_tokens: CHAT_MAX_TOKENS,
        temperature: CHAT_TEMPERATURE,
    }
}

/// The system message: who the assistant is plus the numbers on screen.
pub fn system_instruction(snapshot: &SimSnapshot) -> String {
    let cme = if snapshot.cme_active {
        "a CME is currently active"
    } else {
        "no CME is active"
    };
    let arrival = match snapshot.hours_to_first_impact {
        Some(h) if h > 0.0 => format!(" with first satellite impact in {:.1} hours", h),
        Some(_) => " with the first satellite impact already past".to_string(),
        None => String::new(),
    };
    format!(
        "You are the assistant inside an educational space-weather dashboard. \
         Simulation state right now: {} satellites tracked, {}{}, {} satellites \
         classified at risk. Answer concisely for a general audience and make \
         clear the data is simulated when asked about real events.",
        snapshot.satellite_count, cme, arrival, snapshot.at_risk_count
    )
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChoiceMessage {
    #[serde(default)]
    pub content: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChatChoice {
    pub message: ChoiceMessage,
}

/// Inbound completion response. Only the fields we read.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatCompletion {
    #[serde(default)]
    pub choices: Vec<ChatChoice>,
}

impl ChatCompletion {
    pub fn from_json(json: &str) -> Result<ChatCompletion, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// First non-blank completion text, if the API returned one.
    pub fn first_text(&self) -> Option<&str> {
        self.choices
            .iter()
            .map(|c| c.message.content.trim())
            .find(|t| !t.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot() -> SimSnapshot {
        SimSnapshot {
            satellite_count: 8,
            cme_active: true,
            at_risk_count: 2,
            hours_to_first_impact: Some(2.5),
        }
    }

    #[test]
    fn request_body_carries_model_and_sampling_fields() {
        let json = build_request(&snapshot(), "When will the CME hit?")
            .to_json()
            .unwrap();
        assert!(json.contains("\"model\":\"llama-3.1-8b-instant\""));
        assert!(json.contains("\"max_tokens\":300"));
        assert!(json.contains("\"temperature\":0.7"));
        assert!(json.contains("\"role\":\"system\""));
        assert!(json.contains("\"role\":\"user\""));
        assert!(json.contains("When will the CME hit?"));
    }

    #[test]
    fn request_body_never_contains_a_credential() {
        // The bearer token is a header concern; the body must stay clean.
        let json = build_request(&snapshot(), "hello").to_json().unwrap();
        assert!(!json.to_lowercase().contains("authorization"));
        assert!(!json.to_lowercase().contains("bearer"));
    }

    #[test]
    fn system_instruction_embeds_simulation_counts() {
        let text = system_instruction(&snapshot());
        assert!(text.contains("8 satellites tracked"));
        assert!(text.contains("a CME is currently active"));
        assert!(text.contains("2.5 hours"));
        assert!(text.contains("2 satellites"));
    }

    #[test]
    fn system_instruction_without_cme() {
        let text = system_instruction(&SimSnapshot {
            satellite_count: 8,
            cme_active: false,
            at_risk_count: 0,
            hours_to_first_impact: None,
        });
        assert!(text.contains("no CME is active"));
        assert!(!text.contains("hours"));
    }

    #[test]
    fn parses_a_completion() {
        let json = r#"{
            "id": "chatcmpl-123",
            "choices": [
                {"index": 0, "message": {"role": "assistant", "content": "G2 storm expected."}}
            ]
        }"#;
        let completion = ChatCompletion::from_json(json).unwrap();
        assert_eq!(completion.first_text(), Some("G2 storm expected."));
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(ChatCompletion::from_json("{nope").is_err());
    }

    #[test]
    fn blank_completions_yield_none() {
        let empty = ChatCompletion::from_json(r#"{"choices": []}"#).unwrap();
        assert_eq!(empty.first_text(), None);

        let blank = ChatCompletion::from_json(
            r#"{"choices": [{"message": {"content": "   "}}]}"#,
        )
        .unwrap();
        assert_eq!(blank.first_text(), None);
    }
}
