//! Response envelopes returned by the backend.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use milieu_domain::{
    ConversationMessage, MessageKind, MessagePart, PartKind, ScenarioStatus,
};

use crate::dto::{CharacterDto, SessionRecordDto};

/// Envelope for `GET /api/characters/`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CharacterListResponse {
    #[serde(default)]
    pub characters: Vec<CharacterDto>,
}

/// Envelope for `GET /api/scenarios/`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScenarioListResponse {
    #[serde(default)]
    pub scenarios: Vec<ScenarioStatus>,
}

/// Envelope for `GET /api/scenarios/sessions`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ActiveSessionsResponse {
    #[serde(default)]
    pub sessions: Vec<SessionRecordDto>,
}

/// Response of `POST /api/scenarios/start`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StartScenarioResponse {
    pub session_id: String,
    #[serde(default)]
    pub scenario_name: String,
    #[serde(default)]
    pub character_id: String,
    #[serde(default)]
    pub message: String,
    /// Opening narration from the game master model.
    #[serde(default)]
    pub llm_response: String,
}

/// Response of `POST /api/scenarios/play`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlayScenarioResponse {
    #[serde(default)]
    pub response: PlayReply,
    /// Tool invocations some backend versions report alongside the reply;
    /// passed through untouched.
    #[serde(default)]
    pub tool_calls: Vec<Value>,
}

/// `response` field as seen on the wire: older backends answer with one
/// narration string, newer ones with the full message list.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PlayReply {
    Text(String),
    Messages(Vec<ConversationMessage>),
}

impl Default for PlayReply {
    fn default() -> Self {
        Self::Messages(Vec::new())
    }
}

impl PlayReply {
    /// Normalize into the message-list shape regardless of wire generation.
    ///
    /// A bare narration string becomes a single response message with one
    /// text part.
    pub fn into_messages(self) -> Vec<ConversationMessage> {
        match self {
            Self::Messages(messages) => messages,
            Self::Text(content) => vec![ConversationMessage {
                kind: MessageKind::Response,
                parts: vec![MessagePart {
                    part_kind: PartKind::Text,
                    content: Some(content),
                    timestamp: None,
                    tool_name: None,
                    args: None,
                    tool_call_id: None,
                }],
                usage: None,
                model_name: None,
                timestamp: None,
            }],
        }
    }
}

/// Envelope for `GET /api/scenarios/history/{session_id}`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HistoryResponse {
    #[serde(default)]
    pub history: Vec<ConversationMessage>,
}

/// Response of `POST /api/creation/allocate-attributes`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AllocateAttributesResponse {
    #[serde(default)]
    pub attributes: std::collections::BTreeMap<String, i32>,
}

/// Response of `POST /api/creation/check-attributes`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CheckAttributesResponse {
    pub valid: bool,
}

/// Response of `POST /api/creation/check-skills`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CheckSkillsResponse {
    pub valid: bool,
    #[serde(default)]
    pub cost: i32,
}

/// Response of `POST /api/creation/save`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SaveCharacterResponse {
    pub status: String,
}

/// Response of `POST /api/creation/new` and `GET /api/creation/status/{id}`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreationStatusResponse {
    pub id: String,
    pub status: String,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Envelope of `POST /creation/generate-name`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GenerateNameResponse {
    #[serde(default)]
    pub names: Vec<String>,
}

/// Envelope of `POST /creation/generate-background`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GenerateBackgroundResponse {
    #[serde(default)]
    pub backgrounds: Vec<String>,
}

/// Envelope of `POST /creation/generate-physical-description`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GeneratePhysicalDescriptionResponse {
    #[serde(default)]
    pub physical_descriptions: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn play_reply_decodes_the_legacy_string_generation() {
        let json = r#"{"response": "Vous entrez dans la taverne.", "tool_calls": []}"#;
        let response: PlayScenarioResponse = serde_json::from_str(json).unwrap();

        let messages = response.response.into_messages();
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].kind, MessageKind::Response);
        assert_eq!(
            messages[0].parts[0].content.as_deref(),
            Some("Vous entrez dans la taverne.")
        );
    }

    #[test]
    fn play_reply_decodes_the_message_list_generation() {
        let json = r#"{"response": [
            {"kind": "response", "parts": [{"part_kind": "text", "content": "Bienvenue"}]}
        ]}"#;
        let response: PlayScenarioResponse = serde_json::from_str(json).unwrap();

        let messages = response.response.into_messages();
        assert_eq!(messages.len(), 1);
        assert!(response.tool_calls.is_empty());
    }
}
