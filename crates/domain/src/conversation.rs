//! Conversation history types for the narrative chat interface.
//!
//! A session's history is an ordered sequence of [`ConversationMessage`]s,
//! each made of tagged parts. Part and message kinds are open sets on the
//! wire; unrecognized tags decode to the `Unknown` variants instead of
//! failing the whole history fetch.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Tag describing what a message part carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PartKind {
    SystemPrompt,
    UserPrompt,
    Text,
    ToolCall,
    ToolReturn,
    #[serde(other)]
    Unknown,
}

/// Direction of a message in the exchange.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageKind {
    Request,
    Response,
    #[serde(other)]
    Unknown,
}

/// One part of a conversation message.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessagePart {
    pub part_kind: PartKind,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub timestamp: Option<String>,
    #[serde(default)]
    pub tool_name: Option<String>,
    #[serde(default)]
    pub args: Option<Value>,
    #[serde(default)]
    pub tool_call_id: Option<String>,
}

/// Token accounting attached to a model response.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MessageUsage {
    #[serde(default)]
    pub requests: u32,
    #[serde(default)]
    pub request_tokens: u32,
    #[serde(default)]
    pub response_tokens: u32,
    #[serde(default)]
    pub total_tokens: u32,
    #[serde(default)]
    pub details: Option<Value>,
}

/// A full exchange entry in a session's conversation history.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversationMessage {
    pub kind: MessageKind,
    #[serde(default)]
    pub parts: Vec<MessagePart>,
    #[serde(default)]
    pub usage: Option<MessageUsage>,
    #[serde(default)]
    pub model_name: Option<String>,
    #[serde(default)]
    pub timestamp: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn part_kind_decodes_kebab_case_tags() {
        let kind: PartKind = serde_json::from_str(r#""system-prompt""#).unwrap();
        assert_eq!(kind, PartKind::SystemPrompt);
        let kind: PartKind = serde_json::from_str(r#""tool-return""#).unwrap();
        assert_eq!(kind, PartKind::ToolReturn);
    }

    #[test]
    fn unrecognized_part_kind_maps_to_unknown() {
        let kind: PartKind = serde_json::from_str(r#""retry-prompt""#).unwrap();
        assert_eq!(kind, PartKind::Unknown);
    }

    #[test]
    fn message_decodes_with_minimal_fields() {
        let json = r#"{
            "kind": "response",
            "parts": [{"part_kind": "text", "content": "Vous entrez dans la taverne."}]
        }"#;
        let message: ConversationMessage = serde_json::from_str(json).unwrap();
        assert_eq!(message.kind, MessageKind::Response);
        assert_eq!(message.parts.len(), 1);
        assert!(message.usage.is_none());
    }
}
