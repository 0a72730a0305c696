//! Chat message format sent to the text-generation endpoint.

use serde::{Deserialize, Serialize};

/// A single chat message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub role: MessageRole,
    pub content: String,
}

impl Message {
    pub fn system(text: impl Into<String>) -> Self {
        Self {
            role: MessageRole::System,
            content: text.into(),
        }
    }

    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: MessageRole::User,
            content: text.into(),
        }
    }
}

/// Message role
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    System,
    User,
}

/// Request body posted to the endpoint.
///
/// Serializes to `{"messages": [...], "model": "...", "private": true}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatRequest {
    pub messages: Vec<Message>,
    pub model: String,
    pub private: bool,
}

impl ChatRequest {
    /// Build the two-message conversation used by every classification call.
    ///
    /// A non-empty `context` is placed ahead of the prompt, separated by a blank line.
    pub fn conversation(
        system: impl Into<String>,
        prompt: &str,
        context: Option<&str>,
        model: impl Into<String>,
    ) -> Self {
        let user = match context {
            Some(ctx) if !ctx.is_empty() => format!("{}\n\n{}", ctx, prompt),
            _ => prompt.to_string(),
        };
        Self {
            messages: vec![Message::system(system), Message::user(user)],
            model: model.into(),
            private: true,
        }
    }

    /// Content of the user message, if present.
    pub fn user_content(&self) -> Option<&str> {
        self.messages
            .iter()
            .find(|m| m.role == MessageRole::User)
            .map(|m| m.content.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_wire_shape() {
        let req = ChatRequest::conversation("persona", "classify gelatin", None, "openai");
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["model"], "openai");
        assert_eq!(json["private"], true);
        assert_eq!(json["messages"][0]["role"], "system");
        assert_eq!(json["messages"][0]["content"], "persona");
        assert_eq!(json["messages"][1]["role"], "user");
        assert_eq!(json["messages"][1]["content"], "classify gelatin");
    }

    #[test]
    fn test_context_prefixes_prompt() {
        let req = ChatRequest::conversation("p", "classify gelatin", Some("Hanafi view"), "openai");
        assert_eq!(req.user_content(), Some("Hanafi view\n\nclassify gelatin"));
    }

    #[test]
    fn test_empty_context_is_ignored() {
        let req = ChatRequest::conversation("p", "classify gelatin", Some(""), "openai");
        assert_eq!(req.user_content(), Some("classify gelatin"));
    }
}
