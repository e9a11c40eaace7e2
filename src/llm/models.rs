use serde::{Deserialize, Serialize};

/// Message role in LLM conversation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    System,
    User,
    Assistant,
}

/// A data-URI reference to an embedded image.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImageUrl {
    pub url: String,
}

/// A part of multimodal message content.
///
/// Serializes to the OpenAI-compatible wire shape, e.g.
/// `{"type":"image_url","image_url":{"url":"data:image/png;base64,..."}}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ContentPart {
    Text { text: String },
    ImageUrl { image_url: ImageUrl },
}

/// Message in LLM conversation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LlmMessage {
    pub role: MessageRole,
    pub content: Vec<ContentPart>,
}

impl LlmMessage {
    /// Create a text-only user message
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: MessageRole::User,
            content: vec![ContentPart::Text { text: text.into() }],
        }
    }

    /// Create a user message with a text part followed by an embedded image part.
    pub fn user_with_image(text: impl Into<String>, data_uri: impl Into<String>) -> Self {
        Self {
            role: MessageRole::User,
            content: vec![
                ContentPart::Text { text: text.into() },
                ContentPart::ImageUrl {
                    image_url: ImageUrl { url: data_uri.into() },
                },
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_role_serialization() {
        assert_eq!(serde_json::to_string(&MessageRole::System).unwrap(), "\"system\"");
        assert_eq!(serde_json::to_string(&MessageRole::User).unwrap(), "\"user\"");
        assert_eq!(serde_json::to_string(&MessageRole::Assistant).unwrap(), "\"assistant\"");
    }

    #[test]
    fn test_message_role_deserialization() {
        assert_eq!(serde_json::from_str::<MessageRole>("\"user\"").unwrap(), MessageRole::User);
        assert_eq!(
            serde_json::from_str::<MessageRole>("\"assistant\"").unwrap(),
            MessageRole::Assistant
        );
    }

    #[test]
    fn test_user_message() {
        let msg = LlmMessage::user("Hello");
        assert_eq!(msg.role, MessageRole::User);
        assert_eq!(msg.content.len(), 1);
        match &msg.content[0] {
            ContentPart::Text { text } => assert_eq!(text, "Hello"),
            _ => panic!("Expected text part"),
        }
    }

    #[test]
    fn test_user_message_with_image() {
        let msg = LlmMessage::user_with_image("Describe this", "data:image/png;base64,AAAA");
        assert_eq!(msg.role, MessageRole::User);
        assert_eq!(msg.content.len(), 2);
        match &msg.content[1] {
            ContentPart::ImageUrl { image_url } => {
                assert_eq!(image_url.url, "data:image/png;base64,AAAA")
            }
            _ => panic!("Expected image part"),
        }
    }

    #[test]
    fn test_text_part_serialization() {
        let msg = LlmMessage::user("test content");
        let json = serde_json::to_value(&msg).unwrap();

        assert_eq!(json["role"], "user");
        assert_eq!(json["content"][0]["type"], "text");
        assert_eq!(json["content"][0]["text"], "test content");
    }

    #[test]
    fn test_image_part_serialization() {
        let msg = LlmMessage::user_with_image("What is this?", "data:image/png;base64,iVBOR");
        let json = serde_json::to_value(&msg).unwrap();

        let parts = json["content"].as_array().unwrap();
        assert_eq!(parts.len(), 2);
        assert_eq!(parts[0]["type"], "text");
        assert_eq!(parts[0]["text"], "What is this?");
        assert_eq!(parts[1]["type"], "image_url");
        assert_eq!(parts[1]["image_url"]["url"], "data:image/png;base64,iVBOR");
    }

    #[test]
    fn test_message_deserialization() {
        let json = r#"{"role":"user","content":[{"type":"text","text":"hi"}]}"#;
        let msg: LlmMessage = serde_json::from_str(json).unwrap();

        assert_eq!(msg.role, MessageRole::User);
        assert_eq!(msg.content.len(), 1);
    }
}
