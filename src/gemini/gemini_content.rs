use crate::gemini::{GeminiPart, null_as_empty};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GeminiContent {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>, // "user" or "model"
    #[serde(default, deserialize_with = "null_as_empty")]
    pub parts: Vec<GeminiPart>,
}

impl GeminiContent {
    pub fn user_text(text: impl Into<String>) -> Self {
        Self {
            role: Some("user".to_string()),
            parts: vec![GeminiPart::Text {
                text: text.into(),
                thought: None,
            }],
        }
    }
}
