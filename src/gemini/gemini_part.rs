use crate::gemini::GeminiInlineData;
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum GeminiPart {
    Text {
        text: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        thought: Option<bool>,
    },
    InlineData {
        #[serde(rename = "inlineData")]
        inline_data: GeminiInlineData,
    },
    // Function calls, code execution and anything newer; kept so decoding never fails on them
    Other(Value),
}

impl GeminiPart {
    /// Inline data carrying a non-empty payload.
    pub fn inline_image(&self) -> Option<&GeminiInlineData> {
        match self {
            GeminiPart::InlineData { inline_data } if !inline_data.data.is_empty() => {
                Some(inline_data)
            }
            _ => None,
        }
    }
}
