use crate::gemini::{GeminiContent, GeminiGenerationConfig, GeminiImageConfig};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GeminiRequest {
    pub contents: Vec<GeminiContent>,
    #[serde(rename = "generationConfig")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generation_config: Option<GeminiGenerationConfig>,
}

impl GeminiRequest {
    /// A single-turn text prompt asking for one image at the given aspect ratio.
    pub fn image_prompt(prompt: impl Into<String>, aspect_ratio: impl Into<String>) -> Self {
        Self {
            contents: vec![GeminiContent::user_text(prompt)],
            generation_config: Some(GeminiGenerationConfig {
                image_config: Some(GeminiImageConfig {
                    aspect_ratio: Some(aspect_ratio.into()),
                }),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_image_prompt_wire_shape() {
        let req = GeminiRequest::image_prompt("a navy polo", "1:1");
        let value = serde_json::to_value(&req).unwrap();
        assert_eq!(
            value,
            json!({
                "contents": [ { "role": "user", "parts": [ { "text": "a navy polo" } ] } ],
                "generationConfig": { "imageConfig": { "aspectRatio": "1:1" } }
            })
        );
    }
}
