pub mod gemini_candidate;
pub mod gemini_content;
pub mod gemini_generation_config;
pub mod gemini_inline_data;
pub mod gemini_part;
pub mod gemini_request;
pub mod gemini_response;

use serde::{Deserialize, Deserializer};

pub use gemini_candidate::GeminiCandidate;
pub use gemini_content::GeminiContent;
pub use gemini_generation_config::{GeminiGenerationConfig, GeminiImageConfig};
pub use gemini_inline_data::GeminiInlineData;
pub use gemini_part::GeminiPart;
pub use gemini_request::GeminiRequest;
pub use gemini_response::GeminiResponse;

/// Decodes a list that the service may send as `null`; `null` becomes empty.
pub(crate) fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}
