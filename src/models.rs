use serde::{Deserialize, Serialize};

pub const DEFAULT_IMAGE_MIME: &str = "image/png";

/// Inbound body. Every field is optional here so that an incomplete body
/// still decodes and can be answered with the generic missing-fields error.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationRequest {
    #[serde(default)]
    pub product: Option<Product>,
    #[serde(default)]
    pub monogram: Option<String>,
    #[serde(default)]
    pub thread_color: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Product {
    #[serde(default)]
    pub prompt: Option<String>,
}

/// A request whose three fields are all present and non-empty.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedRequest<'a> {
    pub product_prompt: &'a str,
    pub monogram: &'a str,
    pub thread_color: &'a str,
}

impl GenerationRequest {
    pub fn validate(&self) -> Option<ValidatedRequest<'_>> {
        Some(ValidatedRequest {
            product_prompt: non_empty(self.product.as_ref()?.prompt.as_deref())?,
            monogram: non_empty(self.monogram.as_deref())?,
            thread_color: non_empty(self.thread_color.as_deref())?,
        })
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct GenerationResult {
    pub base64: String,
    pub mime: String,
}

impl GenerationResult {
    pub fn new(base64: impl Into<String>, mime: Option<&str>) -> Self {
        Self {
            base64: base64.into(),
            mime: mime
                .filter(|m| !m.is_empty())
                .unwrap_or(DEFAULT_IMAGE_MIME)
                .to_string(),
        }
    }
}
