use serde::Deserialize;

pub const API_KEY_ENV: &str = "GOOGLE_API_KEY";

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub api_key: Option<String>,
    #[serde(default = "default_api_base")]
    pub api_base: String,
    #[serde(default = "default_model")]
    pub model: String,
    #[serde(default = "default_aspect_ratio")]
    pub aspect_ratio: String,
    /// Request body ceiling in bytes
    #[serde(default = "default_max_body_bytes")]
    pub max_body_bytes: usize,
}

fn default_api_base() -> String {
    "https://generativelanguage.googleapis.com/v1beta".to_string()
}

fn default_model() -> String {
    "gemini-2.5-flash-image".to_string()
}

fn default_aspect_ratio() -> String {
    "1:1".to_string()
}

fn default_max_body_bytes() -> usize {
    2 * 1024 * 1024
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: None,
            api_base: default_api_base(),
            model: default_model(),
            aspect_ratio: default_aspect_ratio(),
            max_body_bytes: default_max_body_bytes(),
        }
    }
}

impl Config {
    pub fn from_file(path: &str) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = serde_yaml::from_str(&content)?;
        Ok(config)
    }

    /// Loads the optional config file, then lets `GOOGLE_API_KEY` fill in a missing key.
    pub fn load(path: Option<&str>) -> anyhow::Result<Self> {
        let config = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        Ok(config.with_env_key(std::env::var(API_KEY_ENV).ok()))
    }

    pub fn with_env_key(mut self, env_key: Option<String>) -> Self {
        if self.api_key().is_none() {
            self.api_key = env_key.filter(|k| !k.trim().is_empty());
        }
        self
    }

    /// Blank keys count as missing.
    pub fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref().filter(|k| !k.trim().is_empty())
    }
}
