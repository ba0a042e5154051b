use secrecy::SecretString;
use serde::Deserialize;
use url::Url;

/// Completion service configuration
///
/// The API key is normally supplied through `{{ env.GROQ_API_KEY }}`
/// expansion so the credential never lives in the config file itself.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CompletionConfig {
    /// API key for the completion endpoint
    #[serde(default)]
    pub api_key: Option<SecretString>,
    /// Base URL override for OpenAI-compatible endpoints
    #[serde(default)]
    pub base_url: Option<Url>,
    /// Model identifier sent with every request
    #[serde(default = "default_model")]
    pub model: String,
    /// Sampling temperature
    #[serde(default = "default_temperature")]
    pub temperature: f64,
    /// Upper bound on generated tokens per completion
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,
}

impl Default for CompletionConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: None,
            model: default_model(),
            temperature: default_temperature(),
            max_tokens: default_max_tokens(),
        }
    }
}

fn default_model() -> String {
    "llama3-8b-8192".to_owned()
}

#[allow(clippy::missing_const_for_fn)]
fn default_temperature() -> f64 {
    0.7
}

#[allow(clippy::missing_const_for_fn)]
fn default_max_tokens() -> u32 {
    200
}
