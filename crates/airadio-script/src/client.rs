use airadio_config::CompletionConfig;
use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use url::Url;

use crate::error::CompletionError;

/// Default OpenAI-compatible API base URL
const DEFAULT_BASE_URL: &str = "https://api.groq.com/openai/v1";

/// Client for the chat-completion endpoint
///
/// One request per script. No retry and no request timeout; the script
/// service absorbs every failure into its fallback line.
pub struct CompletionClient {
    client: Client,
    base_url: Url,
    api_key: Option<SecretString>,
    model: String,
    temperature: f64,
    max_tokens: u32,
}

impl CompletionClient {
    /// Create from completion configuration
    ///
    /// # Panics
    ///
    /// Panics if the hardcoded default base URL is invalid (should never happen).
    pub fn new(config: &CompletionConfig) -> Self {
        let base_url = config
            .base_url
            .clone()
            .unwrap_or_else(|| Url::parse(DEFAULT_BASE_URL).expect("valid default URL"));

        Self {
            client: Client::new(),
            base_url,
            api_key: config.api_key.clone(),
            model: config.model.clone(),
            temperature: config.temperature,
            max_tokens: config.max_tokens,
        }
    }

    /// Build the chat completions URL
    fn completions_url(&self) -> String {
        let base = self.base_url.as_str().trim_end_matches('/');
        format!("{base}/chat/completions")
    }

    /// Request a single completion for the prompt
    ///
    /// # Errors
    ///
    /// Returns a `CompletionError` if the request cannot be sent, the
    /// endpoint rejects it, or the response carries no completion text
    pub async fn complete(&self, prompt: &str) -> Result<String, CompletionError> {
        tracing::debug!(model = %self.model, prompt_len = prompt.len(), "requesting completion");

        let body = ChatRequest {
            model: &self.model,
            messages: vec![ChatMessage {
                role: "user",
                content: prompt,
            }],
            temperature: self.temperature,
            max_tokens: self.max_tokens,
        };

        let mut builder = self.client.post(self.completions_url()).json(&body);

        if let Some(key) = &self.api_key {
            builder = builder.bearer_auth(key.expose_secret());
        }

        let response = builder
            .send()
            .await
            .map_err(|e| CompletionError::Connection(e.to_string()))?;

        let status = response.status();

        if !status.is_success() {
            let message = response.text().await.unwrap_or_else(|_| "unknown error".to_owned());

            return Err(match status.as_u16() {
                401 | 403 => CompletionError::AuthenticationFailed(message),
                _ => CompletionError::Api {
                    status: status.as_u16(),
                    message,
                },
            });
        }

        let completion: ChatResponse = response
            .json()
            .await
            .map_err(|e| CompletionError::Malformed(e.to_string()))?;

        completion
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or_else(|| CompletionError::Malformed("response carried no completion text".to_owned()))
    }
}

#[derive(serde::Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f64,
    max_tokens: u32,
}

#[derive(serde::Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(serde::Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(serde::Deserialize)]
struct Choice {
    message: AssistantMessage,
}

#[derive(serde::Deserialize)]
struct AssistantMessage {
    content: Option<String>,
}
