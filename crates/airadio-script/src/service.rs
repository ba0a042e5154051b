use jiff::Zoned;

use crate::client::CompletionClient;
use crate::normalize::normalize;
use crate::types::{ScriptKind, ScriptRequest};
use crate::{feeds, prompt};

/// Line returned when the completion service fails
pub const FALLBACK_SCRIPT: &str = "I'm sorry, I couldn't generate the commentary at this time.";

/// Script generation pipeline: prompt construction, completion, cleanup
///
/// Holds the completion client as an explicitly constructed dependency;
/// stateless across requests.
pub struct ScriptService {
    completion: CompletionClient,
}

impl ScriptService {
    pub const fn new(completion: CompletionClient) -> Self {
        Self { completion }
    }

    /// Generate a speakable script for the request
    ///
    /// A non-empty `prompt_override` bypasses category dispatch entirely.
    /// A `TrackIntro` request without metadata falls through to the generic
    /// transition prompt. Completion failures never surface: they are
    /// logged and replaced with [`FALLBACK_SCRIPT`].
    pub async fn generate(&self, request: &ScriptRequest) -> String {
        if let Some(prompt_override) = request.prompt_override.as_deref().filter(|p| !p.trim().is_empty()) {
            return self.speak(prompt_override).await;
        }

        let now = Zoned::now();

        let prompt = match request.kind {
            ScriptKind::Intro => prompt::show_intro(&now),
            ScriptKind::TrackIntro => request
                .track_info
                .as_ref()
                .map_or_else(|| prompt::transition(&now), |track| prompt::track_intro(&now, track)),
            ScriptKind::Weather => prompt::weather_update(&now, &feeds::current_weather()),
            ScriptKind::News => {
                let items = feeds::latest_news();
                items
                    .first()
                    .map_or_else(|| prompt::transition(&now), |item| prompt::news_update(&now, item))
            }
            ScriptKind::Generic => prompt::transition(&now),
        };

        self.speak(&prompt).await
    }

    /// Complete a prompt and normalize the result into speakable text
    async fn speak(&self, prompt: &str) -> String {
        match self.completion.complete(&prompt::speakable(prompt)).await {
            Ok(text) => normalize(&text),
            Err(e) => {
                tracing::error!(error = %e, "completion request failed");
                FALLBACK_SCRIPT.to_owned()
            }
        }
    }
}
