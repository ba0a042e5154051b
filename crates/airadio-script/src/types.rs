use serde::{Deserialize, Serialize};

/// Script category requested by the client
///
/// Unrecognized category strings (including the documented "other") land on
/// `Generic` at deserialization time, so dispatch stays exhaustive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScriptKind {
    /// Show opening with a time-of-day greeting
    Intro,
    /// Introduction for the next track
    TrackIntro,
    /// Campus weather update
    Weather,
    /// Campus news segment
    News,
    /// Casual segment transition
    #[serde(other)]
    Generic,
}

/// Request body for `POST /api/generate-script`
#[derive(Debug, Deserialize)]
pub struct ScriptRequest {
    /// Script category
    #[serde(rename = "type")]
    pub kind: ScriptKind,
    /// Track metadata for track introductions
    #[serde(default)]
    pub track_info: Option<TrackInfo>,
    /// Custom prompt that bypasses category logic when non-empty
    #[serde(default)]
    pub prompt_override: Option<String>,
}

/// Free-text track metadata
#[derive(Debug, Clone, Deserialize)]
pub struct TrackInfo {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub artists: Option<String>,
    #[serde(default)]
    pub album: Option<String>,
}

/// Response body for `POST /api/generate-script`
#[derive(Debug, Serialize)]
pub struct ScriptResponse {
    /// Speakable single-line script text
    pub script: String,
}

/// Request body for `POST /api/text-to-speech`
#[derive(Debug, Deserialize)]
pub struct SpeechRequest {
    /// Text to convert to speech
    pub text: String,
    /// Voice identifier
    #[serde(default = "default_voice")]
    pub voice_id: String,
    /// Emotion style for the speech
    #[serde(default = "default_emotion")]
    pub emotion: String,
}

fn default_voice() -> String {
    "shruthi".to_owned()
}

fn default_emotion() -> String {
    "cheerful".to_owned()
}

/// Response body for `POST /api/text-to-speech` (synthesis stub)
#[derive(Debug, Serialize)]
pub struct SpeechResponse {
    pub audio_data: String,
    pub duration: f64,
}
