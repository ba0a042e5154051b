#![allow(clippy::must_use_candidate)]

pub mod audio;
pub mod completion;
pub mod cors;
mod env;
pub mod health;
mod loader;
pub mod server;

use serde::Deserialize;

pub use audio::*;
pub use completion::*;
pub use cors::*;
pub use health::*;
pub use server::*;

/// Top-level configuration for the radio backend
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,
    /// Completion service configuration
    #[serde(default)]
    pub completion: CompletionConfig,
    /// Audio engine gateway configuration
    #[serde(default)]
    pub audio: AudioConfig,
}
