//! Programmatic configuration builder for integration tests

use std::net::SocketAddr;

use airadio_config::{AudioConfig, CompletionConfig, Config, CorsConfig, HealthConfig, ServerConfig};
use secrecy::SecretString;

/// Builder for constructing test configurations
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Create a new builder with minimal defaults
    pub fn new() -> Self {
        Self {
            config: Config {
                server: ServerConfig {
                    listen_address: Some(SocketAddr::from(([127, 0, 0, 1], 0))),
                    health: HealthConfig::default(),
                    cors: CorsConfig::default(),
                },
                completion: CompletionConfig::default(),
                audio: AudioConfig::default(),
            },
        }
    }

    /// Point the completion client at a mock backend
    pub fn with_completion_backend(mut self, base_url: &str) -> Self {
        self.config.completion.api_key = Some(SecretString::from("test-key"));
        self.config.completion.base_url = Some(base_url.parse().expect("valid URL"));
        self
    }

    /// Set CORS configuration
    pub fn with_cors(mut self, cors: CorsConfig) -> Self {
        self.config.server.cors = cors;
        self
    }

    /// Disable the health endpoint
    pub fn without_health(mut self) -> Self {
        self.config.server.health.enabled = false;
        self
    }

    /// Build the final config
    pub fn build(self) -> Config {
        self.config
    }
}
