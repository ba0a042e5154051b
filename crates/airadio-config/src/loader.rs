use std::path::Path;

use crate::Config;

impl Config {
    /// Load configuration from a TOML file
    ///
    /// Reads the file, expands `{{ env.VAR }}` placeholders, then
    /// deserializes and validates the result.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, environment variable
    /// expansion fails, TOML parsing fails, or validation fails
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("failed to read config file {}: {e}", path.display()))?;

        let expanded =
            crate::env::expand_env(&raw).map_err(|e| anyhow::anyhow!("config variable expansion failed: {e}"))?;

        let config: Self = toml::from_str(&expanded).map_err(|e| anyhow::anyhow!("failed to parse config: {e}"))?;

        config.validate()?;

        Ok(config)
    }

    /// Validate that the configuration is internally consistent
    ///
    /// # Errors
    ///
    /// Returns an error if the completion section holds out-of-range
    /// sampling parameters or an empty model identifier
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.completion.model.is_empty() {
            anyhow::bail!("completion.model must not be empty");
        }

        if !(0.0..=2.0).contains(&self.completion.temperature) {
            anyhow::bail!("completion.temperature must be between 0.0 and 2.0");
        }

        if self.completion.max_tokens == 0 {
            anyhow::bail!("completion.max_tokens must be greater than 0");
        }

        Ok(())
    }
}
