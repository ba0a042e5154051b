use std::time::Duration;

use serde::Deserialize;

/// Origins the web client is served from during development
pub const DEV_ORIGINS: [&str; 2] = ["http://localhost:3000", "http://localhost:5173"];

/// CORS configuration
///
/// Defaults to the two local development origins with credentials allowed,
/// any method, and any header.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CorsConfig {
    /// Allowed origins (wildcard "*" or explicit list)
    #[serde(default = "default_origins")]
    pub origins: AnyOrArray,
    /// Allowed HTTP methods (wildcard "*" or explicit list)
    #[serde(default)]
    pub methods: AnyOrArray,
    /// Allowed headers (wildcard "*" or explicit list)
    #[serde(default)]
    pub headers: AnyOrArray,
    /// Allow credentials
    #[serde(default = "default_credentials")]
    pub credentials: bool,
    /// Max age for preflight cache in seconds
    #[serde(default)]
    pub max_age: Option<u64>,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            origins: default_origins(),
            methods: AnyOrArray::Any,
            headers: AnyOrArray::Any,
            credentials: true,
            max_age: None,
        }
    }
}

impl CorsConfig {
    /// Get max age as Duration
    pub fn max_age_duration(&self) -> Option<Duration> {
        self.max_age.map(Duration::from_secs)
    }
}

fn default_origins() -> AnyOrArray {
    AnyOrArray::List(DEV_ORIGINS.iter().map(ToString::to_string).collect())
}

#[allow(clippy::missing_const_for_fn)]
fn default_credentials() -> bool {
    true
}

/// Either a wildcard "*" or explicit list of values
#[derive(Debug, Clone)]
pub enum AnyOrArray {
    /// Match any value
    Any,
    /// Explicit list
    List(Vec<String>),
}

impl Default for AnyOrArray {
    fn default() -> Self {
        Self::Any
    }
}

impl<'de> Deserialize<'de> for AnyOrArray {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            One(String),
            Many(Vec<String>),
        }

        Ok(match Raw::deserialize(deserializer)? {
            Raw::One(value) if value == "*" => Self::Any,
            Raw::One(value) => Self::List(vec![value]),
            Raw::Many(values) if values.iter().any(|v| v == "*") => Self::Any,
            Raw::Many(values) => Self::List(values),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Deserialize)]
    struct Doc {
        value: AnyOrArray,
    }

    #[test]
    fn wildcard_string_is_any() {
        let doc: Doc = toml::from_str("value = \"*\"").unwrap();
        assert!(matches!(doc.value, AnyOrArray::Any));
    }

    #[test]
    fn list_stays_explicit() {
        let doc: Doc = toml::from_str("value = [\"http://localhost:3000\"]").unwrap();
        let AnyOrArray::List(values) = doc.value else {
            panic!("expected explicit list");
        };
        assert_eq!(values, vec!["http://localhost:3000"]);
    }

    #[test]
    fn wildcard_inside_list_is_any() {
        let doc: Doc = toml::from_str("value = [\"http://localhost:3000\", \"*\"]").unwrap();
        assert!(matches!(doc.value, AnyOrArray::Any));
    }

    #[test]
    fn default_origins_are_the_dev_origins() {
        let config = CorsConfig::default();
        let AnyOrArray::List(origins) = config.origins else {
            panic!("expected explicit origins");
        };
        assert_eq!(origins, DEV_ORIGINS);
        assert!(config.credentials);
    }
}
