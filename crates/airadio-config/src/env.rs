use std::sync::OnceLock;

use regex::Regex;

/// Expand `{{ env.VAR }}` placeholders in a raw TOML string
///
/// Expansion runs before deserialization, so config structs use plain
/// `String`/`SecretString` fields while secrets stay in the environment.
pub fn expand_env(input: &str) -> Result<String, String> {
    static RE: OnceLock<Regex> = OnceLock::new();
    let re = RE.get_or_init(|| {
        Regex::new(r"\{\{\s*env\.([A-Za-z0-9_]+)\s*\}\}").expect("must be valid regex")
    });

    let mut missing: Option<String> = None;
    let expanded = re.replace_all(input, |captures: &regex::Captures<'_>| {
        let var = &captures[1];
        std::env::var(var).unwrap_or_else(|_| {
            missing.get_or_insert_with(|| var.to_owned());
            String::new()
        })
    });

    match missing {
        Some(var) => Err(format!("environment variable not found: `{var}`")),
        None => Ok(expanded.into_owned()),
    }
}
