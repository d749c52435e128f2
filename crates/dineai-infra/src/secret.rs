//! Gemini API key resolution from the environment.
//!
//! `GOOGLE_API_KEY` is checked first, then `GEMINI_API_KEY`. Blank values
//! count as unset. The key is returned wrapped in [`SecretString`].

use secrecy::SecretString;

use dineai_types::error::ConfigError;

/// Environment variables consulted, in priority order.
pub const API_KEY_VARS: [&str; 2] = ["GOOGLE_API_KEY", "GEMINI_API_KEY"];

/// Resolve the Gemini API key from the process environment.
pub fn resolve_api_key() -> Result<SecretString, ConfigError> {
    resolve_api_key_with(|name| std::env::var(name).ok())
}

/// Resolve the key through `lookup`, which maps a variable name to its value.
pub fn resolve_api_key_with<F>(lookup: F) -> Result<SecretString, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    API_KEY_VARS
        .iter()
        .filter_map(|name| lookup(name))
        .map(|value| value.trim().to_string())
        .find(|value| !value.is_empty())
        .map(SecretString::from)
        .ok_or_else(|| ConfigError::MissingCredential(API_KEY_VARS[0].to_string()))
}
