//! Configuration loader.
//!
//! Reads `config.toml` from the data directory (`~/.dineai/` by default)
//! into [`AppConfig`]. A missing or malformed file falls back to defaults;
//! values that parse but make no sense are rejected by [`validate_config`].

use std::path::Path;

use dineai_types::config::AppConfig;
use dineai_types::error::ConfigError;

/// File name of the configuration inside the data directory.
pub const CONFIG_FILE: &str = "config.toml";

/// Load configuration from `{data_dir}/config.toml`.
///
/// - Missing file: defaults, logged at debug.
/// - Unreadable or unparsable file: defaults, logged at warn.
pub async fn load_app_config(data_dir: &Path) -> AppConfig {
    let config_path = data_dir.join(CONFIG_FILE);

    let content = match tokio::fs::read_to_string(&config_path).await {
        Ok(content) => content,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!("No config.toml found at {}, using defaults", config_path.display());
            return AppConfig::default();
        }
        Err(err) => {
            tracing::warn!("Failed to read {}: {err}, using defaults", config_path.display());
            return AppConfig::default();
        }
    };

    match toml::from_str::<AppConfig>(&content) {
        Ok(config) => config,
        Err(err) => {
            tracing::warn!(
                "Failed to parse {}: {err}, using defaults",
                config_path.display()
            );
            AppConfig::default()
        }
    }
}

/// Reject values the Gemini API would refuse or that disable the client.
pub fn validate_config(config: &AppConfig) -> Result<(), ConfigError> {
    let model = &config.model;

    if model.text_model.trim().is_empty() {
        return Err(ConfigError::InvalidConfig("model.text_model is empty".to_string()));
    }
    if model.image_model.trim().is_empty() {
        return Err(ConfigError::InvalidConfig("model.image_model is empty".to_string()));
    }
    if !(0.0..=2.0).contains(&model.temperature) {
        return Err(ConfigError::InvalidConfig(format!(
            "model.temperature must be between 0.0 and 2.0, got {}",
            model.temperature
        )));
    }
    if !(0.0..=1.0).contains(&model.top_p) {
        return Err(ConfigError::InvalidConfig(format!(
            "model.top_p must be between 0.0 and 1.0, got {}",
            model.top_p
        )));
    }
    if model.top_k == 0 {
        return Err(ConfigError::InvalidConfig("model.top_k must be at least 1".to_string()));
    }
    if model.max_output_tokens == 0 {
        return Err(ConfigError::InvalidConfig(
            "model.max_output_tokens must be at least 1".to_string(),
        ));
    }
    if model.timeout_secs == 0 {
        return Err(ConfigError::InvalidConfig(
            "model.timeout_secs must be at least 1".to_string(),
        ));
    }

    Ok(())
}
