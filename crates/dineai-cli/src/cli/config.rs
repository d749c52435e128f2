//! `dineai config`: show the resolved configuration.
//!
//! Works without an API key or database so it can be used to diagnose
//! startup failures.

use std::path::Path;

use anyhow::Result;
use console::style;

use dineai_infra::config::{CONFIG_FILE, validate_config};
use dineai_infra::secret::{API_KEY_VARS, resolve_api_key};
use dineai_infra::sqlite::database_url_for;
use dineai_types::config::AppConfig;

pub fn config_json(data_dir: &Path, config: &AppConfig, credential_set: bool) -> serde_json::Value {
    serde_json::json!({
        "version": env!("CARGO_PKG_VERSION"),
        "data_dir": data_dir.display().to_string(),
        "config_file": data_dir.join(CONFIG_FILE).display().to_string(),
        "database_url": config
            .store
            .database_url
            .clone()
            .unwrap_or_else(|| database_url_for(data_dir)),
        "credential_set": credential_set,
        "valid": validate_config(config).is_ok(),
        "config": config,
    })
}

pub fn show_config(data_dir: &Path, config: &AppConfig, json: bool) -> Result<()> {
    let credential_set = resolve_api_key().is_ok();

    if json {
        let body = config_json(data_dir, config, credential_set);
        println!("{}", serde_json::to_string_pretty(&body)?);
        return Ok(());
    }

    let config_path = data_dir.join(CONFIG_FILE);
    let check_mark = |ok: bool| {
        if ok {
            format!("{}", style("✓").green())
        } else {
            format!("{}", style("✗").red())
        }
    };

    println!();
    println!("  {} dineai v{}", style("⚡").bold(), env!("CARGO_PKG_VERSION"));
    println!();

    println!("  {}", style("── Files ──").dim());
    println!("  Data dir:    {}", style(data_dir.display()).dim());
    println!(
        "  Config file: {} {}",
        style(config_path.display()).dim(),
        if config_path.exists() { "" } else { "(not found, using defaults)" }
    );
    println!(
        "  Database:    {}",
        style(
            config
                .store
                .database_url
                .clone()
                .unwrap_or_else(|| database_url_for(data_dir))
        )
        .dim()
    );
    println!();

    println!("  {}", style("── Model ──").dim());
    println!("  Text model:  {}", style(&config.model.text_model).cyan());
    println!("  Image model: {}", style(&config.model.image_model).cyan());
    if let Some(base_url) = &config.model.base_url {
        println!("  Base URL:    {base_url}");
    }
    println!(
        "  Sampling:    temperature {} / top_p {} / top_k {} / max tokens {}",
        config.model.temperature,
        config.model.top_p,
        config.model.top_k,
        config.model.max_output_tokens
    );
    println!("  Timeout:     {}s", config.model.timeout_secs);
    println!();

    println!("  {}", style("── Checks ──").dim());
    println!(
        "  {} API key ({})",
        check_mark(credential_set),
        API_KEY_VARS.join(" or ")
    );
    match validate_config(config) {
        Ok(()) => println!("  {} Configuration values", check_mark(true)),
        Err(e) => println!("  {} {e}", check_mark(false)),
    }
    println!();

    Ok(())
}
