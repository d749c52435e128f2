//! dineai entry point.
//!
//! Binary name: `dineai`
//!
//! Parses arguments, installs tracing, loads configuration, wires the
//! application state, then dispatches to the command handler.

mod cli;
mod state;

use clap::Parser;

use cli::render::OutputMode;
use cli::{Cli, Commands};
use dineai_infra::config::load_app_config;
use dineai_infra::filesystem::resolve_data_dir;
use state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    dineai_observe::init_tracing(cli::log_directives(cli.verbose, cli.quiet), cli.otel)
        .map_err(|e| anyhow::anyhow!("failed to initialize tracing: {e}"))?;

    let result = run(cli).await;
    dineai_observe::shutdown_tracing();
    result
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let data_dir = resolve_data_dir();
    let config = load_app_config(&data_dir).await;
    let mode = OutputMode::from_flags(cli.json, cli.quiet);

    // Config display must work before a key or database exists.
    if let Commands::Config = cli.command {
        return cli::config::show_config(&data_dir, &config, cli.json);
    }

    let state = AppState::init(data_dir, config).await?;

    match cli.command {
        Commands::Event {
            occasion,
            people,
            cuisine,
            budget,
            drinks,
        } => {
            cli::feature::plan_event(&state, occasion, people, cuisine, budget, drinks, mode).await
        }
        Commands::Menu {
            meal_type,
            dietary_pref,
            image_out,
        } => cli::feature::recommend_menu(&state, meal_type, dietary_pref, image_out, mode).await,
        Commands::Leftovers {
            leftover_type,
            quantity,
        } => cli::feature::optimize_leftovers(&state, leftover_type, quantity, mode).await,
        Commands::Chat { message } => cli::feature::chat(&state, message, mode).await,
        Commands::Today { date } => cli::feature::todays_event(&state, date, mode).await,
        Commands::Config => Ok(()),
    }
}
