//! ClipRecall CLI entry point

use std::process::ExitCode;

use clap::Parser;

use clip_recall::cli::{
    app::{load_merged_config, run_watch, EXIT_ERROR},
    args::{Cli, Commands},
    config_cmd::handle_config_command,
    presenter::Presenter,
};
use clip_recall::domain::config::AppConfig;
use clip_recall::infrastructure::XdgConfigStore;

#[tokio::main(flavor = "multi_thread", worker_threads = 2)]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    let presenter = Presenter::new();

    // Handle subcommands
    if let Some(Commands::Config { action }) = cli.command {
        let store = XdgConfigStore::new();
        if let Err(e) = handle_config_command(action, &store, &presenter).await {
            presenter.error(&e.to_string());
            return ExitCode::from(EXIT_ERROR);
        }
        return ExitCode::SUCCESS;
    }

    // Build CLI config from args
    let cli_config = AppConfig {
        capacity: cli.capacity,
        poll_interval_ms: cli.interval,
        copy_settle_ms: None,
        dwell_ms: cli.dwell,
        feedback_reset_ms: None,
        paste: if cli.no_paste { Some(false) } else { None },
    };

    // Merge config and run the watch loop
    let config = load_merged_config(cli_config, &presenter).await;
    run_watch(config).await
}
