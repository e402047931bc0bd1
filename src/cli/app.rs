//! Watch-loop app runner

use std::process::ExitCode;

use tokio::sync::mpsc;

use crate::application::ports::ConfigStore;
use crate::application::{ClipboardGate, ClipboardWatcher, WatcherConfig, WatcherEvent};
use crate::domain::config::AppConfig;
use crate::domain::history::HistoryStore;
use crate::infrastructure::{create_clipboard, XdgConfigStore};

use super::presenter::Presenter;

pub const EXIT_SUCCESS: u8 = 0;
pub const EXIT_ERROR: u8 = 1;

/// Load the config file and merge CLI overrides on top.
/// An unreadable config file is reported and ignored.
pub async fn load_merged_config(cli_config: AppConfig, presenter: &Presenter) -> AppConfig {
    let store = XdgConfigStore::new();
    let file_config = match store.load().await {
        Ok(config) => config,
        Err(e) => {
            presenter.warn(&format!("Ignoring config file: {}", e));
            AppConfig::empty()
        }
    };

    file_config.merge(cli_config)
}

/// Run the watch loop until Ctrl-C.
///
/// Owns the history store and drains watcher events; background tasks
/// never touch it directly. Each newly observed entry is printed; read
/// failures surface as warnings and the loop continues.
pub async fn run_watch(config: AppConfig) -> ExitCode {
    let presenter = Presenter::new();

    let gate = ClipboardGate::new(create_clipboard());
    let watcher = ClipboardWatcher::new(
        gate,
        WatcherConfig {
            poll_interval: config.poll_interval_or_default(),
            copy_settle: config.copy_settle_or_default(),
        },
    );

    // The edge sender is handed to whatever key hook the embedder wires
    // up; the CLI keeps it idle and relies on polling.
    let (_edge_tx, edge_rx) = mpsc::channel(16);
    let (event_tx, mut events) = mpsc::channel(64);
    let handle = watcher.spawn(edge_rx, event_tx);

    let mut store = HistoryStore::new(config.capacity_or_default());
    presenter.info(&format!(
        "Watching clipboard every {}ms, keeping {} entries (Ctrl-C to stop)",
        config.poll_interval_or_default().as_millis(),
        store.capacity(),
    ));

    let ctrl_c = tokio::signal::ctrl_c();
    tokio::pin!(ctrl_c);

    loop {
        tokio::select! {
            _ = &mut ctrl_c => break,
            event = events.recv() => match event {
                Some(WatcherEvent::Observed(entry)) => {
                    if store.observe(entry.clone()) {
                        presenter.entry(store.len(), entry.kind(), &entry.preview(50));
                    }
                }
                Some(WatcherEvent::ReadFailed(err)) => {
                    presenter.warn(&format!("Clipboard read failed: {}", err));
                }
                None => break,
            }
        }
    }

    presenter.info("Stopping");
    handle.shutdown().await;

    ExitCode::from(EXIT_SUCCESS)
}
