//! Terminal User Interface components

pub mod event_loop;
pub mod main_app;
pub mod ui;

#[cfg(test)]
mod tests;

use std::sync::Arc;

use anyhow::Result;

use crate::client::HubClient;
use crate::config::AppConfig;

/// Run the Terminal User Interface
pub async fn run_tui(config: AppConfig) -> Result<()> {
    let client = Arc::new(HubClient::new(&config.server_url));
    let ws_url = client.websocket_url();
    let reconnect_seconds = config.push.reconnect_seconds;

    let app = main_app::App::new(&config, client);
    event_loop::run_tui_event_loop(app, ws_url, reconnect_seconds).await
}
