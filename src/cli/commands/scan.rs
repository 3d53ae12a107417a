//! Scan command implementation

use anyhow::Result;

use crate::client::{HubClient, LibraryBackend};
use crate::config::AppConfig;

pub async fn execute_scan_command(config: &AppConfig) -> Result<()> {
    let client = HubClient::new(&config.server_url);

    println!("🔍 Requesting library rescan from {}...", client.base_url());
    client.trigger_scan().await?;

    // The scan runs in the backend; completion is announced on the push
    // channel, so there is nothing to wait for here.
    println!("✅ Scan started. Run 'gamehub list' in a moment for fresh results.");
    Ok(())
}
