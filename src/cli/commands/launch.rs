//! Launch command implementation

use anyhow::Result;

use crate::cli::commands::find_entry;
use crate::client::{HubClient, LibraryBackend};
use crate::config::AppConfig;
use crate::models::responses::LaunchRequest;

pub async fn execute_launch_command(
    config: &AppConfig,
    name: &str,
    source: Option<&str>,
) -> Result<()> {
    let client = HubClient::new(&config.server_url);
    let game = find_entry(&client, name, source).await?;

    // An unresolvable command must become a user-visible failure, never an
    // empty launch request to the backend
    let Some(command) = game.launch_command() else {
        return Err(anyhow::anyhow!(
            "'{}' from source '{}' has no launch command; start it from its own launcher",
            game.name,
            game.source
        ));
    };

    println!("🚀 Launching {} via {}...", game.name, game.source);
    let request = LaunchRequest {
        command,
        source: game.source.clone(),
        name: game.name.clone(),
        install_path: game.install_path.clone(),
    };
    client.launch_game(&request).await?;
    println!("✅ Launch request sent.");

    Ok(())
}
