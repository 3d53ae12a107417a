//! Favorite / hide commands - partial updates to a single entry

use anyhow::Result;

use crate::cli::commands::find_entry;
use crate::client::{HubClient, LibraryBackend};
use crate::config::AppConfig;
use crate::models::game::GamePatch;

pub async fn execute_favorite_command(
    config: &AppConfig,
    name: &str,
    source: Option<&str>,
    favorite: bool,
) -> Result<()> {
    let client = HubClient::new(&config.server_url);
    let game = find_entry(&client, name, source).await?;

    client
        .update_game_fields(&game.key(), &GamePatch::favorite(favorite))
        .await?;

    if favorite {
        println!("★ {} marked as favorite.", game.name);
    } else {
        println!("☆ {} is no longer a favorite.", game.name);
    }
    Ok(())
}

pub async fn execute_hide_command(
    config: &AppConfig,
    name: &str,
    source: Option<&str>,
    hidden: bool,
) -> Result<()> {
    let client = HubClient::new(&config.server_url);
    let game = find_entry(&client, name, source).await?;

    client
        .update_game_fields(&game.key(), &GamePatch::hidden(hidden))
        .await?;

    if hidden {
        println!("🙈 {} hidden from the main views.", game.name);
    } else {
        println!("👀 {} restored.", game.name);
    }
    Ok(())
}
