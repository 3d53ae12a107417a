//! CLI command implementations

pub mod flags;
pub mod launch;
pub mod list;
pub mod scan;
pub mod settings;

use anyhow::Result;

use crate::cli::args::{Cli, Commands};
use crate::client::{HubClient, LibraryBackend};
use crate::config::AppConfig;
use crate::models::game::{GameEntry, Source};

/// Execute a CLI command
pub async fn execute_command(command: Commands, _cli: &Cli, config: &AppConfig) -> Result<()> {
    match command {
        Commands::List {
            favorites,
            hidden,
            source,
            search,
        } => list::execute_list_command(config, favorites, hidden, source, search).await,
        Commands::Scan => scan::execute_scan_command(config).await,
        Commands::Launch { name, source } => {
            launch::execute_launch_command(config, &name, source.as_deref()).await
        }
        Commands::Favorite {
            name,
            source,
            remove,
        } => flags::execute_favorite_command(config, &name, source.as_deref(), !remove).await,
        Commands::Hide {
            name,
            source,
            restore,
        } => flags::execute_hide_command(config, &name, source.as_deref(), !restore).await,
        Commands::Settings {
            steamgriddb_api_key,
            add_scan_path,
        } => settings::execute_settings_command(config, steamgriddb_api_key, add_scan_path).await,
    }
}

/// Fetch the library and resolve one entry by name, disambiguating by source
/// when several launchers registered the same title.
pub async fn find_entry(
    client: &HubClient,
    name: &str,
    source: Option<&str>,
) -> Result<GameEntry> {
    let games = client.fetch_all_games().await?;
    let wanted_source = source.map(|s| Source::from(s.to_string()));

    let matches: Vec<&GameEntry> = games
        .iter()
        .filter(|game| game.name.eq_ignore_ascii_case(name))
        .filter(|game| {
            wanted_source
                .as_ref()
                .is_none_or(|source| game.source == *source)
        })
        .collect();

    match matches.as_slice() {
        [] => Err(anyhow::anyhow!("No game named '{}' in the library", name)),
        [game] => Ok((*game).clone()),
        several => {
            eprintln!("'{}' exists under several sources:", name);
            for game in several {
                eprintln!("  - {}", game.source);
            }
            Err(anyhow::anyhow!(
                "Ambiguous name '{}', disambiguate with --source",
                name
            ))
        }
    }
}
