//! List command implementation

use anyhow::Result;
use chrono::{Local, TimeZone};

use crate::client::{HubClient, LibraryBackend};
use crate::config::AppConfig;
use crate::library::{LibraryFilter, LibraryView};
use crate::models::game::Source;

pub async fn execute_list_command(
    config: &AppConfig,
    favorites: bool,
    hidden: bool,
    source: Option<String>,
    search: Option<String>,
) -> Result<()> {
    let client = HubClient::new(&config.server_url);
    let games = client.fetch_all_games().await?;

    // Reuse the view model so the CLI shows exactly what the TUI would
    let mut view = LibraryView::new();
    view.replace_all(games);
    if favorites {
        view.set_filter(LibraryFilter::Favorites);
    } else if hidden {
        view.set_filter(LibraryFilter::Hidden);
    } else if let Some(source) = source {
        let filter = LibraryFilter::Source(Source::from(source));
        if !view.filter_menu().contains(&filter) {
            println!("📋 No games registered from '{}'.", filter.label());
            return Ok(());
        }
        view.set_filter(filter);
    }
    if let Some(search) = search {
        view.set_search_text(search);
    }

    let visible = view.visible_entries();
    if visible.is_empty() {
        println!("📋 No games match the current filters.");
        return Ok(());
    }

    println!(
        "🎮 {} game(s) under '{}':",
        visible.len(),
        view.active_filter().label()
    );
    for game in visible {
        let star = if game.favorite { "★" } else { " " };
        let last_played = game
            .last_played
            .and_then(|epoch| Local.timestamp_opt(epoch as i64, 0).single())
            .map(|ts| ts.format("%Y-%m-%d").to_string())
            .unwrap_or_else(|| "never".to_string());
        println!(
            "  {} {:40} {:12} {:>8}  last played {}",
            star,
            game.name,
            game.source.to_string(),
            game.playtime_display(),
            last_played
        );
    }

    Ok(())
}
