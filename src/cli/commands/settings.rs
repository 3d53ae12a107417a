//! Settings command implementation

use anyhow::Result;

use crate::client::{HubClient, LibraryBackend};
use crate::config::AppConfig;

pub async fn execute_settings_command(
    config: &AppConfig,
    steamgriddb_api_key: Option<String>,
    add_scan_path: Option<String>,
) -> Result<()> {
    let client = HubClient::new(&config.server_url);
    let mut settings = client.fetch_settings().await?;

    let changed = steamgriddb_api_key.is_some() || add_scan_path.is_some();

    if let Some(key) = steamgriddb_api_key {
        settings.steamgriddb_api_key = Some(key);
    }
    if let Some(path) = add_scan_path {
        if !settings.scan_paths.contains(&path) {
            settings.scan_paths.push(path);
        }
    }

    if changed {
        client.save_settings(&settings).await?;
        println!("✅ Settings saved.");
    }

    println!("⚙️  Backend settings:");
    match &settings.steamgriddb_api_key {
        Some(key) if !key.is_empty() => {
            println!("  SteamGridDB API key: set ({} chars)", key.len())
        }
        _ => println!("  SteamGridDB API key: not set"),
    }
    if settings.scan_paths.is_empty() {
        println!("  Extra scan paths: none");
    } else {
        println!("  Extra scan paths:");
        for path in &settings.scan_paths {
            println!("    - {}", path);
        }
    }

    Ok(())
}
