//! Core unit tests for gamehub CLI functionality
//!
//! Covers argument parsing, configuration loading and the wire format of the
//! backend snapshot payload.

use clap::Parser;
use gamehub::cli::args::{Cli, Commands};
use gamehub::config::{AppConfig, DEFAULT_SERVER_URL};
use gamehub::models::game::{GameEntry, Source};
use std::fs;
use tempfile::TempDir;

#[test]
fn test_parse_bare_invocation_defaults_to_tui() {
    let cli = Cli::try_parse_from(["gamehub"]).unwrap();
    assert!(cli.command.is_none());
    assert!(!cli.cli);
    assert_eq!(cli.verbose, 0);
}

#[test]
fn test_parse_list_with_filters() {
    let cli = Cli::try_parse_from([
        "gamehub",
        "list",
        "--favorites",
        "--source",
        "Epic Games",
        "--search",
        "hal",
    ])
    .unwrap();

    match cli.command {
        Some(Commands::List {
            favorites,
            hidden,
            source,
            search,
        }) => {
            assert!(favorites);
            assert!(!hidden);
            assert_eq!(source.as_deref(), Some("Epic Games"));
            assert_eq!(search.as_deref(), Some("hal"));
        }
        other => panic!("Expected List command, got a different parse: {:?}", other.is_some()),
    }
}

#[test]
fn test_parse_launch_with_source() {
    let cli = Cli::try_parse_from([
        "gamehub",
        "--server-url",
        "http://127.0.0.1:9000",
        "launch",
        "Rocket League",
        "--source",
        "Steam",
    ])
    .unwrap();

    assert_eq!(cli.server_url.as_deref(), Some("http://127.0.0.1:9000"));
    match cli.command {
        Some(Commands::Launch { name, source }) => {
            assert_eq!(name, "Rocket League");
            assert_eq!(source.as_deref(), Some("Steam"));
        }
        _ => panic!("Expected Launch command"),
    }
}

#[test]
fn test_parse_verbosity_flags() {
    let cli = Cli::try_parse_from(["gamehub", "-vv", "scan"]).unwrap();
    assert_eq!(cli.verbose, 2);
    assert!(matches!(cli.command, Some(Commands::Scan)));

    let cli = Cli::try_parse_from(["gamehub", "-q", "--cli"]).unwrap();
    assert!(cli.quiet);
    assert!(cli.cli);
}

#[test]
fn test_parse_favorite_and_hide_toggles() {
    let cli = Cli::try_parse_from(["gamehub", "favorite", "Celeste", "--remove"]).unwrap();
    match cli.command {
        Some(Commands::Favorite { name, remove, .. }) => {
            assert_eq!(name, "Celeste");
            assert!(remove);
        }
        _ => panic!("Expected Favorite command"),
    }

    let cli = Cli::try_parse_from(["gamehub", "hide", "Celeste", "--restore"]).unwrap();
    match cli.command {
        Some(Commands::Hide { restore, .. }) => assert!(restore),
        _ => panic!("Expected Hide command"),
    }
}

#[test]
fn test_config_defaults_and_round_trip() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("config.toml");

    let config = AppConfig::load(&config_path).unwrap();
    assert_eq!(config.server_url, DEFAULT_SERVER_URL);

    let mut changed = config.clone();
    changed.server_url = "http://192.168.1.50:5000".to_string();
    changed.push.reconnect_seconds = 30;
    changed.save(&config_path).unwrap();

    let reloaded = AppConfig::load(&config_path).unwrap();
    assert_eq!(reloaded.server_url, "http://192.168.1.50:5000");
    assert_eq!(reloaded.push.reconnect_seconds, 30);
}

#[test]
fn test_config_rejects_malformed_file() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("config.toml");
    fs::write(&config_path, "server_url = [1, 2, 3]").unwrap();

    assert!(AppConfig::load(&config_path).is_err());
}

#[test]
fn test_snapshot_wire_format() {
    // Shape produced by GET /api/games, including legacy quirks: numeric
    // launch ids, null optionals and the MISSING artwork sentinel
    let payload = r#"[
        {
            "name": "Half-Life",
            "source": "Steam",
            "launch_id": 70,
            "install_path": "C:\\Steam\\steamapps\\common\\Half-Life",
            "executable_name": null,
            "favorite": false,
            "hidden": false,
            "last_played": null,
            "playtime_seconds": 0,
            "grid_image_url": "MISSING"
        },
        {
            "name": "Jedi: Fallen Order",
            "source": "EA",
            "launch_id": "Jedi",
            "favorite": true,
            "hidden": false,
            "playtime_seconds": 4200,
            "grid_image_url": "https://cdn.example/jedi.png"
        }
    ]"#;

    let games: Vec<GameEntry> = serde_json::from_str(payload).unwrap();
    assert_eq!(games.len(), 2);

    assert_eq!(games[0].source, Source::Steam);
    assert_eq!(games[0].launch_id.as_deref(), Some("70"));
    assert_eq!(games[0].grid_image(), None, "sentinel filtered out");

    assert_eq!(games[1].source, Source::Ea);
    assert_eq!(
        games[1].launch_command().as_deref(),
        Some("origin://launchgame/Jedi")
    );
    assert_eq!(
        games[1].grid_image(),
        Some("https://cdn.example/jedi.png")
    );
}
