//! Command line argument parsing

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(name = "gamehub")]
#[command(about = "🎮 Game Hub Client - browse, filter and launch your game library!")]
pub struct Cli {
    /// GameHub backend URL (overrides the config file)
    #[arg(
        long,
        help = "GameHub backend URL (default: http://127.0.0.1:5000)"
    )]
    pub server_url: Option<String>,

    /// Path to the client configuration file
    #[arg(long, value_name = "CONFIG_FILE")]
    pub config: Option<PathBuf>,

    /// Run in CLI mode without TUI - for automation and scripting
    #[arg(long, help = "Run in CLI mode without interactive TUI")]
    pub cli: bool,

    /// Increase logging verbosity (-v for debug, -vv for trace)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Decrease logging verbosity (only errors)
    #[arg(short = 'q', long = "quiet")]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Clone)]
pub enum Commands {
    /// List library entries (default CLI behavior)
    List {
        /// Only list favorites
        #[arg(long)]
        favorites: bool,
        /// List hidden entries instead of the main views
        #[arg(long)]
        hidden: bool,
        /// Filter by source name (e.g. "Steam", "Epic Games")
        #[arg(short, long)]
        source: Option<String>,
        /// Case-insensitive substring filter on the game name
        #[arg(long)]
        search: Option<String>,
    },
    /// Ask the backend to rescan launcher manifests (completion arrives via push)
    Scan,
    /// Launch a game by name
    Launch {
        /// Game name as shown in the library
        name: String,
        /// Source to disambiguate entries sharing a name
        #[arg(short, long)]
        source: Option<String>,
    },
    /// Mark or unmark a game as favorite
    Favorite {
        /// Game name as shown in the library
        name: String,
        /// Source to disambiguate entries sharing a name
        #[arg(short, long)]
        source: Option<String>,
        /// Remove the favorite flag instead of setting it
        #[arg(long)]
        remove: bool,
    },
    /// Hide a game from the main views, or restore it
    Hide {
        /// Game name as shown in the library
        name: String,
        /// Source to disambiguate entries sharing a name
        #[arg(short, long)]
        source: Option<String>,
        /// Restore a previously hidden game
        #[arg(long)]
        restore: bool,
    },
    /// Show or update backend settings
    Settings {
        /// Set the SteamGridDB API key used for cover downloads
        #[arg(long)]
        steamgriddb_api_key: Option<String>,
        /// Add an extra directory for the scanner to search
        #[arg(long, value_name = "DIR")]
        add_scan_path: Option<String>,
    },
}

impl Cli {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
