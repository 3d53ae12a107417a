//! GameHub Client - Game Library Launcher Frontend
//!
//! GameHub Client is a terminal frontend for a GameHub backend: it renders
//! the game library, reacts to push events (scan completion, file system
//! changes, per-game updates) and issues REST calls for actions such as
//! scanning, launching and flagging games.

pub mod cli;
pub mod client;
pub mod config;
pub mod errors;
pub mod library;
pub mod models;
pub mod utils;

// Re-export commonly used types
pub use errors::*;
pub use library::{LibraryFilter, LibraryView, ViewMode};
pub use models::*;

/// GameHub client version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// GameHub application name
pub const APP_NAME: &str = "gamehub";
