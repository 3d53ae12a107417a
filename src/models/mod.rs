//! Data models and types used throughout the GameHub client

pub mod events;
pub mod game;
pub mod responses;
pub mod tui;

// Re-export commonly used types
pub use events::*;
pub use game::*;
pub use responses::*;

// Only export TUI-specific types that don't conflict
pub use tui::{FocusedPane, PushStatus, ScanStatus};
