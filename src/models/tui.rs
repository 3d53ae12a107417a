//! TUI-specific data models

use ratatui::style::Color;

use super::game::Source;

/// Which pane is currently focused in the TUI
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FocusedPane {
    LibraryList,
    DetailPanel,
    SearchBar,
}

/// Backend scan progress with visual indicators
#[derive(Debug, Clone, PartialEq)]
pub enum ScanStatus {
    Idle,
    Scanning,
    Failed(String),
}

impl ScanStatus {
    pub fn color(&self) -> Color {
        match self {
            ScanStatus::Idle => Color::Gray,
            ScanStatus::Scanning => Color::Yellow,
            ScanStatus::Failed(_) => Color::Red,
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            ScanStatus::Idle => "✅",
            ScanStatus::Scanning => "🔄",
            ScanStatus::Failed(_) => "❌",
        }
    }
}

/// Push channel connectivity shown in the status bar
#[derive(Debug, Clone, PartialEq)]
pub enum PushStatus {
    Connecting,
    Connected,
    Disconnected(String),
}

impl PushStatus {
    pub fn color(&self) -> Color {
        match self {
            PushStatus::Connecting => Color::Yellow,
            PushStatus::Connected => Color::Green,
            PushStatus::Disconnected(_) => Color::Red,
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            PushStatus::Connecting => "🔗",
            PushStatus::Connected => "✅",
            PushStatus::Disconnected(_) => "⚫",
        }
    }
}

/// Accent color per launcher platform for the list view
pub fn source_color(source: &Source) -> Color {
    match source {
        Source::Steam => Color::Blue,
        Source::EpicGames => Color::Magenta,
        Source::Ea => Color::Red,
        Source::Other => Color::Green,
        Source::Unknown(_) => Color::Gray,
    }
}
