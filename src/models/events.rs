//! Application events for TUI and CLI operations

use serde::Deserialize;

use crate::models::game::GameEntry;
use crate::models::responses::LibrarySettings;

/// Application events for communication between components.
///
/// All state mutation happens on the event-loop task that drains these, in
/// arrival order. A `SnapshotLoaded` is a full replacement; a `GameUpdated`
/// that was queued behind it still patches the fresh snapshot.
#[derive(Debug)]
pub enum AppEvent {
    // Library sync events
    SnapshotLoaded(Vec<GameEntry>), // full refresh response landed
    SnapshotFailed(String),         // fetch rejected; keep prior state
    GameUpdated(GameEntry),         // push: single entry changed

    // Scan events
    ScanTriggered,  // backend accepted a refresh request
    ScanFinished,   // push: scan completed, snapshot is stale
    LibraryChanged, // push: game files changed on disk

    // Push channel events
    PushConnected,
    PushDisconnected(String),

    // Settings events
    SettingsLoaded(LibrarySettings),
    SettingsSaved,

    // General events
    Tick,

    // User feedback events for TUI
    Error(String),
    Warning(String),
    Info(String),
}

/// Out-of-band notification pushed by the backend over the WebSocket.
///
/// Wire format is a JSON envelope `{"event": "...", "data": ...}`.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "event", content = "data", rename_all = "snake_case")]
pub enum PushEvent {
    /// A watched game file changed on disk; the client should ask for a rescan
    LibraryUpdated(serde_json::Value),
    /// A background scan finished; the client should fetch a fresh snapshot
    ScanComplete(serde_json::Value),
    /// A single entry's fields changed; payload is the full entry
    GameUpdated(GameEntry),
}
