//! Unit tests for TUI functionality

use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::mpsc;

use super::main_app::App;
use crate::client::LibraryBackend;
use crate::config::AppConfig;
use crate::errors::{GameHubError, Result};
use crate::library::LibraryFilter;
use crate::models::game::{GameEntry, GameKey, GamePatch, Source};
use crate::models::responses::{LaunchRequest, LibrarySettings};
use crate::models::{AppEvent, PushStatus, ScanStatus};

/// In-memory backend capturing every call the app makes
#[derive(Default)]
struct MockBackend {
    games: Mutex<Vec<GameEntry>>,
    updates: Mutex<Vec<(GameKey, GamePatch)>>,
    launches: Mutex<Vec<LaunchRequest>>,
    scans: Mutex<usize>,
    fail_requests: bool,
}

#[async_trait]
impl LibraryBackend for MockBackend {
    async fn fetch_all_games(&self) -> Result<Vec<GameEntry>> {
        if self.fail_requests {
            return Err(GameHubError::Api("connection refused".to_string()));
        }
        Ok(self.games.lock().unwrap().clone())
    }

    async fn trigger_scan(&self) -> Result<()> {
        *self.scans.lock().unwrap() += 1;
        Ok(())
    }

    async fn update_game_fields(&self, key: &GameKey, patch: &GamePatch) -> Result<()> {
        self.updates
            .lock()
            .unwrap()
            .push((key.clone(), patch.clone()));
        Ok(())
    }

    async fn launch_game(&self, request: &LaunchRequest) -> Result<()> {
        self.launches.lock().unwrap().push(request.clone());
        Ok(())
    }

    async fn fetch_settings(&self) -> Result<LibrarySettings> {
        Ok(LibrarySettings::default())
    }

    async fn save_settings(&self, _settings: &LibrarySettings) -> Result<()> {
        Ok(())
    }
}

fn entry(name: &str, source: Source) -> GameEntry {
    GameEntry {
        name: name.to_string(),
        source,
        launch_id: Some("42".to_string()),
        install_path: None,
        executable_name: None,
        favorite: false,
        hidden: false,
        last_played: None,
        playtime_seconds: 0,
        grid_image_url: None,
    }
}

fn new_app(backend: Arc<MockBackend>) -> App {
    App::new(&AppConfig::default(), backend)
}

/// Let spawned backend tasks run on the current-thread test runtime
async fn settle() {
    tokio::time::sleep(Duration::from_millis(20)).await;
}

#[tokio::test]
async fn test_snapshot_loaded_populates_library() {
    let backend = Arc::new(MockBackend::default());
    let mut app = new_app(backend);
    let (tx, _rx) = mpsc::unbounded_channel();

    app.handle_event(
        AppEvent::SnapshotLoaded(vec![
            entry("Zelda", Source::Other),
            entry("Apex", Source::Ea),
        ]),
        tx,
    );

    assert_eq!(app.library.entries().len(), 2);
    assert!(!app.refresh_in_progress);
    // First entry in sorted order is selected
    assert_eq!(app.library.selected_entry().unwrap().name, "Apex");
}

#[tokio::test]
async fn test_snapshot_failure_keeps_prior_state() {
    let backend = Arc::new(MockBackend::default());
    let mut app = new_app(backend);
    let (tx, _rx) = mpsc::unbounded_channel();

    app.handle_event(
        AppEvent::SnapshotLoaded(vec![entry("Apex", Source::Ea)]),
        tx.clone(),
    );
    app.handle_event(AppEvent::SnapshotFailed("timeout".to_string()), tx);

    assert_eq!(app.library.entries().len(), 1, "prior snapshot is kept");
    assert!(app.status_line.contains("timeout"));
}

#[tokio::test]
async fn test_pushed_update_patches_entry_and_detail() {
    let backend = Arc::new(MockBackend::default());
    let mut app = new_app(backend);
    let (tx, _rx) = mpsc::unbounded_channel();

    app.handle_event(
        AppEvent::SnapshotLoaded(vec![entry("Apex", Source::Ea)]),
        tx.clone(),
    );

    let mut updated = entry("Apex", Source::Ea);
    updated.favorite = true;
    updated.playtime_seconds = 3600;
    app.handle_event(AppEvent::GameUpdated(updated), tx);

    let selected = app.library.selected_entry().unwrap();
    assert!(selected.favorite);
    assert_eq!(selected.playtime_seconds, 3600);
}

#[tokio::test]
async fn test_pushed_update_for_unknown_entry_is_dropped() {
    let backend = Arc::new(MockBackend::default());
    let mut app = new_app(backend);
    let (tx, _rx) = mpsc::unbounded_channel();

    app.handle_event(
        AppEvent::SnapshotLoaded(vec![entry("Apex", Source::Ea)]),
        tx.clone(),
    );
    app.handle_event(AppEvent::GameUpdated(entry("Portal", Source::Steam)), tx);

    assert_eq!(app.library.entries().len(), 1, "no entry inserted by a push");
}

#[tokio::test]
async fn test_update_racing_ahead_of_snapshot_applies_after_it() {
    // The patch for an entry only introduced by a pending snapshot is dropped,
    // then the same push after the snapshot lands takes effect.
    let backend = Arc::new(MockBackend::default());
    let mut app = new_app(backend);
    let (tx, _rx) = mpsc::unbounded_channel();

    let mut patched = entry("Portal", Source::Steam);
    patched.favorite = true;

    app.handle_event(AppEvent::GameUpdated(patched.clone()), tx.clone());
    assert!(app.library.is_empty());

    app.handle_event(
        AppEvent::SnapshotLoaded(vec![entry("Portal", Source::Steam)]),
        tx.clone(),
    );
    app.handle_event(AppEvent::GameUpdated(patched), tx);

    assert!(app.library.selected_entry().unwrap().favorite);
}

#[tokio::test]
async fn test_scan_finished_triggers_refresh() {
    let backend = Arc::new(MockBackend::default());
    backend
        .games
        .lock()
        .unwrap()
        .push(entry("Celeste", Source::EpicGames));

    let mut app = new_app(backend);
    let (tx, mut rx) = mpsc::unbounded_channel();

    app.handle_event(AppEvent::ScanFinished, tx.clone());
    assert_eq!(app.scan_status, ScanStatus::Idle);
    assert!(app.refresh_in_progress);

    settle().await;
    match rx.recv().await {
        Some(AppEvent::SnapshotLoaded(games)) => assert_eq!(games.len(), 1),
        other => panic!("Expected SnapshotLoaded, got: {:?}", other),
    }
}

#[tokio::test]
async fn test_file_system_change_triggers_scan() {
    let backend = Arc::new(MockBackend::default());
    let mut app = new_app(backend.clone());
    let (tx, _rx) = mpsc::unbounded_channel();

    app.handle_event(AppEvent::LibraryChanged, tx);
    assert_eq!(app.scan_status, ScanStatus::Scanning);

    settle().await;
    assert_eq!(*backend.scans.lock().unwrap(), 1);
}

#[tokio::test]
async fn test_launch_with_no_selection_is_silent_noop() {
    let backend = Arc::new(MockBackend::default());
    let mut app = new_app(backend.clone());
    let (tx, mut rx) = mpsc::unbounded_channel();

    app.launch_selected(tx);
    settle().await;

    assert!(backend.launches.lock().unwrap().is_empty());
    assert!(rx.try_recv().is_err(), "no error surfaced for a missing selection");
}

#[tokio::test]
async fn test_launch_unknown_source_surfaces_error() {
    let backend = Arc::new(MockBackend::default());
    let mut app = new_app(backend.clone());
    let (tx, mut rx) = mpsc::unbounded_channel();

    app.handle_event(
        AppEvent::SnapshotLoaded(vec![entry(
            "Overwatch",
            Source::Unknown("Battle.net".to_string()),
        )]),
        tx.clone(),
    );
    app.launch_selected(tx);
    settle().await;

    assert!(backend.launches.lock().unwrap().is_empty());
    match rx.try_recv() {
        Ok(AppEvent::Error(message)) => assert!(message.contains("Overwatch")),
        other => panic!("Expected a user-visible error, got: {:?}", other),
    }
}

#[tokio::test]
async fn test_launch_selected_sends_resolved_command() {
    let backend = Arc::new(MockBackend::default());
    let mut app = new_app(backend.clone());
    let (tx, _rx) = mpsc::unbounded_channel();

    app.handle_event(
        AppEvent::SnapshotLoaded(vec![entry("Apex", Source::Ea)]),
        tx.clone(),
    );
    app.launch_selected(tx);
    settle().await;

    let launches = backend.launches.lock().unwrap();
    assert_eq!(launches.len(), 1);
    assert_eq!(launches[0].command, "origin://launchgame/42");
}

#[tokio::test]
async fn test_toggle_favorite_is_optimistic_and_persisted() {
    let backend = Arc::new(MockBackend::default());
    let mut app = new_app(backend.clone());
    let (tx, _rx) = mpsc::unbounded_channel();

    app.handle_event(
        AppEvent::SnapshotLoaded(vec![entry("Apex", Source::Ea)]),
        tx.clone(),
    );
    app.toggle_favorite_selected(tx);

    // Local state flips immediately, before the backend confirms
    assert!(app.library.selected_entry().unwrap().favorite);

    settle().await;
    let updates = backend.updates.lock().unwrap();
    assert_eq!(updates.len(), 1);
    assert_eq!(updates[0].0.name, "Apex");
    assert_eq!(updates[0].1.favorite, Some(true));
}

#[tokio::test]
async fn test_hidden_toggle_moves_selection_out_of_view() {
    let backend = Arc::new(MockBackend::default());
    let mut app = new_app(backend.clone());
    let (tx, _rx) = mpsc::unbounded_channel();

    app.handle_event(
        AppEvent::SnapshotLoaded(vec![
            entry("Apex", Source::Ea),
            entry("Zelda", Source::Other),
        ]),
        tx.clone(),
    );
    app.toggle_hidden_selected(tx);

    // Hidden entries leave the All view, so selection falls to the next one
    assert_eq!(app.library.selected_entry().unwrap().name, "Zelda");

    app.library.set_filter(LibraryFilter::Hidden);
    assert_eq!(app.library.selected_entry().unwrap().name, "Apex");
}

#[tokio::test]
async fn test_push_status_transitions() {
    let backend = Arc::new(MockBackend::default());
    let mut app = new_app(backend);
    let (tx, _rx) = mpsc::unbounded_channel();

    assert_eq!(app.push_status, PushStatus::Connecting);

    app.handle_event(AppEvent::PushConnected, tx.clone());
    assert_eq!(app.push_status, PushStatus::Connected);

    app.handle_event(AppEvent::PushDisconnected("closed".to_string()), tx);
    assert_eq!(
        app.push_status,
        PushStatus::Disconnected("closed".to_string())
    );
}
