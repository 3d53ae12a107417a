//! Main TUI application state and logic

use std::sync::Arc;

use log::debug;
use tokio::sync::mpsc::UnboundedSender;

use crate::client::LibraryBackend;
use crate::config::AppConfig;
use crate::library::{LibraryView, ViewMode};
use crate::models::game::GamePatch;
use crate::models::responses::{LaunchRequest, LibrarySettings};
use crate::models::{AppEvent, FocusedPane, PushStatus, ScanStatus};

pub struct App {
    /// The library view model; all entry/filter/selection state lives here
    pub library: LibraryView,
    pub focused_pane: FocusedPane,
    pub scan_status: ScanStatus,
    pub push_status: PushStatus,
    pub refresh_in_progress: bool,
    pub show_help: bool,
    pub status_line: String,
    pub settings: Option<LibrarySettings>,
    pub server_url: String,
    backend: Arc<dyn LibraryBackend>,
}

impl App {
    pub fn new(config: &AppConfig, backend: Arc<dyn LibraryBackend>) -> Self {
        let mut library = LibraryView::new();
        library.set_view_mode(if config.ui.grid_view {
            ViewMode::Grid
        } else {
            ViewMode::List
        });

        Self {
            library,
            focused_pane: FocusedPane::LibraryList,
            scan_status: ScanStatus::Idle,
            push_status: PushStatus::Connecting,
            refresh_in_progress: false,
            show_help: false,
            status_line: "Connecting to backend...".to_string(),
            settings: None,
            server_url: config.server_url.clone(),
            backend,
        }
    }

    /// Request a fresh snapshot. Overlapping refreshes are fine: responses are
    /// applied in arrival order and the last one wins.
    pub fn start_refresh(&mut self, tx: UnboundedSender<AppEvent>) {
        self.refresh_in_progress = true;
        let backend = self.backend.clone();
        tokio::spawn(async move {
            match backend.fetch_all_games().await {
                Ok(games) => {
                    let _ = tx.send(AppEvent::SnapshotLoaded(games));
                }
                Err(e) => {
                    let _ = tx.send(AppEvent::SnapshotFailed(e.to_string()));
                }
            }
        });
    }

    /// Fire-and-forget rescan request; completion arrives as a push event.
    pub fn start_scan(&mut self, tx: UnboundedSender<AppEvent>) {
        self.scan_status = ScanStatus::Scanning;
        let backend = self.backend.clone();
        tokio::spawn(async move {
            match backend.trigger_scan().await {
                Ok(()) => {
                    let _ = tx.send(AppEvent::ScanTriggered);
                }
                Err(e) => {
                    let _ = tx.send(AppEvent::Error(format!("Scan request failed: {}", e)));
                }
            }
        });
    }

    pub fn load_settings(&self, tx: UnboundedSender<AppEvent>) {
        let backend = self.backend.clone();
        tokio::spawn(async move {
            match backend.fetch_settings().await {
                Ok(settings) => {
                    let _ = tx.send(AppEvent::SettingsLoaded(settings));
                }
                Err(e) => {
                    debug!("Settings fetch failed: {}", e);
                }
            }
        });
    }

    /// Apply one event to the model. This is the only place state mutates, so
    /// events take effect exactly in the order they arrived on the channel.
    pub fn handle_event(&mut self, event: AppEvent, tx: UnboundedSender<AppEvent>) {
        match event {
            AppEvent::SnapshotLoaded(games) => {
                self.refresh_in_progress = false;
                let count = games.len();
                self.library.replace_all(games);
                self.status_line = format!("Library refreshed: {} game(s)", count);
            }
            AppEvent::SnapshotFailed(error) => {
                // Keep the prior list; the user can retry with 'r'
                self.refresh_in_progress = false;
                self.status_line = format!("Refresh failed: {} (press 'r' to retry)", error);
            }
            AppEvent::GameUpdated(entry) => {
                let key = entry.key();
                let patch = GamePatch::from_entry(&entry);
                if !self.library.apply_partial_update(&key, &patch) {
                    // Entry not in the current snapshot; the next refresh or
                    // push re-syncs, so dropping is fine
                    debug!("Push update for unknown entry: {}", key);
                }
            }
            AppEvent::ScanTriggered => {
                self.scan_status = ScanStatus::Scanning;
                self.status_line = "Backend scan in progress...".to_string();
            }
            AppEvent::ScanFinished => {
                self.scan_status = ScanStatus::Idle;
                self.start_refresh(tx);
            }
            AppEvent::LibraryChanged => {
                // Game files changed on disk; ask the backend to rescan
                self.start_scan(tx);
            }
            AppEvent::PushConnected => {
                self.push_status = PushStatus::Connected;
            }
            AppEvent::PushDisconnected(reason) => {
                self.push_status = PushStatus::Disconnected(reason);
            }
            AppEvent::SettingsLoaded(settings) => {
                self.settings = Some(settings);
            }
            AppEvent::SettingsSaved => {
                self.status_line = "Settings saved".to_string();
            }
            AppEvent::Error(message) => {
                self.status_line = format!("❌ {}", message);
            }
            AppEvent::Warning(message) => {
                self.status_line = format!("⚠️  {}", message);
            }
            AppEvent::Info(message) => {
                self.status_line = message;
            }
            AppEvent::Tick => {}
        }
    }

    /// Launch the currently selected game. No selection is a silent no-op; an
    /// unresolvable launch command becomes a user-visible error.
    pub fn launch_selected(&mut self, tx: UnboundedSender<AppEvent>) {
        let Some(game) = self.library.selected_entry() else {
            debug!("Launch requested with no selection");
            return;
        };

        let Some(command) = game.launch_command() else {
            let _ = tx.send(AppEvent::Error(format!(
                "'{}' ({}) cannot be launched from here",
                game.name, game.source
            )));
            return;
        };

        let request = LaunchRequest {
            command,
            source: game.source.clone(),
            name: game.name.clone(),
            install_path: game.install_path.clone(),
        };
        self.status_line = format!("🚀 Launching {}...", game.name);

        let backend = self.backend.clone();
        tokio::spawn(async move {
            match backend.launch_game(&request).await {
                Ok(()) => {
                    let _ = tx.send(AppEvent::Info(format!("Launched {}", request.name)));
                }
                Err(e) => {
                    let _ = tx.send(AppEvent::Error(format!(
                        "Launch of {} failed: {}",
                        request.name, e
                    )));
                }
            }
        });
    }

    pub fn toggle_favorite_selected(&mut self, tx: UnboundedSender<AppEvent>) {
        let Some(game) = self.library.selected_entry() else {
            return;
        };
        let key = game.key();
        let patch = GamePatch::favorite(!game.favorite);
        self.persist_patch(key, patch, tx);
    }

    pub fn toggle_hidden_selected(&mut self, tx: UnboundedSender<AppEvent>) {
        let Some(game) = self.library.selected_entry() else {
            return;
        };
        let key = game.key();
        let patch = GamePatch::hidden(!game.hidden);
        self.persist_patch(key, patch, tx);
    }

    /// Apply a patch optimistically and persist it. On failure the local
    /// state is already ahead of the backend; the next snapshot re-syncs it.
    fn persist_patch(
        &mut self,
        key: crate::models::game::GameKey,
        patch: GamePatch,
        tx: UnboundedSender<AppEvent>,
    ) {
        self.library.apply_partial_update(&key, &patch);

        let backend = self.backend.clone();
        tokio::spawn(async move {
            if let Err(e) = backend.update_game_fields(&key, &patch).await {
                let _ = tx.send(AppEvent::Warning(format!(
                    "Could not save change for {}: {}",
                    key, e
                )));
            }
        });
    }

    pub fn toggle_focused_pane(&mut self) {
        self.focused_pane = match self.focused_pane {
            FocusedPane::LibraryList => FocusedPane::DetailPanel,
            FocusedPane::DetailPanel => FocusedPane::LibraryList,
            FocusedPane::SearchBar => FocusedPane::LibraryList,
        };
    }

    pub fn focus_search(&mut self) {
        self.focused_pane = FocusedPane::SearchBar;
    }

    pub fn leave_search(&mut self) {
        self.focused_pane = FocusedPane::LibraryList;
    }
}
