//! TUI event loop and handling

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::{io, time::Duration};
use tokio::sync::mpsc;

use crate::cli::tui::main_app::App;
use crate::cli::tui::ui::ui;
use crate::client::push::run_push_listener;
use crate::models::{AppEvent, FocusedPane};

/// Run the main TUI event loop
pub async fn run_tui_event_loop(mut app: App, ws_url: String, reconnect_seconds: u64) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create event channel
    let (tx, mut rx) = mpsc::unbounded_channel();

    // Spawn tick generator
    let tx_tick = tx.clone();
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(Duration::from_millis(250));
        loop {
            interval.tick().await;
            if tx_tick.send(AppEvent::Tick).is_err() {
                break;
            }
        }
    });

    // Spawn the push channel listener
    tokio::spawn(run_push_listener(ws_url, reconnect_seconds, tx.clone()));

    // Initial library snapshot and settings
    app.start_refresh(tx.clone());
    app.load_settings(tx.clone());

    // Main loop
    let result = loop {
        terminal.draw(|f| ui(f, &app))?;

        tokio::select! {
            // Handle crossterm events
            _ = tokio::task::spawn_blocking(|| event::poll(Duration::from_millis(50))) => {
                if event::poll(Duration::from_millis(0))? {
                    if let Event::Key(key) = event::read()? {
                        if key.kind == KeyEventKind::Press {
                            // Search bar grabs every printable key while focused
                            if app.focused_pane == FocusedPane::SearchBar {
                                match key.code {
                                    KeyCode::Esc | KeyCode::Enter => app.leave_search(),
                                    KeyCode::Backspace => app.library.pop_search_char(),
                                    KeyCode::Char(c) => app.library.push_search_char(c),
                                    _ => {}
                                }
                                continue;
                            }

                            if app.show_help {
                                match key.code {
                                    KeyCode::Char('q') | KeyCode::Esc | KeyCode::Char('?') => {
                                        app.show_help = false;
                                    }
                                    _ => {}
                                }
                                continue;
                            }

                            match key.code {
                                KeyCode::Char('q') => break Ok(()),
                                KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                                    break Ok(());
                                }
                                KeyCode::Esc => {
                                    if !app.library.search_text().is_empty() {
                                        app.library.set_search_text(String::new());
                                    } else {
                                        break Ok(());
                                    }
                                }
                                KeyCode::Tab => app.toggle_focused_pane(),
                                KeyCode::Char('?') => app.show_help = true,
                                KeyCode::Char('/') => app.focus_search(),
                                KeyCode::Up | KeyCode::Char('k') => app.library.select_previous(),
                                KeyCode::Down | KeyCode::Char('j') => app.library.select_next(),
                                KeyCode::Left | KeyCode::Char('h') => app.library.cycle_filter(-1),
                                KeyCode::Right | KeyCode::Char('l') => app.library.cycle_filter(1),
                                KeyCode::Enter => app.launch_selected(tx.clone()),
                                KeyCode::Char('f') => app.toggle_favorite_selected(tx.clone()),
                                KeyCode::Char('x') => app.toggle_hidden_selected(tx.clone()),
                                KeyCode::Char('g') => app.library.toggle_view_mode(),
                                KeyCode::Char('r') => app.start_refresh(tx.clone()),
                                KeyCode::Char('s') => app.start_scan(tx.clone()),
                                _ => {}
                            }
                        }
                    }
                }
            }

            // Handle app events
            Some(event) = rx.recv() => {
                app.handle_event(event, tx.clone());
            }
        }
    };

    // Cleanup
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}
