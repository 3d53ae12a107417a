//! TUI rendering logic
//!
//! Pure presentation: reads the app state and the library view model, never
//! mutates either.

use chrono::{Local, TimeZone};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap},
};

use crate::cli::tui::main_app::App;
use crate::library::ViewMode;
use crate::models::game::GameEntry;
use crate::models::tui::source_color;
use crate::models::FocusedPane;

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // filter tabs + search
            Constraint::Min(0),    // library + details
            Constraint::Length(3), // status bar
        ])
        .split(f.area());

    render_filter_bar(f, app, main_chunks[0]);

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(main_chunks[1]);

    render_library_list(f, app, chunks[0]);
    render_detail_panel(f, app, chunks[1]);
    render_status_bar(f, app, main_chunks[2]);

    if app.show_help {
        render_help_overlay(f);
    }
}

fn render_filter_bar(f: &mut Frame, app: &App, area: Rect) {
    let mut spans: Vec<Span> = Vec::new();
    for filter in app.library.filter_menu() {
        let label = format!(" {} ", filter.label());
        if filter == app.library.active_filter() {
            spans.push(Span::styled(
                label,
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ));
        } else {
            spans.push(Span::raw(label));
        }
        spans.push(Span::raw("│"));
    }

    let search_display = if app.focused_pane == FocusedPane::SearchBar {
        format!("  🔍 {}▌", app.library.search_text())
    } else if !app.library.search_text().is_empty() {
        format!("  🔍 {}", app.library.search_text())
    } else {
        String::new()
    };
    if !search_display.is_empty() {
        spans.push(Span::styled(
            search_display,
            Style::default().fg(Color::Yellow),
        ));
    }

    let block = if app.focused_pane == FocusedPane::SearchBar {
        Block::default()
            .title("🎮 Game Hub")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
    } else {
        Block::default().title("🎮 Game Hub").borders(Borders::ALL)
    };

    f.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
}

fn render_library_list(f: &mut Frame, app: &App, area: Rect) {
    let visible = app.library.visible_entries();

    let items: Vec<ListItem> = visible
        .iter()
        .map(|game| match app.library.view_mode() {
            // Grid mode is the compact layout: name only, densely packed
            ViewMode::Grid => ListItem::new(Line::from(vec![
                Span::raw(if game.favorite { "★ " } else { "  " }),
                Span::raw(game.name.clone()),
            ])),
            ViewMode::List => ListItem::new(Line::from(vec![
                Span::styled(
                    if game.favorite { "★ " } else { "  " },
                    Style::default().fg(Color::Yellow),
                ),
                Span::raw(format!("{:<32}", truncated(&game.name, 30))),
                Span::styled(
                    format!("{:<12}", game.source.to_string()),
                    Style::default().fg(source_color(&game.source)),
                ),
                Span::styled(
                    game.playtime_display(),
                    Style::default().fg(Color::Gray),
                ),
            ])),
        })
        .collect();

    let title = format!(
        "Library ({}/{}){}",
        visible.len(),
        app.library.entries().len(),
        if app.refresh_in_progress {
            " 🔄"
        } else {
            ""
        }
    );

    let block = if app.focused_pane == FocusedPane::LibraryList {
        Block::default()
            .title(format!("{} [FOCUSED]", title))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
    } else {
        Block::default().title(title).borders(Borders::ALL)
    };

    if items.is_empty() {
        let message = if app.library.is_empty() {
            "Library is empty.\n\nPress 's' to scan for installed games."
        } else {
            "No games match the current filter or search."
        };
        f.render_widget(
            Paragraph::new(message)
                .block(block)
                .wrap(Wrap { trim: true }),
            area,
        );
        return;
    }

    let list = List::new(items).block(block).highlight_style(
        Style::default()
            .bg(Color::DarkGray)
            .add_modifier(Modifier::BOLD),
    );

    let mut state = ListState::default();
    state.select(app.library.selected_index());
    f.render_stateful_widget(list, area, &mut state);
}

fn render_detail_panel(f: &mut Frame, app: &App, area: Rect) {
    let block = if app.focused_pane == FocusedPane::DetailPanel {
        Block::default()
            .title("Details [FOCUSED]")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
    } else {
        Block::default().title("Details").borders(Borders::ALL)
    };

    let Some(game) = app.library.selected_entry() else {
        // Explicit no-selection state
        f.render_widget(
            Paragraph::new("No game selected.")
                .block(block)
                .wrap(Wrap { trim: true }),
            area,
        );
        return;
    };

    let mut lines = vec![
        Line::from(vec![
            Span::styled("Name: ", Style::default().add_modifier(Modifier::BOLD)),
            Span::raw(&game.name),
        ]),
        Line::from(vec![
            Span::styled("Source: ", Style::default().add_modifier(Modifier::BOLD)),
            Span::styled(
                game.source.to_string(),
                Style::default().fg(source_color(&game.source)),
            ),
        ]),
        Line::from(vec![
            Span::styled("Playtime: ", Style::default().add_modifier(Modifier::BOLD)),
            Span::raw(game.playtime_display()),
        ]),
        Line::from(vec![
            Span::styled(
                "Last played: ",
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::raw(last_played_display(game)),
        ]),
        Line::from(vec![
            Span::styled("Flags: ", Style::default().add_modifier(Modifier::BOLD)),
            Span::raw(format!(
                "{}{}",
                if game.favorite { "★ favorite " } else { "" },
                if game.hidden { "🙈 hidden" } else { "" }
            )),
        ]),
    ];

    if let Some(path) = &game.install_path {
        lines.push(Line::from(vec![
            Span::styled("Install: ", Style::default().add_modifier(Modifier::BOLD)),
            Span::raw(path.clone()),
        ]));
    }

    let artwork = game.artwork();
    if let Some(primary) = &artwork.primary {
        lines.push(Line::from(vec![
            Span::styled("Artwork: ", Style::default().add_modifier(Modifier::BOLD)),
            Span::styled(primary.clone(), Style::default().fg(Color::Gray)),
        ]));
    }

    lines.push(Line::from(""));
    match game.launch_command() {
        Some(command) => {
            lines.push(Line::from(vec![
                Span::styled("Launch: ", Style::default().add_modifier(Modifier::BOLD)),
                Span::styled(command, Style::default().fg(Color::Green)),
            ]));
            lines.push(Line::from(Span::styled(
                "Press Enter to launch",
                Style::default().fg(Color::Gray),
            )));
        }
        None => {
            lines.push(Line::from(Span::styled(
                "This game cannot be launched from Game Hub",
                Style::default().fg(Color::Red),
            )));
        }
    }

    f.render_widget(
        Paragraph::new(lines).block(block).wrap(Wrap { trim: true }),
        area,
    );
}

fn render_status_bar(f: &mut Frame, app: &App, area: Rect) {
    let line = Line::from(vec![
        Span::styled(
            format!("{} push", app.push_status.symbol()),
            Style::default().fg(app.push_status.color()),
        ),
        Span::raw(" │ "),
        Span::styled(
            format!("{} scan", app.scan_status.symbol()),
            Style::default().fg(app.scan_status.color()),
        ),
        Span::raw(" │ "),
        Span::raw(app.status_line.clone()),
    ]);

    let hints = "↑↓ select  ←→ filter  / search  Enter launch  f fav  x hide  r refresh  s scan  ? help  q quit";
    let block = Block::default()
        .title(hints)
        .borders(Borders::ALL);

    f.render_widget(Paragraph::new(line).block(block), area);
}

fn render_help_overlay(f: &mut Frame) {
    let area = centered_rect(60, 60, f.area());
    f.render_widget(Clear, area);

    let help_text = vec![
        Line::from(Span::styled(
            "Game Hub Keys",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from("  ↑/k, ↓/j     Select previous/next game"),
        Line::from("  ←/h, →/l     Cycle through filters"),
        Line::from("  /            Search (Esc/Enter to leave)"),
        Line::from("  Enter        Launch the selected game"),
        Line::from("  f            Toggle favorite"),
        Line::from("  x            Hide / restore the selected game"),
        Line::from("  g            Toggle grid/list density"),
        Line::from("  r            Refresh the library snapshot"),
        Line::from("  s            Ask the backend to rescan"),
        Line::from("  Tab          Switch pane focus"),
        Line::from("  q / Ctrl+C   Quit"),
    ];

    f.render_widget(
        Paragraph::new(help_text)
            .block(Block::default().title("Help").borders(Borders::ALL))
            .wrap(Wrap { trim: false }),
        area,
    );
}

fn last_played_display(game: &GameEntry) -> String {
    game.last_played
        .and_then(|epoch| Local.timestamp_opt(epoch as i64, 0).single())
        .map(|ts| ts.format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_else(|| "never".to_string())
}

fn truncated(name: &str, max: usize) -> String {
    if name.chars().count() <= max {
        name.to_string()
    } else {
        let cut: String = name.chars().take(max.saturating_sub(1)).collect();
        format!("{}…", cut)
    }
}

/// Centered popup rectangle as a percentage of the terminal area
fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
