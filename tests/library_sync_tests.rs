//! Integration tests for library/state synchronization
//!
//! Exercises the view model the way the event loop drives it: full snapshots
//! from the request/response channel interleaved with partial updates from
//! the push channel, applied strictly in arrival order.

use gamehub::library::{LibraryFilter, LibraryView};
use gamehub::models::game::{GameEntry, GameKey, GamePatch, Source};

fn entry(name: &str, source: Source) -> GameEntry {
    GameEntry {
        name: name.to_string(),
        source,
        launch_id: Some("100".to_string()),
        install_path: None,
        executable_name: None,
        favorite: false,
        hidden: false,
        last_played: None,
        playtime_seconds: 0,
        grid_image_url: None,
    }
}

fn key(name: &str, source: Source) -> GameKey {
    GameKey {
        name: name.to_string(),
        source,
    }
}

fn visible_names(view: &LibraryView) -> Vec<String> {
    view.visible_entries()
        .iter()
        .map(|e| e.name.clone())
        .collect()
}

#[test]
fn test_full_session_scenario() {
    // Start with an empty library, as on first launch before any scan
    let mut view = LibraryView::new();
    assert!(view.visible_entries().is_empty());
    assert!(view.selected_entry().is_none());

    // Snapshot lands
    view.replace_all(vec![
        entry("Zelda", Source::Other),
        entry("Apex", Source::Ea),
        entry("Cuphead", Source::Steam),
    ]);
    assert_eq!(visible_names(&view), vec!["Apex", "Cuphead", "Zelda"]);
    assert_eq!(view.selected_entry().unwrap().name, "Apex");

    // The user favorites Cuphead (optimistic local patch)
    view.apply_partial_update(&key("Cuphead", Source::Steam), &GamePatch::favorite(true));

    // Switching to Favorites narrows the view and moves the selection
    view.set_filter(LibraryFilter::Favorites);
    assert_eq!(visible_names(&view), vec!["Cuphead"]);
    assert_eq!(view.selected_entry().unwrap().name, "Cuphead");
}

#[test]
fn test_patch_racing_ahead_of_snapshot() {
    let mut view = LibraryView::new();
    view.replace_all(vec![entry("Apex", Source::Ea)]);

    // A push about a game the current snapshot does not know yet: dropped,
    // nothing inserted (the pending snapshot will carry the entry anyway)
    let applied = view.apply_partial_update(
        &key("Portal", Source::Steam),
        &GamePatch::favorite(true),
    );
    assert!(!applied);
    assert_eq!(view.entries().len(), 1);

    // The delayed snapshot lands, then the same logical patch re-arrives
    view.replace_all(vec![entry("Apex", Source::Ea), entry("Portal", Source::Steam)]);
    let applied = view.apply_partial_update(
        &key("Portal", Source::Steam),
        &GamePatch::favorite(true),
    );
    assert!(applied);

    view.set_filter(LibraryFilter::Favorites);
    assert_eq!(visible_names(&view), vec!["Portal"]);
}

#[test]
fn test_snapshot_resets_stale_local_state() {
    // Optimistic local changes that never reached the backend are overwritten
    // by the next authoritative snapshot
    let mut view = LibraryView::new();
    view.replace_all(vec![entry("Apex", Source::Ea)]);
    view.apply_partial_update(&key("Apex", Source::Ea), &GamePatch::favorite(true));
    assert!(view.entries()[0].favorite);

    view.replace_all(vec![entry("Apex", Source::Ea)]);
    assert!(!view.entries()[0].favorite, "backend state wins on refresh");
}

#[test]
fn test_snapshot_keeps_filter_and_search_context() {
    let mut view = LibraryView::new();
    view.replace_all(vec![
        entry("Apex", Source::Ea),
        entry("Anthem", Source::Ea),
        entry("Zelda", Source::Other),
    ]);
    view.set_filter(LibraryFilter::Source(Source::Ea));
    view.set_search_text("an".to_string());
    assert_eq!(visible_names(&view), vec!["Anthem"]);

    // A new snapshot with the same sources keeps both filter and search
    view.replace_all(vec![
        entry("Anthem", Source::Ea),
        entry("Antichamber", Source::Other),
    ]);
    assert_eq!(view.active_filter(), &LibraryFilter::Source(Source::Ea));
    assert_eq!(view.search_text(), "an");
    assert_eq!(visible_names(&view), vec!["Anthem"]);
}

#[test]
fn test_identity_is_name_and_source_pair() {
    // The same title from two launchers is two distinct entries
    let mut view = LibraryView::new();
    view.replace_all(vec![
        entry("Rocket League", Source::Steam),
        entry("Rocket League", Source::EpicGames),
    ]);
    assert_eq!(view.entries().len(), 2);

    view.apply_partial_update(
        &key("Rocket League", Source::Steam),
        &GamePatch::hidden(true),
    );

    let remaining = view.visible_entries();
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].source, Source::EpicGames);
}

#[test]
fn test_patch_never_changes_identity_or_order() {
    let mut view = LibraryView::new();
    view.replace_all(vec![
        entry("Apex", Source::Ea),
        entry("Zelda", Source::Other),
    ]);

    let mut patch = GamePatch::favorite(true);
    patch.playtime_seconds = Some(500);
    view.apply_partial_update(&key("Zelda", Source::Other), &patch);

    assert_eq!(visible_names(&view), vec!["Apex", "Zelda"]);
    let zelda = &view.entries()[1];
    assert_eq!(zelda.name, "Zelda");
    assert_eq!(zelda.source, Source::Other);
    assert_eq!(zelda.playtime_seconds, 500);
}

#[test]
fn test_filter_menu_tracks_snapshot_sources() {
    let mut view = LibraryView::new();
    view.replace_all(vec![
        entry("A", Source::Steam),
        entry("B", Source::Unknown("GOG".to_string())),
    ]);

    let labels: Vec<String> = view
        .filter_menu()
        .iter()
        .map(|filter| filter.label())
        .collect();
    assert_eq!(
        labels,
        vec!["All Games", "Favorites", "Steam", "GOG", "Hidden"]
    );
}
