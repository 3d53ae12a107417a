//! Library view model
//!
//! Owns the in-memory list of game entries plus the filter/search/selection
//! state, and reconciles it against two stimuli: full snapshots fetched from
//! the backend and partial updates pushed for a single entry. The rendering
//! layer only reads from this model; it never mutates it directly.

use log::debug;

use crate::models::game::{GameEntry, GameKey, GamePatch, Source};

/// Category filter shown in the sidebar menu
#[derive(Debug, Clone, PartialEq)]
pub enum LibraryFilter {
    All,
    Favorites,
    Hidden,
    Source(Source),
}

impl LibraryFilter {
    pub fn label(&self) -> String {
        match self {
            LibraryFilter::All => "All Games".to_string(),
            LibraryFilter::Favorites => "Favorites".to_string(),
            LibraryFilter::Hidden => "Hidden".to_string(),
            LibraryFilter::Source(source) => source.to_string(),
        }
    }

    /// Whether an entry belongs under this category. Hidden entries only ever
    /// appear under the Hidden filter.
    fn admits(&self, entry: &GameEntry) -> bool {
        match self {
            LibraryFilter::All => !entry.hidden,
            LibraryFilter::Favorites => entry.favorite && !entry.hidden,
            LibraryFilter::Hidden => entry.hidden,
            LibraryFilter::Source(source) => entry.source == *source && !entry.hidden,
        }
    }
}

/// How the visible set is laid out by the rendering layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewMode {
    Grid,
    List,
}

impl ViewMode {
    pub fn toggled(self) -> Self {
        match self {
            ViewMode::Grid => ViewMode::List,
            ViewMode::List => ViewMode::Grid,
        }
    }
}

/// The library view model.
///
/// This is a derived, disposable cache of backend state: snapshots replace the
/// entry list wholesale, pushes patch single entries in place, and nothing
/// here is persisted. Identity is the (name, source) pair.
pub struct LibraryView {
    entries: Vec<GameEntry>,
    selected: Option<GameKey>,
    active_filter: LibraryFilter,
    filter_menu: Vec<LibraryFilter>,
    search_text: String,
    view_mode: ViewMode,
}

impl Default for LibraryView {
    fn default() -> Self {
        Self::new()
    }
}

impl LibraryView {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            selected: None,
            active_filter: LibraryFilter::All,
            filter_menu: vec![
                LibraryFilter::All,
                LibraryFilter::Favorites,
                LibraryFilter::Hidden,
            ],
            search_text: String::new(),
            view_mode: ViewMode::Grid,
        }
    }

    /// Install a fresh snapshot, discarding all prior entries.
    ///
    /// Rebuilds the filter menu from the distinct sources (first-seen order,
    /// between the fixed All/Favorites head and the Hidden tail), keeps the
    /// active filter if it still exists in the new menu, and re-runs
    /// selection preservation. An empty snapshot is valid and yields the
    /// empty-state view.
    pub fn replace_all(&mut self, new_entries: Vec<GameEntry>) {
        self.entries = new_entries;
        self.rebuild_filter_menu();
        if !self.filter_menu.contains(&self.active_filter) {
            self.active_filter = LibraryFilter::All;
        }
        self.preserve_selection();
    }

    /// Merge a partial update into the entry identified by `key`.
    ///
    /// Unknown keys are dropped without inserting anything: a patch can race
    /// ahead of the snapshot that introduces its entry, and the next snapshot
    /// re-syncs regardless. Returns whether an entry was patched.
    pub fn apply_partial_update(&mut self, key: &GameKey, patch: &GamePatch) -> bool {
        let Some(entry) = self
            .entries
            .iter_mut()
            .find(|entry| entry.name == key.name && entry.source == key.source)
        else {
            debug!("Dropping partial update for unknown entry: {}", key);
            return false;
        };

        patch.apply_to(entry);
        self.preserve_selection();
        true
    }

    /// Entries surviving category filter + search, in display order.
    ///
    /// Pure function of (entries, active filter, search text): same state
    /// always yields the same ordered output. Sorting is case-insensitive
    /// lexicographic on the name (Unicode lowercase fold).
    pub fn visible_entries(&self) -> Vec<&GameEntry> {
        let needle = self.search_text.to_lowercase();
        let mut visible: Vec<&GameEntry> = self
            .entries
            .iter()
            .filter(|entry| self.active_filter.admits(entry))
            .filter(|entry| needle.is_empty() || entry.name.to_lowercase().contains(&needle))
            .collect();
        visible.sort_by_cached_key(|entry| (entry.name.to_lowercase(), entry.name.clone()));
        visible
    }

    /// The selected entry, re-derived from the live list so the detail panel
    /// always reflects the latest patch, never a stale clone.
    pub fn selected_entry(&self) -> Option<&GameEntry> {
        let key = self.selected.as_ref()?;
        self.entries
            .iter()
            .find(|entry| entry.name == key.name && entry.source == key.source)
    }

    pub fn selected_key(&self) -> Option<&GameKey> {
        self.selected.as_ref()
    }

    /// Select a specific visible entry (e.g. from a list click). Selecting an
    /// entry outside the visible set is ignored.
    pub fn select(&mut self, key: GameKey) {
        if self
            .visible_entries()
            .iter()
            .any(|entry| entry.name == key.name && entry.source == key.source)
        {
            self.selected = Some(key);
        }
    }

    pub fn select_next(&mut self) {
        self.move_selection(1);
    }

    pub fn select_previous(&mut self) {
        self.move_selection(-1);
    }

    fn move_selection(&mut self, delta: isize) {
        let next_key = {
            let visible = self.visible_entries();
            if visible.is_empty() {
                None
            } else {
                let current = self.selected_index().unwrap_or(0) as isize;
                let len = visible.len() as isize;
                let next = (current + delta).rem_euclid(len) as usize;
                Some(visible[next].key())
            }
        };
        self.selected = next_key;
    }

    /// Index of the selected entry within the visible set, for list state
    pub fn selected_index(&self) -> Option<usize> {
        let key = self.selected.as_ref()?;
        self.visible_entries()
            .iter()
            .position(|entry| entry.name == key.name && entry.source == key.source)
    }

    pub fn active_filter(&self) -> &LibraryFilter {
        &self.active_filter
    }

    pub fn filter_menu(&self) -> &[LibraryFilter] {
        &self.filter_menu
    }

    pub fn set_filter(&mut self, filter: LibraryFilter) {
        if self.filter_menu.contains(&filter) {
            self.active_filter = filter;
            self.preserve_selection();
        }
    }

    /// Step through the filter menu, wrapping at both ends.
    pub fn cycle_filter(&mut self, delta: isize) {
        let current = self
            .filter_menu
            .iter()
            .position(|filter| *filter == self.active_filter)
            .unwrap_or(0) as isize;
        let len = self.filter_menu.len() as isize;
        let next = (current + delta).rem_euclid(len) as usize;
        self.active_filter = self.filter_menu[next].clone();
        self.preserve_selection();
    }

    pub fn search_text(&self) -> &str {
        &self.search_text
    }

    pub fn set_search_text(&mut self, text: String) {
        self.search_text = text;
        self.preserve_selection();
    }

    pub fn push_search_char(&mut self, c: char) {
        self.search_text.push(c);
        self.preserve_selection();
    }

    pub fn pop_search_char(&mut self) {
        self.search_text.pop();
        self.preserve_selection();
    }

    pub fn view_mode(&self) -> ViewMode {
        self.view_mode
    }

    pub fn toggle_view_mode(&mut self) {
        self.view_mode = self.view_mode.toggled();
    }

    pub fn set_view_mode(&mut self, mode: ViewMode) {
        self.view_mode = mode;
    }

    pub fn entries(&self) -> &[GameEntry] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// `[All, Favorites, <sources first-seen>, Hidden]`
    fn rebuild_filter_menu(&mut self) {
        let mut menu = vec![LibraryFilter::All, LibraryFilter::Favorites];
        for entry in &self.entries {
            let filter = LibraryFilter::Source(entry.source.clone());
            if !menu.contains(&filter) {
                menu.push(filter);
            }
        }
        menu.push(LibraryFilter::Hidden);
        self.filter_menu = menu;
    }

    /// Keep the selection if it survived the latest change to the visible
    /// set; otherwise fall back to the first visible entry, or clear when
    /// nothing is visible.
    fn preserve_selection(&mut self) {
        let replacement = {
            let visible = self.visible_entries();
            let still_visible = self.selected.as_ref().is_some_and(|key| {
                visible
                    .iter()
                    .any(|entry| entry.name == key.name && entry.source == key.source)
            });
            if still_visible {
                return;
            }
            visible.first().map(|entry| entry.key())
        };
        self.selected = replacement;
    }
}
