//! Game library data models

use serde::{Deserialize, Deserializer, Serialize};

/// Sentinel stored by the backend when a cover lookup came back empty
pub const MISSING_ARTWORK: &str = "MISSING";

/// Steam CDN base for hero/header artwork derived from an app id
const STEAM_CDN_BASE: &str = "https://steamcdn-a.akamaihd.net/steam/apps";

/// Launcher platform a game was registered from.
///
/// The wire format uses the backend's human-readable names ("Steam",
/// "Epic Games", "EA", "Other Games"). Values the client does not know
/// are preserved verbatim so a newer backend never breaks the list view.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Source {
    Steam,
    EpicGames,
    Ea,
    Other,
    Unknown(String),
}

impl Source {
    pub fn as_str(&self) -> &str {
        match self {
            Source::Steam => "Steam",
            Source::EpicGames => "Epic Games",
            Source::Ea => "EA",
            Source::Other => "Other Games",
            Source::Unknown(name) => name,
        }
    }
}

impl From<String> for Source {
    fn from(value: String) -> Self {
        match value.as_str() {
            "Steam" => Source::Steam,
            "Epic Games" => Source::EpicGames,
            "EA" => Source::Ea,
            "Other Games" => Source::Other,
            _ => Source::Unknown(value),
        }
    }
}

impl From<Source> for String {
    fn from(value: Source) -> Self {
        value.as_str().to_string()
    }
}

impl std::fmt::Display for Source {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Identity of a library entry. The backend has no global id; a game is
/// addressed by its (name, source) pair everywhere.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GameKey {
    pub name: String,
    pub source: Source,
}

impl std::fmt::Display for GameKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name, self.source)
    }
}

/// One installed/registered game as reported by the backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameEntry {
    pub name: String,
    pub source: Source,
    #[serde(default, deserialize_with = "deserialize_launch_id")]
    pub launch_id: Option<String>,
    #[serde(default)]
    pub install_path: Option<String>,
    #[serde(default)]
    pub executable_name: Option<String>,
    #[serde(default)]
    pub favorite: bool,
    #[serde(default)]
    pub hidden: bool,
    /// Epoch seconds of the last launch, if any
    #[serde(default)]
    pub last_played: Option<f64>,
    #[serde(default)]
    pub playtime_seconds: u64,
    #[serde(default)]
    pub grid_image_url: Option<String>,
}

/// Steam app ids arrive as numbers from manifest scans and as strings once
/// they have round-tripped through the database, so accept both.
fn deserialize_launch_id<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(serde_json::Value::String(s)) if !s.is_empty() && s != "None" => Some(s),
        Some(serde_json::Value::Number(n)) => Some(n.to_string()),
        _ => None,
    })
}

/// Primary/backup artwork URL pair for an entry.
///
/// The rendering layer tries `primary` first and swaps to `backup` when the
/// primary fails to load; if both fail (or neither exists) it shows a
/// placeholder. Resolving the pair involves no network I/O.
#[derive(Debug, Clone, PartialEq)]
pub struct ArtworkCandidates {
    pub primary: Option<String>,
    pub backup: Option<String>,
}

impl ArtworkCandidates {
    /// Next URL to try after `failed_url` did not load, if any.
    pub fn fallback_for(&self, failed_url: &str) -> Option<&str> {
        self.backup
            .as_deref()
            .filter(|backup| *backup != failed_url)
    }
}

impl GameEntry {
    pub fn key(&self) -> GameKey {
        GameKey {
            name: self.name.clone(),
            source: self.source.clone(),
        }
    }

    /// Grid image URL with the empty-string and "MISSING" sentinels filtered out.
    pub fn grid_image(&self) -> Option<&str> {
        self.grid_image_url
            .as_deref()
            .filter(|url| !url.is_empty() && *url != MISSING_ARTWORK)
    }

    /// Platform launch command, or `None` for sources the client cannot
    /// launch. Callers must surface a user-visible failure on `None` rather
    /// than sending an empty command to the backend.
    pub fn launch_command(&self) -> Option<String> {
        match &self.source {
            Source::Steam => self
                .launch_id
                .as_ref()
                .map(|id| format!("steam://run/{}", id)),
            Source::EpicGames => self.launch_id.as_ref().map(|id| {
                format!(
                    "com.epicgames.launcher://apps/{}?action=launch&silent=true",
                    id
                )
            }),
            Source::Ea => self
                .launch_id
                .as_ref()
                .map(|id| format!("origin://launchgame/{}", id)),
            Source::Other => self.install_path.clone(),
            Source::Unknown(_) => None,
        }
    }

    /// Artwork URLs for this entry. Steam entries get a CDN header image
    /// derived from the app id with the scraped grid image as backup; every
    /// other source only has whatever the backend scraped.
    pub fn artwork(&self) -> ArtworkCandidates {
        match &self.source {
            Source::Steam => ArtworkCandidates {
                primary: self
                    .launch_id
                    .as_ref()
                    .map(|id| format!("{}/{}/header.jpg", STEAM_CDN_BASE, id)),
                backup: self.grid_image().map(str::to_string),
            },
            _ => ArtworkCandidates {
                primary: self.grid_image().map(str::to_string),
                backup: None,
            },
        }
    }

    /// Playtime as "3h 21m" / "21m" for the detail panel.
    pub fn playtime_display(&self) -> String {
        let minutes = self.playtime_seconds / 60;
        if minutes >= 60 {
            format!("{}h {}m", minutes / 60, minutes % 60)
        } else {
            format!("{}m", minutes)
        }
    }
}

/// Partial update to a single entry's mutable fields.
///
/// Identity fields (name, source) are deliberately absent; a patch can only
/// amend an entry that already exists.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GamePatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub favorite: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hidden: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_played: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub playtime_seconds: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grid_image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub install_path: Option<String>,
}

impl GamePatch {
    pub fn favorite(value: bool) -> Self {
        Self {
            favorite: Some(value),
            ..Self::default()
        }
    }

    pub fn hidden(value: bool) -> Self {
        Self {
            hidden: Some(value),
            ..Self::default()
        }
    }

    /// Patch covering every mutable field of a pushed full entry.
    pub fn from_entry(entry: &GameEntry) -> Self {
        Self {
            favorite: Some(entry.favorite),
            hidden: Some(entry.hidden),
            last_played: entry.last_played,
            playtime_seconds: Some(entry.playtime_seconds),
            grid_image_url: entry.grid_image_url.clone(),
            install_path: entry.install_path.clone(),
        }
    }

    /// Merge the set fields into `entry`, leaving identity untouched.
    pub fn apply_to(&self, entry: &mut GameEntry) {
        if let Some(favorite) = self.favorite {
            entry.favorite = favorite;
        }
        if let Some(hidden) = self.hidden {
            entry.hidden = hidden;
        }
        if let Some(last_played) = self.last_played {
            entry.last_played = Some(last_played);
        }
        if let Some(playtime) = self.playtime_seconds {
            entry.playtime_seconds = playtime;
        }
        if let Some(url) = &self.grid_image_url {
            entry.grid_image_url = Some(url.clone());
        }
        if let Some(path) = &self.install_path {
            entry.install_path = Some(path.clone());
        }
    }
}
