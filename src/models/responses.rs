//! API request and response models for the GameHub backend

use serde::{Deserialize, Serialize};

use super::game::{GamePatch, Source};

/// Generic status envelope returned by the action endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusResponse {
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl StatusResponse {
    pub fn is_success(&self) -> bool {
        self.status == "success"
    }
}

/// Body of `POST /api/update_game`
#[derive(Debug, Clone, Serialize)]
pub struct UpdateGameRequest {
    pub name: String,
    pub source: Source,
    pub update_data: GamePatch,
}

/// Body of `POST /api/launch`
#[derive(Debug, Clone, Serialize)]
pub struct LaunchRequest {
    pub command: String,
    pub source: Source,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub install_path: Option<String>,
}

/// Backend-side settings round-tripped through `/api/settings`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LibrarySettings {
    #[serde(default)]
    pub steamgriddb_api_key: Option<String>,
    #[serde(default)]
    pub scan_paths: Vec<String>,
}
