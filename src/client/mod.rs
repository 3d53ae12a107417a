//! GameHub backend API client
//!
//! The backend owns the library database, the disk scanner and the process
//! launcher; this client only issues the REST contracts and never interprets
//! their side effects (scan completion arrives later via the push channel).

pub mod push;

use async_trait::async_trait;
use log::debug;
use reqwest::Client;

use crate::errors::{GameHubError, Result};
use crate::models::game::{GameEntry, GameKey, GamePatch};
use crate::models::responses::{LaunchRequest, LibrarySettings, StatusResponse, UpdateGameRequest};

/// Abstract backend contract. The TUI talks to the backend exclusively
/// through this trait so tests can substitute an in-memory fake.
#[async_trait]
pub trait LibraryBackend: Send + Sync {
    /// Full library snapshot
    async fn fetch_all_games(&self) -> Result<Vec<GameEntry>>;
    /// Fire-and-forget rescan request; completion is signaled via push
    async fn trigger_scan(&self) -> Result<()>;
    /// Persist a partial update; the caller also applies it locally
    async fn update_game_fields(&self, key: &GameKey, patch: &GamePatch) -> Result<()>;
    /// Fire-and-forget launch request
    async fn launch_game(&self, request: &LaunchRequest) -> Result<()>;
    async fn fetch_settings(&self) -> Result<LibrarySettings>;
    async fn save_settings(&self, settings: &LibrarySettings) -> Result<()>;
}

/// HTTP client for a GameHub backend
pub struct HubClient {
    base_url: String,
    http: Client,
}

impl HubClient {
    pub fn new(server_url: &str) -> Self {
        Self {
            base_url: server_url.trim_end_matches('/').to_string(),
            http: Client::new(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// WebSocket endpoint for the push channel, derived from the base URL
    pub fn websocket_url(&self) -> String {
        let ws_base = self
            .base_url
            .replace("https://", "wss://")
            .replace("http://", "ws://");
        format!("{}/ws", ws_base)
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn expect_success(&self, response: reqwest::Response) -> Result<()> {
        let status: StatusResponse = response.error_for_status()?.json().await?;
        if !status.is_success() {
            return Err(GameHubError::Api(
                status.message.unwrap_or(status.status),
            ));
        }
        Ok(())
    }
}

#[async_trait]
impl LibraryBackend for HubClient {
    async fn fetch_all_games(&self) -> Result<Vec<GameEntry>> {
        let response = self
            .http
            .get(self.endpoint("/api/games"))
            .send()
            .await?
            .error_for_status()?;
        let games: Vec<GameEntry> = response.json().await?;
        debug!("Fetched {} games from backend", games.len());
        Ok(games)
    }

    async fn trigger_scan(&self) -> Result<()> {
        let response = self
            .http
            .post(self.endpoint("/api/refresh"))
            .json(&serde_json::json!({}))
            .send()
            .await?;
        self.expect_success(response).await
    }

    async fn update_game_fields(&self, key: &GameKey, patch: &GamePatch) -> Result<()> {
        let request = UpdateGameRequest {
            name: key.name.clone(),
            source: key.source.clone(),
            update_data: patch.clone(),
        };
        let response = self
            .http
            .post(self.endpoint("/api/update_game"))
            .json(&request)
            .send()
            .await?;
        self.expect_success(response).await
    }

    async fn launch_game(&self, request: &LaunchRequest) -> Result<()> {
        let response = self
            .http
            .post(self.endpoint("/api/launch"))
            .json(request)
            .send()
            .await?;
        self.expect_success(response).await
    }

    async fn fetch_settings(&self) -> Result<LibrarySettings> {
        let response = self
            .http
            .get(self.endpoint("/api/settings"))
            .send()
            .await?
            .error_for_status()?;
        Ok(response.json().await?)
    }

    async fn save_settings(&self, settings: &LibrarySettings) -> Result<()> {
        let response = self
            .http
            .post(self.endpoint("/api/settings"))
            .json(settings)
            .send()
            .await?;
        self.expect_success(response).await
    }
}
