//! Custom error types for the GameHub client

use std::fmt;

/// Main error type for GameHub client operations
#[derive(Debug)]
pub enum GameHubError {
    /// Configuration related errors
    Config(String),
    /// Backend request rejected or returned a non-success status; the UI
    /// keeps its prior state and the user may retry manually
    Api(String),
    /// Push channel connection/stream errors
    Push(String),
    /// An action was invoked with no entry selected; callers no-op silently
    MissingSelection,
    /// No launch command can be built for the entry's source; must be
    /// surfaced to the user instead of issuing an empty command
    Launch(String),
    /// General I/O errors
    Io(std::io::Error),
    /// Serialization errors
    Serialization(String),
}

impl fmt::Display for GameHubError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameHubError::Config(msg) => write!(f, "Configuration error: {}", msg),
            GameHubError::Api(msg) => write!(f, "Backend request failed: {}", msg),
            GameHubError::Push(msg) => write!(f, "Push channel error: {}", msg),
            GameHubError::MissingSelection => write!(f, "No game selected"),
            GameHubError::Launch(msg) => write!(f, "Cannot launch: {}", msg),
            GameHubError::Io(err) => write!(f, "I/O error: {}", err),
            GameHubError::Serialization(msg) => write!(f, "Serialization error: {}", msg),
        }
    }
}

impl std::error::Error for GameHubError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GameHubError::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for GameHubError {
    fn from(err: std::io::Error) -> Self {
        GameHubError::Io(err)
    }
}

impl From<reqwest::Error> for GameHubError {
    fn from(err: reqwest::Error) -> Self {
        GameHubError::Api(err.to_string())
    }
}

impl From<serde_json::Error> for GameHubError {
    fn from(err: serde_json::Error) -> Self {
        GameHubError::Serialization(err.to_string())
    }
}

impl From<toml::de::Error> for GameHubError {
    fn from(err: toml::de::Error) -> Self {
        GameHubError::Config(err.to_string())
    }
}

/// Result type alias for GameHub client operations
pub type Result<T> = std::result::Result<T, GameHubError>;
