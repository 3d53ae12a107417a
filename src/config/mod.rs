//! Configuration management for the GameHub client

pub mod app_config;

pub use app_config::*;
