//! Infrastructure layer with external service adapters.

/// Tracker backend REST client.
pub mod backend;
/// Application configuration.
pub mod config;

pub use backend::BackendClient;
pub use config::{AppConfig, CliArgs, LogLevel, StorageManager};
