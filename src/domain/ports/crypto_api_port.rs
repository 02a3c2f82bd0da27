//! Tracker backend port definition.

use async_trait::async_trait;

use crate::domain::entities::{CryptoId, CryptoSummary, SavedCrypto};
use crate::domain::errors::ApiError;

/// Port for the cryptocurrency tracker REST backend.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CryptoApiPort: Send + Sync {
    /// Fetches live market info for a coin, flagged with whether it is saved.
    async fn fetch_info(&self, crypto_id: &CryptoId) -> Result<CryptoSummary, ApiError>;

    /// Fetches the persisted list.
    async fn fetch_saved(&self) -> Result<Vec<SavedCrypto>, ApiError>;

    /// Persists a coin.
    async fn save(&self, crypto_id: &CryptoId) -> Result<(), ApiError>;

    /// Refreshes a persisted coin with current market data.
    async fn update(&self, crypto_id: &CryptoId) -> Result<(), ApiError>;

    /// Removes a persisted coin.
    async fn delete(&self, crypto_id: &CryptoId) -> Result<(), ApiError>;
}
