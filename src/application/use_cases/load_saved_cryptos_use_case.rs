//! Saved list use case implementation.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::domain::entities::SavedCrypto;
use crate::domain::errors::ApiError;
use crate::domain::ports::CryptoApiPort;

/// Fetches the persisted list fresh from the backend.
#[derive(Clone)]
pub struct LoadSavedCryptosUseCase {
    api: Arc<dyn CryptoApiPort>,
}

impl LoadSavedCryptosUseCase {
    /// Message used when loading fails without a usable `detail`.
    pub const FAILURE_FALLBACK: &'static str = "Failed to load saved cryptocurrencies";

    /// Creates new use case.
    #[must_use]
    pub const fn new(api: Arc<dyn CryptoApiPort>) -> Self {
        Self { api }
    }

    /// Loads the saved list.
    ///
    /// # Errors
    /// Returns the backend error when the list cannot be fetched.
    pub async fn execute(&self) -> Result<Vec<SavedCrypto>, ApiError> {
        match self.api.fetch_saved().await {
            Ok(saved) => {
                debug!(count = saved.len(), "Loaded saved cryptocurrencies");
                Ok(saved)
            }
            Err(e) => {
                warn!(error = %e, "Failed to load saved cryptocurrencies");
                Err(e)
            }
        }
    }
}
