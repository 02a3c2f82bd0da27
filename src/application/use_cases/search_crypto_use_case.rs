//! Search use case implementation.

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::domain::entities::{CryptoId, CryptoSummary};
use crate::domain::errors::ApiError;
use crate::domain::ports::CryptoApiPort;

/// Looks up live market data for a single coin.
#[derive(Clone)]
pub struct SearchCryptoUseCase {
    api: Arc<dyn CryptoApiPort>,
}

impl SearchCryptoUseCase {
    /// Alert text for blank search input.
    pub const EMPTY_INPUT_MESSAGE: &'static str = "Please enter cryptocurrency ID";

    /// Message used when a failed lookup carries no usable `detail`.
    pub const FAILURE_FALLBACK: &'static str = "Error occurred while fetching data";

    /// Creates new search use case.
    #[must_use]
    pub const fn new(api: Arc<dyn CryptoApiPort>) -> Self {
        Self { api }
    }

    /// Validates raw search input.
    ///
    /// # Errors
    /// Returns [`ApiError::Validation`] when the input is blank.
    pub fn parse_input(raw: &str) -> Result<CryptoId, ApiError> {
        CryptoId::new(raw).ok_or_else(|| {
            debug!("Rejected blank search input");
            ApiError::validation(Self::EMPTY_INPUT_MESSAGE)
        })
    }

    /// Validates the input and fetches the coin's summary.
    ///
    /// # Errors
    /// Returns a validation error for blank input without contacting the
    /// backend, or the backend error otherwise.
    pub async fn execute(&self, raw: &str) -> Result<CryptoSummary, ApiError> {
        let crypto_id = Self::parse_input(raw)?;

        debug!(crypto_id = %crypto_id, "Fetching cryptocurrency info");

        let summary = self.api.fetch_info(&crypto_id).await.map_err(|e| {
            warn!(crypto_id = %crypto_id, error = %e, "Cryptocurrency lookup failed");
            e
        })?;

        info!(
            crypto_id = %crypto_id,
            symbol = %summary.symbol,
            exists_in_db = summary.exists_in_db,
            "Cryptocurrency info received"
        );

        Ok(summary)
    }
}
