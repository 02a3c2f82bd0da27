//! Save/update/delete use case implementation.

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::application::dto::CryptoOperation;
use crate::domain::errors::ApiError;
use crate::domain::ports::CryptoApiPort;

/// Runs mutating operations against the saved list.
#[derive(Clone)]
pub struct ManageCryptoUseCase {
    api: Arc<dyn CryptoApiPort>,
}

impl ManageCryptoUseCase {
    /// Creates new use case.
    #[must_use]
    pub const fn new(api: Arc<dyn CryptoApiPort>) -> Self {
        Self { api }
    }

    /// Executes one operation.
    ///
    /// # Errors
    /// Returns the backend error if the operation is refused or fails.
    pub async fn execute(&self, operation: &CryptoOperation) -> Result<(), ApiError> {
        debug!(operation = %operation, "Submitting operation");

        let result = match operation {
            CryptoOperation::Save(id) => self.api.save(id).await,
            CryptoOperation::Update(id) => self.api.update(id).await,
            CryptoOperation::Delete(id) => self.api.delete(id).await,
        };

        match &result {
            Ok(()) => info!(operation = %operation, "Operation succeeded"),
            Err(e) => warn!(operation = %operation, error = %e, "Operation failed"),
        }

        result
    }
}
