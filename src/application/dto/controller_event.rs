//! Events reported by the view controller to the UI task.

use crate::application::dto::CryptoOperation;
use crate::domain::entities::{CryptoId, CryptoSummary, SavedCrypto};
use crate::domain::errors::ApiError;

/// Monotonic tag of a search or saved-list request.
pub type RequestId = u64;

/// Outcome of a controller step, applied to view state in arrival order.
#[derive(Debug, Clone)]
#[allow(missing_docs)]
pub enum ControllerEvent {
    SearchStarted {
        request: RequestId,
        crypto_id: CryptoId,
    },
    SearchFinished {
        request: RequestId,
        crypto_id: CryptoId,
        result: Result<CryptoSummary, ApiError>,
    },
    SavedListStarted {
        request: RequestId,
    },
    SavedListLoaded {
        request: RequestId,
        result: Result<Vec<SavedCrypto>, ApiError>,
    },
    /// The backend answered a save/update/delete.
    OperationFinished {
        operation: CryptoOperation,
        result: Result<(), ApiError>,
    },
    /// All follow-up steps of an operation are done.
    OperationSettled { operation: CryptoOperation },
}
