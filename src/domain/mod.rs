//! Domain layer with core entities and port definitions.

/// Blocking alert definitions.
pub mod alert;
/// Entity definitions.
pub mod entities;
/// Error types.
pub mod errors;
/// Port definitions.
pub mod ports;

pub use alert::{Alert, AlertLevel};
pub use entities::{CryptoId, CryptoSummary, SavedCrypto};
pub use errors::ApiError;
pub use ports::CryptoApiPort;
