//! Application layer with use cases, DTOs and the view controller.

/// Data transfer objects.
pub mod dto;
/// Controller-side services.
pub mod services;
/// Use case implementations.
pub mod use_cases;

pub use dto::{ControllerEvent, CryptoOperation, RequestId};
pub use services::{AlertManager, ViewController};
pub use use_cases::{LoadSavedCryptosUseCase, ManageCryptoUseCase, SearchCryptoUseCase};
