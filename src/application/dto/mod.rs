//! Data transfer objects for the application layer.

mod controller_event;
mod crypto_operation;

pub use controller_event::{ControllerEvent, RequestId};
pub use crypto_operation::CryptoOperation;
