//! Domain entity definitions.

mod crypto;

pub use crypto::{CryptoId, CryptoSummary, SavedCrypto};
