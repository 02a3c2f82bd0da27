//! Use case implementations.

mod load_saved_cryptos_use_case;
mod manage_crypto_use_case;
mod search_crypto_use_case;

pub use load_saved_cryptos_use_case::LoadSavedCryptosUseCase;
pub use manage_crypto_use_case::ManageCryptoUseCase;
pub use search_crypto_use_case::SearchCryptoUseCase;
