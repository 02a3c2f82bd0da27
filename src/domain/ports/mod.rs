mod crypto_api_port;

pub use crypto_api_port::CryptoApiPort;
