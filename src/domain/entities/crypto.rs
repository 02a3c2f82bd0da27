//! Cryptocurrency entities reported by the tracker backend.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Backend identifier of a coin (e.g. `bitcoin`), trimmed and non-empty.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct CryptoId {
    value: String,
}

impl CryptoId {
    /// Creates id from raw user input.
    ///
    /// Returns `None` when the input is empty or whitespace only.
    #[must_use]
    pub fn new(value: impl AsRef<str>) -> Option<Self> {
        let value = value.as_ref().trim();

        if value.is_empty() {
            return None;
        }

        Some(Self {
            value: value.to_string(),
        })
    }

    /// Returns id as string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.value
    }

    /// Consumes id and returns inner string.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.value
    }
}

impl fmt::Debug for CryptoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("CryptoId").field(&self.value).finish()
    }
}

impl fmt::Display for CryptoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

/// Market summary of a single coin, as returned by the info endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CryptoSummary {
    /// Backend identifier.
    #[serde(default)]
    pub id: Option<String>,
    /// Display name (e.g. `Bitcoin`).
    pub name: String,
    /// Ticker symbol as reported (usually lowercase).
    pub symbol: String,
    /// Price in USD.
    pub price_usd: f64,
    /// Market capitalisation in USD.
    #[serde(default)]
    pub market_cap: Option<f64>,
    /// Trading volume over the last 24 hours in USD.
    #[serde(default)]
    pub volume_24h: Option<f64>,
    /// Price change over the last 24 hours, in percent.
    #[serde(default)]
    pub price_change_24h: Option<f64>,
    /// ISO 8601 timestamp of the last market update (UTC).
    #[serde(default)]
    pub last_updated: Option<String>,
    /// Whether the coin is already persisted by the backend.
    #[serde(default)]
    pub exists_in_db: bool,
}

impl CryptoSummary {
    /// Returns `NAME (SYMBOL)` heading.
    #[must_use]
    pub fn heading(&self) -> String {
        format!("{} ({})", self.name, self.symbol.to_uppercase())
    }
}

/// Entry of the persisted list. Every field may be missing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SavedCrypto {
    pub id: Option<String>,
    pub name: Option<String>,
    pub symbol: Option<String>,
    pub price_usd: Option<f64>,
    pub market_cap: Option<f64>,
    pub volume_24h: Option<f64>,
    pub price_change_24h: Option<f64>,
    pub last_updated: Option<String>,
}

impl SavedCrypto {
    /// Returns the backend id, if the entry carries a usable one.
    #[must_use]
    pub fn crypto_id(&self) -> Option<CryptoId> {
        self.id.as_deref().and_then(CryptoId::new)
    }
}
