//! Mutating operations on the saved list.

use std::fmt;

use crate::domain::entities::CryptoId;

/// Save, update or delete request for one coin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CryptoOperation {
    /// Persist a coin that is not saved yet.
    Save(CryptoId),
    /// Refresh a saved coin with current market data.
    Update(CryptoId),
    /// Remove a saved coin.
    Delete(CryptoId),
}

impl CryptoOperation {
    /// Returns the coin the operation targets.
    #[must_use]
    pub const fn crypto_id(&self) -> &CryptoId {
        match self {
            Self::Save(id) | Self::Update(id) | Self::Delete(id) => id,
        }
    }

    /// Returns the HTTP method used by the backend for this operation.
    #[must_use]
    pub const fn method(&self) -> &'static str {
        match self {
            Self::Save(_) => "POST",
            Self::Update(_) => "PUT",
            Self::Delete(_) => "DELETE",
        }
    }

    #[must_use]
    pub const fn success_message(&self) -> &'static str {
        match self {
            Self::Save(_) => "Cryptocurrency successfully saved!",
            Self::Update(_) => "Cryptocurrency successfully updated!",
            Self::Delete(_) => "Cryptocurrency successfully deleted!",
        }
    }

    /// Message used when the backend gives no usable `detail`.
    #[must_use]
    pub fn failure_fallback(&self) -> String {
        format!("Error during {} operation", self.method())
    }

    /// Progress label for the status bar.
    #[must_use]
    pub const fn progress_label(&self) -> &'static str {
        match self {
            Self::Save(_) => "Saving",
            Self::Update(_) => "Updating",
            Self::Delete(_) => "Deleting",
        }
    }
}

impl fmt::Display for CryptoOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.method(), self.crypto_id())
    }
}
