//! Wire types of the tracker backend.

use serde::Deserialize;
use serde_json::Value;

/// Error body returned on non-success statuses.
///
/// `detail` is usually a string but validation failures send an array.
#[derive(Debug, Deserialize)]
pub struct ErrorResponse {
    #[serde(default)]
    pub detail: Option<Value>,
}

impl ErrorResponse {
    /// Returns the detail text if the backend sent a non-empty string.
    pub fn into_detail(self) -> Option<String> {
        match self.detail {
            Some(Value::String(detail)) if !detail.trim().is_empty() => Some(detail),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_string_detail_is_kept() {
        let body: ErrorResponse =
            serde_json::from_str(r#"{"detail": "Cryptocurrency doge not found"}"#).unwrap();
        assert_eq!(
            body.into_detail().as_deref(),
            Some("Cryptocurrency doge not found")
        );
    }

    #[test]
    fn test_non_string_detail_is_dropped() {
        let body: ErrorResponse = serde_json::from_str(
            r#"{"detail": [{"loc": ["query", "crypto_id"], "msg": "field required"}]}"#,
        )
        .unwrap();
        assert_eq!(body.into_detail(), None);

        let body: ErrorResponse = serde_json::from_str("{}").unwrap();
        assert_eq!(body.into_detail(), None);
    }
}
