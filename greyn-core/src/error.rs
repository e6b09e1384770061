//! Error types shared across the core crate.
use thiserror::Error;

/// Failures raised by a key-value store backend.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("storage is unavailable")]
    Unavailable,
    #[error("storage backend error: {0}")]
    Backend(String),
    #[error("storage quota exceeded")]
    QuotaExceeded,
}

/// Failures raised while writing the cart.
///
/// Reads never fail: a corrupt or missing cart decodes as empty.
#[derive(Debug, Error)]
pub enum CartError {
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error("cart encoding failed: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Rejected review transitions.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReviewError {
    #[error("no review item with id {id}")]
    NotFound { id: String },
    #[error("item {id} is already {status}")]
    AlreadyResolved { id: String, status: String },
}

/// Failures raised while decoding seed assets.
#[derive(Debug, Error)]
pub enum SeedError {
    #[error("unknown seed: {0}")]
    Unknown(String),
    #[error("seed parsing error: {0}")]
    Json(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offending_item() {
        let err = ReviewError::AlreadyResolved {
            id: "2".into(),
            status: "verified".into(),
        };
        assert_eq!(err.to_string(), "item 2 is already verified");
        assert_eq!(
            ReviewError::NotFound { id: "9".into() }.to_string(),
            "no review item with id 9"
        );
    }

    #[test]
    fn cart_error_wraps_store_error() {
        let err: CartError = StoreError::QuotaExceeded.into();
        assert_eq!(err.to_string(), "storage quota exceeded");
    }
}
