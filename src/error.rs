// ⚠️ Error Kinds - the only two ways a receipt request can fail
// Messages are part of the public contract and must not change.

use thiserror::Error;

pub const INVALID_RECEIPT_MESSAGE: &str = "The receipt is invalid. Please verify input.";
pub const NOT_FOUND_MESSAGE: &str = "No receipt found for that ID.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ReceiptError {
    /// Any structural or pattern violation in a submitted receipt.
    /// Deliberately carries no field information.
    #[error("{}", INVALID_RECEIPT_MESSAGE)]
    InvalidReceipt,

    /// Lookup of an identifier that was never issued by this process.
    #[error("{}", NOT_FOUND_MESSAGE)]
    NotFound,
}

pub type ReceiptResult<T> = Result<T, ReceiptError>;

// ============================================================================
// HTTP MAPPING
// ============================================================================

#[cfg(feature = "server")]
mod http {
    use super::ReceiptError;
    use axum::{
        http::StatusCode,
        response::{IntoResponse, Response},
        Json,
    };
    use serde::Serialize;

    #[derive(Serialize)]
    struct ErrorResponse {
        detail: String,
    }

    impl ReceiptError {
        pub fn status_code(&self) -> StatusCode {
            match self {
                ReceiptError::InvalidReceipt => StatusCode::BAD_REQUEST,
                ReceiptError::NotFound => StatusCode::NOT_FOUND,
            }
        }
    }

    impl IntoResponse for ReceiptError {
        fn into_response(self) -> Response {
            let body = Json(ErrorResponse {
                detail: self.to_string(),
            });

            (self.status_code(), body).into_response()
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
