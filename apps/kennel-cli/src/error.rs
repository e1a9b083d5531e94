//! # API Error Type
//!
//! What a caller sees when a command fails.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in kennel-cli                             │
//! │                                                                         │
//! │  ValidationError ──┐                                                    │
//! │  CheckInFailure  ──┼──► CoreError ──► ApiError { code, message }        │
//! │  UndoFailure     ──┘                      │                             │
//! │                                           ▼                             │
//! │                          Response { status: code.http_status(), .. }    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use kennel_core::{CheckInFailure, CoreError, UndoFailure};
use serde::Serialize;

/// API error attached to a failed command.
///
/// ## Serialization
/// ```json
/// {
///   "code": "NO_CAPACITY",
///   "message": "Sorry, we have no more spots available."
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    /// Machine-readable error code for programmatic handling
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,
}

/// Error codes for command responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Input validation failed, or the stay could not be priced (400)
    ValidationError,

    /// Pet or booking not found (404)
    NotFound,

    /// Every space for the species is taken (409)
    NoCapacity,

    /// Nothing waiting in the intake queue (409)
    QueueEmpty,

    /// Undo log exhausted (409)
    NothingToUndo,

    /// Internal error (500)
    Internal,
}

impl ErrorCode {
    /// HTTP-style status for the response envelope.
    pub const fn http_status(&self) -> u16 {
        match self {
            ErrorCode::ValidationError => 400,
            ErrorCode::NotFound => 404,
            ErrorCode::NoCapacity
            | ErrorCode::QueueEmpty
            | ErrorCode::NothingToUndo => 409,
            ErrorCode::Internal => 500,
        }
    }
}

impl ApiError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::Internal, message)
    }
}

impl From<CheckInFailure> for ApiError {
    fn from(err: CheckInFailure) -> Self {
        let code = match err {
            CheckInFailure::PetNotFound(_) => ErrorCode::NotFound,
            CheckInFailure::Pricing(_) => ErrorCode::ValidationError,
            CheckInFailure::NoCapacity(_) => ErrorCode::NoCapacity,
            CheckInFailure::QueueEmpty => ErrorCode::QueueEmpty,
        };
        ApiError::new(code, err.to_string())
    }
}

impl From<UndoFailure> for ApiError {
    fn from(err: UndoFailure) -> Self {
        let code = match err {
            UndoFailure::NothingToUndo => ErrorCode::NothingToUndo,
            UndoFailure::BookingNotFound(id) => {
                tracing::error!(booking_id = %id, "Undo record points at a missing booking");
                ErrorCode::NotFound
            }
        };
        ApiError::new(code, err.to_string())
    }
}

impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::Validation(e) => ApiError::new(ErrorCode::ValidationError, e.to_string()),
            CoreError::CheckIn(e) => e.into(),
            CoreError::Undo(e) => e.into(),
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}
