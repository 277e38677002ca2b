//! # API Error Types
//!
//! What the presentation layer sees when a command fails.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │   ValidationError ──► CoreError ──► ApiError ──► Toast                  │
//! │                                        │                                │
//! │                                        └──► Err(..) returned to caller  │
//! │                                                                         │
//! │   Severity of the toast follows the code:                               │
//! │     UNAVAILABLE_FEATURE ──► info                                        │
//! │     everything else     ──► error                                       │
//! │                                                                         │
//! │   No error is fatal. State is never left half-updated.                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::Serialize;

use monngon_core::{CoreError, Severity, ValidationError};

use crate::messages;

/// Result alias for command functions.
pub type ApiResult<T> = Result<T, ApiError>;

/// API error returned from storefront commands.
///
/// ## Serialization
/// ```json
/// {
///   "code": "NOT_FOUND",
///   "message": "Không tìm thấy món ăn: m9"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    /// Machine-readable error code
    pub code: ErrorCode,

    /// User-facing message, shown verbatim in the toast
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Form input rejected
    Validation,

    /// Unknown restaurant, menu item or booking
    NotFound,

    /// Feature shown in the UI but not built yet
    UnavailableFeature,

    /// The same flow is already in progress
    Busy,

    /// Command not applicable in the current view/state
    InvalidState,
}

impl ErrorCode {
    /// Toast styling for errors with this code.
    pub const fn severity(&self) -> Severity {
        match self {
            ErrorCode::UnavailableFeature => Severity::Info,
            _ => Severity::Error,
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

    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::Validation, message)
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::NotFound, message)
    }

    pub fn unavailable(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::UnavailableFeature, message)
    }

    pub fn busy(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::Busy, message)
    }

    pub fn invalid_state(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::InvalidState, message)
    }

    pub fn severity(&self) -> Severity {
        self.code.severity()
    }
}

/// Converts core errors to API errors.
impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::MenuItemNotFound(id) => ApiError::not_found(messages::menu_item_not_found(&id)),
            CoreError::RestaurantNotFound(id) => {
                ApiError::not_found(messages::restaurant_not_found(&id))
            }
            CoreError::BookingNotFound(id) => ApiError::not_found(messages::booking_not_found(id)),
            CoreError::EmptyCart => ApiError::invalid_state(messages::CART_EMPTY),
            CoreError::Validation(e) => ApiError::from(e),
        }
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        ApiError::validation(err.to_string())
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}
