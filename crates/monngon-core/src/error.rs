//! # Error Types
//!
//! Domain-specific error types for monngon-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  monngon-core errors (this file)                                       │
//! │  ├── CoreError        - Lookup failures, rule violations               │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  storefront errors (app crate)                                         │
//! │  └── ApiError         - What the presentation layer sees               │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → ApiError → Notification           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Domain errors raised by the core aggregates.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Menu item id not present in the catalog (or the merchant's copy).
    #[error("Menu item not found: {0}")]
    MenuItemNotFound(String),

    #[error("Restaurant not found: {0}")]
    RestaurantNotFound(String),

    /// Booking id not present in the merchant's booking list.
    #[error("Booking not found: {0}")]
    BookingNotFound(u32),

    /// An order was requested for an empty cart.
    #[error("Cart is empty")]
    EmptyCart,

    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// Raised before any state changes; the action is blocked.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or blank.
    #[error("{field} is required")]
    Required { field: String },

    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    #[error("{field} must not be negative")]
    Negative { field: String },

    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: f32, max: f32 },

    /// Lower bound of a pair is above the upper bound.
    #[error("{low} must not exceed {high}")]
    InvertedRange { low: String, high: String },

    /// Identifier appears more than once in a collection.
    #[error("Duplicate {field}: {value}")]
    Duplicate { field: String, value: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CoreError::BookingNotFound(7);
        assert_eq!(err.to_string(), "Booking not found: 7");

        let err = CoreError::MenuItemNotFound("m42".to_string());
        assert_eq!(err.to_string(), "Menu item not found: m42");
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "email".to_string(),
        };
        assert_eq!(err.to_string(), "email is required");

        let err = ValidationError::TooLong {
            field: "name".to_string(),
            max: 80,
        };
        assert_eq!(err.to_string(), "name must be at most 80 characters");

        let err = ValidationError::Duplicate {
            field: "menu item id".to_string(),
            value: "m1".to_string(),
        };
        assert_eq!(err.to_string(), "Duplicate menu item id: m1");
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::Required {
            field: "password".to_string(),
        };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
    }
}
