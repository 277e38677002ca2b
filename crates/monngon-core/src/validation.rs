//! # Validation Module
//!
//! Input checks run before any state changes.
//!
//! ## Where Validation Happens
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Presentation                                                  │
//! │  └── Disables controls (empty form, processing order)                   │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Storefront command                                            │
//! │  └── THIS MODULE: required fields, lengths                              │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Aggregate                                                     │
//! │  └── Cart/booking invariants                                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use monngon_core::validation::validate_credentials;
//!
//! assert!(validate_credentials("admin@food.com", "123456").is_ok());
//! assert!(validate_credentials("", "").is_err());
//! ```

use std::collections::HashSet;

use crate::error::ValidationError;
use crate::money::Money;
use crate::types::{MenuItem, Restaurant};
use crate::MAX_DISPLAY_NAME_LEN;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Longest free-text prompt accepted by the suggestion assistant.
pub const MAX_PROMPT_LEN: usize = 500;

/// Highest restaurant rating.
pub const MAX_RATING: f32 = 5.0;

fn required(field: &str, value: &str) -> ValidationResult<()> {
    if value.trim().is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }
    Ok(())
}

/// Validates a login form.
///
/// ## Rules
/// - Email must not be blank
/// - Password must not be blank
///
/// No format or credential check happens: any non-empty pair is accepted.
pub fn validate_credentials(email: &str, password: &str) -> ValidationResult<()> {
    required("email", email)?;
    required("password", password)?;
    Ok(())
}

/// Validates a profile display name.
///
/// ## Returns
/// The trimmed name.
pub fn validate_display_name(name: &str) -> ValidationResult<String> {
    let name = name.trim();
    required("name", name)?;

    if name.chars().count() > MAX_DISPLAY_NAME_LEN {
        return Err(ValidationError::TooLong {
            field: "name".to_string(),
            max: MAX_DISPLAY_NAME_LEN,
        });
    }

    Ok(name.to_string())
}

/// Validates a suggestion prompt.
///
/// ## Returns
/// The trimmed prompt.
pub fn validate_prompt(prompt: &str) -> ValidationResult<String> {
    let prompt = prompt.trim();
    required("prompt", prompt)?;

    if prompt.chars().count() > MAX_PROMPT_LEN {
        return Err(ValidationError::TooLong {
            field: "prompt".to_string(),
            max: MAX_PROMPT_LEN,
        });
    }

    Ok(prompt.to_string())
}

/// Catalog prices are non-negative.
pub fn validate_price(price: Money) -> ValidationResult<()> {
    if price.is_negative() {
        return Err(ValidationError::Negative {
            field: "price".to_string(),
        });
    }
    Ok(())
}

/// Ratings run from 0 to 5 stars.
pub fn validate_rating(rating: f32) -> ValidationResult<()> {
    if !(0.0..=MAX_RATING).contains(&rating) {
        return Err(ValidationError::OutOfRange {
            field: "rating".to_string(),
            min: 0.0,
            max: MAX_RATING,
        });
    }
    Ok(())
}

/// Every id in `ids` must be distinct.
pub fn validate_unique_ids<'a, I>(field: &str, ids: I) -> ValidationResult<()>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(ValidationError::Duplicate {
                field: field.to_string(),
                value: id.to_string(),
            });
        }
    }
    Ok(())
}

/// Validates a catalog menu item.
pub fn validate_menu_item(item: &MenuItem) -> ValidationResult<()> {
    required("menu item id", &item.id)?;
    required("menu item name", &item.name)?;
    validate_price(item.price)
}

/// Validates a catalog restaurant.
///
/// ## Rules
/// - Id and name must not be blank
/// - Rating within 0 to 5
/// - Non-negative prices with `min_price <= max_price`
/// - At least one tag
pub fn validate_restaurant(restaurant: &Restaurant) -> ValidationResult<()> {
    required("restaurant id", &restaurant.id)?;
    required("restaurant name", &restaurant.name)?;
    validate_rating(restaurant.rating)?;
    validate_price(restaurant.min_price)?;
    validate_price(restaurant.max_price)?;

    if restaurant.min_price > restaurant.max_price {
        return Err(ValidationError::InvertedRange {
            low: "min_price".to_string(),
            high: "max_price".to_string(),
        });
    }

    if restaurant.tags.is_empty() {
        return Err(ValidationError::Required {
            field: "tags".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
