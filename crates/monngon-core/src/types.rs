//! # Domain Types
//!
//! Catalog types shared by every part of the storefront.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Catalog Types                                   │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Category     │   │   Restaurant    │   │    MenuItem     │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id             │   │  id             │   │  id             │       │
//! │  │  name           │   │  rating 0–5     │   │  price (Money)  │       │
//! │  │  icon           │   │  min ≤ max      │   │  category       │       │
//! │  └─────────────────┘   │  tags (≥ 1)     │   │  popular        │       │
//! │                        └─────────────────┘   └─────────────────┘       │
//! │                                                                         │
//! │  ┌─────────────────┐                                                   │
//! │  │    Severity     │  success | error | info                           │
//! │  └─────────────────┘                                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Catalog entries are created at load and never mutated; the one mutable
//! bit of restaurant data (the favorite flag) lives in the root state.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;

// =============================================================================
// Category
// =============================================================================

/// A browsing category shown on the landing page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Category {
    pub id: String,
    pub name: String,
    /// Emoji shown next to the name.
    pub icon: String,
}

// =============================================================================
// Menu Item
// =============================================================================

/// A dish that can be added to the cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct MenuItem {
    /// Unique within the catalog.
    pub id: String,

    pub name: String,

    /// Price in the smallest currency unit, never negative.
    pub price: Money,

    pub description: String,

    /// Image URL.
    pub image: String,

    /// Menu section ("Phở", "Món kèm", ...).
    pub category: String,

    /// Highlighted with a "popular" badge.
    #[serde(default)]
    pub popular: bool,
}

// =============================================================================
// Restaurant
// =============================================================================

/// A restaurant listed in search results.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Restaurant {
    pub id: String,
    pub name: String,

    /// Average rating, 0.0 to 5.0.
    pub rating: f32,

    pub review_count: u32,

    /// Display label, e.g. "1.2 km".
    pub distance: String,

    /// Display label, e.g. "15-20 min".
    pub delivery_time: String,

    pub min_price: Money,
    pub max_price: Money,

    /// Never empty.
    pub tags: Vec<String>,

    pub image: String,

    /// Seed value of the favorite flag. The live flag is owned by the root state.
    #[serde(default)]
    pub is_favorite: bool,
}

impl Restaurant {
    /// Formats the price band, e.g. "45.000₫ - 85.000₫".
    pub fn price_range(&self) -> String {
        format!("{} - {}", self.min_price, self.max_price)
    }
}

// =============================================================================
// Severity
// =============================================================================

/// How a notification is styled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Success,
    Error,
    #[default]
    Info,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Severity::Success => "success",
            Severity::Error => "error",
            Severity::Info => "info",
        };
        f.write_str(label)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_default_is_info() {
        assert_eq!(Severity::default(), Severity::Info);
    }

    #[test]
    fn test_severity_serializes_snake_case() {
        let json = serde_json::to_string(&Severity::Success).unwrap();
        assert_eq!(json, "\"success\"");
    }

    #[test]
    fn test_menu_item_popular_defaults_to_false() {
        let json = r#"{
            "id": "m9",
            "name": "Trà Đá",
            "price": 3000,
            "description": "",
            "image": "",
            "category": "Nước uống"
        }"#;
        let item: MenuItem = serde_json::from_str(json).unwrap();
        assert!(!item.popular);
        assert_eq!(item.price, Money::from_minor(3_000));
    }
}
