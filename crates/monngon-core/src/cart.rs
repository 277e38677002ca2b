//! # Cart Aggregate
//!
//! The collection of menu items the customer intends to order.
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Operations                                      │
//! │                                                                         │
//! │  Customer Action          Operation                 Cart Change         │
//! │  ───────────────          ─────────                 ───────────         │
//! │                                                                         │
//! │  "Thêm" on a dish ──────► add_item() ─────────────► qty + 1 / insert    │
//! │                                                                         │
//! │  + / - on a line ───────► update_quantity(±1) ────► qty ± 1, drop at 0  │
//! │                                                                         │
//! │  Trash icon ────────────► remove_item() ──────────► line removed        │
//! │                                                                         │
//! │  Order placed / logout ─► clear() ────────────────► empty               │
//! │                                                                         │
//! │  Totals are derived from the lines on every call, never cached.         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;
use crate::types::MenuItem;

/// A menu item in the cart, with its quantity.
///
/// The menu item is copied when first added; later catalog edits do not
/// reach lines already in the cart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    #[serde(flatten)]
    pub item: MenuItem,

    /// Always at least 1 while the line is in the cart.
    pub quantity: u32,

    #[ts(as = "String")]
    pub added_at: DateTime<Utc>,
}

impl CartItem {
    fn new(item: &MenuItem) -> Self {
        CartItem {
            item: item.clone(),
            quantity: 1,
            added_at: Utc::now(),
        }
    }

    pub fn id(&self) -> &str {
        &self.item.id
    }

    /// Unit price × quantity.
    pub fn line_total(&self) -> Money {
        self.item.price.multiply_quantity(self.quantity)
    }
}

/// Outcome of [`Cart::update_quantity`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuantityChange {
    /// No line with that id.
    Absent,
    /// Line kept with the new quantity.
    Updated(u32),
    /// Quantity reached zero and the line was dropped.
    Removed,
}

/// The shopping cart.
///
/// ## Invariants
/// - Lines are unique by menu item id (adding again increases quantity)
/// - No line ever has quantity 0
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cart {
    items: Vec<CartItem>,

    /// When the cart was created/last cleared.
    created_at: DateTime<Utc>,
}

impl Default for Cart {
    fn default() -> Self {
        Self::new()
    }
}

impl Cart {
    pub fn new() -> Self {
        Cart {
            items: Vec::new(),
            created_at: Utc::now(),
        }
    }

    /// Adds one unit of a menu item.
    ///
    /// ## Returns
    /// The line's quantity after the add.
    pub fn add_item(&mut self, item: &MenuItem) -> u32 {
        if let Some(line) = self.items.iter_mut().find(|l| l.item.id == item.id) {
            line.quantity = line.quantity.saturating_add(1);
            return line.quantity;
        }

        self.items.push(CartItem::new(item));
        1
    }

    /// Adds `delta` to a line's quantity, floored at zero.
    ///
    /// A line that reaches zero is removed in the same call.
    pub fn update_quantity(&mut self, id: &str, delta: i64) -> QuantityChange {
        let Some(index) = self.items.iter().position(|l| l.item.id == id) else {
            return QuantityChange::Absent;
        };

        let current = i64::from(self.items[index].quantity);
        let next = current.saturating_add(delta).clamp(0, i64::from(u32::MAX));

        if next == 0 {
            self.items.remove(index);
            return QuantityChange::Removed;
        }

        // clamped to the u32 range above
        let next = next as u32;
        self.items[index].quantity = next;
        QuantityChange::Updated(next)
    }

    /// Removes a line by menu item id.
    pub fn remove_item(&mut self, id: &str) -> Option<CartItem> {
        let index = self.items.iter().position(|l| l.item.id == id)?;
        Some(self.items.remove(index))
    }

    pub fn clear(&mut self) {
        self.items.clear();
        self.created_at = Utc::now();
    }

    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    pub fn get(&self, id: &str) -> Option<&CartItem> {
        self.items.iter().find(|l| l.item.id == id)
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Number of distinct lines.
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Sum of quantities (the navbar badge).
    pub fn total_quantity(&self) -> u64 {
        self.items.iter().map(|l| u64::from(l.quantity)).sum()
    }

    /// Sum of price × quantity over all lines.
    pub fn total(&self) -> Money {
        self.items.iter().map(CartItem::line_total).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Cart totals summary for responses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CartTotals {
    pub item_count: usize,
    pub total_quantity: u64,
    pub total: Money,
}

impl From<&Cart> for CartTotals {
    fn from(cart: &Cart) -> Self {
        CartTotals {
            item_count: cart.item_count(),
            total_quantity: cart.total_quantity(),
            total: cart.total(),
        }
    }
}
