//! # Order Confirmation
//!
//! The receipt produced when a checkout completes. There is no order
//! history: the storefront keeps only the most recent confirmation for the
//! success screen.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use crate::cart::Cart;
use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::DELIVERY_FEE;

/// Money lines of the checkout summary panel.
///
/// ```text
/// Tạm tính          subtotal       Σ price × quantity
/// Phí giao hàng     delivery_fee   flat DELIVERY_FEE
/// Tổng thanh toán   grand_total    subtotal + delivery_fee
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutSummary {
    pub subtotal: Money,
    pub delivery_fee: Money,
    pub grand_total: Money,
}

impl CheckoutSummary {
    pub fn for_cart(cart: &Cart) -> Self {
        let subtotal = cart.total();
        CheckoutSummary {
            subtotal,
            delivery_fee: DELIVERY_FEE,
            grand_total: subtotal + DELIVERY_FEE,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct OrderConfirmation {
    /// Order number (UUID v4).
    pub order_id: String,
    pub item_count: usize,
    pub total_quantity: u64,
    pub subtotal: Money,
    pub delivery_fee: Money,
    pub grand_total: Money,
    #[ts(as = "String")]
    pub placed_at: DateTime<Utc>,
}

impl OrderConfirmation {
    /// Snapshots a cart at the moment the order goes through.
    ///
    /// The cart itself is left untouched; clearing it is the caller's job.
    pub fn from_cart(cart: &Cart, placed_at: DateTime<Utc>) -> CoreResult<Self> {
        if cart.is_empty() {
            return Err(CoreError::EmptyCart);
        }

        let summary = CheckoutSummary::for_cart(cart);
        Ok(OrderConfirmation {
            order_id: Uuid::new_v4().to_string(),
            item_count: cart.item_count(),
            total_quantity: cart.total_quantity(),
            subtotal: summary.subtotal,
            delivery_fee: summary.delivery_fee,
            grand_total: summary.grand_total,
            placed_at,
        })
    }

    /// Short code shown to the customer, e.g. `#3F2A9C1B`.
    pub fn short_code(&self) -> String {
        let head: String = self.order_id.chars().filter(|c| *c != '-').take(8).collect();
        format!("#{}", head.to_uppercase())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    #[test]
    fn test_confirmation_snapshots_cart() {
        let catalog = Catalog::seeded().unwrap();
        let mut cart = Cart::new();
        cart.add_item(catalog.menu_item("m1").unwrap());
        cart.add_item(catalog.menu_item("m1").unwrap());
        cart.add_item(catalog.menu_item("m3").unwrap());

        let now = Utc::now();
        let order = OrderConfirmation::from_cart(&cart, now).unwrap();

        assert_eq!(order.item_count, 2);
        assert_eq!(order.total_quantity, 3);
        assert_eq!(order.subtotal, Money::from_minor(135_000));
        assert_eq!(order.delivery_fee, DELIVERY_FEE);
        assert_eq!(order.grand_total, Money::from_minor(150_000));
        assert_eq!(order.placed_at, now);
        assert!(Uuid::parse_str(&order.order_id).is_ok());
        assert_eq!(cart.item_count(), 2);
    }

    #[test]
    fn test_summary_adds_delivery_fee() {
        let catalog = Catalog::seeded().unwrap();
        let mut cart = Cart::new();
        cart.add_item(catalog.menu_item("m1").unwrap());
        cart.add_item(catalog.menu_item("m3").unwrap());

        let summary = CheckoutSummary::for_cart(&cart);
        assert_eq!(summary.subtotal.to_string(), "70.000₫");
        assert_eq!(summary.delivery_fee.to_string(), "15.000₫");
        assert_eq!(summary.grand_total.to_string(), "85.000₫");
    }

    #[test]
    fn test_empty_cart_cannot_be_ordered() {
        assert!(matches!(
            OrderConfirmation::from_cart(&Cart::new(), Utc::now()),
            Err(CoreError::EmptyCart)
        ));
    }

    #[test]
    fn test_order_ids_are_unique() {
        let catalog = Catalog::seeded().unwrap();
        let mut cart = Cart::new();
        cart.add_item(catalog.menu_item("m2").unwrap());

        let a = OrderConfirmation::from_cart(&cart, Utc::now()).unwrap();
        let b = OrderConfirmation::from_cart(&cart, Utc::now()).unwrap();
        assert_ne!(a.order_id, b.order_id);
    }

    #[test]
    fn test_short_code() {
        let order = OrderConfirmation {
            order_id: "3f2a9c1b-0000-4000-8000-000000000000".to_string(),
            item_count: 1,
            total_quantity: 1,
            subtotal: Money::from_minor(5_000),
            delivery_fee: DELIVERY_FEE,
            grand_total: Money::from_minor(20_000),
            placed_at: Utc::now(),
        };
        assert_eq!(order.short_code(), "#3F2A9C1B");
    }
}
