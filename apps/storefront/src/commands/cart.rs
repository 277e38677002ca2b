//! # Cart Commands

use tracing::debug;

use monngon_core::{QuantityChange, Severity};

use crate::error::{ApiError, ApiResult};
use crate::messages;
use crate::state::CartSnapshot;
use crate::storefront::Storefront;

/// Gets the current cart contents and totals.
pub fn get_cart(app: &Storefront) -> CartSnapshot {
    app.read(|s| CartSnapshot::from(&s.cart))
}

/// Navbar badge: sum of quantities.
pub fn cart_badge(app: &Storefront) -> u64 {
    app.read(|s| s.cart.total_quantity())
}

/// Adds one unit of a catalog menu item.
///
/// ## Behavior
/// - Already in cart: quantity + 1
/// - Not in cart: new line with quantity 1
/// - Success toast naming the dish
pub fn add_to_cart(app: &Storefront, item_id: &str) -> ApiResult<CartSnapshot> {
    debug!(item_id = %item_id, "add_to_cart command");

    let result = app.update(|s| {
        let item = s.catalog().menu_item(item_id)?.clone();
        let quantity = s.cart.add_item(&item);
        debug!(item_id = %item.id, quantity, "Item added to cart");
        s.notify(messages::added_to_cart(&item.name), Severity::Success);
        Ok::<CartSnapshot, ApiError>(CartSnapshot::from(&s.cart))
    });

    app.surface(result)
}

/// Changes a line's quantity by `delta`.
///
/// ## Behavior
/// - Result ≤ 0: line removed
/// - Unknown id: nothing happens
pub fn update_cart_item(app: &Storefront, item_id: &str, delta: i64) -> CartSnapshot {
    debug!(item_id = %item_id, delta, "update_cart_item command");

    app.update(|s| {
        match s.cart.update_quantity(item_id, delta) {
            QuantityChange::Absent => debug!(item_id = %item_id, "Quantity change on absent line ignored"),
            QuantityChange::Removed => debug!(item_id = %item_id, "Line dropped at zero"),
            QuantityChange::Updated(quantity) => debug!(item_id = %item_id, quantity, "Quantity updated"),
        }
        CartSnapshot::from(&s.cart)
    })
}

/// Removes a line from the cart.
pub fn remove_from_cart(app: &Storefront, item_id: &str) -> CartSnapshot {
    debug!(item_id = %item_id, "remove_from_cart command");

    app.update(|s| {
        if s.cart.remove_item(item_id).is_some() {
            s.notify(messages::CART_ITEM_REMOVED, Severity::Info);
        }
        CartSnapshot::from(&s.cart)
    })
}
