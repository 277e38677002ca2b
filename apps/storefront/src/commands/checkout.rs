//! # Checkout Commands
//!
//! ## Order Placement
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │   CheckoutView::Empty ─────────► nothing to place                       │
//! │                                                                         │
//! │   CheckoutView::Ready ── place_order() ──► processing = true            │
//! │                               │                                         │
//! │                               ├── again while processing ──► BUSY       │
//! │                               │                                         │
//! │                               ▼  sleep(checkout_delay)                  │
//! │                        ┌──────┴───────┐                                 │
//! │              view left │              │ still on the view               │
//! │                        ▼              ▼                                 │
//! │               cart untouched    OrderConfirmation recorded,             │
//! │                                 cart cleared, processing reset,         │
//! │                                 navigate(OrderSuccess)                  │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{debug, info, warn};

use monngon_core::{CartItem, CartTotals, CheckoutSummary, OrderConfirmation, Severity, View};

use crate::error::{ApiError, ApiResult};
use crate::messages;
use crate::state::AppState;
use crate::storefront::Storefront;

/// What the checkout screen renders.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum CheckoutView {
    Empty,
    Ready {
        items: Vec<CartItem>,
        totals: CartTotals,
        /// Subtotal, flat delivery fee and grand total.
        summary: CheckoutSummary,
        processing: bool,
    },
}

pub fn checkout_view(app: &Storefront) -> CheckoutView {
    app.read(|s| {
        if s.cart.is_empty() {
            CheckoutView::Empty
        } else {
            CheckoutView::Ready {
                items: s.cart.items().to_vec(),
                totals: CartTotals::from(&s.cart),
                summary: CheckoutSummary::for_cart(&s.cart),
                processing: s.flows.checkout_processing,
            }
        }
    })
}

/// Starts the simulated order placement.
///
/// ## Errors
/// - `INVALID_STATE` when the cart is empty
/// - `BUSY` when an order is already being processed
pub fn place_order(app: &Storefront) -> ApiResult<()> {
    debug!("place_order command");
    app.surface(start_order(app))
}

fn start_order(app: &Storefront) -> ApiResult<()> {
    let (view, epoch) = app.update(|s| {
        if s.cart.is_empty() {
            return Err(ApiError::invalid_state(messages::CART_EMPTY));
        }
        if s.flows.checkout_processing {
            return Err(ApiError::busy(messages::ORDER_IN_PROGRESS));
        }
        s.flows.checkout_processing = true;
        Ok((s.current_view(), s.view_epoch()))
    })?;

    let delay = app.config().timing.checkout_delay();
    let this = app.clone();
    app.spawn_flow("place_order", view, async move {
        tokio::time::sleep(delay).await;
        this.update(|s| complete_order(s, epoch, Utc::now()));
    });

    Ok(())
}

fn complete_order(state: &mut AppState, epoch: u64, now: DateTime<Utc>) -> Option<OrderConfirmation> {
    if !state.is_current_epoch(epoch) || !state.flows.checkout_processing {
        debug!("Order finished after its view was left, dropping");
        return None;
    }

    state.flows.checkout_processing = false;

    let order = match OrderConfirmation::from_cart(&state.cart, now) {
        Ok(order) => order,
        Err(e) => {
            warn!(error = %e, "Cart emptied while the order was processing");
            state.notify(messages::CART_EMPTY, Severity::Error);
            return None;
        }
    };

    state.cart.clear();
    state.last_order = Some(order.clone());
    state.navigate(View::OrderSuccess);

    info!(
        order_id = %order.order_id,
        items = order.item_count,
        grand_total = %order.grand_total,
        "Order placed"
    );
    Some(order)
}

/// The confirmation shown on the success screen.
pub fn last_order(app: &Storefront) -> Option<OrderConfirmation> {
    app.read(|s| s.last_order.clone())
}
