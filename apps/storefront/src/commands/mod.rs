//! # Storefront Commands
//!
//! Everything the presentation layer can ask the storefront to do.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs            ◄─── You are here (exports)
//! ├── nav.rs            ◄─── View switching
//! ├── catalog.rs        ◄─── Restaurants, menu, favorites
//! ├── cart.rs           ◄─── Cart manipulation
//! ├── checkout.rs       ◄─── Checkout screen and order placement
//! ├── auth.rs           ◄─── Login, logout, profile
//! ├── merchant.rs       ◄─── Merchant dashboard
//! ├── assistant.rs      ◄─── AI dish suggestion
//! └── notifications.rs  ◄─── Toast listing and dismissal
//! ```
//!
//! ## How Commands Work
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  fn add_to_cart(app: &Storefront, item_id: &str)                        │
//! │        -> ApiResult<CartSnapshot>                                       │
//! │         │                                                               │
//! │         ├── Ok(..)   state updated, success/info toast pushed           │
//! │         └── Err(..)  state untouched, error surfaced as a toast too     │
//! │                                                                         │
//! │  Flows (login, place_order, request_suggestion) return as soon as the   │
//! │  flow is started; the outcome lands in state when the task finishes.    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod assistant;
pub mod auth;
pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod merchant;
pub mod nav;
pub mod notifications;

#[cfg(test)]
pub(crate) mod test_support {
    use crate::state::StorefrontConfig;
    use crate::storefront::Storefront;
    use monngon_core::Toast;

    pub fn storefront() -> Storefront {
        Storefront::new(StorefrontConfig::default()).unwrap()
    }

    pub fn toasts(app: &Storefront) -> Vec<Toast> {
        app.read(|s| s.toasts().to_vec())
    }

    pub fn last_message(app: &Storefront) -> Option<String> {
        toasts(app).last().map(|t| t.message.clone())
    }
}
