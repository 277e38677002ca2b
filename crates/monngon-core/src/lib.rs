//! # monngon-core: Pure Domain Logic for the Món Ngon Storefront
//!
//! Everything the storefront knows about restaurants, carts, toasts,
//! sessions, screens and the merchant dashboard, with zero I/O.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Món Ngon Storefront                                 │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Presentation (console / UI)                  │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ commands                               │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │        storefront app: AppState, flows, task registry           │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ monngon-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │   catalog   cart   notification   session   view   merchant    │   │
//! │  │   money     order  validation     error     types              │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO TIMERS • NO ASYNC                                 │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`catalog`] - Static restaurants, categories and menu
//! - [`cart`] - Cart aggregate with derived totals
//! - [`notification`] - Toast queue, optionally capped
//! - [`session`] - Guest / signed-in display name
//! - [`view`] - Screen enumeration and navigator
//! - [`merchant`] - Dashboard menu copy and booking state machine
//! - [`order`] - Order confirmation snapshot
//! - [`money`] - Integer đồng amounts
//! - [`validation`] - Form input rules
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use monngon_core::{Cart, Catalog};
//!
//! let catalog = Catalog::seeded().unwrap();
//! let mut cart = Cart::new();
//!
//! let pho = catalog.menu_item("m1").unwrap();
//! cart.add_item(pho);
//! cart.add_item(pho);
//!
//! assert_eq!(cart.total().to_string(), "130.000₫");
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod catalog;
pub mod error;
pub mod merchant;
pub mod money;
pub mod notification;
pub mod order;
pub mod session;
pub mod types;
pub mod validation;
pub mod view;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use cart::{Cart, CartItem, CartTotals, QuantityChange};
pub use catalog::{Catalog, DEFAULT_MENU_CATEGORY};
pub use error::{CoreError, CoreResult, ValidationError};
pub use merchant::{Booking, BookingAction, BookingStatus, BookingTransition, MerchantState, MerchantTab};
pub use money::Money;
pub use notification::{Pushed, Toast, ToastId, ToastQueue};
pub use order::{CheckoutSummary, OrderConfirmation};
pub use session::Session;
pub use types::*;
pub use view::{Navigator, View};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Cap on toasts shown at once. Unbounded unless configured, so every
/// toast lives out its full TTL.
pub const DEFAULT_MAX_TOASTS: Option<usize> = None;

/// How long a toast stays up (milliseconds).
pub const DEFAULT_TOAST_TTL_MS: u64 = 3_000;

/// Simulated login round-trip (milliseconds).
pub const DEFAULT_LOGIN_DELAY_MS: u64 = 1_500;

/// Simulated order placement (milliseconds).
pub const DEFAULT_CHECKOUT_DELAY_MS: u64 = 2_000;

/// Simulated AI suggestion latency (milliseconds).
pub const DEFAULT_SUGGESTION_DELAY_MS: u64 = 1_500;

/// Flat delivery fee added at checkout: 15.000₫.
pub const DELIVERY_FEE: Money = Money::from_minor(15_000);

/// Longest display name accepted from the profile form.
pub const MAX_DISPLAY_NAME_LEN: usize = 80;

/// Name every successful demo login signs in as.
pub const DEMO_DISPLAY_NAME: &str = "Nguyễn Văn Thực Thần";
